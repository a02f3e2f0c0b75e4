//! UI Components
//!
//! Reusable Leptos components.

mod cost_section;
mod grant_form;
mod login_page;
mod personnel_table;
mod settings_page;
mod signup_modal;
mod travel_section;
mod year_hours;
mod year_select;

pub use cost_section::CostSection;
pub use grant_form::GrantForm;
pub use login_page::LoginPage;
pub use personnel_table::PersonnelTable;
pub use settings_page::SettingsPage;
pub use signup_modal::SignupModal;
pub use travel_section::TravelSection;
pub use year_hours::YearHours;
pub use year_select::YearSelect;
