//! Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All repeating
//! sections of the award form live here as typed row vectors; the view is a
//! pure function of this state, so add/remove/retarget are plain mutations.

use leptos::prelude::*;
use reactive_stores::{Store, Subfield};

/// Hours entered for one calendar year of a personnel row, kept as the raw
/// input string. `year` is `None` for the single fallback slot shown while no
/// valid date range has been entered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HourSlot {
    pub year: Option<i32>,
    pub value: String,
}

/// One personnel row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonnelRow {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub same_each_year: bool,
    pub rate: String,
    pub hours: Vec<HourSlot>,
}

/// One domestic or international travel entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TravelEntry {
    pub id: u32,
    pub description: String,
    pub total_amount: String,
    pub year: String,
}

/// One materials / equipment / other-direct-costs entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostEntry {
    pub id: u32,
    pub cost: String,
    pub description: String,
    pub year: String,
}

/// Award form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub personnel: Vec<PersonnelRow>,
    pub domestic_travel: Vec<TravelEntry>,
    pub international_travel: Vec<TravelEntry>,
    pub materials: Vec<CostEntry>,
    pub equipment: Vec<CostEntry>,
    pub other_costs: Vec<CostEntry>,
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// A store handle to one section's entry vector, so travel and cost sections
/// can share a component across their two / three instances.
pub type EntryList<T> = Subfield<Store<FormState>, FormState, Vec<T>>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Personnel operations
// ========================

/// Hour slots for the given year set: one slot per year, or a single
/// year-less fallback slot when the set is empty.
pub fn hour_slots(years: &[i32]) -> Vec<HourSlot> {
    if years.is_empty() {
        vec![HourSlot::default()]
    } else {
        years
            .iter()
            .map(|&year| HourSlot {
                year: Some(year),
                value: String::new(),
            })
            .collect()
    }
}

/// A fresh personnel row with empty fields and slots for the current years.
pub fn blank_personnel_row(id: u32, years: &[i32]) -> PersonnelRow {
    PersonnelRow {
        id,
        hours: hour_slots(years),
        ..Default::default()
    }
}

/// Remove a personnel row by id, refusing to drop below one row.
pub fn remove_personnel(rows: &mut Vec<PersonnelRow>, id: u32) {
    if rows.len() > 1 {
        rows.retain(|row| row.id != id);
    }
}

/// Rebuild every row's hour slots for a new year set, carrying values by year
/// identity: a 2024 value stays on 2024 whether or not the range shifted
/// around it. Values for years that left the set are dropped. A value sitting
/// in the year-less fallback slot seeds the first real year when a valid
/// range appears, and vice versa when the range is cleared.
pub fn retarget_hours(rows: &mut [PersonnelRow], years: &[i32]) {
    for row in rows.iter_mut() {
        let mut slots = hour_slots(years);
        for slot in slots.iter_mut() {
            if let Some(previous) = row.hours.iter().find(|old| old.year == slot.year) {
                slot.value = previous.value.clone();
            }
        }
        // Seed across the fallback boundary: entering a valid range carries
        // the year-less value onto the first year, clearing the range carries
        // the first year's value back. Between two real ranges, values only
        // survive by year identity.
        let was_fallback = row.hours.len() == 1 && row.hours[0].year.is_none();
        let is_fallback = years.is_empty();
        if (was_fallback || is_fallback) && slots.iter().all(|slot| slot.value.is_empty()) {
            if let (Some(first), Some(old_first)) = (slots.first_mut(), row.hours.first()) {
                first.value = old_first.value.clone();
            }
        }
        row.hours = slots;
    }
}

/// Copy the first slot's value into every other slot of the row.
pub fn sync_row_hours(row: &mut PersonnelRow) {
    let Some(first) = row.hours.first().map(|slot| slot.value.clone()) else {
        return;
    };
    for slot in row.hours.iter_mut().skip(1) {
        slot.value = first.clone();
    }
}

/// Set one hour slot, identified by its year. While "same every year" is
/// checked, an edit to the first slot propagates to the rest of the row.
pub fn set_hour_value(rows: &mut [PersonnelRow], row_id: u32, year: Option<i32>, value: &str) {
    let Some(row) = rows.iter_mut().find(|row| row.id == row_id) else {
        return;
    };
    let is_first = row.hours.first().map(|slot| slot.year) == Some(year);
    if let Some(slot) = row.hours.iter_mut().find(|slot| slot.year == year) {
        slot.value = value.to_string();
    }
    if is_first && row.same_each_year {
        sync_row_hours(row);
    }
}

/// Toggle a row's "same every year" checkbox. Turning it on copies the first
/// slot across the row once; turning it off leaves all values in place.
pub fn set_same_each_year(rows: &mut [PersonnelRow], row_id: u32, checked: bool) {
    let Some(row) = rows.iter_mut().find(|row| row.id == row_id) else {
        return;
    };
    row.same_each_year = checked;
    if checked {
        sync_row_hours(row);
    }
}

/// Apply an edit to one personnel row by id.
pub fn update_personnel(rows: &mut [PersonnelRow], row_id: u32, edit: impl FnOnce(&mut PersonnelRow)) {
    if let Some(row) = rows.iter_mut().find(|row| row.id == row_id) {
        edit(row);
    }
}

/// Row total: sum of all parseable hour values times the parseable rate.
/// Unparseable fields contribute zero.
pub fn row_total(row: &PersonnelRow) -> f64 {
    let rate = parse_number(&row.rate);
    let hours: f64 = row.hours.iter().map(|slot| parse_number(&slot.value)).sum();
    hours * rate
}

/// Parse a numeric form field, treating blanks and garbage as zero.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

// ========================
// Travel / cost operations
// ========================

/// Clear any section year selection that is no longer in the year set,
/// keeping selections that survived the range change.
pub fn retarget_year_choice(year: &mut String, years: &[i32]) {
    if year.is_empty() {
        return;
    }
    let still_valid = year
        .parse::<i32>()
        .map(|chosen| years.contains(&chosen))
        .unwrap_or(false);
    if !still_valid {
        year.clear();
    }
}

pub fn retarget_travel_years(entries: &mut [TravelEntry], years: &[i32]) {
    for entry in entries.iter_mut() {
        retarget_year_choice(&mut entry.year, years);
    }
}

pub fn retarget_cost_years(entries: &mut [CostEntry], years: &[i32]) {
    for entry in entries.iter_mut() {
        retarget_year_choice(&mut entry.year, years);
    }
}

/// Apply an edit to one travel entry by id.
pub fn update_travel(entries: &mut [TravelEntry], id: u32, edit: impl FnOnce(&mut TravelEntry)) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
        edit(entry);
    }
}

/// Apply an edit to one cost entry by id.
pub fn update_cost(entries: &mut [CostEntry], id: u32, edit: impl FnOnce(&mut CostEntry)) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
        edit(entry);
    }
}
