//! Year Select Component
//!
//! Shared "Select Year" dropdown populated from the resolved year set. Used by
//! the travel and cost sections; a selection that survives a range change is
//! kept, one that falls out of the set is cleared by the retarget pass.

use leptos::prelude::*;

#[component]
pub fn YearSelect(
    years: Memo<Vec<i32>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="travel-year"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"Select Year"</option>
            <For
                each=move || years.get()
                key=|year| *year
                children=move |year| {
                    view! { <option value=year.to_string()>{year}</option> }
                }
            />
        </select>
    }
}
