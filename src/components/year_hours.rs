//! Year Hours Component
//!
//! The per-year hour inputs of one personnel row: one numeric input per
//! resolved year (or a single year-less box while the date range is invalid),
//! plus the "same every year" checkbox that keeps the row in sync from its
//! first input.

use leptos::prelude::*;

use crate::store::{set_hour_value, set_same_each_year, use_form_store, FormStateStoreFields, HourSlot};

#[component]
pub fn YearHours(row_id: u32) -> impl IntoView {
    let store = use_form_store();

    let slots = move || {
        store
            .personnel()
            .get()
            .into_iter()
            .find(|row| row.id == row_id)
            .map(|row| row.hours)
            .unwrap_or_default()
    };
    let same_each_year = move || {
        store
            .personnel()
            .get()
            .into_iter()
            .find(|row| row.id == row_id)
            .map(|row| row.same_each_year)
            .unwrap_or(false)
    };

    view! {
        <div class="year-hours">
            <For
                each=slots
                key=|slot| slot.year
                children=move |slot: HourSlot| {
                    let year = slot.year;
                    let value = move || {
                        store
                            .personnel()
                            .get()
                            .into_iter()
                            .find(|row| row.id == row_id)
                            .and_then(|row| {
                                row.hours.iter().find(|s| s.year == year).map(|s| s.value.clone())
                            })
                            .unwrap_or_default()
                    };
                    view! {
                        <div class="year-hours-slot">
                            {year.map(|y| view! { <span class="year-label">{y}</span> })}
                            <input
                                type="number"
                                min="0"
                                placeholder="Hours"
                                prop:value=value
                                on:input=move |ev| {
                                    set_hour_value(
                                        &mut store.personnel().write(),
                                        row_id,
                                        year,
                                        &event_target_value(&ev),
                                    );
                                }
                            />
                        </div>
                    }
                }
            />
        </div>
        <label class="same-each-year">
            <input
                type="checkbox"
                prop:checked=same_each_year
                on:change=move |ev| {
                    set_same_each_year(
                        &mut store.personnel().write(),
                        row_id,
                        event_target_checked(&ev),
                    );
                }
            />
            "Same every year"
        </label>
    }
}
