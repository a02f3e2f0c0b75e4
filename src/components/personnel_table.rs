//! Personnel Table Component
//!
//! Senior/key personnel rows with add/remove controls. Each row owns its
//! per-year hour inputs (see YearHours) and a reactive total of
//! `hours × rate`. The table never drops below one row.

use leptos::prelude::*;

use crate::components::YearHours;
use crate::context::FormContext;
use crate::store::{
    blank_personnel_row, remove_personnel, row_total, update_personnel, use_form_store,
    FormStateStoreFields,
};

const POSITIONS: &[&str] = &[
    "Principal Investigator",
    "Co-Investigator",
    "Postdoctoral Researcher",
    "Graduate Student",
    "Undergraduate Student",
    "Technician",
    "Other",
];

#[component]
pub fn PersonnelTable() -> impl IntoView {
    let store = use_form_store();
    let ctx = expect_context::<FormContext>();

    let on_add = move |_| {
        let id = ctx.alloc_id();
        let years = ctx.years.get_untracked();
        store.personnel().write().push(blank_personnel_row(id, &years));
    };

    view! {
        <section class="form-section personnel-section">
            <h2>"Senior/Key Personnel"</h2>
            <table class="personnel-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Position"</th>
                        <th>"Hours per Year"</th>
                        <th>"Rate ($/hr)"</th>
                        <th>"Total ($)"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody class="personnel-rows">
                    <For
                        each=move || store.personnel().get()
                        key=|row| row.id
                        children=move |row| view! { <PersonnelRowView row_id=row.id /> }
                    />
                </tbody>
            </table>
            <button type="button" class="add-btn" on:click=on_add>
                "+ Add Personnel"
            </button>
        </section>
    }
}

#[component]
fn PersonnelRowView(row_id: u32) -> impl IntoView {
    let store = use_form_store();

    let row = move || {
        store
            .personnel()
            .get()
            .into_iter()
            .find(|row| row.id == row_id)
            .unwrap_or_default()
    };
    let is_last_row = move || store.personnel().get().len() <= 1;

    let on_remove = move |_| {
        remove_personnel(&mut store.personnel().write(), row_id);
    };

    view! {
        <tr class="person-row">
            <td>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || row().name
                    on:input=move |ev| {
                        update_personnel(&mut store.personnel().write(), row_id, |r| {
                            r.name = event_target_value(&ev);
                        });
                    }
                />
            </td>
            <td>
                <select
                    prop:value=move || row().position
                    on:change=move |ev| {
                        update_personnel(&mut store.personnel().write(), row_id, |r| {
                            r.position = event_target_value(&ev);
                        });
                    }
                >
                    <option value="">"Select Position"</option>
                    {POSITIONS
                        .iter()
                        .map(|position| view! { <option value=*position>{*position}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <YearHours row_id=row_id />
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    class="person-rate"
                    placeholder="Rate"
                    prop:value=move || row().rate
                    on:input=move |ev| {
                        update_personnel(&mut store.personnel().write(), row_id, |r| {
                            r.rate = event_target_value(&ev);
                        });
                    }
                />
            </td>
            <td>
                <input
                    type="text"
                    class="person-total"
                    readonly
                    prop:value=move || format!("{:.2}", row_total(&row()))
                />
            </td>
            <td>
                <button
                    type="button"
                    class="person-remove"
                    disabled=is_last_row
                    on:click=on_remove
                >
                    "Remove"
                </button>
            </td>
        </tr>
    }
}
