//! Cost Section Component
//!
//! Shared by materials & supplies, equipment, and other direct costs: a list
//! of cost/description entries with a year dropdown, backed by whichever
//! store subfield the parent hands in.

use leptos::prelude::*;

use crate::components::YearSelect;
use crate::context::FormContext;
use crate::store::{update_cost, CostEntry, EntryList};

#[component]
pub fn CostSection(
    #[prop(into)] title: String,
    #[prop(into)] add_label: String,
    entries: EntryList<CostEntry>,
) -> impl IntoView {
    let ctx = expect_context::<FormContext>();

    let on_add = move |_| {
        let id = ctx.alloc_id();
        entries.write().push(CostEntry {
            id,
            ..Default::default()
        });
    };

    view! {
        <section class="form-section cost-section">
            <h2>{title}</h2>
            <div class="cost-list">
                <For
                    each=move || entries.get()
                    key=|entry| entry.id
                    children=move |entry| {
                        let id = entry.id;
                        let field = move || {
                            entries
                                .get()
                                .into_iter()
                                .find(|entry| entry.id == id)
                                .unwrap_or_default()
                        };
                        view! {
                            <div class="material-item">
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="Cost ($)"
                                    prop:value=move || field().cost
                                    on:input=move |ev| {
                                        update_cost(&mut entries.write(), id, |e| {
                                            e.cost = event_target_value(&ev);
                                        });
                                    }
                                />
                                <textarea
                                    placeholder="Description"
                                    prop:value=move || field().description
                                    on:input=move |ev| {
                                        update_cost(&mut entries.write(), id, |e| {
                                            e.description = event_target_value(&ev);
                                        });
                                    }
                                ></textarea>
                                <YearSelect
                                    years=ctx.years
                                    value=Signal::derive(move || field().year)
                                    on_change=Callback::new(move |year: String| {
                                        update_cost(&mut entries.write(), id, |e| e.year = year);
                                    })
                                />
                                <button
                                    type="button"
                                    class="material-remove"
                                    on:click=move |_| {
                                        entries.write().retain(|entry| entry.id != id);
                                    }
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <button type="button" class="add-btn" on:click=on_add>
                {add_label}
            </button>
        </section>
    }
}
