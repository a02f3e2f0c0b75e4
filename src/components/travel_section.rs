//! Travel Section Component
//!
//! One component serves both travel lists (domestic and international); the
//! store subfield it is handed decides which. Entries carry a description, a
//! total amount, and a year picked from the resolved year set.

use leptos::prelude::*;

use crate::components::YearSelect;
use crate::context::FormContext;
use crate::store::{update_travel, EntryList, TravelEntry};

#[component]
pub fn TravelSection(
    #[prop(into)] title: String,
    entries: EntryList<TravelEntry>,
) -> impl IntoView {
    let ctx = expect_context::<FormContext>();

    let on_add = move |_| {
        let id = ctx.alloc_id();
        entries.write().push(TravelEntry {
            id,
            ..Default::default()
        });
    };

    view! {
        <section class="form-section travel-section">
            <h2>{title}</h2>
            <div class="travel-list">
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
                            <div class="travel-item">
                                <textarea
                                    placeholder="Purpose and destination"
                                    prop:value=move || field().description
                                    on:input=move |ev| {
                                        update_travel(&mut entries.write(), id, |e| {
                                            e.description = event_target_value(&ev);
                                        });
                                    }
                                ></textarea>
                                <input
                                    type="number"
                                    min="0"
                                    placeholder="Total amount ($)"
                                    prop:value=move || field().total_amount
                                    on:input=move |ev| {
                                        update_travel(&mut entries.write(), id, |e| {
                                            e.total_amount = event_target_value(&ev);
                                        });
                                    }
                                />
                                <YearSelect
                                    years=ctx.years
                                    value=Signal::derive(move || field().year)
                                    on_change=Callback::new(move |year: String| {
                                        update_travel(&mut entries.write(), id, |e| e.year = year);
                                    })
                                />
                                <button
                                    type="button"
                                    class="travel-remove"
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
                "+ Add Trip"
            </button>
        </section>
    }
}
