//! Grant Form Component
//!
//! The award budget form: date range inputs driving the year set, the
//! repeating budget sections, and the hidden JSON fields packed on submit.
//! Submission itself stays a native POST; the submit handler only fills the
//! hidden fields synchronously before the browser sends the form.

use leptos::html::Input;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CostSection, PersonnelTable, TravelSection};
use crate::context::FormContext;
use crate::models::InitData;
use crate::serialize::{build_initial_state, materials_json, personnel_json, travel_json};
use crate::store::{
    retarget_cost_years, retarget_hours, retarget_travel_years, FormStateStoreFields,
};
use crate::years::years_in_range;

#[component]
pub fn GrantForm(init: InitData, #[prop(into)] action: String) -> impl IntoView {
    let (start_date, set_start_date) = signal(init.start_date.clone().unwrap_or_default());
    let (end_date, set_end_date) = signal(init.end_date.clone().unwrap_or_default());
    let years = Memo::new(move |_| years_in_range(&start_date.get(), &end_date.get()));

    // Rehydrate saved sections (or seed one blank row each) exactly once.
    let initial_years = years_in_range(
        init.start_date.as_deref().unwrap_or(""),
        init.end_date.as_deref().unwrap_or(""),
    );
    let mut next_id = 0u32;
    let state = {
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            id
        };
        build_initial_state(&init, &initial_years, &mut alloc)
    };
    let store = Store::new(state);
    provide_context(store);
    provide_context(FormContext::new(years, next_id));

    // A changed date range re-targets every year-derived piece of state:
    // personnel hour slots keep values by year identity, section year
    // dropdowns keep still-valid selections.
    Effect::new(move |_| {
        let years = years.get();
        retarget_hours(&mut store.personnel().write(), &years);
        retarget_travel_years(&mut store.domestic_travel().write(), &years);
        retarget_travel_years(&mut store.international_travel().write(), &years);
        retarget_cost_years(&mut store.materials().write(), &years);
        retarget_cost_years(&mut store.equipment().write(), &years);
        retarget_cost_years(&mut store.other_costs().write(), &years);
    });

    let personnel_field = NodeRef::<Input>::new();
    let domestic_field = NodeRef::<Input>::new();
    let international_field = NodeRef::<Input>::new();
    let materials_field = NodeRef::<Input>::new();

    // Pack the hidden fields and let the native POST carry them.
    let on_submit = move |_ev: web_sys::SubmitEvent| {
        let years = years.get_untracked();
        if let Some(field) = personnel_field.get() {
            field.set_value(&personnel_json(&store.personnel().get_untracked(), &years));
        }
        if let Some(field) = domestic_field.get() {
            field.set_value(&travel_json(&store.domestic_travel().get_untracked()));
        }
        if let Some(field) = international_field.get() {
            field.set_value(&travel_json(&store.international_travel().get_untracked()));
        }
        if let Some(field) = materials_field.get() {
            field.set_value(&materials_json(
                &store.materials().get_untracked(),
                &store.equipment().get_untracked(),
                &store.other_costs().get_untracked(),
            ));
        }
    };

    view! {
        <form class="award-form" method="post" action=action on:submit=on_submit>
            <section class="form-section period-section">
                <h2>"Award Period"</h2>
                <label>
                    "Start Date"
                    <input
                        type="date"
                        name="start_date"
                        prop:value=start_date
                        on:change=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End Date"
                    <input
                        type="date"
                        name="end_date"
                        prop:value=end_date
                        on:change=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                </label>
            </section>

            <PersonnelTable />

            <TravelSection title="Domestic Travel" entries=store.domestic_travel() />
            <TravelSection title="International Travel" entries=store.international_travel() />

            <CostSection
                title="Materials & Supplies"
                add_label="+ Add Material"
                entries=store.materials()
            />
            <CostSection title="Equipment" add_label="+ Add Equipment" entries=store.equipment() />
            <CostSection
                title="Other Direct Costs"
                add_label="+ Add Cost"
                entries=store.other_costs()
            />

            <input type="hidden" name="personnel_json" node_ref=personnel_field />
            <input type="hidden" name="domestic_travel_json" node_ref=domestic_field />
            <input type="hidden" name="international_travel_json" node_ref=international_field />
            <input type="hidden" name="materials_json" node_ref=materials_field />

            <button type="submit" class="save-btn">"Save Award"</button>
        </form>
    }
}
