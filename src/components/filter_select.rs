//! Filter Select Component

use leptos::prelude::*;
use task_tracker_core::Filter;

use crate::context::TrackerContext;

/// Status filter dropdown
#[component]
pub fn FilterSelect() -> impl IntoView {
    let ctx = use_context::<TrackerContext>().expect("TrackerContext should be provided");

    view! {
        <div class="filter">
            <label>
                "Filter by status: "
                <select
                    prop:value=move || ctx.list.with(|list| list.filter().as_str())
                    on:change=move |ev| ctx.set_filter(Filter::from_str(&event_target_value(&ev)))
                >
                    {Filter::ALL.into_iter().map(|filter| view! {
                        <option value=filter.as_str()>{filter.label()}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
