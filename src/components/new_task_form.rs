//! New Task Form Component
//!
//! Text input bound to the draft, submitted with "Add".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::TrackerContext;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<TrackerContext>().expect("TrackerContext should be provided");

    // Empty titles go through as typed
    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let tracker = ctx.tracker();
        spawn_local(async move {
            let _ = tracker.submit_draft().await;
        });
    };

    view! {
        <form class="input-form" on:submit=add_task>
            <input
                type="text"
                class="input-task"
                placeholder="Add new task"
                prop:value=move || ctx.list.with(|list| list.draft().to_string())
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
