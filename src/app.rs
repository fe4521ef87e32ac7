//! Task Tracker Frontend App
//!
//! Main application component: add form, filter, draggable task list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_tracker_core::{HttpTaskStore, StoreConfig};

use crate::components::{FilterSelect, NewTaskForm, TaskListView};
use crate::context::TrackerContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = TrackerContext::new(HttpTaskStore::new(StoreConfig::default()));
    provide_context(ctx);

    // Initial read, once on mount
    Effect::new(move |_| {
        let tracker = ctx.tracker();
        spawn_local(async move {
            let _ = tracker.initialize().await;
        });
    });

    view! {
        <div class="task-tracker">
            <h1 class="title">"Task Tracker"</h1>

            <NewTaskForm />

            <FilterSelect />

            <TaskListView />

            <p class="task-count">
                {move || ctx.list.with(|list| format!("{} shown, {} tasks", list.visible().len(), list.len()))}
            </p>
        </div>
    }
}
