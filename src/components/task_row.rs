//! Task Row Component
//!
//! A single task with its complete/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_tracker_core::Task;

use crate::context::TrackerContext;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<TrackerContext>().expect("TrackerContext should be provided");

    let id = task.id;
    let row_class = if task.completed { "task completed" } else { "task" };

    view! {
        <div class=row_class>
            <span>{task.title}</span>

            <button class="complete-btn" on:click=move |_| {
                let tracker = ctx.tracker();
                spawn_local(async move {
                    let _ = tracker.toggle_completed(id).await;
                });
            }>"Completed"</button>

            <button class="delete-btn" on:click=move |_| {
                let tracker = ctx.tracker();
                spawn_local(async move {
                    let _ = tracker.delete_task(id).await;
                });
            }>"Delete"</button>
        </div>
    }
}
