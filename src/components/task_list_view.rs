//! Task List View Component
//!
//! Renders the filtered view with drag-to-reorder.
//! Row indices are positions in the filtered view, which is what the
//! controller's reorder expects.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, make_on_mousedown};

use crate::components::{DropSlot, TaskRow};
use crate::context::TrackerContext;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<TrackerContext>().expect("TrackerContext should be provided");

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |source, destination| {
        ctx.reorder(source, destination);
    });

    let rows = move || ctx.visible().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="task-list">
            <DropSlot dnd=dnd slot=0 />

            <For
                each=rows
                key=|(index, task)| (*index, task.id, task.completed, task.title.clone())
                children=move |(index, task)| {
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let row_class = move || {
                        if dnd.dragging_read.get() == Some(index) {
                            "task-row-wrapper dragging"
                        } else {
                            "task-row-wrapper"
                        }
                    };

                    view! {
                        <div class=row_class on:mousedown=on_mousedown>
                            <TaskRow task=task />
                        </div>
                        <DropSlot dnd=dnd slot={index + 1} />
                    }
                }
            />
        </div>
    }
}
