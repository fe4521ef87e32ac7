//! UI Components
//!
//! Leptos components for the task tracker.

mod drop_slot;
mod filter_select;
mod new_task_form;
mod task_list_view;
mod task_row;

pub use drop_slot::DropSlot;
pub use filter_select::FilterSelect;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
