//! Application Context
//!
//! The task list signal and its controller, provided via Leptos Context API.

use leptos::prelude::*;
use task_tracker_core::{Filter, HttpTaskStore, StateHandle, Task, TaskList, TaskListController};

/// Lets the controller drive a reactive signal
#[derive(Clone, Copy)]
pub struct SignalState(RwSignal<TaskList>);

impl StateHandle for SignalState {
    fn mutate<R>(&self, f: impl FnOnce(&mut TaskList) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&TaskList) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}

pub type Tracker = TaskListController<HttpTaskStore, SignalState>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct TrackerContext {
    /// Task list state - read reactively, write through the tracker
    pub list: RwSignal<TaskList>,
    tracker: StoredValue<Tracker, LocalStorage>,
}

impl TrackerContext {
    pub fn new(store: HttpTaskStore) -> Self {
        let list = RwSignal::new(TaskList::new());
        let tracker = StoredValue::new_local(TaskListController::new(store, SignalState(list)));
        Self { list, tracker }
    }

    /// Handle for async operations (cheap clone)
    pub fn tracker(&self) -> Tracker {
        self.tracker.get_value()
    }

    /// Filtered view, tracked
    pub fn visible(&self) -> Vec<Task> {
        self.list.with(|list| list.visible())
    }

    pub fn set_draft(&self, draft: String) {
        self.tracker.with_value(|tracker| tracker.set_draft(draft));
    }

    pub fn set_filter(&self, filter: Filter) {
        self.tracker.with_value(|tracker| tracker.set_filter(filter));
    }

    pub fn reorder(&self, source: usize, destination: usize) {
        self.tracker.with_value(|tracker| {
            tracker.reorder(source, destination);
        });
    }
}
