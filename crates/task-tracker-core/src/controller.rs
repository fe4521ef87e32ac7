//! Task List Controller
//!
//! Translates user intents into store requests and local list updates.
//! Each operation reads or mutates the list, awaits the store, then
//! applies the result. Requests in flight are not serialized against each
//! other: whichever response lands last wins.

use log::{debug, error, warn};

use crate::error::{Operation, RemoteOperationFailure, StoreError};
use crate::filter::Filter;
use crate::state::StateHandle;
use crate::store::RemoteStore;
use crate::task::{NewTask, Task, TaskId};
use crate::task_list::Phase;

pub type OpResult = Result<(), RemoteOperationFailure>;

#[derive(Clone)]
pub struct TaskListController<S, H> {
    store: S,
    state: H,
}

/// Log a failed request and wrap it for the caller
fn report(operation: Operation, source: StoreError) -> RemoteOperationFailure {
    let failure = RemoteOperationFailure::new(operation, source);
    error!("[TaskList] {}", failure);
    failure
}

impl<S: RemoteStore, H: StateHandle> TaskListController<S, H> {
    pub fn new(store: S, state: H) -> Self {
        Self { store, state }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Bulk read from the store, replacing the collection.
    ///
    /// Once a load has succeeded, further calls issue no request.
    pub async fn initialize(&self) -> OpResult {
        if self.state.inspect(|list| list.phase()) == Some(Phase::Loaded) {
            debug!("[TaskList] Already loaded, skipping read");
            return Ok(());
        }

        let tasks = self
            .store
            .list()
            .await
            .map_err(|e| report(Operation::Load, e))?;
        debug!("[TaskList] Loaded {} tasks", tasks.len());
        self.state.mutate(|list| list.load(tasks));
        Ok(())
    }

    pub fn set_draft(&self, draft: impl Into<String>) {
        let draft = draft.into();
        self.state.mutate(|list| list.set_draft(draft));
    }

    /// Create a task from the current draft
    pub async fn submit_draft(&self) -> OpResult {
        let title = self.state.inspect(|list| list.draft().to_string()).unwrap_or_default();
        self.add_task(title).await
    }

    /// Create a task. Titles are sent as typed, empty ones included.
    ///
    /// The draft is cleared only once the store has answered with the new task.
    pub async fn add_task(&self, title: impl Into<String>) -> OpResult {
        let candidate = NewTask::new(title);
        let created = self
            .store
            .create(&candidate)
            .await
            .map_err(|e| report(Operation::Create, e))?;

        let id = created.id;
        match self.state.mutate(|list| list.append(created)) {
            Some(true) => {
                self.state.mutate(|list| list.clear_draft());
                debug!("[TaskList] Created task {}", id);
                Ok(())
            }
            Some(false) => Err(report(Operation::Create, StoreError::DuplicateId(id))),
            None => Ok(()),
        }
    }

    /// Delete on the store, then drop the task locally by id
    pub async fn delete_task(&self, id: TaskId) -> OpResult {
        self.store
            .delete(id)
            .await
            .map_err(|e| report(Operation::Delete, e))?;

        if self.state.mutate(|list| list.remove(id)).flatten().is_none() {
            debug!("[TaskList] Task {} already gone after delete", id);
        }
        Ok(())
    }

    /// Flip `completed` locally right away, then push the full task.
    ///
    /// An unknown id is a no-op. If the update fails, the flip is undone by
    /// flipping again, so overlapping failures each cancel only their own
    /// flip; a task deleted in the meantime is left alone.
    pub async fn toggle_completed(&self, id: TaskId) -> OpResult {
        let Some(task) = self.state.mutate(|list| list.toggle(id)).flatten() else {
            warn!("[TaskList] Toggle on unknown task {}", id);
            return Ok(());
        };

        match self.store.update(&task).await {
            Ok(_) => {
                debug!("[TaskList] Task {} completed={}", id, task.completed);
                Ok(())
            }
            Err(e) => {
                self.state.mutate(|list| list.toggle(id));
                Err(report(Operation::Update, e))
            }
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        self.state.mutate(|list| list.set_filter(filter));
    }

    /// Tasks matching the active filter
    pub fn derived_view(&self) -> Vec<Task> {
        self.state.inspect(|list| list.visible()).unwrap_or_default()
    }

    /// Move a task within the filtered view. Local presentation order only;
    /// the store is not told.
    pub fn reorder(&self, source: usize, destination: usize) -> bool {
        let moved = self
            .state
            .mutate(|list| list.reorder(source, destination))
            .unwrap_or(false);
        if moved {
            debug!("[TaskList] Moved view row {} to {}", source, destination);
        }
        moved
    }
}
