//! Task Tracker Core
//!
//! Client-side state for a task list backed by a remote CRUD store:
//! the collection, the draft, the filter, and the controller that keeps
//! them in step with the store.

mod controller;
mod error;
mod filter;
mod http;
mod state;
mod store;
mod task;
mod task_list;


pub use controller::{OpResult, TaskListController};
pub use error::{Operation, RemoteOperationFailure, StoreError, StoreResult};
pub use filter::Filter;
pub use http::{HttpTaskStore, StoreConfig};
pub use state::{SharedTaskList, StateHandle};
pub use store::RemoteStore;
pub use task::{NewTask, Task, TaskId};
pub use task_list::{Phase, TaskList};
