//! Remote Store - Core Trait
//!
//! The CRUD contract the controller talks to. The remote store is the
//! source of truth for ids; the client never invents one.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::task::{NewTask, Task, TaskId};

/// List/create/update/delete over tasks.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded executor and hold JS handles.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Read every task, in store order
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Create a task; the returned value carries the assigned id
    async fn create(&self, task: &NewTask) -> StoreResult<Task>;

    /// Replace a task with its full new representation
    async fn update(&self, task: &Task) -> StoreResult<Task>;

    async fn delete(&self, id: TaskId) -> StoreResult<()>;
}
