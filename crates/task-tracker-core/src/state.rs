//! State Handle
//!
//! Shared access to a [`TaskList`]. The controller only touches the list
//! through short synchronous closures, so no borrow outlives an await.

use std::cell::RefCell;
use std::rc::Rc;

use crate::task_list::TaskList;

pub trait StateHandle {
    /// Mutate the list. `None` if the underlying state has been disposed.
    fn mutate<R>(&self, f: impl FnOnce(&mut TaskList) -> R) -> Option<R>;

    /// Read the list without subscribing to it.
    fn inspect<R>(&self, f: impl FnOnce(&TaskList) -> R) -> Option<R>;
}

/// Plain shared cell, for hosts without a reactive runtime
pub type SharedTaskList = Rc<RefCell<TaskList>>;

impl StateHandle for SharedTaskList {
    fn mutate<R>(&self, f: impl FnOnce(&mut TaskList) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&TaskList) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
