//! Errors
//!
//! Every store request fails the same way: a [`RemoteOperationFailure`]
//! naming the operation and wrapping the [`StoreError`] behind it.

use std::fmt;

use thiserror::Error;

use crate::task::TaskId;

/// Store requests issued by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store answered with status {0}")]
    Status(u16),

    #[error("task was created remotely with id {0}, but that id is already in the list; not added locally")]
    DuplicateId(TaskId),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
#[error("{operation} failed: {source}")]
pub struct RemoteOperationFailure {
    pub operation: Operation,
    #[source]
    pub source: StoreError,
}

impl RemoteOperationFailure {
    pub fn new(operation: Operation, source: StoreError) -> Self {
        Self { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let err = RemoteOperationFailure::new(Operation::Delete, StoreError::Status(404));
        assert_eq!(err.to_string(), "delete failed: store answered with status 404");
    }

    #[test]
    fn test_duplicate_id_says_remote_create_happened() {
        let err = RemoteOperationFailure::new(Operation::Create, StoreError::DuplicateId(201));
        let message = err.to_string();
        assert!(message.contains("created remotely with id 201"));
        assert!(message.contains("not added locally"));
    }
}
