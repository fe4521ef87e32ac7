//! HTTP Store
//!
//! [`RemoteStore`] over a JSON REST resource (`GET/POST /todos`,
//! `PUT/DELETE /todos/{id}`).

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::store::RemoteStore;
use crate::task::{NewTask, Task, TaskId};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_COLLECTION: &str = "todos";

/// Where the task resource lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Scheme and host, optionally with a path prefix
    pub base_url: String,
    /// Resource name appended to `base_url`
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    pub fn task_url(&self, id: TaskId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl HttpTaskStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

/// Turn a non-2xx answer into [`StoreError::Status`]
fn check_status(response: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let response = self.client.get(self.config.collection_url()).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn create(&self, task: &NewTask) -> StoreResult<Task> {
        let response = self
            .client
            .post(self.config.collection_url())
            .json(task)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn update(&self, task: &Task) -> StoreResult<Task> {
        let response = self
            .client
            .put(self.config.task_url(task.id))
            .json(task)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let response = self.client.delete(self.config.task_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}
