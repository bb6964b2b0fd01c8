//! The `TodoStore` seam over the remote todo store, plus its HTTP-backed
//! implementation.
//!
//! # Design
//! The synchronizer and detail fetcher only see the trait, so tests can swap
//! in scripted stores with controlled latency and failures. `HttpStore` is
//! the production implementation: it executes requests built by the
//! deterministic `TodoClient` and feeds the raw responses back to its
//! `parse_*` methods, so all status interpretation lives in one place.

use async_trait::async_trait;

use crate::client::TodoClient;
use crate::error::{DeleteError, FetchError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Async interface to the remote todo store.
///
/// `delete` reports failure through its `Result`, but per the no-rollback
/// policy callers are expected to log it rather than act on it.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self, limit: usize) -> Result<Vec<Todo>, FetchError>;
    async fn get(&self, id: u64) -> Result<Todo, FetchError>;
    async fn delete(&self, id: u64) -> Result<(), DeleteError>;
}

/// `TodoStore` implementation over real HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: TodoClient,
    http: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: TodoClient::new(base_url),
            http: reqwest::Client::new(),
        }
    }

    /// Perform a built request and return the raw response. Non-2xx statuses
    /// are returned as data; only transport-level failures become errors.
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, String> {
        let builder = match req.method {
            HttpMethod::Get => self.http.get(&req.path),
            HttpMethod::Delete => self.http.delete(&req.path),
        };
        let builder = req
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()));
        let builder = match req.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[async_trait]
impl TodoStore for HttpStore {
    async fn list(&self, limit: usize) -> Result<Vec<Todo>, FetchError> {
        let req = self.client.build_list_todos(limit);
        let response = self.execute(req).await.map_err(FetchError::Transport)?;
        self.client.parse_list_todos(response)
    }

    async fn get(&self, id: u64) -> Result<Todo, FetchError> {
        let req = self.client.build_get_todo(id);
        let response = self.execute(req).await.map_err(FetchError::Transport)?;
        self.client.parse_get_todo(response)
    }

    async fn delete(&self, id: u64) -> Result<(), DeleteError> {
        let req = self.client.build_delete_todo(id);
        let response = self.execute(req).await.map_err(DeleteError::Transport)?;
        self.client.parse_delete_todo(response)
    }
}
