//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each wire operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The executor performs the actual HTTP round-trip, keeping this layer
//! deterministic and free of I/O dependencies.

use crate::error::{DeleteError, FetchError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Synchronous, stateless client for the remote todo store.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `HttpStore` (or a test harness) executes the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self, limit: usize) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos?_limit={limit}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Expects 200 with a JSON array; the array order is preserved verbatim.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, FetchError> {
        check_fetch_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, FetchError> {
        check_fetch_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// Any 2xx counts as a successful delete. The public API answers DELETE
    /// with `200 {}` while the mock answers 204; the body is ignored either
    /// way.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), DeleteError> {
        if (200..300).contains(&response.status) {
            return Ok(());
        }
        Err(DeleteError::Http {
            status: response.status,
            body: response.body,
        })
    }
}

/// Map non-200 statuses on list/get to the appropriate `FetchError` variant.
fn check_fetch_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(FetchError::NotFound);
    }
    Err(FetchError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos(20);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?_limit=20");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success_preserves_order() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"userId":1,"id":2,"title":"B","completed":false},
                      {"userId":1,"id":1,"title":"A","completed":true}]"#
                .to_string(),
        };
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 2);
        assert_eq!(todos[1].id, 1);
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
    }

    #[test]
    fn parse_list_todos_server_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_get_todo_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"userId":1,"id":3,"title":"fugiat veniam minus","completed":false}"#
                .to_string(),
        };
        let todo = client().parse_get_todo(response).unwrap();
        assert_eq!(todo.id, 3);
        assert_eq!(todo.title, "fugiat veniam minus");
    }

    #[test]
    fn parse_get_todo_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_get_todo(response).unwrap_err();
        assert!(matches!(err, FetchError::NotFound));
    }

    #[test]
    fn parse_delete_todo_accepts_any_2xx() {
        for status in [200, 204] {
            let response = HttpResponse {
                status,
                headers: Vec::new(),
                body: if status == 200 { "{}".to_string() } else { String::new() },
            };
            assert!(client().parse_delete_todo(response).is_ok(), "status {status}");
        }
    }

    #[test]
    fn parse_delete_todo_failure() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "boom".to_string(),
        };
        let err = client().parse_delete_todo(response).unwrap_err();
        assert!(matches!(err, DeleteError::Http { status: 500, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos(5);
        assert_eq!(req.path, "http://localhost:3000/todos?_limit=5");
    }
}
