//! In-process emulation of the remote todo store for tests.
//!
//! Integer ids in a `BTreeMap` keep list responses in stable ascending order
//! like the real API. `fail_delete` marks ids whose DELETE answers 500, so
//! tests can exercise the no-rollback path over real HTTP.

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct MockState {
    pub todos: BTreeMap<u64, Todo>,
    pub fail_delete: HashSet<u64>,
}

impl MockState {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: todos.into_iter().map(|todo| (todo.id, todo)).collect(),
            fail_delete: HashSet::new(),
        }
    }
}

pub type Db = Arc<RwLock<MockState>>;

#[derive(Deserialize)]
struct ListParams {
    #[serde(rename = "_limit")]
    limit: Option<usize>,
}

/// Deterministic seed data, ids 1..=count.
pub fn seed_todos(count: usize) -> Vec<Todo> {
    (1..=count as u64)
        .map(|id| Todo {
            id,
            user_id: (id - 1) / 10 + 1,
            title: format!("todo {id}"),
            completed: id % 2 == 0,
        })
        .collect()
}

pub fn app() -> Router {
    app_with_todos(seed_todos(20))
}

pub fn app_with_todos(todos: Vec<Todo>) -> Router {
    router(Arc::new(RwLock::new(MockState::with_todos(todos))))
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, Arc::new(RwLock::new(MockState::with_todos(seed_todos(20))))).await
}

pub async fn serve(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db)).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let state = db.read().await;
    let limit = params.limit.unwrap_or(state.todos.len());
    Json(state.todos.values().take(limit).cloned().collect())
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let state = db.read().await;
    state.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> StatusCode {
    let mut state = db.write().await;
    if state.fail_delete.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    match state.todos.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_api_json() {
        let todo = Todo {
            id: 1,
            user_id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["userId"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            user_id: 3,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn seed_todos_have_ascending_unique_ids() {
        let todos = seed_todos(20);
        assert_eq!(todos.len(), 20);
        for (i, todo) in todos.iter().enumerate() {
            assert_eq!(todo.id, i as u64 + 1);
        }
    }

    #[test]
    fn mock_state_indexes_by_id() {
        let state = MockState::with_todos(seed_todos(3));
        assert_eq!(state.todos.len(), 3);
        assert_eq!(state.todos[&2].title, "todo 2");
    }
}
