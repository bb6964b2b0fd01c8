//! Error taxonomy for the synchronization core.
//!
//! # Design
//! Two families, matching how failures reach the rendering host. `FetchError`
//! covers list/get: it becomes a typed error state the host renders as a
//! "failed to load tasks" message. `DeleteError` covers delete: under the
//! no-rollback policy it never becomes UI state — it is only logged, so the
//! variants carry just enough for the log line. `NotFound` gets a dedicated
//! variant because the detail view distinguishes "this todo does not exist"
//! from "the server misbehaved."

use std::fmt;

/// Errors from listing or fetching todos.
#[derive(Debug)]
pub enum FetchError {
    /// The server returned 404 — the requested todo does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request never produced a response (connect failure, timeout, ...).
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "todo not found"),
            FetchError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            FetchError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            FetchError::Transport(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors from deleting a todo. Non-fatal: the synchronizer keeps the item
/// removed locally and only reports the failure through logging.
#[derive(Debug)]
pub enum DeleteError {
    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The request never produced a response.
    Transport(String),
}

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            DeleteError::Transport(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for DeleteError {}
