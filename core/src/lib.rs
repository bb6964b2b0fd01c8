//! Session-local synchronization core for a todo-list frontend.
//!
//! # Overview
//! Holds the authoritative local view of a todo list fetched from a remote
//! JSON REST store, applies deletions optimistically, and reconciles against
//! the store's responses. The rendering host calls `initialize` once per list
//! view, `request_delete` on user action, and `current_state` on every
//! render; the detail view uses `fetch_one` and `delete_and_redirect`.
//!
//! # Design
//! - The wire layer is deterministic: `TodoClient` builds `HttpRequest`
//!   values and parses `HttpResponse` values without touching the network
//!   (host-does-IO pattern); `HttpStore` executes them with reqwest.
//! - `ListSynchronizer` is a single-writer state container. Local removal
//!   happens synchronously; the remote delete runs as a detached task whose
//!   failure is logged, never surfaced — a removed item never reappears in
//!   the current session.
//! - `FetchError` reaches the host as typed error state; `DeleteError` stays
//!   in the logs.

pub mod client;
pub mod detail;
pub mod error;
pub mod http;
pub mod store;
pub mod sync;
pub mod types;

pub use client::TodoClient;
pub use detail::{DetailFetcher, RedirectSignal};
pub use error::{DeleteError, FetchError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{HttpStore, TodoStore};
pub use sync::{ListState, ListStatus, ListSynchronizer};
pub use types::Todo;
