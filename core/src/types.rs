//! Domain DTOs for the remote todo API.
//!
//! # Design
//! `Todo` mirrors the remote store's JSON schema (integer ids assigned by the
//! server, camelCase `userId`) but is defined independently of the mock-server
//! crate. Integration tests catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// A single todo item as received from the remote store.
///
/// Immutable from the application's point of view: the synchronizer only ever
/// removes whole `Todo` values from its local view, never edits fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}
