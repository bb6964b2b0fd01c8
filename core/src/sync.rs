//! The list synchronizer: session-local view of the todo list with
//! optimistic deletes.
//!
//! # Design
//! `ListSynchronizer` owns the only mutable copy of `ListState` for one
//! session/page view. `request_delete` mutates the local view first and then
//! fires the remote delete as a detached task whose outcome is only logged —
//! the no-rollback policy means a locally removed item never reappears in
//! this session, whatever the remote store says. The state sits behind a
//! `std::sync::Mutex`; the lock is never held across an await, so renders
//! reading `current_state` never block on the network.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::FetchError;
use crate::store::TodoStore;
use crate::types::Todo;

/// Load status of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    Error(String),
}

/// Snapshot of the synchronizer's view of the todo list.
///
/// `items` keeps the server's response order from the last successful fetch,
/// minus locally requested removals; nothing is reordered client-side.
/// `pending` holds ids whose remote delete is still in flight — always
/// disjoint from the ids in `items`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub items: Vec<Todo>,
    pub pending: HashSet<u64>,
    pub status: ListStatus,
}

impl ListState {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            pending: HashSet::new(),
            status: ListStatus::Loading,
        }
    }
}

/// Holds the authoritative local todo list for one session and reconciles it
/// against the remote store.
///
/// One instance per list view. Dropping the synchronizer abandons any
/// in-flight deletes; their outcomes are discarded, never awaited.
pub struct ListSynchronizer {
    store: Arc<dyn TodoStore>,
    state: Arc<Mutex<ListState>>,
}

impl ListSynchronizer {
    /// Create a synchronizer in the `Loading` state with an empty list.
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(ListState::new())),
        }
    }

    /// Fetch the first `limit` todos and adopt the response verbatim.
    ///
    /// Exactly one remote call. On success `items` becomes the returned
    /// sequence in server order and `status` becomes `Ready`. On failure the
    /// list is empty, `status` records the message, and the typed error is
    /// also returned so the host can pick either channel. Never panics.
    pub async fn initialize(&self, limit: usize) -> Result<ListState, FetchError> {
        match self.store.list(limit).await {
            Ok(todos) => {
                let mut state = lock(&self.state);
                state.items = todos;
                state.status = ListStatus::Ready;
                Ok(state.clone())
            }
            Err(err) => {
                let mut state = lock(&self.state);
                state.items.clear();
                state.status = ListStatus::Error(err.to_string());
                Err(err)
            }
        }
    }

    /// Remove `id` from the local view and fire the remote delete.
    ///
    /// The local removal is visible to `current_state` before the remote
    /// call is even issued. The remote delete runs as a detached task: at
    /// most one attempt, no retry, no cancellation, and its failure is only
    /// logged — the item is not reinserted. Calling again for an id already
    /// absent from `items` is a no-op, so no duplicate remote delete is ever
    /// sent.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn request_delete(&self, id: u64) {
        {
            let mut state = lock(&self.state);
            if !state.items.iter().any(|todo| todo.id == id) {
                return;
            }
            state.items.retain(|todo| todo.id != id);
            state.pending.insert(id);
        }

        let store = Arc::clone(&self.store);
        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            match store.delete(id).await {
                Ok(()) => tracing::debug!(id, "remote delete confirmed"),
                Err(err) => {
                    tracing::warn!(id, error = %err, "remote delete failed; keeping local removal")
                }
            }
            lock(&shared).pending.remove(&id);
        });
    }

    /// Read-only snapshot, safe to call at any time including mid-delete.
    pub fn current_state(&self) -> ListState {
        lock(&self.state).clone()
    }
}

/// A poisoned lock only means a delete task panicked mid-update; the state
/// itself is still a valid snapshot, so recover it instead of propagating.
fn lock(state: &Mutex<ListState>) -> MutexGuard<'_, ListState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
