//! Single-todo detail view support.
//!
//! # Design
//! The detail view is stateless per request, so there is no optimistic state
//! to manage here. `delete_and_redirect` is the server-action shape of the
//! same "never rehydrate a deleted item" policy the synchronizer applies: it
//! awaits the remote delete, swallows any failure into a log line, and always
//! sends the host back to the list view with its cache invalidated.

use std::sync::Arc;

use crate::error::FetchError;
use crate::store::TodoStore;
use crate::types::Todo;

/// Path of the list view, used as redirect target and invalidation key.
const LIST_VIEW: &str = "/";

/// Instruction to the rendering host after a server-side delete: navigate to
/// `location` and drop any cached rendering of the paths in `invalidate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectSignal {
    pub location: String,
    pub invalidate: Vec<String>,
}

impl RedirectSignal {
    fn to_list_view() -> Self {
        Self {
            location: LIST_VIEW.to_string(),
            invalidate: vec![LIST_VIEW.to_string()],
        }
    }
}

/// Fetches one todo per detail view, with typed not-found/error outcomes.
pub struct DetailFetcher {
    store: Arc<dyn TodoStore>,
}

impl DetailFetcher {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// One remote get, no caching, no retry.
    pub async fn fetch_one(&self, id: u64) -> Result<Todo, FetchError> {
        self.store.get(id).await
    }

    /// Delete `id` on the remote store, then redirect to the list view
    /// regardless of the outcome. There is no per-request list state to keep
    /// consistent, so a failed delete only produces a log line and a stale
    /// entry the next list fetch will reveal.
    pub async fn delete_and_redirect(&self, id: u64) -> RedirectSignal {
        if let Err(err) = self.store.delete(id).await {
            tracing::warn!(id, error = %err, "remote delete failed; redirecting anyway");
        }
        RedirectSignal::to_list_view()
    }
}
