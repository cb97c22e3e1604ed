pub mod memory;
pub mod spanner;

use std::error::Error;

use futures::future::BoxFuture;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Game;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StoreError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Outcome of a point lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Game),
    NotFound,
}

impl Lookup {
    /// Convert into an `Option` for callers that serialize absence as null.
    pub fn into_option(self) -> Option<Game> {
        match self {
            Lookup::Found(game) => Some(game),
            Lookup::NotFound => None,
        }
    }
}

/// Abstraction over Game persistence, keyed by the record id.
///
/// Backends are single-record atomic: every operation is one point read or
/// write, and concurrent writers of the same key get last-write-wins
/// semantics from the underlying table.
pub trait GameStore: Send + Sync {
    /// Point lookup. Absence is a normal result, never an error.
    fn get(&self, id: Uuid) -> BoxFuture<'static, StoreResult<Lookup>>;

    /// Persist the record under its id, overwriting any previous version,
    /// and return the id it was stored under.
    fn put(&self, game: Game) -> BoxFuture<'static, StoreResult<Uuid>>;

    /// Remove the record. Deleting an absent id is a no-op.
    fn delete(&self, id: Uuid) -> BoxFuture<'static, StoreResult<()>>;

    /// Full-table scan. The expected record count is tiny, so there is no
    /// pagination.
    fn scan(&self) -> BoxFuture<'static, StoreResult<Vec<Game>>>;

    /// Verify the backend is reachable.
    fn health_check(&self) -> BoxFuture<'static, StoreResult<()>>;
}
