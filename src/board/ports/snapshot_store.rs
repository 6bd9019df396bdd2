//! Port holding the current board snapshot.

use crate::board::domain::Board;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Monotonic revision of the committed snapshot.
///
/// Each successful commit increments the revision by one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SnapshotRevision(u64);

impl SnapshotRevision {
    /// Revision of a store that has never been committed to.
    pub const INITIAL: Self = Self(0);

    /// Creates a revision from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the revision following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnapshotRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The committed board together with its revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSnapshot {
    /// Revision the board was committed at.
    pub revision: SnapshotRevision,
    /// Committed board.
    pub board: Board,
}

/// Result type for snapshot store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Holder of the "current snapshot" that the presentation layer renders.
///
/// Commits are optimistic: a commit names the revision it was computed from
/// and is rejected if another commit landed in between, so a transition is
/// never applied on top of a snapshot it did not read.
#[async_trait]
pub trait BoardSnapshotStore: Send + Sync {
    /// Returns the committed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the snapshot cannot be
    /// read.
    async fn load(&self) -> BoardStoreResult<StoredSnapshot>;

    /// Replaces the committed snapshot if it is still at `expected`.
    ///
    /// Returns the new revision.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::StaleSnapshot`] when the committed revision
    /// is no longer `expected`, or [`BoardStoreError::Persistence`] when the
    /// write fails.
    async fn commit(
        &self,
        expected: SnapshotRevision,
        board: &Board,
    ) -> BoardStoreResult<SnapshotRevision>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// Another commit landed after the snapshot was read.
    #[error("stale snapshot: expected revision {expected}, store is at {actual}")]
    StaleSnapshot {
        /// Revision the caller computed its transition from.
        expected: SnapshotRevision,
        /// Revision currently committed.
        actual: SnapshotRevision,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
