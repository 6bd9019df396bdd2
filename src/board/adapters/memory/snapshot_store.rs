//! In-memory snapshot store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardConfig},
    ports::{
        BoardSnapshotStore, BoardStoreError, BoardStoreResult, SnapshotRevision, StoredSnapshot,
    },
};

/// Thread-safe in-memory holder of the current board snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardSnapshotStore {
    state: Arc<RwLock<StoredSnapshot>>,
}

impl InMemoryBoardSnapshotStore {
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `board` at the initial revision.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoredSnapshot {
                revision: SnapshotRevision::INITIAL,
                board,
            })),
        }
    }

    /// Creates a store holding the starter board described by `config`.
    #[must_use]
    pub fn seeded(config: &BoardConfig) -> Self {
        Self::with_board(Board::seeded(config))
    }
}

#[async_trait]
impl BoardSnapshotStore for InMemoryBoardSnapshotStore {
    async fn load(&self) -> BoardStoreResult<StoredSnapshot> {
        let state = self.state.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    async fn commit(
        &self,
        expected: SnapshotRevision,
        board: &Board,
    ) -> BoardStoreResult<SnapshotRevision> {
        let mut state = self.state.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.revision != expected {
            return Err(BoardStoreError::StaleSnapshot {
                expected,
                actual: state.revision,
            });
        }
        state.revision = expected.next();
        state.board = board.clone();
        Ok(state.revision)
    }
}
