//! Board session: the "current snapshot" and the transitions applied to it.

use crate::board::{
    domain::{
        Board, BoardConfig, BoardError, BoardList, BoardResult, Card, CardId, CardMove, ListId,
        ListMove, MoveOutcome,
    },
    ports::{BoardSnapshotStore, BoardStoreError},
    services::drag::{DragAdapter, DragError, DragGesture},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Service-level errors for board transitions.
///
/// None of these change the committed snapshot.
#[derive(Debug, Error)]
pub enum BoardSessionError {
    /// The board rejected the transition.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The drag gesture could not be resolved.
    #[error(transparent)]
    Drag(#[from] DragError),
    /// The snapshot store failed or another commit landed first.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
    /// A previous drag gesture is still being committed.
    #[error("a board transition is still being committed")]
    GestureInFlight,
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// What a computed transition asks the session to do.
enum Step<T> {
    /// Commit the board and return the value.
    Commit(Board, T),
    /// Leave the committed snapshot alone and return the value.
    Keep(T),
}

/// Applies transitions to the committed board one at a time.
///
/// Every transition is computed from the snapshot committed immediately
/// before it and committed against that snapshot's revision. Direct edits
/// queue behind an in-flight commit; drag gestures arriving while a commit
/// is in flight are rejected with [`BoardSessionError::GestureInFlight`].
pub struct BoardSession<S>
where
    S: BoardSnapshotStore,
{
    store: Arc<S>,
    config: Arc<BoardConfig>,
    drag: DragAdapter,
    commit_gate: Mutex<()>,
}

impl<S> BoardSession<S>
where
    S: BoardSnapshotStore,
{
    /// Creates a session over `store`.
    #[must_use]
    pub fn new(store: Arc<S>, config: Arc<BoardConfig>) -> Self {
        let drag = DragAdapter::from_config(&config);
        Self {
            store,
            config,
            drag,
            commit_gate: Mutex::new(()),
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the gesture adapter used by [`Self::apply_gesture`].
    #[must_use]
    pub const fn drag_adapter(&self) -> &DragAdapter {
        &self.drag
    }

    /// Returns the committed snapshot for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Store`] when the snapshot cannot be read.
    pub async fn snapshot(&self) -> BoardSessionResult<Board> {
        Ok(self.store.load().await?.board)
    }

    /// Appends a list with the configured default title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Store`] when the commit fails.
    pub async fn add_list(&self) -> BoardSessionResult<ListId> {
        let list = BoardList::new(self.config.default_list_title.as_str());
        let list_id = list.id();
        self.edit("add_list", |board| {
            let next = board.push_list(list)?;
            Ok(Step::Commit(next, list_id))
        })
        .await
    }

    /// Sets the title of a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the list does not exist.
    pub async fn rename_list(
        &self,
        list_id: ListId,
        title: impl Into<String>,
    ) -> BoardSessionResult<Board> {
        self.edit("rename_list", |board| {
            committed(board.rename_list(list_id, title))
        })
        .await
    }

    /// Removes a list and its cards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the list does not exist.
    pub async fn delete_list(&self, list_id: ListId) -> BoardSessionResult<Board> {
        self.edit("delete_list", |board| committed(board.delete_list(list_id)))
            .await
    }

    /// Appends a card with the configured default content.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the list does not exist.
    pub async fn add_card(&self, list_id: ListId) -> BoardSessionResult<CardId> {
        let card = Card::new(self.config.default_card_content.as_str());
        let card_id = card.id();
        self.edit("add_card", |board| {
            let next = board.push_card(list_id, card)?;
            Ok(Step::Commit(next, card_id))
        })
        .await
    }

    /// Replaces the content of a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the list or card does not
    /// exist.
    pub async fn edit_card_content(
        &self,
        list_id: ListId,
        card_id: CardId,
        content: impl Into<String>,
    ) -> BoardSessionResult<Board> {
        self.edit("edit_card_content", |board| {
            committed(board.edit_card_content(list_id, card_id, content))
        })
        .await
    }

    /// Removes a card.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the list or card does not
    /// exist.
    pub async fn delete_card(&self, list_id: ListId, card_id: CardId) -> BoardSessionResult<Board> {
        self.edit("delete_card", |board| {
            committed(board.delete_card(list_id, card_id))
        })
        .await
    }

    /// Applies a card move directly, waiting for any in-flight commit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] for unknown lists or an
    /// out-of-bounds source index.
    pub async fn move_card(&self, request: &CardMove) -> BoardSessionResult<MoveOutcome> {
        self.edit("move_card", |board| Ok(moved(board.move_card(request)?)))
            .await
    }

    /// Applies a list reorder directly, waiting for any in-flight commit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] for an out-of-bounds source index.
    pub async fn move_list(&self, request: &ListMove) -> BoardSessionResult<MoveOutcome> {
        self.edit("move_list", |board| Ok(moved(board.move_list(request)?)))
            .await
    }

    /// Applies a completed drag gesture.
    ///
    /// A cancelled gesture or one that lands where it started commits
    /// nothing and returns [`MoveOutcome::NoOp`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::GestureInFlight`] if another transition
    /// is being committed, [`BoardSessionError::Drag`] when the gesture cannot
    /// be resolved against the committed board, or
    /// [`BoardSessionError::Store`] when the commit fails.
    pub async fn apply_gesture(&self, gesture: &DragGesture) -> BoardSessionResult<MoveOutcome> {
        let Ok(gate) = self.commit_gate.try_lock() else {
            warn!(
                draggable_id = %gesture.draggable_id,
                "drag gesture ignored while a commit is in flight"
            );
            return Err(BoardSessionError::GestureInFlight);
        };
        self.apply_locked(gate, "drag_gesture", |board| {
            Ok(moved(self.drag.apply(board, gesture)?))
        })
        .await
    }

    async fn edit<T, F>(&self, operation: &'static str, compute: F) -> BoardSessionResult<T>
    where
        F: FnOnce(&Board) -> BoardSessionResult<Step<T>>,
    {
        let gate = self.commit_gate.lock().await;
        self.apply_locked(gate, operation, compute).await
    }

    async fn apply_locked<T, F>(
        &self,
        _gate: MutexGuard<'_, ()>,
        operation: &'static str,
        compute: F,
    ) -> BoardSessionResult<T>
    where
        F: FnOnce(&Board) -> BoardSessionResult<Step<T>>,
    {
        let snapshot = self.store.load().await?;
        let step = compute(&snapshot.board).inspect_err(|err| {
            warn!(operation, error = %err, "board transition rejected");
        })?;
        match step {
            Step::Keep(value) => {
                debug!(operation, revision = %snapshot.revision, "board transition left snapshot unchanged");
                Ok(value)
            }
            Step::Commit(board, value) => {
                let revision = self
                    .store
                    .commit(snapshot.revision, &board)
                    .await
                    .inspect_err(|err| {
                        warn!(operation, error = %err, "board commit failed");
                    })?;
                debug!(
                    operation,
                    %revision,
                    lists = board.list_count(),
                    cards = board.card_count(),
                    "board transition committed"
                );
                Ok(value)
            }
        }
    }
}

fn committed(result: BoardResult<Board>) -> BoardSessionResult<Step<Board>> {
    let board = result?;
    Ok(Step::Commit(board.clone(), board))
}

fn moved(outcome: MoveOutcome) -> Step<MoveOutcome> {
    match outcome {
        MoveOutcome::Moved(board) => Step::Commit(board.clone(), MoveOutcome::Moved(board)),
        noop @ MoveOutcome::NoOp(_) => Step::Keep(noop),
    }
}
