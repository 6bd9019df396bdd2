//! Translation of completed drag gestures into board moves.
//!
//! Gestures arrive in the shape drag-and-drop libraries report them: string
//! droppable and draggable identifiers plus indices. The adapter decides
//! whether the gesture moved a list or a card by looking at which droppable
//! it started in, checks that the dragged element is still where the gesture
//! says it was, and emits exactly one board move.

use crate::board::domain::{
    BOARD_DROPPABLE_ID, Board, BoardConfig, BoardError, CardId, CardMove, CardSlot, ListId,
    ListMove, MoveOutcome, NoOpReason,
};
use std::fmt;
use thiserror::Error;

/// A droppable container and an index inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropLocation {
    /// Identifier of the droppable container.
    pub droppable_id: String,
    /// Zero-based index inside the container.
    pub index: usize,
}

impl DropLocation {
    /// Creates a drop location.
    #[must_use]
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// A completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    /// Identifier of the dragged element.
    pub draggable_id: String,
    /// Where the element was when the drag started.
    pub source: DropLocation,
    /// Where the element was dropped; `None` if outside every droppable.
    pub destination: Option<DropLocation>,
}

impl DragGesture {
    /// Creates a gesture that was dropped at `destination`.
    #[must_use]
    pub fn dropped(
        draggable_id: impl Into<String>,
        source: DropLocation,
        destination: DropLocation,
    ) -> Self {
        Self {
            draggable_id: draggable_id.into(),
            source,
            destination: Some(destination),
        }
    }

    /// Creates a gesture that ended outside every droppable.
    #[must_use]
    pub fn cancelled(draggable_id: impl Into<String>, source: DropLocation) -> Self {
        Self {
            draggable_id: draggable_id.into(),
            source,
            destination: None,
        }
    }
}

/// Kind of element a gesture dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// A card dragged between or within lists.
    Card,
    /// A list dragged along the board.
    List,
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Card => "card",
            Self::List => "list",
        })
    }
}

/// The single board operation a gesture resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCommand {
    /// The gesture ended without a destination.
    Cancelled,
    /// The gesture was dropped on the slot it started from.
    Unmoved,
    /// The gesture moved a card.
    MoveCard(CardMove),
    /// The gesture reordered a list.
    MoveList(ListMove),
}

/// Errors returned while resolving a gesture.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// The droppable identifier is neither the board nor a list identifier.
    #[error("unknown droppable: {0}")]
    UnknownDroppable(String),

    /// The element at the source position is not the dragged element.
    #[error("draggable {draggable_id} is not at index {index} of {droppable_id}")]
    DraggableMismatch {
        /// Identifier reported by the gesture.
        draggable_id: String,
        /// Source droppable reported by the gesture.
        droppable_id: String,
        /// Source index reported by the gesture.
        index: usize,
    },

    /// A card was dropped on the board strip or a list inside a list.
    #[error("cannot drop a {kind} onto {droppable_id}")]
    IncompatibleDestination {
        /// Kind of element being dragged.
        kind: DragKind,
        /// Droppable it was dropped onto.
        droppable_id: String,
    },

    /// The resolved move was rejected by the board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Resolves gestures against a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragAdapter {
    board_droppable_id: String,
}

impl Default for DragAdapter {
    fn default() -> Self {
        Self::new(BOARD_DROPPABLE_ID)
    }
}

impl DragAdapter {
    /// Creates an adapter that treats `board_droppable_id` as the list strip.
    #[must_use]
    pub fn new(board_droppable_id: impl Into<String>) -> Self {
        Self {
            board_droppable_id: board_droppable_id.into(),
        }
    }

    /// Creates an adapter using the droppable identifier from `config`.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.board_droppable_id.as_str())
    }

    /// Returns the droppable identifier of the list strip.
    #[must_use]
    pub fn board_droppable_id(&self) -> &str {
        &self.board_droppable_id
    }

    /// Resolves a gesture into the board operation it requests.
    ///
    /// A gesture without a destination resolves to
    /// [`DragCommand::Cancelled`], and one dropped on its own source slot to
    /// [`DragCommand::Unmoved`], without inspecting anything else.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when the gesture names unknown containers,
    /// crosses element kinds, or no longer matches the board.
    pub fn resolve(&self, board: &Board, gesture: &DragGesture) -> Result<DragCommand, DragError> {
        let Some(destination) = gesture.destination.as_ref() else {
            return Ok(DragCommand::Cancelled);
        };
        if *destination == gesture.source {
            return Ok(DragCommand::Unmoved);
        }
        if gesture.source.droppable_id == self.board_droppable_id {
            self.resolve_list(board, gesture, destination)
        } else {
            self.resolve_card(board, gesture, destination)
        }
    }

    /// Resolves a gesture and applies it to `board`.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when resolution fails or the board rejects the
    /// move.
    pub fn apply(&self, board: &Board, gesture: &DragGesture) -> Result<MoveOutcome, DragError> {
        let outcome = match self.resolve(board, gesture)? {
            DragCommand::Cancelled => MoveOutcome::NoOp(NoOpReason::Cancelled),
            DragCommand::Unmoved => MoveOutcome::NoOp(NoOpReason::SamePosition),
            DragCommand::MoveCard(request) => board.move_card(&request)?,
            DragCommand::MoveList(request) => board.move_list(&request)?,
        };
        Ok(outcome)
    }

    fn resolve_list(
        &self,
        board: &Board,
        gesture: &DragGesture,
        destination: &DropLocation,
    ) -> Result<DragCommand, DragError> {
        if destination.droppable_id != self.board_droppable_id {
            return Err(DragError::IncompatibleDestination {
                kind: DragKind::List,
                droppable_id: destination.droppable_id.clone(),
            });
        }
        let index = gesture.source.index;
        let list = board.list_at(index).ok_or(BoardError::InvalidIndex {
            index,
            len: board.list_count(),
        })?;
        if gesture.draggable_id.parse::<ListId>().ok() != Some(list.id()) {
            return Err(mismatch(gesture));
        }
        Ok(DragCommand::MoveList(ListMove::new(index, destination.index)))
    }

    fn resolve_card(
        &self,
        board: &Board,
        gesture: &DragGesture,
        destination: &DropLocation,
    ) -> Result<DragCommand, DragError> {
        if destination.droppable_id == self.board_droppable_id {
            return Err(DragError::IncompatibleDestination {
                kind: DragKind::Card,
                droppable_id: destination.droppable_id.clone(),
            });
        }
        let source_list_id = parse_list_droppable(&gesture.source.droppable_id)?;
        let destination_list_id = parse_list_droppable(&destination.droppable_id)?;

        let source_list = board
            .find_list(source_list_id)
            .ok_or(BoardError::ListNotFound(source_list_id))?;
        let index = gesture.source.index;
        let card = source_list.card_at(index).ok_or(BoardError::InvalidIndex {
            index,
            len: source_list.len(),
        })?;
        if gesture.draggable_id.parse::<CardId>().ok() != Some(card.id()) {
            return Err(mismatch(gesture));
        }

        Ok(DragCommand::MoveCard(CardMove::new(
            CardSlot::new(source_list_id, index),
            CardSlot::new(destination_list_id, destination.index),
        )))
    }
}

fn parse_list_droppable(droppable_id: &str) -> Result<ListId, DragError> {
    droppable_id
        .parse()
        .map_err(|_| DragError::UnknownDroppable(droppable_id.to_owned()))
}

fn mismatch(gesture: &DragGesture) -> DragError {
    DragError::DraggableMismatch {
        draggable_id: gesture.draggable_id.clone(),
        droppable_id: gesture.source.droppable_id.clone(),
        index: gesture.source.index,
    }
}
