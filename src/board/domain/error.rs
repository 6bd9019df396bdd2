//! Error types for board state transitions.

use super::{CardId, ListId};
use thiserror::Error;

/// Errors returned by board state transitions.
///
/// A degenerate or cancelled move is not an error; see
/// [`MoveOutcome::NoOp`](super::MoveOutcome::NoOp).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The referenced list does not exist on the board.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// The referenced card does not exist in the referenced list.
    #[error("card {card} not found in list {list}")]
    CardNotFound {
        /// List that was searched.
        list: ListId,
        /// Card that was requested.
        card: CardId,
    },

    /// A source index lies outside the sequence it refers to.
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Length of the sequence at the time of the request.
        len: usize,
    },

    /// A list with the same identifier is already on the board.
    #[error("duplicate list identifier: {0}")]
    DuplicateListId(ListId),

    /// A card with the same identifier is already on the board.
    #[error("duplicate card identifier: {0}")]
    DuplicateCardId(CardId),
}

/// Result type for board state transitions.
pub type BoardResult<T> = Result<T, BoardError>;

/// Error returned while parsing a list or card identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid board identifier: {0}")]
pub struct ParseBoardIdError(pub String);
