//! Move requests, outcomes, and the remove-then-insert sequence algorithm.
//!
//! A move removes exactly one element at a source index and inserts it at a
//! destination index. When source and destination are the same sequence the
//! destination index is read against the post-removal sequence, so a move
//! within one list is the same single remove-then-insert as a move across
//! lists. Destination indices are clamped into `[0, len]`; source indices are
//! never clamped.

use super::{Board, BoardError, BoardResult, ListId};

/// Position of a card: the owning list and the index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSlot {
    /// Owning list.
    pub list: ListId,
    /// Zero-based position within the list.
    pub index: usize,
}

impl CardSlot {
    /// Creates a card slot.
    #[must_use]
    pub const fn new(list: ListId, index: usize) -> Self {
        Self { list, index }
    }
}

/// Request to relocate one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMove {
    /// Where the card currently is.
    pub source: CardSlot,
    /// Where the card should go; `None` when the gesture was cancelled.
    pub destination: Option<CardSlot>,
}

impl CardMove {
    /// Creates a move between two slots.
    #[must_use]
    pub const fn new(source: CardSlot, destination: CardSlot) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    /// Creates a move whose gesture ended outside any list.
    #[must_use]
    pub const fn cancelled(source: CardSlot) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Request to reorder one list within the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMove {
    /// Current index of the list.
    pub source_index: usize,
    /// Target index; `None` when the gesture was cancelled.
    pub destination_index: Option<usize>,
}

impl ListMove {
    /// Creates a list reorder request.
    #[must_use]
    pub const fn new(source_index: usize, destination_index: usize) -> Self {
        Self {
            source_index,
            destination_index: Some(destination_index),
        }
    }

    /// Creates a list reorder whose gesture was cancelled.
    #[must_use]
    pub const fn cancelled(source_index: usize) -> Self {
        Self {
            source_index,
            destination_index: None,
        }
    }
}

/// Why a move left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoOpReason {
    /// The gesture ended without a destination.
    Cancelled,
    /// The destination resolves to the element's current position.
    SamePosition,
}

/// Result of a successful move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The element was relocated and this is the new snapshot.
    Moved(Board),
    /// Nothing changed; callers keep their current snapshot.
    NoOp(NoOpReason),
}

impl MoveOutcome {
    /// Returns `true` if the board was left untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }

    /// Returns the snapshot to render after this outcome.
    #[must_use]
    pub fn into_board(self, current: &Board) -> Board {
        match self {
            Self::Moved(board) => board,
            Self::NoOp(_) => current.clone(),
        }
    }
}

/// Clamps a requested insertion index into `[0, len]`.
pub(super) fn clamp_insert_index(requested: usize, len: usize) -> usize {
    requested.min(len)
}

/// Fails with [`BoardError::InvalidIndex`] unless `index < len`.
pub(super) const fn check_source_index(index: usize, len: usize) -> BoardResult<()> {
    if index >= len {
        return Err(BoardError::InvalidIndex { index, len });
    }
    Ok(())
}

/// Resolves the insertion index for a move inside a single sequence of
/// length `len`, or `None` when the move would not change anything.
pub(super) fn resolve_within(from: usize, requested: usize, len: usize) -> Option<usize> {
    let target = clamp_insert_index(requested, len.saturating_sub(1));
    (target != from).then_some(target)
}

/// Moves the element at `from` to `to` within one sequence.
///
/// `to` is interpreted against the sequence after removal.
pub(super) fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> BoardResult<()> {
    check_source_index(from, items.len())?;
    let item = items.remove(from);
    let target = clamp_insert_index(to, items.len());
    items.insert(target, item);
    Ok(())
}

/// Removes the element at `from`, failing on an out-of-bounds index.
pub(super) fn take<T>(items: &mut Vec<T>, from: usize) -> BoardResult<T> {
    check_source_index(from, items.len())?;
    Ok(items.remove(from))
}

/// Inserts `item` at `to`, clamped to the end of the sequence.
pub(super) fn place<T>(items: &mut Vec<T>, to: usize, item: T) {
    let target = clamp_insert_index(to, items.len());
    items.insert(target, item);
}
