//! Domain model for the board reordering engine.
//!
//! A [`Board`] is an immutable snapshot of ordered lists holding ordered
//! cards. Every operation borrows a snapshot and returns a new one, leaving
//! the input untouched, so the transition core stays independent of whatever
//! holds the "current" snapshot.

mod board;
mod card;
mod config;
mod error;
mod ids;
mod list;
mod moves;

pub use board::Board;
pub use card::{Card, DEFAULT_CARD_CONTENT};
pub use config::{BOARD_DROPPABLE_ID, BoardConfig, BoardConfigError, SeedList};
pub use error::{BoardError, BoardResult, ParseBoardIdError};
pub use ids::{CardId, ListId};
pub use list::{BoardList, DEFAULT_LIST_TITLE};
pub use moves::{CardMove, CardSlot, ListMove, MoveOutcome, NoOpReason};
