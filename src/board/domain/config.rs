//! Board configuration: defaults for new elements and the starter board.

use super::{DEFAULT_CARD_CONTENT, DEFAULT_LIST_TITLE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Droppable identifier the presentation layer gives to the list strip.
pub const BOARD_DROPPABLE_ID: &str = "board";

/// A list created when a board is seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedList {
    /// List title.
    pub title: String,
    /// Card contents, in display order.
    #[serde(default)]
    pub cards: Vec<String>,
}

impl SeedList {
    /// Creates a seed list.
    #[must_use]
    pub fn new(title: impl Into<String>, cards: impl IntoIterator<Item = String>) -> Self {
        Self {
            title: title.into(),
            cards: cards.into_iter().collect(),
        }
    }
}

/// Board behaviour that the embedding page may tune.
///
/// Missing fields take their [`Default`] values when loaded from JSON.
///
/// # Examples
///
/// ```
/// use trellis::board::domain::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.default_card_content, "New Task");
/// assert_eq!(config.seed.len(), 3);
///
/// let custom = BoardConfig::from_json_str(r#"{ "default_list_title": "Backlog" }"#)
///     .expect("valid configuration");
/// assert_eq!(custom.default_list_title, "Backlog");
/// assert_eq!(custom.board_droppable_id, "board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Title for lists created by "add list".
    pub default_list_title: String,
    /// Content for cards created by "add card".
    pub default_card_content: String,
    /// Droppable identifier that marks a drag as a list reorder.
    pub board_droppable_id: String,
    /// Lists placed on a freshly seeded board.
    pub seed: Vec<SeedList>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_list_title: DEFAULT_LIST_TITLE.to_owned(),
            default_card_content: DEFAULT_CARD_CONTENT.to_owned(),
            board_droppable_id: BOARD_DROPPABLE_ID.to_owned(),
            seed: vec![
                SeedList::new("To Do", ["Task 1".to_owned(), "Task 2".to_owned()]),
                SeedList::new("In Progress", ["Task 3".to_owned()]),
                SeedList::new("Done", Vec::new()),
            ],
        }
    }
}

impl BoardConfig {
    /// Creates a configuration that seeds an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seed: Vec::new(),
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed JSON and
    /// [`BoardConfigError::BlankDroppableId`] when the board droppable
    /// identifier is blank.
    pub fn from_json_str(json: &str) -> Result<Self, BoardConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.board_droppable_id.trim().is_empty() {
            return Err(BoardConfigError::BlankDroppableId);
        }
        Ok(config)
    }
}

/// Errors returned while loading a [`BoardConfig`].
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The board droppable identifier is empty after trimming.
    #[error("board droppable identifier must not be empty")]
    BlankDroppableId,
}
