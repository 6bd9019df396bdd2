//! Card value type.

use super::CardId;
use serde::{Deserialize, Serialize};

/// Content given to cards created without explicit text.
pub const DEFAULT_CARD_CONTENT: &str = "New Task";

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    content: String,
}

impl Card {
    /// Creates a card with a fresh identifier.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(CardId::new(), content)
    }

    /// Creates a card with a known identifier.
    #[must_use]
    pub fn with_id(id: CardId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub(super) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new(DEFAULT_CARD_CONTENT)
    }
}
