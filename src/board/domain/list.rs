//! List (Kanban column) value type.

use super::{Card, CardId, ListId};
use serde::{Deserialize, Serialize};

/// Title given to lists created without an explicit title.
pub const DEFAULT_LIST_TITLE: &str = "New List";

/// A titled, ordered container of cards.
///
/// Card order is display and priority order. Lists are only mutated through
/// [`Board`](super::Board) transitions, which keep card identifiers unique
/// across the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    id: ListId,
    title: String,
    #[serde(default)]
    cards: Vec<Card>,
}

impl BoardList {
    /// Creates an empty list with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(ListId::new(), title)
    }

    /// Creates an empty list with a known identifier.
    #[must_use]
    pub fn with_id(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Replaces the card sequence.
    ///
    /// Uniqueness is checked when the list is placed on a board.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards = cards.into_iter().collect();
        self
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the list title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the index of the card with `card_id`, if present.
    #[must_use]
    pub fn position_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == card_id)
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when the list holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(super) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(super) const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}
