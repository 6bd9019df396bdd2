//! Board snapshot and its pure state transitions.

use super::moves::{self, CardMove, CardSlot, ListMove, MoveOutcome, NoOpReason};
use super::{BoardConfig, BoardError, BoardList, BoardResult, Card, CardId, DEFAULT_LIST_TITLE, ListId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable snapshot of every list and card on the board.
///
/// Every transition borrows the current snapshot and returns a new one, so a
/// snapshot handed to a renderer never changes underneath it. Lists are
/// shared between snapshots until a transition touches them; a list that a
/// transition does not touch is the same allocation in both snapshots.
///
/// Invariants held by every reachable snapshot:
///
/// - list identifiers are unique;
/// - card identifiers are unique across all lists;
/// - each card belongs to exactly one list.
///
/// # Examples
///
/// ```
/// use trellis::board::domain::{Board, CardMove, CardSlot};
///
/// let board = Board::new().add_list();
/// let list_id = board.list_at(0).expect("list added").id();
/// let board = board.add_card(list_id).expect("list exists");
/// let board = board.add_card(list_id).expect("list exists");
///
/// let first = board.list_at(0).and_then(|list| list.card_at(0)).map(|card| card.id());
/// let moved = board
///     .move_card(&CardMove::new(CardSlot::new(list_id, 0), CardSlot::new(list_id, 1)))
///     .expect("valid move")
///     .into_board(&board);
/// assert_eq!(moved.list_at(0).and_then(|list| list.card_at(1)).map(|card| card.id()), first);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    lists: Vec<Arc<BoardList>>,
}

#[derive(Deserialize)]
struct BoardData {
    #[serde(default)]
    lists: Vec<BoardList>,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        Self::from_lists(data.lists)
    }
}

impl Board {
    /// Creates a board with no lists.
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Creates a board from pre-built lists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateListId`] or
    /// [`BoardError::DuplicateCardId`] if identifiers repeat.
    pub fn from_lists(lists: impl IntoIterator<Item = BoardList>) -> BoardResult<Self> {
        let board = Self {
            lists: lists.into_iter().map(Arc::new).collect(),
        };
        board.validate()?;
        Ok(board)
    }

    /// Creates the starter board described by `config`, with fresh identifiers.
    #[must_use]
    pub fn seeded(config: &BoardConfig) -> Self {
        let lists = config
            .seed
            .iter()
            .map(|seed| {
                Arc::new(BoardList::new(seed.title.as_str()).with_cards(
                    seed.cards.iter().map(|content| Card::new(content.as_str())),
                ))
            })
            .collect();
        Self { lists }
    }

    /// Re-checks identifier uniqueness across the board.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate list or card identifier found.
    pub fn validate(&self) -> BoardResult<()> {
        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(list.id()) {
                return Err(BoardError::DuplicateListId(list.id()));
            }
            for card in list.cards() {
                if !card_ids.insert(card.id()) {
                    return Err(BoardError::DuplicateCardId(card.id()));
                }
            }
        }
        Ok(())
    }

    /// Returns the lists in column order.
    pub fn lists(&self) -> impl ExactSizeIterator<Item = &BoardList> {
        self.lists.iter().map(AsRef::as_ref)
    }

    /// Returns the list at `index`, if any.
    #[must_use]
    pub fn list_at(&self, index: usize) -> Option<&BoardList> {
        self.lists.get(index).map(AsRef::as_ref)
    }

    /// Returns the list with `list_id`, if any.
    #[must_use]
    pub fn find_list(&self, list_id: ListId) -> Option<&BoardList> {
        self.lists
            .iter()
            .find(|list| list.id() == list_id)
            .map(AsRef::as_ref)
    }

    /// Returns the column index of the list with `list_id`, if any.
    #[must_use]
    pub fn list_position(&self, list_id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id() == list_id)
    }

    /// Returns the card with `card_id`, wherever it lives.
    #[must_use]
    pub fn find_card(&self, card_id: CardId) -> Option<&Card> {
        self.lists
            .iter()
            .flat_map(|list| list.cards())
            .find(|card| card.id() == card_id)
    }

    /// Returns the list and index currently holding `card_id`.
    #[must_use]
    pub fn locate_card(&self, card_id: CardId) -> Option<CardSlot> {
        self.lists.iter().find_map(|list| {
            list.position_of(card_id)
                .map(|index| CardSlot::new(list.id(), index))
        })
    }

    /// Returns every card identifier in column-then-card order.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.lists
            .iter()
            .flat_map(|list| list.cards().iter().map(Card::id))
    }

    /// Returns the number of lists.
    #[must_use]
    pub const fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Returns the number of cards across all lists.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum()
    }

    /// Appends an empty list titled [`DEFAULT_LIST_TITLE`].
    #[must_use]
    pub fn add_list(&self) -> Self {
        let mut lists = self.lists.clone();
        lists.push(Arc::new(BoardList::new(DEFAULT_LIST_TITLE)));
        Self { lists }
    }

    /// Appends a pre-built list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateListId`] or
    /// [`BoardError::DuplicateCardId`] if the list would break uniqueness.
    pub fn push_list(&self, list: BoardList) -> BoardResult<Self> {
        if self.list_position(list.id()).is_some() {
            return Err(BoardError::DuplicateListId(list.id()));
        }
        let mut seen: HashSet<CardId> = self.card_ids().collect();
        if let Some(duplicate) = list.cards().iter().find(|card| !seen.insert(card.id())) {
            return Err(BoardError::DuplicateCardId(duplicate.id()));
        }
        let mut lists = self.lists.clone();
        lists.push(Arc::new(list));
        Ok(Self { lists })
    }

    /// Sets the title of a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] if the list does not exist.
    pub fn rename_list(&self, list_id: ListId, title: impl Into<String>) -> BoardResult<Self> {
        self.update_list(list_id, |list| {
            list.set_title(title.into());
            Ok(())
        })
    }

    /// Removes a list together with its cards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] if the list does not exist.
    pub fn delete_list(&self, list_id: ListId) -> BoardResult<Self> {
        let position = self.require_list(list_id)?;
        let mut lists = self.lists.clone();
        lists.remove(position);
        Ok(Self { lists })
    }

    /// Appends a card with default content to a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] if the list does not exist.
    pub fn add_card(&self, list_id: ListId) -> BoardResult<Self> {
        self.push_card(list_id, Card::default())
    }

    /// Appends a pre-built card to a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] if the list does not exist or
    /// [`BoardError::DuplicateCardId`] if the card is already on the board.
    pub fn push_card(&self, list_id: ListId, card: Card) -> BoardResult<Self> {
        self.require_list(list_id)?;
        if self.locate_card(card.id()).is_some() {
            return Err(BoardError::DuplicateCardId(card.id()));
        }
        self.update_list(list_id, |list| {
            list.cards_mut().push(card);
            Ok(())
        })
    }

    /// Replaces the content of a card, keeping its identity.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] or [`BoardError::CardNotFound`].
    pub fn edit_card_content(
        &self,
        list_id: ListId,
        card_id: CardId,
        content: impl Into<String>,
    ) -> BoardResult<Self> {
        self.update_list(list_id, |list| {
            let card = list
                .cards_mut()
                .iter_mut()
                .find(|card| card.id() == card_id)
                .ok_or(BoardError::CardNotFound {
                    list: list_id,
                    card: card_id,
                })?;
            card.set_content(content.into());
            Ok(())
        })
    }

    /// Removes a card from a list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] or [`BoardError::CardNotFound`].
    pub fn delete_card(&self, list_id: ListId, card_id: CardId) -> BoardResult<Self> {
        self.update_list(list_id, |list| {
            let index = list.position_of(card_id).ok_or(BoardError::CardNotFound {
                list: list_id,
                card: card_id,
            })?;
            list.cards_mut().remove(index);
            Ok(())
        })
    }

    /// Relocates one card, within a list or across lists.
    ///
    /// A cancelled request, or one whose destination resolves to the card's
    /// current position, yields [`MoveOutcome::NoOp`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ListNotFound`] for an unknown source or
    /// destination list and [`BoardError::InvalidIndex`] for an out-of-bounds
    /// source index. The board is never partially changed.
    pub fn move_card(&self, request: &CardMove) -> BoardResult<MoveOutcome> {
        let Some(destination) = request.destination else {
            return Ok(MoveOutcome::NoOp(NoOpReason::Cancelled));
        };
        let source = request.source;
        if source == destination {
            return Ok(MoveOutcome::NoOp(NoOpReason::SamePosition));
        }

        let source_position = self.require_list(source.list)?;
        let destination_position = self.require_list(destination.list)?;
        if source_position == destination_position {
            return self.move_card_within(source, source_position, destination.index);
        }

        let mut lists = self.lists.clone();
        let card = moves::take(
            list_slot(&mut lists, source_position, source.list)?.cards_mut(),
            source.index,
        )?;
        moves::place(
            list_slot(&mut lists, destination_position, destination.list)?.cards_mut(),
            destination.index,
            card,
        );
        Ok(MoveOutcome::Moved(Self { lists }))
    }

    /// Reorders the lists themselves.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] for an out-of-bounds source index.
    pub fn move_list(&self, request: &ListMove) -> BoardResult<MoveOutcome> {
        let Some(destination_index) = request.destination_index else {
            return Ok(MoveOutcome::NoOp(NoOpReason::Cancelled));
        };
        if request.source_index == destination_index {
            return Ok(MoveOutcome::NoOp(NoOpReason::SamePosition));
        }

        let len = self.lists.len();
        moves::check_source_index(request.source_index, len)?;
        let Some(target) = moves::resolve_within(request.source_index, destination_index, len)
        else {
            return Ok(MoveOutcome::NoOp(NoOpReason::SamePosition));
        };

        let mut lists = self.lists.clone();
        moves::relocate(&mut lists, request.source_index, target)?;
        Ok(MoveOutcome::Moved(Self { lists }))
    }

    fn move_card_within(
        &self,
        source: CardSlot,
        position: usize,
        requested: usize,
    ) -> BoardResult<MoveOutcome> {
        let len = self.list_at(position).map_or(0, BoardList::len);
        moves::check_source_index(source.index, len)?;
        let Some(target) = moves::resolve_within(source.index, requested, len) else {
            return Ok(MoveOutcome::NoOp(NoOpReason::SamePosition));
        };

        let mut lists = self.lists.clone();
        moves::relocate(
            list_slot(&mut lists, position, source.list)?.cards_mut(),
            source.index,
            target,
        )?;
        Ok(MoveOutcome::Moved(Self { lists }))
    }

    fn require_list(&self, list_id: ListId) -> BoardResult<usize> {
        self.list_position(list_id)
            .ok_or(BoardError::ListNotFound(list_id))
    }

    fn update_list<F>(&self, list_id: ListId, edit: F) -> BoardResult<Self>
    where
        F: FnOnce(&mut BoardList) -> BoardResult<()>,
    {
        let position = self.require_list(list_id)?;
        let mut lists = self.lists.clone();
        edit(list_slot(&mut lists, position, list_id)?)?;
        Ok(Self { lists })
    }
}

/// Borrows a list for writing, copying it first if another snapshot shares it.
fn list_slot(
    lists: &mut [Arc<BoardList>],
    position: usize,
    list_id: ListId,
) -> BoardResult<&mut BoardList> {
    lists
        .get_mut(position)
        .map(Arc::make_mut)
        .ok_or(BoardError::ListNotFound(list_id))
}
