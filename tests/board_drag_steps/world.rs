//! Shared world state for board drag-and-drop BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use trellis::board::{
    adapters::memory::InMemoryBoardSnapshotStore,
    domain::{Board, BoardConfig, ListId, MoveOutcome},
    services::{BoardSession, BoardSessionError},
};

/// Session type used by the BDD world.
pub type TestBoardSession = BoardSession<InMemoryBoardSnapshotStore>;

/// Scenario world for board drag-and-drop behaviour tests.
pub struct BoardDragWorld {
    pub board: Board,
    pub store: Option<Arc<InMemoryBoardSnapshotStore>>,
    pub session: Option<TestBoardSession>,
    pub last_result: Option<Result<MoveOutcome, BoardSessionError>>,
}

impl BoardDragWorld {
    /// Creates a world with an empty board and no session yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            store: None,
            session: None,
            last_result: None,
        }
    }

    /// Returns the session, starting it from the board built so far.
    pub fn session(&mut self) -> &TestBoardSession {
        let board = self.board.clone();
        let store = self
            .store
            .get_or_insert_with(|| Arc::new(InMemoryBoardSnapshotStore::with_board(board)));
        let store = Arc::clone(store);
        self.session
            .get_or_insert_with(|| BoardSession::new(store, Arc::new(BoardConfig::empty())))
    }

    /// Returns the committed board.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn committed_board(&mut self) -> Result<Board, eyre::Report> {
        Ok(run_async(self.session().snapshot())?)
    }
}

impl Default for BoardDragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardDragWorld {
    BoardDragWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated card listing into card contents.
#[must_use]
pub fn parse_cards(cards: &str) -> Vec<String> {
    cards
        .split(',')
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Finds the list titled `title`.
///
/// # Errors
///
/// Returns an error if no list carries the title.
pub fn list_titled(board: &Board, title: &str) -> Result<ListId, eyre::Report> {
    board
        .lists()
        .find(|list| list.title() == title)
        .map(|list| list.id())
        .ok_or_else(|| eyre::eyre!("no list titled {title}"))
}
