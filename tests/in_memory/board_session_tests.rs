//! In-memory integration tests for board sessions.

use super::helpers::{MemorySession, contents, list_at, list_titled, seeded_session};
use rstest::rstest;
use trellis::board::{
    domain::{BoardError, CardMove, CardSlot, ListMove, MoveOutcome, NoOpReason},
    services::{BoardSessionError, DragError, DragGesture, DropLocation},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_session_exposes_starter_board(
    seeded_session: MemorySession,
) -> Result<(), eyre::Report> {
    let board = seeded_session.snapshot().await?;

    let titles: Vec<&str> = board.lists().map(|list| list.title()).collect();
    eyre::ensure!(titles == ["To Do", "In Progress", "Done"], "unexpected titles {titles:?}");
    eyre::ensure!(
        contents(&board, list_at(&board, 0)?.id()) == ["Task 1", "Task 2"],
        "unexpected To Do cards"
    );
    eyre::ensure!(
        contents(&board, list_at(&board, 1)?.id()) == ["Task 3"],
        "unexpected In Progress cards"
    );
    eyre::ensure!(list_at(&board, 2)?.is_empty(), "Done should start empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn card_travels_through_workflow(seeded_session: MemorySession) -> Result<(), eyre::Report> {
    let board = seeded_session.snapshot().await?;
    let todo = list_titled(&board, "To Do")?;
    let doing = list_titled(&board, "In Progress")?;
    let done = list_titled(&board, "Done")?;

    let first = seeded_session
        .move_card(&CardMove::new(CardSlot::new(todo, 0), CardSlot::new(doing, 0)))
        .await?;
    eyre::ensure!(!first.is_noop(), "first move should apply");
    let second = seeded_session
        .move_card(&CardMove::new(CardSlot::new(doing, 1), CardSlot::new(done, 5)))
        .await?;
    eyre::ensure!(!second.is_noop(), "second move should apply");

    let board = seeded_session.snapshot().await?;
    eyre::ensure!(contents(&board, todo) == ["Task 2"], "unexpected To Do cards");
    eyre::ensure!(contents(&board, doing) == ["Task 1"], "unexpected In Progress cards");
    eyre::ensure!(contents(&board, done) == ["Task 3"], "unexpected Done cards");
    eyre::ensure!(board.card_count() == 3, "cards must be conserved");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_gesture_reorders_columns(seeded_session: MemorySession) -> Result<(), eyre::Report> {
    let board = seeded_session.snapshot().await?;
    let done = list_titled(&board, "Done")?;
    let gesture = DragGesture::dropped(
        done.to_string(),
        DropLocation::new("board", 2),
        DropLocation::new("board", 0),
    );

    let outcome = seeded_session.apply_gesture(&gesture).await?;

    let board = seeded_session.snapshot().await?;
    eyre::ensure!(
        outcome == MoveOutcome::Moved(board.clone()),
        "outcome should carry the committed board"
    );
    eyre::ensure!(list_at(&board, 0)?.id() == done, "Done should lead the board");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_move_to_same_slot_is_noop(seeded_session: MemorySession) -> Result<(), eyre::Report> {
    let outcome = seeded_session.move_list(&ListMove::new(1, 1)).await?;

    eyre::ensure!(
        outcome == MoveOutcome::NoOp(NoOpReason::SamePosition),
        "unexpected outcome {outcome:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_list_cascades_to_cards(seeded_session: MemorySession) -> Result<(), eyre::Report> {
    let board = seeded_session.snapshot().await?;
    let todo = list_titled(&board, "To Do")?;
    let doomed: Vec<_> = list_at(&board, 0)?.cards().iter().map(|card| card.id()).collect();

    let board = seeded_session.delete_list(todo).await?;

    eyre::ensure!(board.list_count() == 2, "list should be removed");
    eyre::ensure!(board.card_count() == 1, "cards of the list should be removed");
    eyre::ensure!(
        doomed.iter().all(|id| board.find_card(*id).is_none()),
        "deleted cards are still reachable"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gesture_naming_unknown_list_is_rejected(
    seeded_session: MemorySession,
) -> Result<(), eyre::Report> {
    let before = seeded_session.snapshot().await?;
    let todo = list_titled(&before, "To Do")?;
    let card = list_at(&before, 0)?
        .card_at(0)
        .map(|card| card.id().to_string())
        .ok_or_else(|| eyre::eyre!("seed card missing"))?;
    let gesture = DragGesture::dropped(
        card,
        DropLocation::new(todo.to_string(), 0),
        DropLocation::new("list-9", 0),
    );

    let result = seeded_session.apply_gesture(&gesture).await;

    eyre::ensure!(
        matches!(
            result,
            Err(BoardSessionError::Drag(DragError::UnknownDroppable(ref id))) if id == "list-9"
        ),
        "unexpected result {result:?}"
    );
    eyre::ensure!(
        seeded_session.snapshot().await? == before,
        "rejected gesture changed the board"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_missing_card_is_not_found(
    seeded_session: MemorySession,
) -> Result<(), eyre::Report> {
    let board = seeded_session.snapshot().await?;
    let done = list_titled(&board, "Done")?;
    let stray = list_at(&board, 0)?
        .card_at(0)
        .map(|card| card.id())
        .ok_or_else(|| eyre::eyre!("seed card missing"))?;

    let result = seeded_session.edit_card_content(done, stray, "moved?").await;

    eyre::ensure!(
        matches!(
            result,
            Err(BoardSessionError::Board(BoardError::CardNotFound { list, card }))
                if list == done && card == stray
        ),
        "unexpected result {result:?}"
    );
    Ok(())
}
