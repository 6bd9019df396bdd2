//! Then steps for board drag-and-drop BDD scenarios.

use super::world::{BoardDragWorld, list_titled, parse_cards, run_async};
use rstest_bdd_macros::then;
use trellis::board::{
    domain::{MoveOutcome, NoOpReason},
    ports::{BoardSnapshotStore, SnapshotRevision},
    services::{BoardSessionError, DragError},
};

#[then(r#"list "{title}" holds "{cards}""#)]
fn list_holds(world: &mut BoardDragWorld, title: String, cards: String) -> Result<(), eyre::Report> {
    let board = world.committed_board()?;
    let list_id = list_titled(&board, &title)?;
    let actual: Vec<String> = board
        .find_list(list_id)
        .map(|list| {
            list.cards()
                .iter()
                .map(|card| card.content().to_owned())
                .collect()
        })
        .unwrap_or_default();
    let expected = parse_cards(&cards);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {title} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the lists are ordered "{titles}""#)]
fn lists_are_ordered(world: &mut BoardDragWorld, titles: String) -> Result<(), eyre::Report> {
    let board = world.committed_board()?;
    let actual: Vec<String> = board.lists().map(|list| list.title().to_owned()).collect();
    let expected = parse_cards(&titles);
    if actual != expected {
        return Err(eyre::eyre!("expected lists {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the snapshot revision is {revision:u64}")]
fn snapshot_revision_is(world: &mut BoardDragWorld, revision: u64) -> Result<(), eyre::Report> {
    let store = world
        .store
        .clone()
        .ok_or_else(|| eyre::eyre!("missing snapshot store in scenario world"))?;
    let stored = run_async(store.load())?;
    eyre::ensure!(
        stored.revision == SnapshotRevision::new(revision),
        "expected revision {revision}, found {}",
        stored.revision
    );
    Ok(())
}

#[then("the drag is a cancelled no-op")]
fn drag_is_cancelled(world: &BoardDragWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drag result"))?;
    if !matches!(result, Ok(MoveOutcome::NoOp(NoOpReason::Cancelled))) {
        return Err(eyre::eyre!("expected cancelled no-op, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the drag is rejected for unknown droppable "{droppable}""#)]
fn drag_rejected_for_unknown_droppable(
    world: &BoardDragWorld,
    droppable: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing drag result"))?;
    if !matches!(
        result,
        Err(BoardSessionError::Drag(DragError::UnknownDroppable(id))) if *id == droppable
    ) {
        return Err(eyre::eyre!(
            "expected unknown droppable {droppable}, got {result:?}"
        ));
    }
    Ok(())
}
