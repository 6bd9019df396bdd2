//! When steps for board drag-and-drop BDD scenarios.

use super::world::{BoardDragWorld, list_titled, run_async};
use rstest_bdd_macros::when;
use trellis::board::services::{DragGesture, DropLocation};

fn card_draggable(
    world: &mut BoardDragWorld,
    source: &str,
    index: usize,
) -> Result<(String, String), eyre::Report> {
    let board = world.committed_board()?;
    let list_id = list_titled(&board, source)?;
    let card_id = board
        .find_list(list_id)
        .and_then(|list| list.card_at(index))
        .map(|card| card.id().to_string())
        .ok_or_else(|| eyre::eyre!("no card at index {index} of {source}"))?;
    Ok((card_id, list_id.to_string()))
}

fn apply(world: &mut BoardDragWorld, gesture: &DragGesture) {
    let result = run_async(world.session().apply_gesture(gesture));
    world.last_result = Some(result);
}

#[when(
    r#"the card at index {from:usize} of "{source}" is dropped at index {to:usize} of "{target}""#
)]
fn card_dropped(
    world: &mut BoardDragWorld,
    from: usize,
    source: String,
    to: usize,
    target: String,
) -> Result<(), eyre::Report> {
    let (card_id, source_id) = card_draggable(world, &source, from)?;
    let target_id = list_titled(&world.committed_board()?, &target)?;
    let gesture = DragGesture::dropped(
        card_id,
        DropLocation::new(source_id, from),
        DropLocation::new(target_id.to_string(), to),
    );
    apply(world, &gesture);
    Ok(())
}

#[when(
    r#"the card at index {from:usize} of "{source}" is dropped at index {to:usize} of unknown list "{target}""#
)]
fn card_dropped_on_unknown_list(
    world: &mut BoardDragWorld,
    from: usize,
    source: String,
    to: usize,
    target: String,
) -> Result<(), eyre::Report> {
    let (card_id, source_id) = card_draggable(world, &source, from)?;
    let gesture = DragGesture::dropped(
        card_id,
        DropLocation::new(source_id, from),
        DropLocation::new(target, to),
    );
    apply(world, &gesture);
    Ok(())
}

#[when(r#"the card at index {from:usize} of "{source}" is released outside any list"#)]
fn card_released_outside(
    world: &mut BoardDragWorld,
    from: usize,
    source: String,
) -> Result<(), eyre::Report> {
    let (card_id, source_id) = card_draggable(world, &source, from)?;
    let gesture = DragGesture::cancelled(card_id, DropLocation::new(source_id, from));
    apply(world, &gesture);
    Ok(())
}

#[when(r#"the list "{title}" is dropped at index {to:usize}"#)]
fn list_dropped(world: &mut BoardDragWorld, title: String, to: usize) -> Result<(), eyre::Report> {
    let board = world.committed_board()?;
    let list_id = list_titled(&board, &title)?;
    let from = board
        .list_position(list_id)
        .ok_or_else(|| eyre::eyre!("list {title} has no position"))?;
    let board_droppable = world.session().drag_adapter().board_droppable_id().to_owned();
    let gesture = DragGesture::dropped(
        list_id.to_string(),
        DropLocation::new(board_droppable.clone(), from),
        DropLocation::new(board_droppable, to),
    );
    apply(world, &gesture);
    Ok(())
}
