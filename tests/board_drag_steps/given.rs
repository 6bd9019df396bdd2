//! Given steps for board drag-and-drop BDD scenarios.

use super::world::{BoardDragWorld, parse_cards};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use trellis::board::domain::{BoardList, Card};

fn push_list(world: &mut BoardDragWorld, title: String, cards: &str) -> Result<(), eyre::Report> {
    let list = BoardList::new(title).with_cards(parse_cards(cards).into_iter().map(Card::new));
    world.board = world
        .board
        .push_list(list)
        .wrap_err("add list to scenario board")?;
    Ok(())
}

#[given(r#"a board with list "{title}" holding "{cards}""#)]
fn board_with_list(
    world: &mut BoardDragWorld,
    title: String,
    cards: String,
) -> Result<(), eyre::Report> {
    push_list(world, title, &cards)
}

#[given(r#"a list "{title}" holding "{cards}""#)]
fn another_list(
    world: &mut BoardDragWorld,
    title: String,
    cards: String,
) -> Result<(), eyre::Report> {
    push_list(world, title, &cards)
}

#[given(r#"an empty list "{title}""#)]
fn empty_list(world: &mut BoardDragWorld, title: String) -> Result<(), eyre::Report> {
    push_list(world, title, "")
}
