//! End-to-end flows over the public API: full games on toy boards, the
//! catalog path a server would take, and state snapshots.

use minegrid_core::{
    ClickMode, GameError, GameSession, Grid, Layout, RevealOutcome, SessionState, catalog,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const TOY: &str = "----x-----------";

fn toy_session() -> GameSession {
    GameSession::start(&Layout::parse((4, 4), TOY).unwrap())
}

#[test]
fn build_is_deterministic_over_the_layout() {
    let layout = Layout::parse_default(catalog::PUZZLES[0]).unwrap();
    let grid = Grid::build(&layout);

    for (index, marker) in catalog::PUZZLES[0].chars().enumerate() {
        let coords = ((index / 16) as u8, (index % 16) as u8);
        assert_eq!(grid.cell_at(coords).is_mine, marker == 'x');
    }
    assert_eq!(Grid::build(&layout), grid);
}

#[test]
fn full_game_to_a_win_on_the_toy_board() {
    // One mine at (1, 0). The zero region is cut off from the (0, 0)
    // corner, so clearing the board takes exactly two reveals.
    let mut session = toy_session();

    let view = session.click((0, 3), ClickMode::Reveal).unwrap();
    assert_eq!(view.visited_count, 14);
    assert_eq!(view.state, SessionState::Playing);

    // cells on the ring around the mine carry a count of 1
    assert_eq!(session.grid().cell_at((0, 1)).adjacent, Some(1));
    assert_eq!(session.grid().cell_at((2, 1)).adjacent, Some(1));
    // the mine itself never opens during a cascade
    assert!(!session.grid().cell_at((1, 0)).revealed);

    let view = session.click((0, 0), ClickMode::Reveal).unwrap();
    assert_eq!(view.visited_count, 15);
    assert_eq!(view.state, SessionState::Won);
    assert!(session.won());
}

#[test]
fn full_game_to_a_loss_freezes_everything() {
    let mut session = toy_session();

    session.click((0, 3), ClickMode::Reveal).unwrap();
    let view = session.click((1, 0), ClickMode::Reveal).unwrap();
    assert_eq!(view.state, SessionState::Lost);
    assert_eq!(view.visited_count, 15);

    let frozen = session.clone();
    session.click((0, 0), ClickMode::Reveal).unwrap();
    session.click((0, 0), ClickMode::Flag).unwrap();
    assert_eq!(session, frozen);
}

#[test]
fn flags_survive_unrelated_reveals() {
    let mut session = toy_session();

    session.click((3, 3), ClickMode::Flag).unwrap();
    session.click((0, 0), ClickMode::Reveal).unwrap();

    let flagged = session.grid().cell_at((3, 3));
    assert!(flagged.flagged);
}

#[test]
fn repeated_reveal_of_the_same_cell_changes_nothing() {
    let mut grid = Grid::build(&Layout::parse((4, 4), TOY).unwrap());

    assert_eq!(grid.reveal((0, 0)).unwrap(), RevealOutcome::Revealed(1));
    let settled = grid.clone();
    assert_eq!(grid.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
    assert_eq!(grid, settled);
}

#[test]
fn catalog_layout_plays_a_full_session() {
    let mut rng = SmallRng::seed_from_u64(42);
    let layout = catalog::resolve(None, None, &mut rng).unwrap();
    let mut session = GameSession::start(&layout);

    assert_eq!(session.size(), (16, 16));
    assert_eq!(session.mine_count(), layout.mine_count());

    let view = session.click((0, 4), ClickMode::Reveal).unwrap();
    assert!(view.visited_count >= 1);
}

#[test]
fn catalog_index_out_of_range_maps_to_not_found() {
    let mut rng = SmallRng::seed_from_u64(42);
    assert_eq!(
        catalog::resolve(Some(1000), None, &mut rng).unwrap_err(),
        GameError::PuzzleNotFound { index: 1000 }
    );
}

#[test]
fn session_state_serializes_and_comes_back_identical() {
    let mut session = toy_session();
    session.click((0, 3), ClickMode::Reveal).unwrap();
    session.click((2, 1), ClickMode::Flag).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, session);

    // views are serializable too, for the presentation layer
    let view_json = serde_json::to_string(&session.view()).unwrap();
    assert!(view_json.contains("\"visited_count\":14"));
}
