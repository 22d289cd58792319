//! Shared level fixtures for the `game` test suites.

use super::*;

pub(super) fn link_only(at: Pos) -> Game {
    let config = GameConfig { link: Some(at), ..GameConfig::default() };
    Game::new(&config, 0).expect("fixture layout is valid")
}

pub(super) fn push_lane(blocks: &[Pos], pushable: &[Pos]) -> Game {
    let config = GameConfig {
        link: Some(Pos::new(1, 1)),
        blocks: blocks.to_vec(),
        pushable_blocks: pushable.to_vec(),
        ..GameConfig::default()
    };
    Game::new(&config, 0).expect("fixture layout is valid")
}

/// Wanderer at the left end of row 0 with row 1 walled off.
pub(super) fn top_row_corridor(seed: u64) -> Game {
    let config = GameConfig {
        wanderer: Some(Pos::new(0, 0)),
        blocks: (0..GRID_SIZE as i32).map(|x| Pos::new(x, 1)).collect(),
        ..GameConfig::default()
    };
    Game::new(&config, seed).expect("fixture layout is valid")
}

pub(super) fn step(game: &mut Game, direction: Direction) {
    game.request_link_direction(Some(direction));
    game.update();
}
