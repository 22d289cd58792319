use super::*;
use crate::direction::Direction;
use crate::game::GameConfig;
use crate::grid::GridError;

fn arena() -> GameConfig {
    GameConfig {
        link: Some(Pos::new(1, 1)),
        wanderer: Some(Pos::new(6, 6)),
        blocks: vec![Pos::new(4, 4), Pos::new(5, 4)],
        pushable_blocks: vec![Pos::new(2, 1), Pos::new(7, 7)],
        ..GameConfig::default()
    }
}

#[test]
fn replay_matches_live_run() {
    let config = arena();
    let mut live = Game::new(&config, 4242).unwrap();
    let mut journal = InputJournal::new(4242, config);

    let script = [
        (0, Some(Direction::Right)),
        (1, Some(Direction::Right)),
        (3, Some(Direction::Down)),
        (4, None),
        (7, Some(Direction::Left)),
    ];
    let mut script_iter = script.iter().peekable();
    for tick in 0..40 {
        if tick == 10 {
            live.set_wanderer_paused(true);
            journal.append_wanderer_paused(tick, true);
        }
        if tick == 20 {
            live.set_wanderer_paused(false);
            journal.append_wanderer_paused(tick, false);
        }
        while let Some(&&(at, direction)) = script_iter.peek() {
            if at != tick {
                break;
            }
            live.request_link_direction(direction);
            journal.append_link_direction(tick, direction);
            script_iter.next();
        }
        live.update();
    }

    let result = replay(&journal, 40).unwrap();
    assert_eq!(result.final_tick, 40);
    assert_eq!(result.final_snapshot_hash, live.snapshot_hash());
    assert_eq!(result.link_position, live.link_position());
    assert_eq!(result.wanderer_position, live.wanderer_position());
}

#[test]
fn last_input_within_a_tick_wins() {
    let mut journal = InputJournal::new(1, arena());
    journal.append_link_direction(0, Some(Direction::Down));
    journal.append_link_direction(0, Some(Direction::Right));

    let result = replay(&journal, 1).unwrap();
    assert_eq!(result.link_position, Some(Pos::new(2, 1)));
}

#[test]
fn rejects_out_of_order_inputs() {
    let mut journal = InputJournal::new(1, arena());
    journal.append_link_direction(5, Some(Direction::Down));
    journal.append_link_direction(2, Some(Direction::Up));

    assert_eq!(replay(&journal, 10), Err(ReplayError::OutOfOrder { index: 1, tick: 2 }));
}

#[test]
fn rejects_inputs_past_the_end() {
    let mut journal = InputJournal::new(1, arena());
    journal.append_link_direction(10, Some(Direction::Down));

    assert_eq!(replay(&journal, 10), Err(ReplayError::BeyondEnd { index: 0, tick: 10 }));
}

#[test]
fn rejects_invalid_levels() {
    let config = GameConfig { link: Some(Pos::new(-1, 0)), ..GameConfig::default() };
    let journal = InputJournal::new(1, config);
    assert!(matches!(replay(&journal, 1), Err(ReplayError::InvalidLevel(_))));
}

#[test]
fn rejects_journals_with_oversized_grids() {
    let json = r#"{"format_version":1,"seed":1,"config":{"grid_size":8589934592},"inputs":[]}"#;
    let journal: InputJournal = serde_json::from_str(json).unwrap();
    assert_eq!(
        replay(&journal, 1),
        Err(ReplayError::InvalidLevel(GameError::Grid(GridError::InvalidSize)))
    );
}
