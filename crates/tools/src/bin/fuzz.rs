use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use zelda_core::{Direction, Game};
use zelda_tools::{DEFAULT_SEED, Scenario, demo_level};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
    /// TOML scenario file; the built-in demo level is used when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let level = match &args.scenario {
        Some(path) => Scenario::load(path)?.level,
        None => demo_level(),
    };
    println!("Starting Fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(&level, args.seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let entity_count = usize::from(level.link.is_some())
        + usize::from(level.wanderer.is_some())
        + level.blocks.len()
        + level.pushable_blocks.len();
    let size = game.grid().size() as i32;

    for tick in 0..args.ticks {
        let direction = choose(
            &mut rng,
            &[
                None,
                Some(Direction::Up),
                Some(Direction::Down),
                Some(Direction::Left),
                Some(Direction::Right),
            ],
        );
        game.request_link_direction(direction);
        game.update();

        // Every configured entity stays placed on a distinct in-bounds cell.
        let mut seen = BTreeSet::new();
        for (pos, _) in game.grid().occupied() {
            ensure!(
                (0..size).contains(&pos.x) && (0..size).contains(&pos.y),
                "tick {tick}: {pos:?} out of bounds"
            );
            seen.insert(pos);
        }
        ensure!(
            seen.len() == entity_count,
            "tick {tick}: expected {entity_count} placed entities, found {}\n{}",
            seen.len(),
            game.draw_grid_diag()
        );
        if let Some(pos) = game.link_position() {
            ensure!(
                game.wanderer_position() != Some(pos),
                "tick {tick}: Link and wanderer overlap"
            );
        }
    }

    println!("{}", game.draw_grid_diag());
    println!("Fuzzing completed successfully.");
    Ok(())
}
