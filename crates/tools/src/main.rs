use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use zelda_core::{Game, InputJournal};
use zelda_tools::{Scenario, demo_level, parse_moves};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML scenario file; the built-in demo level is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// Seed for the wanderer; overrides the scenario's seed
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to run; defaults to the length of the move script
    #[arg(short, long)]
    ticks: Option<u64>,
    /// Link's moves, one per tick: U, D, L, R or . for idle
    #[arg(short, long, default_value = "")]
    moves: String,
    /// Print the board after every tick instead of only at the end
    #[arg(short, long)]
    verbose: bool,
    /// Write the inputs of this run as a replayable JSON journal
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario { seed: None, level: demo_level() },
    };
    let seed = scenario.resolve_seed(args.seed);
    let moves = parse_moves(&args.moves)?;
    let ticks = args.ticks.unwrap_or(moves.len() as u64);

    let mut game = Game::new(&scenario.level, seed).context("Failed to build level")?;
    let mut journal = InputJournal::new(seed, scenario.level.clone());
    info!("running {ticks} ticks with seed {seed}");

    for tick in 0..ticks {
        if let Some(&direction) = moves.get(tick as usize) {
            game.request_link_direction(direction);
            journal.append_link_direction(tick, direction);
        }
        game.update();
        if args.verbose {
            println!("tick {}:\n{}", game.current_tick(), game.draw_grid_diag());
        }
    }

    if !args.verbose {
        println!("{}", game.draw_grid_diag());
    }
    println!("Final Tick: {}", game.current_tick());
    println!("Link: {:?} (pushed: {})", game.link_position(), game.link_pushed());
    println!("Wanderer: {:?}", game.wanderer_position());
    println!("Snapshot Hash: {}", game.snapshot_hash());

    if let Some(path) = &args.journal_out {
        let json = serde_json::to_string_pretty(&journal)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write journal file: {}", path.display()))?;
        println!("Journal written to {}", path.display());
    }

    Ok(())
}
