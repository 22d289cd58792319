use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use zelda_core::{InputJournal, ReplayResult, replay};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
    /// Number of ticks to replay
    #[arg(short, long)]
    ticks: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay(&journal, args.ticks).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("Link: {:?}", result.link_position);
    println!("Wanderer: {:?}", result.wanderer_position);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
