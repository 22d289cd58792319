use std::error::Error;
use std::fmt;

use crate::game::{Game, GameError};
use crate::journal::{InputJournal, InputPayload};
use crate::types::Pos;

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    InvalidLevel(GameError),
    /// Record `index` is stamped earlier than the record before it.
    OutOfOrder { index: usize, tick: u64 },
    /// Record `index` targets a tick the replay never reaches.
    BeyondEnd { index: usize, tick: u64 },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel(e) => write!(f, "journal level is invalid: {e}"),
            Self::OutOfOrder { index, tick } => {
                write!(f, "input {index} at tick {tick} is older than the input before it")
            }
            Self::BeyondEnd { index, tick } => {
                write!(f, "input {index} at tick {tick} lies past the end of the replay")
            }
        }
    }
}

impl Error for ReplayError {}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_tick: u64,
    pub final_snapshot_hash: u64,
    pub link_position: Option<Pos>,
    pub wanderer_position: Option<Pos>,
}

/// Rebuilds the journal's level and runs `ticks` updates, applying each
/// record just before the update of its tick.
pub fn replay(journal: &InputJournal, ticks: u64) -> Result<ReplayResult, ReplayError> {
    let mut previous_tick = 0;
    for (index, record) in journal.inputs.iter().enumerate() {
        if record.tick < previous_tick {
            return Err(ReplayError::OutOfOrder { index, tick: record.tick });
        }
        if record.tick >= ticks {
            return Err(ReplayError::BeyondEnd { index, tick: record.tick });
        }
        previous_tick = record.tick;
    }

    let mut game =
        Game::new(&journal.config, journal.seed).map_err(ReplayError::InvalidLevel)?;
    let mut inputs = journal.inputs.iter().peekable();

    while game.current_tick() < ticks {
        while let Some(record) = inputs.next_if(|record| record.tick == game.current_tick()) {
            apply_input(&mut game, &record.payload);
        }
        game.update();
    }

    Ok(ReplayResult {
        final_tick: game.current_tick(),
        final_snapshot_hash: game.snapshot_hash(),
        link_position: game.link_position(),
        wanderer_position: game.wanderer_position(),
    })
}

pub fn apply_input(game: &mut Game, payload: &InputPayload) {
    match payload {
        InputPayload::LinkDirection { direction } => game.request_link_direction(*direction),
        InputPayload::WandererPaused { paused } => game.set_wanderer_paused(*paused),
    }
}

#[cfg(test)]
mod tests;
