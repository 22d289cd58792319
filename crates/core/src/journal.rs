use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::game::GameConfig;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to reproduce a run: the level, the seed and the
/// external inputs, each stamped with the tick whose update consumes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub tick: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    LinkDirection { direction: Option<Direction> },
    WandererPaused { paused: bool },
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    pub fn append_link_direction(&mut self, tick: u64, direction: Option<Direction>) {
        self.inputs.push(InputRecord { tick, payload: InputPayload::LinkDirection { direction } });
    }

    pub fn append_wanderer_paused(&mut self, tick: u64, paused: bool) {
        self.inputs.push(InputRecord { tick, payload: InputPayload::WandererPaused { paused } });
    }
}
