//! Stable snapshot hashing for deterministic verification.
//! Covers everything that influences future ticks: seed, tick, controller
//! state and grid occupancy. The wanderer only draws on ticks with a real choice,
//! so its draw count is hashed alongside the seed.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

fn direction_tag(direction: Option<Direction>) -> u8 {
    match direction {
        None => 0,
        Some(Direction::Up) => 1,
        Some(Direction::Down) => 2,
        Some(Direction::Left) => 3,
        Some(Direction::Right) => 4,
    }
}

fn kind_tag(kind: Option<EntityKind>) -> u8 {
    match kind {
        None => 0,
        Some(EntityKind::Link) => 1,
        Some(EntityKind::Wanderer) => 2,
        Some(EntityKind::Block) => 3,
        Some(EntityKind::PushableBlock) => 4,
    }
}

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.grid.size() as u64);
        for controller in &self.controllers {
            match controller {
                Controller::Link(link) => {
                    hasher.write_u8(1);
                    hasher.write_u8(direction_tag(link.pending()));
                    hasher.write_u8(direction_tag(link.facing()));
                    hasher.write_u8(u8::from(link.pushed()));
                }
                Controller::Wanderer(wanderer) => {
                    hasher.write_u8(2);
                    hasher.write_u8(direction_tag(wanderer.heading()));
                    hasher.write_u8(u8::from(wanderer.paused()));
                    hasher.write_u64(wanderer.draws());
                }
            }
        }
        for (pos, id) in self.grid.occupied() {
            hasher.write_i32(pos.x);
            hasher.write_i32(pos.y);
            hasher.write_u8(kind_tag(self.grid.kind_of(id)));
        }
        hasher.finish()
    }
}
