//! Autonomous wandering policy for the Zol-style enemy.
//!
//! Each tick the wanderer picks among the currently legal directions:
//! reversing is excluded unless it is the only way out, and the current
//! heading, when still available, is picked with probability 2/3.

use std::iter;

use log::debug;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::types::{EntityId, Pos};

#[derive(Clone, Debug)]
pub struct WanderingController<R = ChaCha8Rng> {
    entity: EntityId,
    heading: Option<Direction>,
    paused: bool,
    rng: R,
    /// Random numbers consumed so far.
    draws: u64,
}

impl<R: Rng> WanderingController<R> {
    pub fn new(entity: EntityId, rng: R) -> Self {
        Self { entity, heading: None, paused: false, rng, draws: 0 }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    #[cfg(test)]
    pub(crate) fn discard_draw(&mut self) {
        self.rng.next_u64();
        self.draws += 1;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Picks a new heading and tries to step along it. Returns whether the wanderer moved.
    ///
    /// A wanderer with no legal direction at all stays put and keeps its heading.
    pub fn update(&mut self, grid: &mut Grid) -> bool {
        if self.paused {
            return false;
        }
        let Some(pos) = grid.position_of(self.entity) else {
            return false;
        };

        let legal = legal_directions(grid, pos);
        let candidates = without_reversal(&legal, self.heading);
        let pool = sampling_pool(&candidates, self.heading);
        let choice = match pool.as_slice() {
            [] => {
                debug!("wanderer at ({}, {}) is enclosed", pos.x, pos.y);
                return false;
            }
            [only] => *only,
            _ => {
                self.draws += 1;
                pool[(self.rng.next_u64() % pool.len() as u64) as usize]
            }
        };

        self.heading = Some(choice);
        let moved = grid.move_entity(self.entity, choice);
        debug!("wanderer heading {choice:?} from {candidates:?}: moved={moved}");
        moved
    }
}

/// Directions whose neighbouring cell is in bounds and empty, in `Direction::ALL` order.
pub(crate) fn legal_directions(grid: &Grid, pos: Pos) -> Vec<Direction> {
    Direction::ALL.into_iter().filter(|dir| grid.is_free(dir.step(pos))).collect()
}

/// Drops the reversal of `heading`, unless that leaves nothing to choose from.
pub(crate) fn without_reversal(legal: &[Direction], heading: Option<Direction>) -> Vec<Direction> {
    let Some(heading) = heading else {
        return legal.to_vec();
    };
    let forward: Vec<Direction> =
        legal.iter().copied().filter(|&dir| dir != heading.opposite()).collect();
    if forward.is_empty() { legal.to_vec() } else { forward }
}

/// Builds the uniform sampling pool for `candidates`.
///
/// When `heading` is among the candidates it is repeated twice as often as all
/// the other entries combined, giving it a 2/3 share.
pub(crate) fn sampling_pool(candidates: &[Direction], heading: Option<Direction>) -> Vec<Direction> {
    let Some(heading) = heading.filter(|dir| candidates.contains(dir)) else {
        return candidates.to_vec();
    };
    let mut pool: Vec<Direction> =
        candidates.iter().copied().filter(|&dir| dir != heading).collect();
    let repeats = (2 * pool.len()).max(1);
    pool.extend(iter::repeat_n(heading, repeats));
    pool
}
