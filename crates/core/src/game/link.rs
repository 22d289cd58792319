//! Player-driven movement with the push-then-move protocol.
//! A request is resolved as two sequential single-cell grid steps: first the
//! adjacent pushable entity (if any), then Link. Link's own step fails on its
//! own when the obstacle could not be vacated, so nothing needs rolling back.

use log::debug;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::types::EntityId;

#[derive(Clone, Debug)]
pub struct LinkController {
    entity: EntityId,
    pending: Option<Direction>,
    pushed: bool,
    facing: Option<Direction>,
}

impl LinkController {
    pub fn new(entity: EntityId) -> Self {
        Self { entity, pending: None, pushed: false, facing: None }
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Replaces any outstanding request. `None` cancels it.
    pub fn request_direction(&mut self, direction: Option<Direction>) {
        self.pending = direction;
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Outcome of the last processed request's push attempt. Idle ticks leave it as is.
    pub fn pushed(&self) -> bool {
        self.pushed
    }

    /// Direction of Link's last successful step.
    pub fn facing(&self) -> Option<Direction> {
        self.facing
    }

    /// Consumes the pending request, if any, and returns whether Link moved.
    pub fn update(&mut self, grid: &mut Grid) -> bool {
        let Some(direction) = self.pending.take() else {
            return false;
        };

        let target = grid.position_of(self.entity).map(|pos| direction.step(pos));
        let pushed = target
            .and_then(|pos| grid.occupant(pos))
            .filter(|&id| grid.entity(id).is_some_and(|entity| entity.caps.pushable))
            .is_some_and(|block| grid.push(block, direction));

        let moved = grid.move_entity(self.entity, direction);
        self.pushed = pushed;
        if moved {
            self.facing = Some(direction);
        }
        debug!("link request {direction:?}: moved={moved} pushed={pushed}");
        moved
    }
}
