use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt;

use log::{trace, warn};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::grid::{Grid, GridError};
use crate::types::*;

mod diag;
mod hash;
mod link;
mod wanderer;

#[cfg(test)]
mod test_support;

pub use link::LinkController;
pub use wanderer::WanderingController;

/// Initial layout of a level. Every group is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: usize,
    pub link: Option<Pos>,
    pub wanderer: Option<Pos>,
    pub blocks: Vec<Pos>,
    pub pushable_blocks: Vec<Pos>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            link: None,
            wanderer: None,
            blocks: Vec::new(),
            pushable_blocks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Grid(GridError),
    /// Two configured entities share a cell.
    Overlap { pos: Pos },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid level layout: {e}"),
            Self::Overlap { pos } => {
                write!(f, "more than one entity configured at ({}, {})", pos.x, pos.y)
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Overlap { .. } => None,
        }
    }
}

impl From<GridError> for GameError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[derive(Clone, Debug)]
enum Controller {
    Link(LinkController),
    Wanderer(WanderingController),
}

impl Controller {
    fn update(&mut self, grid: &mut Grid) -> bool {
        match self {
            Self::Link(link) => link.update(grid),
            Self::Wanderer(wanderer) => wanderer.update(grid),
        }
    }
}

/// Composition root: owns the grid, the static blocks and the controllers,
/// which run once per tick in registration order (Link before the wanderer).
#[derive(Clone, Debug)]
pub struct Game {
    seed: u64,
    tick: u64,
    grid: Grid,
    controllers: Vec<Controller>,
    link: Option<EntityId>,
    wanderer: Option<EntityId>,
    blocks: Vec<EntityId>,
    pushable_blocks: Vec<EntityId>,
}

impl Game {
    /// Builds the level described by `config`. `seed` drives the wanderer's choices.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut grid = Grid::new(config.grid_size)?;
        let mut taken = BTreeSet::new();

        let link = config
            .link
            .map(|pos| place(&mut grid, &mut taken, EntityKind::Link, pos))
            .transpose()?;
        let wanderer = config
            .wanderer
            .map(|pos| place(&mut grid, &mut taken, EntityKind::Wanderer, pos))
            .transpose()?;
        let blocks = config
            .blocks
            .iter()
            .map(|&pos| place(&mut grid, &mut taken, EntityKind::Block, pos))
            .collect::<Result<Vec<_>, _>>()?;
        let pushable_blocks = config
            .pushable_blocks
            .iter()
            .map(|&pos| place(&mut grid, &mut taken, EntityKind::PushableBlock, pos))
            .collect::<Result<Vec<_>, _>>()?;

        let mut controllers = Vec::new();
        if let Some(id) = link {
            controllers.push(Controller::Link(LinkController::new(id)));
        }
        if let Some(id) = wanderer {
            let rng = ChaCha8Rng::seed_from_u64(seed);
            controllers.push(Controller::Wanderer(WanderingController::new(id, rng)));
        }

        Ok(Self { seed, tick: 0, grid, controllers, link, wanderer, blocks, pushable_blocks })
    }

    /// Runs one simulation tick.
    pub fn update(&mut self) {
        for controller in &mut self.controllers {
            controller.update(&mut self.grid);
        }
        self.tick += 1;
        trace!("tick {} complete", self.tick);
    }

    pub fn request_link_direction(&mut self, direction: Option<Direction>) {
        match self.link_controller_mut() {
            Some(link) => link.request_direction(direction),
            None => warn!("ignoring direction {direction:?}: level has no Link"),
        }
    }

    pub fn set_wanderer_paused(&mut self, paused: bool) {
        match self.wanderer_controller_mut() {
            Some(wanderer) => wanderer.set_paused(paused),
            None => warn!("ignoring pause={paused}: level has no wanderer"),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn link_position(&self) -> Option<Pos> {
        self.link.and_then(|id| self.grid.position_of(id))
    }

    pub fn wanderer_position(&self) -> Option<Pos> {
        self.wanderer.and_then(|id| self.grid.position_of(id))
    }

    pub fn link_pushed(&self) -> bool {
        self.link_controller().is_some_and(LinkController::pushed)
    }

    pub fn link_facing(&self) -> Option<Direction> {
        self.link_controller().and_then(LinkController::facing)
    }

    pub fn wanderer_paused(&self) -> bool {
        self.wanderer_controller().is_some_and(WanderingController::paused)
    }

    pub fn wanderer_heading(&self) -> Option<Direction> {
        self.wanderer_controller().and_then(WanderingController::heading)
    }

    /// Plain block positions in row-major order.
    pub fn block_positions(&self) -> Vec<Pos> {
        self.grid.position_of_all(EntityKind::Block)
    }

    /// Pushable block positions in row-major order. Indices are not stable across ticks.
    pub fn pushable_block_positions(&self) -> Vec<Pos> {
        self.grid.position_of_all(EntityKind::PushableBlock)
    }

    /// Pushable block positions keyed by a per-block id that is stable across ticks.
    pub fn pushable_block_positions_by_id(&self) -> BTreeMap<EntityId, Pos> {
        self.grid.positions_by_id(EntityKind::PushableBlock)
    }

    /// Entity ids in configuration order.
    pub fn block_ids(&self) -> &[EntityId] {
        &self.blocks
    }

    pub fn pushable_block_ids(&self) -> &[EntityId] {
        &self.pushable_blocks
    }

    fn link_controller(&self) -> Option<&LinkController> {
        self.controllers.iter().find_map(|controller| match controller {
            Controller::Link(link) => Some(link),
            Controller::Wanderer(_) => None,
        })
    }

    fn link_controller_mut(&mut self) -> Option<&mut LinkController> {
        self.controllers.iter_mut().find_map(|controller| match controller {
            Controller::Link(link) => Some(link),
            Controller::Wanderer(_) => None,
        })
    }

    fn wanderer_controller(&self) -> Option<&WanderingController> {
        self.controllers.iter().find_map(|controller| match controller {
            Controller::Wanderer(wanderer) => Some(wanderer),
            Controller::Link(_) => None,
        })
    }

    fn wanderer_controller_mut(&mut self) -> Option<&mut WanderingController> {
        self.controllers.iter_mut().find_map(|controller| match controller {
            Controller::Wanderer(wanderer) => Some(wanderer),
            Controller::Link(_) => None,
        })
    }
}

fn place(
    grid: &mut Grid,
    taken: &mut BTreeSet<Pos>,
    kind: EntityKind,
    pos: Pos,
) -> Result<EntityId, GameError> {
    let id = grid.spawn(kind);
    grid.create(id, pos)?;
    if !taken.insert(pos) {
        return Err(GameError::Overlap { pos });
    }
    Ok(id)
}
