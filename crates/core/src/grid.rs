//! Fixed-size occupancy grid: the single source of truth for entity placement.
//! At most one entity occupies a cell and a placed entity occupies exactly one cell.
//! Moves are single-cell steps that either fully apply or leave the grid untouched.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use slotmap::{SecondaryMap, SlotMap};

use crate::direction::{Direction, in_bounds};
use crate::types::{Entity, EntityId, EntityKind, MAX_GRID_SIZE, Pos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid side length must be between 1 and `MAX_GRID_SIZE` cells.
    InvalidSize,
    OutOfBounds { pos: Pos, size: usize },
    /// The id is not registered on this grid.
    UnknownEntity(EntityId),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "grid size must be between 1 and {MAX_GRID_SIZE}"),
            Self::OutOfBounds { pos, size } => {
                write!(f, "position ({}, {}) is outside a {size}x{size} grid", pos.x, pos.y)
            }
            Self::UnknownEntity(id) => write!(f, "entity {id:?} is not registered on this grid"),
        }
    }
}

impl Error for GridError {}

#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<EntityId>>,
    entities: SlotMap<EntityId, Entity>,
    positions: SecondaryMap<EntityId, Pos>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return Err(GridError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            entities: SlotMap::with_key(),
            positions: SecondaryMap::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Registers a new entity without placing it.
    pub fn spawn(&mut self, kind: EntityKind) -> EntityId {
        self.entities.insert(Entity::new(kind))
    }

    /// Places `id` at `pos`, overwriting whatever occupied that cell.
    ///
    /// A displaced occupant becomes unplaced. Placing an entity that is already
    /// on the grid moves it, so it never occupies two cells.
    pub fn create(&mut self, id: EntityId, pos: Pos) -> Result<(), GridError> {
        if !self.entities.contains_key(id) {
            return Err(GridError::UnknownEntity(id));
        }
        if !in_bounds(self.size, pos) {
            return Err(GridError::OutOfBounds { pos, size: self.size });
        }

        if let Some(previous) = self.positions.remove(id) {
            let idx = self.index(previous);
            self.cells[idx] = None;
        }
        let idx = self.index(pos);
        if let Some(displaced) = self.cells[idx].replace(id) {
            self.positions.remove(displaced);
        }
        self.positions.insert(id, pos);
        Ok(())
    }

    /// Self-initiated single-step move. Refuses entities that are not movable.
    pub fn move_entity(&mut self, id: EntityId, direction: Direction) -> bool {
        let Some(entity) = self.entities.get(id) else {
            return false;
        };
        if !entity.caps.movable {
            return false;
        }
        self.step(id, direction)
    }

    /// Displaces a pushable entity one cell. The destination only has to be
    /// empty, so pushing into another pushable entity fails.
    pub fn push(&mut self, id: EntityId, direction: Direction) -> bool {
        let Some(entity) = self.entities.get(id) else {
            return false;
        };
        if !entity.caps.pushable {
            return false;
        }
        self.step(id, direction)
    }

    fn step(&mut self, id: EntityId, direction: Direction) -> bool {
        let Some(&from) = self.positions.get(id) else {
            return false;
        };
        let to = direction.step(from);
        if !self.is_free(to) {
            return false;
        }

        let from_idx = self.index(from);
        let to_idx = self.index(to);
        self.cells[from_idx] = None;
        self.cells[to_idx] = Some(id);
        self.positions.insert(id, to);
        true
    }

    /// In bounds and unoccupied.
    pub fn is_free(&self, pos: Pos) -> bool {
        in_bounds(self.size, pos) && self.cells[self.index(pos)].is_none()
    }

    pub fn occupant(&self, pos: Pos) -> Option<EntityId> {
        if !in_bounds(self.size, pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.entities.get(id).map(|entity| entity.kind)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Pos> {
        self.positions.get(id).copied()
    }

    /// Positions of every placed entity of `kind`, in row-major scan order.
    pub fn position_of_all(&self, kind: EntityKind) -> Vec<Pos> {
        self.occupied()
            .filter(|(_, id)| self.kind_of(*id) == Some(kind))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Positions of every placed entity of `kind`, keyed by entity id.
    pub fn positions_by_id(&self, kind: EntityKind) -> BTreeMap<EntityId, Pos> {
        self.positions
            .iter()
            .filter(|(id, _)| self.kind_of(*id) == Some(kind))
            .map(|(id, pos)| (id, *pos))
            .collect()
    }

    /// Every occupied cell with its occupant, in row-major scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, EntityId)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|id| (Pos { y: (idx / size) as i32, x: (idx % size) as i32 }, id))
        })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}
