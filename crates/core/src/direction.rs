//! Constant direction tables and the grid bounds predicate.

use serde::{Deserialize, Serialize};

use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DELTAS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const OPPOSITES: [Direction; 4] =
    [Direction::Down, Direction::Up, Direction::Right, Direction::Left];

impl Direction {
    /// All directions in the order the simulation scans them.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(dx, dy)` offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        DELTAS[self as usize]
    }

    pub const fn opposite(self) -> Direction {
        OPPOSITES[self as usize]
    }

    pub const fn step(self, from: Pos) -> Pos {
        let (dx, dy) = self.delta();
        Pos { y: from.y + dy, x: from.x + dx }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

pub fn in_bounds(size: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < size && (pos.y as usize) < size
}
