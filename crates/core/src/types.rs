use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

/// Side length of the square grid used by the reference level.
pub const GRID_SIZE: usize = 10;

/// Largest side length a grid accepts.
pub const MAX_GRID_SIZE: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Link,
    Wanderer,
    Block,
    PushableBlock,
}

/// Fixed capability set of an entity, resolved once when it is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// May be the subject of a self-initiated grid move.
    pub movable: bool,
    /// May be displaced by another entity pushing into it.
    pub pushable: bool,
}

impl EntityKind {
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::Link | Self::Wanderer => Capabilities { movable: true, pushable: false },
            Self::Block => Capabilities { movable: false, pushable: false },
            Self::PushableBlock => Capabilities { movable: true, pushable: true },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub caps: Capabilities,
}

impl Entity {
    pub const fn new(kind: EntityKind) -> Self {
        Self { kind, caps: kind.capabilities() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_table_matches_entity_roles() {
        assert!(EntityKind::Link.capabilities().movable);
        assert!(!EntityKind::Link.capabilities().pushable);
        assert!(EntityKind::Wanderer.capabilities().movable);
        assert_eq!(
            EntityKind::Block.capabilities(),
            Capabilities { movable: false, pushable: false }
        );
        assert_eq!(
            EntityKind::PushableBlock.capabilities(),
            Capabilities { movable: true, pushable: true }
        );
    }

    #[test]
    fn positions_order_row_major() {
        let mut cells = vec![Pos::new(3, 1), Pos::new(0, 2), Pos::new(1, 1)];
        cells.sort();
        assert_eq!(cells, vec![Pos::new(1, 1), Pos::new(3, 1), Pos::new(0, 2)]);
    }
}
