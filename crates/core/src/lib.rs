pub mod direction;
pub mod game;
pub mod grid;
pub mod journal;
pub mod replay;
pub mod types;

pub use direction::Direction;
pub use game::{Game, GameConfig, GameError, LinkController, WanderingController};
pub use grid::{Grid, GridError};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use types::*;
