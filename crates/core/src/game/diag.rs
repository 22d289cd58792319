//! Text rendering of the board for tools and assertion messages.

use super::*;

fn glyph(kind: Option<EntityKind>) -> char {
    match kind {
        None => '.',
        Some(EntityKind::Link) => 'L',
        Some(EntityKind::Wanderer) => 'Z',
        Some(EntityKind::Block) => '#',
        Some(EntityKind::PushableBlock) => 'O',
    }
}

impl Game {
    pub fn draw_grid_diag(&self) -> String {
        let size = self.grid.size();
        let mut text = String::with_capacity(size * (size + 1));
        for y in 0..size {
            for x in 0..size {
                let pos = Pos { y: y as i32, x: x as i32 };
                let kind = self.grid.occupant(pos).and_then(|id| self.grid.kind_of(id));
                text.push(glyph(kind));
            }
            text.push('\n');
        }
        text
    }
}
