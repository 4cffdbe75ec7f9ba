//! Renderer - the drawing collaborator the solver reports to
//!
//! The engine never draws pixels itself. A renderer receives shared borrows
//! of the grid and player, so it cannot disturb maze or player state, and it
//! may be called any number of times per state.

use crate::grid::Grid;
use crate::systems::player::Player;

pub trait Renderer {
    fn draw(&mut self, grid: &Grid, player: &Player);
}

impl<F: FnMut(&Grid, &Player)> Renderer for F {
    fn draw(&mut self, grid: &Grid, player: &Player) {
        self(grid, player)
    }
}

/// Ignores every frame.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _grid: &Grid, _player: &Player) {}
}

/// Text renderer for terminals and test failure output.
///
/// `S`/`E` start and end, `@` player, `*` path, `.` explored.
#[derive(Default)]
pub struct AsciiRenderer {
    pub frames: usize,
    pub last: String,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for AsciiRenderer {
    fn draw(&mut self, grid: &Grid, player: &Player) {
        self.frames += 1;
        self.last = render_ascii(grid, player);
    }
}

/// Bytes in the ASCII dump: two lines per row plus the bottom edge, each
/// `2 * w + 1` glyphs and a newline.
fn ascii_capacity(w: u32, h: u32) -> usize {
    let (w, h) = (w as usize, h as usize);
    (w * 2 + 2) * (h * 2 + 1)
}

pub fn render_ascii(grid: &Grid, player: &Player) -> String {
    let (w, h) = (grid.width(), grid.height());
    let mut out = String::with_capacity(ascii_capacity(w, h));

    for y in 0..h {
        // Top edge of the row
        for x in 0..w {
            out.push('+');
            out.push(if grid.get(grid.index(x, y)).walls.top { '-' } else { ' ' });
        }
        out.push_str("+\n");

        for x in 0..w {
            let cell = grid.get(grid.index(x, y));
            out.push(if cell.walls.left { '|' } else { ' ' });
            let glyph = if player.x == x && player.y == y {
                '@'
            } else if cell.is_start {
                'S'
            } else if cell.is_end {
                'E'
            } else if cell.is_path {
                '*'
            } else if cell.is_explored {
                '.'
            } else {
                ' '
            };
            out.push(glyph);
        }
        let last = grid.get(grid.index(w - 1, y));
        out.push(if last.walls.right { '|' } else { ' ' });
        out.push('\n');
    }

    for x in 0..w {
        out.push('+');
        out.push(if grid.get(grid.index(x, h - 1)).walls.bottom { '-' } else { ' ' });
    }
    out.push_str("+\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;

    #[test]
    fn ascii_capacity_matches_output_length() {
        let grid = Grid::new(4, 3).unwrap();
        let out = render_ascii(&grid, &Player::default());
        assert_eq!(out.len(), ascii_capacity(4, 3));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn ascii_capacity_does_not_overflow_u32() {
        // 80_002 * 80_001 exceeds u32::MAX
        assert_eq!(ascii_capacity(40_000, 40_000), 80_002 * 80_001);
    }

    #[test]
    fn ascii_shows_walls_and_markers() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_passage(0, Direction::Right, true);
        grid.set_passage(1, Direction::Bottom, true);
        let player = Player::new(1, 0);

        let text = render_ascii(&grid, &player);
        let expected = "\
+-+-+
|S @|
+-+ +
| |E|
+-+-+
";
        assert_eq!(text, expected);
    }

    #[test]
    fn closures_are_renderers() {
        let grid = Grid::new(1, 1).unwrap();
        let mut calls = 0;
        {
            let mut r = |_: &Grid, _: &Player| calls += 1;
            r.draw(&grid, &Player::default());
            r.draw(&grid, &Player::default());
        }
        assert_eq!(calls, 2);
    }
}
