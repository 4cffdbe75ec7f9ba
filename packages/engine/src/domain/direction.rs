/// One side of a cell, doubling as a unit move in grid space.
///
/// Grid space has `y` growing downwards, so `Top` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Neighbor expansion order used by the solvers.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit vector to direction. Anything that is not one of the four unit
    /// vectors yields `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Top),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Bottom),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }

    /// WASD keyboard mapping used by the canvas page.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" => Some(Direction::Top),
            "d" => Some(Direction::Right),
            "s" => Some(Direction::Bottom),
            "a" => Some(Direction::Left),
            _ => None,
        }
    }
}
