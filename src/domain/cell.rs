//! Cell types and their properties.
//! Properties are queried via methods, not stored as flags,
//! so cell semantics are centralized here.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,    // Border padding or placed obstacle
    Start,
    End,
    Coin,    // Credited once, on first entry
    Visited, // Already explored during the current solve
}

impl Cell {
    /// Does this cell stop movement for good?
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn is_visited(self) -> bool {
        matches!(self, Cell::Visited)
    }

    /// Is this a coin that has not been picked up yet?
    pub fn is_coin(self) -> bool {
        matches!(self, Cell::Coin)
    }

    /// Start and End are never overwritten by placement records.
    pub fn is_reserved(self) -> bool {
        matches!(self, Cell::Start | Cell::End)
    }

    /// Can the path finder step onto this cell?
    pub fn is_open(self) -> bool {
        !self.is_wall() && !self.is_visited()
    }
}

/// A 1-indexed interior coordinate. `x` is the row, `y` the column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wall_and_visited_block_movement() {
        assert!(Cell::Empty.is_open());
        assert!(Cell::Coin.is_open());
        assert!(Cell::End.is_open());
        assert!(Cell::Start.is_open());
        assert!(!Cell::Wall.is_open());
        assert!(!Cell::Visited.is_open());
    }

    #[test]
    fn reserved_cells() {
        assert!(Cell::Start.is_reserved());
        assert!(Cell::End.is_reserved());
        assert!(!Cell::Coin.is_reserved());
    }

    #[test]
    fn coord_display_has_no_spaces() {
        assert_eq!(Coord::new(3, 12).to_string(), "(3,12)");
        assert_eq!(Coord::from((1, 2)), Coord::new(1, 2));
    }
}
