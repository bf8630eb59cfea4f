//! Movement rules — truth-table driven.
//!
//! Pure functions over the grid; no side effects.
//! These encode "what is legal" without performing the move.
//!
//! ## Candidate order
//!
//! Candidates are tried in a fixed priority so that the same maze always
//! produces the same path:
//!
//! ┌──────────┬────────────┐
//! │ Priority │ Target     │
//! ├──────────┼────────────┤
//! │ 1 Down   │ (x+1, y)   │
//! │ 2 Right  │ (x, y+1)   │
//! │ 3 Up     │ (x-1, y)   │
//! │ 4 Left   │ (x, y-1)   │
//! └──────────┴────────────┘
//!
//! ## Viability
//!
//! ┌──────────────────────────┬─────────┐
//! │ Condition                │ Viable? │
//! ├──────────────────────────┼─────────┤
//! │ Target outside interior  │ NO      │
//! │ Target is Wall           │ NO      │
//! │ Target is Visited        │ NO      │
//! │ Otherwise                │ YES     │
//! └──────────────────────────┴─────────┘

use std::fmt;

use super::cell::Coord;
use super::grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Order in which candidate moves are tested.
    pub const PRIORITY: [Direction; 4] =
        [Direction::Down, Direction::Right, Direction::Up, Direction::Left];

    /// Neighbor of `pos` in this direction. `None` would underflow.
    pub fn step(self, pos: Coord) -> Option<Coord> {
        match self {
            Direction::Down => Some(Coord::new(pos.x + 1, pos.y)),
            Direction::Right => Some(Coord::new(pos.x, pos.y + 1)),
            Direction::Up => pos.x.checked_sub(1).map(|x| Coord::new(x, pos.y)),
            Direction::Left => pos.y.checked_sub(1).map(|y| Coord::new(pos.x, y)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "down",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// May the finder enter `target`?
pub fn is_viable(grid: &Grid, target: Coord) -> bool {
    grid.in_interior(target) && grid.cell(target).is_some_and(|c| c.is_open())
}

/// First viable neighbor of `from`, by priority.
pub fn next_move(grid: &Grid, from: Coord) -> Option<(Direction, Coord)> {
    Direction::PRIORITY.iter().find_map(|&dir| {
        dir.step(from)
            .filter(|&target| is_viable(grid, target))
            .map(|target| (dir, target))
    })
}
