//! mazerunner — depth-first maze escape with coin collection.
//!
//! Pipeline: text → `sim::records` → `sim::builder` (Grid) →
//! `sim::finder` (SolveResult) → `ui::renderer`.

pub mod config;
pub mod domain;
pub mod sim;
pub mod ui;

pub use domain::cell::{Cell, Coord};
pub use domain::grid::Grid;
pub use sim::builder::{build, build_from_str, BuildError, BuiltMaze, PlacementError};
pub use sim::finder::{
    solve, PathFinder, SearchState, Solution, SolveError, SolveOptions, SolveResult,
};
