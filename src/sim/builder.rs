//! MazeBuilder: records → Grid.
//!
//! ## Policy
//!   - Header problems (dimensions, start, end) are fatal: `BuildError`.
//!     Mazes over `MAX_CELLS` padded cells are refused before allocating.
//!   - A bad placement record is skipped and reported: `PlacementError`.
//!     Remaining records are still applied.
//!   - Start and End are placed first and can never be overwritten.
//!   - A later record on the same cell replaces an earlier one.

use thiserror::Error;

use crate::domain::cell::{Cell, Coord};
use crate::domain::grid::Grid;
use super::records::{Marker, MazeRecords, PlacementRecord, RecordError};

/// Upper bound on padded cells, border included.
pub const MAX_CELLS: usize = 1 << 26;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("maze sizes must be greater than 0 (got {width} x {height})")]
    InvalidDimension { width: i64, height: i64 },
    #[error("{which} position ({x},{y}) is outside of maze range {width} x {height}")]
    OutOfBounds {
        which: &'static str,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    #[error("maze of {width} x {height} is too large (at most {MAX_CELLS} cells)")]
    TooLarge { width: i64, height: i64 },
    #[error(transparent)]
    Records(#[from] RecordError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("line {line}: ({x},{y}) would block the start/end position")]
    BlockedReservedCell { line: usize, x: i64, y: i64 },
    #[error("line {line}: marker `{marker}` is not recognized")]
    UnknownMarker { line: usize, marker: String },
    #[error("line {line}: ({x},{y}) is outside of maze range")]
    OutsideMaze { line: usize, x: i64, y: i64 },
    #[error("line {line}: expected `x y marker`, got `{text}`")]
    MalformedRecord { line: usize, text: String },
}

/// A loaded maze plus the records that were skipped on the way.
#[derive(Debug)]
pub struct BuiltMaze {
    pub grid: Grid,
    pub rejected: Vec<PlacementError>,
}

// ══════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════

/// Build a grid from parsed records.
pub fn build(records: &MazeRecords) -> Result<BuiltMaze, BuildError> {
    let mut builder = MazeBuilder::new(records.size, records.start, records.end)?;
    for record in &records.placements {
        // Rejections are collected inside the builder.
        let _ = builder.place(record);
    }
    Ok(builder.finish())
}

/// Parse and build in one go.
pub fn build_from_str(content: &str) -> Result<BuiltMaze, BuildError> {
    let records = super::records::parse(content)?;
    build(&records)
}

pub struct MazeBuilder {
    grid: Grid,
    rejected: Vec<PlacementError>,
}

impl MazeBuilder {
    pub fn new(size: (i64, i64), start: (i64, i64), end: (i64, i64)) -> Result<Self, BuildError> {
        let (width, height) = size;
        if width < 1 || height < 1 {
            return Err(BuildError::InvalidDimension { width, height });
        }
        let (width, height) = padded_cells(width, height)
            .filter(|&cells| cells <= MAX_CELLS)
            .and_then(|_| Some((usize::try_from(width).ok()?, usize::try_from(height).ok()?)))
            .ok_or(BuildError::TooLarge { width, height })?;
        let start = interior_coord(start, width, height).ok_or(BuildError::OutOfBounds {
            which: "start",
            x: start.0,
            y: start.1,
            width,
            height,
        })?;
        let end = interior_coord(end, width, height).ok_or(BuildError::OutOfBounds {
            which: "end",
            x: end.0,
            y: end.1,
            width,
            height,
        })?;

        log::debug!("maze {width} x {height}, start {start}, end {end}");
        Ok(MazeBuilder {
            grid: Grid::new(width, height, start, end),
            rejected: vec![],
        })
    }

    /// Apply one placement record. A rejected record leaves the grid untouched.
    pub fn place(&mut self, record: &PlacementRecord) -> Result<(), PlacementError> {
        let result = self.try_place(record);
        if let Err(e) = &result {
            log::warn!("skipping record: {e}");
            self.rejected.push(e.clone());
        }
        result
    }

    pub fn finish(self) -> BuiltMaze {
        log::debug!(
            "maze built: {} coins, {} records rejected",
            self.grid.coin_count(),
            self.rejected.len()
        );
        BuiltMaze {
            grid: self.grid,
            rejected: self.rejected,
        }
    }

    fn try_place(&mut self, record: &PlacementRecord) -> Result<(), PlacementError> {
        let (line, x, y, marker) = match record {
            PlacementRecord::Place { line, x, y, marker } => (*line, *x, *y, marker),
            PlacementRecord::Malformed { line, text } => {
                return Err(PlacementError::MalformedRecord {
                    line: *line,
                    text: text.clone(),
                });
            }
        };

        let pos = interior_coord((x, y), self.grid.width(), self.grid.height())
            .ok_or(PlacementError::OutsideMaze { line, x, y })?;
        if pos == self.grid.start() || pos == self.grid.end() {
            return Err(PlacementError::BlockedReservedCell { line, x, y });
        }
        let cell = match marker {
            Marker::Wall => Cell::Wall,
            Marker::Coin => Cell::Coin,
            Marker::Unknown(m) => {
                return Err(PlacementError::UnknownMarker {
                    line,
                    marker: m.clone(),
                });
            }
        };

        if self.grid.set_cell(pos, cell) {
            Ok(())
        } else {
            Err(PlacementError::BlockedReservedCell { line, x, y })
        }
    }
}

/// `(width + 2) × (height + 2)`, or `None` on overflow.
fn padded_cells(width: i64, height: i64) -> Option<usize> {
    let rows = usize::try_from(width).ok()?.checked_add(2)?;
    let cols = usize::try_from(height).ok()?.checked_add(2)?;
    rows.checked_mul(cols)
}

/// `(x, y)` as an interior coordinate, if it lies in `[1,width]×[1,height]`.
fn interior_coord((x, y): (i64, i64), width: usize, height: usize) -> Option<Coord> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    ((1..=width).contains(&x) && (1..=height).contains(&y)).then_some(Coord::new(x, y))
}
