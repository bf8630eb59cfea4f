//! Grid: the border-padded cell map of one maze.
//!
//! ## Layout
//!
//! The interior spans `[1, width] × [1, height]`. One ring of `Wall` cells
//! surrounds it, so the backing store is `(width + 2) × (height + 2)` and a
//! neighbor of any interior cell is always inside the store.
//!
//!   - `x` indexes rows (down = `x + 1`), `y` indexes columns.
//!   - Storage is flat and row-major: `index = x * (height + 2) + y`.
//!
//! Shape is fixed at construction. Placement (`set_cell`) is crate-private
//! and only the builder uses it; the finder only calls `mark_visited`.

use super::cell::{Cell, Coord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Coord,
    end: Coord,
}

// ── Construction ──

impl Grid {
    /// Blank grid with walled border and Start/End placed.
    /// Callers validate dimensions and coordinates first.
    pub(crate) fn new(width: usize, height: usize, start: Coord, end: Coord) -> Self {
        let rows = width + 2;
        let cols = height + 2;
        let mut grid = Grid {
            width,
            height,
            cells: vec![Cell::Empty; rows * cols],
            start,
            end,
        };
        for x in 0..rows {
            grid.cells[x * cols] = Cell::Wall;
            grid.cells[x * cols + cols - 1] = Cell::Wall;
        }
        for y in 0..cols {
            grid.cells[y] = Cell::Wall;
            grid.cells[(rows - 1) * cols + y] = Cell::Wall;
        }
        grid.cells[start.x * cols + start.y] = Cell::Start;
        // start == end collapses into a single End cell
        grid.cells[end.x * cols + end.y] = Cell::End;
        grid
    }
}

// ── Queries ──

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// Number of rows including the border.
    pub fn padded_rows(&self) -> usize {
        self.width + 2
    }

    /// Number of columns including the border.
    pub fn padded_cols(&self) -> usize {
        self.height + 2
    }

    #[inline]
    fn index(&self, pos: Coord) -> Option<usize> {
        if pos.x < self.padded_rows() && pos.y < self.padded_cols() {
            Some(pos.x * self.padded_cols() + pos.y)
        } else {
            None
        }
    }

    /// Cell at `pos`, border included. `None` outside the padded store.
    #[inline]
    pub fn cell(&self, pos: Coord) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn in_interior(&self, pos: Coord) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    /// Coins still lying in the maze.
    pub fn coin_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_coin()).count()
    }

    /// Padded rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.padded_cols())
    }
}

// ── Mutation ──

impl Grid {
    /// Place a wall or coin. Refuses the border and reserved cells.
    pub(crate) fn set_cell(&mut self, pos: Coord, cell: Cell) -> bool {
        if !self.in_interior(pos) {
            return false;
        }
        match self.index(pos) {
            Some(i) if !self.cells[i].is_reserved() => {
                self.cells[i] = cell;
                true
            }
            _ => false,
        }
    }

    /// Mark `pos` as explored; returns what the cell held before.
    pub(crate) fn mark_visited(&mut self, pos: Coord) -> Option<Cell> {
        let i = self.index(pos)?;
        let before = self.cells[i];
        self.cells[i] = Cell::Visited;
        Some(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(w, h, Coord::new(1, 1), Coord::new(w, h))
    }

    #[test]
    fn border_is_walled() {
        let g = grid(3, 4);
        assert_eq!(g.padded_rows(), 5);
        assert_eq!(g.padded_cols(), 6);
        for x in 0..g.padded_rows() {
            assert_eq!(g.cell(Coord::new(x, 0)), Some(Cell::Wall));
            assert_eq!(g.cell(Coord::new(x, 5)), Some(Cell::Wall));
        }
        for y in 0..g.padded_cols() {
            assert_eq!(g.cell(Coord::new(0, y)), Some(Cell::Wall));
            assert_eq!(g.cell(Coord::new(4, y)), Some(Cell::Wall));
        }
    }

    #[test]
    fn interior_starts_empty_with_endpoints() {
        let g = grid(2, 3);
        assert_eq!(g.cell(Coord::new(1, 1)), Some(Cell::Start));
        assert_eq!(g.cell(Coord::new(2, 3)), Some(Cell::End));
        assert_eq!(g.cell(Coord::new(1, 2)), Some(Cell::Empty));
        assert_eq!(g.cell(Coord::new(2, 1)), Some(Cell::Empty));
    }

    #[test]
    fn cell_outside_store_is_none() {
        let g = grid(2, 2);
        assert_eq!(g.cell(Coord::new(4, 0)), None);
        assert_eq!(g.cell(Coord::new(0, 4)), None);
        assert!(g.cell(Coord::new(3, 3)).is_some());
    }

    #[test]
    fn interior_bounds() {
        let g = grid(2, 3);
        assert!(g.in_interior(Coord::new(1, 1)));
        assert!(g.in_interior(Coord::new(2, 3)));
        assert!(!g.in_interior(Coord::new(0, 1)));
        assert!(!g.in_interior(Coord::new(3, 1)));
        assert!(!g.in_interior(Coord::new(1, 4)));
    }

    #[test]
    fn set_cell_refuses_reserved_and_border() {
        let mut g = grid(3, 3);
        assert!(!g.set_cell(Coord::new(1, 1), Cell::Wall));
        assert!(!g.set_cell(Coord::new(3, 3), Cell::Coin));
        assert!(!g.set_cell(Coord::new(0, 2), Cell::Coin));
        assert!(g.set_cell(Coord::new(2, 2), Cell::Coin));
        assert_eq!(g.cell(Coord::new(1, 1)), Some(Cell::Start));
        assert_eq!(g.coin_count(), 1);
    }

    #[test]
    fn start_equal_end_is_end() {
        let g = Grid::new(2, 2, Coord::new(1, 2), Coord::new(1, 2));
        assert_eq!(g.cell(Coord::new(1, 2)), Some(Cell::End));
    }

    #[test]
    fn mark_visited_reports_previous_cell() {
        let mut g = grid(3, 3);
        g.set_cell(Coord::new(2, 1), Cell::Coin);
        assert_eq!(g.mark_visited(Coord::new(2, 1)), Some(Cell::Coin));
        assert_eq!(g.cell(Coord::new(2, 1)), Some(Cell::Visited));
        assert_eq!(g.coin_count(), 0);
        assert_eq!(g.mark_visited(Coord::new(9, 9)), None);
    }

    #[test]
    fn rows_cover_padded_store() {
        let g = grid(2, 3);
        let rows: Vec<&[Cell]> = g.rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 5));
    }
}
