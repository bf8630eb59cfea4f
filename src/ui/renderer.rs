//! Presentation layer: plain-text maze, trace, and result output.
//!
//! Everything is written through crossterm's `queue!` into any `Write`,
//! then flushed once by the caller. Colors are only emitted when
//! `RenderConfig::color` is on, so output stays diff-able in tests and pipes.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::config::RenderConfig;
use crate::domain::cell::{Cell, Coord};
use crate::domain::grid::Grid;
use crate::domain::path_stack::StackEvent;
use crate::sim::builder::PlacementError;
use crate::sim::event::SolveEvent;
use crate::sim::finder::SolveResult;

pub struct Renderer {
    cfg: RenderConfig,
}

impl Renderer {
    pub fn new(cfg: RenderConfig) -> Self {
        Renderer { cfg }
    }

    /// Echo of the three header records.
    pub fn header<W: Write>(&self, out: &mut W, grid: &Grid) -> io::Result<()> {
        let (start, end) = (grid.start(), grid.end());
        writeln!(out, "size: {}, {}", grid.width(), grid.height())?;
        writeln!(out, "start: {}, {}", start.x, start.y)?;
        writeln!(out, "end: {}, {}", end.x, end.y)
    }

    /// The padded grid, one row per line. Cells on `path` (other than the
    /// endpoints) use the path glyph.
    pub fn maze<W: Write>(&self, out: &mut W, grid: &Grid, path: &[Coord]) -> io::Result<()> {
        let on_path: HashSet<Coord> = path.iter().copied().collect();
        for (x, row) in grid.rows().enumerate() {
            for (y, &cell) in row.iter().enumerate() {
                let pos = Coord::new(x, y);
                let (ch, color) = if on_path.contains(&pos) && !cell.is_reserved() {
                    (self.cfg.glyphs.path, Color::Green)
                } else {
                    self.glyph(cell)
                };
                self.put(out, ch, color)?;
            }
            queue!(out, Print('\n'))?;
        }
        Ok(())
    }

    pub fn rejected<W: Write>(&self, out: &mut W, rejected: &[PlacementError]) -> io::Result<()> {
        for e in rejected {
            writeln!(out, "Invalid record: {e}")?;
        }
        Ok(())
    }

    pub fn trace<W: Write>(&self, out: &mut W, trace: &[SolveEvent]) -> io::Result<()> {
        for event in trace {
            writeln!(out, "{}", event_line(event))?;
        }
        Ok(())
    }

    pub fn result<W: Write>(&self, out: &mut W, result: &SolveResult) -> io::Result<()> {
        match result {
            SolveResult::Found { path, coins } => {
                writeln!(out, "The maze has a solution.")?;
                writeln!(out, "The amount of coins collected: {coins}")?;
                writeln!(out, "The path from start to end: ")?;
                for pos in path {
                    write!(out, "{pos} ")?;
                }
                writeln!(out)
            }
            SolveResult::NotFound => writeln!(out, "This maze has no solution."),
        }
    }

    fn glyph(&self, cell: Cell) -> (char, Color) {
        let g = &self.cfg.glyphs;
        match cell {
            Cell::Empty => (g.empty, Color::DarkGrey),
            Cell::Wall => (g.wall, Color::Grey),
            Cell::Start => (g.start, Color::Cyan),
            Cell::End => (g.end, Color::Magenta),
            Cell::Coin => (g.coin, Color::Yellow),
            Cell::Visited => (g.empty, Color::DarkGrey),
        }
    }

    fn put<W: Write>(&self, out: &mut W, ch: char, color: Color) -> io::Result<()> {
        if self.cfg.color {
            queue!(out, SetForegroundColor(color), Print(ch), ResetColor)
        } else {
            queue!(out, Print(ch))
        }
    }
}

/// One human-readable line per trace event.
pub fn event_line(event: &SolveEvent) -> String {
    match event {
        SolveEvent::Stack(StackEvent::Pushed { pos }) => {
            format!("({}, {}) pushed into the stack.", pos.x, pos.y)
        }
        SolveEvent::Stack(StackEvent::Popped { pos }) => {
            format!("({}, {}) popped off the stack.", pos.x, pos.y)
        }
        SolveEvent::Stack(StackEvent::Grew { from, to }) => {
            format!("Stack size increased from {from} to {to}.")
        }
        SolveEvent::Stack(StackEvent::Cleared { dropped }) => {
            format!("Stack cleared, {dropped} entries dropped.")
        }
        SolveEvent::Moved { dir, to } => format!("going {dir} to {to}"),
        SolveEvent::CoinCollected { at, total } => format!("got coin at {at}, {total} held"),
        SolveEvent::DeadEnd { at } => format!("dead end at {at}, backtracking"),
        SolveEvent::CoinReturned { at, total } => {
            format!("gave back coin from {at}, {total} held")
        }
        SolveEvent::ReachedEnd { at } => format!("reached the end at {at}"),
        SolveEvent::Exhausted => "no moves left, stack is empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MazeConfig;
    use crate::domain::rules::Direction;
    use crate::sim::builder::build_from_str;

    fn plain() -> Renderer {
        let mut cfg = MazeConfig::default().render;
        cfg.color = false;
        Renderer::new(cfg)
    }

    fn text<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn maze_uses_classic_glyphs() {
        let maze = build_from_str("2 3\n1 1\n2 3\n1 2 wall\n2 2 coin\n").unwrap();
        let out = text(|w| plain().maze(w, &maze.grid, &[]));
        assert_eq!(out, "*****\n*s*.*\n*.Ce*\n*****\n");
    }

    #[test]
    fn path_overlay_keeps_endpoints() {
        let maze = build_from_str("2 2\n1 1\n2 2\n").unwrap();
        let path = [Coord::new(1, 1), Coord::new(2, 1), Coord::new(2, 2)];
        let out = text(|w| plain().maze(w, &maze.grid, &path));
        assert_eq!(out, "****\n*s.*\n*+e*\n****\n");
    }

    #[test]
    fn header_echo() {
        let maze = build_from_str("4 5\n1 2\n3 4\n").unwrap();
        let out = text(|w| plain().header(w, &maze.grid));
        assert_eq!(out, "size: 4, 5\nstart: 1, 2\nend: 3, 4\n");
    }

    #[test]
    fn found_result_lists_path_in_order() {
        let result = SolveResult::Found {
            path: vec![Coord::new(1, 1), Coord::new(2, 1)],
            coins: 3,
        };
        let out = text(|w| plain().result(w, &result));
        assert_eq!(
            out,
            "The maze has a solution.\n\
             The amount of coins collected: 3\n\
             The path from start to end: \n\
             (1,1) (2,1) \n"
        );
    }

    #[test]
    fn not_found_result() {
        let out = text(|w| plain().result(w, &SolveResult::NotFound));
        assert_eq!(out, "This maze has no solution.\n");
    }

    #[test]
    fn trace_lines() {
        let pos = Coord::new(2, 3);
        assert_eq!(
            event_line(&SolveEvent::Stack(StackEvent::Pushed { pos })),
            "(2, 3) pushed into the stack."
        );
        assert_eq!(
            event_line(&SolveEvent::Moved { dir: Direction::Right, to: pos }),
            "going right to (2,3)"
        );
        assert_eq!(
            event_line(&SolveEvent::Stack(StackEvent::Grew { from: 4, to: 8 })),
            "Stack size increased from 4 to 8."
        );
    }

    #[test]
    fn colored_output_wraps_glyphs() {
        let maze = build_from_str("1 1\n1 1\n1 1\n").unwrap();
        let renderer = Renderer::new(MazeConfig::default().render);
        let out = text(|w| renderer.maze(w, &maze.grid, &[]));
        assert!(out.contains("\u{1b}["));
        assert!(out.contains('e'));
    }
}
