//! PathFinder: depth-first escape with an explicit stack.
//!
//! ## States
//!   Searching → Found      tip of the stack is the end cell
//!   Searching → Exhausted  stack ran empty (backtracked off the start)
//!
//! ## One step
//!   1. Look at the tip of the stack.
//!   2. Take the first viable neighbor by priority (down, right, up, left):
//!      push it, mark it Visited, pick up its coin if it has one.
//!   3. No viable neighbor: pop the tip. A coin picked up on that cell is
//!      given back so the count matches the retained path.
//!   4. Check termination.
//!
//! Visited cells stay Visited after a backtrack, so every interior cell is
//! pushed at most once and a solve takes at most `2 × width × height` steps.

use thiserror::Error;

use crate::domain::cell::{Cell, Coord};
use crate::domain::grid::Grid;
use crate::domain::path_stack::{PathStack, StackError};
use crate::domain::rules::{self, Direction};
use super::event::SolveEvent;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchState {
    Searching,
    Found,
    Exhausted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveResult {
    Found { path: Vec<Coord>, coins: usize },
    NotFound,
}

impl SolveResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SolveResult::Found { .. })
    }

    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            SolveResult::Found { path, .. } => Some(path),
            SolveResult::NotFound => None,
        }
    }

    pub fn coins(&self) -> Option<usize> {
        match self {
            SolveResult::Found { coins, .. } => Some(*coins),
            SolveResult::NotFound => None,
        }
    }

    /// Moves taken along the path (cells minus one).
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("path finder lost its position: {0}")]
    Stack(#[from] StackError),
    #[error("path tip {pos} is outside the maze interior")]
    OutOfGrid { pos: Coord },
    #[error("no result after {steps} steps")]
    StepLimitExceeded { steps: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Record a `SolveEvent` trace.
    pub verbose: bool,
    /// Give up after this many steps.
    pub step_limit: Option<usize>,
}

/// Outcome of a full run.
#[derive(Clone, Debug)]
pub struct Solution {
    pub result: SolveResult,
    pub steps: usize,
    pub trace: Vec<SolveEvent>,
}

// ══════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════

/// Solve `grid` in place. Explored cells are left marked Visited.
pub fn solve(grid: &mut Grid, options: SolveOptions) -> Result<Solution, SolveError> {
    PathFinder::new(grid, options.verbose).run(options.step_limit)
}

pub struct PathFinder<'g> {
    grid: &'g mut Grid,
    stack: PathStack,
    state: SearchState,
    steps: usize,
    verbose: bool,
    trace: Vec<SolveEvent>,
}

impl<'g> PathFinder<'g> {
    pub fn new(grid: &'g mut Grid, verbose: bool) -> Self {
        let start = grid.start();
        grid.mark_visited(start);
        let mut stack = PathStack::new(verbose);
        stack.push(start);

        let mut finder = PathFinder {
            grid,
            stack,
            state: SearchState::Searching,
            steps: 0,
            verbose,
            trace: vec![],
        };
        finder.absorb_stack_events();
        finder.update_state(start);
        finder
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Coins on the current path.
    pub fn coins(&self) -> usize {
        self.stack.coins()
    }

    /// Current path, start first.
    pub fn path(&self) -> impl Iterator<Item = Coord> + '_ {
        self.stack.iter()
    }

    /// Advance by one move or one backtrack.
    pub fn step(&mut self) -> Result<SearchState, SolveError> {
        if self.state != SearchState::Searching {
            return Ok(self.state);
        }

        let here = self.stack.peek()?;
        if !self.grid.in_interior(here) {
            return Err(SolveError::OutOfGrid { pos: here });
        }

        match rules::next_move(self.grid, here) {
            Some((dir, to)) => self.advance(dir, to),
            None => self.backtrack(here)?,
        }
        self.steps += 1;

        match self.stack.peek() {
            Ok(tip) => self.update_state(tip),
            Err(StackError::EmptyStack) => {
                self.state = SearchState::Exhausted;
                self.record(SolveEvent::Exhausted);
            }
        }
        log::trace!(
            "step {}: {:?}, depth {}, coins {}",
            self.steps,
            self.state,
            self.stack.len(),
            self.stack.coins()
        );
        Ok(self.state)
    }

    /// Step until a terminal state, or until `step_limit` steps were taken.
    pub fn run(mut self, step_limit: Option<usize>) -> Result<Solution, SolveError> {
        while self.state == SearchState::Searching {
            if let Some(limit) = step_limit {
                if self.steps >= limit {
                    return Err(SolveError::StepLimitExceeded { steps: self.steps });
                }
            }
            self.step()?;
        }
        Ok(self.into_solution())
    }

    pub fn into_solution(self) -> Solution {
        let result = match self.state {
            SearchState::Found => {
                let coins = self.stack.coins();
                SolveResult::Found {
                    path: self.stack.into_path(),
                    coins,
                }
            }
            SearchState::Searching | SearchState::Exhausted => SolveResult::NotFound,
        };
        match &result {
            SolveResult::Found { path, coins } => log::debug!(
                "solved in {} steps: {} moves, {} coins",
                self.steps,
                path.len() - 1,
                coins
            ),
            SolveResult::NotFound => log::debug!("no solution after {} steps", self.steps),
        }
        Solution {
            result,
            steps: self.steps,
            trace: self.trace,
        }
    }

    fn advance(&mut self, dir: Direction, to: Coord) {
        self.record(SolveEvent::Moved { dir, to });
        if self.grid.mark_visited(to) == Some(Cell::Coin) {
            self.stack.push_collecting(to);
            self.absorb_stack_events();
            self.record(SolveEvent::CoinCollected {
                at: to,
                total: self.stack.coins(),
            });
        } else {
            self.stack.push(to);
            self.absorb_stack_events();
        }
    }

    fn backtrack(&mut self, at: Coord) -> Result<(), SolveError> {
        self.record(SolveEvent::DeadEnd { at });
        let coins_before = self.stack.coins();
        self.stack.pop()?;
        self.absorb_stack_events();
        if self.stack.coins() < coins_before {
            self.record(SolveEvent::CoinReturned {
                at,
                total: self.stack.coins(),
            });
        }
        Ok(())
    }

    fn update_state(&mut self, tip: Coord) {
        if tip == self.grid.end() {
            self.state = SearchState::Found;
            self.record(SolveEvent::ReachedEnd { at: tip });
        }
    }

    fn absorb_stack_events(&mut self) {
        let events = self.stack.drain_events();
        self.trace.extend(events.into_iter().map(SolveEvent::Stack));
    }

    fn record(&mut self, event: SolveEvent) {
        if self.verbose {
            self.trace.push(event);
        }
    }
}
