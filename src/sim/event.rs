//! Events emitted while solving.
//! Recorded only when tracing is on; the presentation layer formats them.

use crate::domain::cell::Coord;
use crate::domain::path_stack::StackEvent;
use crate::domain::rules::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveEvent {
    Stack(StackEvent),
    Moved { dir: Direction, to: Coord },
    CoinCollected { at: Coord, total: usize },
    DeadEnd { at: Coord },
    CoinReturned { at: Coord, total: usize },
    ReachedEnd { at: Coord },
    Exhausted,
}
