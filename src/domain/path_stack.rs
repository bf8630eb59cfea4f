//! PathStack: the in-progress path and its backtracking record.
//!
//! Entries are appended and removed only at the tail. Each entry remembers
//! whether entering it credited a coin, so popping it debits exactly that
//! coin and the running count always matches the retained path.
//!
//! Capacity starts at `INITIAL_CAPACITY` and doubles when full. Growth is
//! explicit so that it can be traced.

use thiserror::Error;

use super::cell::Coord;

pub const INITIAL_CAPACITY: usize = 4;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("path stack is empty")]
    EmptyStack,
}

/// Observable stack activity, recorded only when tracing is on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackEvent {
    Pushed { pos: Coord },
    Popped { pos: Coord },
    Grew { from: usize, to: usize },
    Cleared { dropped: usize },
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    pos: Coord,
    coin: bool,
}

#[derive(Debug)]
pub struct PathStack {
    frames: Vec<Frame>,
    coins: usize,
    verbose: bool,
    events: Vec<StackEvent>,
}

impl PathStack {
    pub fn new(verbose: bool) -> Self {
        PathStack {
            frames: Vec::with_capacity(INITIAL_CAPACITY),
            coins: 0,
            verbose,
            events: vec![],
        }
    }

    pub fn push(&mut self, pos: Coord) {
        self.push_frame(Frame { pos, coin: false });
    }

    /// Push a cell whose coin is picked up on entry.
    pub fn push_collecting(&mut self, pos: Coord) {
        self.push_frame(Frame { pos, coin: true });
        self.coins += 1;
    }

    pub fn pop(&mut self) -> Result<Coord, StackError> {
        let frame = self.frames.pop().ok_or(StackError::EmptyStack)?;
        if frame.coin {
            self.coins -= 1;
        }
        self.record(StackEvent::Popped { pos: frame.pos });
        Ok(frame.pos)
    }

    pub fn peek(&self) -> Result<Coord, StackError> {
        self.frames
            .last()
            .map(|f| f.pos)
            .ok_or(StackError::EmptyStack)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    /// Coins credited by the entries currently on the stack.
    pub fn coins(&self) -> usize {
        self.coins
    }

    /// Drop every entry and reset the coin counter.
    pub fn clear(&mut self) {
        let dropped = self.frames.len();
        self.frames.clear();
        self.coins = 0;
        self.record(StackEvent::Cleared { dropped });
    }

    /// Coordinates from the bottom (start) to the tip.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.frames.iter().map(|f| f.pos)
    }

    pub fn into_path(self) -> Vec<Coord> {
        self.frames.into_iter().map(|f| f.pos).collect()
    }

    /// Hand over everything recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<StackEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_frame(&mut self, frame: Frame) {
        if self.frames.len() == self.frames.capacity() {
            self.grow();
        }
        self.frames.push(frame);
        self.record(StackEvent::Pushed { pos: frame.pos });
    }

    fn grow(&mut self) {
        let from = self.frames.capacity();
        let extra = from.max(INITIAL_CAPACITY);
        self.frames.reserve_exact(extra);
        let to = self.frames.capacity();
        log::trace!("path stack grew from {from} to {to}");
        self.record(StackEvent::Grew { from, to });
    }

    fn record(&mut self, event: StackEvent) {
        if self.verbose {
            self.events.push(event);
        }
    }
}

impl Default for PathStack {
    fn default() -> Self {
        PathStack::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn lifo_order() {
        let mut s = PathStack::default();
        s.push(c(1, 1));
        s.push(c(2, 1));
        assert_eq!(s.peek(), Ok(c(2, 1)));
        assert_eq!(s.pop(), Ok(c(2, 1)));
        assert_eq!(s.pop(), Ok(c(1, 1)));
        assert!(s.is_empty());
    }

    #[test]
    fn empty_stack_errors() {
        let mut s = PathStack::default();
        assert_eq!(s.pop(), Err(StackError::EmptyStack));
        assert_eq!(s.peek(), Err(StackError::EmptyStack));
    }

    #[test]
    fn coin_is_debited_only_for_collecting_frame() {
        let mut s = PathStack::default();
        s.push(c(1, 1));
        s.push_collecting(c(2, 1));
        s.push(c(3, 1));
        assert_eq!(s.coins(), 1);
        s.pop().unwrap();
        assert_eq!(s.coins(), 1);
        s.pop().unwrap();
        assert_eq!(s.coins(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = PathStack::default();
        s.push_collecting(c(1, 1));
        s.push_collecting(c(1, 2));
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.coins(), 0);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut s = PathStack::new(true);
        for y in 1..=9 {
            s.push(c(1, y));
        }
        assert_eq!(s.len(), 9);
        assert!(s.capacity() >= 9);
        let grew = s
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, StackEvent::Grew { .. }))
            .count();
        assert!(grew >= 1);
    }

    #[test]
    fn quiet_stack_records_nothing() {
        let mut s = PathStack::new(false);
        s.push(c(1, 1));
        s.pop().unwrap();
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn verbose_stack_records_push_and_pop() {
        let mut s = PathStack::new(true);
        s.push(c(1, 1));
        s.pop().unwrap();
        assert_eq!(
            s.drain_events(),
            vec![
                StackEvent::Pushed { pos: c(1, 1) },
                StackEvent::Popped { pos: c(1, 1) },
            ]
        );
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn path_runs_bottom_to_tip() {
        let mut s = PathStack::default();
        s.push(c(1, 1));
        s.push(c(1, 2));
        s.push(c(2, 2));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![c(1, 1), c(1, 2), c(2, 2)]);
        assert_eq!(s.into_path(), vec![c(1, 1), c(1, 2), c(2, 2)]);
    }
}
