// rfidlink/src/clock/mock.rs

use std::cell::Cell;
use std::rc::Rc;

use crate::clock::traits::Clock;

/// Manually driven clock for tests. Clones share the same time source, so a
/// test can keep one handle while the link owns another. `sleep_ms` advances
/// time instead of blocking.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    slept: Rc<Cell<u64>>,
}

impl MockClock {
    /// Clock reading `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
            slept: Rc::new(Cell::new(0)),
        }
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Jump to an absolute time.
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    /// Total time spent in `sleep_ms` so far.
    pub fn total_slept_ms(&self) -> u64 {
        self.slept.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.slept.set(self.slept.get() + ms);
        self.advance(ms);
    }
}
