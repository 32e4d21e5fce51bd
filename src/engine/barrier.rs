//! Completion barrier whose arity may grow while it is pending
//!
//! Nested imports are discovered only after their parent stylesheet arrives,
//! so the number of tasks to wait for is not known upfront. The total can be
//! raised at any time before the barrier is satisfied; callers must raise it
//! before starting the new work.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationBarrier {
    expected_total: usize,
    completed: usize,
    signaled: bool,
}

impl AggregationBarrier {
    #[must_use]
    pub fn new(expected_total: usize) -> Self {
        Self {
            expected_total,
            completed: 0,
            signaled: false,
        }
    }

    /// Announce `additional` tasks that will each call `complete_one`
    pub fn expand(&mut self, additional: usize) {
        if self.signaled && additional > 0 {
            log::warn!("Ignoring {additional} tasks added after aggregation completed");
            return;
        }
        self.expected_total += additional;
    }

    /// Record one finished task
    ///
    /// Returns `true` exactly once: for the call that brings `completed` up to
    /// `expected_total`. Every later call returns `false`.
    pub fn complete_one(&mut self) -> bool {
        self.completed += 1;
        if !self.signaled && self.completed >= self.expected_total {
            self.signaled = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn expected_total(&self) -> usize {
        self.expected_total
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.expected_total.saturating_sub(self.completed)
    }

    #[must_use]
    pub fn is_signaled(&self) -> bool {
        self.signaled
    }
}
