//! Cooperative time-boxing for the long-running strategies.
//!
//! A strategy calls [`Budget::tick`] once per unit of work and stops, keeping
//! its best result so far, as soon as it returns `false`.

use std::time::Instant;

use crate::config::SearchLimit;

/// How many ticks pass between clock reads under a time limit.
const CLOCK_CHECK_INTERVAL: u64 = 16;

#[derive(Debug, Clone)]
pub struct Budget {
    limit: SearchLimit,
    started: Instant,
    steps: u64,
    exhausted: bool,
}

impl Budget {
    pub fn start(limit: SearchLimit) -> Self {
        Self {
            limit,
            started: Instant::now(),
            steps: 0,
            exhausted: false,
        }
    }

    /// Counts one unit of work. Returns `false` once the budget is spent.
    pub fn tick(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        self.steps += 1;
        self.exhausted = match self.limit {
            SearchLimit::Steps(max_steps) => self.steps > max_steps,
            SearchLimit::Time(duration) => {
                self.steps % CLOCK_CHECK_INTERVAL == 0 && self.started.elapsed() >= duration
            }
        };
        !self.exhausted
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Units of work counted so far, including the one that exhausted the budget.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
