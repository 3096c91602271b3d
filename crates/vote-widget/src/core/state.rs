//! Toggle state and counters

use serde::{Deserialize, Serialize};

use super::VoteDirection;

/// Whether each vote is currently cast.
///
/// The two flags are independent: toggling one never clears the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteState {
    /// Up vote cast
    pub up_voted: bool,
    /// Down vote cast
    pub down_voted: bool,
}

impl VoteState {
    /// Creates a state with neither vote cast
    #[must_use]
    pub const fn new() -> Self {
        Self {
            up_voted: false,
            down_voted: false,
        }
    }

    /// Returns whether the given vote is cast
    #[must_use]
    pub const fn is_voted(&self, direction: VoteDirection) -> bool {
        match direction {
            VoteDirection::Up => self.up_voted,
            VoteDirection::Down => self.down_voted,
        }
    }

    /// Flips one vote and returns its new value
    pub fn toggle(&mut self, direction: VoteDirection) -> bool {
        let flag = match direction {
            VoteDirection::Up => &mut self.up_voted,
            VoteDirection::Down => &mut self.down_voted,
        };
        *flag = !*flag;
        *flag
    }
}

/// The two displayed tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Up vote tally
    pub up_count: i64,
    /// Down vote tally
    pub down_count: i64,
}

impl Counters {
    /// Creates counters from seeded values
    #[must_use]
    pub const fn new(up_count: i64, down_count: i64) -> Self {
        Self {
            up_count,
            down_count,
        }
    }

    /// Returns the tally for one direction
    #[must_use]
    pub const fn get(&self, direction: VoteDirection) -> i64 {
        match direction {
            VoteDirection::Up => self.up_count,
            VoteDirection::Down => self.down_count,
        }
    }

    /// Adds `delta` to one tally and returns the new value
    pub fn adjust(&mut self, direction: VoteDirection, delta: i64) -> i64 {
        let count = match direction {
            VoteDirection::Up => &mut self.up_count,
            VoteDirection::Down => &mut self.down_count,
        };
        *count = count.saturating_add(delta);
        *count
    }
}

/// Serializable copy of the widget state, for a host page to forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSnapshot {
    /// Up vote cast
    pub up_voted: bool,
    /// Down vote cast
    pub down_voted: bool,
    /// Up vote tally
    pub up_count: i64,
    /// Down vote tally
    pub down_count: i64,
}

impl VoteSnapshot {
    /// Combines state and counters
    #[must_use]
    pub const fn new(state: VoteState, counters: Counters) -> Self {
        Self {
            up_voted: state.up_voted,
            down_voted: state.down_voted,
            up_count: counters.up_count,
            down_count: counters.down_count,
        }
    }
}
