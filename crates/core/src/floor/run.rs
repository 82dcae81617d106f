//! Floor counter carried across a run.

use serde::{Deserialize, Serialize};

/// Progress of one run; floor 0 means no floor has been entered yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProgress {
    floor: u32,
}

impl RunProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn is_first_floor(&self) -> bool {
        self.floor == 1
    }

    /// Enters the next floor and returns its number.
    pub fn go_upstairs(&mut self) -> u32 {
        self.floor += 1;
        self.floor
    }

    pub fn reset(&mut self) {
        self.floor = 0;
    }

    /// Score reported when the run ends on the current floor.
    pub fn cleared_floors(&self) -> u32 {
        self.floor.saturating_sub(1)
    }
}
