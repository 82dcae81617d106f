//! Per-floor enemy counts.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyAppearance {
    pub searchers: usize,
    pub pursuers: usize,
}

impl EnemyAppearance {
    pub const NONE: Self = Self { searchers: 0, pursuers: 0 };

    pub const fn new(searchers: usize, pursuers: usize) -> Self {
        Self { searchers, pursuers }
    }
}

/// Enemy counts indexed by floor number; floors past the end reuse the last entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyAppearanceTable {
    floors: Vec<EnemyAppearance>,
}

impl Default for EnemyAppearanceTable {
    fn default() -> Self {
        Self {
            floors: vec![
                EnemyAppearance::new(1, 0),
                EnemyAppearance::new(2, 0),
                EnemyAppearance::new(2, 1),
                EnemyAppearance::new(3, 1),
                EnemyAppearance::new(3, 2),
            ],
        }
    }
}

impl EnemyAppearanceTable {
    pub fn new(floors: Vec<EnemyAppearance>) -> Result<Self, ConfigError> {
        let table = Self { floors };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floors.is_empty() {
            return Err(ConfigError::EmptyAppearanceTable);
        }
        Ok(())
    }

    pub fn floors(&self) -> &[EnemyAppearance] {
        &self.floors
    }

    /// Counts for a 1-based floor number; floor 0 has no entry.
    pub fn for_floor(&self, floor: u32) -> Option<EnemyAppearance> {
        if floor == 0 {
            return None;
        }
        let slot = (floor as usize - 1).min(self.floors.len().checked_sub(1)?);
        self.floors.get(slot).copied()
    }
}
