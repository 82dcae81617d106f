//! Physical stage assembled from a logical maze: grid expansion, spatial
//! queries, and collider-span extraction for the engine side.

mod collider;
mod expand;
mod query;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::maze::MazeGrid;
use crate::types::{CellType, RoomSize};

pub use collider::{ColliderBox, ColliderSpan, ColliderSpans, SpanAxis};
pub use expand::{expand, physical_extent};
pub(crate) use expand::physical_size;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub room_size: RoomSize,
    pub wall_thickness: usize,
    pub outer_wall_thickness: usize,
    /// World units per physical cell.
    pub cell_size: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            room_size: RoomSize::square(3),
            wall_thickness: 1,
            outer_wall_thickness: 1,
            cell_size: 1.0,
        }
    }
}

impl LayoutParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extents = [
            ("room width", self.room_size.x),
            ("room depth", self.room_size.y),
            ("wall thickness", self.wall_thickness),
            ("outer wall thickness", self.outer_wall_thickness),
        ];
        for (what, value) in extents {
            if value == 0 {
                return Err(ConfigError::ZeroThickness { what });
            }
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StageLayout {
    logical: Grid<CellType>,
    physical: Grid<CellType>,
    params: LayoutParams,
}

impl StageLayout {
    pub fn build(maze: &MazeGrid, params: LayoutParams) -> Result<Self, ConfigError> {
        Self::from_logical(maze.grid().clone(), params)
    }

    pub fn from_logical(
        logical: Grid<CellType>,
        params: LayoutParams,
    ) -> Result<Self, ConfigError> {
        let physical = expand(&logical, &params)?;
        Ok(Self { logical, physical, params })
    }

    pub fn logical(&self) -> &Grid<CellType> {
        &self.logical
    }

    pub fn physical(&self) -> &Grid<CellType> {
        &self.physical
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }
}
