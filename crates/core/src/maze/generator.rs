//! Randomized growing-tree digging over the logical maze grid.

use log::debug;
use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{CellType, Pos};

use super::model::MazeGrid;
use super::seed::{chance, random_index};

pub const MIN_MAZE_DIMENSION: usize = 5;
/// Largest odd side whose cell count and coordinates fit 32-bit targets.
pub const MAX_MAZE_DIMENSION: usize = 32_767;

/// Cells advanced per dig step: one corridor cell plus the next junction.
const DIG_STRIDE: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeParams {
    pub width: usize,
    pub height: usize,
    pub start: Pos,
    pub goal: Pos,
    pub ceiling_probability: f32,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            start: Pos::new(0, 8),
            goal: Pos::new(8, 0),
            ceiling_probability: 0.1,
        }
    }
}

impl MazeParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_MAZE_DIMENSION {
                return Err(ConfigError::DimensionTooSmall {
                    axis,
                    value,
                    minimum: MIN_MAZE_DIMENSION,
                });
            }
            if value > MAX_MAZE_DIMENSION {
                return Err(ConfigError::DimensionTooLarge {
                    axis,
                    value,
                    maximum: MAX_MAZE_DIMENSION,
                });
            }
        }
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value % 2 == 0 {
                return Err(ConfigError::DimensionEven { axis, value });
            }
        }
        for (role, pos) in [("start", self.start), ("goal", self.goal)] {
            if !pos.is_junction() {
                return Err(ConfigError::MisalignedPosition { role, pos });
            }
            let inside = pos.x >= 0
                && pos.y >= 0
                && (pos.x as usize) < self.width
                && (pos.y as usize) < self.height;
            if !inside {
                return Err(ConfigError::PositionOutOfBounds {
                    role,
                    pos,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        if self.start == self.goal {
            return Err(ConfigError::StartEqualsGoal(self.start));
        }
        if !(0.0..=1.0).contains(&self.ceiling_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.ceiling_probability));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct DigStats {
    walks: usize,
    steps: usize,
}

pub struct MazeGenerator {
    params: MazeParams,
}

impl MazeGenerator {
    /// Validates `params` up front so `generate` never sees a malformed request.
    pub fn new(params: MazeParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &MazeParams {
        &self.params
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeGrid {
        let MazeParams { width, height, start, goal, ceiling_probability } = self.params;
        let mut cells = Grid::filled(width, height, CellType::Block);

        cells.set(goal, CellType::Goal);
        let stats = dig(&mut cells, goal, rng);
        cells.set(start, CellType::Start);
        let ceilings = place_ceilings(&mut cells, ceiling_probability, rng);

        debug!(
            "maze {width}x{height}: {} walks, {} dig steps, {ceilings} ceilings",
            stats.walks, stats.steps
        );

        MazeGrid::new(cells, start, goal)
    }
}

fn dig<R: Rng + ?Sized>(cells: &mut Grid<CellType>, goal: Pos, rng: &mut R) -> DigStats {
    let mut stats = DigStats::default();
    let mut candidates: Vec<Pos> = Vec::new();
    let mut origin = goal;

    loop {
        stats.walks += 1;
        let mut current = origin;
        loop {
            let directions = diggable_directions(cells, current);
            if directions.is_empty() {
                break;
            }

            // A walk's origin is either the goal or an already carved junction.
            if current != origin {
                cells.set(current, CellType::Floor);
                candidates.push(current);
            }

            let direction = directions[random_index(rng, directions.len())];
            cells.set(current + direction, CellType::Floor);
            current = current + direction * DIG_STRIDE;
            cells.set(current, CellType::Floor);
            stats.steps += 1;
        }

        if candidates.is_empty() {
            return stats;
        }
        origin = candidates.swap_remove(random_index(rng, candidates.len()));
    }
}

fn diggable_directions(cells: &Grid<CellType>, from: Pos) -> Vec<Pos> {
    Pos::DIRECTIONS
        .into_iter()
        .filter(|&direction| {
            is_diggable(cells, from + direction)
                && is_diggable(cells, from + direction * DIG_STRIDE)
        })
        .collect()
}

fn is_diggable(cells: &Grid<CellType>, pos: Pos) -> bool {
    cells.get(pos) == Some(CellType::Block)
}

fn place_ceilings<R: Rng + ?Sized>(
    cells: &mut Grid<CellType>,
    probability: f32,
    rng: &mut R,
) -> usize {
    let corridors: Vec<Pos> = cells
        .iter()
        .filter(|&(pos, cell)| pos.is_corridor_candidate() && cell == CellType::Floor)
        .map(|(pos, _)| pos)
        .collect();

    let mut placed = 0;
    for pos in corridors {
        if chance(rng, probability) {
            cells.set(pos, CellType::Ceiling);
            placed += 1;
        }
    }
    placed
}
