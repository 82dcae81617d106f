//! Generated logical maze and its identifying metadata.

use std::hash::Hasher;

use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use crate::grid::Grid;
use crate::types::{CellType, Pos};

use super::connectivity::path_exists;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MazeGrid {
    grid: Grid<CellType>,
    start: Pos,
    goal: Pos,
}

impl MazeGrid {
    pub(super) fn new(grid: Grid<CellType>, start: Pos, goal: Pos) -> Self {
        Self { grid, start, goal }
    }

    pub fn grid(&self) -> &Grid<CellType> {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Digging starts at the goal and the start is stamped afterwards, so a
    /// walkable route between them is likely but never guaranteed.
    pub fn start_reaches_goal(&self) -> bool {
        path_exists(&self.grid, self.start, self.goal)
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u32(self.grid.width() as u32);
        hasher.write_u32(self.grid.height() as u32);
        for cell in self.grid.cells() {
            hasher.write_u8(cell.code());
        }
        hasher.write_i32(self.start.x);
        hasher.write_i32(self.start.y);
        hasher.write_i32(self.goal.x);
        hasher.write_i32(self.goal.y);
        hasher.finish()
    }
}
