//! World-space queries answered by a built stage.

use crate::error::LayoutError;
use crate::types::{CellType, Pos, Vec3};

use super::StageLayout;

impl StageLayout {
    /// Mean world position of every physical cell of `cell`; zero when none exist.
    pub fn center_of(&self, cell: CellType) -> Vec3 {
        let mut sum = Vec3::ZERO;
        let mut count = 0_usize;
        for pos in self.physical.positions_of(cell) {
            sum = sum + self.world_position(pos);
            count += 1;
        }
        if count == 0 {
            return Vec3::ZERO;
        }
        sum / count as f32
    }

    pub fn start_center(&self) -> Vec3 {
        self.center_of(CellType::Start)
    }

    pub fn goal_center(&self) -> Vec3 {
        self.center_of(CellType::Goal)
    }

    /// Room centers usable as spawn points: every open junction except start and goal.
    pub fn room_positions(&self) -> Vec<Vec3> {
        self.logical
            .iter()
            .filter(|&(pos, cell)| {
                pos.is_junction()
                    && cell.is_passable()
                    && cell != CellType::Start
                    && cell != CellType::Goal
            })
            .map(|(pos, _)| self.junction_center(pos))
            .collect()
    }

    /// Center of the physical room a logical junction expands to.
    pub fn room_center(&self, junction: Pos) -> Result<Vec3, LayoutError> {
        if !self.logical.in_bounds(junction) {
            return Err(LayoutError::OutOfRange {
                pos: junction,
                width: self.logical.width(),
                height: self.logical.height(),
            });
        }
        if !junction.is_junction() {
            return Err(LayoutError::NotAJunction(junction));
        }
        Ok(self.junction_center(junction))
    }

    fn junction_center(&self, junction: Pos) -> Vec3 {
        let room = self.params.room_size;
        let stride_x = (room.x + self.params.wall_thickness) as f32;
        let stride_z = (room.y + self.params.wall_thickness) as f32;
        let outer = self.params.outer_wall_thickness as f32;

        let x = outer + (junction.x / 2) as f32 * stride_x + (room.x as f32 - 1.0) / 2.0;
        let z = outer + (junction.y / 2) as f32 * stride_z + (room.y as f32 - 1.0) / 2.0;
        Vec3::new(x * self.params.cell_size, 0.0, z * self.params.cell_size)
    }

    pub fn cell_center(&self, pos: Pos) -> Result<Vec3, LayoutError> {
        if !self.physical.in_bounds(pos) {
            return Err(LayoutError::OutOfRange {
                pos,
                width: self.physical.width(),
                height: self.physical.height(),
            });
        }
        Ok(self.world_position(pos))
    }

    pub(crate) fn world_position(&self, pos: Pos) -> Vec3 {
        let size = self.params.cell_size;
        Vec3::new(pos.x as f32 * size, 0.0, pos.y as f32 * size)
    }
}
