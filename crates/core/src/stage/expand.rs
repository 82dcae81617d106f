//! Logical-to-physical grid expansion.

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::types::{CellType, Pos};

use super::LayoutParams;

/// Physical cells spanned by `logical_len` logical cells plus both outer walls,
/// or `None` when the count overflows `usize`.
pub fn physical_extent(
    logical_len: usize,
    room: usize,
    wall: usize,
    outer: usize,
) -> Option<usize> {
    let rooms = logical_len.div_ceil(2).checked_mul(room)?;
    let walls = (logical_len / 2).checked_mul(wall)?;
    outer.checked_mul(2)?.checked_add(rooms)?.checked_add(walls)
}

/// Width and height of the physical stage for a logical grid, checked so every
/// cell stays addressable by an `i32` position and the cell count fits `usize`.
pub(crate) fn physical_size(
    logical_width: usize,
    logical_height: usize,
    params: &LayoutParams,
) -> Result<(usize, usize), ConfigError> {
    let room = params.room_size;
    let wall = params.wall_thickness;
    let outer = params.outer_wall_thickness;
    let addressable = |axis: &'static str, extent: Option<usize>| {
        extent
            .filter(|&cells| i32::try_from(cells).is_ok())
            .ok_or(ConfigError::StageTooLarge { axis })
    };

    let width = addressable("width", physical_extent(logical_width, room.x, wall, outer))?;
    let height = addressable("height", physical_extent(logical_height, room.y, wall, outer))?;
    if width.checked_mul(height).is_none() {
        return Err(ConfigError::StageTooLarge { axis: "area" });
    }
    Ok((width, height))
}

/// Extent of one logical column or row: junction lanes are room-sized, the rest wall-sized.
pub(super) fn block_extent(index: usize, room: usize, wall: usize) -> usize {
    if index % 2 == 0 { room } else { wall }
}

pub fn expand(
    logical: &Grid<CellType>,
    params: &LayoutParams,
) -> Result<Grid<CellType>, ConfigError> {
    params.validate()?;
    let room = params.room_size;
    let wall = params.wall_thickness;
    let outer = params.outer_wall_thickness;

    let (width, height) = physical_size(logical.width(), logical.height(), params)?;
    let mut physical = Grid::filled(width, height, CellType::Block);

    let row_start = outer as i32;
    let mut cursor = Pos { y: row_start, x: row_start };
    for y in 0..logical.height() {
        let block_height = block_extent(y, room.y, wall);
        for (x, &cell) in logical.row(y).iter().enumerate() {
            let block_width = block_extent(x, room.x, wall);
            physical.fill_rect(cursor, block_width, block_height, cell);
            cursor.x += block_width as i32;
        }
        cursor.x = row_start;
        cursor.y += block_height as i32;
    }

    paint_outer_wall(&mut physical, outer);
    Ok(physical)
}

fn paint_outer_wall(physical: &mut Grid<CellType>, thickness: usize) {
    let width = physical.width();
    let height = physical.height();
    physical.fill_rect(Pos { y: 0, x: 0 }, width, thickness, CellType::OuterWall);
    physical.fill_rect(
        Pos { y: height.saturating_sub(thickness) as i32, x: 0 },
        width,
        thickness,
        CellType::OuterWall,
    );
    physical.fill_rect(Pos { y: 0, x: 0 }, thickness, height, CellType::OuterWall);
    physical.fill_rect(
        Pos { y: 0, x: width.saturating_sub(thickness) as i32 },
        thickness,
        height,
        CellType::OuterWall,
    );
}
