//! Row-major 2D storage shared by the logical maze and the physical stage.

use serde::{Deserialize, Serialize};

use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self { width, height, cells: vec![value; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<T> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    /// Writes `value` at `pos`; out-of-bounds writes are ignored and reported as `false`.
    pub fn set(&mut self, pos: Pos, value: T) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        self.cells[idx] = value;
        true
    }

    pub fn fill_rect(&mut self, origin: Pos, width: usize, height: usize, value: T) {
        for dy in 0..height {
            for dx in 0..width {
                self.set(Pos { y: origin.y + dy as i32, x: origin.x + dx as i32 }, value);
            }
        }
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, T)> + '_ {
        self.positions().map(move |pos| (pos, self.cells[self.index(pos)]))
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    pub fn positions_of(&self, value: T) -> impl Iterator<Item = Pos> + '_ {
        self.iter().filter(move |&(_, cell)| cell == value).map(|(pos, _)| pos)
    }
}
