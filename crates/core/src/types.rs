use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const UP: Self = Self { y: 1, x: 0 };
    pub const DOWN: Self = Self { y: -1, x: 0 };
    pub const LEFT: Self = Self { y: 0, x: -1 };
    pub const RIGHT: Self = Self { y: 0, x: 1 };

    /// Axis directions in the order the digger inspects them.
    pub const DIRECTIONS: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn is_junction(self) -> bool {
        self.x % 2 == 0 && self.y % 2 == 0
    }

    pub fn is_corridor_candidate(self) -> bool {
        (self.x % 2 == 0) != (self.y % 2 == 0)
    }
}

impl Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { y: self.y + rhs.y, x: self.x + rhs.x }
    }
}

impl Mul<i32> for Pos {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self { y: self.y * rhs, x: self.x * rhs }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellType {
    Floor,
    Block,
    Ceiling,
    Start,
    Goal,
    OuterWall,
}

impl CellType {
    /// Cells a collider has to be built for.
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Block | Self::OuterWall)
    }

    pub fn is_passable(self) -> bool {
        !self.is_solid()
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Block => '#',
            Self::Ceiling => '=',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::OuterWall => '%',
        }
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Floor => 0,
            Self::Block => 1,
            Self::Ceiling => 2,
            Self::Start => 10,
            Self::Goal => 11,
            Self::OuterWall => 12,
        }
    }
}

/// Footprint of one junction room in physical cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomSize {
    pub x: usize,
    pub y: usize,
}

impl RoomSize {
    pub const fn square(side: usize) -> Self {
        Self { x: side, y: side }
    }
}

/// World-space position; physical columns map to `x`, rows to `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or zero when the input has no length.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length <= f32::EPSILON {
            return Self::ZERO;
        }
        self / length
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_classification_matches_grid_roles() {
        assert!(Pos::new(0, 0).is_junction());
        assert!(Pos::new(4, 2).is_junction());
        assert!(Pos::new(1, 2).is_corridor_candidate());
        assert!(Pos::new(2, 1).is_corridor_candidate());
        assert!(!Pos::new(1, 1).is_corridor_candidate());
        assert!(!Pos::new(1, 1).is_junction());
    }

    #[test]
    fn solid_cells_are_block_and_outer_wall_only() {
        let solid: Vec<CellType> = [
            CellType::Floor,
            CellType::Block,
            CellType::Ceiling,
            CellType::Start,
            CellType::Goal,
            CellType::OuterWall,
        ]
        .into_iter()
        .filter(|cell| cell.is_solid())
        .collect();
        assert_eq!(solid, vec![CellType::Block, CellType::OuterWall]);
    }

    #[test]
    fn normalized_zero_vector_stays_zero() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
        let unit = Vec3::new(3.0, 0.0, 4.0).normalized();
        assert!((unit.length() - 1.0).abs() < 1e-6);
    }
}
