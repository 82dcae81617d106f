//! Error taxonomy for maze generation, stage layout, and configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Pos;

/// A parameter set that generation refuses to start with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("maze {axis} must be at least {minimum}, got {value}")]
    DimensionTooSmall { axis: &'static str, value: usize, minimum: usize },

    #[error("maze {axis} must be odd, got {value}")]
    DimensionEven { axis: &'static str, value: usize },

    #[error("{role} position ({}, {}) must have even coordinates", .pos.x, .pos.y)]
    MisalignedPosition { role: &'static str, pos: Pos },

    #[error("{role} position ({}, {}) lies outside a {width}x{height} maze", .pos.x, .pos.y)]
    PositionOutOfBounds { role: &'static str, pos: Pos, width: usize, height: usize },

    #[error("start and goal share position ({}, {})", .0.x, .0.y)]
    StartEqualsGoal(Pos),

    #[error("ceiling probability must lie within [0, 1], got {0}")]
    ProbabilityOutOfRange(f32),

    #[error("{what} must be at least 1")]
    ZeroThickness { what: &'static str },

    #[error("maze {axis} must be at most {maximum}, got {value}")]
    DimensionTooLarge { axis: &'static str, value: usize, maximum: usize },

    #[error("physical stage {axis} exceeds the addressable grid size")]
    StageTooLarge { axis: &'static str },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("enemy appearance table must contain at least one floor")]
    EmptyAppearanceTable,
}

/// Coordinates handed to a stage query that the stage cannot satisfy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("position ({}, {}) lies outside a {width}x{height} stage", .pos.x, .pos.y)]
    OutOfRange { pos: Pos, width: usize, height: usize },

    #[error(
        "span from ({}, {}) to ({}, {}) is inverted or not axis-aligned",
        .start.x, .start.y, .end.x, .end.y
    )]
    InvertedSpan { start: Pos, end: Pos },

    #[error("position ({}, {}) is not a room junction", .0.x, .0.y)]
    NotAJunction(Pos),
}

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("could not read stage config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse stage config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid stage config {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}
