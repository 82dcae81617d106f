pub mod config;
pub mod error;
pub mod floor;
pub mod grid;
pub mod maze;
pub mod stage;
pub mod types;

pub use config::StageConfig;
pub use error::{ConfigError, ConfigFileError, LayoutError};
pub use floor::{FloorGenerator, GeneratedFloor, RunProgress, generate_floor};
pub use grid::Grid;
pub use maze::{MazeGenerator, MazeGrid, MazeParams, generate_maze, generate_seeded_maze};
pub use stage::{ColliderSpan, ColliderSpans, LayoutParams, StageLayout, expand};
pub use types::*;
