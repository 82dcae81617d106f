//! Stage configuration file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigFileError};
use crate::floor::EnemyAppearanceTable;
use crate::maze::MazeParams;
use crate::stage::{LayoutParams, physical_size};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub maze: MazeParams,
    pub layout: LayoutParams,
    pub enemies: EnemyAppearanceTable,
}

impl StageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maze.validate()?;
        self.layout.validate()?;
        physical_size(self.maze.width, self.maze.height, &self.layout)?;
        self.enemies.validate()
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads, parses, and validates a TOML stage config; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigFileError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&text)
            .map_err(|source| ConfigFileError::Parse { path: path.to_path_buf(), source })?;
        config
            .validate()
            .map_err(|source| ConfigFileError::Invalid { path: path.to_path_buf(), source })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::floor::EnemyAppearance;
    use crate::types::{Pos, RoomSize};

    #[test]
    fn defaults_describe_a_valid_stage() {
        let config = StageConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.maze.start, Pos::new(0, 8));
        assert_eq!(config.maze.goal, Pos::new(8, 0));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let text = r#"
            enemies = [{ searchers = 4, pursuers = 1 }]

            [maze]
            width = 11
            start = { x = 0, y = 10 }

            [layout]
            room_size = { x = 4, y = 2 }
        "#;
        let config = StageConfig::from_toml_str(text).expect("parse");

        assert_eq!(config.maze.width, 11);
        assert_eq!(config.maze.height, 9);
        assert_eq!(config.maze.start, Pos::new(0, 10));
        assert_eq!(config.layout.room_size, RoomSize { x: 4, y: 2 });
        assert_eq!(config.layout.wall_thickness, 1);
        assert_eq!(config.enemies.for_floor(7), Some(EnemyAppearance::new(4, 1)));
    }

    #[test]
    fn load_reports_invalid_values_with_the_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("stage.toml");
        fs::write(&path, "[maze]\nwidth = 10\n").expect("write");

        let err = StageConfig::load(&path).expect_err("even width must be rejected");
        assert!(matches!(
            err,
            ConfigFileError::Invalid {
                source: ConfigError::DimensionEven { axis: "width", value: 10 },
                ..
            }
        ));
        assert!(err.to_string().contains("stage.toml"));
    }

    #[test]
    fn oversized_layout_is_rejected_before_any_grid_exists() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("stage.toml");
        fs::write(&path, "[layout]\nroom_size = { x = 1000000000, y = 3 }\n").expect("write");

        assert!(matches!(
            StageConfig::load(&path),
            Err(ConfigFileError::Invalid {
                source: ConfigError::StageTooLarge { axis: "width" },
                ..
            })
        ));
    }

    #[test]
    fn load_reports_missing_and_malformed_files() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("missing.toml");
        assert!(matches!(StageConfig::load(&missing), Err(ConfigFileError::Io { .. })));

        let malformed = dir.path().join("malformed.toml");
        fs::write(&malformed, "[maze\nwidth = ").expect("write");
        assert!(matches!(StageConfig::load(&malformed), Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn saved_config_loads_back_unchanged() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("stage.toml");
        let mut config = StageConfig::default();
        config.maze.width = 13;
        config.layout.outer_wall_thickness = 2;

        fs::write(&path, toml::to_string(&config).expect("serialize")).expect("write");
        assert_eq!(StageConfig::load(&path).expect("load"), config);
    }
}
