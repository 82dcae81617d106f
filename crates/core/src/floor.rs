//! One playable floor: maze, expanded stage, and spawn plan, built from a
//! run seed so every floor of a run is reproducible.

mod appearance;
mod run;
mod spawns;

use log::{info, warn};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;

use crate::config::StageConfig;
use crate::error::ConfigError;
use crate::maze::{MazeGenerator, MazeGrid, derive_floor_seed};
use crate::stage::StageLayout;

pub use appearance::{EnemyAppearance, EnemyAppearanceTable};
pub use run::RunProgress;
pub use spawns::{
    ENEMY_SPAWN_HEIGHT, PLAYER_SPAWN_HEIGHT, PlayerSpawn, PursuerSpawn, SpawnPlan, plan_spawns,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedFloor {
    pub floor: u32,
    pub floor_seed: u64,
    pub maze: MazeGrid,
    pub stage: StageLayout,
    pub appearance: EnemyAppearance,
    pub spawns: SpawnPlan,
    pub start_reachable: bool,
}

pub struct FloorGenerator {
    config: StageConfig,
    run_seed: u64,
    maze: MazeGenerator,
}

impl FloorGenerator {
    pub fn new(config: StageConfig, run_seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let maze = MazeGenerator::new(config.maze)?;
        Ok(Self { config, run_seed, maze })
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn generate(&self, floor: u32) -> Result<GeneratedFloor, ConfigError> {
        let floor_seed = derive_floor_seed(self.run_seed, floor);
        let mut rng = ChaCha8Rng::seed_from_u64(floor_seed);

        let maze = self.maze.generate(&mut rng);
        let start_reachable = maze.start_reaches_goal();
        if !start_reachable {
            warn!(
                "floor {floor}: start {:?} is cut off from goal {:?} (seed {floor_seed})",
                maze.start(),
                maze.goal()
            );
        }

        let stage = StageLayout::build(&maze, self.config.layout)?;
        let appearance = self.config.enemies.for_floor(floor).unwrap_or(EnemyAppearance::NONE);
        let spawns = plan_spawns(&stage, appearance, &mut rng);

        info!(
            "floor {floor}: {}x{} stage, {} searchers, {} pursuers",
            stage.physical().width(),
            stage.physical().height(),
            spawns.searchers.len(),
            spawns.pursuers.len()
        );

        Ok(GeneratedFloor { floor, floor_seed, maze, stage, appearance, spawns, start_reachable })
    }

    /// Generates the floor `progress` is on after climbing one more flight.
    pub fn next_floor(&self, progress: &mut RunProgress) -> Result<GeneratedFloor, ConfigError> {
        let floor = progress.go_upstairs();
        if progress.is_first_floor() {
            info!("run {}: entering the first floor", self.run_seed);
        }
        self.generate(floor)
    }
}

pub fn generate_floor(
    config: &StageConfig,
    run_seed: u64,
    floor: u32,
) -> Result<GeneratedFloor, ConfigError> {
    FloorGenerator::new(config.clone(), run_seed)?.generate(floor)
}
