//! Procedural maze generation split into coherent submodules.

mod connectivity;
mod generator;
mod model;
mod seed;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::error::ConfigError;

pub use generator::{MAX_MAZE_DIMENSION, MIN_MAZE_DIMENSION, MazeGenerator, MazeParams};
pub use model::MazeGrid;
pub(crate) use seed::random_index;
pub use seed::{derive_floor_seed, runtime_seed};

pub fn generate_maze<R: Rng + ?Sized>(
    params: MazeParams,
    rng: &mut R,
) -> Result<MazeGrid, ConfigError> {
    Ok(MazeGenerator::new(params)?.generate(rng))
}

pub fn generate_seeded_maze(params: MazeParams, seed: u64) -> Result<MazeGrid, ConfigError> {
    generate_maze(params, &mut ChaCha8Rng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_helper_matches_generator_output() {
        let params = MazeParams::default();
        let from_helper = generate_seeded_maze(params, 123).expect("default params are valid");
        let from_generator = MazeGenerator::new(params)
            .expect("default params are valid")
            .generate(&mut ChaCha8Rng::seed_from_u64(123));

        assert_eq!(from_helper, from_generator);
        assert_eq!(from_helper.fingerprint(), from_generator.fingerprint());
    }

    #[test]
    fn invalid_params_fail_before_generation() {
        let params = MazeParams { width: 8, ..MazeParams::default() };
        assert!(matches!(
            generate_seeded_maze(params, 1),
            Err(ConfigError::DimensionEven { axis: "width", value: 8 })
        ));
    }
}
