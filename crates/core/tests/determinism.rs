use walker_core::{FloorGenerator, MazeParams, StageConfig, generate_floor, generate_seeded_maze};

#[test]
fn test_determinism_identical_seeds_produce_same_maze() {
    let params = MazeParams::default();
    let first = generate_seeded_maze(params, 12_345).expect("valid params");
    let second = generate_seeded_maze(params, 12_345).expect("valid params");

    assert_eq!(first, second);
    assert_eq!(
        first.fingerprint(),
        second.fingerprint(),
        "Identical seeds must produce identical fingerprints"
    );
}

#[test]
fn test_determinism_different_seeds_produce_different_mazes() {
    let params = MazeParams { width: 15, height: 15, ..MazeParams::default() };
    let params = MazeParams {
        start: walker_core::Pos::new(0, 14),
        goal: walker_core::Pos::new(14, 0),
        ..params
    };
    let fingerprints: Vec<u64> = [1_u64, 2, 3, 4]
        .into_iter()
        .map(|seed| generate_seeded_maze(params, seed).expect("valid params").fingerprint())
        .collect();

    for (index, fingerprint) in fingerprints.iter().enumerate() {
        assert!(
            !fingerprints[..index].contains(fingerprint),
            "seed {} repeated an earlier maze",
            index + 1
        );
    }
}

#[test]
fn test_determinism_whole_floor_is_reproducible_from_run_seed() {
    let config = StageConfig::default();
    for floor in 1..=6 {
        let left = generate_floor(&config, 88_001, floor).expect("floor");
        let right = FloorGenerator::new(config.clone(), 88_001)
            .expect("valid config")
            .generate(floor)
            .expect("floor");
        assert_eq!(left, right, "floor {floor} diverged between identical runs");
    }
}
