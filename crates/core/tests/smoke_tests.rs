use walker_core::floor::ENEMY_SPAWN_HEIGHT;
use walker_core::{CellType, FloorGenerator, RunProgress, StageConfig, Vec3};

fn climb(seed: u64, floors: u32) -> Vec<walker_core::GeneratedFloor> {
    let generator = FloorGenerator::new(StageConfig::default(), seed).expect("valid config");
    let mut progress = RunProgress::new();
    (0..floors).map(|_| generator.next_floor(&mut progress).expect("floor")).collect()
}

#[test]
fn test_smoke_run_climbs_ten_floors() {
    let floors = climb(12_345, 10);
    assert_eq!(floors.len(), 10);
    for (index, floor) in floors.iter().enumerate() {
        assert_eq!(floor.floor, index as u32 + 1);
        assert_eq!(floor.maze.grid().count(CellType::Start), 1);
        assert_eq!(floor.maze.grid().count(CellType::Goal), 1);
        assert!(floor.start_reachable, "floor {} start is cut off", floor.floor);
    }
}

#[test]
fn test_smoke_searchers_spawn_above_distinct_rooms() {
    for floor in climb(2_024, 6) {
        let rooms = floor.stage.room_positions();
        let lift = Vec3::UP * ENEMY_SPAWN_HEIGHT;
        for (index, searcher) in floor.spawns.searchers.iter().enumerate() {
            assert!(rooms.contains(&(*searcher - lift)), "floor {} searcher off-room", floor.floor);
            assert!(!floor.spawns.searchers[..index].contains(searcher));
        }
        assert_eq!(floor.spawns.searchers.len(), floor.appearance.searchers);
    }
}

#[test]
fn test_smoke_reset_restarts_at_floor_one() {
    let generator = FloorGenerator::new(StageConfig::default(), 7).expect("valid config");
    let mut progress = RunProgress::new();
    let first = generator.next_floor(&mut progress).expect("floor");
    generator.next_floor(&mut progress).expect("floor");
    assert_eq!(progress.cleared_floors(), 1);

    progress.reset();
    let again = generator.next_floor(&mut progress).expect("floor");
    assert_eq!(first, again, "the same run seed replays the same first floor");
}
