//! Player and enemy spawn placement on a built stage.

use log::warn;
use rand_chacha::rand_core::Rng;
use serde::Serialize;

use crate::maze::random_index;
use crate::stage::StageLayout;
use crate::types::Vec3;

use super::appearance::EnemyAppearance;

pub const PLAYER_SPAWN_HEIGHT: f32 = 2.0;
pub const ENEMY_SPAWN_HEIGHT: f32 = 1.0;

const PURSUER_FIRST_DELAY_SECS: f32 = 3.0;
const PURSUER_RELEASE_PADDING_SECS: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayerSpawn {
    pub position: Vec3,
    /// Horizontal unit vector from the start room toward the goal room.
    pub facing: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PursuerSpawn {
    pub position: Vec3,
    /// Seconds the pursuer trails the player's recorded path by.
    pub delay_secs: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpawnPlan {
    pub player: PlayerSpawn,
    pub searchers: Vec<Vec3>,
    pub pursuers: Vec<PursuerSpawn>,
}

pub fn plan_spawns<R: Rng + ?Sized>(
    stage: &StageLayout,
    appearance: EnemyAppearance,
    rng: &mut R,
) -> SpawnPlan {
    let start = stage.start_center();
    let goal = stage.goal_center();
    let heading = goal - start;

    let player = PlayerSpawn {
        position: start + Vec3::UP * PLAYER_SPAWN_HEIGHT,
        facing: Vec3::new(heading.x, 0.0, heading.z).normalized(),
    };

    SpawnPlan {
        player,
        searchers: pick_searcher_rooms(stage, appearance.searchers, rng),
        pursuers: pursuer_schedule(start, appearance.pursuers),
    }
}

fn pick_searcher_rooms<R: Rng + ?Sized>(
    stage: &StageLayout,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    let mut free_rooms = stage.room_positions();
    let mut searchers = Vec::with_capacity(count.min(free_rooms.len()));
    for _ in 0..count {
        if free_rooms.is_empty() {
            warn!(
                "only {} free rooms for {count} searchers; placing the rest is skipped",
                searchers.len()
            );
            break;
        }
        let room = free_rooms.swap_remove(random_index(rng, free_rooms.len()));
        searchers.push(room + Vec3::UP * ENEMY_SPAWN_HEIGHT);
    }
    searchers
}

fn pursuer_schedule(start: Vec3, count: usize) -> Vec<PursuerSpawn> {
    (0..count)
        .map(|index| PursuerSpawn {
            position: start + Vec3::UP * ENEMY_SPAWN_HEIGHT,
            delay_secs: PURSUER_FIRST_DELAY_SECS + index as f32 + PURSUER_RELEASE_PADDING_SECS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::grid::Grid;
    use crate::stage::LayoutParams;
    use crate::types::{CellType, Pos};

    fn open_stage() -> StageLayout {
        let mut grid = Grid::filled(5, 5, CellType::Block);
        for pos in grid.positions().collect::<Vec<_>>() {
            if pos.is_junction() || pos.is_corridor_candidate() {
                grid.set(pos, CellType::Floor);
            }
        }
        grid.set(Pos::new(0, 0), CellType::Start);
        grid.set(Pos::new(4, 0), CellType::Goal);
        StageLayout::from_logical(grid, LayoutParams::default()).expect("valid layout")
    }

    #[test]
    fn player_stands_above_start_and_faces_goal() {
        let stage = open_stage();
        let plan = plan_spawns(&stage, EnemyAppearance::NONE, &mut ChaCha8Rng::seed_from_u64(1));

        assert_eq!(plan.player.position, stage.start_center() + Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(plan.player.facing, Vec3::new(1.0, 0.0, 0.0));
        assert!(plan.searchers.is_empty());
        assert!(plan.pursuers.is_empty());
    }

    #[test]
    fn searchers_take_distinct_free_rooms() {
        let stage = open_stage();
        let rooms = stage.room_positions();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let plan = plan_spawns(&stage, EnemyAppearance::new(4, 0), &mut rng);

        assert_eq!(plan.searchers.len(), 4);
        for (index, searcher) in plan.searchers.iter().enumerate() {
            let room = *searcher - Vec3::UP;
            assert!(rooms.contains(&room), "searcher {searcher:?} is not above a free room");
            assert!(!plan.searchers[..index].contains(searcher), "duplicate {searcher:?}");
        }
    }

    #[test]
    fn searchers_stop_when_rooms_run_out() {
        let stage = open_stage();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let plan = plan_spawns(&stage, EnemyAppearance::new(50, 0), &mut rng);
        assert_eq!(plan.searchers.len(), stage.room_positions().len());
    }

    #[test]
    fn pursuers_leave_the_start_one_second_apart() {
        let stage = open_stage();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let plan = plan_spawns(&stage, EnemyAppearance::new(0, 3), &mut rng);
        let delays: Vec<f32> = plan.pursuers.iter().map(|pursuer| pursuer.delay_secs).collect();
        assert_eq!(delays, vec![5.0, 6.0, 7.0]);
        for pursuer in &plan.pursuers {
            assert_eq!(pursuer.position, stage.start_center() + Vec3::UP);
        }
    }
}
