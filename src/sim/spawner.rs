//! Obstacle spawning and cleanup
//!
//! Obstacles appear just past the right edge of the visible world and are
//! dropped once they scroll an equal margin past the left edge. The spawner
//! owns a seeded RNG so a run is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Aabb, Obstacle, ObstacleKind};
use super::level::SpawnPolicy;
use crate::consts::*;

/// Midpoint of the obstacle height range, used as the 50/50 threshold for mixed spawns
const MIXED_THRESHOLD: f32 = (OBSTACLE_MIN_HEIGHT + OBSTACLE_MAX_HEIGHT) / 2.0;

/// X coordinate new obstacles are placed at
#[inline]
pub fn spawn_x(player_x: f32, visible_width: f32) -> f32 {
    player_x + visible_width / 2.0 + OFFSCREEN_MARGIN
}

/// X coordinate behind which obstacles are removed
#[inline]
pub fn despawn_x(player_x: f32, visible_width: f32) -> f32 {
    player_x - visible_width / 2.0 - OFFSCREEN_MARGIN
}

/// Seeded obstacle generator
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    seed: u64,
    rng: Pcg32,
    /// Obstacles produced since the spawner was created
    spawned: u32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            spawned: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Draw from the obstacle height distribution
    fn draw_height(&mut self) -> f32 {
        self.rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT)
    }

    /// Produce one obstacle resting on the ground ahead of the player
    pub fn spawn(
        &mut self,
        player_x: f32,
        ground_top: f32,
        visible_width: f32,
        policy: SpawnPolicy,
    ) -> Obstacle {
        let height = self.draw_height();
        let kind = match policy {
            SpawnPolicy::Blocks => ObstacleKind::Block,
            SpawnPolicy::Hazards => ObstacleKind::Hazard,
            SpawnPolicy::Mixed => {
                if self.draw_height() > MIXED_THRESHOLD {
                    ObstacleKind::Block
                } else {
                    ObstacleKind::Hazard
                }
            }
        };

        self.spawned += 1;
        Obstacle::new(
            kind,
            Aabb::new(
                Vec2::new(spawn_x(player_x, visible_width), ground_top),
                Vec2::new(OBSTACLE_WIDTH, height),
            ),
        )
    }
}

/// Remove obstacles that have scrolled out of view behind the player
///
/// Survivors keep their spawn order. Returns how many were removed.
pub fn cleanup(obstacles: &mut Vec<Obstacle>, player_x: f32, visible_width: f32) -> usize {
    let limit = despawn_x(player_x, visible_width);
    let before = obstacles.len();
    obstacles.retain(|o| o.bounds.pos.x >= limit);
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GROUND_TOP: f32 = -5.9;

    #[test]
    fn test_spawn_geometry() {
        let mut spawner = ObstacleSpawner::new(7);
        let o = spawner.spawn(3.0, GROUND_TOP, 16.0, SpawnPolicy::Blocks);
        assert_eq!(o.bounds.pos.x, 3.0 + 8.0 + 1.0);
        assert_eq!(o.bounds.pos.y, GROUND_TOP);
        assert_eq!(o.bounds.size.x, OBSTACLE_WIDTH);
        assert!(o.bounds.size.y >= OBSTACLE_MIN_HEIGHT && o.bounds.size.y < OBSTACLE_MAX_HEIGHT);
        assert_eq!(spawner.spawned(), 1);
    }

    #[test]
    fn test_policy_kinds() {
        let mut spawner = ObstacleSpawner::new(1);
        for _ in 0..20 {
            assert_eq!(
                spawner.spawn(0.0, GROUND_TOP, 16.0, SpawnPolicy::Blocks).kind,
                ObstacleKind::Block
            );
            assert_eq!(
                spawner.spawn(0.0, GROUND_TOP, 16.0, SpawnPolicy::Hazards).kind,
                ObstacleKind::Hazard
            );
        }
    }

    #[test]
    fn test_mixed_policy_produces_both_kinds() {
        let mut spawner = ObstacleSpawner::new(42);
        let kinds: Vec<_> = (0..200)
            .map(|_| spawner.spawn(0.0, GROUND_TOP, 16.0, SpawnPolicy::Mixed).kind)
            .collect();
        assert!(kinds.contains(&ObstacleKind::Block));
        assert!(kinds.contains(&ObstacleKind::Hazard));
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let mut a = ObstacleSpawner::new(99999);
        let mut b = ObstacleSpawner::new(99999);
        for _ in 0..10 {
            let oa = a.spawn(0.0, GROUND_TOP, 16.0, SpawnPolicy::Mixed);
            let ob = b.spawn(0.0, GROUND_TOP, 16.0, SpawnPolicy::Mixed);
            assert_eq!(oa, ob);
        }
    }

    #[test]
    fn test_cleanup_keeps_order() {
        let make = |x: f32| {
            Obstacle::new(
                ObstacleKind::Block,
                Aabb::new(Vec2::new(x, GROUND_TOP), Vec2::new(OBSTACLE_WIDTH, 0.4)),
            )
        };
        // player at 10, width 16 -> limit = 10 - 8 - 1 = 1
        let mut obstacles = vec![make(-5.0), make(0.5), make(1.0), make(4.0), make(20.0)];
        let removed = cleanup(&mut obstacles, 10.0, 16.0);
        assert_eq!(removed, 2);
        let xs: Vec<f32> = obstacles.iter().map(|o| o.bounds.pos.x).collect();
        assert_eq!(xs, vec![1.0, 4.0, 20.0]);
    }

    proptest! {
        #[test]
        fn prop_spawn_is_past_right_edge(
            seed in any::<u64>(),
            player_x in -50.0f32..500.0,
            width in 4.0f32..40.0,
        ) {
            let mut spawner = ObstacleSpawner::new(seed);
            let o = spawner.spawn(player_x, GROUND_TOP, width, SpawnPolicy::Mixed);
            prop_assert!(o.bounds.pos.x > player_x + width / 2.0);
        }

        #[test]
        fn prop_cleanup_removes_exactly_the_stale(
            xs in proptest::collection::vec(-100.0f32..100.0, 0..40),
            player_x in -50.0f32..50.0,
            width in 4.0f32..40.0,
        ) {
            let mut obstacles: Vec<Obstacle> = xs
                .iter()
                .map(|&x| Obstacle::new(
                    ObstacleKind::Hazard,
                    Aabb::new(Vec2::new(x, GROUND_TOP), Vec2::new(OBSTACLE_WIDTH, 0.4)),
                ))
                .collect();
            cleanup(&mut obstacles, player_x, width);

            let limit = despawn_x(player_x, width);
            let expected: Vec<f32> = xs.iter().copied().filter(|&x| x >= limit).collect();
            let kept: Vec<f32> = obstacles.iter().map(|o| o.bounds.pos.x).collect();
            prop_assert_eq!(kept, expected);
        }
    }
}
