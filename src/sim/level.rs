//! Per-level tuning table
//!
//! Levels are 1-based. Each entry fixes the player's run speed and the rule the
//! spawner uses to pick obstacle variants.

use serde::{Deserialize, Serialize};

/// How the spawner chooses an obstacle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Every obstacle is a block
    Blocks,
    /// Every obstacle is a hazard
    Hazards,
    /// Independent coin flip per obstacle
    Mixed,
}

/// Configuration for a single level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Horizontal run speed (world units/s)
    pub player_speed: f32,
    pub spawn_policy: SpawnPolicy,
}

/// Level table, indexed by `level - 1`
///
/// Level 3 is configured but never reached: finishing `FINAL_LEVEL` ends the run.
pub const LEVELS: [LevelConfig; 3] = [
    LevelConfig {
        player_speed: 5.0,
        spawn_policy: SpawnPolicy::Blocks,
    },
    LevelConfig {
        player_speed: 7.0,
        spawn_policy: SpawnPolicy::Hazards,
    },
    LevelConfig {
        player_speed: 7.0,
        spawn_policy: SpawnPolicy::Mixed,
    },
];

/// Last level of a run; surviving it ends the game
pub const FINAL_LEVEL: u32 = 2;

/// Look up a level's configuration, clamping out-of-range levels to the table
pub fn level_config(level: u32) -> LevelConfig {
    let index = (level.max(1) as usize - 1).min(LEVELS.len() - 1);
    LEVELS[index]
}

/// Whether surviving `level` ends the run
#[inline]
pub fn is_final_level(level: u32) -> bool {
    level >= FINAL_LEVEL
}
