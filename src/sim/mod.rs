//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Frame time is passed in explicitly
//! - Seeded RNG only
//! - Obstacles are kept in spawn order

pub mod collision;
pub mod entity;
pub mod level;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::check_collision;
pub use entity::{Aabb, Entity, Obstacle, ObstacleKind, Rgb};
pub use level::{FINAL_LEVEL, LEVELS, LevelConfig, SpawnPolicy, level_config};
pub use spawner::{ObstacleSpawner, cleanup};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState, Player, RunSummary};
pub use tick::{PLAY_BUTTON, QUIT_BUTTON, TickInput, TickOutcome, TickResult, tick};
