//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Obstacle, ObstacleKind, Rgb};
use super::level::level_config;
use super::spawner::ObstacleSpawner;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with Play and Quit buttons
    #[default]
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for a click
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game over",
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Ran into an obstacle
    Collision(ObstacleKind),
    /// Survived the final level
    Completed,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Jumped,
    ObstacleSpawned(ObstacleKind),
    LevelUp { level: u32 },
    GameOver(GameOverCause),
    ReturnedToMenu,
}

pub const PLAYER_COLOR: Rgb = [0.0, 0.0, 1.0];
pub const GROUND_COLOR: Rgb = [0.5, 0.5, 0.5];

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Entity,
    /// Vertical velocity (world units/s)
    pub vel_y: f32,
    /// Airborne after a jump, until the ground clamp lands it
    pub jumping: bool,
    /// Height the current jump took off from
    pub initial_jump_y: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            body: Entity::new(
                Vec2::new(PLAYER_START_X, PLAYER_START_Y),
                Vec2::splat(PLAYER_SIZE),
                PLAYER_COLOR,
            ),
            vel_y: 0.0,
            jumping: false,
            initial_jump_y: PLAYER_START_Y,
        }
    }
}

impl Player {
    /// Place the player at rest at (x, y)
    pub fn reset_to(&mut self, x: f32, y: f32) {
        self.body.bounds.pos = Vec2::new(x, y);
        self.vel_y = 0.0;
        self.jumping = false;
        self.initial_jump_y = y;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.bounds.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.body.bounds.pos.y
    }
}

/// Summary of a finished run, logged on game over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    pub level: u32,
    pub level_time: f32,
    pub distance: f32,
    pub obstacles_spawned: u32,
    pub cause: GameOverCause,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    /// Seconds spent in the current level
    pub level_time: f32,
    /// Seconds since the last obstacle spawn
    pub spawn_timer: f32,
    /// Horizontal run speed; ratchets up on level change, reset on a new run
    pub player_speed: f32,
    pub player: Player,
    /// Immutable after construction
    pub ground: Entity,
    /// Live obstacles in spawn order (and therefore x order)
    pub obstacles: Vec<Obstacle>,
    /// Width of the visible world, tracks the window aspect ratio
    pub visible_width: f32,
    pub spawner: ObstacleSpawner,
}

impl GameState {
    /// Create a new game state at the menu, seeding the obstacle spawner
    pub fn new(seed: u64) -> Self {
        let ground = Entity::new(
            Vec2::new(-DEFAULT_VISIBLE_WIDTH / 2.0, -VISIBLE_HEIGHT / 2.0),
            Vec2::new(DEFAULT_VISIBLE_WIDTH * GROUND_LENGTH_FACTOR, GROUND_THICKNESS),
            GROUND_COLOR,
        );

        Self {
            phase: GamePhase::Menu,
            level: 1,
            level_time: 0.0,
            spawn_timer: 0.0,
            player_speed: level_config(1).player_speed,
            player: Player::default(),
            ground,
            obstacles: Vec::new(),
            visible_width: DEFAULT_VISIBLE_WIDTH,
            spawner: ObstacleSpawner::new(seed),
        }
    }

    /// Top surface of the ground
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.ground.bounds.top()
    }

    /// Reset everything a fresh run starts from and enter `Playing`
    pub fn start_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.level = 1;
        self.player_speed = level_config(1).player_speed;
        self.level_time = 0.0;
        self.spawn_timer = 0.0;
        let spawn_y = self.ground_top() + PLAYER_SPAWN_LIFT;
        self.player.reset_to(PLAYER_START_X, spawn_y);
        self.obstacles.clear();
    }

    /// Move on to the next level within the current run
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.level_time = 0.0;
        self.player.body.bounds.pos.x = PLAYER_START_X;
        self.obstacles.clear();
        self.player_speed = self.player_speed.max(level_config(self.level).player_speed);
    }

    /// Track a new visible width after the window was resized
    pub fn set_visible_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.visible_width = width;
        }
    }

    pub fn summary(&self, cause: GameOverCause) -> RunSummary {
        RunSummary {
            seed: self.spawner.seed(),
            level: self.level,
            level_time: self.level_time,
            distance: self.player.x(),
            obstacles_spawned: self.spawner.spawned(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.level, 1);
        assert!(state.obstacles.is_empty());
        assert!((state.ground_top() - (-5.9)).abs() < 1e-6);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(GamePhase::Menu.as_str(), "menu");
        assert_eq!(GamePhase::Playing.as_str(), "playing");
        assert_eq!(GamePhase::GameOver.as_str(), "game over");
    }

    #[test]
    fn test_start_run_resets_run_state() {
        let mut state = GameState::new(1);
        state.level = 2;
        state.player_speed = 7.0;
        state.level_time = 9.0;
        state.spawn_timer = 1.5;
        state.player.reset_to(40.0, state.ground_top());
        state.player.jumping = true;
        state.player.vel_y = 3.0;

        state.start_run();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.player_speed, 5.0);
        assert_eq!(state.level_time, 0.0);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(state.player.x(), 0.0);
        assert!((state.player.y() - (state.ground_top() + PLAYER_SPAWN_LIFT)).abs() < 1e-6);
        assert!(!state.player.jumping);
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_advance_level_ratchets_speed() {
        let mut state = GameState::new(1);
        state.start_run();
        state.player.body.bounds.pos.x = 70.0;
        state.advance_level();
        assert_eq!(state.level, 2);
        assert_eq!(state.player_speed, 7.0);
        assert_eq!(state.player.x(), 0.0);
    }

    #[test]
    fn test_set_visible_width_ignores_bad_values() {
        let mut state = GameState::new(1);
        state.set_visible_width(21.0);
        assert_eq!(state.visible_width, 21.0);
        state.set_visible_width(0.0);
        state.set_visible_width(f32::NAN);
        assert_eq!(state.visible_width, 21.0);
    }
}
