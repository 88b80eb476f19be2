//! Square Dash - A side-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, spawning, collisions, game state)
//! - `renderer`: wgpu rendering pipeline, shapes and stroke-font text
//! - `platform`: Window, input, clock and viewport handling
//! - `settings`: Launch-time configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed world height shown on screen (world units)
    pub const VISIBLE_HEIGHT: f32 = 12.0;
    /// Visible world width before the first resize notification
    pub const DEFAULT_VISIBLE_WIDTH: f32 = 16.0;

    /// Upward velocity applied on jump
    pub const JUMP_FORCE: f32 = 8.0;
    /// Vertical acceleration (world units/s²)
    pub const GRAVITY: f32 = -18.0;
    /// Jump ceiling above the take-off height
    pub const MAX_JUMP_HEIGHT: f32 = 0.8;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 0.3;
    pub const PLAYER_START_X: f32 = 0.0;
    pub const PLAYER_START_Y: f32 = 0.1;
    /// Height above the ground the player drops in from when a run starts
    pub const PLAYER_SPAWN_LIFT: f32 = 0.15;

    /// Ground thickness and length (as a multiple of the visible width)
    pub const GROUND_THICKNESS: f32 = 0.1;
    pub const GROUND_LENGTH_FACTOR: f32 = 100.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 0.3;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 0.3;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 0.5;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 2.0;
    /// Distance beyond the visible edge where obstacles spawn and despawn
    pub const OFFSCREEN_MARGIN: f32 = 1.0;

    /// Horizontal overlap an AABB pair must exceed to count as a hit
    pub const EDGE_TOLERANCE: f32 = 0.01;

    /// Seconds a level lasts
    pub const LEVEL_DURATION: f32 = 15.0;
}
