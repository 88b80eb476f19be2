//! Per-frame simulation step
//!
//! Advances the game state by one variable-length frame. The step is pure: all
//! input arrives through `TickInput`, and everything observable comes back in
//! the returned `TickResult` or in the mutated `GameState`.

use glam::Vec2;

use super::collision::check_collision;
use super::entity::Aabb;
use super::level::{is_final_level, level_config};
use super::physics::{advance_horizontal, integrate_vertical, try_jump};
use super::spawner::cleanup;
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};
use crate::consts::*;

/// Menu button hit-regions in world coordinates (edges inclusive)
pub const PLAY_BUTTON: Aabb = Aabb::new(Vec2::new(-2.0, 0.5), Vec2::new(4.0, 1.5));
pub const QUIT_BUTTON: Aabb = Aabb::new(Vec2::new(-2.0, -2.0), Vec2::new(4.0, 1.5));

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key went down this frame
    pub jump: bool,
    /// Quit key went down this frame
    pub quit: bool,
    /// Pointer pressed this frame, in world coordinates
    pub pointer_press: Option<Vec2>,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickOutcome {
    #[default]
    Continue,
    /// Close the window and exit
    Quit,
}

/// Result of a single tick
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub outcome: TickOutcome,
    pub events: Vec<GameEvent>,
}

impl TickResult {
    fn quit() -> Self {
        Self {
            outcome: TickOutcome::Quit,
            events: Vec::new(),
        }
    }
}

/// Advance the game state by `dt` seconds
///
/// At most one phase transition happens per call.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickResult {
    if input.quit {
        return TickResult::quit();
    }

    let mut result = TickResult::default();

    match state.phase {
        GamePhase::Menu => {
            if let Some(point) = input.pointer_press {
                if PLAY_BUTTON.contains_point(point) {
                    state.start_run();
                    result.events.push(GameEvent::RunStarted);
                } else if QUIT_BUTTON.contains_point(point) {
                    result.outcome = TickOutcome::Quit;
                }
            }
        }

        GamePhase::Playing => step_playing(state, input, dt, &mut result.events),

        GamePhase::GameOver => {
            if input.pointer_press.is_some() {
                state.phase = GamePhase::Menu;
                result.events.push(GameEvent::ReturnedToMenu);
            }
        }
    }

    result
}

fn step_playing(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    state.level_time += dt;
    state.spawn_timer += dt;

    if state.spawn_timer >= SPAWN_INTERVAL {
        let policy = level_config(state.level).spawn_policy;
        let obstacle = state.spawner.spawn(
            state.player.x(),
            state.ground.bounds.top(),
            state.visible_width,
            policy,
        );
        events.push(GameEvent::ObstacleSpawned(obstacle.kind));
        state.obstacles.push(obstacle);
        state.spawn_timer = 0.0;
    }

    cleanup(&mut state.obstacles, state.player.x(), state.visible_width);

    advance_horizontal(&mut state.player, state.player_speed, dt);
    if input.jump && try_jump(&mut state.player) {
        events.push(GameEvent::Jumped);
    }
    let ground_top = state.ground.bounds.top();
    integrate_vertical(&mut state.player, ground_top, dt);

    let player_bounds = state.player.body.bounds;
    if let Some(hit) = state
        .obstacles
        .iter()
        .find(|o| check_collision(&player_bounds, &o.bounds))
    {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver(GameOverCause::Collision(hit.kind)));
        return;
    }

    if state.level_time >= LEVEL_DURATION {
        if is_final_level(state.level) {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver(GameOverCause::Completed));
        } else {
            state.advance_level();
            events.push(GameEvent::LevelUp { level: state.level });
        }
    }
}
