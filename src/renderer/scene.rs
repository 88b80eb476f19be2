//! Scene building: turns a `GameState` into a triangle list
//!
//! Output vertices are in view space: world coordinates shifted so the camera
//! sits at x = 0. The pipeline's orthographic projection maps view space to the
//! screen.

use glam::Vec2;

use super::font;
use super::shapes;
use super::vertex::{Vertex, colors, opaque};
use crate::consts::VISIBLE_HEIGHT;
use crate::sim::{Aabb, GamePhase, GameState, ObstacleKind, PLAY_BUTTON, QUIT_BUTTON, Rgb};

const TITLE_HEIGHT: f32 = 0.6;
const TITLE_Y: f32 = 3.0;
const BUTTON_TEXT_HEIGHT: f32 = 0.4;
const HUD_TEXT_HEIGHT: f32 = 0.3;
const GAME_OVER_HEIGHT: f32 = 0.6;
const GAME_OVER_Y: f32 = 1.0;
const HINT_HEIGHT: f32 = 0.35;
const HINT_Y: f32 = -1.0;

/// One frame's worth of geometry
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Rgb,
    pub vertices: Vec<Vertex>,
}

/// Build the frame for the current phase
///
/// `visible_width` is the width of the world currently on screen.
pub fn build_frame(state: &GameState, visible_width: f32, show_hud: bool) -> Frame {
    let mut vertices = Vec::with_capacity(1024);

    match state.phase {
        GamePhase::Menu => menu(&mut vertices),
        GamePhase::Playing => {
            world(&mut vertices, state);
            if show_hud {
                hud(&mut vertices, state, visible_width);
            }
        }
        GamePhase::GameOver => game_over(&mut vertices),
    }

    Frame {
        clear_color: colors::BACKGROUND,
        vertices,
    }
}

/// Horizontal camera position while playing (keeps the player centered)
#[inline]
pub fn camera_x(state: &GameState) -> f32 {
    state.player.x()
}

fn centered_text(out: &mut Vec<Vertex>, text: &str, center_x: f32, baseline: f32, height: f32, color: Rgb) {
    let width = font::text_width(text, height);
    font::text(
        out,
        text,
        Vec2::new(center_x - width / 2.0, baseline),
        height,
        opaque(color),
    );
}

fn button(out: &mut Vec<Vertex>, bounds: &Aabb, label: &str, fill: Rgb) {
    shapes::rect(out, bounds.pos, bounds.size, opaque(fill));
    let center = bounds.pos + bounds.size / 2.0;
    centered_text(
        out,
        label,
        center.x,
        center.y - BUTTON_TEXT_HEIGHT / 2.0,
        BUTTON_TEXT_HEIGHT,
        colors::BUTTON_TEXT,
    );
}

fn menu(out: &mut Vec<Vertex>) {
    centered_text(out, "Square Dash", 0.0, TITLE_Y, TITLE_HEIGHT, colors::TEXT);
    button(out, &PLAY_BUTTON, "Play", colors::PLAY_BUTTON);
    button(out, &QUIT_BUTTON, "Quit", colors::QUIT_BUTTON);
}

fn world(out: &mut Vec<Vertex>, state: &GameState) {
    let offset = Vec2::new(-camera_x(state), 0.0);

    let ground = &state.ground;
    shapes::rect(out, ground.bounds.pos + offset, ground.bounds.size, opaque(ground.color));

    let player = &state.player.body;
    shapes::rect(out, player.bounds.pos + offset, player.bounds.size, opaque(player.color));

    for obstacle in &state.obstacles {
        let pos = obstacle.bounds.pos + offset;
        let color = opaque(obstacle.color());
        match obstacle.kind {
            ObstacleKind::Block => shapes::rect(out, pos, obstacle.bounds.size, color),
            ObstacleKind::Hazard => shapes::spike(out, pos, obstacle.bounds.size, color),
        }
    }
}

fn hud(out: &mut Vec<Vertex>, state: &GameState, visible_width: f32) {
    let label = format!("Level: {}  Time: {:.1}", state.level, state.level_time);
    font::text(
        out,
        &label,
        Vec2::new(-visible_width / 2.0 + 0.2, VISIBLE_HEIGHT / 2.0 - 0.5),
        HUD_TEXT_HEIGHT,
        opaque(colors::TEXT),
    );
}

fn game_over(out: &mut Vec<Vertex>) {
    centered_text(out, "Game Over!", 0.0, GAME_OVER_Y, GAME_OVER_HEIGHT, colors::GAME_OVER);
    centered_text(out, "Click to return to menu", 0.0, HINT_Y, HINT_HEIGHT, colors::TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_VISIBLE_WIDTH;
    use crate::sim::{Obstacle, TickInput, tick};

    fn has_color(frame: &Frame, rgb: Rgb) -> bool {
        let rgba = opaque(rgb);
        frame.vertices.iter().any(|v| v.color == rgba)
    }

    #[test]
    fn test_menu_draws_both_buttons() {
        let state = GameState::new(1);
        let frame = build_frame(&state, DEFAULT_VISIBLE_WIDTH, true);
        assert_eq!(frame.clear_color, colors::BACKGROUND);
        assert!(has_color(&frame, colors::PLAY_BUTTON));
        assert!(has_color(&frame, colors::QUIT_BUTTON));
    }

    #[test]
    fn test_playing_centers_player() {
        let mut state = GameState::new(1);
        state.start_run();
        tick(&mut state, &TickInput::default(), 0.5);

        let frame = build_frame(&state, DEFAULT_VISIBLE_WIDTH, false);
        let player_color = opaque(state.player.body.color);
        let xs: Vec<f32> = frame
            .vertices
            .iter()
            .filter(|v| v.color == player_color)
            .map(|v| v.position[0])
            .collect();
        assert_eq!(xs.len(), 6);
        let min = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        assert!(min.abs() < 1e-5, "player should start at view x = 0, got {min}");
    }

    #[test]
    fn test_obstacle_variants_render_differently() {
        let mut state = GameState::new(1);
        state.start_run();
        let top = state.ground_top();
        state.obstacles.push(Obstacle::new(
            ObstacleKind::Block,
            Aabb::new(Vec2::new(3.0, top), Vec2::new(0.3, 0.4)),
        ));
        state.obstacles.push(Obstacle::new(
            ObstacleKind::Hazard,
            Aabb::new(Vec2::new(5.0, top), Vec2::new(0.3, 0.4)),
        ));

        let frame = build_frame(&state, DEFAULT_VISIBLE_WIDTH, false);
        let count = |kind: ObstacleKind| {
            let rgba = opaque(kind.color());
            frame.vertices.iter().filter(|v| v.color == rgba).count()
        };
        assert_eq!(count(ObstacleKind::Block), 6);
        assert_eq!(count(ObstacleKind::Hazard), 3);
    }

    #[test]
    fn test_hud_toggle() {
        let mut state = GameState::new(1);
        state.start_run();
        let with_hud = build_frame(&state, DEFAULT_VISIBLE_WIDTH, true);
        let without_hud = build_frame(&state, DEFAULT_VISIBLE_WIDTH, false);
        assert!(with_hud.vertices.len() > without_hud.vertices.len());
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let frame = build_frame(&state, DEFAULT_VISIBLE_WIDTH, true);
        assert!(has_color(&frame, colors::GAME_OVER));
        assert!(has_color(&frame, colors::TEXT));
    }
}
