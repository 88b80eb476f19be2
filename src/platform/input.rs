//! Keyboard and pointer state
//!
//! Window events update held-button state as they arrive; once per frame the
//! host collects the presses that happened since the previous frame into a
//! `TickInput`. A press and release that both land between two frames still
//! counts as one press.

use glam::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use super::viewport::Viewport;
use crate::sim::TickInput;

/// Logical buttons the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Jump,
    Quit,
    Pointer,
}

impl Button {
    /// Fixed key bindings
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Space => Some(Button::Jump),
            KeyCode::Escape => Some(Button::Quit),
            _ => None,
        }
    }

    pub fn from_mouse(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Button::Pointer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    held: bool,
    /// Went down since the last `take_frame_input`
    pressed: bool,
}

impl ButtonState {
    fn update(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                // Key repeat delivers Pressed while already held
                if !self.held {
                    self.pressed = true;
                }
                self.held = true;
            }
            ElementState::Released => self.held = false,
        }
    }
}

/// Input collected between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    jump: ButtonState,
    quit: ButtonState,
    pointer: ButtonState,
    /// Cursor position in physical pixels (origin top-left)
    cursor_px: (f64, f64),
    /// Cursor position at the moment the pointer went down
    press_px: Option<(f64, f64)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_px = (x, y);
    }

    pub fn button(&mut self, button: Button, state: ElementState) {
        match button {
            Button::Jump => self.jump.update(state),
            Button::Quit => self.quit.update(state),
            Button::Pointer => {
                self.pointer.update(state);
                if self.pointer.pressed && self.press_px.is_none() {
                    self.press_px = Some(self.cursor_px);
                }
            }
        }
    }

    /// Build this frame's input and clear the press edges
    pub fn take_frame_input(&mut self, viewport: &Viewport) -> TickInput {
        let pointer_press: Option<Vec2> = self
            .press_px
            .take()
            .map(|(x, y)| viewport.screen_to_world(x, y));

        let input = TickInput {
            jump: self.jump.pressed,
            quit: self.quit.pressed,
            pointer_press,
        };

        self.jump.pressed = false;
        self.quit.pressed = false;
        self.pointer.pressed = false;
        input
    }
}
