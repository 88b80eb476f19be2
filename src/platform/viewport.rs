//! Window-to-world mapping
//!
//! The visible world is always `VISIBLE_HEIGHT` units tall; its width is the
//! base width `DEFAULT_VISIBLE_WIDTH` scaled by the window's aspect ratio.

use glam::{Mat4, Vec2};

use crate::consts::{DEFAULT_VISIBLE_WIDTH, VISIBLE_HEIGHT};

/// Current window size and the world extent it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window size in physical pixels
    pub size_px: (u32, u32),
    /// Visible world width
    pub visible_width: f32,
    /// Visible world height
    pub visible_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size_px: (0, 0),
            visible_width: DEFAULT_VISIBLE_WIDTH,
            visible_height: VISIBLE_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut viewport = Self::default();
        viewport.resize(width, height);
        viewport
    }

    /// Recompute the visible extent for a new window size
    ///
    /// Zero-sized windows (minimized) keep the previous extent.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size_px = (width, height);
        if width > 0 && height > 0 {
            self.visible_height = VISIBLE_HEIGHT;
            self.visible_width = DEFAULT_VISIBLE_WIDTH * width as f32 / height as f32;
        }
    }

    /// Orthographic projection centered on the camera
    pub fn projection(&self) -> Mat4 {
        let half_w = self.visible_width / 2.0;
        let half_h = self.visible_height / 2.0;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, -1.0, 1.0)
    }

    /// Convert a window pixel position (origin top-left, y down) to world space
    ///
    /// Returns coordinates relative to an untranslated camera.
    pub fn screen_to_world(&self, x: f64, y: f64) -> Vec2 {
        let (w, h) = self.size_px;
        if w == 0 || h == 0 {
            return Vec2::ZERO;
        }
        let (w, h) = (w as f64, h as f64);
        let vw = self.visible_width as f64;
        let vh = self.visible_height as f64;

        let world_x = (x / w) * vw - vw / 2.0;
        let world_y = (h - y) / h * vh - vh / 2.0;
        Vec2::new(world_x as f32, world_y as f32)
    }
}
