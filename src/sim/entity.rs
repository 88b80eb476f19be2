//! Axis-aligned geometry shared by every game entity
//!
//! Positions are the lower-left corner of the box in world coordinates
//! (y up, origin at the screen center when the camera is at x = 0).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGB color, each channel in [0, 1]
pub type Rgb = [f32; 3];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Lower-left corner
    pub pos: Vec2,
    /// Width and height (both >= 0)
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Check if a point lies inside the box (edges included)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }
}

/// A plain colored box (player, ground)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub bounds: Aabb,
    pub color: Rgb,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, color: Rgb) -> Self {
        Self {
            bounds: Aabb::new(pos, size),
            color,
        }
    }
}

/// Obstacle variants
///
/// Both variants collide the same way today; they differ in how they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Solid rectangle
    #[default]
    Block,
    /// Triangular spike
    Hazard,
}

impl ObstacleKind {
    pub fn color(&self) -> Rgb {
        match self {
            ObstacleKind::Block => [1.0, 0.0, 0.0],
            ObstacleKind::Hazard => [1.0, 0.5, 0.0],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Block => "block",
            ObstacleKind::Hazard => "hazard",
        }
    }
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub bounds: Aabb,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, bounds: Aabb) -> Self {
        Self { kind, bounds }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_edges() {
        let b = Aabb::new(Vec2::new(1.0, -2.0), Vec2::new(0.5, 0.25));
        assert_eq!(b.left(), 1.0);
        assert_eq!(b.right(), 1.5);
        assert_eq!(b.bottom(), -2.0);
        assert_eq!(b.top(), -1.75);
    }

    #[test]
    fn test_contains_point_edges_inclusive() {
        let b = Aabb::new(Vec2::new(-2.0, 0.5), Vec2::new(4.0, 1.5));
        assert!(b.contains_point(Vec2::new(-2.0, 0.5)));
        assert!(b.contains_point(Vec2::new(2.0, 2.0)));
        assert!(b.contains_point(Vec2::new(0.0, 1.0)));
        assert!(!b.contains_point(Vec2::new(2.01, 1.0)));
        assert!(!b.contains_point(Vec2::new(0.0, 0.49)));
    }

    #[test]
    fn test_obstacle_colors() {
        assert_eq!(ObstacleKind::Block.color(), [1.0, 0.0, 0.0]);
        assert_eq!(ObstacleKind::Hazard.color(), [1.0, 0.5, 0.0]);
    }
}
