//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a triangle list appended to a caller-owned buffer.

use glam::Vec2;

use super::vertex::Vertex;

/// Append a filled axis-aligned rectangle with lower-left corner `pos`
pub fn rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    // Two triangles
    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}

/// Append a filled triangle
pub fn triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Append an upward spike filling the box at `pos` with `size`
pub fn spike(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    triangle(
        out,
        pos,
        Vec2::new(pos.x + size.x, pos.y),
        Vec2::new(pos.x + size.x / 2.0, pos.y + size.y),
        color,
    );
}

/// Append a line segment as a quad of the given thickness
///
/// Degenerate (zero-length) segments produce a zero-area quad.
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    let half = thickness / 2.0;
    // Extend past the endpoints so joined strokes meet without gaps
    let from = from - dir * half;
    let to = to + dir * half;
    let perp = Vec2::new(-dir.y, dir.x) * half;

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), WHITE);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 6.0);
    }

    #[test]
    fn test_spike_apex_centered() {
        let mut out = Vec::new();
        spike(&mut out, Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.5), WHITE);
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].position, [0.15, 0.5]);
    }

    #[test]
    fn test_line_thickness() {
        let mut out = Vec::new();
        line(&mut out, Vec2::ZERO, Vec2::new(1.0, 0.0), 0.2, WHITE);
        assert_eq!(out.len(), 6);
        for v in &out {
            assert!((v.position[1].abs() - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_line_does_not_panic() {
        let mut out = Vec::new();
        line(&mut out, Vec2::ONE, Vec2::ONE, 0.2, WHITE);
        assert_eq!(out.len(), 6);
    }
}
