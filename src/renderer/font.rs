//! Stroke-font text rendering
//!
//! Glyphs are polylines on a 4 x 6 grid (x right, y up, baseline at y = 0).
//! Each stroke segment is tessellated into a thin quad, so text goes through the
//! same triangle pipeline as every other shape. Lowercase letters are drawn as
//! uppercase; characters without a glyph advance like a space.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;

/// Glyph cell height in grid units
const GLYPH_HEIGHT: f32 = 6.0;
/// Horizontal advance per character in grid units (4 wide + 2 spacing)
const GLYPH_ADVANCE: f32 = 6.0;
/// Stroke thickness in grid units
const STROKE_WIDTH: f32 = 0.6;

type Stroke = &'static [(f32, f32)];

const BOX: Stroke = &[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 0.0), (0.0, 0.0)];

/// Strokes for a character, or `None` for characters drawn as blank space
fn glyph(c: char) -> Option<&'static [Stroke]> {
    let strokes: &'static [Stroke] = match c.to_ascii_uppercase() {
        'A' => &[
            &[(0.0, 0.0), (0.0, 4.0), (2.0, 6.0), (4.0, 4.0), (4.0, 0.0)],
            &[(0.0, 3.0), (4.0, 3.0)],
        ],
        'B' => &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0)],
            &[(0.0, 3.0), (3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)],
        ],
        'C' => &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        'D' => &[&[
            (0.0, 0.0),
            (0.0, 6.0),
            (2.0, 6.0),
            (4.0, 4.0),
            (4.0, 2.0),
            (2.0, 0.0),
            (0.0, 0.0),
        ]],
        'E' => &[
            &[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0)],
            &[(0.0, 3.0), (3.0, 3.0)],
        ],
        'F' => &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'G' => &[&[
            (4.0, 6.0),
            (0.0, 6.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 3.0),
            (2.0, 3.0),
        ]],
        'H' => &[
            &[(0.0, 0.0), (0.0, 6.0)],
            &[(4.0, 0.0), (4.0, 6.0)],
            &[(0.0, 3.0), (4.0, 3.0)],
        ],
        'I' => &[
            &[(0.0, 6.0), (4.0, 6.0)],
            &[(2.0, 6.0), (2.0, 0.0)],
            &[(0.0, 0.0), (4.0, 0.0)],
        ],
        'J' => &[&[(4.0, 6.0), (4.0, 0.0), (0.0, 0.0), (0.0, 2.0)]],
        'K' => &[
            &[(0.0, 0.0), (0.0, 6.0)],
            &[(4.0, 6.0), (0.0, 3.0), (4.0, 0.0)],
        ],
        'L' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        'M' => &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 3.0), (4.0, 6.0), (4.0, 0.0)]],
        'N' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 0.0), (4.0, 6.0)]],
        'O' => &[BOX],
        '0' => &[BOX, &[(0.0, 0.0), (4.0, 6.0)]],
        'P' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (0.0, 3.0)]],
        'Q' => &[BOX, &[(2.0, 2.0), (4.0, 0.0)]],
        'R' => &[
            &[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (0.0, 3.0)],
            &[(1.0, 3.0), (4.0, 0.0)],
        ],
        'S' | '5' => &[&[
            (4.0, 6.0),
            (0.0, 6.0),
            (0.0, 3.0),
            (4.0, 3.0),
            (4.0, 0.0),
            (0.0, 0.0),
        ]],
        'T' => &[&[(0.0, 6.0), (4.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)]],
        'U' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 6.0)]],
        'V' => &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)]],
        'W' => &[&[(0.0, 6.0), (1.0, 0.0), (2.0, 3.0), (3.0, 0.0), (4.0, 6.0)]],
        'X' => &[&[(0.0, 0.0), (4.0, 6.0)], &[(0.0, 6.0), (4.0, 0.0)]],
        'Y' => &[
            &[(0.0, 6.0), (2.0, 3.0), (4.0, 6.0)],
            &[(2.0, 3.0), (2.0, 0.0)],
        ],
        'Z' => &[&[(0.0, 6.0), (4.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        '1' => &[&[(1.0, 5.0), (2.0, 6.0), (2.0, 0.0)], &[(0.0, 0.0), (4.0, 0.0)]],
        '2' => &[&[
            (0.0, 6.0),
            (4.0, 6.0),
            (4.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
            (4.0, 0.0),
        ]],
        '3' => &[
            &[(0.0, 6.0), (4.0, 6.0), (4.0, 0.0), (0.0, 0.0)],
            &[(1.0, 3.0), (4.0, 3.0)],
        ],
        '4' => &[&[(0.0, 6.0), (0.0, 3.0), (4.0, 3.0)], &[(4.0, 6.0), (4.0, 0.0)]],
        '6' => &[&[
            (4.0, 6.0),
            (0.0, 6.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 3.0),
            (0.0, 3.0),
        ]],
        '7' => &[&[(0.0, 6.0), (4.0, 6.0), (1.0, 0.0)]],
        '8' => &[BOX, &[(0.0, 3.0), (4.0, 3.0)]],
        '9' => &[&[
            (4.0, 3.0),
            (0.0, 3.0),
            (0.0, 6.0),
            (4.0, 6.0),
            (4.0, 0.0),
            (0.0, 0.0),
        ]],
        ':' => &[&[(2.0, 1.0), (2.0, 1.5)], &[(2.0, 4.0), (2.0, 4.5)]],
        '.' => &[&[(2.0, 0.0), (2.0, 0.5)]],
        '!' => &[&[(2.0, 6.0), (2.0, 2.0)], &[(2.0, 0.5), (2.0, 0.0)]],
        '-' => &[&[(1.0, 3.0), (3.0, 3.0)]],
        _ => return None,
    };
    Some(strokes)
}

/// Width of `text` in world units when drawn at `height`
pub fn text_width(text: &str, height: f32) -> f32 {
    let count = text.chars().count();
    if count == 0 {
        return 0.0;
    }
    let scale = height / GLYPH_HEIGHT;
    // Last glyph has no trailing spacing
    ((count - 1) as f32 * GLYPH_ADVANCE + 4.0) * scale
}

/// Append `text` with its baseline-left corner at `origin`
///
/// `height` is the cap height in world units.
pub fn text(out: &mut Vec<Vertex>, text: &str, origin: Vec2, height: f32, color: [f32; 4]) {
    let scale = height / GLYPH_HEIGHT;
    let thickness = STROKE_WIDTH * scale;

    for (i, c) in text.chars().enumerate() {
        let Some(strokes) = glyph(c) else {
            continue;
        };
        let cell = origin + Vec2::new(i as f32 * GLYPH_ADVANCE * scale, 0.0);
        for stroke in strokes {
            for pair in stroke.windows(2) {
                let from = cell + Vec2::new(pair[0].0, pair[0].1) * scale;
                let to = cell + Vec2::new(pair[1].0, pair[1].1) * scale;
                shapes::line(out, from, to, thickness, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_every_hud_character_has_a_glyph() {
        for c in "SQUARE DASH PLAY QUIT GAME OVER! CLICK TO RETURN TO MENU LEVEL: 0123456789.-"
            .chars()
            .filter(|c| *c != ' ')
        {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn test_zero_and_letter_o_differ() {
        assert_ne!(glyph('0'), glyph('O'));
    }

    #[test]
    fn test_space_emits_nothing() {
        let mut out = Vec::new();
        text(&mut out, "   ", Vec2::ZERO, 1.0, WHITE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_text_stays_within_its_box() {
        let mut out = Vec::new();
        let origin = Vec2::new(-3.0, 1.0);
        let height = 0.6;
        text(&mut out, "LEVEL 2", origin, height, WHITE);
        assert!(!out.is_empty());

        // Allow for stroke caps sticking out by half a stroke
        let slack = STROKE_WIDTH * height / GLYPH_HEIGHT;
        let width = text_width("LEVEL 2", height);
        for v in &out {
            assert!(v.position[0] >= origin.x - slack);
            assert!(v.position[0] <= origin.x + width + slack);
            assert!(v.position[1] >= origin.y - slack);
            assert!(v.position[1] <= origin.y + height + slack);
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1.0), 0.0);
        assert!((text_width("A", 6.0) - 4.0).abs() < 1e-6);
        assert!((text_width("AB", 6.0) - 10.0).abs() < 1e-6);
    }
}
