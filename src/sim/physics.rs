//! Player motion: auto-run and the capped-height jump
//!
//! The jump is not a true parabola. Once the player rises `MAX_JUMP_HEIGHT`
//! above the take-off point it is held at that ceiling with zero velocity,
//! then falls back under gravity, giving a flat-topped arc.

use super::state::Player;
use crate::consts::*;

/// Start a jump if the player is not already airborne
///
/// Returns true if the jump was triggered.
pub fn try_jump(player: &mut Player) -> bool {
    if player.jumping {
        return false;
    }
    player.vel_y = JUMP_FORCE;
    player.jumping = true;
    player.initial_jump_y = player.body.bounds.pos.y;
    true
}

/// Advance vertical velocity and position by `dt`
///
/// Applies gravity, the jump ceiling and the ground clamp, in that order.
/// The ground clamp always runs last so the player never ends a step below
/// `ground_top`.
pub fn integrate_vertical(player: &mut Player, ground_top: f32, dt: f32) {
    player.vel_y += GRAVITY * dt;
    let pos = &mut player.body.bounds.pos;
    pos.y += player.vel_y * dt;

    let ceiling = player.initial_jump_y + MAX_JUMP_HEIGHT;
    if pos.y > ceiling {
        pos.y = ceiling;
        player.vel_y = 0.0;
    }

    if pos.y <= ground_top {
        pos.y = ground_top;
        player.vel_y = 0.0;
        player.jumping = false;
    }
}

/// Move the player right at `speed` world units per second
#[inline]
pub fn advance_horizontal(player: &mut Player, speed: f32, dt: f32) {
    player.body.bounds.pos.x += speed * dt;
}
