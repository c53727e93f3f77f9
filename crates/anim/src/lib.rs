//! Per-frame animation driver.
//!
//! # Invariants
//! - Every animated quantity is an absolute function of elapsed time; frames
//!   can be dropped or replayed without drift.
//! - Tile cells never move; only height and rotation are rewritten.

use glam::{EulerRot, Quat};
use tilegrid_board::Board;

/// Cursor opacity pulse period divisor (milliseconds).
const PULSE_DIVISOR: f32 = 120.0;
/// Tile spin and bob period divisor (milliseconds).
const SPIN_DIVISOR: f32 = 1000.0;

/// Advance all animated state to elapsed time `t_ms`.
///
/// The cursor's opacity pulses in [0, 2]; clamping into a renderable alpha is
/// the renderer's concern. Placed tiles spin in lockstep about the x and z
/// axes and bob between 0.5 and 1.0 units above the plane.
pub fn advance(board: &mut Board, t_ms: f32) {
    board.cursor_mut().opacity = 1.0 + (t_ms / PULSE_DIVISOR).sin();

    let angle = t_ms / SPIN_DIVISOR;
    let lift = 0.5 + 0.5 * angle.sin().abs();
    let rotation = Quat::from_euler(EulerRot::XYZ, angle, 0.0, angle);
    for tile in board.tiles_mut() {
        tile.transform.rotation = rotation;
        tile.transform.position.y = lift;
    }
}

pub fn crate_info() -> &'static str {
    "tilegrid-anim v0.1.0"
}
