//! Progress arc computation
//!
//! Maps `(elapsed, total)` to the stepped sweep angle, the lead marker
//! rotation and the tick marks not reached yet. Angles are in degrees,
//! measured from the drawing's zero; the 12 o'clock rotation is applied by
//! the renderer.

use serde::{Deserialize, Serialize};

/// Degrees between two tick marks, and the arc's quantization step
pub const TICK_STEP_DEGREES: u16 = 10;

/// A full turn
pub const FULL_TURN_DEGREES: u16 = 360;

/// Drawable description of the progress arc for one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcFrame {
    /// Unquantized progress angle, `360 * elapsed / total`
    pub progress_angle_degrees: f32,
    /// Progress angle floored to a multiple of the tick step
    pub sweep_angle_degrees: f32,
    /// Rotation of the lead marker about the arc tip
    pub lead_marker_angle: f32,
    /// Untraversed tick marks, ascending
    pub remaining_tick_angles: Vec<u16>,
}

impl ArcFrame {
    /// Zero-progress frame with nothing to draw
    pub fn empty() -> Self {
        Self {
            progress_angle_degrees: 0.0,
            sweep_angle_degrees: 0.0,
            lead_marker_angle: 0.0,
            remaining_tick_angles: Vec::new(),
        }
    }
}

/// Compute the arc frame for `elapsed` of `total` seconds.
///
/// Never fails: `total == 0` yields the empty frame and `elapsed` above
/// `total` is treated as complete.
pub fn compute_arc_frame(elapsed: u64, total: u64) -> ArcFrame {
    if total == 0 {
        return ArcFrame::empty();
    }
    let elapsed = elapsed.min(total);

    let step = u64::from(TICK_STEP_DEGREES);
    let full_turn = u64::from(FULL_TURN_DEGREES);

    let progress = (full_turn * elapsed) as f32 / total as f32;
    // Integer floor keeps the step exact where the float division would round
    let sweep = full_turn / step * elapsed / total * step;
    let sweep_degrees = sweep as f32;

    let lead_marker_angle =
        (progress - sweep_degrees) / f32::from(TICK_STEP_DEGREES) * 90.0 - sweep_degrees;

    let remaining_tick_angles = (sweep + step..full_turn)
        .step_by(usize::from(TICK_STEP_DEGREES))
        .map(|angle| angle as u16)
        .collect();

    ArcFrame {
        progress_angle_degrees: progress,
        sweep_angle_degrees: sweep_degrees,
        lead_marker_angle,
        remaining_tick_angles,
    }
}
