//! Readout pulse near the deadline
//!
//! A pulse grows the numeric readout to `PEAK_SCALE` and back. Each counted
//! second pulses once; the final stretch before the total pulses three times.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PEAK_SCALE: f32 = 1.3;
pub const GROW_MS: u64 = 150;
pub const SHRINK_MS: u64 = 100;

/// Seconds before the total that count as the final stretch
pub const FINAL_STRETCH_SECONDS: u64 = 5;

/// Pulses emitted during the final stretch
pub const FINAL_STRETCH_REPEATS: u8 = 3;

/// Grow-then-shrink scale curve of a single pulse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseShape {
    pub peak_scale: f32,
    pub grow_ms: u64,
    pub shrink_ms: u64,
}

impl PulseShape {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.grow_ms + self.shrink_ms)
    }

    /// Scale at `offset` into one pulse
    fn scale_at(&self, offset: Duration) -> f32 {
        let grow = Duration::from_millis(self.grow_ms);
        if offset < grow {
            let fraction = offset.as_secs_f32() / grow.as_secs_f32();
            return lerp(1.0, self.peak_scale, fast_out_slow_in(fraction));
        }
        let shrink = Duration::from_millis(self.shrink_ms);
        let into_shrink = offset - grow;
        if into_shrink < shrink {
            let fraction = into_shrink.as_secs_f32() / shrink.as_secs_f32();
            return lerp(self.peak_scale, 1.0, fast_out_slow_in(fraction));
        }
        1.0
    }
}

impl Default for PulseShape {
    fn default() -> Self {
        Self {
            peak_scale: PEAK_SCALE,
            grow_ms: GROW_MS,
            shrink_ms: SHRINK_MS,
        }
    }
}

/// Back-to-back pulses to play for one elapsed value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseInstruction {
    pub repeats: u8,
    pub shape: PulseShape,
}

impl PulseInstruction {
    pub fn none() -> Self {
        Self::repeated(0)
    }

    pub fn single() -> Self {
        Self::repeated(1)
    }

    pub fn final_stretch() -> Self {
        Self::repeated(FINAL_STRETCH_REPEATS)
    }

    fn repeated(repeats: u8) -> Self {
        Self {
            repeats,
            shape: PulseShape::default(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.repeats == 0
    }

    pub fn total_duration(&self) -> Duration {
        self.shape.duration() * u32::from(self.repeats)
    }

    /// Sample the readout scale `offset` after the instruction started.
    ///
    /// Returns 1.0 before the first and after the last pulse.
    pub fn scale_at(&self, offset: Duration) -> f32 {
        if offset >= self.total_duration() {
            return 1.0;
        }
        let period = self.shape.duration().as_nanos();
        let within = Duration::from_nanos((offset.as_nanos() % period) as u64);
        self.shape.scale_at(within)
    }
}

/// Decide the pulse for `elapsed` of `total` seconds.
///
/// Zero elapsed or a zero total never pulses.
pub fn pulse_plan(elapsed: u64, total: u64) -> PulseInstruction {
    if total == 0 || elapsed == 0 || elapsed > total {
        return PulseInstruction::none();
    }
    if total - elapsed > FINAL_STRETCH_SECONDS {
        PulseInstruction::single()
    } else {
        PulseInstruction::final_stretch()
    }
}

fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

/// Cubic Bézier easing through (0.4, 0) and (0.2, 1)
pub fn fast_out_slow_in(fraction: f32) -> f32 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction.clamp(0.0, 1.0))
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let curve = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    // x(t) is monotonic for control points inside the unit square
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if curve(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve(y1, y2, (lo + hi) / 2.0)
}
