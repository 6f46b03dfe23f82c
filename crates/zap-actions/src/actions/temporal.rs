// actions/temporal.rs
//
// Shared clock for every time-bounded leaf action.

use crate::extensions::easing::Easing;

/// Relative tolerance for reaching the end of a clock. Summing frame deltas
/// (e.g. 60 × 1/60) lands a hair short of the duration in f32.
const SNAP_EPSILON: f32 = 1e-5;

/// Add `dt` to `elapsed` on a clock of length `duration`.
///
/// Returns the new elapsed time, kept in `[0, duration]` and snapped to
/// `duration` when within tolerance, and the part of `dt` past the end.
/// A NaN `dt` counts as 0; a NaN or non-positive duration counts as 0.
pub(crate) fn accumulate(elapsed: f32, duration: f32, dt: f32) -> (f32, f32) {
    let dt = if dt.is_nan() { 0.0 } else { dt };
    let duration = if duration > 0.0 { duration } else { 0.0 };
    let raw = elapsed + dt;
    let overshoot = (raw - duration).max(0.0);
    if duration - raw <= SNAP_EPSILON * duration.max(1.0) {
        (duration, overshoot)
    } else {
        (raw.max(0.0), overshoot)
    }
}

/// Duration, easing and elapsed time of a leaf action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temporal {
    /// Total time budget in seconds. Zero or negative applies instantly.
    pub duration: f32,
    /// Curve applied to the raw progress fraction.
    pub easing: Easing,
    /// Run the eased curve backwards (writes `1 − eased`).
    pub reverse: bool,
    elapsed: f32,
    overshoot: f32,
    began: bool,
}

impl Default for Temporal {
    fn default() -> Self {
        Self::new(0.0, Easing::Linear)
    }
}

impl Temporal {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            reverse: false,
            elapsed: 0.0,
            overshoot: 0.0,
            began: false,
        }
    }

    /// Seconds accumulated since the last (re)start. Never exceeds `duration`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time from the last `advance` that ran past the end. Zero until then.
    pub fn overshoot(&self) -> f32 {
        self.overshoot
    }

    /// Whether the start snapshot has been taken.
    pub fn began(&self) -> bool {
        self.began
    }

    pub(crate) fn mark_began(&mut self) {
        self.began = true;
    }

    /// Raw progress fraction in [0, 1].
    pub fn progress(&self) -> f32 {
        if !(self.duration > 0.0) {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Advance the clock by `dt`. Returns the eased fraction to apply and
    /// whether the raw progress reached 1.
    pub(crate) fn advance(&mut self, dt: f32) -> (f32, bool) {
        (self.elapsed, self.overshoot) = accumulate(self.elapsed, self.duration, dt);

        let t = self.progress();
        let eased = self.easing.apply(t);
        let eased = if self.reverse { 1.0 - eased } else { eased };
        (eased, t >= 1.0)
    }

    /// Back to the not-yet-started state. Configuration is kept.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.overshoot = 0.0;
        self.began = false;
    }
}
