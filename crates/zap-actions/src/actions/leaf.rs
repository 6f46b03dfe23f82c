// actions/leaf.rs
//
// Leaf actions: time-bounded mutators of one target property (or pair).
// Start values are captured on the first step, not at construction, so the
// same template works on any target and re-captures after a restart.

use glam::Vec2;

use super::temporal::Temporal;
use crate::core::target::Target;
use crate::extensions::easing::{lerp, lerp_vec2};
use crate::extensions::path::PathKind;

/// A property tween driven by a [`Temporal`] clock.
pub(crate) trait Tween {
    fn timing(&mut self) -> &mut Temporal;
    /// Snapshot whatever the tween needs from the target.
    fn begin(&mut self, target: &dyn Target);
    /// Write the value for eased fraction `percent`.
    fn update(&mut self, target: &mut dyn Target, percent: f32);
}

/// Shared step for all leaf tweens. Returns true once progress reaches 1.
pub(crate) fn act_tween<T: Tween>(tween: &mut T, target: &mut dyn Target, dt: f32) -> bool {
    if !tween.timing().began() {
        tween.begin(&*target);
        tween.timing().mark_began();
    }
    let (percent, done) = tween.timing().advance(dt);
    tween.update(target, percent);
    done
}

/// Move to an absolute position.
#[derive(Debug, Clone, Default)]
pub struct MoveTo {
    pub timing: Temporal,
    pub end: Vec2,
    start: Vec2,
}

impl MoveTo {
    pub fn new(end: Vec2, timing: Temporal) -> Self {
        Self { timing, end, start: Vec2::ZERO }
    }

    /// Position captured on the first step.
    pub fn start(&self) -> Vec2 {
        self.start
    }
}

impl Tween for MoveTo {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, target: &dyn Target) {
        self.start = target.position();
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        target.set_position(lerp_vec2(self.start, self.end, percent));
    }
}

/// Move by a relative offset.
///
/// Applies the change in eased progress since the previous step, so it adds
/// on top of whatever else moves the target.
#[derive(Debug, Clone, Default)]
pub struct MoveBy {
    pub timing: Temporal,
    pub amount: Vec2,
    last_percent: f32,
}

impl MoveBy {
    pub fn new(amount: Vec2, timing: Temporal) -> Self {
        Self { timing, amount, last_percent: 0.0 }
    }
}

impl Tween for MoveBy {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, _target: &dyn Target) {
        self.last_percent = 0.0;
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        let delta = percent - self.last_percent;
        target.set_position(target.position() + self.amount * delta);
        self.last_percent = percent;
    }
}

/// Move through a list of waypoints along an interpolation path.
///
/// The captured start position is the first control point, so the path
/// always begins where the target stands.
#[derive(Debug, Clone, Default)]
pub struct MoveAlong {
    pub timing: Temporal,
    pub path: PathKind,
    pub waypoints: Vec<Vec2>,
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl MoveAlong {
    pub fn new(waypoints: Vec<Vec2>, path: PathKind, timing: Temporal) -> Self {
        Self {
            timing,
            path,
            xs: Vec::with_capacity(waypoints.len() + 1),
            ys: Vec::with_capacity(waypoints.len() + 1),
            waypoints,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.waypoints.clear();
        self.xs.clear();
        self.ys.clear();
    }
}

impl Tween for MoveAlong {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, target: &dyn Target) {
        let start = target.position();
        self.xs.clear();
        self.ys.clear();
        for p in std::iter::once(start).chain(self.waypoints.iter().copied()) {
            self.xs.push(p.x);
            self.ys.push(p.y);
        }
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        let pos = match self.waypoints.last() {
            Some(&last) if percent == 1.0 => last,
            _ => self.path.compute_vec2(percent, &self.xs, &self.ys),
        };
        target.set_position(pos);
    }
}

/// Rotate to an absolute angle in degrees.
#[derive(Debug, Clone, Default)]
pub struct RotateTo {
    pub timing: Temporal,
    pub end: f32,
    start: f32,
}

impl RotateTo {
    pub fn new(end: f32, timing: Temporal) -> Self {
        Self { timing, end, start: 0.0 }
    }
}

impl Tween for RotateTo {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, target: &dyn Target) {
        self.start = target.rotation();
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        target.set_rotation(lerp(self.start, self.end, percent));
    }
}

/// Rotate by a relative angle in degrees.
#[derive(Debug, Clone, Default)]
pub struct RotateBy {
    pub timing: Temporal,
    pub amount: f32,
    last_percent: f32,
}

impl RotateBy {
    pub fn new(amount: f32, timing: Temporal) -> Self {
        Self { timing, amount, last_percent: 0.0 }
    }
}

impl Tween for RotateBy {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, _target: &dyn Target) {
        self.last_percent = 0.0;
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        let delta = percent - self.last_percent;
        target.set_rotation(target.rotation() + self.amount * delta);
        self.last_percent = percent;
    }
}

/// Scale to absolute factors on both axes.
#[derive(Debug, Clone, Default)]
pub struct ScaleTo {
    pub timing: Temporal,
    pub end: Vec2,
    start: Vec2,
}

impl ScaleTo {
    pub fn new(end: Vec2, timing: Temporal) -> Self {
        Self { timing, end, start: Vec2::ONE }
    }
}

impl Tween for ScaleTo {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, target: &dyn Target) {
        self.start = target.scale();
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        target.set_scale(lerp_vec2(self.start, self.end, percent));
    }
}

/// Add to the scale factors.
#[derive(Debug, Clone, Default)]
pub struct ScaleBy {
    pub timing: Temporal,
    pub amount: Vec2,
    last_percent: f32,
}

impl ScaleBy {
    pub fn new(amount: Vec2, timing: Temporal) -> Self {
        Self { timing, amount, last_percent: 0.0 }
    }
}

impl Tween for ScaleBy {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, _target: &dyn Target) {
        self.last_percent = 0.0;
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        let delta = percent - self.last_percent;
        target.set_scale(target.scale() + self.amount * delta);
        self.last_percent = percent;
    }
}

/// Fade to an absolute alpha.
#[derive(Debug, Clone, Default)]
pub struct AlphaTo {
    pub timing: Temporal,
    pub end: f32,
    start: f32,
}

impl AlphaTo {
    pub fn new(end: f32, timing: Temporal) -> Self {
        Self { timing, end, start: 1.0 }
    }
}

impl Tween for AlphaTo {
    fn timing(&mut self) -> &mut Temporal {
        &mut self.timing
    }

    fn begin(&mut self, target: &dyn Target) {
        self.start = target.alpha();
    }

    fn update(&mut self, target: &mut dyn Target, percent: f32) {
        target.set_alpha(lerp(self.start, self.end, percent));
    }
}
