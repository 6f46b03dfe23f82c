// core/target.rs
//
// The narrow property surface actions read and write.
// Anything that owns a position, rotation, scale and alpha can be animated.

use glam::Vec2;
use crate::api::types::ActorId;

/// Mutable property set of an animated object.
///
/// Rotation is in degrees. Alpha is nominally in `[0, 1]`; clamping is the
/// implementor's business, actions write whatever the curve produces.
pub trait Target {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);

    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, degrees: f32);

    fn scale(&self) -> Vec2;
    fn set_scale(&mut self, scale: Vec2);

    fn alpha(&self) -> f32;
    fn set_alpha(&mut self, alpha: f32);
}

/// Resolves actor handles to live targets.
///
/// Returns `None` for handles whose actor no longer exists.
pub trait TargetStore {
    fn target_mut(&mut self, id: ActorId) -> Option<&mut dyn Target>;
}
