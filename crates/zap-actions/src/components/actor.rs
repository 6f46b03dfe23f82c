use glam::Vec2;
use crate::core::target::Target;

/// Fat Actor: the minimal animated object the action runtime works against.
/// Hosts with richer scene graphs implement [`Target`] on their own types.
#[derive(Debug, Clone)]
pub struct Actor {
    /// String tag for finding actors by name.
    pub tag: String,
    /// Whether this actor is drawn.
    pub visible: bool,
    /// Position in world space.
    pub pos: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Scale multiplier on both axes.
    pub scale: Vec2,
    /// Opacity in [0, 1].
    pub alpha: f32,
}

impl Actor {
    /// Create a new actor at the origin, unrotated, unit scale, fully opaque.
    pub fn new() -> Self {
        Self {
            tag: String::new(),
            visible: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            alpha: 1.0,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for Actor {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn scale(&self) -> Vec2 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn alpha(&self) -> f32 {
        self.alpha
    }

    // The owner clamps; eased values may overshoot.
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_clamped_by_owner() {
        let mut actor = Actor::new();
        actor.set_alpha(1.4);
        assert_eq!(actor.alpha(), 1.0);
        actor.set_alpha(-0.2);
        assert_eq!(actor.alpha(), 0.0);
    }
}
