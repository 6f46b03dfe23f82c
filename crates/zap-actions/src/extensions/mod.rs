// extensions/mod.rs
//
// Pure math used by actions: easing curves and multi-point paths.
// No dependencies on actors or the runtime.

pub mod easing;
pub mod path;

pub use easing::{Easing, lerp, lerp_vec2, ease, ease_vec2};
pub use path::PathKind;
