pub mod api;
pub mod core;
pub mod components;
pub mod actions;
pub mod systems;
pub mod extensions;
pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::types::{ActorId, ActionId};
pub use components::actor::Actor;
pub use core::scene::Scene;
pub use core::target::{Target, TargetStore};
pub use config::ActionConfig;
pub use error::{Error, Result};
pub use systems::manager::ActionManager;
pub use systems::pool::{ActionPool, PoolStats};

pub use actions::{
    Action, ActionKind, Node,
    alpha_to, delay, fade_in, fade_out, forever, move_along, move_by, move_to,
    parallel, repeat, rotate_by, rotate_to, scale_by, scale_to, sequence, time_scale,
};
pub use actions::temporal::Temporal;

// Extensions: pure math
pub use extensions::{Easing, PathKind, lerp, lerp_vec2, ease, ease_vec2};
