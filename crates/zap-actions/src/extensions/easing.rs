// extensions/easing.rs
//
// Pure easing functions for action interpolation.
// No dependencies on actors or the runtime; just math.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default overshoot of the back curves.
pub const DEFAULT_OVERSHOOT: f32 = 1.70158;
/// Default scale of the symmetric swing curve.
pub const DEFAULT_SWING: f32 = 1.5;
/// Default scale of the one-sided swing curves.
pub const DEFAULT_SWING_EDGE: f32 = 2.0;

/// Easing function type.
///
/// A plain value: copy it into as many actions as you like. Parameterized
/// curves carry their parameter inline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Smoothstep, `t²(3 − 2t)`.
    Smooth,
    /// Smootherstep, `t³(t(6t − 15) + 10)`.
    Fade,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    /// Quarter-circle arcs.
    CircIn,
    CircOut,
    CircInOut,
    /// Pull back before moving, `t²((s + 1)t − s)`.
    BackIn { overshoot: f32 },
    /// Overshoot the goal, then settle.
    BackOut { overshoot: f32 },
    /// Both, with the overshoot scaled by 1.525 per half.
    BackInOut { overshoot: f32 },
    SwingIn { scale: f32 },
    SwingOut { scale: f32 },
    Swing { scale: f32 },
    BounceIn,
    /// Bouncy finish.
    BounceOut,
    BounceInOut,
    ElasticIn,
    /// Elastic spring.
    ElasticOut,
    ElasticInOut,
}

impl Easing {
    pub const BACK_IN: Easing = Easing::BackIn { overshoot: DEFAULT_OVERSHOOT };
    pub const BACK_OUT: Easing = Easing::BackOut { overshoot: DEFAULT_OVERSHOOT };
    pub const BACK_IN_OUT: Easing = Easing::BackInOut { overshoot: DEFAULT_OVERSHOOT };
    pub const SWING_IN: Easing = Easing::SwingIn { scale: DEFAULT_SWING_EDGE };
    pub const SWING_OUT: Easing = Easing::SwingOut { scale: DEFAULT_SWING_EDGE };
    pub const SWING: Easing = Easing::Swing { scale: DEFAULT_SWING };

    /// Read-only name registry: `(name, alias, easing)`.
    ///
    /// Names are snake_case; aliases follow the `Family.IN` / `Family.OUT` /
    /// `Family.INOUT` convention used by tween scripts.
    pub const REGISTRY: &'static [(&'static str, &'static str, Easing)] = &[
        ("linear", "Linear.INOUT", Easing::Linear),
        ("smooth", "Smooth.INOUT", Easing::Smooth),
        ("fade", "Fade.INOUT", Easing::Fade),
        ("quad_in", "Quad.IN", Easing::QuadIn),
        ("quad_out", "Quad.OUT", Easing::QuadOut),
        ("quad_in_out", "Quad.INOUT", Easing::QuadInOut),
        ("cubic_in", "Cubic.IN", Easing::CubicIn),
        ("cubic_out", "Cubic.OUT", Easing::CubicOut),
        ("cubic_in_out", "Cubic.INOUT", Easing::CubicInOut),
        ("quart_in", "Quart.IN", Easing::QuartIn),
        ("quart_out", "Quart.OUT", Easing::QuartOut),
        ("quart_in_out", "Quart.INOUT", Easing::QuartInOut),
        ("quint_in", "Quint.IN", Easing::QuintIn),
        ("quint_out", "Quint.OUT", Easing::QuintOut),
        ("quint_in_out", "Quint.INOUT", Easing::QuintInOut),
        ("sine_in", "Sine.IN", Easing::SineIn),
        ("sine_out", "Sine.OUT", Easing::SineOut),
        ("sine_in_out", "Sine.INOUT", Easing::SineInOut),
        ("expo_in", "Expo.IN", Easing::ExpoIn),
        ("expo_out", "Expo.OUT", Easing::ExpoOut),
        ("expo_in_out", "Expo.INOUT", Easing::ExpoInOut),
        ("circ_in", "Circ.IN", Easing::CircIn),
        ("circ_out", "Circ.OUT", Easing::CircOut),
        ("circ_in_out", "Circ.INOUT", Easing::CircInOut),
        ("back_in", "Back.IN", Easing::BACK_IN),
        ("back_out", "Back.OUT", Easing::BACK_OUT),
        ("back_in_out", "Back.INOUT", Easing::BACK_IN_OUT),
        ("swing_in", "Swing.IN", Easing::SWING_IN),
        ("swing_out", "Swing.OUT", Easing::SWING_OUT),
        ("swing", "Swing.INOUT", Easing::SWING),
        ("bounce_in", "Bounce.IN", Easing::BounceIn),
        ("bounce_out", "Bounce.OUT", Easing::BounceOut),
        ("bounce_in_out", "Bounce.INOUT", Easing::BounceInOut),
        ("elastic_in", "Elastic.IN", Easing::ElasticIn),
        ("elastic_out", "Elastic.OUT", Easing::ElasticOut),
        ("elastic_in_out", "Elastic.INOUT", Easing::ElasticInOut),
    ];

    /// Look up an easing by snake_case name or dotted alias.
    pub fn from_name(name: &str) -> Option<Easing> {
        Self::REGISTRY
            .iter()
            .find(|(snake, alias, _)| *snake == name || *alias == name)
            .map(|&(_, _, easing)| easing)
    }

    /// The snake_case registry name of this curve family.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Smooth => "smooth",
            Easing::Fade => "fade",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicInOut => "cubic_in_out",
            Easing::QuartIn => "quart_in",
            Easing::QuartOut => "quart_out",
            Easing::QuartInOut => "quart_in_out",
            Easing::QuintIn => "quint_in",
            Easing::QuintOut => "quint_out",
            Easing::QuintInOut => "quint_in_out",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineInOut => "sine_in_out",
            Easing::ExpoIn => "expo_in",
            Easing::ExpoOut => "expo_out",
            Easing::ExpoInOut => "expo_in_out",
            Easing::CircIn => "circ_in",
            Easing::CircOut => "circ_out",
            Easing::CircInOut => "circ_in_out",
            Easing::BackIn { .. } => "back_in",
            Easing::BackOut { .. } => "back_out",
            Easing::BackInOut { .. } => "back_in_out",
            Easing::SwingIn { .. } => "swing_in",
            Easing::SwingOut { .. } => "swing_out",
            Easing::Swing { .. } => "swing",
            Easing::BounceIn => "bounce_in",
            Easing::BounceOut => "bounce_out",
            Easing::BounceInOut => "bounce_in_out",
            Easing::ElasticIn => "elastic_in",
            Easing::ElasticOut => "elastic_out",
            Easing::ElasticInOut => "elastic_in_out",
        }
    }

    /// The inline parameter of Back (overshoot) and Swing (scale) curves.
    pub fn param(self) -> Option<f32> {
        match self {
            Easing::BackIn { overshoot }
            | Easing::BackOut { overshoot }
            | Easing::BackInOut { overshoot } => Some(overshoot),
            Easing::SwingIn { scale } | Easing::SwingOut { scale } | Easing::Swing { scale } => {
                Some(scale)
            }
            _ => None,
        }
    }

    /// Same curve family with a different parameter. `None` for curves
    /// that take no parameter.
    pub fn with_param(self, value: f32) -> Option<Easing> {
        match self {
            Easing::BackIn { .. } => Some(Easing::BackIn { overshoot: value }),
            Easing::BackOut { .. } => Some(Easing::BackOut { overshoot: value }),
            Easing::BackInOut { .. } => Some(Easing::BackInOut { overshoot: value }),
            Easing::SwingIn { .. } => Some(Easing::SwingIn { scale: value }),
            Easing::SwingOut { .. } => Some(Easing::SwingOut { scale: value }),
            Easing::Swing { .. } => Some(Easing::Swing { scale: value }),
            _ => None,
        }
    }

    /// Apply the easing function to a normalized time value `t` in [0, 1].
    ///
    /// `t` is clamped first and the endpoints are exact: `apply(0) == 0` and
    /// `apply(1) == 1` for every curve. In between, Back/Swing/Elastic may
    /// leave [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        // NaN lands here too.
        if !(t > 0.0) {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::Smooth => t * t * (3.0 - 2.0 * t),
            Easing::Fade => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),

            // Polynomial
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => pow_in_out(t, 2),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => pow_in_out(t, 3),
            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuartInOut => pow_in_out(t, 4),
            Easing::QuintIn => t.powi(5),
            Easing::QuintOut => 1.0 - (1.0 - t).powi(5),
            Easing::QuintInOut => pow_in_out(t, 5),

            // Sine
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            // Exponential
            Easing::ExpoIn => 2.0_f32.powf(10.0 * t - 10.0),
            Easing::ExpoOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            Easing::ExpoInOut => {
                if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            // Circle
            Easing::CircIn => 1.0 - (1.0 - t * t).sqrt(),
            Easing::CircOut => {
                let t = t - 1.0;
                (1.0 - t * t).sqrt()
            }
            Easing::CircInOut => {
                if t < 0.5 {
                    let t = 2.0 * t;
                    (1.0 - (1.0 - t * t).sqrt()) / 2.0
                } else {
                    let t = 2.0 * t - 2.0;
                    ((1.0 - t * t).sqrt() + 1.0) / 2.0
                }
            }

            // Back / Swing (overshoot)
            Easing::BackIn { overshoot: s } | Easing::SwingIn { scale: s } => back_in(t, s),
            Easing::BackOut { overshoot: s } | Easing::SwingOut { scale: s } => back_out(t, s),
            Easing::BackInOut { overshoot } => {
                let s = overshoot * 1.525;
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * (t * t * ((s + 1.0) * t - s))
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
                }
            }
            Easing::Swing { scale } => {
                let s = scale * 2.0;
                if t <= 0.5 {
                    let t = t * 2.0;
                    t * t * ((s + 1.0) * t - s) / 2.0
                } else {
                    let t = (t - 1.0) * 2.0;
                    t * t * ((s + 1.0) * t + s) / 2.0 + 1.0
                }
            }

            // Bounce
            Easing::BounceIn => 1.0 - bounce_out(1.0 - t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceInOut => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }

            // Elastic
            Easing::ElasticIn => {
                const C4: f32 = (2.0 * PI) / 3.0;
                -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
            }
            Easing::ElasticOut => {
                const C4: f32 = (2.0 * PI) / 3.0;
                2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }
            Easing::ElasticInOut => {
                const C5: f32 = (2.0 * PI) / 4.5;
                if t < 0.5 {
                    -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * C5).sin()) / 2.0
                } else {
                    2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * C5).sin() / 2.0 + 1.0
                }
            }
        }
    }
}

/// Writes the registry name, plus `(value)` when the parameter differs from
/// the registry default: `back_in`, `back_in(2.5)`.
impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        let default = Easing::from_name(self.name()).and_then(Easing::param);
        match self.param() {
            Some(value) if Some(value) != default => write!(f, "({value})"),
            _ => Ok(()),
        }
    }
}

/// Accepts a registry name or alias, optionally followed by `(value)` for
/// Back and Swing curves.
impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || Error::UnknownEasing(s.to_string());
        let text = s.trim();
        match text.strip_suffix(')').and_then(|t| t.split_once('(')) {
            Some((name, value)) => {
                let value: f32 = value.trim().parse().map_err(|_| unknown())?;
                Easing::from_name(name.trim())
                    .and_then(|easing| easing.with_param(value))
                    .ok_or_else(unknown)
            }
            None => Easing::from_name(text).ok_or_else(unknown),
        }
    }
}

#[inline]
fn pow_in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        2.0_f32.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

#[inline]
fn back_in(t: f32, s: f32) -> f32 {
    t * t * ((s + 1.0) * t - s)
}

#[inline]
fn back_out(t: f32, s: f32) -> f32 {
    let t = t - 1.0;
    t * t * ((s + 1.0) * t + s) + 1.0
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
///
/// `t == 1.0` returns `b` exactly, so a finished tween lands on its goal.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 1.0 { b } else { a + (b - a) * t }
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    if t == 1.0 { b } else { a + (b - a) * t }
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

/// Interpolate Vec2 with easing.
#[inline]
pub fn ease_vec2(a: glam::Vec2, b: glam::Vec2, t: f32, easing: Easing) -> glam::Vec2 {
    lerp_vec2(a, b, easing.apply(t))
}
