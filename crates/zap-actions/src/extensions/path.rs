// extensions/path.rs
//
// Multi-point interpolation paths. Given progress `t` and a run of control
// values, pick the segment `t` falls in and interpolate inside it.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How to interpolate between control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Straight lines between neighboring control values.
    Linear,
    /// Catmull-Rom spline through every control value.
    #[default]
    CatmullRom,
}

impl PathKind {
    /// Interpolate along `points` at progress `t`.
    ///
    /// The segment is `clamp(floor((n - 1)·t), 0, n - 2)` and the local
    /// parameter is `t·(n - 1) − segment`. `t` outside [0, 1] extrapolates
    /// along the first or last segment. An empty path yields 0, a single
    /// point yields that point.
    pub fn compute(self, t: f32, points: &[f32]) -> f32 {
        let n = points.len();
        match n {
            0 => return 0.0,
            1 => return points[0],
            _ => {}
        }

        let last_segment = n - 2;
        let scaled = t * (n - 1) as f32;
        let segment = if scaled.is_nan() || scaled <= 0.0 {
            0
        } else {
            (scaled.floor() as usize).min(last_segment)
        };
        let local = scaled - segment as f32;

        match self {
            PathKind::Linear => {
                let a = points[segment];
                let b = points[segment + 1];
                a + local * (b - a)
            }
            PathKind::CatmullRom => {
                // Clamped neighbors: the boundary segments reuse the end points.
                let at = |i: isize| points[i.clamp(0, n as isize - 1) as usize];
                let s = segment as isize;
                catmull_rom(at(s - 1), at(s), at(s + 1), at(s + 2), local)
            }
        }
    }

    /// Interpolate a 2D path given as separate x and y control runs.
    pub fn compute_vec2(self, t: f32, xs: &[f32], ys: &[f32]) -> Vec2 {
        Vec2::new(self.compute(t, xs), self.compute(t, ys))
    }

    pub fn name(self) -> &'static str {
        match self {
            PathKind::Linear => "linear",
            PathKind::CatmullRom => "catmull_rom",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" | "Linear" => Ok(PathKind::Linear),
            "catmull_rom" | "CatmullRom" => Ok(PathKind::CatmullRom),
            other => Err(Error::UnknownPath(other.to_string())),
        }
    }
}

/// Cubic Hermite segment from `b` to `c` with Catmull-Rom tangents.
#[inline]
fn catmull_rom(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let t1 = (c - a) * 0.5;
    let t2 = (d - b) * 0.5;

    let t_2 = t * t;
    let t_3 = t_2 * t;
    let h1 = 2.0 * t_3 - 3.0 * t_2 + 1.0;
    let h2 = -2.0 * t_3 + 3.0 * t_2;
    let h3 = t_3 - 2.0 * t_2 + t;
    let h4 = t_3 - t_2;

    b * h1 + c * h2 + t1 * h3 + t2 * h4
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;
    const PATH: [f32; 4] = [0.0, 10.0, 5.0, 20.0];

    #[test]
    fn passes_through_control_points() {
        for kind in [PathKind::Linear, PathKind::CatmullRom] {
            assert!((kind.compute(0.0, &PATH) - 0.0).abs() < EPS);
            assert!((kind.compute(1.0 / 3.0, &PATH) - 10.0).abs() < EPS);
            assert!((kind.compute(2.0 / 3.0, &PATH) - 5.0).abs() < EPS);
            assert!((kind.compute(1.0, &PATH) - 20.0).abs() < EPS);
        }
    }

    #[test]
    fn continuous_across_segment_boundaries() {
        for kind in [PathKind::Linear, PathKind::CatmullRom] {
            for boundary in [1.0_f32 / 3.0, 2.0 / 3.0] {
                let below = kind.compute(boundary - 1e-4, &PATH);
                let above = kind.compute(boundary + 1e-4, &PATH);
                assert!((below - above).abs() < 0.01, "{kind} jumps at {boundary}");
            }
        }
    }

    #[test]
    fn linear_midpoints() {
        // Middle of the second segment.
        assert!((PathKind::Linear.compute(0.5, &PATH) - 7.5).abs() < EPS);
    }

    #[test]
    fn two_point_spline_stays_in_range() {
        let pts = [2.0, 4.0];
        assert!((PathKind::CatmullRom.compute(0.0, &pts) - 2.0).abs() < EPS);
        assert!((PathKind::CatmullRom.compute(0.5, &pts) - 3.0).abs() < EPS);
        assert!((PathKind::CatmullRom.compute(1.0, &pts) - 4.0).abs() < EPS);
    }

    #[test]
    fn degenerate_paths() {
        assert_eq!(PathKind::CatmullRom.compute(0.5, &[]), 0.0);
        assert_eq!(PathKind::Linear.compute(0.5, &[7.0]), 7.0);
    }

    #[test]
    fn compute_vec2_uses_both_runs() {
        let p = PathKind::Linear.compute_vec2(0.5, &[0.0, 10.0], &[100.0, 0.0]);
        assert!((p - Vec2::new(5.0, 50.0)).length() < EPS);
    }

    #[test]
    fn parse_names() {
        assert_eq!("catmull_rom".parse::<PathKind>().unwrap(), PathKind::CatmullRom);
        assert!(matches!("bezier".parse::<PathKind>(), Err(Error::UnknownPath(_))));
    }
}
