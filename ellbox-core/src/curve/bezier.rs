use serde::{Deserialize, Serialize};

use crate::{curve::PathPoint, math::sampled::SampledCurve, r2::R2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Controls {
    Quadratic { p0: R2<f64>, p1: R2<f64>, p2: R2<f64> },
    Cubic { p0: R2<f64>, p1: R2<f64>, p2: R2<f64>, p3: R2<f64> },
}

impl Controls {
    pub fn point(&self, t: f64) -> R2<f64> {
        let s = 1. - t;
        match *self {
            Controls::Quadratic { p0, p1, p2 } => p0 * (s * s) + p1 * (2. * s * t) + p2 * (t * t),
            Controls::Cubic { p0, p1, p2, p3 } => {
                p0 * (s * s * s) + p1 * (3. * s * s * t) + p2 * (3. * s * t * t) + p3 * (t * t * t)
            }
        }
    }

    /// First derivative.
    pub fn d1(&self, t: f64) -> R2<f64> {
        let s = 1. - t;
        match *self {
            Controls::Quadratic { p0, p1, p2 } => (p1 - p0) * (2. * s) + (p2 - p1) * (2. * t),
            Controls::Cubic { p0, p1, p2, p3 } => {
                (p1 - p0) * (3. * s * s) + (p2 - p1) * (6. * s * t) + (p3 - p2) * (3. * t * t)
            }
        }
    }

    /// Second derivative.
    pub fn d2(&self, t: f64) -> R2<f64> {
        match *self {
            Controls::Quadratic { p0, p1, p2 } => (p2 - p1 * 2. + p0) * 2.,
            Controls::Cubic { p0, p1, p2, p3 } => {
                (p2 - p1 * 2. + p0) * (6. * (1. - t)) + (p3 - p2 * 2. + p1) * (6. * t)
            }
        }
    }
}

/// Quadratic or cubic Bézier curve, with a coarse chord-length table for arc-length queries.
#[derive(Debug, Clone)]
pub struct Bezier {
    pub controls: Controls,
    table: SampledCurve,
}

impl Bezier {
    pub const NR_POINTS: usize = 10;

    pub fn new(controls: Controls) -> Self {
        let table = SampledCurve::new(0., 1., Self::NR_POINTS, |t| controls.point(t));
        Bezier { controls, table }
    }

    pub fn quadratic(start: R2<f64>, c: R2<f64>, end: R2<f64>) -> Self {
        Self::new(Controls::Quadratic { p0: start, p1: c, p2: end })
    }

    pub fn cubic(start: R2<f64>, c1: R2<f64>, c2: R2<f64>, end: R2<f64>) -> Self {
        Self::new(Controls::Cubic { p0: start, p1: c1, p2: c2, p3: end })
    }

    pub fn length(&self) -> f64 {
        self.table.length()
    }

    /// Signed curvature; infinite where the first derivative vanishes.
    pub fn curvature(&self, t: f64) -> f64 {
        let d1 = self.controls.d1(t);
        let d2 = self.controls.d2(t);
        let d = d1.r().powi(3);
        if d == 0. {
            f64::INFINITY
        } else {
            d1.cross(&d2) / d
        }
    }

    pub fn point_at(&self, t: f64) -> PathPoint {
        PathPoint {
            t,
            point: self.controls.point(t),
            tangent: self.controls.d1(t),
            curvature: self.curvature(t),
            length: self.table.dist_at(t),
        }
    }

    pub fn t_at_length(&self, length: f64) -> f64 {
        self.table.param_at(length)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    /// Standard cubic approximation of the unit quarter circle.
    fn quarter_circle() -> Bezier {
        let k = 0.5522847498;
        Bezier::cubic(R2::new(1., 0.), R2::new(1., k), R2::new(k, 1.), R2::new(0., 1.))
    }

    #[test]
    fn test_collinear_quadratic() {
        let b = Bezier::quadratic(R2::new(0., 0.), R2::new(1., 0.), R2::new(4., 0.));
        assert_relative_eq!(b.length(), 4., epsilon = 1e-12);
        assert_relative_eq!(b.point_at(0.5).point, R2::new(1.5, 0.), epsilon = 1e-12);
        assert_eq!(b.curvature(0.3), 0.);
        // x(t) = 2t + 2t², so x = 2 at t = (√5 - 1) / 2
        let t = b.t_at_length(2.);
        assert_relative_eq!(t, (5f64.sqrt() - 1.) / 2., epsilon = 1e-2);
        assert_relative_eq!(b.point_at(t).length, 2., epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_circle() {
        let b = quarter_circle();
        assert_relative_eq!(b.length(), FRAC_PI_2, epsilon = 1e-2);
        assert_relative_eq!(b.curvature(0.5), 1., epsilon = 5e-2);
        // Counter-clockwise turn is positive curvature
        assert!(b.curvature(0.1) > 0.);
        assert_relative_eq!(b.point_at(0.).point, R2::new(1., 0.));
        assert_relative_eq!(b.point_at(1.).point, R2::new(0., 1.), epsilon = 1e-12);
        assert_relative_eq!(b.point_at(1.).length, b.length());
        let tangent = b.point_at(0.).tangent;
        assert_eq!(tangent.x, 0.);
        assert!(tangent.y > 0.);
    }

    #[test]
    fn test_cusp_curvature() {
        let p = R2::new(2., 2.);
        let b = Bezier::quadratic(p, p, R2::new(3., 5.));
        assert_eq!(b.curvature(0.), f64::INFINITY);
    }
}
