//! Elliptic arcs from SVG-style endpoint parameters.

use std::{f64::consts::TAU, sync::Arc};

use log::trace;

use crate::{cache::EllipseCache, curve::PathPoint, ellipse::Ellipse, error::BoxError, math::angle, r2::R2};

/// Endpoint parameterization of an arc, as in an SVG path `A` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub start: R2<f64>,
    pub end: R2<f64>,
    pub radii: R2<f64>,
    /// Rotation of the ellipse's x-axis, in degrees (as in SVG).
    pub axis_rotation: f64,
    /// Travel in the direction of increasing angle.
    pub positive_sweep: bool,
    pub large_arc: bool,
}

#[derive(Debug, Clone)]
pub struct EllipticArc {
    pub ellipse: Arc<Ellipse>,
    pub center: R2<f64>,
    /// Rotation of the ellipse's x-axis, in radians.
    pub axis_rotation: f64,
    pub positive_sweep: bool,
    /// Parametric angles (in the ellipse's own frame) of the arc's endpoints.
    pub start_theta: f64,
    pub end_theta: f64,
}

impl EllipticArc {
    /// Within this relative margin, radii that are just too small for the chord are treated as exactly fitting.
    const FIT_TOLERANCE: f64 = 1e-9;

    /// Resolve the arc's center, choosing between the two candidate ellipses by the sweep and large-arc flags.
    pub fn new(params: ArcParams, cache: &mut EllipseCache) -> Result<EllipticArc, BoxError> {
        let ArcParams { start, end, radii, axis_rotation, positive_sweep, large_arc } = params;
        let R2 { x: rx, y: ry } = radii;
        let axis_rotation = axis_rotation.to_radians();
        BoxError::check_dimension("x radius", rx)?;
        BoxError::check_dimension("y radius", ry)?;

        // Work in the ellipse's frame, with `start` at the origin
        let chord = (end - start).rotate(-axis_rotation);
        let R2 { x: tx, y: ty } = chord;
        let (rx2, ry2) = (rx * rx, ry * ry);
        let ff = rx2 * ty * ty + ry2 * tx * tx;
        let fit = ff / (4. * rx2 * ry2);
        if ff == 0. || fit > 1. + Self::FIT_TOLERANCE {
            return Err(BoxError::NoArcSolution { radii, chord });
        }
        // Both ellipses (centered on each endpoint) intersect at the two candidate centers
        let root = (ff * (4. * rx2 * ry2 - ff)).max(0.).sqrt();
        let cx = rx2 * ry * tx * ty * ty + ry2 * ry * tx * tx * tx;
        let cy = rx * ty * ff;
        let sx = rx * ty * root;
        let sy = ry * tx * root;
        let c1 = R2 { x: (cx - sx) / (2. * ry * ff), y: (cy + sy) / (2. * rx * ff) };
        let c2 = R2 { x: (cx + sx) / (2. * ry * ff), y: (cy - sy) / (2. * rx * ff) };

        let (left, right) = if chord.cross(&c1) > 0. { (c1, c2) } else { (c2, c1) };
        let center = if positive_sweep != large_arc { left } else { right };

        let ellipse = cache.get(rx, ry)?;
        let start_theta = ellipse.theta_at_angle((-center).t());
        let end_theta = ellipse.theta_at_angle((chord - center).t());
        let center = center.rotate(axis_rotation) + start;
        trace!("arc {} -> {}: center {}, thetas [{:.4}, {:.4}]", start, end, center, start_theta, end_theta);
        Ok(EllipticArc { ellipse, center, axis_rotation, positive_sweep, start_theta, end_theta })
    }

    /// Arc around `center` from parametric angle `start_theta` to `end_theta`, with an unrotated axis.
    pub fn from_center(
        ellipse: Arc<Ellipse>,
        center: R2<f64>,
        start_theta: f64,
        end_theta: f64,
        positive_sweep: bool,
    ) -> EllipticArc {
        EllipticArc {
            ellipse,
            center,
            axis_rotation: 0.,
            positive_sweep,
            start_theta: angle::wrap(start_theta),
            end_theta: angle::wrap(end_theta),
        }
    }

    /// Signed angular extent; positive for a positive sweep.
    pub fn span(&self) -> f64 {
        let mut end = self.end_theta;
        if self.positive_sweep && end < self.start_theta {
            end += TAU;
        }
        if !self.positive_sweep && self.start_theta < end {
            end -= TAU;
        }
        end - self.start_theta
    }

    pub fn t_to_theta(&self, t: f64) -> f64 {
        angle::wrap(self.start_theta + self.span() * t)
    }

    pub fn theta_to_t(&self, theta: f64) -> f64 {
        let span = self.span();
        if span == 0. {
            return 0.;
        }
        let travelled = if self.positive_sweep { theta - self.start_theta } else { self.start_theta - theta };
        angle::wrap(travelled) / span.abs()
    }

    /// Arc length between two parametric angles, measured along the sweep direction.
    fn dist_along(&self, from: f64, to: f64) -> f64 {
        if self.positive_sweep {
            self.ellipse.dist_from_theta(from, to)
        } else {
            self.ellipse.dist_from_theta(to, from)
        }
    }

    pub fn length(&self) -> f64 {
        self.dist_along(self.start_theta, self.end_theta)
    }

    pub fn length_at_t(&self, t: f64) -> f64 {
        if t >= 1. {
            return self.length();
        }
        self.dist_along(self.start_theta, self.t_to_theta(t))
    }

    pub fn t_at_length(&self, length: f64) -> f64 {
        let total = self.length();
        if total == 0. {
            return 0.;
        }
        if length >= total {
            return 1.;
        }
        let dist = if self.positive_sweep { length } else { -length };
        let theta = self.ellipse.theta_from_dist(self.start_theta, dist);
        self.theta_to_t(theta)
    }

    pub fn curvature(&self, t: f64) -> f64 {
        self.ellipse.curvature(self.t_to_theta(t))
    }

    /// Derivative of the arc's point with respect to `t`.
    pub fn tangent(&self, t: f64) -> R2<f64> {
        let theta = self.t_to_theta(t);
        let R2 { x: rx, y: ry } = self.ellipse.r;
        R2 { x: -rx * theta.sin(), y: ry * theta.cos() }.rotate(self.axis_rotation) * self.span()
    }

    pub fn point_at(&self, t: f64) -> PathPoint {
        let theta = self.t_to_theta(t);
        let point = self.ellipse.coordinate_at(theta).rotate(self.axis_rotation) + self.center;
        PathPoint {
            t,
            point,
            tangent: self.tangent(t),
            curvature: self.curvature(t),
            length: self.length_at_t(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_log::test;

    use super::*;

    fn params(start: R2<f64>, end: R2<f64>, rx: f64, ry: f64, positive_sweep: bool, large_arc: bool) -> ArcParams {
        ArcParams { start, end, radii: R2::new(rx, ry), axis_rotation: 0., positive_sweep, large_arc }
    }

    #[test]
    fn test_quarter_circle() {
        let mut cache = EllipseCache::new();
        let arc = EllipticArc::new(params(R2::new(10., 0.), R2::new(0., 10.), 10., 10., true, false), &mut cache).unwrap();
        assert_relative_eq!(arc.center, R2::new(0., 0.), epsilon = 1e-9);
        assert_abs_diff_eq!(arc.start_theta, 0., epsilon = 1e-9);
        assert_relative_eq!(arc.end_theta, FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(arc.span(), FRAC_PI_2, epsilon = 1e-9);
        let eps = arc.ellipse.circumference() / Ellipse::N as f64;
        assert_abs_diff_eq!(arc.length(), 5. * PI, epsilon = eps);
        assert_relative_eq!(arc.point_at(0.5).point, R2::new(10. * FRAC_PI_4.cos(), 10. * FRAC_PI_4.sin()), epsilon = 1e-9);
        assert_relative_eq!(arc.point_at(1.).point, R2::new(0., 10.), epsilon = 1e-9);
        assert_relative_eq!(arc.curvature(0.3), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_flag_combinations() {
        let mut cache = EllipseCache::new();
        let (start, end) = (R2::new(10., 0.), R2::new(0., 10.));
        let cases = [
            (true, false, R2::new(0., 0.), FRAC_PI_2),
            (false, true, R2::new(0., 0.), -3. * FRAC_PI_2),
            (true, true, R2::new(10., 10.), 3. * FRAC_PI_2),
            (false, false, R2::new(10., 10.), -FRAC_PI_2),
        ];
        for (positive_sweep, large_arc, center, span) in cases {
            let arc = EllipticArc::new(params(start, end, 10., 10., positive_sweep, large_arc), &mut cache).unwrap();
            assert_relative_eq!(arc.center, center, epsilon = 1e-9);
            assert_relative_eq!(arc.span(), span, epsilon = 1e-9);
            assert_relative_eq!(arc.point_at(0.).point, start, epsilon = 1e-9);
            assert_relative_eq!(arc.point_at(1.).point, end, epsilon = 1e-9);
        }
        // All four arcs share one ellipse
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ellipse_and_rotation() {
        let mut cache = EllipseCache::new();
        // Upper half of an ellipse with radii (4, 2), rotated 90° and shifted to (1, 1)
        let center = R2::new(1., 1.);
        let start = center + R2::new(4., 0.).rotate(FRAC_PI_2);
        let end = center + R2::new(-4., 0.).rotate(FRAC_PI_2);
        let p = ArcParams { start, end, radii: R2::new(4., 2.), axis_rotation: 90., positive_sweep: true, large_arc: false };
        let arc = EllipticArc::new(p, &mut cache).unwrap();
        assert_relative_eq!(arc.center, center, epsilon = 1e-9);
        assert_relative_eq!(arc.axis_rotation, FRAC_PI_2);
        assert_relative_eq!(arc.span().abs(), PI, epsilon = 1e-9);
        let mid = arc.point_at(0.5).point;
        assert_relative_eq!((mid - center).r(), 2., epsilon = 1e-9);
        assert_relative_eq!(arc.point_at(1.).point, end, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_in_degrees() {
        let mut cache = EllipseCache::new();
        let (start, end) = (R2::new(3., 1.), R2::new(-2., 4.));
        for (positive_sweep, large_arc) in [(true, false), (false, true), (true, true), (false, false)] {
            let p = ArcParams { start, end, radii: R2::new(6., 3.), axis_rotation: 40., positive_sweep, large_arc };
            let arc = EllipticArc::new(p, &mut cache).unwrap();
            assert_relative_eq!(arc.axis_rotation, 40f64.to_radians());
            assert_relative_eq!(arc.point_at(0.).point, start, epsilon = 1e-9);
            assert_relative_eq!(arc.point_at(1.).point, end, epsilon = 1e-9);
            // Both endpoints lie on the ellipse rotated by 40° around the center
            for p in [start, end] {
                let local = (p - arc.center).rotate(-40f64.to_radians());
                assert_relative_eq!((local.x / 6.).powi(2) + (local.y / 3.).powi(2), 1., epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_no_solution() {
        let mut cache = EllipseCache::new();
        let r = EllipticArc::new(params(R2::new(0., 0.), R2::new(30., 0.), 10., 10., true, false), &mut cache);
        assert!(matches!(r, Err(BoxError::NoArcSolution { .. })));
        let r = EllipticArc::new(params(R2::new(0., 0.), R2::new(0., 0.), 10., 10., true, false), &mut cache);
        assert!(matches!(r, Err(BoxError::NoArcSolution { .. })));
        // Radii exactly half the chord: a half ellipse centered on the midpoint
        let arc = EllipticArc::new(params(R2::new(0., 0.), R2::new(20., 0.), 10., 5., true, false), &mut cache).unwrap();
        assert_relative_eq!(arc.center, R2::new(10., 0.), epsilon = 1e-6);
    }

    #[test]
    fn test_length_and_t_roundtrip() {
        let mut cache = EllipseCache::new();
        for positive_sweep in [true, false] {
            let p = params(R2::new(5., 0.), R2::new(-5., 0.), 5., 3., positive_sweep, false);
            let arc = EllipticArc::new(p, &mut cache).unwrap();
            let eps = arc.ellipse.circumference() / Ellipse::N as f64;
            assert_abs_diff_eq!(arc.length(), arc.ellipse.circumference() / 2., epsilon = eps);
            for i in 1..10 {
                let l = arc.length() * i as f64 / 10.;
                let t = arc.t_at_length(l);
                assert!((0. ..=1.).contains(&t));
                assert_abs_diff_eq!(arc.length_at_t(t), l, epsilon = eps);
            }
            assert_eq!(arc.t_at_length(arc.length()), 1.);
            // Lower half when sweeping backwards
            let mid = arc.point_at(0.5).point;
            if positive_sweep {
                assert!(mid.y > 0.);
            } else {
                assert!(mid.y < 0.);
            }
        }
    }

    #[test]
    fn test_from_center() {
        let mut cache = EllipseCache::new();
        let ellipse = cache.get(6., 4.).unwrap();
        let arc = EllipticArc::from_center(ellipse, R2::new(2., 3.), 5.5, 0.5, true);
        assert_relative_eq!(arc.span(), 1. + TAU - 6., epsilon = 1e-12);
        assert_relative_eq!(arc.theta_to_t(arc.t_to_theta(0.25)), 0.25, epsilon = 1e-9);
        assert_relative_eq!(arc.point_at(1.).point, R2::new(2. + 6. * 0.5f64.cos(), 3. + 4. * 0.5f64.sin()), epsilon = 1e-9);
    }
}
