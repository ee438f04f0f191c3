//! Axis-aligned ellipse with a discretized arc-length table.
//!
//! Two angles are in play:
//! - the *center angle* `a`: the direction of a ray from the ellipse center,
//! - the *parametric angle* `θ`: the ellipse point is `(rx·cos θ, ry·sin θ)`.
//!
//! They coincide only for circles. All distance queries take parametric angles and measure counter-clockwise.

use std::f64::consts::TAU;

use log::trace;

use crate::{error::BoxError, math::{angle, sampled::SampledCurve}, r2::R2};

#[derive(Debug, Clone)]
pub struct Ellipse {
    pub r: R2<f64>,
    table: SampledCurve,
}

impl Ellipse {
    /// Number of equal parametric-angle steps in the arc-length table.
    pub const N: usize = 1024;

    pub fn new(rx: f64, ry: f64) -> Result<Ellipse, BoxError> {
        let rx = BoxError::check_dimension("x radius", rx)?;
        let ry = BoxError::check_dimension("y radius", ry)?;
        let r = R2 { x: rx, y: ry };
        let table = SampledCurve::new(0., TAU, Self::N, |theta| Self::point(r, theta));
        trace!("ellipse {}: circumference {}", r, table.length());
        Ok(Ellipse { r, table })
    }

    fn point(r: R2<f64>, theta: f64) -> R2<f64> {
        R2 { x: r.x * theta.cos(), y: r.y * theta.sin() }
    }

    pub fn rx(&self) -> f64 {
        self.r.x
    }

    pub fn ry(&self) -> f64 {
        self.r.y
    }

    pub fn circumference(&self) -> f64 {
        self.table.length()
    }

    /// Angular resolution of the arc-length table; distance queries are accurate to roughly one step.
    pub fn step(&self) -> f64 {
        self.table.step()
    }

    pub fn table(&self) -> &SampledCurve {
        &self.table
    }

    /// Point at parametric angle `theta`, relative to the ellipse center.
    pub fn coordinate_at(&self, theta: f64) -> R2<f64> {
        Self::point(self.r, theta)
    }

    /// Parametric angle of the ellipse point lying in direction `angle` from the center; monotonic over `[0, 2π)`.
    pub fn theta_at_angle(&self, angle: f64) -> f64 {
        // tan θ = (rx / ry)·tan a, kept in a's quadrant
        angle::wrap((self.r.x * angle.sin()).atan2(self.r.y * angle.cos()))
    }

    /// Arc length travelled counter-clockwise from `theta_start` to `theta_end`.
    pub fn dist_from_theta(&self, theta_start: f64, theta_end: f64) -> f64 {
        let theta_start = angle::wrap(theta_start);
        let theta_end = angle::wrap(theta_end);
        let d0 = self.table.dist_at(theta_start);
        let d1 = self.table.dist_at(theta_end);
        if theta_start <= theta_end {
            d1 - d0
        } else {
            self.circumference() - d0 + d1
        }
    }

    /// Parametric angle reached by travelling `dist` counter-clockwise from `theta_start` (clockwise if negative).
    pub fn theta_from_dist(&self, theta_start: f64, dist: f64) -> f64 {
        let circumference = self.circumference();
        let start_dist = self.table.dist_at(angle::wrap(theta_start));
        let mut end_dist = (start_dist + dist).rem_euclid(circumference);
        if end_dist >= circumference {
            end_dist = 0.;
        }
        angle::wrap(self.table.param_at(end_dist))
    }

    pub fn curvature(&self, theta: f64) -> f64 {
        let R2 { x: rx, y: ry } = self.r;
        let (sin, cos) = theta.sin_cos();
        (rx * ry) / (rx * rx * sin * sin + ry * ry * cos * cos).powf(1.5)
    }

    /// Outward unit normal at parametric angle `theta`.
    ///
    /// The normal's direction is the center angle whose parametric angle would be `theta`, i.e.
    /// `(cos φ, sin φ)` with `φ = theta_at_angle(theta)`; exact at the four quarter angles.
    pub fn normal(&self, theta: f64) -> R2<f64> {
        match angle::quarter(theta) {
            Some((x, y)) => R2 { x, y },
            None => R2::polar(1., self.theta_at_angle(theta)),
        }
    }

    /// Unit tangent at parametric angle `theta`, pointing in the counter-clockwise direction.
    ///
    /// Notch walls are offset along [`Ellipse::normal`], the `(cos φ, sin φ)` direction with
    /// `φ = theta_at_angle(theta)`, which is this tangent turned a quarter clockwise.
    pub fn tangent(&self, theta: f64) -> R2<f64> {
        let n = self.normal(theta);
        R2 { x: -n.y, y: n.x }
    }

    /// Point `height` outside the ellipse, along the normal at `theta`: the outer corner of a notch wall.
    pub fn notch_coordinate(&self, theta: f64, height: f64) -> R2<f64> {
        self.coordinate_at(theta) + self.normal(theta) * height
    }
}
