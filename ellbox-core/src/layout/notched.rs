//! Elliptical side panel outline with the tabs that mesh into a wrap panel's slots.

use std::{f64::consts::PI, sync::Arc};

use itertools::Itertools;
use log::debug;

use crate::{ellipse::Ellipse, layout::{is_notch, primitive::Primitive}, math::angle, r2::R2};

#[derive(Debug, Clone)]
pub struct NotchedEllipse {
    pub ellipse: Arc<Ellipse>,
    pub center: R2<f64>,
    /// Center angle at which the first column starts. It is turned a half revolution before use, so that the
    /// lid, which spans the angles around `π/2`, ends up on top of the drawn panel.
    pub start_angle: f64,
    pub thickness: f64,
    pub invert_notches: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotchedOutline {
    /// Alternating arcs and notch walls, as one continuous counter-clockwise path.
    pub primitives: Vec<Primitive>,
    /// Per column, whether it is drawn on the outer (raised) ellipse.
    pub raised: Vec<bool>,
}

impl NotchedEllipse {
    /// Lay out one arc per column between consecutive `notch_edges`, which are arc-length offsets from the start.
    pub fn layout(&self, notch_edges: &[f64]) -> NotchedOutline {
        let ellipse = &self.ellipse;
        let thickness = self.thickness;
        let center = self.center;
        let inner = ellipse.r;
        let outer = inner + R2::new(thickness, thickness);
        let start = ellipse.theta_at_angle(self.start_angle + PI);

        // Parametric angle on the outer ellipse of the notch corner above `theta`
        let outer_theta = |theta: f64| {
            let corner = ellipse.notch_coordinate(theta, thickness);
            angle::wrap((outer.x * corner.y).atan2(outer.y * corner.x))
        };

        let mut primitives = Vec::with_capacity(2 * notch_edges.len());
        let mut raised = Vec::with_capacity(notch_edges.len());
        let mut a1 = outer_theta(start);
        for (col, (d0, d1)) in notch_edges.iter().tuple_windows().enumerate() {
            let start_theta = ellipse.theta_from_dist(start, *d0);
            let end_theta = ellipse.theta_from_dist(start, *d1);
            let base = center + ellipse.coordinate_at(end_theta);
            let corner = center + ellipse.notch_coordinate(end_theta, thickness);
            let a2 = outer_theta(end_theta);
            let notch = is_notch(col, self.invert_notches);
            if notch {
                primitives.push(Primitive::arc(center, outer, a1, a2));
                primitives.push(Primitive::line(corner, base));
            } else {
                primitives.push(Primitive::arc(center, inner, start_theta, end_theta));
                primitives.push(Primitive::line(base, corner));
            }
            raised.push(notch);
            a1 = a2;
        }
        debug!("notched ellipse {}: {} columns from θ {:.4}", inner, raised.len(), start);
        NotchedOutline { primitives, raised }
    }
}
