//! A complete elliptical box: two wrap panels (body and lid), the elliptical side, and optional central ribs.

use std::f64::consts::{FRAC_PI_2, PI};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    cache::EllipseCache,
    error::BoxError,
    layout::{notched::NotchedEllipse, primitive::Primitive, surface::{CurvedSurface, Size}},
    r2::R2,
};

/// Box dimensions and cut parameters, all lengths in one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxParams {
    /// Outer width of the elliptical side.
    pub width: f64,
    /// Outer height of the elliptical side.
    pub height: f64,
    /// Distance between the two sides, i.e. the height of the wrap panels.
    pub depth: f64,
    /// Material thickness.
    pub thickness: f64,
    /// Distance between cuts along the wrap; adjusted slightly to fill the wrap evenly.
    pub cut_spacing: f64,
    /// Number of cuts across the depth.
    pub cut_count: usize,
    /// Angle spanned by the lid, in degrees, measured at the ellipse center.
    pub lid_angle: f64,
    /// Invert the lid's notch pattern, so that it cannot slide sideways.
    pub invert_lid_notches: bool,
    pub central_rib_lid: bool,
    pub central_rib_body: bool,
}

impl Default for BoxParams {
    fn default() -> Self {
        BoxParams {
            width: 100.,
            height: 60.,
            depth: 40.,
            thickness: 3.,
            cut_spacing: 1.5,
            cut_count: 3,
            lid_angle: 120.,
            invert_lid_notches: false,
            central_rib_lid: false,
            central_rib_body: false,
        }
    }
}

impl BoxParams {
    pub fn validate(&self) -> Result<(), BoxError> {
        BoxError::check_dimension("width", self.width)?;
        BoxError::check_dimension("height", self.height)?;
        BoxError::check_dimension("depth", self.depth)?;
        BoxError::check_dimension("thickness", self.thickness)?;
        BoxError::check_dimension("cut spacing", self.cut_spacing)?;
        let lid_angle = BoxError::check_dimension("lid angle", self.lid_angle)?;
        if lid_angle >= 360. {
            return Err(BoxError::InvalidDimension { name: "lid angle", value: lid_angle });
        }
        if self.cut_count < 1 {
            return Err(BoxError::InvalidCutCount { count: self.cut_count, reason: "at least one cut is required" });
        }
        if (self.central_rib_lid || self.central_rib_body) && self.cut_count % 2 == 1 {
            return Err(BoxError::InvalidCutCount { count: self.cut_count, reason: "a central rib requires an even cut count" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    Body,
    Lid,
    /// Construction lines marking where the lid meets the body; not cut.
    Guide,
    Side,
    InnerRib,
    OuterRib,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub kind: PartKind,
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxDrawing {
    pub parts: Vec<Part>,
    pub body_length: f64,
    pub lid_length: f64,
    pub body_notches: Vec<f64>,
    pub lid_notches: Vec<f64>,
}

impl BoxDrawing {
    pub fn part(&self, kind: PartKind) -> Option<&Part> {
        self.parts.iter().find(|p| p.kind == kind)
    }
}

#[derive(Debug, Clone)]
pub struct EllipticalBox {
    params: BoxParams,
}

impl EllipticalBox {
    /// Gap between parts on the sheet.
    const GAP: f64 = 2.;

    pub fn new(params: BoxParams) -> Result<Self, BoxError> {
        params.validate()?;
        Ok(EllipticalBox { params })
    }

    pub fn params(&self) -> &BoxParams {
        &self.params
    }

    pub fn generate(&self, cache: &mut EllipseCache) -> Result<BoxDrawing, BoxError> {
        let BoxParams {
            width: w, height: h, depth: d, thickness: t, cut_spacing, cut_count, lid_angle,
            invert_lid_notches, central_rib_lid, central_rib_body,
        } = self.params;
        let gap = Self::GAP;
        let ellipse = cache.get(w / 2., h / 2.)?;

        // The lid is centered on the top of the ellipse
        let lid_angle = lid_angle.to_radians();
        let lid_start = FRAC_PI_2 - lid_angle / 2.;
        let lid_end = FRAC_PI_2 + lid_angle / 2.;
        let (lid_start_theta, lid_end_theta) = (ellipse.theta_at_angle(lid_start), ellipse.theta_at_angle(lid_end));
        let lid_length = ellipse.dist_from_theta(lid_start_theta, lid_end_theta);
        let body_length = ellipse.dist_from_theta(lid_end_theta, lid_start_theta);
        info!("lid length {:.3}, body length {:.3}", lid_length, body_length);

        let surface = |w: f64, invert_notches: bool, central_rib: bool| CurvedSurface {
            size: Size { w, h: d },
            cut_spacing,
            h_cut_count: cut_count,
            thickness: t,
            invert_notches,
            central_rib,
        };
        let body = surface(body_length, false, central_rib_body).layout(R2::new(0., 0.))?;
        let lid = surface(lid_length, invert_lid_notches, central_rib_lid).layout(R2::new(0., d + gap))?;
        debug!("body: {} columns, lid: {} columns", body.columns(), lid.columns());

        let notched = |center: R2<f64>, start_angle: f64, invert_notches: bool, notches: &[f64]| {
            NotchedEllipse { ellipse: ellipse.clone(), center, start_angle, thickness: t, invert_notches }
                .layout(notches)
                .primitives
        };

        // Elliptical side, with the dividers between lid and body
        let side_center = R2::new(gap + t + w / 2., 2. * d + h / 2. + t + 2. * gap);
        let seams = [lid_start, lid_end].map(|a| side_center + ellipse.coordinate_at(ellipse.theta_at_angle(a + PI)));
        let guides = seams.iter().map(|seam| Primitive::line(side_center, *seam)).collect();
        let mut side = notched(side_center, lid_end, false, &body.notch_edges);
        side.extend(notched(side_center, lid_start, invert_lid_notches, &lid.notch_edges));

        let mut parts = vec![
            Part { kind: PartKind::Body, primitives: body.primitives },
            Part { kind: PartKind::Lid, primitives: lid.primitives },
            Part { kind: PartKind::Guide, primitives: guides },
            Part { kind: PartKind::Side, primitives: side },
        ];

        if central_rib_lid || central_rib_body {
            let rib_y = 2. * d + 1.5 * (h + 2. * t) + 3. * gap;
            let inner_center = R2::new(gap + t + w / 2., rib_y);
            let outer_center = R2::new(20. * gap + 1.5 * (w + t), rib_y);
            let spacer = R2::new(0., 5. * gap);
            let mut inner = vec![];
            let mut outer = vec![];
            if central_rib_lid {
                inner.extend(notched(inner_center, lid_start, false, &lid.notch_edges));
                outer.extend(notched(outer_center, lid_start, true, &lid.notch_edges));
            }
            if central_rib_body {
                inner.extend(notched(inner_center + spacer, lid_end, false, &body.notch_edges));
                outer.extend(notched(outer_center + spacer, lid_end, true, &body.notch_edges));
            }
            // The side label sits where the seam dividers meet
            inner.push(Primitive::label(side_center, "side (duplicate this)"));
            inner.push(Primitive::label(inner_center, "inside rib"));
            outer.push(Primitive::label(outer_center, "outside rib"));
            parts.push(Part { kind: PartKind::InnerRib, primitives: inner });
            parts.push(Part { kind: PartKind::OuterRib, primitives: outer });
        }

        Ok(BoxDrawing {
            parts,
            body_length,
            lid_length,
            body_notches: body.notch_edges,
            lid_notches: lid.notch_edges,
        })
    }
}
