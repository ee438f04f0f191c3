//! Path segments that can be measured and walked by arc length.

pub mod arc;
pub mod bezier;
pub mod cache;
pub mod ellipse;
pub mod line;

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{error::BoxError, r2::R2};

use self::{arc::EllipticArc, bezier::Bezier, line::Line};

/// A point on a segment, with local derivative information.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Segment parameter, in `[0, 1]`.
    pub t: f64,
    pub point: R2<f64>,
    /// Derivative of the point with respect to `t` (not normalized).
    pub tangent: R2<f64>,
    pub curvature: f64,
    /// Arc length from the segment start to this point.
    pub length: f64,
}

/// Evenly spaced points along one segment, plus the distance from the last point to the segment's end.
///
/// Feed `part_length - leftover` as the next segment's `start_offset` to keep the spacing unbroken across segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Subdivision {
    pub points: Vec<PathPoint>,
    pub leftover: f64,
}

#[derive(Debug, Clone, From)]
pub enum Segment {
    Line(Line),
    Bezier(Bezier),
    Arc(EllipticArc),
}

impl Segment {
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(l) => l.length(),
            Segment::Bezier(b) => b.length(),
            Segment::Arc(a) => a.length(),
        }
    }

    pub fn point_at(&self, t: f64) -> PathPoint {
        match self {
            Segment::Line(l) => l.point_at(t),
            Segment::Bezier(b) => b.point_at(t),
            Segment::Arc(a) => a.point_at(t),
        }
    }

    pub fn t_at_length(&self, length: f64) -> f64 {
        match self {
            Segment::Line(l) => l.t_at_length(length),
            Segment::Bezier(b) => b.t_at_length(length),
            Segment::Arc(a) => a.t_at_length(length),
        }
    }

    pub fn start(&self) -> R2<f64> {
        self.point_at(0.).point
    }

    pub fn end(&self) -> R2<f64> {
        self.point_at(1.).point
    }

    /// Points every `part_length` along the segment, starting `start_offset` from its start.
    ///
    /// When `start_offset` exceeds the segment length no point is produced, and `leftover` is the distance from
    /// the (preceding) point at `start_offset - part_length` to the segment's end.
    pub fn subdivide(&self, part_length: f64, start_offset: f64) -> Result<Subdivision, BoxError> {
        let part_length = BoxError::check_dimension("part length", part_length)?;
        let start_offset = start_offset.max(0.);
        let length = self.length();
        if start_offset > length {
            return Ok(Subdivision { points: vec![], leftover: length + part_length - start_offset });
        }
        let nr_parts = ((length - start_offset) / part_length).floor() as usize;
        let points = (0..=nr_parts)
            .map(|k| self.point_at(self.t_at_length(start_offset + k as f64 * part_length)))
            .collect();
        let leftover = length - (start_offset + nr_parts as f64 * part_length);
        Ok(Subdivision { points, leftover })
    }
}
