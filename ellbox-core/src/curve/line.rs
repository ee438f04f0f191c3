use serde::{Deserialize, Serialize};

use crate::{curve::PathPoint, r2::R2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: R2<f64>,
    pub end: R2<f64>,
}

impl Line {
    pub fn new(start: R2<f64>, end: R2<f64>) -> Self {
        Line { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).r()
    }

    pub fn point_at(&self, t: f64) -> PathPoint {
        let d = self.end - self.start;
        PathPoint {
            t,
            point: self.start + d * t,
            tangent: d,
            curvature: 0.,
            length: t * self.length(),
        }
    }

    pub fn t_at_length(&self, length: f64) -> f64 {
        let total = self.length();
        if total == 0. { 0. } else { length / total }
    }
}
