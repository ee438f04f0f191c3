//! Piecewise-linear arc-length tables for parametric curves.
//!
//! A curve `p(s)`, `s ∈ [start, end]`, is sampled at `n` equal parameter increments; the cumulative chord length
//! at each sample approximates arc length. Both directions (parameter → distance, distance → parameter) interpolate
//! linearly within the bracketing pair of samples, so they are exact inverses of one another.

use crate::r2::R2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub param: f64,
    pub point: R2<f64>,
    /// Cumulative chord length from the first sample.
    pub dist: f64,
}

#[derive(Debug, Clone)]
pub struct SampledCurve {
    samples: Vec<Sample>,
    start: f64,
    step: f64,
}

impl SampledCurve {
    /// Sample `point_at` at `n + 1` evenly spaced parameters covering `[start, end]`.
    pub fn new(start: f64, end: f64, n: usize, point_at: impl Fn(f64) -> R2<f64>) -> Self {
        let n = n.max(1);
        let step = (end - start) / n as f64;
        let mut samples: Vec<Sample> = Vec::with_capacity(n + 1);
        for i in 0..=n {
            let param = if i == n { end } else { start + step * i as f64 };
            let point = point_at(param);
            let dist = match samples.last() {
                Some(prev) => prev.dist + (point - prev.point).r(),
                None => 0.,
            };
            samples.push(Sample { param, point, dist });
        }
        SampledCurve { samples, start, step }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of segments (one less than the number of samples).
    pub fn n(&self) -> usize {
        self.samples.len() - 1
    }

    pub fn length(&self) -> f64 {
        self.samples[self.n()].dist
    }

    /// Cumulative distance at `param`, clamped to the sampled range.
    pub fn dist_at(&self, param: f64) -> f64 {
        let n = self.n();
        let offset = (param - self.start) / self.step;
        if !(offset > 0.) {
            return 0.;
        }
        if offset >= n as f64 {
            return self.length();
        }
        let idx = offset.floor() as usize;
        let frac = offset - idx as f64;
        let lo = self.samples[idx].dist;
        let hi = self.samples[idx + 1].dist;
        lo + (hi - lo) * frac
    }

    /// Parameter at which the cumulative distance reaches `dist` (clamped to `[0, length]`).
    pub fn param_at(&self, dist: f64) -> f64 {
        let n = self.n();
        if !(dist > 0.) {
            return self.samples[0].param;
        }
        if dist >= self.length() {
            return self.samples[n].param;
        }
        let mut lo = 0;
        let mut hi = n;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.samples[mid].dist < dist {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let Sample { param, dist: lo_dist, .. } = self.samples[lo];
        let step_dist = self.samples[hi].dist - lo_dist;
        if step_dist == 0. {
            return param;
        }
        param + self.step * (dist - lo_dist) / step_dist
    }
}
