use std::{ops::{Sub, Mul, Add, Div, Neg}, fmt::{Display, Formatter, self}, f64::consts::TAU};
use approx::{AbsDiffEq, RelativeEq};

use serde::{Deserialize, Serialize};

/// 2D point / vector.
///
/// Plain value type: the polar "setters" return a new value, leaving the other polar component unchanged.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct R2<D> {
    pub x: D,
    pub y: D,
}

impl<D> R2<D> {
    pub fn new(x: D, y: D) -> Self {
        R2 { x, y }
    }
}

impl<D: Display> Display for R2<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl R2<f64> {
    pub fn polar(r: f64, t: f64) -> Self {
        R2 { x: r * t.cos(), y: r * t.sin() }
    }
    pub fn dot(&self, o: &Self) -> f64 {
        self.x * o.x + self.y * o.y
    }
    /// z-component of the 3D cross product; positive when `o` is counter-clockwise from `self`.
    pub fn cross(&self, o: &Self) -> f64 {
        self.x * o.y - self.y * o.x
    }
    /// Polar angle, in `[0, 2π)`.
    pub fn t(&self) -> f64 {
        let t = self.y.atan2(self.x);
        if t < 0. { t + TAU } else { t }
    }
    /// Polar radius.
    pub fn r(&self) -> f64 {
        self.x.hypot(self.y)
    }
    pub fn with_t(&self, t: f64) -> Self {
        R2::polar(self.r(), t)
    }
    pub fn with_r(&self, r: f64) -> Self {
        R2::polar(r, self.t())
    }
    pub fn rotate(&self, a: f64) -> Self {
        let (sin, cos) = a.sin_cos();
        R2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl AbsDiffEq for R2<f64> {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<D: Add<Output = D>> Add for R2<D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<D: Sub<Output = D>> Sub for R2<D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<D: Neg<Output = D>> Neg for R2<D> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        R2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<D: Mul<D, Output = D> + Clone> Mul<D> for R2<D> {
    type Output = Self;
    fn mul(self, rhs: D) -> Self::Output {
        R2 {
            x: self.x * rhs.clone(),
            y: self.y * rhs,
        }
    }
}

impl Mul<R2<f64>> for f64 {
    type Output = R2<f64>;
    fn mul(self, rhs: R2<f64>) -> Self::Output {
        rhs * self
    }
}

impl<D: Div<D, Output = D> + Clone> Div<D> for R2<D> {
    type Output = Self;
    fn div(self, rhs: D) -> Self::Output {
        R2 {
            x: self.x / rhs.clone(),
            y: self.y / rhs,
        }
    }
}
