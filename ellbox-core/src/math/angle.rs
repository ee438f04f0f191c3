use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Reduce an angle into `[0, 2π)`.
pub fn wrap(a: f64) -> f64 {
    let w = a.rem_euclid(TAU);
    // `rem_euclid` can round up to exactly TAU for tiny negative inputs
    if w >= TAU { 0. } else { w }
}

/// Axis direction for the four quarter angles (`0, π/2, π, 3π/2`), where tangent-based formulas divide by zero.
pub fn quarter(a: f64) -> Option<(f64, f64)> {
    match wrap(a) {
        a if a == 0. => Some((1., 0.)),
        a if a == FRAC_PI_2 => Some((0., 1.)),
        a if a == PI => Some((-1., 0.)),
        a if a == 3. * FRAC_PI_2 => Some((0., -1.)),
        _ => None,
    }
}
