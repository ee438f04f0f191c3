use crate::{error::BoxError, r2::R2};

/// Whether `p` lies within the bounding box of `[start, end]`; the three points are presumed collinear.
pub fn on_segment(p: R2<f64>, start: R2<f64>, end: R2<f64>) -> bool {
    const EPS: f64 = 1e-9;
    let within = |v: f64, a: f64, b: f64| v >= a.min(b) - EPS && v <= a.max(b) + EPS;
    within(p.x, start.x, end.x) && within(p.y, start.y, end.y)
}

/// Intersection of the lines through `[s1, e1]` and `[s2, e2]`.
///
/// With `on_segments`, the intersection must also lie on both segments.
pub fn intersection(
    s1: R2<f64>,
    e1: R2<f64>,
    s2: R2<f64>,
    e2: R2<f64>,
    on_segments: bool,
) -> Result<R2<f64>, BoxError> {
    let d1 = s1 - e1;
    let d2 = s2 - e2;
    let det = d1.cross(&d2);
    if det == 0. {
        return Err(BoxError::ParallelSegments { s1, e1, s2, e2 });
    }
    let n1 = s1.cross(&e1);
    let n2 = s2.cross(&e2);
    let point = (d2 * n1 - d1 * n2) / det;
    if on_segments && !(on_segment(point, s1, e1) && on_segment(point, s2, e2)) {
        return Err(BoxError::NotOnSegments { point, s1, e1, s2, e2 });
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn test_crossing() {
        let p = intersection(
            R2::new(0., 0.), R2::new(2., 2.),
            R2::new(0., 2.), R2::new(2., 0.),
            true,
        ).unwrap();
        assert_relative_eq!(p, R2::new(1., 1.), epsilon = 1e-12);
    }

    #[test]
    fn test_shared_endpoint() {
        let c = R2::new(5., 3.);
        let p = intersection(c, R2::new(8., 7.), c, R2::new(1., 9.), true).unwrap();
        assert_relative_eq!(p, c, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel() {
        let r = intersection(
            R2::new(0., 0.), R2::new(1., 1.),
            R2::new(0., 1.), R2::new(1., 2.),
            false,
        );
        assert!(matches!(r, Err(BoxError::ParallelSegments { .. })));
    }

    #[test]
    fn test_off_segments() {
        let s1 = R2::new(0., 0.);
        let e1 = R2::new(1., 0.);
        let s2 = R2::new(3., -1.);
        let e2 = R2::new(3., 1.);
        assert!(matches!(intersection(s1, e1, s2, e2, true), Err(BoxError::NotOnSegments { .. })));
        let p = intersection(s1, e1, s2, e2, false).unwrap();
        assert_relative_eq!(p, R2::new(3., 0.), epsilon = 1e-12);
    }
}
