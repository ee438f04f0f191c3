use crate::r2::R2;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BoxError {
    #[error("Invalid {name}: {value} (must be finite and greater than zero)")]
    InvalidDimension {
        name: &'static str,
        value: f64,
    },

    #[error("Invalid cut count {count}: {reason}")]
    InvalidCutCount {
        count: usize,
        reason: &'static str,
    },

    #[error("No elliptic arc with radii {radii} connects endpoints {chord} apart")]
    NoArcSolution {
        radii: R2<f64>,
        chord: R2<f64>,
    },

    #[error("Lines from {s1} to {e1} and {s2} to {e2} are parallel")]
    ParallelSegments {
        s1: R2<f64>,
        e1: R2<f64>,
        s2: R2<f64>,
        e2: R2<f64>,
    },

    #[error("Intersection {point} is not on line segments [{s1} -> {e1}] [{s2} -> {e2}]")]
    NotOnSegments {
        point: R2<f64>,
        s1: R2<f64>,
        e1: R2<f64>,
        s2: R2<f64>,
        e2: R2<f64>,
    },
}

impl BoxError {
    /// Check that a length (or angle) is finite and strictly positive.
    pub fn check_dimension(name: &'static str, value: f64) -> Result<f64, BoxError> {
        if value.is_finite() && value > 0. {
            Ok(value)
        } else {
            Err(BoxError::InvalidDimension { name, value })
        }
    }
}
