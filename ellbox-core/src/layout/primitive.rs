use serde::{Deserialize, Serialize};

use crate::{arc::EllipticArc, cache::EllipseCache, curve::Segment, error::BoxError, line::Line, r2::R2};

/// Drawing primitive handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Primitive {
    Line {
        from: R2<f64>,
        to: R2<f64>,
    },
    /// Counter-clockwise arc of the axis-aligned ellipse around `center`, between two parametric angles.
    #[serde(rename_all = "camelCase")]
    Arc {
        center: R2<f64>,
        rx: f64,
        ry: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Label {
        position: R2<f64>,
        text: String,
    },
}

impl Primitive {
    pub fn line(from: R2<f64>, to: R2<f64>) -> Self {
        Primitive::Line { from, to }
    }

    pub fn arc(center: R2<f64>, r: R2<f64>, start_angle: f64, end_angle: f64) -> Self {
        Primitive::Arc { center, rx: r.x, ry: r.y, start_angle, end_angle }
    }

    pub fn label(position: R2<f64>, text: &str) -> Self {
        Primitive::Label { position, text: text.to_string() }
    }

    /// The path segment this primitive traces; labels have none.
    pub fn segment(&self, cache: &mut EllipseCache) -> Result<Option<Segment>, BoxError> {
        Ok(match self {
            Primitive::Line { from, to } => Some(Line::new(*from, *to).into()),
            Primitive::Arc { center, rx, ry, start_angle, end_angle } => {
                let ellipse = cache.get(*rx, *ry)?;
                Some(EllipticArc::from_center(ellipse, *center, *start_angle, *end_angle, true).into())
            }
            Primitive::Label { .. } => None,
        })
    }
}
