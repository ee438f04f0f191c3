#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod curve;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod math;

pub use geometry::r2;
pub use geometry::intersect;

pub use curve::arc;
pub use curve::bezier;
pub use curve::cache;
pub use curve::ellipse;
pub use curve::line;

pub use layout::ell_box;
pub use layout::notched;
pub use layout::primitive;
pub use layout::surface;

// Re-export key types for external use
pub use arc::{ArcParams, EllipticArc};
pub use bezier::Bezier;
pub use cache::EllipseCache;
pub use curve::{PathPoint, Segment, Subdivision};
pub use ell_box::{BoxDrawing, BoxParams, EllipticalBox, Part, PartKind};
pub use ellipse::Ellipse;
pub use error::BoxError;
pub use line::Line;
pub use notched::{NotchedEllipse, NotchedOutline};
pub use primitive::Primitive;
pub use r2::R2;
pub use surface::{CurvedSurface, Size, SurfaceLayout};
