//! Finger-joint layouts for the flat wrap panels and the elliptical sides they mesh with.

pub mod ell_box;
pub mod notched;
pub mod primitive;
pub mod surface;

/// Whether column `idx` of a notch pattern is a notch: inset on the flat wrap, raised on the elliptical side.
///
/// Both layouts must agree on this or the parts will not mesh.
pub fn is_notch(idx: usize, invert: bool) -> bool {
    (idx % 2 == 1) != invert
}
