//! Kerf-bent wrap panel: a flat rectangle that bends around the elliptical sides.
//!
//! Rows of staggered cuts make the panel flexible along its width. The width is split into an odd number of
//! columns; alternate columns are inset by the material thickness along the top and bottom edges, forming the
//! slots that receive the tabs of the elliptical side panels.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{error::BoxError, layout::{is_notch, primitive::Primitive}, r2::R2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvedSurface {
    /// `w` runs along the wrap (around the ellipse), `h` across it.
    pub size: Size,
    /// Desired distance between cuts; the column width is adjusted to fill `w` evenly.
    pub cut_spacing: f64,
    /// Number of cuts across the height.
    pub h_cut_count: usize,
    pub thickness: f64,
    pub invert_notches: bool,
    /// Cut a hole at mid-height in every other column, for a stiffening rib.
    pub central_rib: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceLayout {
    pub primitives: Vec<Primitive>,
    /// Column boundaries along the wrap: strictly increasing, from `0` to the panel width.
    pub notch_edges: Vec<f64>,
    /// Per column, whether its top and bottom edges are inset.
    pub insets: Vec<bool>,
}

impl SurfaceLayout {
    pub fn columns(&self) -> usize {
        self.insets.len()
    }
}

impl CurvedSurface {
    /// Odd number of columns closest to (at least) `w / cut_spacing`.
    pub fn w_cut_count(w: f64, cut_spacing: f64) -> usize {
        let count = (w / cut_spacing).floor() as usize;
        if count % 2 == 0 { count + 1 } else { count }
    }

    pub fn validate(&self) -> Result<(), BoxError> {
        BoxError::check_dimension("surface width", self.size.w)?;
        BoxError::check_dimension("surface height", self.size.h)?;
        BoxError::check_dimension("cut spacing", self.cut_spacing)?;
        BoxError::check_dimension("thickness", self.thickness)?;
        if self.h_cut_count < 1 {
            return Err(BoxError::InvalidCutCount { count: self.h_cut_count, reason: "at least one cut is required" });
        }
        if self.central_rib && self.h_cut_count % 2 == 1 {
            return Err(BoxError::InvalidCutCount { count: self.h_cut_count, reason: "a central rib requires an even cut count" });
        }
        Ok(())
    }

    /// Cut lines for the panel with its top-left corner at `top_left`.
    pub fn layout(&self, top_left: R2<f64>) -> Result<SurfaceLayout, BoxError> {
        self.validate()?;
        let Size { w, h } = self.size;
        let rows = self.h_cut_count;
        let columns = Self::w_cut_count(w, self.cut_spacing);

        let width = R2::new(w, 0.);
        let height = R2::new(0., h);
        let x_spacing = R2::new(w / columns as f64, 0.);
        let y_spacing = R2::new(0., self.cut_spacing);
        let cut = height / rows as f64 - y_spacing;
        let plate = R2::new(0., self.thickness);
        let rib = self.central_rib && rows % 2 == 0;
        debug!("surface {}x{}: {} columns of {:.3}, {} rows of {:.3}", w, h, columns, x_spacing.x, rows, cut.y);
        if cut.y <= 0. {
            warn!("cut spacing {} leaves no room for {} cuts across {}", self.cut_spacing, rows, h);
        }

        let mut primitives = Vec::new();
        let mut line = |from: R2<f64>, to: R2<f64>| primitives.push(Primitive::line(from, to));
        let mut notch_edges = Vec::with_capacity(columns + 1);
        let mut insets = Vec::with_capacity(columns);
        let mut top_cuts = Vec::with_capacity(columns);
        let mut bottom_cuts = Vec::with_capacity(columns);

        for col in 0..columns {
            let notch = is_notch(col, self.invert_notches);
            let inset = if notch { plate } else { R2::default() };
            insets.push(notch);

            // A-column: cuts along the column boundary, half a cut at each edge
            let a_col = top_left + x_spacing * col as f64;
            notch_edges.push(x_spacing.x * col as f64);
            if col > 0 {
                line(a_col, a_col + cut / 2.);
                for j in 0..rows - 1 {
                    let pos = a_col + cut / 2. + y_spacing + (cut + y_spacing) * j as f64;
                    line(pos, pos + cut);
                }
                line(a_col + height - cut / 2., a_col + height);
            }

            // B-column: full cuts mid-column, offset by half a cut, drawn bottom-up
            let b_col = a_col + x_spacing / 2.;
            for j in (0..rows).rev() {
                let mut end = b_col + y_spacing / 2. + (cut + y_spacing) * j as f64;
                let mut start = end + cut;
                if rib && col % 2 == 1 {
                    let hole = start + (y_spacing - plate - x_spacing) / 2.;
                    if j == rows / 2 - 1 {
                        start = start - plate / 2.;
                        line(hole + plate + x_spacing, hole + plate);
                        line(hole, hole + x_spacing);
                    } else if j == rows / 2 {
                        end = end + plate / 2.;
                    }
                }
                if j == 0 {
                    end = end + inset;
                }
                if j == rows - 1 {
                    start = start - inset;
                }
                line(start, end);
            }

            top_cuts.push((a_col + inset, a_col + inset + x_spacing));
            bottom_cuts.push((a_col + height - inset, a_col + height - inset + x_spacing));
        }

        // Outline, counter-clockwise from the bottom-right corner
        for (from, to) in bottom_cuts.into_iter().rev() {
            line(to, from);
        }
        line(top_left + height, top_left);
        for (from, to) in top_cuts {
            line(from, to);
        }
        line(top_left + width, top_left + width + height);

        notch_edges.push(w);
        Ok(SurfaceLayout { primitives, notch_edges, insets })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_log::test;

    use super::*;

    fn surface(w: f64, h: f64, cut_spacing: f64, h_cut_count: usize) -> CurvedSurface {
        CurvedSurface {
            size: Size { w, h },
            cut_spacing,
            h_cut_count,
            thickness: 3.,
            invert_notches: false,
            central_rib: false,
        }
    }

    fn lines(layout: &SurfaceLayout) -> Vec<(R2<f64>, R2<f64>)> {
        layout.primitives.iter().filter_map(|p| match p {
            Primitive::Line { from, to } => Some((*from, *to)),
            _ => None,
        }).collect()
    }

    #[test]
    fn test_w_cut_count() {
        assert_eq!(CurvedSurface::w_cut_count(94., 1.5), 63);
        assert_eq!(CurvedSurface::w_cut_count(10., 2.), 5);
        assert_eq!(CurvedSurface::w_cut_count(12., 2.), 7);
        assert_eq!(CurvedSurface::w_cut_count(1., 2.), 1);
    }

    #[test]
    fn test_notch_edges() {
        let layout = surface(94., 20., 1.5, 3).layout(R2::new(0., 0.)).unwrap();
        let edges = &layout.notch_edges;
        assert!(layout.columns() >= 62);
        assert_eq!(layout.columns() % 2, 1);
        assert_eq!(edges.len(), layout.columns() + 1);
        assert_eq!(edges[0], 0.);
        assert_eq!(*edges.last().unwrap(), 94.);
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(edges[1], 94. / 63., epsilon = 1e-12);
    }

    #[test]
    fn test_notch_edges_relative_to_panel() {
        let layout = surface(10., 6., 2., 2).layout(R2::new(4., 7.)).unwrap();
        assert_eq!(layout.notch_edges, vec![0., 2., 4., 6., 8., 10.]);
    }

    #[test]
    fn test_line_count() {
        // 5 columns, 2 rows: A-columns 4 × 3, B-columns 5 × 2, outline 2 × 5 + 2
        let s = surface(10., 6., 2., 2);
        assert_eq!(s.layout(R2::new(0., 0.)).unwrap().primitives.len(), 12 + 10 + 12);
        // Rib holes in columns 1 and 3 add two lines each
        let s = CurvedSurface { central_rib: true, ..s };
        assert_eq!(s.layout(R2::new(0., 0.)).unwrap().primitives.len(), 12 + 10 + 12 + 4);
    }

    #[test]
    fn test_insets() {
        let s = surface(10., 6., 2., 2);
        let layout = s.layout(R2::new(0., 0.)).unwrap();
        assert_eq!(layout.insets, vec![false, true, false, true, false]);
        let lines = lines(&layout);
        // Top edge of the first inset column sits one thickness below the panel edge
        assert!(lines.contains(&(R2::new(2., 3.), R2::new(4., 3.))));
        assert!(lines.contains(&(R2::new(0., 0.), R2::new(2., 0.))));
        // Bottom edges are drawn right to left
        assert!(lines.contains(&(R2::new(4., 3.), R2::new(2., 3.))));

        let inverted = CurvedSurface { invert_notches: true, ..s }.layout(R2::new(0., 0.)).unwrap();
        assert_eq!(inverted.insets, vec![true, false, true, false, true]);
    }

    #[test]
    fn test_within_panel() {
        let s = CurvedSurface { central_rib: true, ..surface(30., 20., 1.5, 4) };
        let top_left = R2::new(5., 5.);
        let layout = s.layout(top_left).unwrap();
        for (from, to) in lines(&layout) {
            for p in [from, to] {
                assert!(p.x >= 5. - 1e-9 && p.x <= 35. + 1e-9, "{}", p);
                assert!(p.y >= 5. - 1e-9 && p.y <= 25. + 1e-9, "{}", p);
            }
        }
    }

    #[test]
    fn test_single_row_insets_both_ends() {
        let layout = surface(10., 20., 2., 1).layout(R2::new(0., 0.)).unwrap();
        let lines = lines(&layout);
        // B-cut of inset column 1, from the bottom inset edge up to the top inset edge
        assert!(lines.contains(&(R2::new(3., 16.), R2::new(3., 4.))));
    }

    #[test]
    fn test_invalid() {
        let central_rib_odd = CurvedSurface { central_rib: true, ..surface(10., 6., 2., 3) };
        assert!(matches!(central_rib_odd.layout(R2::new(0., 0.)), Err(BoxError::InvalidCutCount { count: 3, .. })));
        assert!(matches!(surface(10., 6., 2., 0).layout(R2::new(0., 0.)), Err(BoxError::InvalidCutCount { count: 0, .. })));
        assert!(matches!(surface(0., 6., 2., 2).layout(R2::new(0., 0.)), Err(BoxError::InvalidDimension { .. })));
        assert!(matches!(surface(10., 6., -2., 2).layout(R2::new(0., 0.)), Err(BoxError::InvalidDimension { .. })));
    }
}
