//! SVG rendering for box drawings.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use anyhow::Result;
use ellbox_core::{BoxDrawing, EllipseCache, PartKind, Primitive, R2};

/// SVG rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Margin around the drawing, in mm
    pub padding: f64,
    /// Stroke width for cut and guide lines, in mm
    pub stroke_width: f64,
    /// Font size for labels, in mm
    pub font_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 5.0,
            stroke_width: 0.1,
            font_size: 4.0,
        }
    }
}

/// Cut lines are black, guides green
fn stroke(kind: PartKind) -> &'static str {
    match kind {
        PartKind::Guide => "#00ff00",
        _ => "#000000",
    }
}

fn class(kind: PartKind) -> &'static str {
    match kind {
        PartKind::Body => "body",
        PartKind::Lid => "lid",
        PartKind::Guide => "guide",
        PartKind::Side => "side",
        PartKind::InnerRib => "inner-rib",
        PartKind::OuterRib => "outer-rib",
    }
}

/// Render a box drawing to an SVG string, in mm
pub fn render_svg(drawing: &BoxDrawing, config: &RenderConfig, cache: &mut EllipseCache) -> Result<String> {
    let (min, max) = compute_bounds(drawing, cache)?;
    let pad = config.padding;
    let view_min = min - R2::new(pad, pad);
    let view_size = max - min + R2::new(2. * pad, 2. * pad);

    let mut svg = String::new();
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}mm" height="{}mm" viewBox="{} {} {} {}">"#,
        view_size.x, view_size.y, view_min.x, view_min.y, view_size.x, view_size.y
    )?;

    for part in &drawing.parts {
        writeln!(
            &mut svg,
            r#"  <g class="{}" stroke="{}" stroke-width="{}" fill="none">"#,
            class(part.kind), stroke(part.kind), config.stroke_width
        )?;
        for primitive in &part.primitives {
            match primitive {
                Primitive::Line { from, to } => {
                    writeln!(&mut svg, r#"    <path d="M {} {} L {} {}"/>"#, from.x, from.y, to.x, to.y)?;
                }
                Primitive::Arc { center, rx, ry, start_angle, end_angle } => {
                    let at = |theta: f64| *center + R2::new(rx * theta.cos(), ry * theta.sin());
                    let (start, end) = (at(*start_angle), at(*end_angle));
                    let large_arc = (end_angle - start_angle).rem_euclid(TAU) > PI;
                    writeln!(
                        &mut svg,
                        r#"    <path d="M {} {} A {} {} 0 {} 1 {} {}"/>"#,
                        start.x, start.y, rx, ry, large_arc as u8, end.x, end.y
                    )?;
                }
                Primitive::Label { position, text } => {
                    writeln!(
                        &mut svg,
                        r#"    <text x="{}" y="{}" font-size="{}" text-anchor="middle" stroke="none" fill="{}">{}</text>"#,
                        position.x, position.y, config.font_size, stroke(part.kind), text
                    )?;
                }
            }
        }
        writeln!(&mut svg, "  </g>")?;
    }

    writeln!(&mut svg, "</svg>")?;
    Ok(svg)
}

/// Points sampled along each arc, for bounds
const BOUNDS_SAMPLES: f64 = 16.;

/// Compute the bounding box of all primitives, as (min, max) corners
fn compute_bounds(drawing: &BoxDrawing, cache: &mut EllipseCache) -> Result<(R2<f64>, R2<f64>)> {
    let mut min = R2::new(f64::INFINITY, f64::INFINITY);
    let mut max = R2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut add = |p: R2<f64>| {
        min = R2::new(min.x.min(p.x), min.y.min(p.y));
        max = R2::new(max.x.max(p.x), max.y.max(p.y));
    };

    for primitive in drawing.parts.iter().flat_map(|part| &part.primitives) {
        match primitive.segment(cache)? {
            Some(segment) => {
                add(segment.start());
                add(segment.end());
                let length = segment.length();
                if length > 0. {
                    for p in segment.subdivide(length / BOUNDS_SAMPLES, 0.)?.points {
                        add(p.point);
                    }
                }
            }
            None => {
                if let Primitive::Label { position, .. } = primitive {
                    add(*position);
                }
            }
        }
    }

    if min.x > max.x {
        return Ok((R2::default(), R2::default()));
    }
    Ok((min, max))
}
