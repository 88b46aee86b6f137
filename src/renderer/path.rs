//! SVG path data for angle markers

use crate::layout::{AngleArc, Point};

/// A segment in an SVG path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc to `end`
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        /// true = towards increasing angles in SVG coordinates (y-down)
        sweep: bool,
    },
    Close,
}

/// Convert segments to an SVG path `d` attribute string
pub fn to_svg_d(segments: &[PathSegment]) -> String {
    let mut d = String::new();

    for seg in segments {
        if !d.is_empty() {
            d.push(' ');
        }
        match seg {
            PathSegment::MoveTo(p) => {
                d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
            }
            PathSegment::LineTo(p) => {
                d.push_str(&format!("L{:.2} {:.2}", p.x, p.y));
            }
            PathSegment::ArcTo {
                end,
                radius,
                large_arc,
                sweep,
            } => {
                let large = if *large_arc { 1 } else { 0 };
                let sw = if *sweep { 1 } else { 0 };
                // A rx ry x-axis-rotation large-arc-flag sweep-flag x y
                d.push_str(&format!(
                    "A{:.2} {:.2} 0 {} {} {:.2} {:.2}",
                    radius, radius, large, sw, end.x, end.y
                ));
            }
            PathSegment::Close => d.push('Z'),
        }
    }

    d
}

/// Open arc from the previous-side ray to the next-side ray
pub fn arc_segments(arc: &AngleArc) -> Vec<PathSegment> {
    vec![
        PathSegment::MoveTo(arc.start),
        PathSegment::ArcTo {
            end: arc.end,
            radius: arc.radius,
            large_arc: arc.large_arc,
            sweep: arc.sweep,
        },
    ]
}

/// Closed wedge between the vertex and the arc, for a filled marker
pub fn wedge_segments(arc: &AngleArc) -> Vec<PathSegment> {
    let mut segments = vec![PathSegment::MoveTo(arc.center), PathSegment::LineTo(arc.start)];
    segments.extend(arc_segments(arc).into_iter().skip(1));
    segments.push(PathSegment::Close);
    segments
}
