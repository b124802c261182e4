//! Radial layout: annular wedges with chevron-notched edges around a ring
//!
//! Angles are in radians, measured clockwise from 12 o'clock around the
//! origin. Each wedge spans `2π/N` minus a symmetric gap. Its two radial
//! edges are replaced by a notch: the midpoint of each edge rotated forward
//! by `rotate_degrees`, which points the wedge in the direction of flow.

use std::f64::consts::TAU;

use tracing::trace;

use super::config::RadialConfig;
use super::types::{fill_color, LabelPlacement, Point, Segment};

/// Straight segments used to approximate each arc
pub const ARC_SEGMENTS: usize = 36;

/// Vertices in every wedge outline
pub const WEDGE_VERTICES: usize = 2 * ARC_SEGMENTS + 4;

/// One laid-out wedge
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub idx: usize,
    /// Closed outline; ends on the outer-start corner, which closes back
    /// onto the first outer arc sample
    pub vertices: Vec<Point>,
    /// Angle of the label, offset included
    pub label_angle: f64,
    pub color: String,
    pub label: LabelPlacement,
}

/// Geometry for a whole radial chart
#[derive(Debug, Clone, PartialEq)]
pub struct RadialLayout {
    pub width: f64,
    pub height: f64,
    pub wedges: Vec<Wedge>,
}

impl RadialLayout {
    /// viewBox centered on the ring's origin
    pub fn view_box(&self) -> [f64; 4] {
        [-self.width / 2.0, -self.height / 2.0, self.width, self.height]
    }
}

/// `segments + 1` evenly spaced values from `start` to `end`, both included
pub fn angular_range(start: f64, end: f64, segments: usize) -> Vec<f64> {
    if segments == 0 {
        return vec![start];
    }
    let step = (end - start) / segments as f64;
    (0..=segments).map(|k| start + k as f64 * step).collect()
}

/// Lay out `segments` around the ring. An empty list yields no wedges.
pub fn layout(segments: &[Segment], config: &RadialConfig) -> RadialLayout {
    let count = segments.len();
    let wedges = segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| wedge(idx, count, segment, config))
        .collect();

    RadialLayout {
        width: config.width,
        height: config.height,
        wedges,
    }
}

/// Build the wedge for `segment` at position `idx` of `count`.
///
/// `count` must be non-zero.
pub fn wedge(idx: usize, count: usize, segment: &Segment, config: &RadialConfig) -> Wedge {
    let step = TAU / count as f64;
    let start = idx as f64 * step;
    let end = start + step;

    let outer_r = config.outer_radius;
    let inner_r = config.inner_radius;

    let gap = config.gap_degrees.to_radians();
    let inner_gap = gap * (inner_r / outer_r);
    let (a0, a1) = (start + gap / 2.0, end - gap / 2.0);
    let (b0, b1) = (start + inner_gap / 2.0, end - inner_gap / 2.0);

    let outer_start = Point::polar(outer_r, a0);
    let outer_end = Point::polar(outer_r, a1);
    let inner_start = Point::polar(inner_r, b0);
    let inner_end = Point::polar(inner_r, b1);

    let rotate = config.rotate_degrees.to_radians();
    let start_notch = outer_start.midpoint(inner_start).rotate(rotate);
    let end_notch = outer_end.midpoint(inner_end).rotate(rotate);

    let outer_arc = angular_range(a0, a1, ARC_SEGMENTS);
    let inner_arc = angular_range(b0, b1, ARC_SEGMENTS);

    let mut vertices = Vec::with_capacity(WEDGE_VERTICES);
    vertices.extend(outer_arc[1..].iter().map(|&a| Point::polar(outer_r, a)));
    vertices.push(end_notch);
    vertices.push(inner_end);
    vertices.extend(
        inner_arc[..ARC_SEGMENTS]
            .iter()
            .rev()
            .map(|&a| Point::polar(inner_r, a)),
    );
    vertices.push(start_notch);
    vertices.push(outer_start);

    let label_angle = (a0 + a1) / 2.0 + config.label_offset_deg.to_radians();
    let label = LabelPlacement {
        text: segment.label.clone(),
        position: Point::polar((inner_r + outer_r) / 2.0, label_angle),
    };
    trace!(idx, a0, a1, label_angle, "wedge");

    Wedge {
        idx,
        vertices,
        label_angle,
        color: fill_color(segment, idx, &config.colors),
        label,
    }
}
