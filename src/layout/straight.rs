//! Straight layout: chevrons chained left to right
//!
//! Each chevron occupies `tail_point + width + head_point` horizontally. A
//! cursor marks the x where the body of the current chevron begins; the back
//! edge sits `tail_point` to its left and the head tip `width + head_point`
//! to its right. Notched chevrons carry a tail vertex at the cursor so their
//! back interlocks with the previous chevron's head.

use tracing::trace;

use super::config::StraightConfig;
use super::types::{fill_color, LabelPlacement, Point, Segment};

/// One laid-out chevron
#[derive(Debug, Clone, PartialEq)]
pub struct Chevron {
    pub index: usize,
    /// Body start x for this chevron
    pub cursor: f64,
    /// Closed outline; the last vertex returns to the first
    pub vertices: Vec<Point>,
    pub fill: String,
    pub label: LabelPlacement,
}

impl Chevron {
    /// Whether the back edge is straight rather than notched
    pub fn is_flat(&self) -> bool {
        self.vertices.len() == 6
    }

    /// x of the arrow head's point
    pub fn head_tip_x(&self) -> f64 {
        self.vertices[2].x
    }

    /// x where the head begins narrowing (end of the body)
    pub fn head_base_x(&self) -> f64 {
        self.vertices[1].x
    }
}

/// Geometry for a whole straight chart
#[derive(Debug, Clone, PartialEq)]
pub struct StraightLayout {
    pub width: f64,
    pub height: f64,
    pub chevrons: Vec<Chevron>,
}

/// Total canvas width for `count` chevrons
pub fn canvas_width(count: usize, config: &StraightConfig) -> f64 {
    let pitch = config.width + config.head_point + config.gap;
    config.tail_point + count as f64 * pitch - config.gap + config.tail_point
}

/// Lay out `segments` in order along the horizontal axis
pub fn layout(segments: &[Segment], config: &StraightConfig) -> StraightLayout {
    let pitch = config.width + config.head_point + config.gap;
    let mut cursor = config.tail_point;
    let mut chevrons = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        let flat = index == 0 && config.flat_first_arrow;
        let vertices = outline(cursor, flat, config);
        let start = cursor - config.tail_point;
        let label = LabelPlacement {
            text: segment.label.clone(),
            position: Point::new(
                start + config.tail_point + config.width / 2.0,
                config.height / 2.0,
            ),
        };
        trace!(index, cursor, flat, "chevron");
        chevrons.push(Chevron {
            index,
            cursor,
            vertices,
            fill: fill_color(segment, index, &config.colors),
            label,
        });
        cursor += pitch;
    }

    StraightLayout {
        width: canvas_width(segments.len(), config),
        height: config.height,
        chevrons,
    }
}

fn outline(cursor: f64, flat: bool, config: &StraightConfig) -> Vec<Point> {
    let back = cursor - config.tail_point;
    let shoulder = cursor + config.width;
    let tip = shoulder + config.head_point;
    let h = config.height;

    let mut points = vec![
        Point::new(back, 0.0),
        Point::new(shoulder, 0.0),
        Point::new(tip, h / 2.0),
        Point::new(shoulder, h),
        Point::new(back, h),
    ];
    if !flat {
        points.push(Point::new(cursor, h / 2.0));
    }
    points.push(Point::new(back, 0.0));
    points
}
