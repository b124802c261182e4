//! Core types for the layout engines

use serde::Deserialize;

use crate::palette;

/// A 2D point in the output coordinate system (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin along `angle` radians,
    /// measured clockwise from 12 o'clock
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.sin(), -radius * angle.cos())
    }

    /// Straight-line midpoint between two points
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotate clockwise around the origin by `angle` radians
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

/// One labeled step of the flow.
///
/// Only `label` is required; every other field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Segment {
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Fill override; wins over the palette
    pub color: Option<String>,
}

impl Segment {
    /// Create a segment with only a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the fill override
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach a description (carried, not rendered)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an icon name (carried, not rendered)
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A label centered on `position` along both axes
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub position: Point,
}

/// Fill color for the segment at `index`.
///
/// The segment's own color wins; otherwise the palette is reused cyclically.
pub fn fill_color(segment: &Segment, index: usize, colors: &[String]) -> String {
    match &segment.color {
        Some(color) => color.clone(),
        None => palette::cycle(colors, index).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_polar_zero_is_top() {
        assert!(close(Point::polar(10.0, 0.0), Point::new(0.0, -10.0)));
        assert!(close(Point::polar(10.0, FRAC_PI_2), Point::new(10.0, 0.0)));
        assert!(close(Point::polar(10.0, PI), Point::new(0.0, 10.0)));
    }

    #[test]
    fn test_rotate_matches_polar() {
        let p = Point::polar(5.0, 0.3);
        assert!(close(p.rotate(0.4), Point::polar(5.0, 0.7)));
    }

    #[test]
    fn test_fill_color_cycles() {
        let colors = vec!["a".to_string(), "b".to_string()];
        let seg = Segment::new("x");
        assert_eq!(fill_color(&seg, 0, &colors), "a");
        assert_eq!(fill_color(&seg, 1, &colors), "b");
        assert_eq!(fill_color(&seg, 2, &colors), "a");
    }

    #[test]
    fn test_fill_color_override_wins() {
        let colors = vec!["a".to_string()];
        let seg = Segment::new("x").with_color("red");
        assert_eq!(fill_color(&seg, 7, &colors), "red");
    }

    #[test]
    fn test_fill_color_empty_palette() {
        let seg = Segment::new("x");
        assert_eq!(fill_color(&seg, 3, &[]), palette::CATEGORY10[0]);
    }
}
