//! Path data generation
//!
//! Converts outlines into SVG path `d` attribute strings.

use crate::layout::Point;

/// A segment of a path under construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Close path back to start
    Close,
}

/// Incremental path builder
#[derive(Debug, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Build a closed path through every point of `outline`
    pub fn closed(outline: &[Point]) -> Self {
        let mut builder = Self::new();
        if let Some((first, rest)) = outline.split_first() {
            builder.move_to(*first);
            for p in rest {
                builder.line_to(*p);
            }
            builder.close();
        }
        builder
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push_str(&format!("M{},{}", format_number(p.x), format_number(p.y)));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!("L{},{}", format_number(p.x), format_number(p.y)));
                }
                PathSegment::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub fn format_number(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
