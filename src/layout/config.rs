//! Configuration for the layout engines
//!
//! Each engine has a sparse `*Options` record (every field optional, as read
//! from callers or TOML documents) and a complete `*Config` record produced by
//! [`StraightOptions::resolve`] / [`RadialOptions::resolve`]. Values are taken
//! as-is: zero, negative, or inverted geometry is passed through untouched.

use serde::Deserialize;

use crate::palette::Palette;

/// How stroke segments meet at chevron corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeLinejoin {
    #[default]
    Round,
    Miter,
}

impl StrokeLinejoin {
    /// SVG `stroke-linejoin` value
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeLinejoin::Round => "round",
            StrokeLinejoin::Miter => "miter",
        }
    }
}

/// Fully resolved configuration for the straight layout
#[derive(Debug, Clone, PartialEq)]
pub struct StraightConfig {
    /// Body width of each chevron (excluding head and tail)
    pub width: f64,
    pub height: f64,
    /// Horizontal depth of the arrow head
    pub head_point: f64,
    /// Horizontal depth of the tail notch
    pub tail_point: f64,
    /// Space between consecutive chevrons
    pub gap: f64,
    pub colors: Vec<String>,
    pub text_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub font_family: String,
    pub font_weight: String,
    pub font_size: f64,
    /// Draw the first chevron with a straight back edge
    pub flat_first_arrow: bool,
    pub stroke_linejoin: StrokeLinejoin,
}

impl Default for StraightConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 100.0,
            head_point: 40.0,
            tail_point: 40.0,
            gap: 18.0,
            colors: Palette::default().colors,
            text_color: "#ffffff".to_string(),
            stroke_color: "#ffffff".to_string(),
            stroke_width: 2.0,
            font_family: "sans-serif".to_string(),
            font_weight: "bold".to_string(),
            font_size: 14.0,
            flat_first_arrow: true,
            stroke_linejoin: StrokeLinejoin::Round,
        }
    }
}

/// Sparse options for the straight layout; `None` means "use the default"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StraightOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub head_point: Option<f64>,
    pub tail_point: Option<f64>,
    pub gap: Option<f64>,
    pub colors: Option<Vec<String>>,
    pub text_color: Option<String>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub font_size: Option<f64>,
    pub flat_first_arrow: Option<bool>,
    pub stroke_linejoin: Option<StrokeLinejoin>,
}

impl StraightOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chevron body size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the depth of the arrow head
    pub fn with_head_point(mut self, head_point: f64) -> Self {
        self.head_point = Some(head_point);
        self
    }

    /// Set the depth of the tail notch
    pub fn with_tail_point(mut self, tail_point: f64) -> Self {
        self.tail_point = Some(tail_point);
        self
    }

    /// Set the space between chevrons
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the fill palette, reused cyclically
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the label color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set stroke color and width together
    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke_color = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    /// Set font family, weight and size together
    pub fn with_font(mut self, family: impl Into<String>, weight: impl Into<String>, size: f64) -> Self {
        self.font_family = Some(family.into());
        self.font_weight = Some(weight.into());
        self.font_size = Some(size);
        self
    }

    /// Give the first chevron a straight back edge
    pub fn with_flat_first_arrow(mut self, flat: bool) -> Self {
        self.flat_first_arrow = Some(flat);
        self
    }

    /// Set how outline strokes meet at corners
    pub fn with_stroke_linejoin(mut self, linejoin: StrokeLinejoin) -> Self {
        self.stroke_linejoin = Some(linejoin);
        self
    }

    /// Merge these options over the documented defaults
    pub fn resolve(&self) -> StraightConfig {
        let d = StraightConfig::default();
        StraightConfig {
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            head_point: self.head_point.unwrap_or(d.head_point),
            tail_point: self.tail_point.unwrap_or(d.tail_point),
            gap: self.gap.unwrap_or(d.gap),
            colors: self.colors.clone().unwrap_or(d.colors),
            text_color: self.text_color.clone().unwrap_or(d.text_color),
            stroke_color: self.stroke_color.clone().unwrap_or(d.stroke_color),
            stroke_width: self.stroke_width.unwrap_or(d.stroke_width),
            font_family: self.font_family.clone().unwrap_or(d.font_family),
            font_weight: self.font_weight.clone().unwrap_or(d.font_weight),
            font_size: self.font_size.unwrap_or(d.font_size),
            flat_first_arrow: self.flat_first_arrow.unwrap_or(d.flat_first_arrow),
            stroke_linejoin: self.stroke_linejoin.unwrap_or(d.stroke_linejoin),
        }
    }
}

/// Fully resolved configuration for the radial layout
#[derive(Debug, Clone, PartialEq)]
pub struct RadialConfig {
    /// Viewport width; also the viewBox width
    pub width: f64,
    /// Viewport height; also the viewBox height
    pub height: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Angular gap between wedges at the outer radius
    pub gap_degrees: f64,
    /// Rotation applied to the edge midpoints to form the notches
    pub rotate_degrees: f64,
    pub label_offset_deg: f64,
    pub colors: Vec<String>,
    pub text_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub font_family: String,
    pub font_weight: String,
    pub font_size: f64,
    /// Keep the rendered surface square to the container's smaller side
    pub responsive: bool,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            inner_radius: 120.0,
            outer_radius: 200.0,
            gap_degrees: 2.0,
            rotate_degrees: 4.0,
            label_offset_deg: 0.0,
            colors: Palette::default().colors,
            text_color: "#ffffff".to_string(),
            stroke_color: "#ffffff".to_string(),
            stroke_width: 2.0,
            font_family: "sans-serif".to_string(),
            font_weight: "bold".to_string(),
            font_size: 14.0,
            responsive: false,
        }
    }
}

/// Sparse options for the radial layout; `None` means "use the default"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RadialOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub inner_radius: Option<f64>,
    pub outer_radius: Option<f64>,
    pub gap_degrees: Option<f64>,
    pub rotate_degrees: Option<f64>,
    pub label_offset_deg: Option<f64>,
    pub colors: Option<Vec<String>>,
    pub text_color: Option<String>,
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub font_size: Option<f64>,
    pub responsive: Option<bool>,
}

impl RadialOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport (and viewBox) size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the inner and outer ring radii
    pub fn with_radii(mut self, inner: f64, outer: f64) -> Self {
        self.inner_radius = Some(inner);
        self.outer_radius = Some(outer);
        self
    }

    /// Set the angular gap between wedges at the outer radius
    pub fn with_gap_degrees(mut self, gap: f64) -> Self {
        self.gap_degrees = Some(gap);
        self
    }

    /// Set how far the edge notches are rotated forward
    pub fn with_rotate_degrees(mut self, rotate: f64) -> Self {
        self.rotate_degrees = Some(rotate);
        self
    }

    /// Shift every label angle by `offset` degrees
    pub fn with_label_offset_deg(mut self, offset: f64) -> Self {
        self.label_offset_deg = Some(offset);
        self
    }

    /// Set the fill palette, reused cyclically
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the label color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set stroke color and width together
    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke_color = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    /// Set font family, weight and size together
    pub fn with_font(mut self, family: impl Into<String>, weight: impl Into<String>, size: f64) -> Self {
        self.font_family = Some(family.into());
        self.font_weight = Some(weight.into());
        self.font_size = Some(size);
        self
    }

    /// Square the surface to the container on resize
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    /// Merge these options over the documented defaults
    pub fn resolve(&self) -> RadialConfig {
        let d = RadialConfig::default();
        RadialConfig {
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            inner_radius: self.inner_radius.unwrap_or(d.inner_radius),
            outer_radius: self.outer_radius.unwrap_or(d.outer_radius),
            gap_degrees: self.gap_degrees.unwrap_or(d.gap_degrees),
            rotate_degrees: self.rotate_degrees.unwrap_or(d.rotate_degrees),
            label_offset_deg: self.label_offset_deg.unwrap_or(d.label_offset_deg),
            colors: self.colors.clone().unwrap_or(d.colors),
            text_color: self.text_color.clone().unwrap_or(d.text_color),
            stroke_color: self.stroke_color.clone().unwrap_or(d.stroke_color),
            stroke_width: self.stroke_width.unwrap_or(d.stroke_width),
            font_family: self.font_family.clone().unwrap_or(d.font_family),
            font_weight: self.font_weight.clone().unwrap_or(d.font_weight),
            font_size: self.font_size.unwrap_or(d.font_size),
            responsive: self.responsive.unwrap_or(d.responsive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_straight_config() {
        let config = StraightOptions::new().resolve();
        assert_eq!(config, StraightConfig::default());
        assert_eq!(config.width, 150.0);
        assert_eq!(config.head_point, 40.0);
        assert_eq!(config.gap, 18.0);
        assert!(config.flat_first_arrow);
        assert_eq!(config.stroke_linejoin, StrokeLinejoin::Round);
        assert_eq!(config.colors.len(), 10);
    }

    #[test]
    fn test_explicit_false_and_zero_are_kept() {
        let config = StraightOptions::new()
            .with_flat_first_arrow(false)
            .with_gap(0.0)
            .with_stroke("none", 0.0)
            .resolve();
        assert!(!config.flat_first_arrow);
        assert_eq!(config.gap, 0.0);
        assert_eq!(config.stroke_width, 0.0);
        assert_eq!(config.stroke_color, "none");
    }

    #[test]
    fn test_straight_builder_pattern() {
        let config = StraightOptions::new()
            .with_size(100.0, 50.0)
            .with_head_point(20.0)
            .with_tail_point(20.0)
            .with_colors(["red", "blue"])
            .with_font("serif", "normal", 12.0)
            .with_stroke_linejoin(StrokeLinejoin::Miter)
            .resolve();
        assert_eq!(config.width, 100.0);
        assert_eq!(config.height, 50.0);
        assert_eq!(config.colors, vec!["red".to_string(), "blue".to_string()]);
        assert_eq!(config.font_family, "serif");
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.stroke_linejoin.as_str(), "miter");
        // untouched fields keep defaults
        assert_eq!(config.gap, 18.0);
    }

    #[test]
    fn test_default_radial_config() {
        let config = RadialOptions::new().resolve();
        assert_eq!(config, RadialConfig::default());
        assert_eq!(config.inner_radius, 120.0);
        assert_eq!(config.outer_radius, 200.0);
        assert!(!config.responsive);
    }

    #[test]
    fn test_radial_degenerate_values_pass_through() {
        let config = RadialOptions::new()
            .with_radii(300.0, 100.0)
            .with_gap_degrees(-5.0)
            .with_responsive(true)
            .resolve();
        assert_eq!(config.inner_radius, 300.0);
        assert_eq!(config.outer_radius, 100.0);
        assert_eq!(config.gap_degrees, -5.0);
        assert!(config.responsive);
    }

    #[test]
    fn test_options_from_toml() {
        let options: StraightOptions = toml::from_str(
            r##"
width = 120
flat_first_arrow = false
stroke_linejoin = "miter"
colors = ["#111111"]
"##,
        )
        .expect("Should parse");
        assert_eq!(options.width, Some(120.0));
        assert_eq!(options.flat_first_arrow, Some(false));
        assert_eq!(options.stroke_linejoin, Some(StrokeLinejoin::Miter));
        assert_eq!(options.height, None);
    }

    #[test]
    fn test_options_reject_unknown_fields() {
        let result: Result<RadialOptions, _> = toml::from_str("inner = 3");
        assert!(result.is_err());
    }
}
