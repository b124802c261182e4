//! Chevron Chart - flow charts built from arrow-shaped segments
//!
//! This library lays out an ordered list of labeled segments either as a
//! horizontal chain of chevrons or as a ring of notched wedges, reconciles the
//! geometry into a retained scene, and serializes that scene to SVG.
//!
//! # Example
//!
//! ```rust
//! use chevron_chart::{build_straight_chart, Chart, Segment, StraightOptions, SvgConfig};
//!
//! let chart = build_straight_chart(StraightOptions::new().with_gap(10.0));
//! let svg = chart.to_svg(&[Segment::new("Plan"), Segment::new("Ship")], &SvgConfig::default());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Ship"));
//! ```

pub mod chart;
pub mod document;
pub mod error;
pub mod layout;
pub mod palette;
pub mod renderer;
pub mod responsive;
pub mod scene;

pub use chart::{build_radial_chart, build_straight_chart, Chart, RadialChart, StraightChart};
pub use document::{ChartDocument, LayoutKind};
pub use error::DocumentError;
pub use layout::{RadialConfig, RadialOptions, Segment, StraightConfig, StraightOptions};
pub use palette::{Palette, PaletteError};
pub use renderer::{render_svg, SvgConfig};
pub use responsive::{ResizeEvents, Subscription};
pub use scene::{Container, RenderStats, Scene};

use thiserror::Error;

/// Errors that can occur in the document render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading or parsing the chart document
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Error loading a palette
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Palette used when the document sets no colors
    pub palette: Option<Palette>,
    /// Layout override; the document's own choice applies when unset
    pub layout: Option<LayoutKind>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the fallback palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Force a layout regardless of the document
    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = Some(layout);
        self
    }
}

/// Render a TOML chart document to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use chevron_chart::render;
///
/// let svg = render(r#"
///     layout = "radial"
///
///     [[segments]]
///     label = "Plan"
///
///     [[segments]]
///     label = "Do"
/// "#).unwrap();
///
/// assert!(svg.contains("cc-wedge"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render a TOML chart document to SVG with custom configuration
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let doc = ChartDocument::from_toml(source)?;
    Ok(render_document(&doc, config))
}

/// Render an already parsed document
pub fn render_document(doc: &ChartDocument, config: &RenderConfig) -> String {
    let fallback = config.palette.as_ref().map(|p| p.colors.clone());
    match config.layout.unwrap_or(doc.layout) {
        LayoutKind::Straight => {
            let mut options = doc.straight.clone();
            if options.colors.is_none() {
                options.colors = fallback;
            }
            build_straight_chart(options).to_svg(&doc.segments, &config.svg)
        }
        LayoutKind::Radial => {
            let mut options = doc.radial.clone();
            if options.colors.is_none() {
                options.colors = fallback;
            }
            build_radial_chart(options).to_svg(&doc.segments, &config.svg)
        }
    }
}
