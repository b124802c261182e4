//! SVG renderer for retained scenes
//!
//! This module serializes a [`Scene`](crate::scene::Scene) into an SVG string
//! with CSS classes for styling.

pub mod config;
pub mod path;
pub mod svg;

pub use config::{LayerClasses, SvgConfig};
pub use path::PathBuilder;
pub use svg::render_svg;
