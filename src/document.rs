//! Chart documents: segments plus per-layout options in TOML
//!
//! ```toml
//! layout = "radial"
//!
//! [radial]
//! inner_radius = 90
//!
//! [[segments]]
//! label = "Plan"
//!
//! [[segments]]
//! label = "Build"
//! color = "#2ca02c"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::DocumentError;
use crate::layout::{RadialOptions, Segment, StraightOptions};

/// Which layout engine renders a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Straight,
    Radial,
}

/// A parsed chart document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartDocument {
    pub layout: LayoutKind,
    pub straight: StraightOptions,
    pub radial: RadialOptions,
    pub segments: Vec<Segment>,
}

impl ChartDocument {
    /// Load a document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a document from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }
}
