//! Color palettes for segment fills
//!
//! A palette is an ordered list of colors reused cyclically by segment index.
//! Palettes can be loaded from TOML so a chart can be re-themed without
//! touching the chart document.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The ten-color qualitative palette used when no colors are configured
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Palette defines no colors")]
    Empty,
}

/// An ordered color palette
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub colors: Vec<String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: Vec<String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load palette from TOML string
    pub fn from_toml(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        if parsed.colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

}

/// Color at `index`, wrapping around `colors`. An empty list falls back to
/// the first category10 color.
pub fn cycle(colors: &[String], index: usize) -> &str {
    match colors.len() {
        0 => CATEGORY10[0],
        len => &colors[index % len],
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            name: Some("category10".to_string()),
            description: None,
            colors: CATEGORY10.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.colors.len(), 10);
        assert_eq!(cycle(&palette.colors, 0), "#1f77b4");
        assert_eq!(cycle(&palette.colors, 10), "#1f77b4");
        assert_eq!(cycle(&palette.colors, 13), "#d62728");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
colors = ["#000000", "#ffffff"]

[metadata]
name = "Mono"
description = "Black and white"
"##;
        let palette = Palette::from_toml(toml_str).expect("Should parse");
        assert_eq!(palette.name, Some("Mono".to_string()));
        assert_eq!(palette.description, Some("Black and white".to_string()));
        assert_eq!(cycle(&palette.colors, 3), "#ffffff");
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let palette = Palette::from_toml(r##"colors = ["#111111"]"##).expect("Should parse");
        assert_eq!(palette.name, None);
        assert_eq!(cycle(&palette.colors, 5), "#111111");
        assert_eq!(palette.colors, vec!["#111111".to_string()]);
    }

    #[test]
    fn test_cycle_empty_falls_back() {
        assert_eq!(cycle(&[], 4), CATEGORY10[0]);
    }

    #[test]
    fn test_empty_palette_error() {
        let result = Palette::from_toml("colors = []");
        assert!(matches!(result, Err(PaletteError::Empty)));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Palette::from_toml("this is not valid toml {{{{");
        assert!(matches!(result, Err(PaletteError::ParseError(_))));
    }
}
