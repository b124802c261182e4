//! SVG generation from retained scenes

use crate::scene::{Attributes, Node, NodeKind, Scene};

use super::SvgConfig;

/// Accumulates serialized lines for one scene
pub struct SvgBuilder {
    config: SvgConfig,
    surface: String,
    lines: Vec<String>,
    depth: usize,
}

impl SvgBuilder {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            surface: String::new(),
            lines: vec![],
            depth: 1,
        }
    }

    fn push_line(&mut self, line: String) {
        let indent = self
            .config
            .indent
            .as_deref()
            .map(|unit| unit.repeat(self.depth))
            .unwrap_or_default();
        self.lines.push(format!("{}{}", indent, line));
    }

    /// Set the root element's attributes
    pub fn set_surface(&mut self, attrs: &Attributes) {
        self.surface = format_attrs(attrs);
    }

    /// Add a shape or text node
    pub fn add_node(&mut self, node: &Node) {
        let tag = node.kind.tag();
        let class = self.config.class_name(node.class);
        let attrs = format_attrs(&node.attrs);
        let line = match (node.kind, &node.text) {
            (NodeKind::Text, Some(text)) => format!(
                r#"<{tag} class="{class}"{attrs}>{}</{tag}>"#,
                escape_xml(text)
            ),
            _ => format!(r#"<{tag} class="{class}"{attrs}/>"#),
        };
        self.push_line(line);
    }

    /// Open a `<g>` for a layer
    pub fn start_group(&mut self, class: &str) {
        let class = self.config.class_name(class);
        self.push_line(format!(r#"<g class="{class}">"#));
        self.depth += 1;
    }

    pub fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push_line("</g>".to_string());
    }

    /// Join everything under the root `<svg>` element
    pub fn build(self) -> String {
        let sep = if self.config.indent.is_some() { "\n" } else { "" };

        let mut parts = Vec::with_capacity(self.lines.len() + 3);
        if self.config.xml_declaration {
            parts.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
        }
        parts.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"{}>"#,
            self.surface
        ));
        parts.extend(self.lines);
        parts.push("</svg>".to_string());
        parts.join(sep)
    }
}

/// Render a scene to an SVG string: shapes first, labels on top
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.set_surface(&scene.surface);

    builder.start_group(&config.layers.shapes);
    for node in &scene.shapes {
        builder.add_node(node);
    }
    builder.end_group();

    builder.start_group(&config.layers.labels);
    for node in &scene.labels {
        builder.add_node(node);
    }
    builder.end_group();

    builder.build()
}

/// Format attributes as a string of ` name="value"` pairs
fn format_attrs(attrs: &Attributes) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, escape_xml(value)))
        .collect()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
