//! Output options for serialized charts

/// CSS classes of the two layer groups, before the class prefix is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerClasses {
    pub shapes: String,
    pub labels: String,
}

impl Default for LayerClasses {
    fn default() -> Self {
        Self {
            shapes: "shapes".to_string(),
            labels: "labels".to_string(),
        }
    }
}

/// How a scene is written out as SVG text
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Emit `<?xml ...?>` ahead of the root element
    pub xml_declaration: bool,
    /// Indentation unit per nesting level; `None` writes one line
    pub indent: Option<String>,
    /// Prepended to every class name, e.g. `cc-` gives `cc-chevron`
    pub class_prefix: Option<String>,
    pub layers: LayerClasses,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: Some("  ".to_string()),
            class_prefix: Some("cc-".to_string()),
            layers: LayerClasses::default(),
        }
    }
}

impl SvgConfig {
    /// Indented output with an XML declaration and `cc-` classes
    pub fn new() -> Self {
        Self::default()
    }

    /// A bare single-line `<svg>` element, suitable for inlining into HTML
    pub fn compact() -> Self {
        Self::default().with_xml_declaration(false).single_line()
    }

    /// Toggle the XML declaration
    pub fn with_xml_declaration(mut self, declaration: bool) -> Self {
        self.xml_declaration = declaration;
        self
    }

    /// Indent nested elements with `unit` per level
    pub fn with_indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = Some(unit.into());
        self
    }

    /// Drop indentation and newlines
    pub fn single_line(mut self) -> Self {
        self.indent = None;
        self
    }

    /// Replace the class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Use bare class names
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Rename the shape and label layer groups
    pub fn with_layer_classes(mut self, shapes: impl Into<String>, labels: impl Into<String>) -> Self {
        self.layers = LayerClasses {
            shapes: shapes.into(),
            labels: labels.into(),
        };
        self
    }

    /// `class` with the configured prefix applied
    pub fn class_name(&self, class: &str) -> String {
        match &self.class_prefix {
            Some(prefix) => format!("{}{}", prefix, class),
            None => class.to_string(),
        }
    }
}
