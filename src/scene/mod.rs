//! Retained scene graph
//!
//! A [`Container`] hosts at most one [`Scene`]: a drawing surface with a shape
//! layer and a label layer. Charts reconcile these layers on every render
//! (see [`emit`]) so nodes keep their identity across renders while their
//! attributes are refreshed.

pub mod emit;
pub mod join;

pub use emit::{emit_layer, JoinStats, NodeSpec, RenderStats};
pub use join::{join, Join};

use crate::renderer::path::format_number;

/// Ordered element attributes. Setting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(&'static str, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn set_number(&mut self, name: &'static str, value: f64) {
        self.set(name, format_number(value));
    }

    /// Builder-style [`Attributes::set`]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style [`Attributes::set_number`]
    pub fn with_number(mut self, name: &'static str, value: f64) -> Self {
        self.set_number(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Stable identity of a node, assigned when it enters the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Path,
    Text,
}

impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Path => "path",
            NodeKind::Text => "text",
        }
    }
}

/// A shape or text element in a layer
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Data-join key (the segment index)
    pub key: usize,
    pub kind: NodeKind,
    /// CSS class suffix, e.g. `chevron` or `label`
    pub class: &'static str,
    pub attrs: Attributes,
    pub text: Option<String>,
}

/// A drawing surface with its shape and label layers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Root attributes (`width`, `height`, `viewBox`)
    pub surface: Attributes,
    pub shapes: Vec<Node>,
    pub labels: Vec<Node>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Content-box size of a host container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Host element a chart renders into
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    content_box: Option<BoxSize>,
    scene: Option<Scene>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content_box(mut self, width: f64, height: f64) -> Self {
        self.content_box = Some(BoxSize::new(width, height));
        self
    }

    /// Update the measured content box, e.g. after the host was resized
    pub fn set_content_box(&mut self, size: Option<BoxSize>) {
        self.content_box = size;
    }

    pub fn content_box(&self) -> Option<BoxSize> {
        self.content_box
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Select the existing scene or create an empty one
    pub fn scene_or_insert(&mut self) -> &mut Scene {
        self.scene.get_or_insert_with(Scene::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_replace_in_place() {
        let mut attrs = Attributes::new().with("fill", "red").with_number("x", 1.5);
        attrs.set("fill", "blue");
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["fill", "x"]);
        assert_eq!(attrs.get("fill"), Some("blue"));
        assert_eq!(attrs.get("x"), Some("1.5"));
        assert_eq!(attrs.get("y"), None);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_container_select_or_create() {
        let mut container = Container::new();
        assert!(container.scene().is_none());
        container.scene_or_insert().surface.set("width", "10");
        container.scene_or_insert().surface.set("height", "20");
        let scene = container.scene().expect("scene");
        assert_eq!(scene.surface.get("width"), Some("10"));
        assert_eq!(scene.surface.get("height"), Some("20"));
    }
}
