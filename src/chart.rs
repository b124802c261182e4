//! Chart builders
//!
//! A chart owns an immutable resolved configuration. Each call to
//! [`Chart::render`] recomputes the full geometry for the given segments and
//! reconciles it into the container's scene.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::layout::{
    radial, straight, LabelPlacement, RadialConfig, RadialLayout, RadialOptions, Segment,
    StraightConfig, StraightLayout, StraightOptions,
};
use crate::renderer::path::{format_number, PathBuilder};
use crate::renderer::{render_svg, SvgConfig};
use crate::responsive::{fit_to_container, ResizeEvents, Subscription};
use crate::scene::{Attributes, Container, NodeKind, NodeSpec, RenderStats};

/// A render function bound to a fixed configuration
pub trait Chart {
    /// Lay out `segments` and reconcile the result into `container`
    fn render(&self, container: &mut Container, segments: &[Segment]) -> RenderStats;

    /// Render into a fresh container and serialize it.
    ///
    /// Returns an empty string when the chart produced no surface.
    fn to_svg(&self, segments: &[Segment], config: &SvgConfig) -> String {
        let mut container = Container::new();
        self.render(&mut container, segments);
        container
            .scene()
            .map(|scene| render_svg(scene, config))
            .unwrap_or_default()
    }
}

/// Build a straight chart from sparse options
pub fn build_straight_chart(options: StraightOptions) -> StraightChart {
    StraightChart {
        config: options.resolve(),
    }
}

/// Build a radial chart from sparse options
pub fn build_radial_chart(options: RadialOptions) -> RadialChart {
    RadialChart {
        config: options.resolve(),
    }
}

/// Chevrons chained left to right
#[derive(Debug, Clone)]
pub struct StraightChart {
    config: StraightConfig,
}

impl StraightChart {
    pub fn config(&self) -> &StraightConfig {
        &self.config
    }

    pub fn layout(&self, segments: &[Segment]) -> StraightLayout {
        straight::layout(segments, &self.config)
    }
}

impl Chart for StraightChart {
    fn render(&self, container: &mut Container, segments: &[Segment]) -> RenderStats {
        let config = &self.config;
        let geometry = self.layout(segments);
        debug!(
            segments = segments.len(),
            width = geometry.width,
            "rendering straight chart"
        );

        let scene = container.scene_or_insert();
        scene.surface.set_number("width", geometry.width);
        scene.surface.set_number("height", geometry.height);
        scene
            .surface
            .set("viewBox", view_box([0.0, 0.0, geometry.width, geometry.height]));

        let shapes = geometry
            .chevrons
            .iter()
            .map(|chevron| NodeSpec {
                key: chevron.index,
                kind: NodeKind::Path,
                class: "chevron",
                attrs: Attributes::new()
                    .with("d", PathBuilder::closed(&chevron.vertices).to_svg_d())
                    .with("fill", chevron.fill.as_str())
                    .with("stroke", config.stroke_color.as_str())
                    .with_number("stroke-width", config.stroke_width)
                    .with("stroke-linejoin", config.stroke_linejoin.as_str()),
                text: None,
            })
            .collect();
        let labels = geometry
            .chevrons
            .iter()
            .map(|chevron| {
                label_spec(
                    chevron.index,
                    &chevron.label,
                    TextStyle {
                        color: &config.text_color,
                        family: &config.font_family,
                        weight: &config.font_weight,
                        size: config.font_size,
                    },
                )
            })
            .collect();

        scene.reconcile(shapes, labels)
    }
}

/// Notched wedges around a ring
#[derive(Debug, Clone)]
pub struct RadialChart {
    config: RadialConfig,
}

impl RadialChart {
    pub fn config(&self) -> &RadialConfig {
        &self.config
    }

    pub fn layout(&self, segments: &[Segment]) -> RadialLayout {
        radial::layout(segments, &self.config)
    }

    /// Keep the container's surface square on every resize signal.
    ///
    /// Returns `None` for non-responsive charts. The listener holds the
    /// container weakly and stops when the returned subscription is dropped.
    pub fn observe_resize(
        &self,
        container: &Rc<RefCell<Container>>,
        events: &ResizeEvents,
    ) -> Option<Subscription> {
        if !self.config.responsive {
            return None;
        }
        fit_to_container(&mut container.borrow_mut());
        let weak = Rc::downgrade(container);
        Some(events.subscribe(move || {
            if let Some(container) = weak.upgrade() {
                if let Ok(mut container) = container.try_borrow_mut() {
                    fit_to_container(&mut container);
                }
            }
        }))
    }
}

impl Chart for RadialChart {
    fn render(&self, container: &mut Container, segments: &[Segment]) -> RenderStats {
        if segments.is_empty() {
            debug!("radial chart has no segments, skipping render");
            return RenderStats::default();
        }

        let config = &self.config;
        let geometry = self.layout(segments);
        debug!(
            segments = segments.len(),
            responsive = config.responsive,
            "rendering radial chart"
        );

        let created = container.scene().is_none();
        let scene = container.scene_or_insert();
        // once fitted, the responder owns the surface size
        if created || !config.responsive {
            scene.surface.set_number("width", geometry.width);
            scene.surface.set_number("height", geometry.height);
        }
        scene.surface.set("viewBox", view_box(geometry.view_box()));

        let shapes = geometry
            .wedges
            .iter()
            .map(|wedge| NodeSpec {
                key: wedge.idx,
                kind: NodeKind::Path,
                class: "wedge",
                attrs: Attributes::new()
                    .with("d", PathBuilder::closed(&wedge.vertices).to_svg_d())
                    .with("fill", wedge.color.as_str())
                    .with("stroke", config.stroke_color.as_str())
                    .with_number("stroke-width", config.stroke_width),
                text: None,
            })
            .collect();
        let labels = geometry
            .wedges
            .iter()
            .map(|wedge| {
                label_spec(
                    wedge.idx,
                    &wedge.label,
                    TextStyle {
                        color: &config.text_color,
                        family: &config.font_family,
                        weight: &config.font_weight,
                        size: config.font_size,
                    },
                )
            })
            .collect();

        let stats = scene.reconcile(shapes, labels);
        if config.responsive {
            fit_to_container(container);
        }
        stats
    }
}

struct TextStyle<'a> {
    color: &'a str,
    family: &'a str,
    weight: &'a str,
    size: f64,
}

fn label_spec(key: usize, label: &LabelPlacement, style: TextStyle<'_>) -> NodeSpec {
    NodeSpec {
        key,
        kind: NodeKind::Text,
        class: "label",
        attrs: Attributes::new()
            .with_number("x", label.position.x)
            .with_number("y", label.position.y)
            .with("text-anchor", "middle")
            .with("dominant-baseline", "middle")
            .with("fill", style.color)
            .with("font-family", style.family)
            .with("font-weight", style.weight)
            .with_number("font-size", style.size),
        text: Some(label.text.clone()),
    }
}

fn view_box(values: [f64; 4]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_box_format() {
        assert_eq!(view_box([-250.0, -250.0, 500.0, 500.0]), "-250 -250 500 500");
    }

    #[test]
    fn test_straight_surface_attributes() {
        let chart = build_straight_chart(StraightOptions::new());
        let mut container = Container::new();
        chart.render(&mut container, &[Segment::new("A")]);
        let scene = container.scene().expect("scene");
        // 40 + 208 - 18 + 40
        assert_eq!(scene.surface.get("width"), Some("270"));
        assert_eq!(scene.surface.get("height"), Some("100"));
        assert_eq!(scene.surface.get("viewBox"), Some("0 0 270 100"));
    }

    #[test]
    fn test_label_attributes() {
        let chart = build_straight_chart(StraightOptions::new().with_text_color("#000"));
        let mut container = Container::new();
        chart.render(&mut container, &[Segment::new("Plan")]);
        let label = &container.scene().expect("scene").labels[0];
        assert_eq!(label.text.as_deref(), Some("Plan"));
        assert_eq!(label.attrs.get("x"), Some("115"));
        assert_eq!(label.attrs.get("y"), Some("50"));
        assert_eq!(label.attrs.get("text-anchor"), Some("middle"));
        assert_eq!(label.attrs.get("dominant-baseline"), Some("middle"));
        assert_eq!(label.attrs.get("fill"), Some("#000"));
        assert_eq!(label.attrs.get("font-weight"), Some("bold"));
        assert_eq!(label.attrs.get("font-size"), Some("14"));
    }

    #[test]
    fn test_radial_empty_does_not_create_surface() {
        let chart = build_radial_chart(RadialOptions::new());
        let mut container = Container::new();
        let stats = chart.render(&mut container, &[]);
        assert!(stats.is_noop());
        assert!(container.scene().is_none());
        assert_eq!(chart.to_svg(&[], &SvgConfig::default()), "");
    }

    #[test]
    fn test_observe_resize_requires_responsive() {
        let chart = build_radial_chart(RadialOptions::new());
        let container = Rc::new(RefCell::new(Container::new()));
        let events = ResizeEvents::new();
        assert!(chart.observe_resize(&container, &events).is_none());
        assert_eq!(events.listener_count(), 0);
    }
}
