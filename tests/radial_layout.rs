//! Integration tests for the radial wedge chart

use std::f64::consts::TAU;

use chevron_chart::layout::radial::{ARC_SEGMENTS, WEDGE_VERTICES};
use chevron_chart::layout::Point;
use chevron_chart::{build_radial_chart, Chart, Container, RadialOptions, Segment};
use pretty_assertions::assert_eq;

fn segments(n: usize) -> Vec<Segment> {
    (0..n).map(|i| Segment::new(format!("Step {}", i + 1))).collect()
}

fn radius(p: Point) -> f64 {
    (p.x * p.x + p.y * p.y).sqrt()
}

#[test]
fn test_wedge_and_label_counts() {
    let chart = build_radial_chart(RadialOptions::new());
    for n in 1..8 {
        let mut container = Container::new();
        chart.render(&mut container, &segments(n));
        let scene = container.scene().expect("surface");
        assert_eq!(scene.shapes.len(), n);
        assert_eq!(scene.labels.len(), n);
        assert!(scene.shapes.iter().all(|s| s.class == "wedge"));
    }
}

#[test]
fn test_zero_segments_emit_nothing() {
    let chart = build_radial_chart(RadialOptions::new());
    let mut container = Container::new();
    let stats = chart.render(&mut container, &[]);
    assert!(stats.is_noop());
    assert!(container.scene().is_none());
}

#[test]
fn test_zero_segments_leave_previous_scene_untouched() {
    let chart = build_radial_chart(RadialOptions::new());
    let mut container = Container::new();
    chart.render(&mut container, &segments(3));
    let before = container.clone();
    chart.render(&mut container, &[]);
    assert_eq!(container, before);
}

#[test]
fn test_vertex_count_is_fixed() {
    let configs = [
        RadialOptions::new(),
        RadialOptions::new().with_radii(10.0, 400.0).with_gap_degrees(0.0),
        RadialOptions::new().with_rotate_degrees(-30.0).with_gap_degrees(15.0),
        RadialOptions::new().with_radii(0.0, 50.0),
    ];
    assert_eq!(WEDGE_VERTICES, ARC_SEGMENTS + 1 + 1 + ARC_SEGMENTS + 1 + 1);
    for options in configs {
        let chart = build_radial_chart(options);
        for n in [1, 2, 5, 12] {
            let layout = chart.layout(&segments(n));
            for wedge in &layout.wedges {
                assert_eq!(wedge.vertices.len(), 76);
            }
        }
    }
}

#[test]
fn test_arc_vertices_lie_on_radii() {
    let chart = build_radial_chart(RadialOptions::new().with_radii(100.0, 200.0));
    let layout = chart.layout(&segments(5));
    for wedge in &layout.wedges {
        for p in &wedge.vertices[..ARC_SEGMENTS] {
            assert!((radius(*p) - 200.0).abs() < 1e-9);
        }
        for p in &wedge.vertices[ARC_SEGMENTS + 1..2 * ARC_SEGMENTS + 2] {
            assert!((radius(*p) - 100.0).abs() < 1e-9);
        }
        assert!((radius(wedge.vertices[75]) - 200.0).abs() < 1e-9);
    }
}

#[test]
fn test_wedges_follow_segment_order_clockwise() {
    let chart = build_radial_chart(RadialOptions::new().with_label_offset_deg(0.0));
    let layout = chart.layout(&segments(6));
    for (i, wedge) in layout.wedges.iter().enumerate() {
        assert_eq!(wedge.idx, i);
        let expected = (i as f64 + 0.5) * TAU / 6.0;
        assert!((wedge.label_angle - expected).abs() < 1e-9);
        assert_eq!(wedge.label.text, format!("Step {}", i + 1));
        assert!((radius(wedge.label.position) - 160.0).abs() < 1e-9);
    }
}

#[test]
fn test_label_offset_shifts_angle() {
    let chart = build_radial_chart(RadialOptions::new().with_label_offset_deg(10.0));
    let layout = chart.layout(&segments(4));
    let expected = TAU / 8.0 + 10f64.to_radians();
    assert!((layout.wedges[0].label_angle - expected).abs() < 1e-9);
}

#[test]
fn test_colors_cycle_with_override() {
    let chart = build_radial_chart(RadialOptions::new().with_colors(["red", "green"]));
    let mut segs = segments(5);
    segs[1] = segs[1].clone().with_color("gold");
    let layout = chart.layout(&segs);
    let colors: Vec<&str> = layout.wedges.iter().map(|w| w.color.as_str()).collect();
    assert_eq!(colors, vec!["red", "gold", "red", "green", "red"]);
}

#[test]
fn test_surface_uses_centered_view_box() {
    let chart = build_radial_chart(RadialOptions::new().with_size(600.0, 400.0));
    let mut container = Container::new();
    chart.render(&mut container, &segments(3));
    let scene = container.scene().expect("surface");
    assert_eq!(scene.surface.get("width"), Some("600"));
    assert_eq!(scene.surface.get("height"), Some("400"));
    assert_eq!(scene.surface.get("viewBox"), Some("-300 -200 600 400"));
}

#[test]
fn test_render_is_idempotent() {
    let chart = build_radial_chart(RadialOptions::new());
    let segs = segments(4);
    let mut container = Container::new();
    chart.render(&mut container, &segs);
    let first = container.clone();
    let stats = chart.render(&mut container, &segs);
    assert_eq!(container, first);
    assert_eq!(stats.shapes.updated, 4);
    assert_eq!(stats.labels.updated, 4);
}

#[test]
fn test_path_data_is_closed() {
    let chart = build_radial_chart(RadialOptions::new());
    let mut container = Container::new();
    chart.render(&mut container, &segments(2));
    for shape in &container.scene().expect("surface").shapes {
        let d = shape.attrs.get("d").expect("path data");
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('L').count(), 75);
    }
}
