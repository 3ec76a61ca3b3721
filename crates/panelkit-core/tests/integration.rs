//! Integration tests for panelkit-core.
//!
//! These tests verify the public API works correctly end-to-end.

use panelkit_core::{
    measure_all, Child, ChildId, ChildMeasurer, Invalidation, Invalidator, LayoutError, Margin,
    Orientation, Point, Premeasured, Rect, Size, Visibility,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// =============================================================================
// Geometry Integration Tests
// =============================================================================

#[test]
fn test_unconstrained_size_collapses() {
    let available = Size::new(f32::INFINITY, 300.0);
    assert_eq!(available.finite_or_zero(), Size::new(0.0, 300.0));
    assert_eq!(Size::new(f32::NAN, -2.0).finite_or_zero(), Size::ZERO);
}

#[test]
fn test_margin_box_of_child() {
    let child = Child::new(ChildId(1))
        .with_desired_size(Size::new(30.0, 10.0))
        .with_margin(Margin::new(2.0, 1.0, 2.0, 1.0));
    assert_eq!(child.desired_size.inflate(&child.margin), Size::new(34.0, 12.0));
}

#[test]
fn test_rect_centered_on_point() {
    let rect = Rect::centered_at(Point::new(25.0, 0.0), Size::new(10.0, 10.0));
    assert_eq!(rect.origin(), Point::new(20.0, -5.0));
    assert_eq!(rect.center(), Point::new(25.0, 0.0));
}

#[test]
fn test_orientation_maps_axes() {
    let size = Orientation::Vertical.size(100.0, 20.0);
    assert_eq!(size, Size::new(20.0, 100.0));
}

// =============================================================================
// Host Boundary Integration Tests
// =============================================================================

#[test]
fn test_measure_all_with_closure_host() {
    let mut children: Vec<Child> = (0..4)
        .map(|i| {
            let visibility = if i == 2 {
                Visibility::Collapsed
            } else {
                Visibility::Visible
            };
            Child::new(ChildId(i)).with_visibility(visibility)
        })
        .collect();

    let mut host = |index: usize, _child: &Child, available: Size| {
        Size::new(available.width.min(10.0 * (index as f32 + 1.0)), 5.0)
    };
    measure_all(&mut children, &mut host, Size::new(25.0, 100.0));

    let widths: Vec<f32> = children.iter().map(|c| c.desired_size.width).collect();
    assert_eq!(widths, vec![10.0, 20.0, 0.0, 25.0]);
}

#[test]
fn test_premeasured_keeps_sizes() {
    let mut children = vec![Child::new(ChildId(9)).with_desired_size(Size::new(7.0, 8.0))];
    measure_all(&mut children, &mut Premeasured, Size::INFINITE);
    assert_eq!(children[0].desired_size, Size::new(7.0, 8.0));
    assert_eq!(
        Premeasured.measure_child(0, &children[0], Size::ZERO),
        Size::new(7.0, 8.0)
    );
}

#[test]
fn test_invalidator_round_trip() {
    let mut invalidator = Invalidator::new();
    let measures = Arc::new(AtomicUsize::new(0));
    let counter = measures.clone();
    invalidator.subscribe(move |kind: Invalidation| {
        if kind.requires_measure() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    invalidator.notify(Invalidation::Measure);
    invalidator.notify(Invalidation::Arrange);
    assert_eq!(measures.load(Ordering::SeqCst), 1);
}

#[test]
fn test_child_serde_roundtrip() {
    let child = Child::new(ChildId(3))
        .with_desired_size(Size::new(1.0, 2.0))
        .with_visibility(Visibility::Hidden);
    let json = serde_json::to_string(&child).expect("serialize");
    assert!(json.contains("\"hidden\""));
    let back: Child = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, child);
}

#[test]
fn test_layout_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(LayoutError::MissingPath { children: 1 });
    assert!(err.to_string().contains("path geometry is missing"));
}
