//! Integration tests for the panelkit facade.

use panelkit::prelude::*;
use panelkit::yaml::LayoutKind;

#[test]
fn test_prelude_drives_every_strategy() {
    let layouts: Vec<Box<dyn Layout>> = vec![
        Box::new(EqualSplitLayout::default()),
        Box::new(ProportionalOffsetLayout::default()),
        Box::new(FlowWrapLayout::default()),
        Box::new(GridPackLayout::default()),
        Box::new(CurveFollowLayout::with_path(
            BezierPath::new(Point::ORIGIN).line_to(Point::new(50.0, 50.0)),
        )),
    ];
    for layout in &layouts {
        let mut kids: Vec<Child> = (0..5).map(|i| Child::new(ChildId(i))).collect();
        let mut measurer = |_i: usize, _c: &Child, _a: Size| Size::new(12.0, 8.0);
        let tree = LayoutEngine::new()
            .compute(layout.as_ref(), Size::new(64.0, 48.0), &mut kids, &mut measurer)
            .unwrap();
        assert_eq!(tree.rects.len(), 5, "{}", layout.name());
        assert_eq!(tree.positions.len(), 5);
    }
}

#[test]
fn test_yaml_reexport() {
    let config = PanelConfig::from_yaml("layout: grid_pack").unwrap();
    assert_eq!(config.layout, LayoutKind::GridPack);
    assert_eq!(config.build().unwrap().name(), "GridPackLayout");
}

#[test]
fn test_invalidation_through_facade() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let mut layout = GridPackLayout::new();
    let fired = Arc::new(AtomicBool::new(false));
    let flag = fired.clone();
    layout.invalidator().subscribe(move |kind: Invalidation| {
        flag.store(kind.requires_measure(), Ordering::SeqCst);
    });
    layout.set_max_items(2.0);
    assert!(fired.load(Ordering::SeqCst));
}
