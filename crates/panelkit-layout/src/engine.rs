//! Two-pass driver for a single panel.

use panelkit_core::{
    Child, ChildId, ChildMeasurer, Invalidation, LayoutError, LayoutResult, Rect, Size,
};
use std::collections::HashMap;

use crate::layout::Layout;

/// Result of running a panel's measure and arrange passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTree {
    /// Size reported by measure
    pub natural_size: Size,
    /// Size the container was arranged in
    pub final_size: Size,
    /// One rectangle per child, in input order
    pub rects: Vec<Rect>,
    /// Rectangles keyed by child identity
    pub positions: HashMap<ChildId, Rect>,
}

impl LayoutTree {
    /// Rectangle assigned to a child.
    #[must_use]
    pub fn rect(&self, id: ChildId) -> Option<Rect> {
        self.positions.get(&id).copied()
    }
}

/// Drives measure then arrange, and re-runs only the pass an
/// [`Invalidation`] asks for.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    measured: Option<Measured>,
}

#[derive(Debug, Clone, Copy)]
struct Measured {
    children: usize,
    natural_size: Size,
    available: Size,
}

impl LayoutEngine {
    /// Create a new layout engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Natural size from the most recent measure pass.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.measured.map(|m| m.natural_size)
    }

    /// Pick the arrange size: the available extent on every bounded axis,
    /// the natural extent on unbounded ones.
    #[must_use]
    pub fn resolve_final_size(available: Size, natural: Size) -> Size {
        let pick = |avail: f32, natural: f32| if avail.is_finite() { avail } else { natural };
        Size::new(
            pick(available.width, natural.width),
            pick(available.height, natural.height),
        )
        .finite_or_zero()
    }

    /// Run both passes.
    #[tracing::instrument(skip_all, fields(layout = layout.name(), children = children.len()))]
    pub fn compute(
        &mut self,
        layout: &dyn Layout,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<LayoutTree> {
        let natural_size = layout.measure(available, children, measurer)?;
        self.measured = Some(Measured {
            children: children.len(),
            natural_size,
            available,
        });

        let final_size = Self::resolve_final_size(available, natural_size);
        if final_size != available {
            tracing::debug!(?available, ?natural_size, ?final_size, "resolved final size");
        }
        self.arrange(layout, final_size, children)
    }

    /// Re-run arrange only, using the sizes the last measure stored.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ChildCountMismatch`] when `children` differs in
    /// length from the list the last measure saw.
    pub fn arrange(
        &self,
        layout: &dyn Layout,
        final_size: Size,
        children: &[Child],
    ) -> LayoutResult<LayoutTree> {
        let natural_size = match self.measured {
            Some(m) if m.children != children.len() => {
                return Err(LayoutError::ChildCountMismatch {
                    expected: m.children,
                    actual: children.len(),
                });
            }
            Some(m) => m.natural_size,
            None => Size::ZERO,
        };

        let arrangement = layout.arrange(final_size, children)?;
        if arrangement.rects.len() != children.len() {
            return Err(LayoutError::ChildCountMismatch {
                expected: children.len(),
                actual: arrangement.rects.len(),
            });
        }

        let positions = children
            .iter()
            .zip(&arrangement.rects)
            .map(|(child, rect)| (child.id, *rect))
            .collect();
        Ok(LayoutTree {
            natural_size,
            final_size: arrangement.size,
            rects: arrangement.rects,
            positions,
        })
    }

    /// Re-run whatever `kind` requires. A measure-level invalidation, or an
    /// arrange-level one before any measure, runs both passes against the
    /// last available size.
    pub fn refresh(
        &mut self,
        kind: Invalidation,
        layout: &dyn Layout,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<LayoutTree> {
        match self.measured {
            Some(m) if !kind.requires_measure() => {
                let final_size = Self::resolve_final_size(m.available, m.natural_size);
                self.arrange(layout, final_size, children)
            }
            Some(m) => self.compute(layout, m.available, children, measurer),
            None => self.compute(layout, Size::INFINITE, children, measurer),
        }
    }

    /// Forget the last measure pass.
    pub fn reset(&mut self) {
        self.measured = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EqualSplitLayout, FlowWrapLayout};
    use panelkit_core::{Orientation, Premeasured};

    fn children(n: u64, size: Size) -> Vec<Child> {
        (0..n)
            .map(|i| Child::new(ChildId(i)).with_desired_size(size))
            .collect()
    }

    #[test]
    fn test_layout_engine_new() {
        let engine = LayoutEngine::new();
        assert!(engine.natural_size().is_none());
    }

    #[test]
    fn test_layout_tree_default() {
        let tree = LayoutTree::default();
        assert!(tree.rects.is_empty());
        assert!(tree.positions.is_empty());
    }

    #[test]
    fn test_resolve_final_size() {
        let natural = Size::new(40.0, 30.0);
        assert_eq!(
            LayoutEngine::resolve_final_size(Size::new(100.0, f32::INFINITY), natural),
            Size::new(100.0, 30.0)
        );
        assert_eq!(
            LayoutEngine::resolve_final_size(Size::INFINITE, Size::new(f32::NAN, 5.0)),
            Size::new(0.0, 5.0)
        );
    }

    #[test]
    fn test_compute_keys_positions_by_id() {
        let layout = EqualSplitLayout::new(Orientation::Horizontal);
        let mut kids = children(2, Size::ZERO);
        let mut engine = LayoutEngine::new();
        let tree = engine
            .compute(&layout, Size::new(100.0, 20.0), &mut kids, &mut Premeasured)
            .unwrap();
        assert_eq!(tree.rect(ChildId(1)), Some(Rect::new(50.0, 0.0, 50.0, 20.0)));
        assert_eq!(tree.final_size, Size::new(100.0, 20.0));
        assert_eq!(engine.natural_size(), Some(Size::new(100.0, 20.0)));
    }

    #[test]
    fn test_compute_unbounded_uses_natural() {
        let layout = FlowWrapLayout::new(Orientation::Horizontal);
        let mut kids = children(3, Size::new(10.0, 5.0));
        let mut engine = LayoutEngine::new();
        let tree = engine
            .compute(&layout, Size::INFINITE, &mut kids, &mut Premeasured)
            .unwrap();
        assert_eq!(tree.natural_size, Size::new(30.0, 5.0));
        assert_eq!(tree.final_size, Size::new(30.0, 5.0));
    }

    #[test]
    fn test_arrange_rejects_changed_child_list() {
        let layout = EqualSplitLayout::default();
        let mut kids = children(3, Size::ZERO);
        let mut engine = LayoutEngine::new();
        engine
            .compute(&layout, Size::new(90.0, 10.0), &mut kids, &mut Premeasured)
            .unwrap();
        let err = engine
            .arrange(&layout, Size::new(90.0, 10.0), &kids[..2])
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::ChildCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_refresh_arrange_skips_measure() {
        let mut layout = EqualSplitLayout::new(Orientation::Horizontal);
        let mut kids = children(2, Size::ZERO);
        let mut engine = LayoutEngine::new();
        let mut calls = 0;
        let mut measurer = |_i: usize, _c: &Child, available: Size| {
            calls += 1;
            available
        };
        engine
            .compute(&layout, Size::new(100.0, 40.0), &mut kids, &mut measurer)
            .unwrap();

        layout.set_orientation(Orientation::Vertical);
        let tree = engine
            .refresh(Invalidation::Arrange, &layout, &mut kids, &mut measurer)
            .unwrap();
        assert_eq!(tree.rects[1], Rect::new(0.0, 20.0, 100.0, 20.0));

        engine
            .refresh(Invalidation::Measure, &layout, &mut kids, &mut measurer)
            .unwrap();
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_refresh_before_compute_measures_unbounded() {
        let layout = FlowWrapLayout::new(Orientation::Vertical);
        let mut kids = children(2, Size::new(4.0, 6.0));
        let mut engine = LayoutEngine::new();
        let tree = engine
            .refresh(Invalidation::Arrange, &layout, &mut kids, &mut Premeasured)
            .unwrap();
        assert_eq!(tree.final_size, Size::new(4.0, 12.0));
        engine.reset();
        assert!(engine.natural_size().is_none());
    }
}
