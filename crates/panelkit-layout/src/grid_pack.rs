//! Near-square grid packing with a remainder-absorbing first column.
//!
//! For `n` items the grid has `ceil(sqrt(n))` columns and
//! `floor(sqrt(n) + 0.5)` rows. Every column except the first holds exactly
//! `rows` items; the first column takes whatever is left over, so its cells
//! may be taller than the rest. Cells are separated by a fixed 2-unit gutter.

use panelkit_core::{Child, ChildMeasurer, Invalidation, Invalidator, LayoutResult, Rect, Size};

use crate::layout::{Arrangement, Layout};

/// Spacing between cells, independent of container size.
pub const GUTTER: f32 = 2.0;

/// Column/row counts for a given number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Total columns
    pub cols: usize,
    /// Rows in every column but the first
    pub rows: usize,
    /// Items stacked in the first column
    pub first_column: usize,
}

impl GridShape {
    /// Shape for `items` cells; only meaningful for two or more.
    #[must_use]
    pub fn for_items(items: usize) -> Self {
        let root = (items as f64).sqrt();
        let cols = root.ceil() as usize;
        let rows = (root + 0.5).floor() as usize;
        let first_column = items.saturating_sub(cols.saturating_sub(1) * rows);
        Self {
            cols,
            rows,
            first_column,
        }
    }
}

/// Compute the slot of each of the first `items` children in a container of
/// `size`. `size` must already be finite.
#[must_use]
pub fn pack_slots(size: Size, items: usize) -> Vec<Rect> {
    match items {
        0 => Vec::new(),
        1 => vec![Rect::from_size(size)],
        _ => {
            let shape = GridShape::for_items(items);
            let col_width = size.width / shape.cols as f32;
            let width = (col_width - GUTTER).max(0.0);
            let mut slots = Vec::with_capacity(items);

            let rest = shape.first_column;
            let first_row_height = size.height / rest as f32;
            for i in 0..rest {
                let height = (first_row_height - GUTTER).max(0.0);
                let top = if i == 0 {
                    0.0
                } else {
                    (first_row_height * i as f32 + GUTTER).max(0.0)
                };
                slots.push(Rect::new(0.0, top, width, height));
            }

            let row_height = size.height / shape.rows as f32;
            for i in rest..items {
                let col = (i - rest + shape.rows) / shape.rows;
                let row = (i - rest) % shape.rows;
                let height = (row_height - GUTTER).max(0.0);
                let top = if row == 0 {
                    0.0
                } else {
                    (row_height * row as f32 + GUTTER).max(0.0)
                };
                let left = (col_width * col as f32 + GUTTER).max(0.0);
                slots.push(Rect::new(left, top, width, height));
            }
            slots
        }
    }
}

/// Packs up to `max_items` children into a near-square grid.
#[derive(Debug, Clone)]
pub struct GridPackLayout {
    max_items: f32,
    invalidator: Invalidator,
}

impl Default for GridPackLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPackLayout {
    /// Create an unbounded layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_items: f32::NAN,
            invalidator: Invalidator::new(),
        }
    }

    /// Limit the number of packed items. `NaN` means unbounded.
    #[must_use]
    pub fn with_max_items(mut self, max_items: f32) -> Self {
        self.max_items = max_items;
        self
    }

    /// Current item cap (`NaN` when unbounded).
    #[must_use]
    pub const fn max_items(&self) -> f32 {
        self.max_items
    }

    /// Change the item cap; listeners are asked to re-measure.
    pub fn set_max_items(&mut self, max_items: f32) {
        let unchanged =
            self.max_items == max_items || (self.max_items.is_nan() && max_items.is_nan());
        if !unchanged {
            self.max_items = max_items;
            self.invalidator.notify(Invalidation::Measure);
        }
    }

    /// Number of items actually packed out of `count` candidates.
    #[must_use]
    pub fn resolve_items(&self, count: usize) -> usize {
        if self.max_items.is_nan() {
            return count;
        }
        if self.max_items < 0.0 {
            tracing::warn!(
                max_items = self.max_items,
                count,
                "negative max_items, packing all children"
            );
            return count;
        }
        (self.max_items as usize).min(count)
    }

    /// Slot for every child, in child order. Collapsed children and those
    /// past the cap get [`Rect::ZERO`].
    fn slots(&self, size: Size, children: &[Child]) -> Vec<Rect> {
        let candidates = children.iter().filter(|c| c.takes_space()).count();
        let items = self.resolve_items(candidates);
        let mut packed = pack_slots(size, items).into_iter();
        children
            .iter()
            .map(|child| {
                if child.takes_space() {
                    packed.next().unwrap_or(Rect::ZERO)
                } else {
                    Rect::ZERO
                }
            })
            .collect()
    }
}

impl Layout for GridPackLayout {
    fn name(&self) -> &'static str {
        "GridPackLayout"
    }

    fn measure(
        &self,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<Size> {
        let size = available.finite_or_zero();
        let slots = self.slots(size, children);
        for (index, (child, slot)) in children.iter_mut().zip(&slots).enumerate() {
            if child.takes_space() {
                child.desired_size = measurer.measure_child(index, child, slot.size());
            }
        }
        tracing::trace!(?size, children = children.len(), "grid pack measure");
        Ok(size)
    }

    fn arrange(&self, final_size: Size, children: &[Child]) -> LayoutResult<Arrangement> {
        let size = final_size.finite_or_zero();
        let rects = self.slots(size, children);
        tracing::trace!(?size, children = children.len(), "grid pack arrange");
        Ok(Arrangement { rects, size })
    }

    fn invalidator(&mut self) -> &mut Invalidator {
        &mut self.invalidator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::{ChildId, Visibility};

    fn children(n: u64) -> Vec<Child> {
        (0..n).map(|i| Child::new(ChildId(i))).collect()
    }

    // =========================================================================
    // GridShape Tests
    // =========================================================================

    #[test]
    fn test_shape_perfect_square() {
        assert_eq!(
            GridShape::for_items(4),
            GridShape {
                cols: 2,
                rows: 2,
                first_column: 2
            }
        );
        assert_eq!(GridShape::for_items(9).first_column, 3);
    }

    #[test]
    fn test_shape_remainder_goes_to_first_column() {
        // 5 items: 3 columns of 2 rows, first column holds 1
        assert_eq!(
            GridShape::for_items(5),
            GridShape {
                cols: 3,
                rows: 2,
                first_column: 1
            }
        );
        // 6 items: 3 columns of 2 rows, first column holds 2
        assert_eq!(GridShape::for_items(6).first_column, 2);
        // 7 items: 3 columns of 3 rows, first column holds 1
        assert_eq!(GridShape::for_items(7).rows, 3);
        assert_eq!(GridShape::for_items(7).first_column, 1);
    }

    #[test]
    fn test_shape_first_column_never_empty() {
        for items in 2..500 {
            let shape = GridShape::for_items(items);
            assert!(shape.first_column >= 1, "items={items}");
            assert_eq!(shape.first_column + (shape.cols - 1) * shape.rows, items);
        }
    }

    // =========================================================================
    // pack_slots Tests
    // =========================================================================

    #[test]
    fn test_pack_zero_and_one() {
        assert!(pack_slots(Size::new(100.0, 100.0), 0).is_empty());
        assert_eq!(
            pack_slots(Size::new(100.0, 80.0), 1),
            vec![Rect::new(0.0, 0.0, 100.0, 80.0)]
        );
    }

    #[test]
    fn test_pack_four_is_two_by_two() {
        let slots = pack_slots(Size::new(100.0, 100.0), 4);
        assert_eq!(
            slots,
            vec![
                Rect::new(0.0, 0.0, 48.0, 48.0),
                Rect::new(0.0, 52.0, 48.0, 48.0),
                Rect::new(52.0, 0.0, 48.0, 48.0),
                Rect::new(52.0, 52.0, 48.0, 48.0),
            ]
        );
    }

    #[test]
    fn test_pack_three_has_tall_first_cell() {
        let slots = pack_slots(Size::new(100.0, 100.0), 3);
        assert_eq!(slots[0], Rect::new(0.0, 0.0, 48.0, 98.0));
        assert_eq!(slots[1], Rect::new(52.0, 0.0, 48.0, 48.0));
        assert_eq!(slots[2], Rect::new(52.0, 52.0, 48.0, 48.0));
    }

    #[test]
    fn test_pack_zero_size_floors_at_zero() {
        let slots = pack_slots(Size::ZERO, 5);
        assert!(slots.iter().all(|r| r.width == 0.0 && r.height == 0.0));
        assert!(slots.iter().all(|r| r.x >= 0.0 && r.y >= 0.0));
    }

    // =========================================================================
    // Layout Tests
    // =========================================================================

    #[test]
    fn test_single_item_fills_container() {
        let layout = GridPackLayout::new();
        let a = layout.arrange(Size::new(120.0, 60.0), &children(1)).unwrap();
        assert_eq!(a.rects, vec![Rect::new(0.0, 0.0, 120.0, 60.0)]);
    }

    #[test]
    fn test_max_items_caps_and_zeroes_rest() {
        let layout = GridPackLayout::new().with_max_items(2.0);
        let a = layout.arrange(Size::new(100.0, 100.0), &children(4)).unwrap();
        assert_ne!(a.rects[0], Rect::ZERO);
        assert_ne!(a.rects[1], Rect::ZERO);
        assert_eq!(a.rects[2], Rect::ZERO);
        assert_eq!(a.rects[3], Rect::ZERO);
    }

    #[test]
    fn test_max_items_zero_all_zero() {
        let layout = GridPackLayout::new().with_max_items(0.0);
        let a = layout.arrange(Size::new(100.0, 100.0), &children(3)).unwrap();
        assert_eq!(a.rects, vec![Rect::ZERO; 3]);
    }

    #[test]
    fn test_resolve_items() {
        assert_eq!(GridPackLayout::new().resolve_items(7), 7);
        assert_eq!(GridPackLayout::new().with_max_items(3.9).resolve_items(7), 3);
        assert_eq!(GridPackLayout::new().with_max_items(30.0).resolve_items(7), 7);
        assert_eq!(GridPackLayout::new().with_max_items(f32::INFINITY).resolve_items(7), 7);
        assert_eq!(GridPackLayout::new().with_max_items(-1.0).resolve_items(7), 7);
    }

    #[test]
    fn test_collapsed_children_skipped() {
        let layout = GridPackLayout::new();
        let mut kids = children(3);
        kids[0].visibility = Visibility::Collapsed;
        let a = layout.arrange(Size::new(100.0, 100.0), &kids).unwrap();
        assert_eq!(a.rects[0], Rect::ZERO);
        assert_eq!(a.rects[1], Rect::new(0.0, 0.0, 48.0, 98.0));
        assert_eq!(a.rects[2], Rect::new(52.0, 0.0, 48.0, 98.0));
    }

    #[test]
    fn test_measure_offers_slot_sizes() {
        let layout = GridPackLayout::new();
        let mut kids = children(4);
        let mut offered = Vec::new();
        let mut measurer = |_i: usize, _c: &Child, available: Size| {
            offered.push(available);
            Size::ZERO
        };
        let size = layout
            .measure(Size::new(100.0, f32::INFINITY), &mut kids, &mut measurer)
            .unwrap();
        assert_eq!(size, Size::new(100.0, 0.0));
        assert_eq!(offered, vec![Size::new(48.0, 0.0); 4]);
    }

    #[test]
    fn test_measure_beyond_cap_offered_zero() {
        let layout = GridPackLayout::new().with_max_items(1.0);
        let mut kids = children(2);
        let mut offered = Vec::new();
        let mut measurer = |_i: usize, _c: &Child, available: Size| {
            offered.push(available);
            available
        };
        layout
            .measure(Size::new(50.0, 50.0), &mut kids, &mut measurer)
            .unwrap();
        assert_eq!(offered, vec![Size::new(50.0, 50.0), Size::ZERO]);
    }

    #[test]
    fn test_set_max_items_nan_to_nan_is_quiet() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut layout = GridPackLayout::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        layout.invalidator().subscribe(move |kind: Invalidation| {
            assert!(kind.requires_measure());
            counter.fetch_add(1, Ordering::SeqCst);
        });
        layout.set_max_items(f32::NAN);
        layout.set_max_items(4.0);
        layout.set_max_items(4.0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
