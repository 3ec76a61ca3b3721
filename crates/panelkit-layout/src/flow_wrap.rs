//! Greedy line-wrapping flow layout.
//!
//! Children are appended along the primary axis until the next one would
//! cross the container's bound, then a new line starts after the furthest
//! cross-axis extent seen so far. Each child is centred within the cross
//! extent its line has reached *when the child is placed*; earlier children
//! in a line keep their offsets when a larger sibling joins later.

use panelkit_core::{
    Child, ChildMeasurer, Invalidation, Invalidator, LayoutResult, Orientation, Rect, Size,
};

use crate::layout::{Arrangement, Layout};

/// Line-wrapping layout with per-line cross-axis centring.
#[derive(Debug, Clone, Default)]
pub struct FlowWrapLayout {
    orientation: Orientation,
    invalidator: Invalidator,
}

/// Running state of the greedy pass.
#[derive(Debug, Clone, Copy, Default)]
struct LineCursor {
    /// Primary offset of the next child in the current line
    main: f32,
    /// Cross offset where the current line starts
    line_start: f32,
    /// Furthest cross offset reached by any line so far
    line_end: f32,
}

/// One child's margin box expressed along the two axes.
#[derive(Debug, Clone, Copy)]
struct Extent {
    main: f32,
    cross: f32,
}

impl FlowWrapLayout {
    /// Create a layout flowing along `orientation`.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            invalidator: Invalidator::new(),
        }
    }

    /// Current flow axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the flow axis; listeners are asked to re-arrange.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.invalidator.notify(Invalidation::Arrange);
        }
    }

    /// Margin box of a child. Non-finite or negative content extents count
    /// as zero before the margins are added.
    fn extent(&self, child: &Child) -> Extent {
        let size = child
            .desired_size
            .finite_or_zero()
            .inflate(&child.margin)
            .finite_or_zero();
        Extent {
            main: self.orientation.main(size),
            cross: self.orientation.cross(size),
        }
    }

    /// Run the greedy pass. `bound` is the primary-axis limit, `size` the
    /// starting container size. Rectangles are written into `rects` when
    /// given.
    fn flow(
        &self,
        bound: f32,
        size: Size,
        children: &[Child],
        mut rects: Option<&mut [Rect]>,
    ) -> Size {
        let o = self.orientation;
        let mut cursor = LineCursor::default();
        let mut main_extent = o.main(size);
        let mut cross_extent = o.cross(size);
        let mut placed = 0usize;

        for (index, child) in children.iter().enumerate() {
            if !child.takes_space() {
                continue;
            }
            let extent = self.extent(child);

            if cursor.main + extent.main > bound {
                cursor.main = 0.0;
                cursor.line_start = cursor.line_end;
                tracing::debug!(index, line_start = cursor.line_start, "flow wrap: new line");
            }

            cursor.line_end = cursor.line_end.max(cursor.line_start + extent.cross);
            let centring = ((cursor.line_end - cursor.line_start - extent.cross) / 2.0).max(0.0);

            if let Some(rects) = rects.as_deref_mut() {
                rects[index] = Rect::from_origin_size(
                    o.point(cursor.main, cursor.line_start + centring),
                    o.size(extent.main, extent.cross),
                );
            }

            cursor.main += extent.main;
            main_extent = main_extent.max(cursor.main);
            cross_extent = cross_extent.max(cursor.line_start + extent.cross);
            placed += 1;
        }

        if placed == 0 {
            main_extent = 0.0;
        }
        o.size(main_extent, cross_extent).finite_or_zero()
    }
}

impl Layout for FlowWrapLayout {
    fn name(&self) -> &'static str {
        "FlowWrapLayout"
    }

    fn measure(
        &self,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<Size> {
        for (index, child) in children.iter_mut().enumerate() {
            if child.takes_space() {
                child.desired_size = measurer.measure_child(index, child, available);
            }
        }
        let bound = self.orientation.main(available);
        let size = self.flow(bound, available.finite_or_zero(), children, None);
        tracing::trace!(?size, "flow wrap measure");
        Ok(size)
    }

    fn arrange(&self, final_size: Size, children: &[Child]) -> LayoutResult<Arrangement> {
        let bound = self.orientation.main(final_size);
        let mut rects = vec![Rect::ZERO; children.len()];
        let size = self.flow(
            bound,
            final_size.finite_or_zero(),
            children,
            Some(rects.as_mut_slice()),
        );
        tracing::trace!(?size, "flow wrap arrange");
        Ok(Arrangement { rects, size })
    }

    fn invalidator(&mut self) -> &mut Invalidator {
        &mut self.invalidator
    }
}
