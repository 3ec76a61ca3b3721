//! Equal division of the available space along one axis.

use panelkit_core::{
    Child, ChildMeasurer, Invalidation, Invalidator, LayoutResult, Orientation, Rect, Size,
};

use crate::layout::{Arrangement, Layout};

/// Gives every space-taking child the same share of the container.
///
/// Hidden children receive a slot; collapsed children receive
/// [`Rect::ZERO`] and do not count towards the divisor.
#[derive(Debug, Clone, Default)]
pub struct EqualSplitLayout {
    orientation: Orientation,
    invalidator: Invalidator,
}

impl EqualSplitLayout {
    /// Create a layout along `orientation`.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            invalidator: Invalidator::new(),
        }
    }

    /// Current primary axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the primary axis; listeners are asked to re-arrange.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.invalidator.notify(Invalidation::Arrange);
        }
    }

    /// Size of one slot when `size` is shared by `count` children.
    fn slot(&self, size: Size, count: usize) -> Size {
        let main = self.orientation.main(size) / count as f32;
        self.orientation.size(main, self.orientation.cross(size))
    }

    /// Container size when nothing takes space.
    fn collapsed(&self, size: Size) -> Size {
        self.orientation.size(0.0, self.orientation.cross(size))
    }
}

fn space_takers(children: &[Child]) -> usize {
    children.iter().filter(|c| c.takes_space()).count()
}

impl Layout for EqualSplitLayout {
    fn name(&self) -> &'static str {
        "EqualSplitLayout"
    }

    fn measure(
        &self,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<Size> {
        let size = available.finite_or_zero();
        let count = space_takers(children);
        tracing::trace!(count, ?size, "equal split measure");

        if count == 0 {
            return Ok(self.collapsed(size));
        }

        let slot = self.slot(size, count);
        for (index, child) in children.iter_mut().enumerate() {
            if child.takes_space() {
                child.desired_size = measurer.measure_child(index, child, slot);
            }
        }
        Ok(size)
    }

    fn arrange(&self, final_size: Size, children: &[Child]) -> LayoutResult<Arrangement> {
        let size = final_size.finite_or_zero();
        let count = space_takers(children);
        tracing::trace!(count, ?size, "equal split arrange");

        if count == 0 {
            return Ok(Arrangement::empty(children.len(), self.collapsed(size)));
        }

        let slot = self.slot(size, count);
        let step = self.orientation.main(slot);
        let mut cursor = 0.0;
        let rects = children
            .iter()
            .map(|child| {
                if !child.takes_space() {
                    return Rect::ZERO;
                }
                let rect = Rect::from_origin_size(self.orientation.point(cursor, 0.0), slot);
                cursor += step;
                rect
            })
            .collect();

        Ok(Arrangement { rects, size })
    }

    fn invalidator(&mut self) -> &mut Invalidator {
        &mut self.invalidator
    }
}
