//! Per-child fractional placement along one axis.

use panelkit_core::{
    finite_or_zero, measure_all, Child, ChildId, ChildMeasurer, Invalidation, Invalidator,
    LayoutError, LayoutResult, Orientation, Rect, Size,
};
use std::collections::HashMap;

use crate::layout::{Arrangement, Layout};

/// Places each child at `position × (container − child)` along the packed
/// axis, where `position` comes from a side-map keyed by [`ChildId`].
///
/// Positions outside `[0, 1]` are honoured as-is and may move a child
/// partially or fully outside the container.
#[derive(Debug, Clone, Default)]
pub struct ProportionalOffsetLayout {
    orientation: Orientation,
    fixed_extent: Option<f32>,
    positions: HashMap<ChildId, f32>,
    invalidator: Invalidator,
}

impl ProportionalOffsetLayout {
    /// Create a layout packing along `orientation`.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Fix the container's own cross-axis extent.
    #[must_use]
    pub fn with_fixed_extent(mut self, extent: f32) -> Self {
        self.fixed_extent = Some(extent);
        self
    }

    /// Current packed axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the packed axis; listeners are asked to re-measure since the
    /// cross extent is derived from a different child dimension.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.invalidator.notify(Invalidation::Measure);
        }
    }

    /// Container's own cross-axis extent, if fixed.
    #[must_use]
    pub const fn fixed_extent(&self) -> Option<f32> {
        self.fixed_extent
    }

    /// Fix or release (`None`) the cross-axis extent.
    pub fn set_fixed_extent(&mut self, extent: Option<f32>) {
        let unchanged = match (self.fixed_extent, extent) {
            (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
            (a, b) => a.is_none() && b.is_none(),
        };
        if !unchanged {
            self.fixed_extent = extent;
            self.invalidator.notify(Invalidation::Measure);
        }
    }

    /// Position of a child; children without an entry sit at 0.
    #[must_use]
    pub fn position(&self, id: ChildId) -> f32 {
        self.positions.get(&id).copied().unwrap_or(0.0)
    }

    /// Set the position of a child.
    pub fn set_position(&mut self, id: ChildId, position: f32) -> LayoutResult<()> {
        if !position.is_finite() {
            return Err(LayoutError::InvalidParameter {
                name: "position",
                message: format!("must be finite, got {position}"),
            });
        }
        if self.positions.insert(id, position) != Some(position) {
            self.invalidator.notify(Invalidation::Arrange);
        }
        Ok(())
    }

    /// Remove a child's position, returning it to 0.
    pub fn clear_position(&mut self, id: ChildId) {
        if self.positions.remove(&id).is_some() {
            self.invalidator.notify(Invalidation::Arrange);
        }
    }

    /// Cross extent: the fixed value when it is usable, else the largest
    /// child cross extent.
    fn cross_extent(&self, children: &[Child]) -> f32 {
        match self.fixed_extent.filter(|e| e.is_finite()) {
            Some(extent) => extent,
            None => children
                .iter()
                .filter(|c| c.takes_space())
                .map(|c| self.orientation.cross(c.desired_size))
                .fold(0.0, f32::max),
        }
    }
}

impl Layout for ProportionalOffsetLayout {
    fn name(&self) -> &'static str {
        "ProportionalOffsetLayout"
    }

    fn measure(
        &self,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<Size> {
        measure_all(children, measurer, available);
        let main = finite_or_zero(self.orientation.main(available));
        let cross = finite_or_zero(self.cross_extent(children));
        tracing::trace!(main, cross, "proportional measure");
        Ok(self.orientation.size(main, cross))
    }

    fn arrange(&self, final_size: Size, children: &[Child]) -> LayoutResult<Arrangement> {
        let size = final_size.finite_or_zero();
        let extent = self.orientation.main(size);
        let rects = children
            .iter()
            .map(|child| {
                if !child.takes_space() {
                    return Rect::ZERO;
                }
                let desired = child.desired_size.finite_or_zero();
                let offset = self.position(child.id) * (extent - self.orientation.main(desired));
                Rect::from_origin_size(self.orientation.point(offset, 0.0), desired)
            })
            .collect();
        tracing::trace!(children = children.len(), ?size, "proportional arrange");
        Ok(Arrangement { rects, size })
    }

    fn invalidator(&mut self) -> &mut Invalidator {
        &mut self.invalidator
    }
}
