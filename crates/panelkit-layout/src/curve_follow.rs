//! Even arc-length placement along a Bezier path.

use panelkit_core::{
    Child, ChildMeasurer, Invalidation, Invalidator, LayoutError, LayoutResult, Rect, Size,
};

use crate::bezier::BezierPath;
use crate::layout::{Arrangement, Layout};

/// Centres children on points spaced `L / N` apart along a path, where `L`
/// is the sampled path length and `N` the number of space-taking children.
///
/// The first child sits on the path start. The panel has no natural size of
/// its own and reports zero from measure.
#[derive(Debug, Clone, Default)]
pub struct CurveFollowLayout {
    path: Option<BezierPath>,
    invalidator: Invalidator,
}

impl CurveFollowLayout {
    /// Create a layout with no path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layout following `path`.
    #[must_use]
    pub fn with_path(path: BezierPath) -> Self {
        Self {
            path: Some(path),
            invalidator: Invalidator::new(),
        }
    }

    /// Current path, if any.
    #[must_use]
    pub const fn path(&self) -> Option<&BezierPath> {
        self.path.as_ref()
    }

    /// Replace or remove the path; listeners are asked to re-arrange.
    pub fn set_path(&mut self, path: Option<BezierPath>) {
        if self.path != path {
            self.path = path;
            self.invalidator.notify(Invalidation::Arrange);
        }
    }

    /// The path, or an error when children need one and it is absent.
    fn require_path(&self, children: usize) -> LayoutResult<&BezierPath> {
        self.path
            .as_ref()
            .ok_or(LayoutError::MissingPath { children })
    }
}

impl Layout for CurveFollowLayout {
    fn name(&self) -> &'static str {
        "CurveFollowLayout"
    }

    fn measure(
        &self,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<Size> {
        let count = children.iter().filter(|c| c.takes_space()).count();
        if count > 0 {
            let length = self.require_path(count)?.length();
            tracing::trace!(length, count, "curve follow measure");
        }
        for (index, child) in children.iter_mut().enumerate() {
            if child.takes_space() {
                child.desired_size = measurer.measure_child(index, child, available);
            }
        }
        Ok(Size::ZERO)
    }

    fn arrange(&self, final_size: Size, children: &[Child]) -> LayoutResult<Arrangement> {
        let size = final_size.finite_or_zero();
        let count = children.iter().filter(|c| c.takes_space()).count();
        if count == 0 {
            return Ok(Arrangement::empty(children.len(), size));
        }

        let path = self.require_path(count)?;
        let length = path.length();
        let spacing = length / count as f32;
        tracing::trace!(length, spacing, count, "curve follow arrange");

        let mut target = 0.0;
        let rects = children
            .iter()
            .map(|child| {
                if !child.takes_space() {
                    return Rect::ZERO;
                }
                let center = path.point_at_length(target);
                target += spacing;
                Rect::centered_at(center, child.desired_size.finite_or_zero())
            })
            .collect();
        Ok(Arrangement { rects, size })
    }

    fn invalidator(&mut self) -> &mut Invalidator {
        &mut self.invalidator
    }
}
