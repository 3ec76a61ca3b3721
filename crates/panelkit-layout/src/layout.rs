//! The measure/arrange contract shared by every strategy.

use panelkit_core::{Child, ChildMeasurer, Invalidator, LayoutResult, Rect, Size};
use std::fmt;

/// Result of an arrange pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrangement {
    /// One rectangle per input child, in input order
    pub rects: Vec<Rect>,
    /// Size the container actually consumed
    pub size: Size,
}

impl Arrangement {
    /// All children at [`Rect::ZERO`].
    #[must_use]
    pub fn empty(child_count: usize, size: Size) -> Self {
        Self {
            rects: vec![Rect::ZERO; child_count],
            size,
        }
    }
}

/// A layout strategy.
///
/// # Lifecycle
///
/// 1. `measure`: query each space-taking child through the host callback,
///    store the answer in `Child::desired_size`, report a natural size
/// 2. `arrange`: assign one rectangle per child from the sizes measure stored
///
/// Both passes are pure functions of their inputs and the strategy's
/// parameters; nothing is cached between calls.
pub trait Layout: fmt::Debug + Send + Sync {
    /// Strategy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Compute the container's natural size.
    fn measure(
        &self,
        available: Size,
        children: &mut [Child],
        measurer: &mut dyn ChildMeasurer,
    ) -> LayoutResult<Size>;

    /// Assign a final rectangle to every child.
    fn arrange(&self, final_size: Size, children: &[Child]) -> LayoutResult<Arrangement>;

    /// Listener registry notified when a strategy parameter changes.
    fn invalidator(&mut self) -> &mut Invalidator;
}
