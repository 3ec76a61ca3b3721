//! Child descriptors and the host measurement callback.
//!
//! A [`Child`] mirrors what a host toolkit knows about one element of a
//! container: its identity, visibility, margin and the desired size its own
//! measurement produced. Panels never own the host element; they read and
//! update these descriptors during a layout pass.

use crate::geometry::{Margin, Size};
use serde::{Deserialize, Serialize};

/// Stable identity of a host-owned child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChildId(pub u64);

impl ChildId {
    /// Create a new child ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Visibility state of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Takes space and is drawn
    #[default]
    Visible,
    /// Takes space but is not drawn
    Hidden,
    /// Takes no space
    Collapsed,
}

impl Visibility {
    /// Whether a child in this state takes part in space allocation.
    #[must_use]
    pub const fn takes_space(self) -> bool {
        !matches!(self, Self::Collapsed)
    }
}

/// Layout-facing view of one host child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Child {
    /// Identity used for side-maps such as proportional positions
    pub id: ChildId,
    /// Size reported by the child's own measurement
    pub desired_size: Size,
    /// Outer insets
    pub margin: Margin,
    /// Visibility state
    pub visibility: Visibility,
}

impl Child {
    /// Create a visible child with no margin and an unmeasured size.
    #[must_use]
    pub const fn new(id: ChildId) -> Self {
        Self {
            id,
            desired_size: Size::ZERO,
            margin: Margin::ZERO,
            visibility: Visibility::Visible,
        }
    }

    /// Set the desired size.
    #[must_use]
    pub const fn with_desired_size(mut self, size: Size) -> Self {
        self.desired_size = size;
        self
    }

    /// Set the margin.
    #[must_use]
    pub const fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Set the visibility.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Whether this child takes part in space allocation.
    #[must_use]
    pub const fn takes_space(&self) -> bool {
        self.visibility.takes_space()
    }
}

/// Host-provided measurement callback.
///
/// A panel calls this once per non-collapsed child during its measure pass,
/// passing the child's index and the space the panel offers it. The returned
/// size becomes the child's `desired_size`.
pub trait ChildMeasurer {
    /// Measure the child at `index` against `available`.
    fn measure_child(&mut self, index: usize, child: &Child, available: Size) -> Size;
}

impl<F> ChildMeasurer for F
where
    F: FnMut(usize, &Child, Size) -> Size,
{
    fn measure_child(&mut self, index: usize, child: &Child, available: Size) -> Size {
        self(index, child, available)
    }
}

/// Measurer for hosts whose children already carry a resolved
/// `desired_size`; it reports that size back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Premeasured;

impl ChildMeasurer for Premeasured {
    fn measure_child(&mut self, _index: usize, child: &Child, _available: Size) -> Size {
        child.desired_size
    }
}

/// Measure every space-taking child with the same available size.
pub fn measure_all(children: &mut [Child], measurer: &mut dyn ChildMeasurer, available: Size) {
    for (index, child) in children.iter_mut().enumerate() {
        if child.takes_space() {
            child.desired_size = measurer.measure_child(index, child, available);
        }
    }
}
