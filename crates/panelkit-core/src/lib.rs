//! Core types for the panelkit layout strategies.
//!
//! This crate provides the vocabulary shared by every panel:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Margin`]
//! - Axis selection: [`Orientation`]
//! - Host boundary: [`Child`] descriptors and the [`ChildMeasurer`] callback
//! - Parameter-change notification: [`Invalidator`]
//! - Errors: [`LayoutError`]

mod child;
mod error;
mod geometry;
mod invalidation;
mod orientation;

pub use child::{measure_all, Child, ChildId, ChildMeasurer, Premeasured, Visibility};
pub use error::{LayoutError, LayoutResult};
pub use geometry::{finite_or_zero, Margin, Point, Rect, Size};
pub use invalidation::{Invalidation, InvalidationListener, Invalidator};
pub use orientation::Orientation;
