#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
//! Layout strategies for panelkit panels.
//!
//! Every strategy implements [`Layout`]: a measure pass that asks the host
//! for each child's desired size and reports a natural size, followed by an
//! arrange pass that assigns one rectangle per child.
//!
//! | Strategy | Placement |
//! |---|---|
//! | [`EqualSplitLayout`] | equal slots along one axis |
//! | [`ProportionalOffsetLayout`] | per-child fractional offset along one axis |
//! | [`FlowWrapLayout`] | greedy line wrapping with cross-axis centring |
//! | [`GridPackLayout`] | near-square grid with a remainder first column |
//! | [`CurveFollowLayout`] | even arc-length spacing along a Bezier path |
//!
//! [`LayoutEngine`] runs both passes for one panel and re-runs only the pass
//! a parameter change invalidated.

mod bezier;
mod curve_follow;
mod engine;
mod equal_split;
mod flow_wrap;
mod grid_pack;
mod layout;
mod proportional;

pub use bezier::{cubic_point, BezierPath, BezierSegment, SAMPLES_PER_SEGMENT};
pub use curve_follow::CurveFollowLayout;
pub use engine::{LayoutEngine, LayoutTree};
pub use equal_split::EqualSplitLayout;
pub use flow_wrap::FlowWrapLayout;
pub use grid_pack::{pack_slots, GridPackLayout, GridShape, GUTTER};
pub use layout::{Arrangement, Layout};
pub use proportional::ProportionalOffsetLayout;
