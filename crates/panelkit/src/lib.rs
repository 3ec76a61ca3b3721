//! panelkit: deterministic 2D panel layout.
//!
//! Five strategies compute child rectangles from a container size and each
//! child's desired size:
//!
//! ```
//! use panelkit::layout::{FlowWrapLayout, Layout};
//! use panelkit::{Child, ChildId, Orientation, Size};
//!
//! let layout = FlowWrapLayout::new(Orientation::Horizontal);
//! let children: Vec<Child> = (0..4)
//!     .map(|i| Child::new(ChildId(i)).with_desired_size(Size::new(30.0, 10.0)))
//!     .collect();
//! let arrangement = layout.arrange(Size::new(100.0, 100.0), &children).unwrap();
//! assert_eq!(arrangement.rects[3].y, 10.0);
//! ```
//!
//! Panels can also be described in YAML; see [`yaml::PanelConfig`].

#![allow(clippy::doc_markdown)]

pub use panelkit_core::*;
pub use panelkit_layout as layout;
pub use panelkit_yaml as yaml;

/// Common imports for hosts driving panels.
pub mod prelude {
    pub use panelkit_core::{
        Child, ChildId, ChildMeasurer, Invalidation, LayoutError, Orientation, Point, Rect, Size,
        Visibility,
    };
    pub use panelkit_layout::{
        BezierPath, CurveFollowLayout, EqualSplitLayout, FlowWrapLayout, GridPackLayout, Layout,
        LayoutEngine, ProportionalOffsetLayout,
    };
    pub use panelkit_yaml::PanelConfig;
}
