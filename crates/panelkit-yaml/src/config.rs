//! Declarative panel configuration.

use panelkit_core::{ChildId, Orientation, Point};
use panelkit_layout::{
    BezierPath, BezierSegment, CurveFollowLayout, EqualSplitLayout, FlowWrapLayout,
    GridPackLayout, Layout, ProportionalOffsetLayout,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ParseError;

/// Which strategy a panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Equal slots along one axis
    EqualSplit,
    /// Fractional offset per child
    ProportionalOffset,
    /// Greedy line wrapping
    FlowWrap,
    /// Near-square grid
    GridPack,
    /// Even spacing along a Bezier path
    CurveFollow,
}

impl LayoutKind {
    /// Name as written in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EqualSplit => "equal_split",
            Self::ProportionalOffset => "proportional_offset",
            Self::FlowWrap => "flow_wrap",
            Self::GridPack => "grid_pack",
            Self::CurveFollow => "curve_follow",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path geometry in compact form: a start point and a list of
/// `[control1, control2, end]` triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Start point `[x, y]`
    pub start: [f32; 2],
    /// Cubic segments
    #[serde(default)]
    pub segments: Vec<[[f32; 2]; 3]>,
}

impl PathConfig {
    /// Convert to the layout's path model.
    #[must_use]
    pub fn to_path(&self) -> BezierPath {
        self.segments.iter().fold(
            BezierPath::new(Point::from(self.start)),
            |path, &[c1, c2, end]| {
                path.with_segment(BezierSegment::new(c1.into(), c2.into(), end.into()))
            },
        )
    }

    fn is_finite(&self) -> bool {
        std::iter::once(&self.start)
            .chain(self.segments.iter().flatten())
            .all(|p| p[0].is_finite() && p[1].is_finite())
    }
}

impl From<&BezierPath> for PathConfig {
    fn from(path: &BezierPath) -> Self {
        Self {
            start: [path.start.x, path.start.y],
            segments: path
                .segments
                .iter()
                .map(|s| {
                    [
                        [s.control1.x, s.control1.y],
                        [s.control2.x, s.control2.y],
                        [s.end.x, s.end.y],
                    ]
                })
                .collect(),
        }
    }
}

/// Panel configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Strategy
    pub layout: LayoutKind,
    /// Primary axis (equal split, proportional offset, flow wrap)
    #[serde(default)]
    pub orientation: Orientation,
    /// Item cap (grid pack); omitted means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<f32>,
    /// Fixed cross extent (proportional offset); omitted means auto
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_extent: Option<f32>,
    /// Child id to position (proportional offset)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub positions: BTreeMap<u64, f32>,
    /// Path geometry (curve follow)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathConfig>,
}

impl PanelConfig {
    /// Minimal configuration for a strategy.
    #[must_use]
    pub fn new(layout: LayoutKind) -> Self {
        Self {
            layout,
            orientation: Orientation::default(),
            max_items: None,
            fixed_extent: None,
            positions: BTreeMap::new(),
            path: None,
        }
    }

    /// Parse a configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize configuration to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that every field present applies to the chosen strategy and
    /// holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ParseError> {
        let kind = self.layout;
        self.only_for("max_items", self.max_items.is_some(), LayoutKind::GridPack)?;
        self.only_for(
            "fixed_extent",
            self.fixed_extent.is_some(),
            LayoutKind::ProportionalOffset,
        )?;
        self.only_for(
            "positions",
            !self.positions.is_empty(),
            LayoutKind::ProportionalOffset,
        )?;
        self.only_for("path", self.path.is_some(), LayoutKind::CurveFollow)?;

        if let Some(max) = self.max_items {
            if max < 0.0 {
                return Err(invalid("max_items", format!("must be non-negative, got {max}")));
            }
        }
        if let Some(extent) = self.fixed_extent {
            if !extent.is_finite() || extent < 0.0 {
                return Err(invalid(
                    "fixed_extent",
                    format!("must be finite and non-negative, got {extent}"),
                ));
            }
        }
        if let Some((id, pos)) = self.positions.iter().find(|(_, p)| !p.is_finite()) {
            return Err(invalid("positions", format!("child {id} has non-finite position {pos}")));
        }
        match &self.path {
            None if kind == LayoutKind::CurveFollow => {
                return Err(ParseError::MissingField("path".to_string()));
            }
            Some(path) if !path.is_finite() => {
                return Err(invalid("path", "coordinates must be finite".to_string()));
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and construct the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(&self) -> Result<Box<dyn Layout>, ParseError> {
        self.validate()?;
        tracing::debug!(layout = %self.layout, orientation = ?self.orientation, "building panel");

        let layout: Box<dyn Layout> = match self.layout {
            LayoutKind::EqualSplit => Box::new(EqualSplitLayout::new(self.orientation)),
            LayoutKind::FlowWrap => Box::new(FlowWrapLayout::new(self.orientation)),
            LayoutKind::GridPack => Box::new(
                GridPackLayout::new().with_max_items(self.max_items.unwrap_or(f32::NAN)),
            ),
            LayoutKind::ProportionalOffset => {
                let mut layout = ProportionalOffsetLayout::new(self.orientation);
                if let Some(extent) = self.fixed_extent {
                    layout = layout.with_fixed_extent(extent);
                }
                for (&id, &position) in &self.positions {
                    layout.set_position(ChildId(id), position)?;
                }
                Box::new(layout)
            }
            LayoutKind::CurveFollow => {
                let path = self.path.as_ref().map(PathConfig::to_path).unwrap_or_default();
                Box::new(CurveFollowLayout::with_path(path))
            }
        };
        Ok(layout)
    }

    fn only_for(&self, field: &str, present: bool, owner: LayoutKind) -> Result<(), ParseError> {
        if present && self.layout != owner {
            return Err(ParseError::Validation(format!(
                "'{field}' only applies to {owner} layouts, not {}",
                self.layout
            )));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: String) -> ParseError {
    ParseError::InvalidValue {
        field: field.to_string(),
        message,
    }
}

/// Parse, validate and build a panel in one step.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or fails validation.
pub fn load(yaml: &str) -> Result<Box<dyn Layout>, ParseError> {
    PanelConfig::from_yaml(yaml)?.build()
}
