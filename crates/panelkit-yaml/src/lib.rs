//! YAML panel configuration for panelkit.
//!
//! ```yaml
//! layout: grid_pack
//! max_items: 6
//! ```
//!
//! [`PanelConfig::from_yaml`] parses, [`PanelConfig::validate`] checks that
//! each field applies to the chosen strategy, and [`PanelConfig::build`]
//! returns the strategy as a `Box<dyn Layout>`.

mod config;
mod error;

pub use config::{load, LayoutKind, PanelConfig, PathConfig};
pub use error::ParseError;
