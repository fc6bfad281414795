//! YAML configuration for the Switcharoo toggle switch.

mod error;
mod manifest;

pub use error::ConfigError;
pub use manifest::{load_switch, load_switch_config, SwitchManifest};
