//! YAML switch definitions.
//!
//! A document either holds the switch fields at its root or nests them under
//! a `switch:` key:
//!
//! ```yaml
//! switch:
//!   is_on: true
//!   padding: 4
//!   on_color: "#34c759"
//! ```
//!
//! Missing fields take the widget defaults. Field names are also accepted in
//! camelCase (`isOn`, `dotColor`, ...).

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use switcharoo_core::Color;
use switcharoo_widgets::{SwitchConfig, Switcharoo};

const ROOT_KEY: &str = "switch";

/// Switch definition as written in YAML.
///
/// Colors stay as strings so that a bad value can be reported against the
/// field it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchManifest {
    /// Initial state
    #[serde(alias = "isOn", skip_serializing_if = "Option::is_none")]
    pub is_on: Option<bool>,
    /// Knob inset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Knob color as hex
    #[serde(alias = "dotColor", skip_serializing_if = "Option::is_none")]
    pub dot_color: Option<String>,
    /// Fill color as hex
    #[serde(alias = "onColor", skip_serializing_if = "Option::is_none")]
    pub on_color: Option<String>,
    /// Track color as hex
    #[serde(alias = "offColor", skip_serializing_if = "Option::is_none")]
    pub off_color: Option<String>,
}

#[derive(Serialize)]
struct Document<'a> {
    switch: &'a SwitchManifest,
}

impl SwitchManifest {
    /// Parse a definition from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, the root is not a mapping,
    /// the `switch:` key has siblings, or a field has the wrong type or an
    /// unknown name.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let root: Value = serde_yaml_ng::from_str(yaml)?;
        let body = match root.get(ROOT_KEY) {
            Some(nested) => {
                if let Some(stray) = stray_root_key(&root) {
                    return Err(ConfigError::UnexpectedRootKey(stray));
                }
                nested.clone()
            }
            None => root,
        };

        if body.is_null() {
            return Ok(Self::default());
        }
        if !body.is_mapping() {
            return Err(ConfigError::NotAMapping);
        }
        Ok(serde_yaml_ng::from_value(body)?)
    }

    /// Serialize under a `switch:` key.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(&Document { switch: self })?)
    }

    /// Describe an existing configuration, writing every field.
    #[must_use]
    pub fn from_config(config: &SwitchConfig) -> Self {
        Self {
            is_on: Some(config.is_on),
            padding: Some(config.padding),
            dot_color: Some(config.dot_color.to_hex_with_alpha()),
            on_color: Some(config.on_color.to_hex_with_alpha()),
            off_color: Some(config.off_color.to_hex_with_alpha()),
        }
    }

    /// Validate and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a color is not valid hex or the padding is
    /// negative or not finite.
    pub fn resolve(&self) -> Result<SwitchConfig, ConfigError> {
        let defaults = SwitchConfig::default();

        let padding = self.padding.unwrap_or(defaults.padding);
        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigError::InvalidPadding(padding));
        }

        Ok(SwitchConfig {
            is_on: self.is_on.unwrap_or(defaults.is_on),
            padding,
            dot_color: parse_color("dot_color", self.dot_color.as_deref(), defaults.dot_color)?,
            on_color: parse_color("on_color", self.on_color.as_deref(), defaults.on_color)?,
            off_color: parse_color("off_color", self.off_color.as_deref(), defaults.off_color)?,
        })
    }
}

/// First root key other than `switch`, if any.
fn stray_root_key(root: &Value) -> Option<String> {
    root.as_mapping()?
        .keys()
        .find(|key| key.as_str() != Some(ROOT_KEY))
        .map(|key| key.as_str().map_or_else(|| format!("{key:?}"), str::to_string))
}

fn parse_color(
    field: &'static str,
    value: Option<&str>,
    default: Color,
) -> Result<Color, ConfigError> {
    value.map_or(Ok(default), |hex| {
        Color::from_hex(hex).map_err(|source| ConfigError::InvalidColor { field, source })
    })
}

/// Load a validated switch configuration from YAML.
///
/// # Errors
///
/// See [`SwitchManifest::from_yaml`] and [`SwitchManifest::resolve`].
pub fn load_switch_config(yaml: &str) -> Result<SwitchConfig, ConfigError> {
    SwitchManifest::from_yaml(yaml)?.resolve()
}

/// Build a switch widget from YAML.
///
/// # Errors
///
/// See [`load_switch_config`].
pub fn load_switch(yaml: &str) -> Result<Switcharoo, ConfigError> {
    load_switch_config(yaml).map(Switcharoo::with_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use switcharoo_core::ColorParseError;

    const NESTED_YAML: &str = r##"
switch:
  is_on: true
  padding: 4
  dot_color: "#000000"
  on_color: "#34c759"
  off_color: "#e5e5ea"
"##;

    // ===== Parsing =====

    #[test]
    fn test_nested_document() {
        let config = load_switch_config(NESTED_YAML).unwrap();
        assert!(config.is_on);
        assert_eq!(config.padding, 4.0);
        assert_eq!(config.dot_color, Color::BLACK);
        assert_eq!(config.on_color, Color::from_hex("#34c759").unwrap());
        assert_eq!(config.off_color, Color::from_hex("#e5e5ea").unwrap());
    }

    #[test]
    fn test_bare_document() {
        let config = load_switch_config("is_on: true\npadding: 2.5\n").unwrap();
        assert!(config.is_on);
        assert_eq!(config.padding, 2.5);
        assert_eq!(config.on_color, Color::GREEN);
    }

    #[test]
    fn test_camel_case_aliases() {
        let config = load_switch_config("isOn: true\ndotColor: \"#ff0000\"\n").unwrap();
        assert!(config.is_on);
        assert_eq!(config.dot_color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(load_switch_config("").unwrap(), SwitchConfig::default());
        assert_eq!(
            load_switch_config("switch:\n").unwrap(),
            SwitchConfig::default()
        );
    }

    #[test]
    fn test_load_switch_builds_widget() {
        let switch = load_switch(NESTED_YAML).unwrap();
        assert!(switch.is_on());
        assert_eq!(switch.config().padding, 4.0);
    }

    // ===== Errors =====

    #[test]
    fn test_invalid_color_names_field() {
        let err = load_switch_config("off_color: \"#12\"\n").unwrap_err();
        match err {
            ConfigError::InvalidColor { field, .. } => assert_eq!(field, "off_color"),
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_padding_rejected() {
        let err = load_switch_config("padding: -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPadding(p) if p == -1.0));
    }

    #[test]
    fn test_non_finite_padding_rejected() {
        let err = load_switch_config("padding: .nan\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPadding(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = load_switch_config("colour: \"#ffffff\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = load_switch_config("is_on: maybe\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_scalar_root_rejected() {
        let err = load_switch_config("42\n").unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping));
    }

    #[test]
    fn test_fields_beside_switch_key_rejected() {
        let err = load_switch_config("switch: {}\nis_on: true\n").unwrap_err();
        match err {
            ConfigError::UnexpectedRootKey(key) => assert_eq!(key, "is_on"),
            other => panic!("Expected UnexpectedRootKey, got {other:?}"),
        }

        let err = load_switch_config("padding: 2\nswitch:\n  is_on: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedRootKey(key) if key == "padding"));
    }

    #[test]
    fn test_signed_hex_color_rejected() {
        let err = load_switch_config("on_color: \"+1+2+3\"\n").unwrap_err();
        match err {
            ConfigError::InvalidColor { field, source } => {
                assert_eq!(field, "on_color");
                assert_eq!(source, ColorParseError::InvalidHex("+1+2+3".to_string()));
            }
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = load_switch_config("switch: [unclosed\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    // ===== Serialization =====

    #[test]
    fn test_to_yaml_nests_under_switch() {
        let manifest = SwitchManifest {
            is_on: Some(true),
            ..SwitchManifest::default()
        };
        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.starts_with("switch:"));
        assert!(yaml.contains("is_on: true"));
        assert!(!yaml.contains("padding"));
    }

    #[test]
    fn test_config_survives_yaml() {
        let config = SwitchConfig {
            is_on: true,
            padding: 3.0,
            dot_color: Color::BLACK,
            on_color: Color::from_hex("#336699").unwrap(),
            off_color: Color::WHITE,
        };
        let yaml = SwitchManifest::from_config(&config).to_yaml().unwrap();
        assert_eq!(load_switch_config(&yaml).unwrap(), config);
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let defaults = SwitchConfig::default();
        let yaml = SwitchManifest::from_config(&defaults).to_yaml().unwrap();
        assert!(yaml.contains("#808080ff"));
        assert_eq!(load_switch_config(&yaml).unwrap(), defaults);
    }

    proptest! {
        #[test]
        fn prop_valid_padding_accepted(padding in 0.0f32..100.0) {
            let yaml = format!("padding: {padding}\n");
            let config = load_switch_config(&yaml).unwrap();
            prop_assert!((config.padding - padding).abs() <= f32::EPSILON * padding.max(1.0));
        }
    }
}
