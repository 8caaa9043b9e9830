//! Binding configuration.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Which interaction validates a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Validate when the field loses focus.
    #[default]
    OnBlur,
    /// Validate after every value change.
    OnChange,
    /// Validate only when a submit is requested.
    OnSubmit,
}

impl ValidationMode {
    /// The camel-case name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnBlur => "onBlur",
            Self::OnChange => "onChange",
            Self::OnSubmit => "onSubmit",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = FormError;

    /// Accepts `onBlur` as well as `on-blur` and `blur`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.trim_start_matches("on") {
            "blur" => Ok(Self::OnBlur),
            "change" => Ok(Self::OnChange),
            "submit" => Ok(Self::OnSubmit),
            _ => Err(FormError::InvalidMode(s.to_string())),
        }
    }
}

/// How a [`FormBinding`](crate::FormBinding) validates registered fields.
///
/// `mode` applies until the first submit attempt, `revalidate_mode` after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BindingConfig {
    /// Validation trigger before the first submit.
    pub mode: ValidationMode,
    /// Validation trigger after the first submit.
    pub revalidate_mode: ValidationMode,
}

impl BindingConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("onBlur".parse::<ValidationMode>().unwrap(), ValidationMode::OnBlur);
        assert_eq!("on-change".parse::<ValidationMode>().unwrap(), ValidationMode::OnChange);
        assert_eq!("submit".parse::<ValidationMode>().unwrap(), ValidationMode::OnSubmit);
        assert!(matches!(
            "hover".parse::<ValidationMode>(),
            Err(FormError::InvalidMode(name)) if name == "hover"
        ));
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [ValidationMode::OnBlur, ValidationMode::OnChange, ValidationMode::OnSubmit] {
            assert_eq!(mode.to_string().parse::<ValidationMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_defaults() {
        let config = BindingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BindingConfig::default());
        assert_eq!(config.mode, ValidationMode::OnBlur);
        assert_eq!(config.revalidate_mode, ValidationMode::OnBlur);
    }

    #[test]
    fn test_partial_config() {
        let config = BindingConfig::from_json_str(r#"{"revalidateMode": "onChange"}"#).unwrap();
        assert_eq!(config.mode, ValidationMode::OnBlur);
        assert_eq!(config.revalidate_mode, ValidationMode::OnChange);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"mode": "onSubmit"}}"#).unwrap();

        let config = BindingConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.mode, ValidationMode::OnSubmit);
    }

    #[test]
    fn test_missing_file() {
        let result = BindingConfig::from_json_file("/nonexistent/formstate.json");
        assert!(matches!(result, Err(FormError::Io(_))));
    }
}
