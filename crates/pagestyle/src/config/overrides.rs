//! Loading and applying the optional startup override document.
//!
//! The override document is a flat map from constant name (the field names of
//! [`Config`]) to replacement value:
//!
//! ```yaml
//! font_size: 11
//! word_wrap: RTL
//! box_background: "#f4f4f4"
//! page_margin_left: 42.5
//! ```
//!
//! Loading follows a strict contract:
//!
//! | Situation | Result |
//! |-----------|--------|
//! | File does not exist | `Ok(None)`, defaults stand |
//! | File exists and parses to a map | `Ok(Some(overrides))` |
//! | Any other read or parse failure | `Err(ConfigError)` |
//!
//! Applying overrides is equally strict: unknown names and ill-typed values
//! are errors, never silently skipped.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use super::error::ConfigError;
use super::store::Config;

/// Well-known file name of the override document.
pub const CUSTOM_CONFIG_FILE: &str = "customconfig.yaml";

/// A set of replacement values for named [`Config`] constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    values: BTreeMap<String, Value>,
}

impl Overrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a replacement value, returning the updated set for chaining.
    ///
    /// ```rust
    /// use pagestyle::Overrides;
    ///
    /// let overrides = Overrides::new()
    ///     .set("font_size", 11.0)
    ///     .set("word_wrap", "RTL");
    /// assert_eq!(overrides.len(), 2);
    /// ```
    pub fn set<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Parses a YAML override document. An empty document yields no overrides.
    pub fn from_yaml_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let yaml: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))?;
        if yaml.is_null() {
            return Ok(Self::new());
        }
        let json = serde_json::to_value(&yaml).map_err(|e| parse_error(e.to_string()))?;
        Self::from_json_value(json, path)
    }

    /// Parses a JSON override document.
    pub fn from_json_str(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let json: Value = serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_value(json, path)
    }

    fn from_json_value(value: Value, path: &Path) -> Result<Self, ConfigError> {
        match value {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            _ => Err(ConfigError::NotAMap {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Names of the constants this set replaces, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Loads the override document at `path`, if there is one.
///
/// The format is chosen from the extension: `.yaml`/`.yml` or `.json`.
pub fn load(path: &Path) -> Result<Option<Overrides>, ConfigError> {
    let is_json = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => false,
        Some("json") => true,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config override at {}, using defaults", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let overrides = if is_json {
        Overrides::from_json_str(&source, path)?
    } else {
        Overrides::from_yaml_str(&source, path)?
    };
    log::info!(
        "loaded {} config override(s) from {}",
        overrides.len(),
        path.display()
    );
    Ok(Some(overrides))
}

impl Config {
    /// Replaces every constant named in `overrides`, returning the merged config.
    ///
    /// Values are checked one name at a time so that the error points at the
    /// offending constant.
    pub(crate) fn merge(self, overrides: Overrides) -> Result<Config, ConfigError> {
        let mut merged = self;
        for (key, value) in overrides.values {
            let mut fields = merged.to_fields();
            match fields.get_mut(&key) {
                Some(slot) => *slot = value,
                None => return Err(ConfigError::UnknownKey { key }),
            }
            merged = serde_json::from_value(Value::Object(fields))
                .map_err(|e| ConfigError::InvalidValue {
                    key,
                    message: e.to_string(),
                })?;
        }
        Ok(merged)
    }

    fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields,
            _ => unreachable!("Config always serializes to a JSON object"),
        }
    }
}
