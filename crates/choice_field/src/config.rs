//! Icon-mapping configuration parsing.
//!
//! The host hands the picker a JSON object such as `{"1":"Mail","2":"Phone"}` that
//! associates option values with Fluent icon names. Text that is not JSON, or an entry whose
//! icon is not a string, is reported as a [`ConfigError`] whose display text is what the
//! picker renders in place of the control. Keys that can never match an option value, and
//! documents that are not objects, carry no icons and are skipped with a warning.

use std::collections::BTreeMap;

use leptos::logging;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Validated mapping from option value to icon name.
pub struct IconMapping {
    icons: BTreeMap<i32, String>,
}

impl IconMapping {
    /// Returns the icon name configured for `value`, if any.
    pub fn get(&self, value: i32) -> Option<&str> {
        self.icons.get(&value).map(String::as_str)
    }

    /// Number of configured icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether no icon is configured.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl FromIterator<(i32, String)> for IconMapping {
    fn from_iter<T: IntoIterator<Item = (i32, String)>>(iter: T) -> Self {
        Self {
            icons: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Detailed cause of a rejected configuration.
pub enum ConfigErrorKind {
    /// The text is not valid JSON.
    #[error("malformed JSON: {0}")]
    Syntax(String),
    /// A value is not an icon name string.
    #[error("icon for key `{key}` must be a string, found {found}")]
    InvalidIcon {
        /// Offending key.
        key: String,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration rejected by [`parse_icon_configuration`].
///
/// The display form is the exact message shown to the user; the detailed cause is
/// available through [`std::error::Error::source`] and [`ConfigError::kind`].
#[error("Invalid configuration: '{raw}'")]
pub struct ConfigError {
    raw: String,
    #[source]
    kind: ConfigErrorKind,
}

impl ConfigError {
    fn new(raw: &str, kind: ConfigErrorKind) -> Self {
        Self {
            raw: raw.to_string(),
            kind,
        }
    }

    /// Raw configuration text as supplied by the host.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Detailed cause of the rejection.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

/// Parses the host-supplied icon configuration.
///
/// `None` and the empty string both mean "no configuration" and yield an empty mapping.
///
/// # Errors
///
/// Returns [`ConfigError`] when the text is not valid JSON or an icon is not a string.
pub fn parse_icon_configuration(raw: Option<&str>) -> Result<IconMapping, ConfigError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(IconMapping::default()),
    };

    let document: Value = serde_json::from_str(raw)
        .map_err(|err| ConfigError::new(raw, ConfigErrorKind::Syntax(err.to_string())))?;
    let entries = match document {
        Value::Object(entries) => entries,
        other => {
            logging::warn!(
                "icon configuration ignored: expected an object, found {}",
                json_type(&other)
            );
            return Ok(IconMapping::default());
        }
    };

    let mut icons = BTreeMap::new();
    for (key, icon) in entries {
        match (parse_option_key(&key), icon) {
            (Some(value), Value::String(icon)) => {
                icons.insert(value, icon);
            }
            (None, Value::String(_)) => {
                logging::warn!("icon configuration key `{key}` is not an option value; skipped");
            }
            (_, other) => {
                return Err(ConfigError::new(
                    raw,
                    ConfigErrorKind::InvalidIcon {
                        key,
                        found: json_type(&other),
                    },
                ));
            }
        }
    }

    Ok(IconMapping { icons })
}

// Only the canonical spelling can ever match an option key, so "01" or "+1" never do.
fn parse_option_key(key: &str) -> Option<i32> {
    key.parse::<i32>()
        .ok()
        .filter(|value| value.to_string() == key)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn absent_or_empty_configuration_yields_empty_mapping() {
        assert_eq!(parse_icon_configuration(None), Ok(IconMapping::default()));
        assert_eq!(parse_icon_configuration(Some("")), Ok(IconMapping::default()));
    }

    #[test]
    fn object_of_integer_keys_parses_into_mapping() {
        let mapping =
            parse_icon_configuration(Some(r#"{"1":"Mail","2":"Phone","-4":"Globe"}"#))
                .expect("valid configuration");

        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get(1), Some("Mail"));
        assert_eq!(mapping.get(2), Some("Phone"));
        assert_eq!(mapping.get(-4), Some("Globe"));
        assert_eq!(mapping.get(3), None);
    }

    #[test]
    fn empty_object_is_valid() {
        let mapping = parse_icon_configuration(Some("{}")).expect("valid configuration");
        assert!(mapping.is_empty());
    }

    #[test]
    fn malformed_json_reports_raw_text() {
        let err = parse_icon_configuration(Some("{not json")).expect_err("malformed");

        assert_eq!(err.to_string(), "Invalid configuration: '{not json'");
        assert_eq!(err.raw(), "{not json");
        assert!(matches!(err.kind(), ConfigErrorKind::Syntax(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn whitespace_only_configuration_is_malformed() {
        let err = parse_icon_configuration(Some("   ")).expect_err("blank");
        assert_eq!(err.to_string(), "Invalid configuration: '   '");
    }

    #[test]
    fn non_object_documents_carry_no_icons() {
        for raw in ["null", "[1,2]", "[]", "3", "\"Mail\""] {
            assert_eq!(parse_icon_configuration(Some(raw)), Ok(IconMapping::default()));
        }
    }

    #[test]
    fn keys_that_cannot_match_an_option_are_skipped() {
        for key in ["abc", "01", "+1", "1.5", "99999999999"] {
            let raw = format!(r#"{{"{key}":"Mail","2":"Phone"}}"#);
            let mapping = parse_icon_configuration(Some(&raw)).expect("valid configuration");
            assert_eq!(mapping.len(), 1);
            assert_eq!(mapping.get(2), Some("Phone"));
        }
    }

    #[test]
    fn non_string_icons_are_rejected() {
        let err = parse_icon_configuration(Some(r#"{"1":"Mail","2":7}"#)).expect_err("bad icon");

        assert_eq!(
            err.kind(),
            &ConfigErrorKind::InvalidIcon {
                key: "2".to_string(),
                found: "a number",
            }
        );
        assert_eq!(
            err.kind().to_string(),
            "icon for key `2` must be a string, found a number"
        );
    }
}
