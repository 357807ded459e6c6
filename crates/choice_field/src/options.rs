//! Option records derived from host metadata and the icon mapping.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::{parse_icon_configuration, ConfigError, IconMapping};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable option as supplied by the host's option-set metadata.
pub struct ChoiceOption {
    /// Numeric option value.
    #[serde(rename = "Value")]
    pub value: i32,
    /// Display label.
    #[serde(rename = "Label")]
    pub label: String,
}

impl ChoiceOption {
    /// Creates an option from a value and label.
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render-ready option shared by both control types.
///
/// Control-specific decoration (label suffix, card styling, icon placement) is applied
/// when the item is rendered, never stored here.
pub struct ChoiceItem {
    /// Stable key, the stringified value.
    pub key: String,
    /// Numeric option value reported through `on_change`.
    pub value: i32,
    /// Undecorated option label.
    pub label: String,
    /// Configured icon name, if any.
    pub icon: Option<String>,
}

/// Builds one [`ChoiceItem`] per option, preserving order.
pub fn build_choice_items(options: &[ChoiceOption], icons: &IconMapping) -> Vec<ChoiceItem> {
    options
        .iter()
        .map(|option| ChoiceItem {
            key: option.value.to_string(),
            value: option.value,
            label: option.label.clone(),
            icon: icons.get(option.value).map(str::to_string),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
/// Items plus the configuration error, recomputed only when options or configuration change.
pub struct DerivedChoices {
    /// Derived items in option order.
    pub items: Rc<[ChoiceItem]>,
    /// Configuration error, if the icon configuration was rejected.
    pub error: Option<ConfigError>,
}

impl DerivedChoices {
    /// Parses `configuration` and builds the items for `options`.
    ///
    /// A rejected configuration still yields items, just without icons.
    pub fn derive(options: &[ChoiceOption], configuration: Option<&str>) -> Self {
        let (icons, error) = match parse_icon_configuration(configuration) {
            Ok(icons) => (icons, None),
            Err(err) => (IconMapping::default(), Some(err)),
        };
        Self {
            items: build_choice_items(options, &icons).into(),
            error,
        }
    }
}

/// Key of the selected item, or `None` when nothing is selected.
pub fn selected_key(value: Option<i32>) -> Option<String> {
    value.map(|value| value.to_string())
}

/// Maps a control's selected key back to the value carried by the matching item.
///
/// An empty or unknown key means the selection was cleared.
pub fn resolve_selection(items: &[ChoiceItem], key: &str) -> Option<i32> {
    items
        .iter()
        .find(|item| item.key == key)
        .map(|item| item.value)
}
