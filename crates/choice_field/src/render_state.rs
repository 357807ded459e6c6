//! Which of the picker's mutually exclusive branches renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Text shown instead of the control when the field is masked.
pub const MASK_PLACEHOLDER: &str = "****";

/// Dropdown title shown while nothing is selected.
pub const DROPDOWN_PLACEHOLDER: &str = "---";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display-size hint supplied by the host.
pub enum FormFactor {
    /// Compact layout; renders a dropdown.
    Small,
    /// Roomy layout; renders a grouped set of option cards.
    #[default]
    Large,
}

impl FormFactor {
    /// Stable token used for DOM hooks and host properties.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Host passed a form factor other than `small` or `large`.
#[error("unknown form factor `{0}`")]
pub struct UnknownFormFactor(pub String);

impl FromStr for FormFactor {
    type Err = UnknownFormFactor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            other => Err(UnknownFormFactor(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Branch selected for the current render, in priority order.
pub enum RenderState {
    /// Configuration was rejected; only its message renders.
    Error(String),
    /// Field is masked; only [`MASK_PLACEHOLDER`] renders.
    Masked,
    /// Grouped option cards.
    Large,
    /// Dropdown.
    Small,
}

impl RenderState {
    /// Resolves the branch: configuration error, then mask, then form factor.
    pub fn resolve(error: Option<&ConfigError>, masked: bool, form_factor: FormFactor) -> Self {
        if let Some(error) = error {
            return Self::Error(error.to_string());
        }
        if masked {
            return Self::Masked;
        }
        match form_factor {
            FormFactor::Large => Self::Large,
            FormFactor::Small => Self::Small,
        }
    }

    /// Plain text rendered by the non-interactive branches.
    pub fn placeholder_text(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Masked => Some(MASK_PLACEHOLDER),
            Self::Large | Self::Small => None,
        }
    }
}
