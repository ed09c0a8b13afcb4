//! External-to-internal conversion policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a submitted URL that matches an internal page is handled.
///
/// Configured as a lowercase string in `config.toml`. The legacy values `""`
/// (disabled) and `"all"` (default) are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionPolicy {
    /// Never convert; matching URLs stay external.
    #[serde(alias = "")]
    Disabled,
    /// Convert only exact matches; inexact matches stay external.
    Exact,
    /// Always ask the editor, even for exact matches.
    Confirm,
    /// Convert exact matches silently, ask for inexact ones.
    #[default]
    #[serde(alias = "all")]
    Default,
}

impl ConversionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionPolicy::Disabled => "disabled",
            ConversionPolicy::Exact => "exact",
            ConversionPolicy::Confirm => "confirm",
            ConversionPolicy::Default => "default",
        }
    }
}

impl fmt::Display for ConversionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "disabled" => Ok(ConversionPolicy::Disabled),
            "exact" => Ok(ConversionPolicy::Exact),
            "confirm" => Ok(ConversionPolicy::Confirm),
            "default" | "all" => Ok(ConversionPolicy::Default),
            other => Err(format!(
                "unknown conversion policy '{other}' (expected disabled, exact, confirm or default)"
            )),
        }
    }
}
