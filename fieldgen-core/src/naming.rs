//! File naming styles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::to_kebab_case;

/// Naming style applied to generated file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NamingStyle {
    /// Identifiers are used as-is (e.g., "UserFields").
    #[default]
    CamelCase,
    /// Identifiers are hyphenated and lower-cased (e.g., "user-fields").
    KebabCase,
}

/// A naming style outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid file naming style '{value}', expected 'camelCase' or 'kebab-case'")]
pub struct InvalidNamingStyle {
    pub value: String,
}

impl NamingStyle {
    /// All supported styles, in their canonical spelling.
    pub const ALL: [NamingStyle; 2] = [NamingStyle::CamelCase, NamingStyle::KebabCase];

    /// The canonical spelling of this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::KebabCase => "kebab-case",
        }
    }

    /// Transform an identifier into a file name stem.
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingStyle::CamelCase => name.to_string(),
            NamingStyle::KebabCase => to_kebab_case(name),
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingStyle {
    type Err = InvalidNamingStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| InvalidNamingStyle {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for NamingStyle {
    type Error = InvalidNamingStyle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamingStyle> for String {
    fn from(style: NamingStyle) -> Self {
        style.as_str().to_string()
    }
}
