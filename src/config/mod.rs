pub mod toml_config;

use serde::{Deserialize, Serialize};

pub use toml_config::KitConfig;

/// Separators used by the path parsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Splits directory segments. Default `/`.
    pub directory_separator: char,
    /// Splits the base name from the extension. Default `.`.
    pub extension_separator: char,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            directory_separator: '/',
            extension_separator: '.',
        }
    }
}

/// Options for [`crate::core::text::join_to_string`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    /// Written between elements. Default `", "`.
    pub separator: String,
    /// Written once before the first element.
    pub prefix: String,
    /// Written once after the last element.
    pub postfix: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            postfix: String::new(),
        }
    }
}

impl JoinOptions {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }
}
