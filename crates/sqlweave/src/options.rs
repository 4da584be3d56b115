//! Framing options for [`list_with`](crate::list_with) and
//! [`keyed_with`](crate::keyed_with).
//!
//! Both records deserialize with per-field defaults, so a configuration file
//! only needs to name the fields it changes.

use serde::{Deserialize, Serialize};

/// Options for a list composition.
///
/// Defaults: `join = ","`, empty `prefix` and `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Text placed between items (surrounded by single spaces). Empty means `,`.
    pub join: String,
    /// Text written before the items, only when they render non-empty.
    pub prefix: String,
    /// Text written after the items, only when they render non-empty.
    pub suffix: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            join: ",".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl ListOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(mut self, join: impl Into<String>) -> Self {
        self.join = join.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Options for a keyed (`key = value`) composition.
///
/// Defaults: `join = ","`, `sep = "="`, empty `prefix` and `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyedOptions {
    /// Text placed between entries (surrounded by single spaces). Empty means `,`.
    pub join: String,
    /// Text placed between a key and its value (surrounded by single spaces).
    /// Empty means `=`.
    pub sep: String,
    /// Text written before the entries, only when they render non-empty.
    pub prefix: String,
    /// Text written after the entries, only when they render non-empty.
    pub suffix: String,
}

impl Default for KeyedOptions {
    fn default() -> Self {
        Self {
            join: ",".to_string(),
            sep: "=".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl KeyedOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(mut self, join: impl Into<String>) -> Self {
        self.join = join.into();
        self
    }

    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}
