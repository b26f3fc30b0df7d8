use serde::{Deserialize, Serialize};

use pxm_types::{DEFAULT_MAX_DEPTH, DEPRECATED_MARKER_PREFIX, ZERO_VALUE_PLACEHOLDER};

/// Configuration for an active/shadow merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Prefix that marks a retired identifier in the shadow tree.
    pub deprecated_prefix: String,
    /// Name active uses for an undeletable zero-valued slot. Informational:
    /// the merge treats it like any other phase-1 name.
    pub placeholder_name: String,
    /// Deepest nesting level the merge will descend to before giving up.
    pub max_depth: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            deprecated_prefix: DEPRECATED_MARKER_PREFIX.to_string(),
            placeholder_name: ZERO_VALUE_PLACEHOLDER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MergeConfig {
    /// Default configuration with a custom marker prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            deprecated_prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// Strip the marker prefix, yielding the identifier's original name.
    ///
    /// Returns `None` when `name` does not carry the prefix.
    pub fn original_name<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.deprecated_prefix.as_str())
    }
}
