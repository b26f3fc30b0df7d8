//! Fixed naming conventions shared by the merge pipeline.

/// Prepended to a retired identifier's original name to form its shadow
/// spelling, e.g. `baz` becomes `hidden_envoy_deprecated_baz`.
pub const DEPRECATED_MARKER_PREFIX: &str = "hidden_envoy_deprecated_";

/// Name the active schema gives a zero-valued enum slot whose original value
/// was retired but cannot be deleted. The authoritative name lives in shadow.
pub const ZERO_VALUE_PLACEHOLDER: &str = "DEPRECATED_AND_UNAVAILABLE_DO_NOT_USE";

/// Nesting depth beyond which a merge is refused.
pub const DEFAULT_MAX_DEPTH: usize = 64;
