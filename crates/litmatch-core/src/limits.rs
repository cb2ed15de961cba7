//! Resource limits and engine toggles for a literal matcher build.

use serde::Deserialize;

/// Limits consulted by every build. Read-only for the duration of a build.
///
/// Missing JSON fields take the production defaults; unknown fields are
/// rejected so a typo never silently disables a limit.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of literals in one matcher.
    pub max_literal_count: usize,
    /// Maximum length of a single literal, in bytes.
    pub max_literal_len: usize,
    /// Maximum sum of literal lengths in one matcher.
    pub max_matcher_chars: u64,
    /// Maximum size of an engine table, in bytes.
    pub max_bytecode_size: usize,
    /// Allow the single-literal engine for one unmasked literal.
    pub allow_single_literal: bool,
    /// Allow the small-set SIMD engine inside the multi-literal family.
    pub allow_secondary_simd: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_literal_count: 8_000_000,
            max_literal_len: 16_000,
            max_matcher_chars: 1 << 30,
            max_bytecode_size: 1 << 30,
            allow_single_literal: true,
            allow_secondary_simd: true,
        }
    }
}

impl LimitsConfig {
    /// Parse limits from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
