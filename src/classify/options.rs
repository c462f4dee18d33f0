//! Classification options and configuration.

use std::fmt;
use std::str::FromStr;

/// Words that mark a short page as blank under [`IndicatorPolicy::Legacy`].
///
/// Matched as plain substrings of the lower-cased page text, so "a" and "is"
/// hit nearly every short page that has any prose on it.
pub const LEGACY_INDICATORS: &[&str] = &[
    "page",
    "blank",
    "intentionally",
    "left",
    "empty",
    "this",
    "is",
    "a",
];

/// Phrases that mark a short page as blank under [`IndicatorPolicy::Strict`].
///
/// Matched against the lower-cased text with whitespace runs collapsed to a
/// single space.
pub const STRICT_PHRASES: &[&str] = &[
    "intentionally left blank",
    "intentionally left empty",
    "intentionally blank",
    "this page is blank",
    "page left blank",
    "blank page",
];

/// How a short page's text is tested for blank-page wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorPolicy {
    /// Substring match against [`LEGACY_INDICATORS`]
    #[default]
    Legacy,
    /// Phrase match against [`STRICT_PHRASES`]
    Strict,
}

impl fmt::Display for IndicatorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorPolicy::Legacy => f.write_str("legacy"),
            IndicatorPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for IndicatorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(IndicatorPolicy::Legacy),
            "strict" => Ok(IndicatorPolicy::Strict),
            other => Err(format!("unknown indicator policy: {}", other)),
        }
    }
}

/// Options for classifying pages.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Pages with at least this many non-whitespace characters are content
    pub min_content_chars: usize,

    /// Short pages below this many non-whitespace characters are blank
    /// regardless of wording
    pub min_any_chars: usize,

    /// Blank-page wording test applied to short pages
    pub policy: IndicatorPolicy,

    /// Apply Unicode NFKC normalization before measuring text.
    ///
    /// Off by default: ligatures and full-width forms expand under NFKC,
    /// which can lift a short page over `min_content_chars`.
    pub normalize_unicode: bool,

    /// Classify pages in parallel
    pub parallel: bool,
}

impl ClassifyOptions {
    /// Create new classify options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content threshold.
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }

    /// Set the floor below which a short page is always blank.
    pub fn with_min_any_chars(mut self, chars: usize) -> Self {
        self.min_any_chars = chars;
        self
    }

    /// Set the indicator policy.
    pub fn with_policy(mut self, policy: IndicatorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use [`IndicatorPolicy::Strict`].
    pub fn strict(mut self) -> Self {
        self.policy = IndicatorPolicy::Strict;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            min_content_chars: 50,
            min_any_chars: 10,
            policy: IndicatorPolicy::Legacy,
            normalize_unicode: false,
            parallel: true,
        }
    }
}
