//! The per-page blank/content decision.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::options::{ClassifyOptions, IndicatorPolicy, LEGACY_INDICATORS, STRICT_PHRASES};

/// Classifier verdict for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Nothing worth keeping on the page
    Blank,
    /// The page carries content
    Content,
}

impl Verdict {
    /// Check if this verdict is [`Verdict::Blank`].
    pub fn is_blank(self) -> bool {
        self == Verdict::Blank
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers like {:7} work in report tables
        match self {
            Verdict::Blank => f.pad("BLANK"),
            Verdict::Content => f.pad("CONTENT"),
        }
    }
}

/// Classify a page from its extracted text.
///
/// Text whose non-whitespace length reaches `min_content_chars` is always
/// content. Shorter text is blank when it is empty, shorter than
/// `min_any_chars`, or matches the configured [`IndicatorPolicy`].
///
/// # Example
///
/// ```
/// use pagesieve::{classify, ClassifyOptions, Verdict};
///
/// let options = ClassifyOptions::default();
/// assert_eq!(classify("  \n\t ", &options), Verdict::Blank);
/// assert_eq!(classify(&"x".repeat(60), &options), Verdict::Content);
/// ```
pub fn classify(text: &str, options: &ClassifyOptions) -> Verdict {
    let text = normalize(text, options);
    let stripped = text.trim();
    let cleaned_len = stripped.chars().filter(|c| !c.is_whitespace()).count();

    if cleaned_len == 0 {
        return Verdict::Blank;
    }

    if cleaned_len >= options.min_content_chars {
        return Verdict::Content;
    }

    if cleaned_len < options.min_any_chars || has_blank_indicator(stripped, options.policy) {
        Verdict::Blank
    } else {
        Verdict::Content
    }
}

/// Classify with default options.
pub fn classify_text(text: &str) -> Verdict {
    classify(text, &ClassifyOptions::default())
}

/// Length of the trimmed text in characters, as reported per page.
pub fn text_length(text: &str, options: &ClassifyOptions) -> usize {
    normalize(text, options).trim().chars().count()
}

fn normalize<'a>(text: &'a str, options: &ClassifyOptions) -> Cow<'a, str> {
    if options.normalize_unicode && !text.is_ascii() {
        Cow::Owned(text.nfkc().collect())
    } else {
        Cow::Borrowed(text)
    }
}

fn has_blank_indicator(stripped: &str, policy: IndicatorPolicy) -> bool {
    let lower = stripped.to_lowercase();
    match policy {
        IndicatorPolicy::Legacy => LEGACY_INDICATORS
            .iter()
            .any(|indicator| lower.contains(indicator)),
        IndicatorPolicy::Strict => strict_phrase_regex().is_match(&lower),
    }
}

fn strict_phrase_regex() -> &'static Regex {
    static STRICT: OnceLock<Regex> = OnceLock::new();
    STRICT.get_or_init(|| {
        let alternatives: Vec<String> = STRICT_PHRASES
            .iter()
            .map(|phrase| {
                phrase
                    .split(' ')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect();
        Regex::new(&alternatives.join("|")).unwrap()
    })
}
