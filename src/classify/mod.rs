//! Blank-page classification.
//!
//! [`classify`] decides a single page from its extracted text;
//! [`Classifier`] runs that decision over a whole [`Document`](crate::Document)
//! using a [`TextExtractor`] to obtain each page's text.

mod classifier;
mod extract;
mod heuristic;
mod options;

pub use classifier::{ClassificationReport, Classifier, ExtractionWarning, PageClassification};
pub use extract::{EmbeddedText, TextExtractor};
pub use heuristic::{classify, classify_text, text_length, Verdict};
pub use options::{ClassifyOptions, IndicatorPolicy, LEGACY_INDICATORS, STRICT_PHRASES};
