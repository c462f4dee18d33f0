//! Reports on classification and rebuild runs.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{page_line, to_text};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::{ClassificationReport, ClassifyOptions};
use crate::pdf::PdfInfo;
use crate::rebuild::RebuildSummary;

/// How clean a document is, judged by its share of blank pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleanliness {
    /// No blank pages
    Clean,
    /// Some blank pages, under a fifth of the document
    Mostly,
    /// A fifth or more of the pages are blank
    NeedsAttention,
}

impl Cleanliness {
    /// Judge a classification.
    pub fn assess(classification: &ClassificationReport) -> Self {
        let blank = classification.blank_count();
        let total = classification.total();

        if blank == 0 {
            Cleanliness::Clean
        } else if blank * 5 < total {
            Cleanliness::Mostly
        } else {
            Cleanliness::NeedsAttention
        }
    }
}

/// Input and output file sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeComparison {
    /// Input size in bytes
    pub original: u64,
    /// Output size in bytes
    pub cleaned: u64,
}

impl SizeComparison {
    /// Bytes saved (negative when the output grew).
    pub fn saved(&self) -> i64 {
        self.original as i64 - self.cleaned as i64
    }

    /// Saved bytes as a percentage of the input.
    pub fn saved_percent(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        self.saved() as f64 / self.original as f64 * 100.0
    }
}

/// Everything known about one run over a document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Input name, usually the file name
    pub source: Option<String>,

    /// Facts about the input PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PdfInfo>,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Indicator policy in effect
    pub policy: String,

    /// Content threshold in effect
    pub min_content_chars: usize,

    /// Overall judgment
    pub cleanliness: Cleanliness,

    /// Per-page classification
    pub classification: ClassificationReport,

    /// Rebuild result, present on every clean run, including ones that
    /// removed nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RebuildSummary>,

    /// File sizes, if an output file was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<SizeComparison>,
}

impl Report {
    /// Create a report for a classification run.
    pub fn new(classification: ClassificationReport, options: &ClassifyOptions) -> Self {
        Self {
            source: None,
            document: None,
            generated_at: Utc::now(),
            policy: options.policy.to_string(),
            min_content_chars: options.min_content_chars,
            cleanliness: Cleanliness::assess(&classification),
            classification,
            summary: None,
            sizes: None,
        }
    }

    /// Set the input name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach facts about the input PDF.
    pub fn with_document_info(mut self, info: PdfInfo) -> Self {
        self.document = Some(info);
        self
    }

    /// Attach a rebuild summary.
    pub fn with_summary(mut self, summary: RebuildSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Attach file sizes.
    pub fn with_sizes(mut self, sizes: SizeComparison) -> Self {
        self.sizes = Some(sizes);
        self
    }
}
