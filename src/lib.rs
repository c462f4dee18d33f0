//! # pagesieve
//!
//! Blank-page detection and removal for PDF documents.
//!
//! Each page's extracted text is classified as blank or content with a
//! deterministic heuristic, and a new document is rebuilt from the content
//! pages in their original order. Pages can also be dropped by explicit
//! number.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagesieve::{remove_blank_pages, ClassifyOptions};
//!
//! fn main() -> pagesieve::Result<()> {
//!     let options = ClassifyOptions::default();
//!     let report = remove_blank_pages("report.pdf", "report_cleaned.pdf", &options)?;
//!     println!("{}", pagesieve::report::to_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Working without PDFs
//!
//! The engine is generic over the page payload, so any page sequence with a
//! [`TextExtractor`] can be filtered:
//!
//! ```
//! use pagesieve::{rebuild, Classifier, Document, EmbeddedText};
//!
//! let doc = Document::from_contents(vec![
//!     "Harvest totals for the season, broken down by field and by crop variety.",
//!     "",
//!     "Irrigation costs rose sharply in the second half of the year across sites.",
//! ]);
//! let report = Classifier::default().classify_document(&doc, &EmbeddedText);
//! let (cleaned, summary) = rebuild(&doc, report.classifications())?;
//! assert_eq!(cleaned.page_count(), 2);
//! assert_eq!(summary.removed_ordinals, vec![2]);
//! # Ok::<(), pagesieve::Error>(())
//! ```

pub mod classify;
pub mod detect;
pub mod error;
pub mod model;
pub mod pdf;
pub mod rebuild;
pub mod report;

// Re-export commonly used types
pub use classify::{
    classify, classify_text, ClassificationReport, Classifier, ClassifyOptions, EmbeddedText,
    ExtractionWarning, IndicatorPolicy, PageClassification, TextExtractor, Verdict,
};
pub use error::{Error, Result};
pub use model::{Document, Page};
pub use pdf::{PdfInfo, PdfPage, PdfSource};
pub use rebuild::{
    rebuild, remove_pages, remove_selection, DocumentWriter, PageSelection, RebuildSummary,
};
pub use report::{Cleanliness, JsonFormat, Report, SizeComparison};

use std::path::Path;

/// Classify every page of a PDF file without writing anything.
///
/// # Example
///
/// ```no_run
/// use pagesieve::{analyze_file, ClassifyOptions};
///
/// let report = analyze_file("report.pdf", &ClassifyOptions::default()).unwrap();
/// println!("Blank pages: {:?}", report.classification.blank_ordinals());
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P, options: &ClassifyOptions) -> Result<Report> {
    Sieve::with_options(options.clone()).analyze(path)
}

/// Remove blank pages from a PDF file and write the result.
///
/// Writes `output` even when no page is blank; the report then carries a
/// no-op summary.
pub fn remove_blank_pages<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ClassifyOptions,
) -> Result<Report> {
    Sieve::with_options(options.clone()).clean(input, output)
}

/// Remove explicitly numbered pages from a PDF file and write the result.
///
/// # Example
///
/// ```no_run
/// use pagesieve::{remove_pages_from_file, PageSelection};
///
/// let pages = PageSelection::parse("2,3").unwrap();
/// let summary = remove_pages_from_file("in.pdf", "out.pdf", &pages).unwrap();
/// assert_eq!(summary.removed, 2);
/// ```
pub fn remove_pages_from_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    selection: &PageSelection,
) -> Result<RebuildSummary> {
    let source = PdfSource::open(input)?;
    let (trimmed, summary) = remove_selection(&source.document(), selection)?;
    source.save_document(&trimmed, output)?;
    Ok(summary)
}

/// Builder for classifying and cleaning PDF files.
///
/// # Example
///
/// ```no_run
/// use pagesieve::Sieve;
///
/// let report = Sieve::new()
///     .strict()
///     .with_min_content_chars(80)
///     .clean("report.pdf", "report_cleaned.pdf")?;
/// println!("{} pages removed", report.summary.map(|s| s.removed).unwrap_or(0));
/// # Ok::<(), pagesieve::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sieve {
    options: ClassifyOptions,
    dry_run: bool,
}

impl Sieve {
    /// Create a new Sieve builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from existing classify options.
    pub fn with_options(options: ClassifyOptions) -> Self {
        Self {
            options,
            dry_run: false,
        }
    }

    /// Set the content threshold.
    pub fn with_min_content_chars(mut self, chars: usize) -> Self {
        self.options = self.options.with_min_content_chars(chars);
        self
    }

    /// Set the indicator policy.
    pub fn with_policy(mut self, policy: IndicatorPolicy) -> Self {
        self.options = self.options.with_policy(policy);
        self
    }

    /// Use the strict indicator policy.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Classify and rebuild but never write output files.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Get the classify options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Classify every page of a PDF file.
    pub fn analyze<P: AsRef<Path>>(&self, path: P) -> Result<Report> {
        let path = path.as_ref();
        let source = PdfSource::open(path)?;
        let classification = self.classify(&source, &source.document());
        Ok(Report::new(classification, &self.options)
            .with_source(display_name(path))
            .with_document_info(source.info()))
    }

    /// Remove blank pages from `input` and write the result to `output`.
    pub fn clean<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<Report> {
        let input = input.as_ref();
        let source = PdfSource::open(input)?;
        let document = source.document();
        let classification = self.classify(&source, &document);
        let (cleaned, summary) = rebuild(&document, classification.classifications())?;

        let mut report = Report::new(classification, &self.options)
            .with_source(display_name(input))
            .with_document_info(source.info());

        if !self.dry_run {
            let original = std::fs::metadata(input)?.len();
            let written = source.save_document(&cleaned, output)?;
            report = report.with_sizes(SizeComparison {
                original,
                cleaned: written,
            });
        }

        Ok(report.with_summary(summary))
    }

    /// Remove blank pages from an in-memory PDF.
    ///
    /// Returns the cleaned PDF bytes, or `None` on a dry run.
    pub fn clean_bytes(&self, data: &[u8]) -> Result<(Option<Vec<u8>>, Report)> {
        let source = PdfSource::from_bytes(data)?;
        let document = source.document();
        let classification = self.classify(&source, &document);
        let (cleaned, summary) = rebuild(&document, classification.classifications())?;

        let mut report =
            Report::new(classification, &self.options).with_document_info(source.info());
        let bytes = if self.dry_run {
            None
        } else {
            let bytes = source.to_bytes(&cleaned)?;
            report = report.with_sizes(SizeComparison {
                original: data.len() as u64,
                cleaned: bytes.len() as u64,
            });
            Some(bytes)
        };

        Ok((bytes, report.with_summary(summary)))
    }

    fn classify(&self, source: &PdfSource, document: &Document<PdfPage>) -> ClassificationReport {
        Classifier::new(self.options.clone()).classify_document(document, source)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
