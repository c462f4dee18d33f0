//! Whole-document classification.

use rayon::prelude::*;
use serde::Serialize;

use super::extract::TextExtractor;
use super::heuristic::{classify, text_length, Verdict};
use super::options::ClassifyOptions;
use crate::model::{Document, Page};

/// Verdict for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageClassification {
    /// Page number (1-indexed)
    pub number: u32,

    /// Blank or content
    pub verdict: Verdict,

    /// Characters in the trimmed extracted text (0 if extraction failed)
    pub text_length: usize,
}

impl PageClassification {
    /// Create a classification entry.
    pub fn new(number: u32, verdict: Verdict, text_length: usize) -> Self {
        Self {
            number,
            verdict,
            text_length,
        }
    }

    /// Check if the page was classified blank.
    pub fn is_blank(&self) -> bool {
        self.verdict.is_blank()
    }
}

/// A page whose text could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionWarning {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extraction failure message
    pub message: String,
}

/// Classifications for every page of a document, in ordinal order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassificationReport {
    /// One entry per page
    pub pages: Vec<PageClassification>,

    /// Pages that were kept because their text could not be read
    pub warnings: Vec<ExtractionWarning>,
}

impl ClassificationReport {
    /// Classifications in ordinal order.
    pub fn classifications(&self) -> &[PageClassification] {
        &self.pages
    }

    /// Number of pages classified.
    pub fn total(&self) -> usize {
        self.pages.len()
    }

    /// Ordinals of blank pages, ascending.
    pub fn blank_ordinals(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter(|c| c.is_blank())
            .map(|c| c.number)
            .collect()
    }

    /// Number of blank pages.
    pub fn blank_count(&self) -> usize {
        self.pages.iter().filter(|c| c.is_blank()).count()
    }

    /// Number of content pages.
    pub fn content_count(&self) -> usize {
        self.total() - self.blank_count()
    }

    /// Check if no page was classified blank.
    pub fn is_clean(&self) -> bool {
        self.blank_count() == 0
    }
}

/// Runs the blank-page heuristic over documents.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    options: ClassifyOptions,
}

impl Classifier {
    /// Create a classifier with the given options.
    pub fn new(options: ClassifyOptions) -> Self {
        Self { options }
    }

    /// Get the classifier options.
    pub fn options(&self) -> &ClassifyOptions {
        &self.options
    }

    /// Classify a page from already extracted text.
    pub fn classify_text(&self, number: u32, text: &str) -> PageClassification {
        PageClassification::new(
            number,
            classify(text, &self.options),
            text_length(text, &self.options),
        )
    }

    /// Classify a single page.
    ///
    /// Extraction failures never propagate: the page is reported as content
    /// with a zero text length, alongside a warning.
    pub fn classify_page<T, E>(
        &self,
        page: &Page<T>,
        extractor: &E,
    ) -> (PageClassification, Option<ExtractionWarning>)
    where
        E: TextExtractor<T> + ?Sized,
    {
        let number = page.number();
        match extractor.extract_text(page) {
            Ok(text) => {
                let result = self.classify_text(number, &text);
                log::debug!(
                    "Page {}: {} ({} chars)",
                    number,
                    result.verdict,
                    result.text_length
                );
                (result, None)
            }
            Err(e) => {
                log::warn!(
                    "Could not extract text from page {}, assuming content: {}",
                    number,
                    e
                );
                let warning = ExtractionWarning {
                    number,
                    message: e.to_string(),
                };
                (
                    PageClassification::new(number, Verdict::Content, 0),
                    Some(warning),
                )
            }
        }
    }

    /// Classify every page of a document.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesieve::{Classifier, Document, EmbeddedText};
    ///
    /// let doc = Document::from_contents(vec![
    ///     "",
    ///     "this page has enough words on it to clear the fifty character threshold",
    /// ]);
    /// let report = Classifier::default().classify_document(&doc, &EmbeddedText);
    /// assert_eq!(report.blank_ordinals(), vec![1]);
    /// ```
    pub fn classify_document<T, E>(
        &self,
        document: &Document<T>,
        extractor: &E,
    ) -> ClassificationReport
    where
        T: Sync,
        E: TextExtractor<T> + Sync + ?Sized,
    {
        let mut results: Vec<(PageClassification, Option<ExtractionWarning>)> =
            if self.options.parallel {
                document
                    .pages()
                    .par_iter()
                    .map(|page| self.classify_page(page, extractor))
                    .collect()
            } else {
                document
                    .iter()
                    .map(|page| self.classify_page(page, extractor))
                    .collect()
            };
        results.sort_by_key(|(result, _)| result.number);

        let mut report = ClassificationReport::default();
        for (result, warning) in results {
            report.pages.push(result);
            report.warnings.extend(warning);
        }
        report
    }
}
