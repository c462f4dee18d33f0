//! Page text extraction seam.

use crate::error::Result;
use crate::model::Page;

/// Produces the text of a page for classification.
///
/// Implementations may fail per page; the [`Classifier`](super::Classifier)
/// treats a failure as content and records a warning instead of aborting.
pub trait TextExtractor<T> {
    /// Extract the text of one page.
    fn extract_text(&self, page: &Page<T>) -> Result<String>;
}

/// Extractor for pages whose payload already is their text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedText;

impl<T: AsRef<str>> TextExtractor<T> for EmbeddedText {
    fn extract_text(&self, page: &Page<T>) -> Result<String> {
        Ok(page.content().as_ref().to_owned())
    }
}

impl<T, E: TextExtractor<T> + ?Sized> TextExtractor<T> for &E {
    fn extract_text(&self, page: &Page<T>) -> Result<String> {
        (**self).extract_text(page)
    }
}
