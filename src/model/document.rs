//! Document-level types.

use super::Page;
use serde::Serialize;

/// An ordered sequence of pages.
///
/// Pages are always numbered 1..=n in storage order. Every constructor
/// assigns ordinals itself, so a `Document` can never hold gaps or
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document<T> {
    /// Pages in the document
    pages: Vec<Page<T>>,
}

impl<T> Document<T> {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a document from page payloads, numbering them from 1.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesieve::Document;
    ///
    /// let doc = Document::from_contents(["cover", "", "chapter one"]);
    /// assert_eq!(doc.page_count(), 3);
    /// assert_eq!(doc.get_page(2).map(|p| *p.content()), Some(""));
    /// ```
    pub fn from_contents<I: IntoIterator<Item = T>>(contents: I) -> Self {
        contents.into_iter().collect()
    }

    /// Append a page and return its ordinal.
    pub fn push(&mut self, content: T) -> u32 {
        let number = self.pages.len() as u32 + 1;
        self.pages.push(Page::new(number, content));
        number
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&Page<T>> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// All pages in ordinal order.
    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    /// Iterate over pages in ordinal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Page<T>> {
        self.pages.iter()
    }

    /// Iterate over page payloads in ordinal order.
    pub fn contents(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().map(Page::content)
    }

    /// Consume the document and return the payloads in ordinal order.
    pub fn into_contents(self) -> Vec<T> {
        self.pages.into_iter().map(Page::into_content).collect()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Document<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut doc = Self::new();
        for content in iter {
            doc.push(content);
        }
        doc
    }
}

impl<'a, T> IntoIterator for &'a Document<T> {
    type Item = &'a Page<T>;
    type IntoIter = std::slice::Iter<'a, Page<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
