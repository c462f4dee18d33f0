//! Page-set reconstruction.
//!
//! Every entry point produces a new [`Document`] holding the kept pages in
//! their original relative order, renumbered from 1, plus a
//! [`RebuildSummary`]. The source document is only borrowed.

mod selection;
mod summary;
mod writer;

pub use selection::PageSelection;
pub use summary::RebuildSummary;
pub use writer::DocumentWriter;

use std::collections::BTreeSet;

use crate::classify::{PageClassification, Verdict};
use crate::error::{Error, Result};
use crate::model::{Document, Page};

/// Keep the pages classified [`Verdict::Content`].
///
/// `classifications` must hold exactly one entry per page, matched by
/// ordinal; their order in the slice does not matter.
///
/// # Example
///
/// ```
/// use pagesieve::{rebuild, Document, PageClassification, Verdict};
///
/// let doc = Document::from_contents(["cover", "", "body"]);
/// let verdicts = [
///     PageClassification::new(1, Verdict::Content, 5),
///     PageClassification::new(2, Verdict::Blank, 0),
///     PageClassification::new(3, Verdict::Content, 4),
/// ];
/// let (cleaned, summary) = rebuild(&doc, &verdicts)?;
/// assert_eq!(cleaned.into_contents(), vec!["cover", "body"]);
/// assert_eq!(summary.removed_ordinals, vec![2]);
/// # Ok::<(), pagesieve::Error>(())
/// ```
pub fn rebuild<T: Clone>(
    document: &Document<T>,
    classifications: &[PageClassification],
) -> Result<(Document<T>, RebuildSummary)> {
    let expected = document.pages().len();
    if classifications.len() != expected {
        return Err(Error::MismatchedClassificationCount {
            expected,
            actual: classifications.len(),
        });
    }

    let mut verdicts: Vec<Option<Verdict>> = vec![None; expected];
    for classification in classifications {
        let slot = classification
            .number
            .checked_sub(1)
            .and_then(|index| verdicts.get_mut(index as usize))
            .ok_or(Error::UnmatchedClassification(classification.number))?;
        if slot.replace(classification.verdict).is_some() {
            return Err(Error::UnmatchedClassification(classification.number));
        }
    }

    // Equal counts with no duplicates and no strays fill every slot.
    Ok(retain_pages(document, |page| {
        verdicts[(page.number() - 1) as usize] == Some(Verdict::Content)
    }))
}

/// Drop an explicit set of page ordinals.
///
/// Fails with [`Error::InsufficientPageCount`] when any requested ordinal is
/// past the end of the document; no pages are removed in that case.
///
/// # Example
///
/// ```
/// use pagesieve::{remove_pages, Document};
///
/// let doc = Document::from_contents(["a", "b", "c", "d"]);
/// let (trimmed, summary) = remove_pages(&doc, [2, 3])?;
/// assert_eq!(trimmed.into_contents(), vec!["a", "d"]);
/// assert_eq!(summary.kept, 2);
/// # Ok::<(), pagesieve::Error>(())
/// ```
pub fn remove_pages<T, I>(
    document: &Document<T>,
    ordinals: I,
) -> Result<(Document<T>, RebuildSummary)>
where
    T: Clone,
    I: IntoIterator<Item = u32>,
{
    let removal: BTreeSet<u32> = ordinals.into_iter().collect();

    if removal.contains(&0) {
        return Err(Error::InvalidOrdinal(0));
    }

    if let Some(&required) = removal.last() {
        let available = document.page_count();
        if required > available {
            return Err(Error::InsufficientPageCount {
                required,
                available,
            });
        }
    }

    Ok(retain_pages(document, |page| !removal.contains(&page.number())))
}

/// Drop the pages named by a [`PageSelection`].
///
/// Same rules as [`remove_pages`], checked against the selection's bounds
/// so that wide ranges are never expanded. [`PageSelection::All`] removes
/// every page.
///
/// # Example
///
/// ```
/// use pagesieve::{remove_selection, Document, PageSelection};
///
/// let doc = Document::from_contents(["a", "b", "c", "d", "e"]);
/// let selection = PageSelection::parse("1,3-4")?;
/// let (trimmed, summary) = remove_selection(&doc, &selection)?;
/// assert_eq!(trimmed.into_contents(), vec!["b", "e"]);
/// assert_eq!(summary.removed_ordinals, vec![1, 3, 4]);
/// # Ok::<(), pagesieve::Error>(())
/// ```
pub fn remove_selection<T: Clone>(
    document: &Document<T>,
    selection: &PageSelection,
) -> Result<(Document<T>, RebuildSummary)> {
    if selection != &PageSelection::All && selection.includes(0) {
        return Err(Error::InvalidOrdinal(0));
    }

    if let Some(required) = selection.last() {
        let available = document.page_count();
        if required > available {
            return Err(Error::InsufficientPageCount {
                required,
                available,
            });
        }
    }

    Ok(retain_pages(document, |page| !selection.includes(page.number())))
}

fn retain_pages<T, F>(document: &Document<T>, mut keep: F) -> (Document<T>, RebuildSummary)
where
    T: Clone,
    F: FnMut(&Page<T>) -> bool,
{
    let mut output = Document::new();
    let mut summary = RebuildSummary::new(document.page_count());

    for page in document {
        if keep(page) {
            output.push(page.content().clone());
            summary.record_kept(page.number());
        } else {
            summary.record_removed(page.number());
        }
    }

    log::info!(
        "Rebuilt document: {} of {} pages kept, {} removed",
        summary.kept,
        summary.total,
        summary.removed
    );

    (output, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(pattern: &[Verdict]) -> Vec<PageClassification> {
        pattern
            .iter()
            .enumerate()
            .map(|(i, v)| PageClassification::new(i as u32 + 1, *v, 0))
            .collect()
    }

    use Verdict::{Blank, Content};

    #[test]
    fn test_rebuild_keeps_content_in_order() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3", "p4", "p5"]);
        let (out, summary) =
            rebuild(&doc, &verdicts(&[Content, Blank, Content, Blank, Content])).unwrap();

        assert_eq!(out.into_contents(), vec!["p1", "p3", "p5"]);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.kept, 3);
        assert_eq!(summary.removed, 2);
        assert_eq!(summary.removed_ordinals, vec![2, 4]);
        assert_eq!(summary.kept_ordinals, vec![1, 3, 5]);
    }

    #[test]
    fn test_rebuild_renumbers() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3"]);
        let (out, _) = rebuild(&doc, &verdicts(&[Blank, Content, Content])).unwrap();
        let numbers: Vec<u32> = out.iter().map(Page::number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(out.get_page(1).map(|p| *p.content()), Some("p2"));
    }

    #[test]
    fn test_rebuild_ignores_slice_order() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3"]);
        let mut shuffled = verdicts(&[Content, Blank, Content]);
        shuffled.reverse();
        let (out, summary) = rebuild(&doc, &shuffled).unwrap();
        assert_eq!(out.into_contents(), vec!["p1", "p3"]);
        assert_eq!(summary.removed_ordinals, vec![2]);
    }

    #[test]
    fn test_rebuild_count_mismatch() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3"]);
        let result = rebuild(&doc, &verdicts(&[Content, Content]));
        assert!(matches!(
            result,
            Err(Error::MismatchedClassificationCount {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_rebuild_duplicate_ordinal() {
        let doc = Document::from_contents(vec!["p1", "p2"]);
        let classifications = vec![
            PageClassification::new(1, Content, 0),
            PageClassification::new(1, Blank, 0),
        ];
        assert!(matches!(
            rebuild(&doc, &classifications),
            Err(Error::UnmatchedClassification(1))
        ));
    }

    #[test]
    fn test_rebuild_stray_ordinal() {
        let doc = Document::from_contents(vec!["p1", "p2"]);
        let classifications = vec![
            PageClassification::new(1, Content, 0),
            PageClassification::new(7, Content, 0),
        ];
        assert!(matches!(
            rebuild(&doc, &classifications),
            Err(Error::UnmatchedClassification(7))
        ));

        let zero = vec![
            PageClassification::new(0, Content, 0),
            PageClassification::new(1, Content, 0),
        ];
        assert!(matches!(
            rebuild(&doc, &zero),
            Err(Error::UnmatchedClassification(0))
        ));
    }

    #[test]
    fn test_rebuild_all_blank_is_empty_document() {
        let doc = Document::from_contents(vec!["", ""]);
        let (out, summary) = rebuild(&doc, &verdicts(&[Blank, Blank])).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.kept, 0);
        assert_eq!(summary.removed, 2);
    }

    #[test]
    fn test_rebuild_nothing_to_remove() {
        let doc = Document::from_contents(vec!["p1", "p2"]);
        let (out, summary) = rebuild(&doc, &verdicts(&[Content, Content])).unwrap();
        assert_eq!(out, doc);
        assert!(summary.is_noop());
    }

    #[test]
    fn test_rebuild_empty_input() {
        let doc: Document<&str> = Document::new();
        let (out, summary) = rebuild(&doc, &[]).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.kept + summary.removed, 0);
    }

    #[test]
    fn test_remove_pages_fixed() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3", "p4"]);
        let (out, summary) = remove_pages(&doc, [2, 3]).unwrap();
        assert_eq!(out.into_contents(), vec!["p1", "p4"]);
        assert_eq!(summary.removed_ordinals, vec![2, 3]);
    }

    #[test]
    fn test_remove_pages_duplicates_collapse() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3"]);
        let (out, summary) = remove_pages(&doc, vec![3, 3, 1]).unwrap();
        assert_eq!(out.into_contents(), vec!["p2"]);
        assert_eq!(summary.removed, 2);
    }

    #[test]
    fn test_remove_pages_insufficient() {
        let doc = Document::from_contents(vec!["p1", "p2"]);
        assert!(matches!(
            remove_pages(&doc, [2, 3]),
            Err(Error::InsufficientPageCount {
                required: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_remove_selection_huge_range() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3"]);
        let selection = PageSelection::parse("1-4294967295").unwrap();
        assert!(matches!(
            remove_selection(&doc, &selection),
            Err(Error::InsufficientPageCount {
                required: u32::MAX,
                available: 3
            })
        ));

        let selection = PageSelection::parse("2,5-4294967295").unwrap();
        assert!(matches!(
            remove_selection(&doc, &selection),
            Err(Error::InsufficientPageCount {
                required: u32::MAX,
                available: 3
            })
        ));
    }

    #[test]
    fn test_remove_selection() {
        let doc = Document::from_contents(vec!["p1", "p2", "p3", "p4"]);

        let (out, summary) = remove_selection(&doc, &PageSelection::Range(2..=3)).unwrap();
        assert_eq!(out.into_contents(), vec!["p1", "p4"]);
        assert_eq!(summary.removed_ordinals, vec![2, 3]);

        let (out, summary) = remove_selection(&doc, &PageSelection::All).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.removed, 4);

        assert!(matches!(
            remove_selection(&doc, &PageSelection::Pages(vec![0, 2])),
            Err(Error::InvalidOrdinal(0))
        ));
    }

    #[test]
    fn test_remove_pages_zero_ordinal() {
        let doc = Document::from_contents(vec!["p1", "p2"]);
        assert!(matches!(
            remove_pages(&doc, [0]),
            Err(Error::InvalidOrdinal(0))
        ));
    }

    #[test]
    fn test_remove_pages_empty_set() {
        let doc = Document::from_contents(vec!["p1", "p2"]);
        let (out, summary) = remove_pages(&doc, []).unwrap();
        assert_eq!(out, doc);
        assert!(summary.is_noop());
    }
}
