//! Integration tests for rebuilding documents from classifications.

use pagesieve::{
    rebuild, remove_pages, remove_selection, Classifier, Document, EmbeddedText, Error,
    PageClassification, PageSelection, Verdict,
};

const LONG: &str = "Soil moisture readings for the north field, taken weekly through July.";

fn sample() -> Document<&'static str> {
    Document::from_contents([LONG, "", "Page 3", LONG, "   "])
}

fn classify(doc: &Document<&'static str>) -> Vec<PageClassification> {
    Classifier::default()
        .classify_document(doc, &EmbeddedText)
        .pages
}

#[test]
fn test_rebuild_keeps_content_in_order() {
    let doc = Document::from_contents([
        format!("first: {}", LONG),
        String::new(),
        format!("second: {}", LONG),
    ]);
    let verdicts = Classifier::default()
        .classify_document(&doc, &EmbeddedText)
        .pages;

    let (cleaned, summary) = rebuild(&doc, &verdicts).unwrap();
    let contents = cleaned.into_contents();

    assert_eq!(contents.len(), 2);
    assert!(contents[0].starts_with("first"));
    assert!(contents[1].starts_with("second"));
    assert_eq!(summary.kept_ordinals, vec![1, 3]);
}

#[test]
fn test_rebuild_renumbers_pages() {
    let doc = sample();
    let (cleaned, summary) = rebuild(&doc, &classify(&doc)).unwrap();

    let numbers: Vec<u32> = cleaned.iter().map(|p| p.number()).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(summary.source_ordinal(2), Some(4));
    assert!(summary
        .kept_ordinals
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_rebuild_counts_add_up() {
    let doc = sample();
    let (cleaned, summary) = rebuild(&doc, &classify(&doc)).unwrap();

    assert_eq!(summary.total, 5);
    assert_eq!(summary.kept + summary.removed, summary.total);
    assert_eq!(cleaned.page_count(), summary.kept);
    assert_eq!(summary.removed_ordinals, vec![2, 3, 5]);
}

#[test]
fn test_all_content_is_identity() {
    let doc = Document::from_contents([LONG, LONG, LONG]);
    let (cleaned, summary) = rebuild(&doc, &classify(&doc)).unwrap();

    assert_eq!(cleaned, doc);
    assert!(summary.is_noop());
}

#[test]
fn test_rebuild_is_idempotent() {
    let doc = sample();
    let (once, _) = rebuild(&doc, &classify(&doc)).unwrap();
    let (twice, summary) = rebuild(&once, &classify(&once)).unwrap();

    assert_eq!(twice, once);
    assert!(summary.is_noop());
}

#[test]
fn test_rebuild_empty_document() {
    let doc: Document<&str> = Document::new();
    let (cleaned, summary) = rebuild(&doc, &[]).unwrap();

    assert!(cleaned.is_empty());
    assert_eq!(summary.total, 0);
    assert!(summary.is_noop());
}

#[test]
fn test_rebuild_all_blank() {
    let doc = Document::from_contents(["", " ", "\n"]);
    let (cleaned, summary) = rebuild(&doc, &classify(&doc)).unwrap();

    assert!(cleaned.is_empty());
    assert_eq!(summary.removed_ordinals, vec![1, 2, 3]);
}

#[test]
fn test_rebuild_rejects_mismatched_lengths() {
    let doc = sample();
    let mut verdicts = classify(&doc);
    verdicts.pop();

    assert!(matches!(
        rebuild(&doc, &verdicts),
        Err(Error::MismatchedClassificationCount {
            expected: 5,
            actual: 4
        })
    ));
}

#[test]
fn test_rebuild_rejects_duplicate_ordinal() {
    let doc = Document::from_contents(["a", "b"]);
    let verdicts = [
        PageClassification::new(1, Verdict::Content, 1),
        PageClassification::new(1, Verdict::Blank, 1),
    ];

    assert!(matches!(
        rebuild(&doc, &verdicts),
        Err(Error::UnmatchedClassification(1))
    ));
}

#[test]
fn test_remove_fixed_pages() {
    let doc = Document::from_contents(["one", "two", "three", "four"]);
    let (trimmed, summary) = remove_pages(&doc, [2, 3]).unwrap();

    assert_eq!(trimmed.into_contents(), vec!["one", "four"]);
    assert_eq!(summary.removed_ordinals, vec![2, 3]);
    assert_eq!(summary.kept_ordinals, vec![1, 4]);
}

#[test]
fn test_remove_from_short_document() {
    let doc = Document::from_contents(["one", "two"]);

    match remove_pages(&doc, [2, 3]) {
        Err(Error::InsufficientPageCount {
            required,
            available,
        }) => {
            assert_eq!(required, 3);
            assert_eq!(available, 2);
        }
        other => panic!("expected InsufficientPageCount, got {:?}", other.map(|r| r.1)),
    }
}

#[test]
fn test_remove_with_selection() {
    let doc = Document::from_contents(["a", "b", "c", "d", "e", "f"]);
    let selection = PageSelection::parse("1,4-5").unwrap();
    let (trimmed, summary) = remove_selection(&doc, &selection).unwrap();

    assert_eq!(trimmed.into_contents(), vec!["b", "c", "f"]);
    assert_eq!(summary.removed, 3);
}
