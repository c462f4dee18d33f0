//! Plain-text rendering for reports.

use super::{Cleanliness, Report};
use crate::classify::PageClassification;
use crate::pdf::PdfInfo;

const RULE_WIDTH: usize = 50;

/// One table line for a page, e.g. `Page  3: BLANK   (text length:   0 chars)`.
pub fn page_line(page: &PageClassification) -> String {
    format!(
        "Page {:2}: {:7} (text length: {:3} chars)",
        page.number, page.verdict, page.text_length
    )
}

/// Render a report as a plain-text table and summary.
pub fn to_text(report: &Report) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let classification = &report.classification;
    let mut lines = Vec::new();

    if let Some(ref source) = report.source {
        lines.push(format!("Source: {}", source));
    }
    if let Some(ref info) = report.document {
        lines.push(document_line(info));
    }
    lines.push(format!(
        "Analyzed {} pages (policy: {}, threshold: {} chars)",
        classification.total(),
        report.policy,
        report.min_content_chars
    ));
    lines.push(rule.clone());

    lines.extend(classification.classifications().iter().map(page_line));
    for warning in &classification.warnings {
        lines.push(format!(
            "Warning: page {} could not be read, kept as content ({})",
            warning.number, warning.message
        ));
    }

    lines.push(rule);
    lines.push("Analysis Summary:".to_string());
    lines.push(format!("   Total pages: {}", classification.total()));
    lines.push(format!("   Blank pages: {}", classification.blank_count()));
    lines.push(format!("   Content pages: {}", classification.content_count()));

    let blanks = classification.blank_ordinals();
    if !blanks.is_empty() {
        lines.push(format!("   Blank page numbers: {}", join_ordinals(&blanks)));
    }

    if let Some(ref summary) = report.summary {
        lines.push(String::new());
        lines.push("Results:".to_string());
        lines.push(format!("   Total pages processed: {}", summary.total));
        lines.push(format!("   Pages kept: {}", summary.kept));
        lines.push(format!("   Pages removed: {}", summary.removed));
        if !summary.removed_ordinals.is_empty() {
            lines.push(format!(
                "   Removed page numbers: {}",
                join_ordinals(&summary.removed_ordinals)
            ));
        }
        lines.push(format!("   Final page count: {}", summary.kept));
    }

    if let Some(ref sizes) = report.sizes {
        lines.push(String::new());
        lines.push("File Size Comparison:".to_string());
        lines.push(format!("   Original: {:.2} KB", kib(sizes.original as f64)));
        lines.push(format!("   Cleaned:  {:.2} KB", kib(sizes.cleaned as f64)));
        lines.push(format!(
            "   Saved:    {:.2} KB ({:.1}%)",
            kib(sizes.saved() as f64),
            sizes.saved_percent()
        ));
    }

    lines.push(String::new());
    lines.push(match report.cleanliness {
        Cleanliness::Clean => "Verdict: Clean, no blank pages found".to_string(),
        Cleanliness::Mostly => format!("Verdict: Mostly clean, {} blank pages", blanks.len()),
        Cleanliness::NeedsAttention => {
            format!("Verdict: Needs attention, {} blank pages", blanks.len())
        }
    });
    lines.push(String::new());

    lines.join("\n")
}

fn document_line(info: &PdfInfo) -> String {
    let mut line = format!("Document: PDF {}", info.version);
    if let Some(ref title) = info.title {
        line.push_str(&format!(", \"{}\"", title));
    }
    if let Some(ref producer) = info.producer {
        line.push_str(&format!(", produced by {}", producer));
    }
    if info.encrypted {
        line.push_str(", encrypted");
    }
    line
}

fn kib(bytes: f64) -> f64 {
    bytes / 1024.0
}

fn join_ordinals(ordinals: &[u32]) -> String {
    ordinals
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
