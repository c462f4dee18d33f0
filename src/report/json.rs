//! JSON rendering for reports.

use super::Report;
use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Classifier, ClassifyOptions, EmbeddedText};
    use crate::model::Document;
    use crate::rebuild::rebuild;

    fn sample() -> Report {
        let doc = Document::from_contents(vec![
            "",
            "Crop rotation schedule for the north field, spring and autumn seasons.",
        ]);
        let options = ClassifyOptions::default();
        let classification =
            Classifier::new(options.clone()).classify_document(&doc, &EmbeddedText);
        let (_, summary) = rebuild(&doc, classification.classifications()).unwrap();
        Report::new(classification, &options)
            .with_source("farm.pdf")
            .with_summary(summary)
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"source\": \"farm.pdf\""));
        assert!(json.contains("\"verdict\": \"BLANK\""));
        assert!(json.contains("\"removed_ordinals\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cleanliness"], "needs_attention");
        assert_eq!(value["summary"]["kept"], 1);
        assert!(value.get("sizes").is_none());
    }
}
