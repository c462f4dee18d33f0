//! Rebuild summary.

use serde::Serialize;

/// What a rebuild kept and removed.
///
/// `kept + removed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RebuildSummary {
    /// Pages in the input document
    pub total: u32,

    /// Pages in the output document
    pub kept: u32,

    /// Pages dropped
    pub removed: u32,

    /// Input ordinals of dropped pages, ascending
    pub removed_ordinals: Vec<u32>,

    /// Input ordinals of kept pages, in output order
    pub kept_ordinals: Vec<u32>,
}

impl RebuildSummary {
    pub(crate) fn new(total: u32) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub(crate) fn record_kept(&mut self, number: u32) {
        self.kept += 1;
        self.kept_ordinals.push(number);
    }

    pub(crate) fn record_removed(&mut self, number: u32) {
        self.removed += 1;
        self.removed_ordinals.push(number);
    }

    /// Check if the rebuild removed nothing.
    pub fn is_noop(&self) -> bool {
        self.removed == 0
    }

    /// Input ordinal of the page now at `number` (1-indexed) in the output.
    pub fn source_ordinal(&self, number: u32) -> Option<u32> {
        if number == 0 {
            return None;
        }
        self.kept_ordinals.get((number - 1) as usize).copied()
    }
}
