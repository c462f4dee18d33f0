//! Page ordinal selections parsed from user input.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A set of page ordinals, e.g. the pages to drop from a document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed, ascending, no duplicates)
    Pages(Vec<u32>),
    /// Pages and ranges mixed, e.g. "1,4-6" (ascending, merged)
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number is selected.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.binary_search(&page).is_ok(),
            PageSelection::Ranges(ranges) => ranges.iter().any(|range| range.contains(&page)),
        }
    }

    /// Highest selected ordinal, or `None` for [`PageSelection::All`] and
    /// empty selections.
    pub fn last(&self) -> Option<u32> {
        match self {
            PageSelection::All => None,
            PageSelection::Range(range) if range.is_empty() => None,
            PageSelection::Range(range) => Some(*range.end()),
            PageSelection::Pages(pages) => pages.iter().max().copied(),
            PageSelection::Ranges(ranges) => ranges
                .iter()
                .filter(|range| !range.is_empty())
                .map(|range| *range.end())
                .max(),
        }
    }

    /// Parse a page selection string (e.g., "2,3", "2-5", "1,4-6").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }
        if s.is_empty() {
            return Err(Error::InvalidPageRange("empty selection".to_string()));
        }

        // Single range (e.g., "2-5")
        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                return parse_range(start, end).map(PageSelection::Range);
            }
        }

        let mut ranges = Vec::new();
        let mut has_range = false;
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                ranges.push(parse_range(start, end)?);
                has_range = true;
            } else {
                let page = parse_ordinal(part)?;
                ranges.push(page..=page);
            }
        }

        let ranges = merge_ranges(ranges);
        if has_range {
            Ok(PageSelection::Ranges(ranges))
        } else {
            Ok(PageSelection::Pages(
                ranges.into_iter().flatten().collect(),
            ))
        }
    }
}

impl FromStr for PageSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Sort ranges and join the ones that overlap or touch.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_unstable_by_key(|range| *range.start());

    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parse_ordinal(s: &str) -> Result<u32> {
    let page: u32 = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(format!("invalid page number '{}'", s.trim())))?;
    if page == 0 {
        return Err(Error::InvalidPageRange(
            "page numbers start at 1".to_string(),
        ));
    }
    Ok(page)
}

fn parse_range(start: &str, end: &str) -> Result<RangeInclusive<u32>> {
    let start = parse_ordinal(start)?;
    let end = parse_ordinal(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(format!(
            "range {}-{} is reversed",
            start, end
        )));
    }
    Ok(start..=end)
}
