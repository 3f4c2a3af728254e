//! Splicing the generated section into a human-edited issue body.
//!
//! The tracking issue body is shared with people. Only the span between
//! [`SECTION_START_MARKER`] and the first [`SECTION_END_MARKER`] after it is
//! owned by the tracker; every other byte passes through untouched.

use std::ops::Range;

/// First line of the tracker-owned section.
pub const SECTION_START_MARKER: &str = "<!-- TRACKER_SECTION_START -->";

/// Last line of the tracker-owned section.
pub const SECTION_END_MARKER: &str = "<!-- TRACKER_SECTION_END -->";

/// Locates the owned section in `body`, markers included.
///
/// The span runs from the first start marker through the first end marker
/// that follows it. Returns `None` if either marker is missing.
pub fn find_marked_section(body: &str) -> Option<Range<usize>> {
    let start = body.find(SECTION_START_MARKER)?;
    let search_from = start + SECTION_START_MARKER.len();
    let end_offset = body[search_from..].find(SECTION_END_MARKER)?;
    Some(start..search_from + end_offset + SECTION_END_MARKER.len())
}

/// Produces the new issue body from the previous body and a freshly rendered
/// section.
///
/// - Both markers present: the owned span is replaced by `section` verbatim.
/// - Otherwise, `section` is appended after a blank line, or used on its own
///   when `previous` is empty.
pub fn merge_section(previous: &str, section: &str) -> String {
    match find_marked_section(previous) {
        Some(span) => {
            let mut merged =
                String::with_capacity(previous.len() - span.len() + section.len());
            merged.push_str(&previous[..span.start]);
            merged.push_str(section);
            merged.push_str(&previous[span.end..]);
            merged
        }
        None if previous.is_empty() => section.to_string(),
        None => format!("{previous}\n\n{section}"),
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
