//! Rendering the tracker-owned section of the tracking issue body.
//!
//! Rendering is a pure function of its inputs: the same items, context and
//! timestamp always produce byte-identical output.
//!
//! Assignees are only `@`-mentioned once the tracking issue exists. Mentioning
//! everyone in the body of a brand-new issue would notify all of them at once;
//! later edits ping them so they notice new or changed items.

use std::fmt::Write as _;

use crate::merge::{merge_section, SECTION_END_MARKER, SECTION_START_MARKER};
use crate::{Label, Scope, Timestamp, TrackedItem};

/// Line rendered in place of the listing when no item carries the label.
pub const EMPTY_LISTING_LINE: &str = "_No issues found._";

/// Everything besides the items themselves that affects the rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub label: Label,
    pub scope: Scope,
    /// Whether the tracking issue already exists on the tracker.
    pub issue_exists: bool,
    pub updated_at: Timestamp,
}

/// Renders the reference to an item: `owner/repo#N` in organization scope,
/// `#N` in repository scope.
pub fn item_reference(item: &TrackedItem, scope: Scope) -> String {
    match scope {
        Scope::Organization => format!("{}#{}", item.repository(), item.number()),
        Scope::Repository => format!("#{}", item.number()),
    }
}

/// Renders one list line, e.g. `- #7 (Assigned to: @bob)`.
pub fn item_line(item: &TrackedItem, scope: Scope, issue_exists: bool) -> String {
    let mut line = format!("- {}", item_reference(item, scope));
    if !item.assignees().is_empty() {
        let prefix = if issue_exists { "@" } else { "" };
        let names = item
            .assignees()
            .iter()
            .map(|login| format!("{prefix}{login}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(line, " (Assigned to: {names})");
    }
    line
}

/// Renders the complete owned section, markers included.
///
/// Items are listed in the order given; callers are responsible for ordering.
/// The result has no trailing newline so it can replace a previous section
/// verbatim.
pub fn render_section(items: &[TrackedItem], context: &RenderContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{SECTION_START_MARKER}");

    let _ = write!(out, "# Issues with the `{}` label", context.label);
    if context.scope.is_organization() {
        out.push_str(" in the organization");
    }
    out.push_str("\n\n");

    if items.is_empty() {
        let _ = writeln!(out, "{EMPTY_LISTING_LINE}");
    }
    for item in items {
        let _ = writeln!(out, "{}", item_line(item, context.scope, context.issue_exists));
    }

    let _ = writeln!(out, "\n_Last updated: {}_", context.updated_at.to_http_date());
    out.push_str(SECTION_END_MARKER);
    out
}

/// Renders the section and merges it into the previous body.
pub fn render_body(items: &[TrackedItem], context: &RenderContext, previous_body: &str) -> String {
    merge_section(previous_body, &render_section(items, context))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
