use super::*;
use similar_asserts::assert_eq;

fn section(content: &str) -> String {
    format!("{SECTION_START_MARKER}\n{content}\n{SECTION_END_MARKER}")
}

#[test]
fn empty_previous_body_yields_section_alone() {
    let new = section("- #1");
    assert_eq!(merge_section("", &new), new);
}

#[test]
fn body_without_markers_gets_section_appended_after_blank_line() {
    let previous = "Some notes written by a human.\nSecond line.";
    let new = section("- #1");

    let merged = merge_section(previous, &new);

    assert_eq!(merged, format!("{previous}\n\n{new}"));
    assert!(merged.starts_with(previous));
}

#[test]
fn existing_section_is_replaced_and_surroundings_preserved() {
    let prefix = "Intro paragraph\r\n\n  indented *markdown*\n";
    let suffix = "\n\n## Notes\nKeep me exactly, trailing spaces too.   \n";
    let previous = format!("{prefix}{}{suffix}", section("- #1\n- #2"));
    let new = section("- #3");

    let merged = merge_section(&previous, &new);

    assert_eq!(merged, format!("{prefix}{new}{suffix}"));
}

#[test]
fn only_the_first_marked_section_is_replaced() {
    let previous = format!("{}\nmiddle\n{}", section("old one"), section("old two"));
    let new = section("new");

    let merged = merge_section(&previous, &new);

    assert_eq!(merged, format!("{new}\nmiddle\n{}", section("old two")));
}

#[test]
fn end_marker_before_start_marker_is_ignored() {
    let previous = format!("{SECTION_END_MARKER}\nheader\n{}", section("old"));
    let new = section("new");

    let merged = merge_section(&previous, &new);

    assert_eq!(merged, format!("{SECTION_END_MARKER}\nheader\n{new}"));
}

#[test]
fn lone_start_marker_is_treated_as_no_section() {
    let previous = format!("text\n{SECTION_START_MARKER}\nhalf-deleted");
    let new = section("new");

    assert_eq!(merge_section(&previous, &new), format!("{previous}\n\n{new}"));
}

#[test]
fn merging_twice_is_idempotent() {
    let previous = "Human text above.";
    let new = section("- #7 (Assigned to: @bob)");

    let once = merge_section(previous, &new);
    let twice = merge_section(&once, &new);

    assert_eq!(once, twice);
}

#[test]
fn find_marked_section_spans_both_markers() {
    let body = format!("ab{}cd", section("x"));
    let span = find_marked_section(&body).unwrap();
    assert_eq!(&body[span], section("x").as_str());
}

#[test]
fn find_marked_section_is_none_without_end_marker() {
    assert!(find_marked_section(SECTION_START_MARKER).is_none());
    assert!(find_marked_section("plain").is_none());
}
