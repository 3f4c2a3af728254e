use super::*;

#[test]
fn messages_are_escaped() {
    assert_eq!(escape_data("100% done\r\nnext"), "100%25 done%0D%0Anext");
}

#[test]
fn workflow_command_layout() {
    assert_eq!(
        workflow_command("error", "An error occurred: HTTP 404\nNot Found"),
        "::error::An error occurred: HTTP 404%0ANot Found"
    );
    assert_eq!(
        workflow_command("notice", "Updated issue #12"),
        "::notice::Updated issue #12"
    );
}

#[test]
fn failure_is_one_line_per_environment() {
    assert_eq!(
        failure_line(true, "An error occurred: boom"),
        "::error::An error occurred: boom"
    );
    assert_eq!(
        failure_line(false, "An error occurred: boom"),
        "error: An error occurred: boom"
    );
}
