//! GitHub Actions workflow commands.
//!
//! Inside a workflow run the outcome is reported as `::notice::` and
//! `::error::` commands so it shows up in the run summary. Elsewhere the log
//! stream already carries the outcome and only failures are echoed.

/// Returns `true` when running inside a GitHub Actions job.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Escapes a workflow-command message (`%`, CR and LF).
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

/// Reports an informational outcome.
pub fn notice(message: &str) {
    if is_github_actions() {
        println!("{}", workflow_command("notice", message));
    }
}

/// Reports the run's failure. This is the only place a failure is printed.
pub fn fail(message: &str) {
    if is_github_actions() {
        println!("{}", failure_line(true, message));
    } else {
        eprintln!("{}", failure_line(false, message));
    }
}

fn failure_line(in_actions: bool, message: &str) -> String {
    if in_actions {
        workflow_command("error", message)
    } else {
        format!("error: {message}")
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
