//! GitHub Actions workflow commands written to stdout.

/// `::error::<message>` annotation; marks the step as failed in the run summary.
pub fn error(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escape a command payload so multi-line messages survive as a single command.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_command_format() {
        assert_eq!(
            error("Failed to get runners. Status code: 500"),
            "::error::Failed to get runners. Status code: 500"
        );
    }

    #[test]
    fn escapes_percent_and_newlines() {
        assert_eq!(escape_data("50%\r\ndone\n"), "50%25%0D%0Adone%0A");
    }
}
