use anyhow::Error;

/// Message shown to the user for a failed call: the root cause of the chain
///
/// Context added while propagating (e.g. "while refreshing leads") is for the
/// log; the user sees the original human-readable message.
pub fn format_error_message(error: &Error) -> String {
    error.root_cause().to_string()
}

/// Full chain on one line, for the debug log
pub fn format_error_chain(error: &Error) -> String {
    format!("{:#}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("Failed to fetch leads. Please try again.");
        assert_eq!(
            format_error_message(&err),
            "Failed to fetch leads. Please try again."
        );
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("Lead not found");
        let outer = inner.context("Failed to save lead-404");
        assert_eq!(format_error_message(&outer), "Lead not found");
    }

    #[test]
    fn test_chain_includes_context() {
        let outer = anyhow::anyhow!("Lead not found").context("Failed to save lead-404");
        assert_eq!(
            format_error_chain(&outer),
            "Failed to save lead-404: Lead not found"
        );
    }
}
