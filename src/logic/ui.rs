//! UI state transition logic
//!
//! Pure functions for transient UI decisions.

/// Whether a toast shown `elapsed_ms` ago has outlived `duration_ms`
///
/// # Examples
/// ```
/// use sellertui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(500, 3000));
/// assert!(should_dismiss_toast(3000, 3000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128, duration_ms: u128) -> bool {
    elapsed_ms >= duration_ms
}

/// Empty-state description for the lead list
pub fn empty_leads_message(filters_active: bool) -> &'static str {
    if filters_active {
        "Try adjusting your filters to see more results."
    } else {
        "No leads available at the moment."
    }
}

/// Footer hint of the detail panel
pub fn detail_panel_hint(editing: bool) -> &'static str {
    if editing {
        "Press Ctrl+S to save, Esc to cancel"
    } else {
        "Press Esc to close"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_not_dismissed_early() {
        assert!(!should_dismiss_toast(0, 1500));
        assert!(!should_dismiss_toast(1499, 1500));
    }

    #[test]
    fn test_toast_dismissed_after_duration() {
        assert!(should_dismiss_toast(1500, 1500));
        assert!(should_dismiss_toast(10_000, 1500));
    }

    #[test]
    fn test_empty_message_depends_on_filters() {
        assert_eq!(
            empty_leads_message(true),
            "Try adjusting your filters to see more results."
        );
        assert_eq!(empty_leads_message(false), "No leads available at the moment.");
    }

    #[test]
    fn test_panel_hint() {
        assert!(detail_panel_hint(true).contains("Esc to cancel"));
        assert_eq!(detail_panel_hint(false), "Press Esc to close");
    }
}
