//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the detail panel, the conversion dialog and toasts.

use std::time::Duration;

use super::types::{ConvertFormState, DetailPanelState, FilterState, ToastQueue};

/// Toasts kept at once; older ones are dropped
pub const TOAST_CAPACITY: usize = 3;

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Search, status filter and sort of the lead list
    pub filters: FilterState,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// First `g` of a `gg` sequence was pressed
    pub pending_g: bool,

    // ============================================
    // PANELS & DIALOGS
    // ============================================
    /// Lead detail side panel
    pub detail: Option<DetailPanelState>,

    /// Lead conversion dialog
    pub convert: Option<ConvertFormState>,

    /// Key binding help overlay
    pub show_help: bool,

    /// Transient notifications
    pub toasts: ToastQueue,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, toast_duration: Duration) -> Self {
        Self {
            filters: FilterState::default(),
            vim_mode,
            pending_g: false,
            detail: None,
            convert: None,
            show_help: false,
            toasts: ToastQueue::new(TOAST_CAPACITY, toast_duration),
            search_mode: false,
            should_quit: false,
        }
    }

    /// Whether a dialog grabs the keyboard
    pub fn has_modal(&self) -> bool {
        self.convert.is_some() || self.show_help
    }
}
