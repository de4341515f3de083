// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, filters, content, side panel)
// - render: Main orchestration function that coordinates all rendering
// - header: Title bar with the Leads / Opportunities tabs
// - search: Search input, status filter and active-filters line
// - lead_table: Lead list with sort arrows and status counts
// - detail_panel: Lead side panel with the inline edit form
// - opportunities: Pipeline totals and opportunity list
// - states: Loading skeleton, empty and error placeholders
// - badges: Colored status/source/stage/score spans
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status line
// - dialogs: Conversion form and help overlay
// - toast: Renders toast notifications (brief pop-up messages)

pub mod badges;
pub mod detail_panel;
pub mod dialogs;
pub mod header;
pub mod layout;
pub mod lead_table;
pub mod legend;
pub mod opportunities;
pub mod render;
pub mod search;
pub mod states;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
