//! App Orchestration Methods
//!
//! `impl App` blocks grouped by what the user is doing. Each method takes a
//! model transition, then sends the resulting API request or writes the
//! key-value store:
//! - leads: fetching and moving the cursor
//! - editor: the detail panel's edit form and optimistic save
//! - convert: the conversion dialog
//! - filters: search, status filter and sort, persisted on change
//! - pipeline: opportunity fetches and persistence

pub(crate) mod convert;
pub(crate) mod editor;
pub(crate) mod filters;
pub(crate) mod leads;
pub(crate) mod pipeline;
