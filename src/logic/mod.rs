//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: User-facing error messages
//! - filter: Search and status filtering of the lead list
//! - formatting: Currency, dates, scores, column truncation
//! - navigation: Cursor movement and choice cycling
//! - pipeline: Opportunity totals and merging
//! - sorting: Lead comparison and sort toggling
//! - ui: Toast timing and view messages
//! - validation: Email and conversion form checks

pub mod errors;
pub mod filter;
pub mod formatting;
pub mod navigation;
pub mod pipeline;
pub mod sorting;
pub mod ui;
pub mod validation;
