//! External Services
//!
//! This module contains services that run outside the UI loop:
//! - api: Background worker executing simulated API calls

pub mod api;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
