//! Moderation service API module
//!
//! Provides the HTTP client for the moderation endpoint and the wire model types.

mod client;
pub mod model;

pub use client::ModerationClient;
pub use model::{CategoryDetail, ModerationResult, ModerationStatus};
