//! UI Components module - business-specific composite components
//!
//! Components combine widgets and effects with application logic. They are
//! the only UI layer that should import from `crate::app`.

pub mod analysis_card;
pub mod error_banner;
pub mod hero;
pub mod result_card;
