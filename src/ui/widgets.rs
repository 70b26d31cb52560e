//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; they use generic Message types
//! so they stay reusable across components.

pub mod progress_track;
mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
