//! UI module for the moderation console
//! Dark mode aesthetic with a blue glow accent
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Effects** (`effects`): Decorative canvas programs without business logic
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod components;
pub mod effects;
pub mod theme;
pub mod widgets;
