//! Decorative canvas effects
//!
//! Currently a single effect: the pointer-reactive dot grid drawn behind the
//! moderation panel.

pub mod dot_grid;

pub use dot_grid::DotGrid;
