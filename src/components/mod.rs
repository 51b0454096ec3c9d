//! UI components built with Leptos.
//!
//! - [`Shell`] - Page widget: header, controls, animation area and terminal
//! - [`controls`] - Header buttons and badges
//! - [`matrix`] - Canvas host for the rain animation
//! - [`terminal`] - Transcript and prompt

pub mod controls;
pub mod matrix;
pub mod terminal;

pub use terminal::Shell;
