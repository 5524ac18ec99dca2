//! Terminal UI components for the kaneo client.
//!
//! Provides Ayu-themed styling keyed by the domain enums, terminal
//! detection, and pager support for CLI output.

pub mod pager;
pub mod styles;
pub mod terminal;
