//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms.

pub mod tables;

// Re-export commonly used items
pub use tables::{format_attributes, student_table, truncate_string};
