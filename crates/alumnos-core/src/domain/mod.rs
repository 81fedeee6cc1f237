//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod student;

pub use student::{NewStudent, Student, StudentAttributes};
