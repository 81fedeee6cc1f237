//! Core services.
//!
//! Services orchestrate domain operations over injected ports and hold
//! no infrastructure state of their own.

mod student_service;

pub use student_service::StudentService;
