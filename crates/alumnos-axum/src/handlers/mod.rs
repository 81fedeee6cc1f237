//! HTTP handlers. Each one delegates to a service and maps its error.

pub mod students;
