#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewStudent, Student, StudentAttributes};
pub use paths::{PathError, data_root, database_path, database_path_in};
pub use ports::{
    CoreError, RepositoryError, StudentDirectoryError, StudentDirectoryPort,
    StudentDirectoryResult, StudentRepository,
};
pub use services::StudentService;
