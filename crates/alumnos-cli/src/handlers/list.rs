//! List command handler.
//!
//! Fetches the remote collection once and prints it as a table.

use std::time::Duration;

use anyhow::Result;

use alumnos_core::{StudentDirectoryError, StudentDirectoryPort};
use alumnos_http::{DefaultStudentsClient, StudentsClientConfig};

use crate::error::CliError;
use crate::presentation::student_table;

/// Build the HTTP client for `--url` (or the default collection address).
pub fn client(url: Option<String>, timeout_secs: u64) -> Result<DefaultStudentsClient, CliError> {
    let config = StudentsClientConfig::new()
        .with_optional_base_url(url)
        .with_timeout(Duration::from_secs(timeout_secs));

    DefaultStudentsClient::new(&config).map_err(|e| CliError::from(StudentDirectoryError::from(e)))
}

/// Execute the list command against any student directory.
pub async fn execute(directory: &dyn StudentDirectoryPort) -> Result<()> {
    let students = directory
        .fetch_all_students()
        .await
        .map_err(CliError::from)?;

    if students.is_empty() {
        println!("The collection is empty.");
        return Ok(());
    }

    println!("Found {} student(s):\n", students.len());
    print!("{}", student_table(&students));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alumnos_core::{Student, StudentDirectoryError, StudentDirectoryResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedDirectory {
        result: fn() -> StudentDirectoryResult<Vec<Student>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StudentDirectoryPort for FixedDirectory {
        async fn fetch_all_students(&self) -> StudentDirectoryResult<Vec<Student>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }
    }

    #[test]
    fn test_client_defaults_to_local_collection() {
        let client = client(None, 30).unwrap();
        assert_eq!(
            client.collection_url().as_str(),
            "http://localhost:8080/alumnos"
        );
    }

    #[test]
    fn test_client_rejects_unparseable_url() {
        let err = client(Some("not a url".into()), 30).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[tokio::test]
    async fn test_list_fetches_once() {
        let directory = FixedDirectory {
            result: || Ok(vec![Student::new(1, "Ana")]),
            calls: AtomicUsize::new(0),
        };

        execute(&directory).await.unwrap();

        assert_eq!(directory.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_list_error_carries_exit_code() {
        let directory = FixedDirectory {
            result: || {
                Err(StudentDirectoryError::Http {
                    status: 503,
                    url: "http://localhost:8080/alumnos".into(),
                })
            },
            calls: AtomicUsize::new(0),
        };

        let err = execute(&directory).await.unwrap_err();

        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 69);
    }
}
