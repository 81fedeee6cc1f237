//! Table formatting utilities for CLI output.

use std::fmt::Write;

use alumnos_core::{Student, StudentAttributes};
use serde_json::Value;

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use alumnos_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render extra fields as `key=value` pairs, strings unquoted.
pub fn format_attributes(attributes: &StudentAttributes) -> String {
    if attributes.is_empty() {
        return "--".to_string();
    }

    attributes
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render students as a fixed-width table with a header row.
pub fn student_table(students: &[Student]) -> String {
    let mut out = format!("{:<6} {:<30} {}\n", "ID", "Name", "Fields");
    let _ = writeln!(out, "{}", "-".repeat(70));

    for student in students {
        let _ = writeln!(
            out,
            "{:<6} {:<30} {}",
            student.id,
            truncate_string(&student.name, 29),
            format_attributes(&student.attributes)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_string("Núñez Ibáñez", 8), "Núñez...");
    }

    #[test]
    fn test_format_attributes() {
        let student = Student::new(1, "Ana")
            .with_attribute("curso", "1A")
            .with_attribute("edad", 20);
        assert_eq!(format_attributes(&student.attributes), "curso=1A, edad=20");
        assert_eq!(format_attributes(&StudentAttributes::new()), "--");
    }

    #[test]
    fn test_student_table_rows() {
        let table = student_table(&[Student::new(1, "Ana"), Student::new(2, "Luis")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("1      Ana"));
        assert!(lines[3].starts_with("2      Luis"));
    }
}
