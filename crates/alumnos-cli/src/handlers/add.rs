//! Add command handler.

use anyhow::Result;
use serde_json::Value;

use alumnos_core::NewStudent;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Parse a `key=value` attribute argument.
///
/// The value is read as JSON when it parses (`20`, `true`, `[1,2]`),
/// otherwise it is kept as a plain string.
pub fn parse_attribute(arg: &str) -> Result<(String, Value), String> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{arg}'"));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Execute the add command.
pub async fn execute(ctx: &CliContext, name: &str, attributes: Vec<(String, Value)>) -> Result<()> {
    let student = attributes
        .into_iter()
        .fold(NewStudent::new(name), |s, (key, value)| s.with_attribute(key, value));

    let stored = ctx.students.add(student).await.map_err(CliError::from)?;

    println!("Added student {} with id {}", stored.name, stored.id);
    Ok(())
}
