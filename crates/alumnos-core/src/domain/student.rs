//! Student domain types.
//!
//! A student record is whatever the collection resource serializes. Only
//! `id` and `name` are typed; every other field is carried verbatim in
//! `attributes` and flattened back into the same JSON object on output.
//! The name is also accepted as `nombre` and always written as `name`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::CoreError;

/// Free-form fields of a student record, keyed by field name.
pub type StudentAttributes = serde_json::Map<String, Value>;

/// A student as returned by the collection resource.
///
/// Use `NewStudent` for records that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Identifier assigned by the collection resource.
    pub id: i64,
    /// Display name.
    #[serde(alias = "nombre")]
    pub name: String,
    /// Remaining fields, passed through unchanged.
    #[serde(flatten)]
    pub attributes: StudentAttributes,
}

impl Student {
    /// Create a record with no extra attributes.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: StudentAttributes::new(),
        }
    }

    /// Add an attribute, replacing any previous value for `key`.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A student that hasn't been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    /// Display name.
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(flatten)]
    pub attributes: StudentAttributes,
}

impl NewStudent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: StudentAttributes::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Check the record before it is stored.
    ///
    /// The name must not be blank, and `id` may not appear among the
    /// attributes since ids are assigned on insert.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Student name cannot be empty".to_string(),
            ));
        }
        if self.attributes.contains_key("id") {
            return Err(CoreError::Validation(
                "Student id is assigned on insert and cannot be provided".to_string(),
            ));
        }
        Ok(())
    }

    /// Attach the assigned id, producing the persisted record.
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            attributes: self.attributes,
        }
    }
}
