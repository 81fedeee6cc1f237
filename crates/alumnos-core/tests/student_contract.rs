//! Integration tests for the student JSON contract.
//!
//! The collection resource and the client only agree on JSON, so these
//! tests pin the wire shape of `Student` from outside the crate.

use alumnos_core::{NewStudent, Student};
use serde_json::json;

#[test]
fn test_collection_body_decodes_to_students() {
    let body = r#"[{"id":1,"name":"Ana"}]"#;
    let students: Vec<Student> = serde_json::from_str(body).unwrap();

    assert_eq!(students, vec![Student::new(1, "Ana")]);
}

#[test]
fn test_empty_collection_decodes_to_empty_vec() {
    let students: Vec<Student> = serde_json::from_str("[]").unwrap();
    assert!(students.is_empty());
}

#[test]
fn test_new_student_body_collects_extra_fields() {
    let new: NewStudent = serde_json::from_value(json!({
        "name": "Marta",
        "email": "marta@example.com",
        "edad": 17
    }))
    .unwrap();

    assert_eq!(new.name, "Marta");
    assert_eq!(new.attributes.len(), 2);
    assert!(new.validate().is_ok());
}

#[test]
fn test_student_serializes_flat() {
    let student = Student::new(3, "Pablo").with_attribute("edad", 16);
    assert_eq!(
        serde_json::to_value(&student).unwrap(),
        json!({"id": 3, "name": "Pablo", "edad": 16})
    );
}

#[test]
fn test_spanish_nombre_field_is_read_as_name() {
    let body = r#"[{"id":2,"nombre":"Lucía","curso":"1A"}]"#;
    let students: Vec<Student> = serde_json::from_str(body).unwrap();

    assert_eq!(
        students,
        vec![Student::new(2, "Lucía").with_attribute("curso", "1A")]
    );
    assert_eq!(
        serde_json::to_value(&students[0]).unwrap(),
        json!({"id": 2, "name": "Lucía", "curso": "1A"})
    );

    let new: NewStudent = serde_json::from_value(json!({"nombre": "Lucía"})).unwrap();
    assert_eq!(new, NewStudent::new("Lucía"));
}
