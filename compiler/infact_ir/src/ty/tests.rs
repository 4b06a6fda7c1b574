use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_primitive_specifiers() {
    assert_eq!(Type::from_specifier("bool"), Some(Type::BOOL));
    assert_eq!(Type::from_specifier("int"), Some(Type::INT));
    assert_eq!(Type::from_specifier("double"), Some(Type::DOUBLE));
    assert_eq!(Type::from_specifier("string"), Some(Type::STRING));
}

#[test]
fn test_vector_specifiers() {
    assert_eq!(
        Type::from_specifier("int[]"),
        Some(Type::vector(ScalarType::Int))
    );
    assert_eq!(
        Type::from_specifier("Model[]"),
        Some(Type::vector(ScalarType::Object("Model".to_string())))
    );
}

#[test]
fn test_object_specifier() {
    assert_eq!(Type::from_specifier("Model"), Some(Type::object("Model")));
    assert!(Type::object("Model").is_object());
    assert!(!Type::INT.is_object());
}

#[test]
fn test_malformed_specifiers() {
    assert_eq!(Type::from_specifier(""), None);
    assert_eq!(Type::from_specifier("[]"), None);
    assert_eq!(Type::from_specifier("int[][]"), None);
}

#[test]
fn test_display() {
    assert_eq!(Type::STRING.to_string(), "string");
    assert_eq!(Type::vector(ScalarType::Double).to_string(), "double[]");
    assert_eq!(Type::object("Model").to_vector().to_string(), "Model[]");
    assert_eq!(Type::vector(ScalarType::Bool).element(), Type::BOOL);
}
