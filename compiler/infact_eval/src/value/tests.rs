use std::rc::Rc;

use super::*;
use pretty_assertions::assert_eq;

trait Shape {
    fn sides(&self) -> u32;
}

struct Square;

impl Shape for Square {
    fn sides(&self) -> u32 {
        4
    }
}

fn square() -> Object {
    let shape: Rc<dyn Shape> = Rc::new(Square);
    Object::new("Square", "Shape", shape)
}

#[test]
fn test_int_widens_to_double() {
    assert_eq!(Value::Int(3).coerce_to(&Type::DOUBLE), Some(Value::Double(3.0)));
    assert_eq!(Value::Double(3.0).coerce_to(&Type::INT), None);
}

#[test]
fn test_scalar_mismatches() {
    assert_eq!(Value::Int(1).coerce_to(&Type::STRING), None);
    assert_eq!(Value::Bool(true).coerce_to(&Type::INT), None);
    assert_eq!(Value::Str("1".to_string()).coerce_to(&Type::INT), None);
}

#[test]
fn test_scalar_vector_mismatch() {
    let list = Value::List(vec![Value::Int(1)]);
    assert_eq!(list.coerce_to(&Type::INT), None);
    assert_eq!(Value::Int(1).coerce_to(&Type::vector(ScalarType::Int)), None);
    assert_eq!(
        list.coerce_to(&Type::vector(ScalarType::Double)),
        Some(Value::List(vec![Value::Double(1.0)]))
    );
}

#[test]
fn test_empty_list_fits_any_vector() {
    let empty = Value::List(vec![]);
    assert_eq!(empty.coerce_to(&Type::vector(ScalarType::Str)), Some(empty.clone()));
    assert_eq!(empty.coerce_to(&Type::object("Shape").to_vector()), Some(empty));
}

#[test]
fn test_null_fits_object_types_only() {
    assert_eq!(Value::Null.coerce_to(&Type::object("Shape")), Some(Value::Null));
    assert_eq!(
        Value::Null.coerce_to(&Type::object("Shape").to_vector()),
        Some(Value::Null)
    );
    assert_eq!(Value::Null.coerce_to(&Type::INT), None);
}

#[test]
fn test_object_matches_declared_or_concrete() {
    let value = Value::Object(square());
    assert!(value.coerce_to(&Type::object("Shape")).is_some());
    assert!(value.coerce_to(&Type::object("Square")).is_some());
    assert!(value.coerce_to(&Type::object("Circle")).is_none());
    assert_eq!(value.scalar_type(), Some(ScalarType::Object("Shape".to_string())));
}

#[test]
fn test_object_downcast_to_trait_object() {
    let object = square();
    let shape = object.downcast::<dyn Shape>().unwrap();
    assert_eq!(shape.sides(), 4);
    assert!(object.downcast::<Square>().is_none());
}

#[test]
fn test_object_identity() {
    let a = square();
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, square());
}

#[test]
fn test_unify_scalars() {
    assert_eq!(
        unify_scalars(&ScalarType::Int, &ScalarType::Double),
        Some(ScalarType::Double)
    );
    assert_eq!(
        unify_scalars(&ScalarType::Str, &ScalarType::Str),
        Some(ScalarType::Str)
    );
    assert_eq!(unify_scalars(&ScalarType::Str, &ScalarType::Int), None);
}

#[test]
fn test_display_in_source_syntax() {
    let list = Value::List(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
    assert_eq!(list.to_string(), "{3, 1, 2}");
    assert_eq!(Value::Double(1.0).to_string(), "1.0");
    assert_eq!(Value::Str("a\"b".to_string()).to_string(), r#""a\"b""#);
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Object(square()).to_string(), "Square()");
    assert_eq!(
        Value::Object(square().with_description("Square(size(2))")).to_string(),
        "Square(size(2))"
    );
}

#[test]
fn test_describe() {
    assert_eq!(Value::Int(1).describe(), "int");
    assert_eq!(Value::List(vec![]).describe(), "vector");
    assert_eq!(Value::Object(square()).describe(), "Square");
}

#[test]
fn test_from_value_primitives() {
    assert_eq!(i64::from_value(&Value::Int(5)), Some(5));
    assert_eq!(String::from_value(&Value::Int(5)), None);
    assert_eq!(f64::from_value(&Value::Int(2)), Some(2.0));
    assert_eq!(i64::from_value(&Value::Double(2.0)), None);
    assert_eq!(i32::from_value(&Value::Int(i64::MAX)), None);
}

#[test]
fn test_from_value_containers() {
    let list = Value::List(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
    assert_eq!(Vec::<i64>::from_value(&list), Some(vec![3, 1, 2]));
    assert_eq!(Vec::<String>::from_value(&list), None);
    assert_eq!(Option::<i64>::from_value(&Value::Null), Some(None));
    assert_eq!(Option::<i64>::from_value(&Value::Int(1)), Some(Some(1)));
    assert_eq!(Vec::<i64>::expected(), "int[]");
}

#[test]
fn test_from_value_host_objects() {
    let value = Value::Object(square());
    let shape = Rc::<dyn Shape>::from_value(&value).unwrap();
    assert_eq!(shape.sides(), 4);
    assert!(Option::<Rc<dyn Shape>>::from_value(&Value::Null)
        .unwrap()
        .is_none());
}
