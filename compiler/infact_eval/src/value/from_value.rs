//! Conversion from `Value` to host types.

use std::rc::Rc;

use infact_ir::Type;

use super::{Object, Value};

/// A host type that can be read out of a `Value`.
///
/// A variable is read in two steps: its bound type must be accepted, then
/// its value must convert. The type check keeps values whose shape fits
/// several types (`{}`, `null`) from being read as the wrong one.
///
/// Implemented for the primitives, `String`, `Vec<T>`, `Option<T>` (where
/// `null` reads as `None`), `Object`, and `Rc<T>` for any host type wrapped
/// by a factory, including trait objects.
pub trait FromValue: Sized {
    /// What the conversion accepts, for mismatch messages (`int`, `string[]`).
    fn expected() -> String;

    /// Whether a variable bound with type `ty` may be read as `Self`.
    fn accepts(ty: &Type) -> bool;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn expected() -> String {
        "any value".to_string()
    }

    fn accepts(_: &Type) -> bool {
        true
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    fn expected() -> String {
        "bool".to_string()
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::BOOL
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn expected() -> String {
        "int".to_string()
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::INT
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// Fails for integers outside the `i32` range.
impl FromValue for i32 {
    fn expected() -> String {
        "int".to_string()
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::INT
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn expected() -> String {
        "double".to_string()
    }

    fn accepts(ty: &Type) -> bool {
        !ty.is_vector && ty.scalar.is_numeric()
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "int to double widening is part of the language"
    )]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Double(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn expected() -> String {
        "string".to_string()
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::STRING
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn expected() -> String {
        format!("{}[]", T::expected())
    }

    fn accepts(ty: &Type) -> bool {
        ty.is_vector && T::accepts(&ty.element())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn expected() -> String {
        format!("{} or null", T::expected())
    }

    fn accepts(ty: &Type) -> bool {
        T::accepts(ty)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl FromValue for Object {
    fn expected() -> String {
        "object".to_string()
    }

    fn accepts(ty: &Type) -> bool {
        is_object_scalar(ty)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(object.clone()),
            _ => None,
        }
    }
}

impl<T: ?Sized + 'static> FromValue for Rc<T> {
    fn expected() -> String {
        std::any::type_name::<T>().to_string()
    }

    fn accepts(ty: &Type) -> bool {
        is_object_scalar(ty)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(object) => object.downcast::<T>(),
            _ => None,
        }
    }
}

fn is_object_scalar(ty: &Type) -> bool {
    !ty.is_vector && ty.is_object()
}
