//! Runtime values.
//!
//! A `Value` is what a variable holds after its statement ran: references
//! are already looked up and construction specs already built, so there is
//! no `Ref` or `Spec` case here.

mod from_value;
mod object;

use std::fmt;

use infact_ir::{Literal, ScalarType, Type};

pub use from_value::FromValue;
pub use object::Object;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(String),
    /// Ordered elements, all of one scalar type (nulls aside).
    List(Vec<Value>),
    Object(Object),
    Null,
}

impl Value {
    pub fn from_literal(literal: &Literal) -> (Value, Type) {
        match literal {
            Literal::Bool(v) => (Value::Bool(*v), Type::BOOL),
            Literal::Int(v) => (Value::Int(*v), Type::INT),
            Literal::Double(v) => (Value::Double(*v), Type::DOUBLE),
            Literal::Str(v) => (Value::Str(v.clone()), Type::STRING),
        }
    }

    /// Type of a scalar value. `None` for lists and null, whose type
    /// depends on context.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Value::Bool(_) => Some(ScalarType::Bool),
            Value::Int(_) => Some(ScalarType::Int),
            Value::Double(_) => Some(ScalarType::Double),
            Value::Str(_) => Some(ScalarType::Str),
            Value::Object(object) => Some(ScalarType::Object(object.declared_type().to_string())),
            Value::List(_) | Value::Null => None,
        }
    }

    /// Short name of what this value is, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::List(_) => "vector".to_string(),
            Value::Null => "null".to_string(),
            Value::Object(object) => object.concrete_type().to_string(),
            scalar => scalar
                .scalar_type()
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// This value as a value of type `ty`, if it is one.
    ///
    /// Integers widen to doubles. Null fits any object type or object
    /// vector. Objects fit a type named by their declared or concrete type.
    pub fn coerce_to(&self, ty: &Type) -> Option<Value> {
        match self {
            Value::Null => ty.is_object().then_some(Value::Null),
            Value::List(items) if ty.is_vector => items
                .iter()
                .map(|item| item.coerce_scalar(&ty.scalar))
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            Value::List(_) => None,
            _ if ty.is_vector => None,
            scalar => scalar.coerce_scalar(&ty.scalar),
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "int to double widening is part of the language"
    )]
    fn coerce_scalar(&self, scalar: &ScalarType) -> Option<Value> {
        match (self, scalar) {
            (Value::Bool(_), ScalarType::Bool)
            | (Value::Int(_), ScalarType::Int)
            | (Value::Double(_), ScalarType::Double)
            | (Value::Str(_), ScalarType::Str)
            | (Value::Null, ScalarType::Object(_)) => Some(self.clone()),
            (Value::Int(v), ScalarType::Double) => Some(Value::Double(*v as f64)),
            (Value::Object(object), ScalarType::Object(name)) if object.is_a(name) => {
                Some(self.clone())
            }
            _ => None,
        }
    }
}

/// The common element type of two vector elements: equal types unify,
/// and `int` with `double` gives `double`.
pub fn unify_scalars(a: &ScalarType, b: &ScalarType) -> Option<ScalarType> {
    match (a, b) {
        _ if a == b => Some(a.clone()),
        (ScalarType::Int, ScalarType::Double) | (ScalarType::Double, ScalarType::Int) => {
            Some(ScalarType::Double)
        }
        _ => None,
    }
}

/// Values print in source syntax, so a printed environment reads back in.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v:?}"),
            Value::Str(v) => f.write_str(&infact_lexer::quote(v)),
            Value::List(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Value::Object(object) => write!(f, "{object}"),
            Value::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
