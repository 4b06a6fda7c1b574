//! Type specifiers.
//!
//! A type is one of the four primitives or a factory-constructible type
//! name, optionally turned into a vector by a trailing `[]`. Vectors do not
//! nest.

use std::fmt;

/// Element type of a `Type`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarType {
    Bool,
    Int,
    Double,
    Str,
    /// A factory-constructible type, named by its declared (abstract) type.
    Object(String),
}

impl ScalarType {
    /// Map a type name to its scalar type. Unknown names are object types.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bool" => ScalarType::Bool,
            "int" => ScalarType::Int,
            "double" => ScalarType::Double,
            "string" => ScalarType::Str,
            other => ScalarType::Object(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Int => "int",
            ScalarType::Double => "double",
            ScalarType::Str => "string",
            ScalarType::Object(name) => name,
        }
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, ScalarType::Object(_))
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarType::Int | ScalarType::Double)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A full type: a scalar or a vector of that scalar.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Type {
    pub scalar: ScalarType,
    pub is_vector: bool,
}

impl Type {
    pub const BOOL: Type = Type::scalar(ScalarType::Bool);
    pub const INT: Type = Type::scalar(ScalarType::Int);
    pub const DOUBLE: Type = Type::scalar(ScalarType::Double);
    pub const STRING: Type = Type::scalar(ScalarType::Str);

    #[inline]
    pub const fn scalar(scalar: ScalarType) -> Self {
        Type {
            scalar,
            is_vector: false,
        }
    }

    #[inline]
    pub const fn vector(scalar: ScalarType) -> Self {
        Type {
            scalar,
            is_vector: true,
        }
    }

    /// Object type with the given declared name.
    pub fn object(name: impl Into<String>) -> Self {
        Type::scalar(ScalarType::Object(name.into()))
    }

    /// Parse a type specifier such as `int`, `Model` or `string[]`.
    ///
    /// Returns `None` for an empty name or a bare `[]`.
    pub fn from_specifier(spec: &str) -> Option<Self> {
        let (name, is_vector) = match spec.strip_suffix("[]") {
            Some(stripped) => (stripped, true),
            None => (spec, false),
        };
        if name.is_empty() || name.contains(['[', ']']) {
            return None;
        }
        Some(Type {
            scalar: ScalarType::from_name(name),
            is_vector,
        })
    }

    /// The element type of a vector, or the type itself for scalars.
    #[must_use]
    pub fn element(&self) -> Type {
        Type::scalar(self.scalar.clone())
    }

    /// The vector type whose elements are this type's scalar.
    #[must_use]
    pub fn to_vector(&self) -> Type {
        Type::vector(self.scalar.clone())
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.scalar.is_object()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_vector {
            write!(f, "{}[]", self.scalar)
        } else {
            write!(f, "{}", self.scalar)
        }
    }
}

#[cfg(test)]
mod tests;
