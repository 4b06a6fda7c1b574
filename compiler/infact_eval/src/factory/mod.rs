//! The construction bridge.
//!
//! A construction spec such as `PerceptronModel(name("m"), dims(3))` is
//! handed to a `Factory` once all of its arguments have values. What the
//! factory builds is opaque to the interpreter: it only keeps the returned
//! `Object` handle.

mod registry;

use std::fmt;

use infact_ir::Type;

use crate::value::{FromValue, Object, Value};

pub use registry::{ParamDecl, Registration, Registry};

/// Builds objects from type names and named arguments.
pub trait Factory {
    /// The declared (abstract) type of objects built for `type_name`, or
    /// `None` if the type is unknown.
    fn declared_type(&self, type_name: &str) -> Option<String>;

    /// The type a `type_name` argument named `param` must have, when the
    /// factory knows it. A vector literal passed there is typed from this
    /// instead of from its own elements.
    fn param_type(&self, _type_name: &str, _param: &str) -> Option<Type> {
        None
    }

    /// Build a `type_name` from `args`.
    fn construct(&self, type_name: &str, args: &Args) -> Result<Object, ConstructError>;
}

impl<F: Factory + ?Sized> Factory for Box<F> {
    fn declared_type(&self, type_name: &str) -> Option<String> {
        (**self).declared_type(type_name)
    }

    fn param_type(&self, type_name: &str, param: &str) -> Option<Type> {
        (**self).param_type(type_name, param)
    }

    fn construct(&self, type_name: &str, args: &Args) -> Result<Object, ConstructError> {
        (**self).construct(type_name, args)
    }
}

/// Why a factory refused to build an object.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConstructError {
    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("`{type_name}` has no parameter `{param}`")]
    UnknownParam { type_name: String, param: String },

    #[error("missing required argument `{param}` for `{type_name}`")]
    MissingParam { type_name: String, param: String },

    #[error("argument `{param}` of `{type_name}` must be {expected}, found {found}")]
    ArgTypeMismatch {
        type_name: String,
        param: String,
        expected: Type,
        found: String,
    },

    /// The host's own constructor failed.
    #[error("{0}")]
    Failed(String),
}

/// Named arguments of one construction, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    entries: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Args::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Args {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The argument `name` as a `T`, or `None` if it was not given.
    pub fn get_as<T: FromValue>(
        &self,
        type_name: &str,
        name: &str,
    ) -> Result<Option<T>, ConstructError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => T::from_value(value).map(Some).ok_or_else(|| {
                ConstructError::Failed(format!(
                    "argument `{name}` of `{type_name}` must be {}, found {}",
                    T::expected(),
                    value.describe()
                ))
            }),
        }
    }

    /// The argument `name` as a `T`; missing is an error.
    pub fn require<T: FromValue>(&self, type_name: &str, name: &str) -> Result<T, ConstructError> {
        self.get_as(type_name, name)?
            .ok_or_else(|| ConstructError::MissingParam {
                type_name: type_name.to_string(),
                param: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// `name(value), ...` as written in a construction spec.
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}({value})")?;
        }
        Ok(())
    }
}
