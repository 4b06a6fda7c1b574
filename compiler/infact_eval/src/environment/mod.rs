//! Variable bindings.
//!
//! One flat namespace per interpreter. Imported files bind into the same
//! environment as the file that imports them, and rebinding a name
//! replaces both its value and its type.

mod slot;

use std::fmt;

use infact_ir::Type;
use rustc_hash::FxHashMap;

use crate::value::{FromValue, Value};

pub use slot::Slot;

/// A variable's current value and type.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub value: Value,
    pub ty: Type,
}

/// Why a host-side lookup failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GetError {
    #[error("no variable named `{0}`")]
    NotFound(String),

    #[error("variable `{name}` has type {found}, which cannot be read as {expected}")]
    TypeMismatch {
        name: String,
        expected: String,
        found: Type,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Binding>,
    /// Names in the order they were first bound.
    order: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Insert or overwrite `name`. An overwritten name keeps its position.
    pub fn bind(&mut self, name: impl Into<String>, value: Value, ty: Type) {
        let name = name.into();
        if let Some(binding) = self.bindings.get_mut(&name) {
            *binding = Binding { value, ty };
            return;
        }
        self.order.push(name.clone());
        self.bindings.insert(name, Binding { value, ty });
    }

    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn get(&self, name: &str) -> Result<&Value, GetError> {
        self.lookup(name)
            .map(|binding| &binding.value)
            .ok_or_else(|| GetError::NotFound(name.to_string()))
    }

    /// Read `name` as a `T`. The binding's type must be one `T` accepts.
    pub fn get_typed<T: FromValue>(&self, name: &str) -> Result<T, GetError> {
        let binding = self
            .lookup(name)
            .ok_or_else(|| GetError::NotFound(name.to_string()))?;
        T::accepts(&binding.ty)
            .then(|| T::from_value(&binding.value))
            .flatten()
            .ok_or_else(|| GetError::TypeMismatch {
                name: name.to_string(),
                expected: T::expected(),
                found: binding.ty.clone(),
            })
    }

    /// Fill each slot in order, stopping at the first failure.
    ///
    /// Slots before the failing one keep their new values; the failing
    /// slot and everything after it are left untouched.
    pub fn get_many(&self, slots: &mut [Slot<'_>]) -> Result<(), GetError> {
        for slot in slots {
            slot.fill(self)?;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bindings in first-bound order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.order.iter().filter_map(|name| {
            self.bindings
                .get(name)
                .map(|binding| (name.as_str(), binding))
        })
    }
}

/// One `type name = value;` line per binding, so the output reads back in.
impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, binding) in self.iter() {
            writeln!(f, "{} {name} = {};", binding.ty, binding.value)?;
        }
        Ok(())
    }
}
