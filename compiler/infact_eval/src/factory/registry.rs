//! A table-driven `Factory`.
//!
//! Hosts register each concrete type with its declared type, its
//! parameters and a constructor closure:
//!
//! ```text
//! let mut registry = Registry::new();
//! registry
//!     .register("PerceptronModel", "Model")
//!     .param("name", Type::STRING)
//!     .optional("dims", Type::INT)
//!     .build(|args| {
//!         let model: Rc<dyn Model> = Rc::new(Perceptron::new(
//!             args.require("PerceptronModel", "name")?,
//!             args.get_as("PerceptronModel", "dims")?.unwrap_or(1),
//!         ));
//!         Ok(model)
//!     });
//! ```

use std::fmt;
use std::rc::Rc;

use infact_ir::Type;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::{Args, ConstructError, Factory};
use crate::value::Object;

type Constructor = Box<dyn Fn(&Args) -> Result<Object, ConstructError>>;

/// A declared constructor parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: Type,
    pub required: bool,
}

struct Entry {
    declared: String,
    params: Vec<ParamDecl>,
    build: Constructor,
}

/// Constructors keyed by concrete type name.
///
/// Arguments are checked against the declared parameters before the
/// constructor runs: unknown names, missing required parameters and values
/// of the wrong type are all rejected, and `int` arguments widen to
/// `double` parameters.
#[derive(Default)]
pub struct Registry {
    entries: FxHashMap<String, Entry>,
    /// Registration order, for printing.
    order: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Start registering `concrete`, built as a `declared`.
    ///
    /// Registering the same concrete name again replaces the old entry.
    pub fn register(
        &mut self,
        concrete: impl Into<String>,
        declared: impl Into<String>,
    ) -> Registration<'_> {
        Registration {
            registry: self,
            concrete: concrete.into(),
            declared: declared.into(),
            params: Vec::new(),
        }
    }

    pub fn contains(&self, concrete: &str) -> bool {
        self.entries.contains_key(concrete)
    }

    pub fn params(&self, concrete: &str) -> Option<&[ParamDecl]> {
        self.entries.get(concrete).map(|entry| entry.params.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, concrete: String, entry: Entry) {
        if self.entries.insert(concrete.clone(), entry).is_none() {
            self.order.push(concrete);
        }
    }
}

/// Check `args` against the declared parameters, widening where allowed.
fn check_args(concrete: &str, entry: &Entry, args: &Args) -> Result<Args, ConstructError> {
    let mut checked = Args::with_capacity(args.len());
    for (name, value) in args.iter() {
        let decl = entry
            .params
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConstructError::UnknownParam {
                type_name: concrete.to_string(),
                param: name.to_string(),
            })?;
        let coerced = value
            .coerce_to(&decl.ty)
            .ok_or_else(|| ConstructError::ArgTypeMismatch {
                type_name: concrete.to_string(),
                param: name.to_string(),
                expected: decl.ty.clone(),
                found: value.describe(),
            })?;
        checked.push(name, coerced);
    }

    if let Some(missing) = entry
        .params
        .iter()
        .find(|p| p.required && !checked.contains(&p.name))
    {
        return Err(ConstructError::MissingParam {
            type_name: concrete.to_string(),
            param: missing.name.clone(),
        });
    }
    Ok(checked)
}

impl Factory for Registry {
    fn declared_type(&self, type_name: &str) -> Option<String> {
        self.entries.get(type_name).map(|entry| entry.declared.clone())
    }

    fn param_type(&self, type_name: &str, param: &str) -> Option<Type> {
        self.params(type_name)?
            .iter()
            .find(|p| p.name == param)
            .map(|p| p.ty.clone())
    }

    fn construct(&self, type_name: &str, args: &Args) -> Result<Object, ConstructError> {
        let entry = self
            .entries
            .get(type_name)
            .ok_or_else(|| ConstructError::UnknownType(type_name.to_string()))?;
        let checked = check_args(type_name, entry, args)?;
        debug!(type_name, declared = %entry.declared, args = checked.len(), "construct");
        (entry.build)(&checked)
    }
}

/// One line per declared type, each followed by its constructors.
impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut declared: Vec<&str> = Vec::new();
        for concrete in &self.order {
            if let Some(entry) = self.entries.get(concrete) {
                if !declared.contains(&entry.declared.as_str()) {
                    declared.push(&entry.declared);
                }
            }
        }

        for group in declared {
            writeln!(f, "{group}:")?;
            for concrete in &self.order {
                let Some(entry) = self.entries.get(concrete) else {
                    continue;
                };
                if entry.declared != group {
                    continue;
                }
                write!(f, "  {concrete}(")?;
                for (i, param) in entry.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    let marker = if param.required { "" } else { "?" };
                    write!(f, "{}{marker}: {}", param.name, param.ty)?;
                }
                writeln!(f, ")")?;
            }
        }
        Ok(())
    }
}

/// Builder returned by [`Registry::register`].
pub struct Registration<'r> {
    registry: &'r mut Registry,
    concrete: String,
    declared: String,
    params: Vec<ParamDecl>,
}

impl Registration<'_> {
    /// Declare a required parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.params.push(ParamDecl {
            name: name.into(),
            ty,
            required: true,
        });
        self
    }

    /// Declare an optional parameter.
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.params.push(ParamDecl {
            name: name.into(),
            ty,
            required: false,
        });
        self
    }

    /// Finish with the constructor. The host object is stored as `Rc<T>`
    /// and read back with `Rc<T>` (`T` may be a trait object).
    pub fn build<T, F>(self, build: F)
    where
        T: ?Sized + 'static,
        F: Fn(&Args) -> Result<Rc<T>, ConstructError> + 'static,
    {
        let concrete: Rc<str> = Rc::from(self.concrete.as_str());
        let declared: Rc<str> = Rc::from(self.declared.as_str());
        let constructor: Constructor = Box::new(move |args| {
            let value = build(args)?;
            Ok(Object::new(Rc::clone(&concrete), Rc::clone(&declared), value)
                .with_description(format!("{concrete}({args})")))
        });
        self.registry.insert(
            self.concrete,
            Entry {
                declared: self.declared,
                params: self.params,
                build: constructor,
            },
        );
    }
}
