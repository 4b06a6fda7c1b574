//! A factory that accepts every type.

use std::fmt;
use std::rc::Rc;

use infact_eval::{Args, ConstructError, Factory, Object};
use tracing::trace;

/// The arguments of one construction spec, kept as written.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub type_name: String,
    pub args: Args,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name, self.args)
    }
}

/// Builds a [`Record`] for any type name. Each type is its own declared
/// type, so `Foo f = Foo(...)` checks and `Bar b = Foo(...)` does not.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordFactory;

impl Factory for RecordFactory {
    fn declared_type(&self, type_name: &str) -> Option<String> {
        Some(type_name.to_string())
    }

    fn construct(&self, type_name: &str, args: &Args) -> Result<Object, ConstructError> {
        trace!(type_name, "record");
        let record = Record {
            type_name: type_name.to_string(),
            args: args.clone(),
        };
        let description = record.to_string();
        Ok(Object::new(type_name, type_name, Rc::new(record)).with_description(description))
    }
}
