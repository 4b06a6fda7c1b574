//! Interpreter for infact, a small declarative language for building
//! object graphs from configuration files.
//!
//! ```text
//! // main.infact
//! import "features.infact";
//! int dims = 3;
//! Model model = PerceptronModel(name("m1"), dims(dims), features(feats));
//! Model[] ensemble = {model, PerceptronModel(name("m2"))};
//! ```
//!
//! The host registers constructible types with a [`Factory`] (usually a
//! [`Registry`]), evaluates one or more sources, and reads variables back
//! with [`Interpreter::get`] or [`Interpreter::get_many`].
//!
//! # Module Structure
//!
//! - `value`: runtime values, constructed `Object` handles, `FromValue`
//! - `environment`: the flat variable namespace and typed retrieval
//! - `factory`: the construction bridge and the reference `Registry`
//! - `loader`: how sources are opened (`FsLoader`, `MemoryLoader`)
//! - `import`: import path candidates, normalization and cycle chains
//! - `interpreter`: the statement evaluator
//! - `errors`: `EvalError` with file, line and import context

mod environment;
mod errors;
mod factory;
pub mod import;
mod interpreter;
mod loader;
mod value;

pub use environment::{Binding, Environment, GetError, Slot};
pub use errors::{EvalError, EvalErrorKind, ImportFrame, Location};
pub use factory::{Args, ConstructError, Factory, ParamDecl, Registration, Registry};
pub use interpreter::Interpreter;
pub use loader::{FsLoader, MemoryLoader, SourceLoader};
pub use value::{unify_scalars, FromValue, Object, Value};

pub use infact_ir::{ScalarType, Type};
