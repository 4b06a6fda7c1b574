//! Output slots for `Environment::get_many`.

use super::{Environment, GetError};
use crate::value::FromValue;

/// A variable name paired with the place its value goes.
///
/// ```text
/// let (mut dims, mut name) = (0i64, String::new());
/// interpreter.get_many(&mut [Slot::new("dims", &mut dims), Slot::new("name", &mut name)])?;
/// ```
pub struct Slot<'a> {
    name: &'a str,
    out: &'a mut dyn Fill,
}

impl<'a> Slot<'a> {
    pub fn new<T: FromValue>(name: &'a str, out: &'a mut T) -> Self {
        Slot { name, out }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub(super) fn fill(&mut self, env: &Environment) -> Result<(), GetError> {
        self.out.fill(env, self.name)
    }
}

trait Fill {
    fn fill(&mut self, env: &Environment, name: &str) -> Result<(), GetError>;
}

impl<T: FromValue> Fill for T {
    fn fill(&mut self, env: &Environment, name: &str) -> Result<(), GetError> {
        *self = env.get_typed(name)?;
        Ok(())
    }
}
