//! Constructed object handles.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// An opaque handle to a host object built by a `Factory`.
///
/// The payload is the host's own `Rc<T>`, boxed as `Rc<dyn Any>`, so `T`
/// may be unsized (`Rc<dyn Model>`). Cloning the handle shares the object.
#[derive(Clone)]
pub struct Object {
    concrete: Rc<str>,
    declared: Rc<str>,
    payload: Rc<dyn Any>,
    description: Option<Rc<str>>,
}

impl Object {
    /// Wrap `value`, built for `concrete` and returned as `declared`.
    pub fn new<T: ?Sized + 'static>(
        concrete: impl Into<Rc<str>>,
        declared: impl Into<Rc<str>>,
        value: Rc<T>,
    ) -> Self {
        Object {
            concrete: concrete.into(),
            declared: declared.into(),
            payload: Rc::new(value),
            description: None,
        }
    }

    /// Text shown when the object is printed, usually its construction spec.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<Rc<str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The type name the object was constructed as (`PerceptronModel`).
    pub fn concrete_type(&self) -> &str {
        &self.concrete
    }

    /// The abstract type the factory returns it as (`Model`).
    pub fn declared_type(&self) -> &str {
        &self.declared
    }

    /// Whether the object can stand in for a value of type `name`.
    pub fn is_a(&self, name: &str) -> bool {
        &*self.declared == name || &*self.concrete == name
    }

    /// The host object, if it was wrapped as `Rc<T>`.
    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Rc<T>> {
        self.payload.downcast_ref::<Rc<T>>().cloned()
    }

    /// Whether both handles refer to the same constructed object.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.payload, &other.payload)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({}: {})", self.concrete, self.declared)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => f.write_str(description),
            None => write!(f, "{}()", self.concrete),
        }
    }
}
