//! Turning value expressions into values.
//!
//! References are looked up at the point of use, so a name must be bound
//! by an earlier statement (or an earlier import). Construction specs are
//! built bottom-up: every argument has its final value before the factory
//! is called.

use infact_ir::{Expr, ExprKind, ScalarType, SpecExpr, Span, Type};
use infact_parse::ensure_sufficient_stack;
use tracing::debug;

use super::{Interpreter, Source};
use crate::errors::{EvalError, EvalErrorKind};
use crate::factory::{Args, ConstructError};
use crate::value::{unify_scalars, Value};

/// A value and the type it carries on its own.
///
/// `ty` is `None` when the type depends on the declaration: `null`, `{}`,
/// and vectors holding only nulls.
pub(super) struct Resolved {
    pub(super) value: Value,
    pub(super) ty: Option<Type>,
}

impl Resolved {
    fn typed(value: Value, ty: Type) -> Self {
        Resolved {
            value,
            ty: Some(ty),
        }
    }

    fn is_vector(&self) -> bool {
        match &self.ty {
            Some(ty) => ty.is_vector,
            None => matches!(self.value, Value::List(_)),
        }
    }

    /// What this is, for type mismatch messages.
    pub(super) fn describe(&self) -> String {
        match &self.ty {
            Some(ty) => ty.to_string(),
            None => self.value.describe(),
        }
    }

    /// Why no type could be inferred.
    pub(super) fn untyped_origin(&self) -> &'static str {
        match &self.value {
            Value::List(items) if items.is_empty() => "an empty vector",
            Value::List(_) => "a vector of nulls",
            _ => "`null`",
        }
    }
}

impl Interpreter {
    pub(super) fn resolve(&mut self, source: &Source, expr: &Expr) -> Result<Resolved, EvalError> {
        ensure_sufficient_stack(|| self.resolve_inner(source, expr))
    }

    fn resolve_inner(&mut self, source: &Source, expr: &Expr) -> Result<Resolved, EvalError> {
        match &expr.kind {
            ExprKind::Literal(literal) => {
                let (value, ty) = Value::from_literal(literal);
                Ok(Resolved::typed(value, ty))
            }
            ExprKind::Null => Ok(Resolved {
                value: Value::Null,
                ty: None,
            }),
            ExprKind::Ref(name) => {
                let binding = self.env.lookup(name).ok_or_else(|| {
                    source.error(expr.span, EvalErrorKind::UndefinedVariable(name.clone()))
                })?;
                Ok(Resolved::typed(binding.value.clone(), binding.ty.clone()))
            }
            ExprKind::List(items) => self.resolve_list(source, items),
            ExprKind::Spec(spec) => self.construct(source, spec, expr.span),
        }
    }

    /// Resolve `expr` where its type is already known. A vector literal
    /// takes its element type from `declared` rather than from its
    /// elements, so `Model[] ms = {a, b};` accepts any mix of models.
    pub(super) fn resolve_as(
        &mut self,
        source: &Source,
        expr: &Expr,
        declared: &Type,
    ) -> Result<Resolved, EvalError> {
        match &expr.kind {
            ExprKind::List(items) if declared.is_vector => {
                self.resolve_list_as(source, items, declared)
            }
            _ => self.resolve(source, expr),
        }
    }

    fn resolve_list_as(
        &mut self,
        source: &Source,
        items: &[Expr],
        declared: &Type,
    ) -> Result<Resolved, EvalError> {
        let element = declared.element();
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            let resolved = self.resolve(source, item)?;
            reject_nested(source, item, &resolved)?;
            let value = resolved.value.coerce_to(&element).ok_or_else(|| {
                source.error(
                    item.span,
                    EvalErrorKind::ElementMismatch {
                        expected: element.clone(),
                        found: resolved.describe(),
                    },
                )
            })?;
            values.push(value);
        }
        Ok(Resolved::typed(Value::List(values), declared.clone()))
    }

    /// `{a, b, ...}`: elements share one scalar type, with `int` widening
    /// to `double`. Nulls are only allowed among objects.
    fn resolve_list(&mut self, source: &Source, items: &[Expr]) -> Result<Resolved, EvalError> {
        let mut values = Vec::with_capacity(items.len());
        let mut element: Option<ScalarType> = None;
        let mut first_null: Option<Span> = None;

        for item in items {
            let resolved = self.resolve(source, item)?;
            reject_nested(source, item, &resolved)?;
            match &resolved.ty {
                Some(ty) => {
                    element = Some(match &element {
                        None => ty.scalar.clone(),
                        Some(prev) => unify_scalars(prev, &ty.scalar).ok_or_else(|| {
                            source.error(
                                item.span,
                                EvalErrorKind::MixedVector {
                                    first: prev.to_string(),
                                    found: ty.scalar.to_string(),
                                },
                            )
                        })?,
                    });
                }
                None => {
                    first_null.get_or_insert(item.span);
                }
            }
            values.push(resolved.value);
        }

        let Some(scalar) = element else {
            return Ok(Resolved {
                value: Value::List(values),
                ty: None,
            });
        };
        if let (Some(span), false) = (first_null, scalar.is_object()) {
            return Err(source.error(
                span,
                EvalErrorKind::MixedVector {
                    first: scalar.to_string(),
                    found: "null".to_string(),
                },
            ));
        }

        let ty = Type::vector(scalar);
        let value = Value::List(values);
        let value = value.coerce_to(&ty).unwrap_or(value);
        Ok(Resolved::typed(value, ty))
    }

    /// `Type(param(value), ...)`
    fn construct(
        &mut self,
        source: &Source,
        spec: &SpecExpr,
        span: Span,
    ) -> Result<Resolved, EvalError> {
        let Some(declared) = self.factory.declared_type(&spec.type_name) else {
            return Err(source.error(
                span,
                EvalErrorKind::UnknownType(spec.type_name.clone()),
            ));
        };

        let mut args = Args::with_capacity(spec.args.len());
        for arg in &spec.args {
            let resolved = match self.factory.param_type(&spec.type_name, &arg.name) {
                Some(ty) => self.resolve_as(source, &arg.value, &ty)?,
                None => self.resolve(source, &arg.value)?,
            };
            args.push(arg.name.clone(), resolved.value);
        }

        debug!(type_name = %spec.type_name, args = args.len(), "construct");
        let object = self
            .factory
            .construct(&spec.type_name, &args)
            .map_err(|err| {
                let kind = match err {
                    ConstructError::UnknownType(name) => EvalErrorKind::UnknownType(name),
                    other => EvalErrorKind::Construct {
                        type_name: spec.type_name.clone(),
                        source: other,
                    },
                };
                source.error(span, kind)
            })?;

        Ok(Resolved::typed(Value::Object(object), Type::object(declared)))
    }
}

fn reject_nested(source: &Source, item: &Expr, resolved: &Resolved) -> Result<(), EvalError> {
    if resolved.is_vector() {
        return Err(source.error(
            item.span,
            EvalErrorKind::NestedVector(source.snippet(item.span).to_string()),
        ));
    }
    Ok(())
}
