//! Validation engine: binding, caching, and the validate loop
//!
//! The engine orchestrates the other pieces: it takes a frozen
//! [`Registry`], binds each type's [`Schema`] against it once (resolving
//! every rule kind and checking every rule's parameters — all configuration
//! errors surface here), and then runs the bound form against instances.
//!
//! The validate loop itself is deliberately dumb: fields in declaration
//! order, rules in declaration order, every rule always evaluated, no
//! short-circuiting. One object can therefore accumulate several violations
//! across fields and several on the same field. A field whose value cannot
//! be read contributes a single generic message and its rules are skipped.
//!
//! Validation holds no state between calls: given the same object contents
//! and the same frozen registry, two calls return identical reports, and
//! calls may run concurrently from any number of threads.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::foundation::{ConfigError, Evaluate};
use crate::registry::Registry;
use crate::report::ValidationReport;
use crate::schema::{Describe, FieldDescriptor, Schema};

// ============================================================================
// ENGINE
// ============================================================================

/// Entry point: binds schemas against a frozen registry and validates
/// instances.
///
/// Cheap to share behind an [`Arc`]; all methods take `&self`. Bound
/// schemas are cached per type, since a type's schema never changes at
/// runtime.
pub struct Engine {
    registry: Arc<Registry>,
    cache: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl Engine {
    /// Creates an engine over a frozen registry.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an engine over the built-in rule set.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::new(Registry::with_builtins())
    }

    /// The registry this engine resolves rule kinds against.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the bound validator for `T`, binding and caching it on first
    /// use.
    ///
    /// This is where configuration errors surface: an unknown rule kind or
    /// a malformed rule declaration anywhere in `T`'s schema fails the
    /// whole binding. Once this returns `Ok`, validating instances of `T`
    /// cannot fail.
    pub fn checker<T>(&self) -> Result<Arc<TypeValidator<T>>, ConfigError>
    where
        T: Describe + 'static,
    {
        let id = TypeId::of::<T>();
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = cache.get(&id) {
                if let Ok(bound) = Arc::clone(entry).downcast::<TypeValidator<T>>() {
                    return Ok(bound);
                }
            }
        }

        let bound = Arc::new(TypeValidator::bind(T::schema(), &self.registry)?);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let entry = cache
            .entry(id)
            .or_insert_with(|| Arc::clone(&bound) as Arc<dyn Any + Send + Sync>);
        // A racing caller may have bound first; both came from the same
        // schema and registry, so either result is fine.
        Ok(Arc::clone(entry)
            .downcast::<TypeValidator<T>>()
            .unwrap_or(bound))
    }

    /// Validates `object`, binding `T`'s schema on first use.
    ///
    /// Configuration errors can only come from that first binding;
    /// thereafter this is equivalent to
    /// [`TypeValidator::validate`] on the cached checker.
    pub fn validate<T>(&self, object: &T) -> Result<ValidationReport, ConfigError>
    where
        T: Describe + 'static,
    {
        Ok(self.checker::<T>()?.validate(object))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TYPE VALIDATOR
// ============================================================================

/// A type's schema bound against a registry: every rule kind resolved,
/// every rule's parameters checked.
///
/// Obtained from [`Engine::checker`]. Validation through a bound validator
/// is infallible.
pub struct TypeValidator<T> {
    fields: Vec<BoundField<T>>,
}

struct BoundField<T> {
    descriptor: FieldDescriptor<T>,
    // Parallel to descriptor.rules(): evaluators[i] backs rules()[i].
    evaluators: Vec<Arc<dyn Evaluate>>,
}

impl<T> TypeValidator<T> {
    /// Binds `schema` against `registry`.
    ///
    /// Resolves each declared rule's evaluator and runs its
    /// [`prepare`](Evaluate::prepare) check. Any failure aborts the whole
    /// binding — a half-bound schema is never handed out.
    pub fn bind(schema: Schema<T>, registry: &Registry) -> Result<Self, ConfigError> {
        let mut fields = Vec::with_capacity(schema.len());
        for descriptor in schema.into_fields() {
            let mut evaluators = Vec::with_capacity(descriptor.rules().len());
            for spec in descriptor.rules() {
                let evaluator = registry.resolve(spec.kind())?;
                evaluator.prepare(spec.params())?;
                evaluators.push(evaluator);
            }
            fields.push(BoundField {
                descriptor,
                evaluators,
            });
        }
        debug!(fields = fields.len(), "bound schema against rule registry");
        Ok(Self { fields })
    }

    /// Validates one instance.
    ///
    /// Returns the ordered violation messages: field declaration order,
    /// then rule declaration order within each field. An unreadable field
    /// contributes `"Validation error for <name>"` and its rules are
    /// skipped; all other fields still validate.
    pub fn validate(&self, object: &T) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in &self.fields {
            let value = match field.descriptor.read(object) {
                Ok(value) => value,
                Err(error) => {
                    trace!(field = field.descriptor.name(), %error, "field value unreadable");
                    report.push(format!("Validation error for {}", field.descriptor.name()));
                    continue;
                }
            };
            for (spec, evaluator) in field.descriptor.rules().iter().zip(&field.evaluators) {
                if let Some(message) = evaluator.check(&value, spec.params()) {
                    report.push(message);
                }
            }
        }
        report
    }

    /// Number of fields this validator covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the bound schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> std::fmt::Debug for TypeValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeValidator")
            .field(
                "fields",
                &self
                    .fields
                    .iter()
                    .map(|field| field.descriptor.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
