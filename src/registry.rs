//! Rule registry: kind → evaluator, build-then-freeze
//!
//! The registry maps rule kind identifiers to their evaluators. It follows
//! a strict build-then-freeze discipline encoded in the type system:
//! [`RegistryBuilder`] is the only mutable stage, and
//! [`RegistryBuilder::build`] is the freeze step that produces an immutable
//! [`Registry`]. A frozen registry has no mutating methods and may be read
//! from any number of threads without synchronization.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::registry::Registry;
//! use fieldcheck::rules::RuleParams;
//! use serde_json::Value;
//!
//! let registry = Registry::builder()
//!     .register("nonEmpty", |value: &Value, params: &RuleParams| {
//!         match value.as_str() {
//!             Some(s) if s.trim().is_empty() => params.message().map(str::to_owned),
//!             _ => None,
//!         }
//!     })
//!     .build();
//!
//! assert!(registry.contains(&"nonEmpty".into()));
//! assert!(registry.contains(&"required".into()));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::foundation::{ConfigError, Evaluate};
use crate::rules::{Email, MinLength, Required, RuleKind, kinds};

// ============================================================================
// REGISTRY BUILDER
// ============================================================================

/// The mutable configuration stage of a [`Registry`].
///
/// Registration is add-or-replace: registering an already-known kind swaps
/// in the new evaluator, which is how a built-in can be overridden.
#[derive(Default)]
pub struct RegistryBuilder {
    evaluators: HashMap<RuleKind, Arc<dyn Evaluate>>,
}

impl RegistryBuilder {
    /// Creates a builder with no evaluators at all.
    ///
    /// Use [`Registry::builder`] instead to start from the built-in rule
    /// set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds or replaces the evaluator for `kind`.
    #[must_use = "builder methods must be chained or built"]
    pub fn register(
        mut self,
        kind: impl Into<RuleKind>,
        evaluator: impl Evaluate + 'static,
    ) -> Self {
        let kind = kind.into();
        debug!(kind = %kind, "registered rule evaluator");
        self.evaluators.insert(kind, Arc::new(evaluator));
        self
    }

    /// Freezes the builder into an immutable [`Registry`].
    #[must_use]
    pub fn build(self) -> Registry {
        debug!(evaluators = self.evaluators.len(), "froze rule registry");
        Registry {
            evaluators: self.evaluators,
        }
    }
}

impl std::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("kinds", &self.evaluators.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// The frozen mapping from rule kind to evaluator.
///
/// Obtained from [`RegistryBuilder::build`]; read-only thereafter.
pub struct Registry {
    evaluators: HashMap<RuleKind, Arc<dyn Evaluate>>,
}

impl Registry {
    /// Starts a builder preloaded with the built-in evaluators
    /// (`required`, `minLength`, `email`).
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::empty()
            .register(kinds::REQUIRED, Required)
            .register(kinds::MIN_LENGTH, MinLength)
            .register(kinds::EMAIL, Email)
    }

    /// A registry holding exactly the built-in evaluators.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::builder().build()
    }

    /// Resolves the evaluator for `kind`.
    ///
    /// Fails with [`ConfigError::UnknownRuleKind`] when no evaluator is
    /// registered under `kind`. Resolution happens while binding a schema,
    /// never during validation of an instance.
    pub fn resolve(&self, kind: &RuleKind) -> Result<Arc<dyn Evaluate>, ConfigError> {
        self.evaluators
            .get(kind)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownRuleKind { kind: kind.clone() })
    }

    /// Whether an evaluator is registered under `kind`.
    #[must_use]
    pub fn contains(&self, kind: &RuleKind) -> bool {
        self.evaluators.contains_key(kind)
    }

    /// Number of registered rule kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.evaluators.len()
    }

    /// Whether the registry holds no evaluators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.evaluators.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.evaluators.keys().collect::<Vec<_>>())
            .finish()
    }
}
