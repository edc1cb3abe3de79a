//! Rule declarations: kinds, parameters, and specs
//!
//! A [`RuleSpec`] is one declared validation rule — a [`RuleKind`] selecting
//! which evaluator applies, plus a small ordered bag of named parameters
//! ([`RuleParams`]). Specs are plain data: they carry no behavior and are
//! immutable once attached to a field descriptor.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::rules::{min_length, RuleSpec};
//!
//! // Factory for a built-in rule:
//! let rule = min_length(6, "Password must be at least 6 characters");
//!
//! // Or spelled out, e.g. for a custom rule kind:
//! let rule = RuleSpec::new("nonNegative")
//!     .with_param("message", "Quantity must not be negative");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use smallvec::SmallVec;

mod builtin;

pub use builtin::{Email, MinLength, Required, email, min_length, required};

/// Identifiers of the built-in rule kinds.
pub mod kinds {
    /// The value must be present (non-null).
    pub const REQUIRED: &str = "required";
    /// A string value must have at least `minLength` characters.
    pub const MIN_LENGTH: &str = "minLength";
    /// A string value must contain `@`.
    pub const EMAIL: &str = "email";
}

/// Names of the conventional rule parameters.
pub mod params {
    /// The violation message reported when the rule fails.
    pub const MESSAGE: &str = "message";
    /// Minimum character count for the `minLength` rule.
    pub const MIN_LENGTH: &str = "minLength";
}

// ============================================================================
// RULE KIND
// ============================================================================

/// Identifier selecting which evaluator applies to a rule declaration.
///
/// Stored as `Cow<'static, str>` — zero-allocation for the common case of
/// a `&'static str` kind name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKind(Cow<'static, str>);

impl RuleKind {
    /// Creates a kind from a static identifier without allocating.
    #[must_use]
    pub const fn from_static(kind: &'static str) -> Self {
        Self(Cow::Borrowed(kind))
    }

    /// Returns the kind identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RuleKind {
    fn from(kind: &'static str) -> Self {
        Self(Cow::Borrowed(kind))
    }
}

impl From<String> for RuleKind {
    fn from(kind: String) -> Self {
        Self(Cow::Owned(kind))
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// RULE PARAMS
// ============================================================================

/// Ordered name → value parameters of one rule declaration.
///
/// Rules carry very few parameters (typically `message`, sometimes one
/// threshold), so entries live inline in a [`SmallVec`] and lookups are a
/// linear scan. Insertion order is preserved; inserting an existing name
/// replaces the value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleParams(SmallVec<[(Cow<'static, str>, Value); 2]>);

impl RuleParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, replacing any existing value under `name`.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Returns the raw value of a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns a parameter as a string slice, if present and string-valued.
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Returns a parameter as an unsigned integer, if present and numeric.
    #[must_use]
    pub fn unsigned(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_u64)
    }

    /// Returns the conventional `message` parameter, if present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.str(params::MESSAGE)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// RULE SPEC
// ============================================================================

/// One declared validation rule: a kind plus its parameters.
///
/// Built either through the factory functions for the built-in kinds
/// ([`required`], [`min_length`], [`email`]) or through
/// [`RuleSpec::new`] + [`with_param`](RuleSpec::with_param) for custom
/// kinds. Immutable once attached to a field descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    kind: RuleKind,
    params: RuleParams,
}

impl RuleSpec {
    /// Creates a spec for `kind` with no parameters.
    #[must_use]
    pub fn new(kind: impl Into<RuleKind>) -> Self {
        Self {
            kind: kind.into(),
            params: RuleParams::new(),
        }
    }

    /// Adds (or replaces) a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Self {
        self.params.insert(name, value);
        self
    }

    /// The kind identifier of this rule.
    #[must_use]
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The parameters of this rule.
    #[must_use]
    pub fn params(&self) -> &RuleParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_preserve_insertion_order() {
        let mut params = RuleParams::new();
        params.insert("b", 1);
        params.insert("a", 2);
        params.insert("c", 3);
        let names: Vec<&str> = params.0.iter().map(|(n, _)| n.as_ref()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn params_insert_replaces_in_place() {
        let mut params = RuleParams::new();
        params.insert("message", "first");
        params.insert("min", 3);
        params.insert("message", "second");
        assert_eq!(params.len(), 2);
        assert_eq!(params.str("message"), Some("second"));
    }

    #[test]
    fn typed_getters_reject_wrong_shapes() {
        let mut params = RuleParams::new();
        params.insert("message", 42);
        params.insert("min", "six");
        assert_eq!(params.str("message"), None);
        assert_eq!(params.unsigned("min"), None);
        assert_eq!(params.get("message"), Some(&json!(42)));
    }

    #[test]
    fn spec_builder_collects_kind_and_params() {
        let spec = RuleSpec::new("custom")
            .with_param("message", "nope")
            .with_param("limit", 10);
        assert_eq!(spec.kind().as_str(), "custom");
        assert_eq!(spec.params().message(), Some("nope"));
        assert_eq!(spec.params().unsigned("limit"), Some(10));
    }
}
