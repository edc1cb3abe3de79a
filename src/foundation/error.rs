//! Configuration-time error types
//!
//! These errors indicate a programming mistake in a schema or registry —
//! a rule kind nobody registered, or a rule declared without a parameter
//! its evaluator needs. They surface when a schema is bound against a
//! registry, before any instance is validated, and are never converted
//! into per-field violation messages.

use crate::rules::RuleKind;

/// A fatal configuration error.
///
/// Returned from [`Registry::resolve`](crate::registry::Registry::resolve)
/// and [`Engine::checker`](crate::engine::Engine::checker). Once a type's
/// schema has bound successfully, validation of its instances can no longer
/// fail with any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A schema references a rule kind the registry has no evaluator for.
    #[error("unknown rule kind `{kind}`")]
    UnknownRuleKind {
        /// The unresolved kind identifier.
        kind: RuleKind,
    },

    /// A rule declaration lacks a parameter its evaluator requires.
    #[error("rule `{kind}` is missing required parameter `{param}`")]
    MissingParameter {
        /// The rule kind whose declaration is malformed.
        kind: RuleKind,
        /// Name of the missing parameter.
        param: &'static str,
    },

    /// A rule parameter is present but has the wrong shape.
    #[error("rule `{kind}` parameter `{param}` must be {expected}")]
    InvalidParameter {
        /// The rule kind whose declaration is malformed.
        kind: RuleKind,
        /// Name of the offending parameter.
        param: &'static str,
        /// What the evaluator expected, e.g. `"a string"`.
        expected: &'static str,
    },
}
