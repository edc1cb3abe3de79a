//! The core evaluator trait
//!
//! Every rule kind is backed by one [`Evaluate`] implementation: a pure
//! decision over a single field value plus the parameters of the rule
//! declaration that selected it.

use serde_json::Value;

use crate::foundation::ConfigError;
use crate::rules::RuleParams;

// ============================================================================
// EVALUATE TRAIT
// ============================================================================

/// Pass/fail decision for a single rule kind.
///
/// Implementations must be pure: no side effects, same answer for the same
/// `(value, params)` pair. The engine calls [`check`](Evaluate::check) once
/// per declared rule per validated object, in declaration order, and never
/// short-circuits — every rule always runs.
///
/// # Totality
///
/// `check` must be total over the value's observed category. A rule that
/// does not apply to the value it was handed (for example a string-length
/// rule looking at a number) reports *no violation* — it never panics and
/// never errors. Inapplicability is not a failure.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Evaluate;
/// use fieldcheck::rules::RuleParams;
/// use serde_json::Value;
///
/// struct NonNegative;
///
/// impl Evaluate for NonNegative {
///     fn check(&self, value: &Value, params: &RuleParams) -> Option<String> {
///         match value.as_i64() {
///             Some(n) if n < 0 => params.message().map(str::to_owned),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Evaluate: Send + Sync {
    /// Evaluates one field value against this rule's parameters.
    ///
    /// Returns `Some(message)` when the rule is violated, `None` when it
    /// passes or does not apply.
    fn check(&self, value: &Value, params: &RuleParams) -> Option<String>;

    /// Checks a rule declaration's parameters at configuration time.
    ///
    /// Called once per rule declaration when a schema is bound, before any
    /// instance is validated. Implementations reject missing or ill-typed
    /// parameters here so that `check` can rely on them. The default accepts
    /// anything.
    fn prepare(&self, params: &RuleParams) -> Result<(), ConfigError> {
        let _ = params;
        Ok(())
    }
}

// Plain closures are evaluators too. This is the `registerRule(kind, fn)`
// extension surface: a custom rule that needs no parameter checking can be
// registered as `|value, params| ...` without a named type.
impl<F> Evaluate for F
where
    F: Fn(&Value, &RuleParams) -> Option<String> + Send + Sync,
{
    fn check(&self, value: &Value, params: &RuleParams) -> Option<String> {
        self(value, params)
    }
}
