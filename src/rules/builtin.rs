//! Built-in rule evaluators
//!
//! Three rules ship with the engine:
//!
//! - [`Required`] — the value must be present (non-null)
//! - [`MinLength`] — a string must have at least `minLength` characters
//! - [`Email`] — a string must contain `@`
//!
//! Each rule only judges values in its applicability range: `minLength` and
//! `email` ignore anything that is not a string (including an absent value),
//! so a numeric field with a `minLength` rule attached never fails. Pair
//! them with [`Required`] when presence itself must be enforced.
//!
//! The `email` check is deliberately weak — presence of `@` anywhere in the
//! string, nothing more. `"a@"` passes. Callers who want a stricter grammar
//! register their own rule kind instead of changing this one.

use serde_json::Value;

use crate::foundation::{ConfigError, Evaluate};
use crate::rules::{RuleKind, RuleParams, RuleSpec, kinds, params};

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Declares that the field's value must be present (non-null).
///
/// `message` is reported verbatim when the value is absent. An empty string
/// is present, not absent.
#[must_use]
pub fn required(message: impl Into<String>) -> RuleSpec {
    RuleSpec::new(kinds::REQUIRED).with_param(params::MESSAGE, message.into())
}

/// Declares that a string field must have at least `min` characters.
///
/// The bound is inclusive: a string of exactly `min` characters passes.
/// Non-string values (including absent ones) never violate this rule.
#[must_use]
pub fn min_length(min: usize, message: impl Into<String>) -> RuleSpec {
    RuleSpec::new(kinds::MIN_LENGTH)
        .with_param(params::MIN_LENGTH, min)
        .with_param(params::MESSAGE, message.into())
}

/// Declares that a string field must contain `@`.
///
/// Non-string values (including absent ones) never violate this rule.
#[must_use]
pub fn email(message: impl Into<String>) -> RuleSpec {
    RuleSpec::new(kinds::EMAIL).with_param(params::MESSAGE, message.into())
}

// ============================================================================
// PARAMETER CHECKS
// ============================================================================

fn require_message(kind: &'static str, params: &RuleParams) -> Result<(), ConfigError> {
    match params.get(params::MESSAGE) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(ConfigError::InvalidParameter {
            kind: RuleKind::from_static(kind),
            param: params::MESSAGE,
            expected: "a string",
        }),
        None => Err(ConfigError::MissingParameter {
            kind: RuleKind::from_static(kind),
            param: params::MESSAGE,
        }),
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

/// Evaluator behind the `required` rule kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Required;

impl Evaluate for Required {
    fn check(&self, value: &Value, params: &RuleParams) -> Option<String> {
        if value.is_null() {
            params.message().map(str::to_owned)
        } else {
            None
        }
    }

    fn prepare(&self, params: &RuleParams) -> Result<(), ConfigError> {
        require_message(kinds::REQUIRED, params)
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Evaluator behind the `minLength` rule kind.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinLength;

impl Evaluate for MinLength {
    fn check(&self, value: &Value, params: &RuleParams) -> Option<String> {
        let min = params.unsigned(params::MIN_LENGTH)?;
        match value {
            Value::String(s) if chars(s) < min => params.message().map(str::to_owned),
            _ => None,
        }
    }

    fn prepare(&self, params: &RuleParams) -> Result<(), ConfigError> {
        match params.get(params::MIN_LENGTH) {
            Some(Value::Number(n)) if n.as_u64().is_some() => {}
            Some(_) => {
                return Err(ConfigError::InvalidParameter {
                    kind: RuleKind::from_static(kinds::MIN_LENGTH),
                    param: params::MIN_LENGTH,
                    expected: "an unsigned integer",
                });
            }
            None => {
                return Err(ConfigError::MissingParameter {
                    kind: RuleKind::from_static(kinds::MIN_LENGTH),
                    param: params::MIN_LENGTH,
                });
            }
        }
        require_message(kinds::MIN_LENGTH, params)
    }
}

fn chars(s: &str) -> u64 {
    u64::try_from(s.chars().count()).unwrap_or(u64::MAX)
}

// ============================================================================
// EMAIL
// ============================================================================

/// Evaluator behind the `email` rule kind.
///
/// Checks only that the string contains `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Email;

impl Evaluate for Email {
    fn check(&self, value: &Value, params: &RuleParams) -> Option<String> {
        match value {
            Value::String(s) if !s.contains('@') => params.message().map(str::to_owned),
            _ => None,
        }
    }

    fn prepare(&self, params: &RuleParams) -> Result<(), ConfigError> {
        require_message(kinds::EMAIL, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn msg() -> RuleParams {
        required("violated").params().clone()
    }

    // ── required ─────────────────────────────────────────────────────────

    #[test]
    fn required_fires_on_null_only() {
        assert_eq!(Required.check(&json!(null), &msg()), Some("violated".to_owned()));
        assert_eq!(Required.check(&json!(""), &msg()), None);
        assert_eq!(Required.check(&json!(0), &msg()), None);
        assert_eq!(Required.check(&json!(false), &msg()), None);
    }

    #[test]
    fn required_prepare_demands_message() {
        assert!(Required.prepare(&msg()).is_ok());
        assert_eq!(
            Required.prepare(&RuleParams::new()),
            Err(ConfigError::MissingParameter {
                kind: RuleKind::from_static(kinds::REQUIRED),
                param: params::MESSAGE,
            })
        );
    }

    // ── minLength ────────────────────────────────────────────────────────

    fn min_params(min: usize) -> RuleParams {
        min_length(min, "too short").params().clone()
    }

    #[rstest]
    #[case("123456", None)] // boundary: exactly min passes
    #[case("1234567", None)]
    #[case("12345", Some("too short"))]
    #[case("", Some("too short"))]
    fn min_length_boundary(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            MinLength.check(&json!(input), &min_params(6)),
            expected.map(str::to_owned)
        );
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        // Six scalar values, far more than six bytes.
        assert_eq!(MinLength.check(&json!("ääääää"), &min_params(6)), None);
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(42))]
    #[case(json!(true))]
    #[case(json!(["a"]))]
    fn min_length_ignores_non_strings(#[case] value: Value) {
        assert_eq!(MinLength.check(&value, &min_params(100)), None);
    }

    #[test]
    fn min_length_prepare_demands_threshold_and_message() {
        assert!(MinLength.prepare(&min_params(6)).is_ok());
        assert_eq!(
            MinLength.prepare(&msg()),
            Err(ConfigError::MissingParameter {
                kind: RuleKind::from_static(kinds::MIN_LENGTH),
                param: params::MIN_LENGTH,
            })
        );
        let mut bad = min_params(6);
        bad.insert(params::MIN_LENGTH, "six");
        assert_eq!(
            MinLength.prepare(&bad),
            Err(ConfigError::InvalidParameter {
                kind: RuleKind::from_static(kinds::MIN_LENGTH),
                param: params::MIN_LENGTH,
                expected: "an unsigned integer",
            })
        );
    }

    // ── email ────────────────────────────────────────────────────────────

    #[rstest]
    #[case("john@example.com", None)]
    #[case("a@", None)] // weak check: any `@` passes
    #[case("@", None)]
    #[case("invalid-email", Some("violated"))]
    #[case("", Some("violated"))]
    fn email_checks_for_at_sign_only(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(Email.check(&json!(input), &msg()), expected.map(str::to_owned));
    }

    #[test]
    fn email_ignores_non_strings() {
        assert_eq!(Email.check(&json!(null), &msg()), None);
        assert_eq!(Email.check(&json!(42), &msg()), None);
    }
}
