//! Registry extension and configuration-error tests.

use fieldcheck::prelude::*;
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// CUSTOM RULE KINDS
// ============================================================================

#[derive(Serialize)]
struct Order {
    quantity: i64,
}

fieldcheck::schema! {
    Order {
        quantity => [
            RuleSpec::new("nonNegative").with_param("message", "Quantity must not be negative"),
        ],
    }
}

#[test]
fn closure_rule_participates_like_a_builtin() {
    let registry = Registry::builder()
        .register("nonNegative", |value: &Value, params: &RuleParams| {
            match value.as_i64() {
                Some(n) if n < 0 => params.message().map(str::to_owned),
                _ => None,
            }
        })
        .build();
    let engine = Engine::new(registry);

    let report = engine.validate(&Order { quantity: -1 }).expect("schema binds");
    assert_eq!(report.violations(), ["Quantity must not be negative"]);

    let report = engine.validate(&Order { quantity: 0 }).expect("schema binds");
    assert!(report.is_valid());
}

struct ExactLength;

impl Evaluate for ExactLength {
    fn check(&self, value: &Value, params: &RuleParams) -> Option<String> {
        let expected = params.unsigned("length")?;
        match value.as_str() {
            Some(s) if s.chars().count() as u64 != expected => {
                params.message().map(str::to_owned)
            }
            _ => None,
        }
    }

    fn prepare(&self, params: &RuleParams) -> Result<(), ConfigError> {
        if params.unsigned("length").is_some() {
            Ok(())
        } else {
            Err(ConfigError::MissingParameter {
                kind: "exactLength".into(),
                param: "length",
            })
        }
    }
}

#[derive(Serialize)]
struct Pin {
    code: Option<String>,
}

fieldcheck::schema! {
    Pin {
        code => [
            RuleSpec::new("exactLength")
                .with_param("length", 4)
                .with_param("message", "Pin must be exactly 4 digits"),
        ],
    }
}

#[test]
fn struct_rule_with_prepare_participates() {
    let engine = Engine::new(Registry::builder().register("exactLength", ExactLength).build());

    let report = engine
        .validate(&Pin {
            code: Some("123".to_owned()),
        })
        .expect("schema binds");
    assert_eq!(report.violations(), ["Pin must be exactly 4 digits"]);

    let report = engine
        .validate(&Pin {
            code: Some("1234".to_owned()),
        })
        .expect("schema binds");
    assert!(report.is_valid());
}

// ============================================================================
// CONFIGURATION ERRORS SURFACE AT BINDING, NOT VALIDATION
// ============================================================================

#[derive(Serialize)]
struct UsesUnknownRule {
    field: Option<String>,
}

fieldcheck::schema! {
    UsesUnknownRule {
        field => [RuleSpec::new("creditCard").with_param("message", "nope")],
    }
}

#[test]
fn unknown_rule_kind_fails_the_binding() {
    let engine = Engine::with_builtins();
    let err = engine.checker::<UsesUnknownRule>().expect_err("must not bind");
    assert_eq!(
        err,
        ConfigError::UnknownRuleKind {
            kind: "creditCard".into()
        }
    );
}

#[derive(Serialize)]
struct MissingMessage {
    field: Option<String>,
}

fieldcheck::schema! {
    MissingMessage {
        field => [RuleSpec::new("required")],
    }
}

#[test]
fn malformed_rule_declaration_fails_the_binding() {
    let engine = Engine::with_builtins();
    let err = engine.checker::<MissingMessage>().expect_err("must not bind");
    assert_eq!(
        err,
        ConfigError::MissingParameter {
            kind: "required".into(),
            param: "message",
        }
    );
    // The error names the problem for the developer.
    assert_eq!(
        err.to_string(),
        "rule `required` is missing required parameter `message`"
    );
}

// ============================================================================
// OVERRIDING A BUILT-IN
// ============================================================================

#[derive(Serialize)]
struct Invite {
    email: Option<String>,
}

fieldcheck::schema! {
    Invite {
        email => [email("Please provide a valid email address")],
    }
}

#[test]
fn registering_an_existing_kind_replaces_the_builtin() {
    // A stricter replacement for the built-in `email` rule.
    let registry = Registry::builder()
        .register("email", |value: &Value, params: &RuleParams| {
            match value.as_str() {
                Some(s) if !(s.contains('@') && s.contains('.')) => {
                    params.message().map(str::to_owned)
                }
                _ => None,
            }
        })
        .build();
    let engine = Engine::new(registry);

    // `a@` passes the built-in check but fails the replacement.
    let report = engine
        .validate(&Invite {
            email: Some("a@".to_owned()),
        })
        .expect("schema binds");
    assert_eq!(report.violations(), ["Please provide a valid email address"]);
}
