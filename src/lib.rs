//! # fieldcheck
//!
//! A declarative, metadata-driven object validation engine.
//!
//! Types declare validation rules on their fields as plain metadata; the
//! engine reads that metadata, evaluates every rule against the field's
//! current value, and aggregates human-readable violation messages in
//! declaration order.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct SignupForm {
//!     name: Option<String>,
//!     password: Option<String>,
//! }
//!
//! fieldcheck::schema! {
//!     SignupForm {
//!         name => [required("Name is required")],
//!         password => [
//!             required("Password is required"),
//!             min_length(6, "Password must be at least 6 characters"),
//!         ],
//!     }
//! }
//!
//! # fn main() -> Result<(), fieldcheck::foundation::ConfigError> {
//! let engine = Engine::with_builtins();
//! let checker = engine.checker::<SignupForm>()?;
//!
//! let form = SignupForm {
//!     name: Some("John".into()),
//!     password: Some("123".into()),
//! };
//! let report = checker.validate(&form);
//! assert_eq!(
//!     report.violations(),
//!     ["Password must be at least 6 characters"]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Built-in Rules
//!
//! - [`required`](rules::required) — the value must be present (non-null)
//! - [`min_length`](rules::min_length) — a string value must have at least
//!   the given number of characters
//! - [`email`](rules::email) — a string value must contain `@`
//!
//! ## Extending
//!
//! New rule kinds are registered on a
//! [`RegistryBuilder`](registry::RegistryBuilder) before the registry is
//! frozen with [`build`](registry::RegistryBuilder::build). Anything
//! implementing [`Evaluate`](foundation::Evaluate) — including plain
//! closures — can back a rule kind; the engine itself never changes when the
//! rule set grows.

pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod rules;
pub mod schema;
