//! Prelude module for convenient imports.
//!
//! A single `use fieldcheck::prelude::*;` brings in everything needed for
//! common validation scenarios: the engine, the registry, the rule
//! factories, and the metadata types the [`schema!`](macro@crate::schema) macro
//! expands to.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//!
//! let engine = Engine::with_builtins();
//! let report = engine.validate(&form)?;
//! ```

// ============================================================================
// FOUNDATION: core trait and errors
// ============================================================================

pub use crate::foundation::{ConfigError, Evaluate};

// ============================================================================
// RULES: declarations and built-in factories
// ============================================================================

pub use crate::rules::{RuleKind, RuleParams, RuleSpec, email, min_length, required};

// ============================================================================
// REGISTRY AND ENGINE
// ============================================================================

pub use crate::engine::{Engine, TypeValidator};
pub use crate::registry::{Registry, RegistryBuilder};
pub use crate::report::ValidationReport;

// ============================================================================
// METADATA
// ============================================================================

pub use crate::schema::{Describe, FieldDescriptor, Schema, SchemaBuilder};
