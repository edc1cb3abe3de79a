//! Core trait and error types of the validation engine
//!
//! This module contains the two pieces everything else builds on:
//!
//! - **Traits**: [`Evaluate`] — pass/fail decision for one rule kind
//! - **Errors**: [`ConfigError`] — fatal configuration-time failures
//!
//! # Architecture
//!
//! Rule evaluation and configuration checking are deliberately split:
//!
//! - [`Evaluate::check`] runs per value and is *total* — a rule that does
//!   not apply to the observed value reports no violation rather than
//!   raising an error.
//! - [`Evaluate::prepare`] runs once per rule declaration, before any
//!   instance is validated, and rejects malformed parameters loudly.
//!
//! Bad input data never produces an error, only violation messages; a bad
//! rule declaration never produces a violation message, only a
//! [`ConfigError`].

mod error;
mod traits;

pub use error::ConfigError;
pub use traits::Evaluate;
