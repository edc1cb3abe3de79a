//! Validation results
//!
//! A [`ValidationReport`] is the ordered sequence of violation messages
//! produced by one validation call. An empty report is the only "all clear"
//! signal; there is no separate status code.

use std::fmt;

/// Ordered violation messages from one validation call.
///
/// Message order equals declaration order: fields in the order the schema
/// declares them, rules in the order they are attached to each field.
/// Messages are never reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    /// Whether the validated object satisfied every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violation messages, in declaration order.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Consumes the report, yielding the messages.
    #[must_use]
    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report holds no violations. Same as [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn push(&mut self, message: String) {
        self.violations.push(message);
    }
}

impl From<Vec<String>> for ValidationReport {
    fn from(violations: Vec<String>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationReport {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            f.write_str("valid")
        } else {
            f.write_str(&self.violations.join("; "))
        }
    }
}
