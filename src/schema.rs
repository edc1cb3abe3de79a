//! Field metadata: descriptors, schemas, and the `Describe` trait
//!
//! A [`Schema<T>`] is the ordered validation metadata of one type: for each
//! field, its name, its declared rules, and an accessor capable of reading
//! the field's current value from an instance. Field order and rule order
//! are exactly the order of declaration — the engine relies on this to keep
//! violation messages deterministic.
//!
//! Values are read through serde: the accessor serializes the field into a
//! dynamic [`Value`], so `Option::None` becomes `Value::Null` (the "absent"
//! category) and strings stay strings. A field whose serialization fails is
//! the "unreadable" case the engine recovers from with a generic message.
//!
//! Most types get their schema from the [`schema!`](macro@crate::schema) macro,
//! which preserves written order by construction. The builder API below is
//! the escape hatch for hand-rolled or dynamically assembled schemas.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::rules::RuleSpec;

/// How a field's current value is read from an instance.
///
/// Serialization failure is not fatal: the engine converts it into a
/// generic per-field violation message and moves on.
pub type Accessor<T> = Box<dyn Fn(&T) -> Result<Value, serde_json::Error> + Send + Sync>;

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field's validation metadata: name, ordered rules, and accessor.
pub struct FieldDescriptor<T> {
    name: Cow<'static, str>,
    rules: Vec<RuleSpec>,
    accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    /// Creates a descriptor with no rules from a raw accessor.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        accessor: impl Fn(&T) -> Result<Value, serde_json::Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            accessor: Box::new(accessor),
        }
    }

    /// Creates a descriptor whose accessor serializes a borrowed field.
    ///
    /// This is what the [`schema!`](macro@crate::schema) macro expands to:
    /// `FieldDescriptor::serialized("name", |form: &SignupForm| &form.name)`.
    pub fn serialized<U, F>(name: impl Into<Cow<'static, str>>, get: F) -> Self
    where
        U: Serialize + ?Sized,
        F: Fn(&T) -> &U + Send + Sync + 'static,
    {
        Self::new(name, move |object| serde_json::to_value(get(object)))
    }

    /// Appends a rule. Rules evaluate in the order they were attached.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, spec: RuleSpec) -> Self {
        self.rules.push(spec);
        self
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's declared rules, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Reads the field's current value from `object`.
    pub fn read(&self, object: &T) -> Result<Value, serde_json::Error> {
        (self.accessor)(object)
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("rules", &self.rules)
            .field("accessor", &"<function>")
            .finish()
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// The ordered validation metadata of one type.
///
/// Deterministic: the same type always yields the same field order and the
/// same rule order within each field.
#[derive(Debug)]
pub struct Schema<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> Schema<T> {
    /// Starts an empty schema builder.
    #[must_use]
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder { fields: Vec::new() }
    }

    /// The field descriptors, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Consumes the schema, yielding its descriptors in declaration order.
    #[must_use]
    pub fn into_fields(self) -> Vec<FieldDescriptor<T>> {
        self.fields
    }

    /// Number of described fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema describes no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Accumulates field descriptors in declaration order.
#[derive(Debug)]
pub struct SchemaBuilder<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> SchemaBuilder<T> {
    /// Appends a field descriptor. Fields validate in the order appended.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, descriptor: FieldDescriptor<T>) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema<T> {
        Schema {
            fields: self.fields,
        }
    }
}

impl<T> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

// ============================================================================
// DESCRIBE TRAIT
// ============================================================================

/// Attaches validation metadata to a type.
///
/// This is the boundary the engine consumes: a type declares its fields and
/// their rules, the engine never looks inside the type any other way.
/// Implementations must be deterministic — same field order, same rule
/// order, every call — and free of side effects.
///
/// Usually implemented via the [`schema!`](macro@crate::schema) macro rather than
/// by hand.
pub trait Describe: Sized {
    /// Produces this type's validation schema.
    ///
    /// Built fresh per call; the engine caches the bound form per type, so
    /// implementations need not memoize.
    fn schema() -> Schema<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{min_length, required};
    use serde_json::json;

    struct Login {
        user: Option<String>,
        code: u32,
    }

    fn login_schema() -> Schema<Login> {
        Schema::builder()
            .field(
                FieldDescriptor::serialized("user", |l: &Login| &l.user)
                    .rule(required("User is required"))
                    .rule(min_length(3, "User is too short")),
            )
            .field(FieldDescriptor::serialized("code", |l: &Login| &l.code))
            .build()
    }

    #[test]
    fn fields_and_rules_keep_declaration_order() {
        let schema = login_schema();
        let names: Vec<&str> = schema.fields().iter().map(FieldDescriptor::name).collect();
        assert_eq!(names, ["user", "code"]);

        let kinds: Vec<&str> = schema.fields()[0]
            .rules()
            .iter()
            .map(|r| r.kind().as_str())
            .collect();
        assert_eq!(kinds, ["required", "minLength"]);
        assert!(schema.fields()[1].rules().is_empty());
    }

    #[test]
    fn serialized_accessor_reads_current_value() {
        let schema = login_schema();
        let login = Login {
            user: Some("ada".to_owned()),
            code: 7,
        };
        assert_eq!(schema.fields()[0].read(&login).ok(), Some(json!("ada")));
        assert_eq!(schema.fields()[1].read(&login).ok(), Some(json!(7)));

        let anonymous = Login { user: None, code: 0 };
        assert_eq!(schema.fields()[0].read(&anonymous).ok(), Some(Value::Null));
    }
}
