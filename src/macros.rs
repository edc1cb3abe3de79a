//! The `schema!` macro: declare field rules next to the type.
//!
//! Expands a field → rules table into a [`Describe`](crate::schema::Describe)
//! implementation. Written order is preserved exactly — the table is the
//! canonical declaration order the engine reports violations in.

/// Implements [`Describe`](crate::schema::Describe) for a struct from a
/// field → rules table.
///
/// Each entry names a struct field and lists its rules in evaluation order.
/// The field must be [`Serialize`](serde::Serialize); its accessor
/// serializes the field's current value. A field may declare an empty rule
/// list to be described (and read) without any checks attached.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Profile {
///     name: Option<String>,
///     email: Option<String>,
/// }
///
/// fieldcheck::schema! {
///     Profile {
///         name => [required("Name is required")],
///         email => [
///             required("Email is required"),
///             email("Please provide a valid email address"),
///         ],
///     }
/// }
/// ```
#[macro_export]
macro_rules! schema {
    (
        $ty:ty {
            $( $field:ident => [ $( $rule:expr ),* $(,)? ] ),+ $(,)?
        }
    ) => {
        impl $crate::schema::Describe for $ty {
            fn schema() -> $crate::schema::Schema<Self> {
                $crate::schema::Schema::builder()
                    $(
                        .field(
                            $crate::schema::FieldDescriptor::serialized(
                                stringify!($field),
                                |object: &Self| &object.$field,
                            )
                            $( .rule($rule) )*
                        )
                    )+
                    .build()
            }
        }
    };
}
