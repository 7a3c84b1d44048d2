use std::fmt;

use arcstr::ArcStr;

/// A type reference inside a schema
///
/// Named references address a type by its name only. The named type itself
/// lives in the [`SchemaType`] and may take part in reference cycles, while
/// the wrapping here is always of finite depth.
///
/// [`SchemaType`]: crate::SchemaType
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    /// A nullable named type, e.g. `String`
    Named(ArcStr),
    /// A nullable list type, e.g. `[String]`
    ///
    /// The list itself is what's nullable, the containing type might be non-null.
    List(Box<Type>),
    /// A non-null wrapper, e.g. `String!` or `[String]!`
    NonNull(Box<Type>),
}

impl Type {
    /// Builds a nullable named type reference.
    pub fn named(name: impl Into<ArcStr>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps this type into a nullable list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Wraps this type into a non-null wrapper.
    #[must_use]
    pub fn non_null(self) -> Self {
        Self::NonNull(Box::new(self))
    }

    /// Get the name of a named type.
    ///
    /// Only applies to bare named types; wrappers will return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) => Some(n),
            Self::List(_) | Self::NonNull(_) => None,
        }
    }

    /// Get the innermost name by unpacking lists and non-null wrappers
    ///
    /// All type references contain exactly one named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(n) => n,
            Self::List(t) | Self::NonNull(t) => t.innermost_name(),
        }
    }

    /// Determines if a type only can represent non-null values.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Determines if a type is a list, regardless of its nullability.
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(t) => t.is_list(),
            Self::Named(_) => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNull(t) => write!(f, "{t}!"),
        }
    }
}

/// A constant input value, as used for default values of arguments and
/// input fields.
///
/// Values are opaque to sorting: they are carried over verbatim, including
/// the field order of objects.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum InputValue {
    Null,
    Int(i32),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<InputValue>),
    Object(Vec<(String, InputValue)>),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{InputValue, Type};

    #[test]
    fn type_display_follows_sdl_notation() {
        let t = Type::named("Droid").non_null().list().non_null();

        assert_eq!(t.to_string(), "[Droid!]!");
        assert_eq!(Type::named("Int").list().to_string(), "[Int]");
    }

    #[test]
    fn innermost_name_unwraps_all_modifiers() {
        let t = Type::named("Episode").list().non_null().list();

        assert_eq!(t.innermost_name(), "Episode");
        assert_eq!(t.name(), None);
        assert!(t.is_list());
        assert!(!t.is_non_null());
        assert!(Type::named("Episode").list().non_null().is_list());
    }

    #[test]
    fn input_value_display() {
        let v = InputValue::Object(vec![
            ("z".into(), InputValue::List(vec![InputValue::Int(1), InputValue::Null])),
            ("a".into(), InputValue::String("hi".into())),
        ]);

        assert_eq!(v.to_string(), r#"{z: [1, null], a: "hi"}"#);
    }
}
