use std::fmt;

/// The underlying value of a backed enum case.
///
/// Backed enums carry either a string or an integer. Integers are rendered
/// with their decimal representation when they become a middleware argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnumValue {
    /// A string-backed case.
    Str(String),
    /// An integer-backed case.
    Int(i64),
}

impl EnumValue {
    /// Returns the value as it appears in a middleware string.
    ///
    /// Returns `None` for an empty string-backed value.
    pub fn to_argument_string(&self) -> Option<String> {
        match self {
            EnumValue::Str(s) if s.is_empty() => None,
            EnumValue::Str(s) => Some(s.clone()),
            EnumValue::Int(i) => Some(i.to_string()),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Str(s) => f.write_str(s),
            EnumValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Str(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::Str(value)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Int(value)
    }
}

/// An enum whose cases can be passed as middleware arguments.
///
/// # Examples
///
/// ```
/// use controller_middleware::{Argument, BackedEnum, EnumValue};
///
/// enum Role {
///     Admin,
///     Editor,
/// }
///
/// impl BackedEnum for Role {
///     fn value(&self) -> EnumValue {
///         match self {
///             Role::Admin => "admin".into(),
///             Role::Editor => "editor".into(),
///         }
///     }
/// }
///
/// let arg = Argument::backed(&Role::Admin);
/// assert_eq!(arg, Argument::Enum(EnumValue::Str("admin".to_string())));
/// # let _ = Role::Editor;
/// ```
pub trait BackedEnum {
    /// Returns the backing value of this case.
    fn value(&self) -> EnumValue;
}

/// A value declared as a middleware argument.
///
/// Only [`Argument::Str`] and [`Argument::Enum`] can survive formatting.
/// The remaining scalar variants exist so a declaration can be written as it
/// would appear on the attribute; they are always dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A plain string.
    Str(String),
    /// A backed enum case.
    Enum(EnumValue),
    /// An ordered sequence of arguments.
    Group(Vec<Argument>),
    /// An integer literal.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A boolean literal.
    Bool(bool),
    /// No value.
    Null,
}

impl Argument {
    /// Converts a backed enum case into an argument.
    pub fn backed<E: BackedEnum + ?Sized>(case: &E) -> Self {
        Argument::Enum(case.value())
    }

    /// Builds a group from anything convertible into arguments.
    pub fn group<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Argument>,
    {
        Argument::Group(items.into_iter().map(Into::into).collect())
    }

    /// Returns true for [`Argument::Group`].
    pub fn is_group(&self) -> bool {
        matches!(self, Argument::Group(_))
    }

    /// Returns the string this argument contributes to a group, if any.
    ///
    /// Empty strings, empty enum values, groups and non-string scalars
    /// contribute nothing.
    pub fn as_formatted(&self) -> Option<String> {
        match self {
            Argument::Str(s) if !s.is_empty() => Some(s.clone()),
            Argument::Enum(value) => value.to_argument_string(),
            _ => None,
        }
    }

    /// Splits this value into the top-level argument list.
    ///
    /// A group is the list itself; any other value becomes a one-element list.
    pub(crate) fn as_list(&self) -> &[Argument] {
        match self {
            Argument::Group(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Reduces one top-level element to its `|`-joined group.
    ///
    /// Nested sequences are flattened one level only.
    /// Returns `None` when nothing in the group survives filtering.
    pub(crate) fn format_group(&self) -> Option<String> {
        let items: Vec<String> = self
            .as_list()
            .iter()
            .filter_map(|item| {
                let formatted = item.as_formatted();
                if formatted.is_none() {
                    tracing::trace!(argument = ?item, "dropping middleware argument");
                }
                formatted
            })
            .collect();

        if items.is_empty() {
            None
        } else {
            Some(items.join("|"))
        }
    }
}

impl Default for Argument {
    /// No arguments: an empty sequence.
    fn default() -> Self {
        Argument::Group(Vec::new())
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Str(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Str(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Argument::Str(value.clone())
    }
}

impl From<EnumValue> for Argument {
    fn from(value: EnumValue) -> Self {
        Argument::Enum(value)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Int(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Int(i64::from(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Argument::Null, Into::into)
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(items: Vec<T>) -> Self {
        Argument::group(items)
    }
}

impl<T: Into<Argument>, const N: usize> From<[T; N]> for Argument {
    fn from(items: [T; N]) -> Self {
        Argument::group(items)
    }
}
