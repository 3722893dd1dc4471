use crate::model::Value;

/// Behaviour to take a typed `T` back out of a [`Value`].
pub trait FromValue: Sized {
    /// Extract `T`, or `None` if the value holds a different type.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! from_value {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $t {
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_value!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => Str,
    bool => Bool,
);

/// The result container: one typed value per declared argument, option, and switch.
///
/// Created via [`Declarations::defaults`](./struct.Declarations.html#method.defaults), filled in by [`ArgumentParser::parse_tokens`](./struct.ArgumentParser.html#method.parse_tokens).
/// Entries are kept in declaration order (required, then optional, then boolean).
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::{Declarations, Descriptor, Kind, Literal};
///
/// let declarations = Declarations::new([
///     Descriptor::required(Kind::I32, "count", "count", "How many."),
///     Descriptor::optional("name", Literal::Str("anon"), "--name", "name", "Who."),
/// ]);
/// let values = declarations.defaults();
///
/// assert_eq!(values.get::<i32>("count"), Some(0));
/// assert_eq!(values.get::<String>("name"), Some("anon".to_string()));
/// assert_eq!(values.get::<u8>("name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: Vec<(&'static str, Value)>,
}

impl Values {
    /// Store the value for `name`, replacing any previous value.
    pub(crate) fn set(&mut self, name: &'static str, value: Value) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get the raw value for `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    /// Get a copy of the typed value for `name`.
    /// Returns `None` if `name` is not declared, or if `T` does not match its declared type.
    pub fn get<T: FromValue>(&self, name: &str) -> Option<T> {
        self.value(name).cloned().and_then(T::from_value)
    }

    /// Move the typed value for `name` out of the container.
    /// Returns `None` (leaving the container untouched) under the same conditions as [`Values::get`].
    pub fn take<T: FromValue>(&mut self, name: &str) -> Option<T> {
        let index = self.entries.iter().position(|(n, _)| *n == name)?;

        if T::from_value(self.entries[index].1.clone()).is_none() {
            return None;
        }

        let (_, value) = self.entries.remove(index);
        T::from_value(value)
    }

    /// Whether the boolean switch `name` is set.
    /// Returns `false` for anything which is not a set switch.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.value(name), Some(Value::Bool(true)))
    }

    /// Iterate over `(name, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
