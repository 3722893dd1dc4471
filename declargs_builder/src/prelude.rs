//! Traits which, typically, may be imported without concern: `use declargs::prelude::*`.
use crate::api::{Declarations, Values};
use crate::parser::{ArgumentParser, ParseError};

/// Behaviour for a typed result container, backed by a [`Declarations`].
///
/// Typically implemented via `#[derive(Declargs)]`, but may be written by hand.
/// Only `declarations` and `from_values` are required; the remaining methods are provided.
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::prelude::*;
/// use declargs::{Declarations, Descriptor, Kind, Literal, Values};
///
/// #[derive(Debug, PartialEq)]
/// struct Params {
///     count: i32,
///     name: String,
/// }
///
/// impl Declared for Params {
///     fn declarations() -> Declarations {
///         Declarations::new([
///             Descriptor::required(Kind::I32, "count", "count", "How many."),
///             Descriptor::optional("name", Literal::Str("anon"), "--name", "name", "Who."),
///         ])
///     }
///
///     fn from_values(mut values: Values) -> Self {
///         Self {
///             count: values.take("count").expect("count declared as i32"),
///             name: values.take("name").expect("name declared as String"),
///         }
///     }
/// }
///
/// let params = Params::parse_tokens(&["prog", "5"]).unwrap();
/// assert_eq!(params, Params { count: 5, name: "anon".to_string() });
/// ```
pub trait Declared: Sized {
    /// The declaration set of this container.
    fn declarations() -> Declarations;

    /// Build this container out of a full set of values (as produced by [`Declarations::defaults`]).
    fn from_values(values: Values) -> Self;

    /// This container, populated with defaults.
    fn defaults() -> Self {
        Self::from_values(Self::declarations().defaults())
    }

    /// Parse the `argv`-style tokens (program name first) into this container.
    ///
    /// On failure the diagnostic has already been written to stderr.
    fn parse_tokens(tokens: &[&str]) -> Result<Self, ParseError> {
        let declarations = Self::declarations();
        let mut values = declarations.defaults();
        ArgumentParser::new(&declarations).parse_tokens(tokens, &mut values)?;
        Ok(Self::from_values(values))
    }

    /// Parse the Cli [`std::env::args`] into this container.
    ///
    /// On failure the diagnostic has already been written to stderr.
    fn parse() -> Result<Self, ParseError> {
        let declarations = Self::declarations();
        let mut values = declarations.defaults();
        ArgumentParser::new(&declarations).parse(&mut values)?;
        Ok(Self::from_values(values))
    }

    /// Render the help message for `program`, in the fixed layout (never wrapped).
    fn help(program: &str) -> String {
        ArgumentParser::new(&Self::declarations()).help(program)
    }

    /// Print the help message for `program` to stdout.
    fn print_help(program: &str) {
        ArgumentParser::new(&Self::declarations()).print_help(program);
    }
}
