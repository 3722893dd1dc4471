use crate::api::{Boolean, Descriptor, Optional, Required, Values};
use crate::model::Value;

/// What the parser does with a token that is neither a declared flag nor a required argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTokens {
    /// Emit a warning naming the token, and carry on parsing.
    #[default]
    Warn,
    /// Fail the parse with [`ParseError::Unrecognized`](./enum.ParseError.html#variant.Unrecognized).
    Reject,
}

/// The declaration set: every argument, option, and switch of the program.
///
/// This is the single source of truth for the result container ([`Declarations::defaults`]), the parser ([`ArgumentParser`](./struct.ArgumentParser.html)), and the help message.
/// The descriptors are partitioned into their three groups, each preserving its declared order.
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::{Declarations, Descriptor, Kind, Literal, UnknownTokens};
///
/// const DESCRIPTORS: [Descriptor; 3] = [
///     Descriptor::required(Kind::I32, "count", "count", "How many."),
///     Descriptor::optional("name", Literal::Str("anon"), "--name", "name", "Who."),
///     Descriptor::boolean("verbose", "--verbose", "Talk more."),
/// ];
///
/// let declarations = Declarations::new(DESCRIPTORS).unknown_tokens(UnknownTokens::Reject);
/// assert_eq!(declarations.required().len(), 1);
/// assert_eq!(declarations.optional().len(), 1);
/// assert_eq!(declarations.boolean().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    required: Vec<Required>,
    optional: Vec<Optional>,
    boolean: Vec<Boolean>,
    unknown_tokens: UnknownTokens,
}

impl Declarations {
    /// Create the declaration set from a sequence of descriptors.
    ///
    /// Flag tokens and storage names are expected to be unique; this is not checked.
    pub fn new(descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        let mut declarations = Self::default();

        for descriptor in descriptors {
            match descriptor {
                Descriptor::Required(required) => declarations.required.push(required),
                Descriptor::Optional(optional) => declarations.optional.push(optional),
                Descriptor::Boolean(boolean) => declarations.boolean.push(boolean),
            }
        }

        declarations
    }

    /// Set the unknown token policy.
    /// If repeated, only the final policy will apply.
    pub fn unknown_tokens(mut self, policy: UnknownTokens) -> Self {
        self.unknown_tokens = policy;
        self
    }

    /// The unknown token policy.
    pub fn unknown_token_policy(&self) -> UnknownTokens {
        self.unknown_tokens
    }

    /// The required arguments, in positional order.
    pub fn required(&self) -> &[Required] {
        &self.required
    }

    /// The optional arguments, in declared order.
    pub fn optional(&self) -> &[Optional] {
        &self.optional
    }

    /// The boolean switches, in declared order.
    pub fn boolean(&self) -> &[Boolean] {
        &self.boolean
    }

    /// Build the result container, populated with defaults.
    ///
    /// Required arguments hold the zero value of their type (a placeholder, always overwritten by a successful parse).
    /// Optional arguments hold their declared default, and boolean switches hold `false`.
    pub fn defaults(&self) -> Values {
        let mut values = Values::default();

        for required in &self.required {
            values.set(required.name(), required.kind().zero());
        }

        for optional in &self.optional {
            values.set(optional.name(), Value::from(optional.default()));
        }

        for boolean in &self.boolean {
            values.set(boolean.name(), Value::Bool(false));
        }

        values
    }

    pub(crate) fn find_optional(&self, token: &str) -> Option<&Optional> {
        self.optional.iter().find(|optional| optional.flag() == token)
    }

    pub(crate) fn find_boolean(&self, token: &str) -> Option<&Boolean> {
        self.boolean.iter().find(|boolean| boolean.flag() == token)
    }
}
