use thiserror::Error;

use crate::api::{Declarations, InvalidConversion, UnknownTokens, Values};
use crate::model::Value;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reason a parse failed.
/// The `Display` form is the diagnostic written to stderr.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token sequence was empty; not even a program name.
    #[error("Error: no program name in the argument tokens.")]
    MissingProgram,

    /// Fewer tokens than required arguments.
    #[error("Error: not all required arguments included (expected {expected}, received {provided}).")]
    MissingRequired {
        /// The number of required arguments declared.
        expected: usize,
        /// The number of tokens following the program name.
        provided: usize,
    },

    /// An option flag was the final token.
    #[error("Error: option '{flag}' requires a value.")]
    MissingValue {
        /// The option's flag token.
        flag: String,
    },

    /// A required argument or option value failed to convert.
    #[error("Error: {0}")]
    Conversion(#[from] InvalidConversion),

    /// A token which matches nothing, under [`UnknownTokens::Reject`].
    #[error("Error: unrecognized argument '{token}'.")]
    Unrecognized {
        /// The offending token.
        token: String,
    },
}

/// A non-fatal parse diagnostic.
/// The `Display` form is the message written to stderr.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseWarning {
    /// A token which matches nothing, under [`UnknownTokens::Warn`].
    #[error("Warning: ignoring unrecognized argument '{token}'")]
    Ignored {
        /// The ignored token.
        token: String,
    },
}

pub(crate) struct Parser<'d> {
    declarations: &'d Declarations,
}

impl<'d> Parser<'d> {
    pub(crate) fn new(declarations: &'d Declarations) -> Self {
        Self { declarations }
    }

    /// Walk the `argv`-style tokens, writing into `values`.
    ///
    /// Errors carry the index of the offending token, when there is one.
    /// On error, `values` may be partially written.
    pub(crate) fn consume(
        &self,
        tokens: &[&str],
        values: &mut Values,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), (Option<usize>, ParseError)> {
        if tokens.is_empty() {
            return Err((None, ParseError::MissingProgram));
        }

        let required = self.declarations.required();

        if tokens.len() < 1 + required.len() {
            return Err((
                Some(tokens.len()),
                ParseError::MissingRequired {
                    expected: required.len(),
                    provided: tokens.len() - 1,
                },
            ));
        }

        for (index, argument) in required.iter().enumerate() {
            let position = index + 1;
            let value = argument
                .kind()
                .convert(tokens[position])
                .map_err(|error| (Some(position), ParseError::from(error)))?;
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Required '{}' at {position}: {value:?}.", argument.name());
            }
            values.set(argument.name(), value);
        }

        let mut position = 1 + required.len();

        while position < tokens.len() {
            let token = tokens[position];

            if let Some(option) = self.declarations.find_optional(token) {
                let value_token = tokens.get(position + 1).ok_or_else(|| {
                    (
                        Some(position),
                        ParseError::MissingValue {
                            flag: option.flag().to_string(),
                        },
                    )
                })?;
                let value = option
                    .kind()
                    .convert(value_token)
                    .map_err(|error| (Some(position + 1), ParseError::from(error)))?;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Optional '{}' at {position}: {value:?}.", option.name());
                }
                values.set(option.name(), value);
                position += 2;
            } else if let Some(switch) = self.declarations.find_boolean(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Boolean '{}' at {position}.", switch.name());
                }
                values.set(switch.name(), Value::Bool(true));
                position += 1;
            } else {
                match self.declarations.unknown_token_policy() {
                    UnknownTokens::Warn => {
                        user_interface.print_warning(ParseWarning::Ignored {
                            token: token.to_string(),
                        });
                    }
                    UnknownTokens::Reject => {
                        return Err((
                            Some(position),
                            ParseError::Unrecognized {
                                token: token.to_string(),
                            },
                        ));
                    }
                }
                position += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Descriptor;
    use crate::model::{Kind, Literal};
    use crate::parser::util::InMemoryInterface;
    use rand::seq::SliceRandom;
    use rand::thread_rng;
    use rstest::rstest;

    fn greeter() -> Declarations {
        Declarations::new([
            Descriptor::required(Kind::I32, "count", "count", "How many."),
            Descriptor::optional("name", Literal::Str("anon"), "--name", "name", "Who."),
            Descriptor::optional("level", Literal::U8(1), "--level", "level", "How loud."),
            Descriptor::boolean("verbose", "--verbose", "Talk more."),
        ])
    }

    #[test]
    fn parser_empty() {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let result = parser.consume(&[], &mut values, &interface);

        // Verify
        assert_eq!(result, Err((None, ParseError::MissingProgram)));
        assert_eq!(values, declarations.defaults());
    }

    #[rstest]
    #[case(vec!["prog", "5"], 5, "anon", 1, false)]
    #[case(vec!["prog", "5", "--name", "Ada"], 5, "Ada", 1, false)]
    #[case(vec!["prog", "-3", "--verbose"], -3, "anon", 1, true)]
    #[case(vec!["prog", "0x10", "--level", "7", "--name", "Bo"], 16, "Bo", 7, false)]
    #[case(vec!["prog", "5", "--verbose", "--name", "Ada", "--level", "010"], 5, "Ada", 8, true)]
    #[case(vec!["prog", "5", "--name", "A", "--name", "B"], 5, "B", 1, false)]
    fn parser(
        #[case] tokens: Vec<&str>,
        #[case] count: i32,
        #[case] name: &str,
        #[case] level: u8,
        #[case] verbose: bool,
    ) {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        parser
            .consume(tokens.as_slice(), &mut values, &interface)
            .unwrap();

        // Verify
        assert_eq!(values.get::<i32>("count"), Some(count));
        assert_eq!(values.get::<String>("name"), Some(name.to_string()));
        assert_eq!(values.get::<u8>("level"), Some(level));
        assert_eq!(values.flag("verbose"), verbose);
        assert_eq!(interface.consume().1, None);
    }

    #[rstest]
    #[case(vec!["prog"], 1, 0)]
    #[case(vec!["prog", "1"], 2, 1)]
    fn parser_missing_required(
        #[case] tokens: Vec<&str>,
        #[case] expected: usize,
        #[case] provided: usize,
    ) {
        // Setup
        let declarations = Declarations::new(
            ["x", "y", "z"][..expected]
                .iter()
                .copied()
                .map(|name| Descriptor::required(Kind::I32, name, name, "")),
        );
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let result = parser.consume(tokens.as_slice(), &mut values, &interface);

        // Verify
        assert_eq!(
            result,
            Err((
                Some(tokens.len()),
                ParseError::MissingRequired { expected, provided }
            ))
        );
    }

    #[rstest]
    #[case(vec!["prog", "abc"], 1)]
    #[case(vec!["prog", ""], 1)]
    #[case(vec!["prog", "2147483648"], 1)]
    #[case(vec!["prog", "5", "--level", "256"], 3)]
    #[case(vec!["prog", "5", "--level", "-1"], 3)]
    #[case(vec!["prog", "5", "--verbose", "--name", ""], 4)]
    fn parser_inconvertable(#[case] tokens: Vec<&str>, #[case] offset: usize) {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let result = parser.consume(tokens.as_slice(), &mut values, &interface);

        // Verify
        assert_matches!(result, Err((Some(o), ParseError::Conversion(_))) if o == offset);
    }

    #[test]
    fn parser_conversion_diagnostic() {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let (_, error) = parser
            .consume(&["prog", "abc"], &mut values, &interface)
            .unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Error: 'abc' is not a valid i32.");
    }

    #[rstest]
    #[case(vec!["prog", "5", "--name"], 2, "--name")]
    #[case(vec!["prog", "5", "--verbose", "--level"], 3, "--level")]
    fn parser_missing_value(
        #[case] tokens: Vec<&str>,
        #[case] offset: usize,
        #[case] flag: &str,
    ) {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let result = parser.consume(tokens.as_slice(), &mut values, &interface);

        // Verify
        assert_eq!(
            result,
            Err((
                Some(offset),
                ParseError::MissingValue {
                    flag: flag.to_string()
                }
            ))
        );
        assert_eq!(
            result.unwrap_err().1.to_string(),
            format!("Error: option '{flag}' requires a value.")
        );
    }

    #[test]
    fn parser_unknown_warn() {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        parser
            .consume(
                &["prog", "5", "--unknownflag", "--verbose"],
                &mut values,
                &interface,
            )
            .unwrap();

        // Verify
        assert_eq!(values.get::<i32>("count"), Some(5));
        assert!(values.flag("verbose"));
        let (message, warning, error, error_context) = interface.consume();
        assert_eq!(message, None);
        assert_eq!(
            warning,
            Some("Warning: ignoring unrecognized argument '--unknownflag'".to_string())
        );
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[test]
    fn parser_unknown_reject() {
        // Setup
        let declarations = greeter().unknown_tokens(UnknownTokens::Reject);
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let result = parser.consume(
            &["prog", "5", "--verbose", "stray"],
            &mut values,
            &interface,
        );

        // Verify
        assert_eq!(
            result,
            Err((
                Some(3),
                ParseError::Unrecognized {
                    token: "stray".to_string()
                }
            ))
        );
        assert_eq!(interface.consume().1, None);
    }

    #[test]
    fn parser_flag_as_value() {
        // Setup
        let declarations = greeter();
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        parser
            .consume(&["prog", "5", "--name", "--verbose"], &mut values, &interface)
            .unwrap();

        // Verify
        assert_eq!(values.get::<String>("name"), Some("--verbose".to_string()));
        assert!(!values.flag("verbose"));
    }

    #[test]
    fn parser_optional_before_boolean() {
        // Setup
        let declarations = Declarations::new([
            Descriptor::boolean("switch", "--x", ""),
            Descriptor::optional("option", Literal::I64(0), "--x", "x", ""),
        ]);
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        parser
            .consume(&["prog", "--x", "9"], &mut values, &interface)
            .unwrap();

        // Verify
        assert_eq!(values.get::<i64>("option"), Some(9));
        assert!(!values.flag("switch"));
    }

    #[test]
    fn parser_no_required() {
        // Setup
        let declarations = Declarations::new([Descriptor::boolean("verbose", "--verbose", "")]);
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        parser.consume(&["prog"], &mut values, &interface).unwrap();

        // Verify
        assert_eq!(values, declarations.defaults());
    }

    #[test]
    fn parser_order_independent() {
        // Setup
        let declarations = greeter();
        let mut pairs = vec![
            vec!["--name", "Ada"],
            vec!["--level", "9"],
            vec!["--verbose"],
        ];
        let mut expected = declarations.defaults();
        Parser::new(&declarations)
            .consume(
                &["prog", "5", "--name", "Ada", "--level", "9", "--verbose"],
                &mut expected,
                &InMemoryInterface::default(),
            )
            .unwrap();

        for _ in 0..10 {
            pairs.shuffle(&mut thread_rng());
            let mut tokens = vec!["prog", "5"];
            tokens.extend(pairs.iter().flatten());
            let mut values = declarations.defaults();

            // Execute
            Parser::new(&declarations)
                .consume(tokens.as_slice(), &mut values, &InMemoryInterface::default())
                .unwrap();

            // Verify
            assert_eq!(values, expected, "{tokens:?}");
        }
    }

    #[rstest]
    #[case(Kind::U8, "255", Value::U8(u8::MAX))]
    #[case(Kind::I8, "-128", Value::I8(i8::MIN))]
    #[case(Kind::I8, "127", Value::I8(i8::MAX))]
    #[case(Kind::U16, "65535", Value::U16(u16::MAX))]
    #[case(Kind::I64, "-9223372036854775808", Value::I64(i64::MIN))]
    #[case(Kind::U64, "18446744073709551615", Value::U64(u64::MAX))]
    fn parser_boundary(#[case] kind: Kind, #[case] token: &str, #[case] expected: Value) {
        // Setup
        let declarations = Declarations::new([Descriptor::required(kind, "x", "x", "")]);
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        parser
            .consume(&["prog", token], &mut values, &interface)
            .unwrap();

        // Verify
        assert_eq!(values.value("x"), Some(&expected));
    }

    #[rstest]
    #[case(Kind::U8, "256")]
    #[case(Kind::I8, "-129")]
    #[case(Kind::I8, "128")]
    #[case(Kind::U16, "65536")]
    #[case(Kind::I64, "9223372036854775808")]
    #[case(Kind::U64, "18446744073709551616")]
    fn parser_boundary_exceeded(#[case] kind: Kind, #[case] token: &str) {
        // Setup
        let declarations = Declarations::new([Descriptor::required(kind, "x", "x", "")]);
        let parser = Parser::new(&declarations);
        let mut values = declarations.defaults();
        let interface = InMemoryInterface::default();

        // Execute
        let result = parser.consume(&["prog", token], &mut values, &interface);

        // Verify
        assert_matches!(
            result,
            Err((Some(1), ParseError::Conversion(InvalidConversion::OutOfRange { .. })))
        );
    }
}
