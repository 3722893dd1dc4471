use std::env;

use crate::api::{Declarations, Values};
use crate::parser::{
    ConsoleInterface, ErrorContext, ParseError, Parser, Printer, UserInterface,
};

/// The command line parser for a [`Declarations`].
///
/// Diagnostics are written to stderr, and the help message to stdout.
/// The parser never exits the process; exit codes are left to the caller.
///
/// ### Example
/// ```
/// # use declargs_builder as declargs;
/// use declargs::{ArgumentParser, Declarations, Descriptor, Kind, Literal};
///
/// let declarations = Declarations::new([
///     Descriptor::required(Kind::I32, "count", "count", "How many."),
///     Descriptor::optional("name", Literal::Str("anon"), "--name", "name", "Who."),
///     Descriptor::boolean("verbose", "--verbose", "Talk more."),
/// ]);
/// let mut values = declarations.defaults();
/// let parser = ArgumentParser::new(&declarations);
///
/// parser
///     .parse_tokens(&["prog", "5", "--name", "Ada"], &mut values)
///     .unwrap();
/// assert_eq!(values.get::<i32>("count"), Some(5));
/// assert_eq!(values.get::<String>("name"), Some("Ada".to_string()));
/// assert!(!values.flag("verbose"));
/// ```
pub struct ArgumentParser<'d> {
    declarations: &'d Declarations,
    printer: Printer<'d>,
    user_interface: Box<dyn UserInterface>,
}

impl<'d> ArgumentParser<'d> {
    /// Create a console parser for `declarations`.
    ///
    /// The printed help message wraps its descriptions to the terminal width, if one is detected.
    pub fn new(declarations: &'d Declarations) -> Self {
        Self::with_interface(
            declarations,
            Printer::terminal(declarations),
            Box::new(ConsoleInterface::default()),
        )
    }

    pub(crate) fn with_interface(
        declarations: &'d Declarations,
        printer: Printer<'d>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            declarations,
            printer,
            user_interface,
        }
    }

    /// Run the parser against the `argv`-style input tokens (the program name is token 0).
    ///
    /// Required arguments are converted in declared order, after which options and switches are matched in any order.
    /// On success, `values` holds every converted argument, option (or its default), and switch.
    ///
    /// If at any point the parser encounters an error (ex: missing required argument, un-convertable token, etc), it will write the diagnostic to stderr and return it.
    /// In this case `values` may be partially written, and should not be relied upon.
    pub fn parse_tokens(&self, tokens: &[&str], values: &mut Values) -> Result<(), ParseError> {
        match Parser::new(self.declarations).consume(tokens, values, &*self.user_interface) {
            Ok(()) => Ok(()),
            Err((offset, parse_error)) => {
                self.user_interface.print_error(&parse_error);

                if let Some(position) = offset {
                    self.user_interface
                        .print_error_context(ErrorContext::new(position, tokens));
                }

                Err(parse_error)
            }
        }
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// See [`ArgumentParser::parse_tokens`].
    pub fn parse(&self, values: &mut Values) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
            values,
        )
    }

    /// Render the help message for `program`.
    ///
    /// The result is always the fixed layout, regardless of the terminal.
    pub fn help(&self, program: &str) -> String {
        Printer::new(self.declarations, None)
            .render(program)
            .join("\n")
    }

    /// Print the help message for `program` to stdout.
    ///
    /// Descriptions are wrapped to the terminal width, if one is detected.
    pub fn print_help(&self, program: &str) {
        self.printer.print_help(program, &*self.user_interface);
    }
}
