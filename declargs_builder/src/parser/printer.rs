use terminal_size::{terminal_size, Width};

use crate::api::Declarations;
use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, LeftWidth, TotalWidth};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct Printer<'d> {
    declarations: &'d Declarations,
    terminal_width: Option<usize>,
}

impl<'d> Printer<'d> {
    pub(crate) fn terminal(declarations: &'d Declarations) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(declarations, terminal_width)
    }

    pub(crate) fn new(declarations: &'d Declarations, terminal_width: Option<usize>) -> Self {
        Self {
            declarations,
            terminal_width,
        }
    }

    pub(crate) fn render(&self, program: &str) -> Vec<String> {
        let required = self.declarations.required();
        let optional = self.declarations.optional();
        let boolean = self.declarations.boolean();
        let mut summary = vec![program.to_string()];

        if !required.is_empty() {
            if required.len() <= INLINE_LIMIT {
                summary.extend(required.iter().map(|argument| format!("<{}>", argument.label())));
            } else {
                summary.push(ARGUMENTS_PLACEHOLDER.to_string());
            }
        }

        let flag_count = optional.len() + boolean.len();

        if flag_count > INLINE_LIMIT {
            summary.push(OPTIONS_PLACEHOLDER.to_string());
        } else {
            summary.extend(
                optional
                    .iter()
                    .map(|option| format!("[{} <{}>]", option.flag(), option.label())),
            );
            summary.extend(boolean.iter().map(|switch| format!("[{}]", switch.flag())));
        }

        let arguments: Vec<(String, String)> = required
            .iter()
            .map(|argument| {
                (
                    format!("<{}>", argument.label()),
                    argument.description().to_string(),
                )
            })
            .collect();
        let options: Vec<(String, String)> = optional
            .iter()
            .map(|option| {
                (
                    format!("{} <{}>", option.flag(), option.label()),
                    format!(
                        "{} (default: {})",
                        option.description(),
                        option.default().render(option.format())
                    ),
                )
            })
            .chain(
                boolean
                    .iter()
                    .map(|switch| (switch.flag().to_string(), switch.description().to_string())),
            )
            .collect();

        let left_column_width = arguments
            .iter()
            .chain(options.iter())
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(0);
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Help left column width: {left_column_width}, terminal width: {:?}.", self.terminal_width);
        }
        let column_renderer = match self.terminal_width {
            Some(tw) => ColumnRenderer::guided(LeftWidth::new(left_column_width), TotalWidth(tw)),
            None => ColumnRenderer::new(LeftWidth::new(left_column_width)),
        };

        let mut lines = vec![
            USAGE_HEADER.to_string(),
            format!("{INDENT}{}", summary.join(" ")),
            "".to_string(),
        ];

        if !arguments.is_empty() {
            lines.push(ARGUMENTS_HEADER.to_string());

            for (left, description) in &arguments {
                lines.extend(column_renderer.render(left, description));
            }

            lines.push("".to_string());
        }

        if !options.is_empty() {
            lines.push(OPTIONS_HEADER.to_string());

            for (left, description) in &options {
                lines.extend(column_renderer.render(left, description));
            }
        }

        lines
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.render(program).join("\n"));
    }
}

/// The tokens echoed back, with a caret under the offending token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    position: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// `position` is the index of the offending token; `tokens.len()` points just past the final token.
    pub(crate) fn new(position: usize, tokens: &[&str]) -> Self {
        Self {
            position,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let column: usize = self
            .tokens
            .iter()
            .take(self.position)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            width = std::cmp::min(column, projection.chars().count())
        )
    }
}
