use crate::constant::{GAP, INDENT};
use crate::parser::base::{ParseError, ParseWarning};
use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Self {
        LeftWidth(width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MiddleWidth(usize);

#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

/// Renders the two help columns: the left (`<label>`, `flag <label>`, or `flag`) padded to a shared width, and the description.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    left: LeftWidth,
    // None: descriptions are never wrapped.
    middle: Option<MiddleWidth>,
}

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

impl ColumnRenderer {
    /// Produce a renderer which never wraps.
    pub(crate) fn new(left: LeftWidth) -> Self {
        Self { left, middle: None }
    }

    /// Produce a renderer which wraps the description column to fit within the total width.
    pub(crate) fn guided(left: LeftWidth, total_width: TotalWidth) -> Self {
        let non_middle = INDENT.len() + left.0 + GAP.len();
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;

        let middle = if non_middle + MINIMUM_MIDDLE_WIDTH <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} fit within the target total {target_total_width}.  Selecting middle: {}.", target_total_width - non_middle);
            }

            target_total_width - non_middle
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_middle} do not fit within the target total {target_total_width}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
            }

            MINIMUM_MIDDLE_WIDTH
        };

        Self {
            left,
            middle: Some(MiddleWidth(middle)),
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str) -> Vec<String> {
        let left_column_width = self.left.0;
        assert!(left.chars().count() <= left_column_width);

        let middle_parts = match self.middle {
            Some(MiddleWidth(width)) if middle.chars().count() > width => chunk(middle, width),
            _ => vec![middle.to_string()],
        };

        middle_parts
            .iter()
            .enumerate()
            .map(|(i, part)| {
                let column = if i == 0 { left } else { "" };
                format!("{INDENT}{column:left_column_width$}{GAP}{part}")
            })
            .collect()
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_warning(&self, warning: ParseWarning);
    fn print_error(&self, error: &ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_warning(&self, warning: ParseWarning) {
        eprintln!("{warning}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ErrorContext, ParseError, ParseWarning, UserInterface};
    use std::cell::RefCell;
    use std::sync::mpsc;

    /// (message, warning, error, error context)
    pub(crate) type Recorded = (
        Option<String>,
        Option<String>,
        Option<String>,
        Option<ErrorContext>,
    );

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
        warnings: RefCell<Vec<String>>,
        error: RefCell<Option<String>>,
        error_context: RefCell<Option<ErrorContext>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.messages.borrow_mut().push(message);
        }

        fn print_warning(&self, warning: ParseWarning) {
            self.warnings.borrow_mut().push(warning.to_string());
        }

        fn print_error(&self, error: &ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once.
            self.error_context.borrow_mut().replace(error_context);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> Recorded {
            let InMemoryInterface {
                messages,
                warnings,
                error,
                error_context,
            } = self;

            (
                join(messages.into_inner()),
                join(warnings.into_inner()),
                error.into_inner(),
                error_context.into_inner(),
            )
        }
    }

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (warning_tx, warning_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let (error_context_tx, error_context_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            warning_tx,
            error_tx,
            error_context_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            warning_rx,
            error_rx,
            error_context_rx,
        };
        (sender, receiver)
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        warning_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
        error_context_tx: mpsc::Sender<Option<ErrorContext>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            self.message_tx.send(None).unwrap();
            self.warning_tx.send(None).unwrap();
            self.error_tx.send(None).unwrap();
            self.error_context_tx.send(None).unwrap();
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            self.message_tx.send(Some(message)).unwrap();
        }

        fn print_warning(&self, warning: ParseWarning) {
            self.warning_tx.send(Some(warning.to_string())).unwrap();
        }

        fn print_error(&self, error: &ParseError) {
            self.error_tx.send(Some(error.to_string())).unwrap();
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once, with the receiver only taking the first.
            self.error_context_tx.send(Some(error_context)).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        warning_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
        error_context_rx: mpsc::Receiver<Option<ErrorContext>>,
    }

    impl ReceiverInterface {
        /// Must only be called once the sender has been dropped.
        pub(crate) fn consume(self) -> Recorded {
            let ReceiverInterface {
                message_rx,
                warning_rx,
                error_rx,
                error_context_rx,
            } = self;

            (
                drain(message_rx),
                drain(warning_rx),
                drain(error_rx),
                // Assumes print_error_context() is only ever called once
                // (we take the first if multiple were sent on the channel).
                error_context_rx.recv().unwrap(),
            )
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, warning, error, error_context) = self.consume();
            assert_eq!(warning, None);
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        while let Some(message) = receiver.recv().unwrap() {
            values.push(message);
        }

        join(values)
    }

    fn join(values: Vec<String>) -> Option<String> {
        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}
