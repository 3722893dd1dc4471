mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ParseError, ParseWarning};
pub(crate) use base::Parser;
pub(crate) use interface::*;
pub use middleware::ArgumentParser;
pub(crate) use printer::{ErrorContext, Printer};
