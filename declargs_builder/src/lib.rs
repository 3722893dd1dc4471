//! Builder module for `declargs`.
//! See [documentation root](https://docs.rs/declargs/latest/declargs/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{ArgumentParser, ParseError, ParseWarning};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
