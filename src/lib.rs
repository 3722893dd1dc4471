//! `declargs` is a declaration-driven command line parser for Rust.
//!
//! A program declares its Cli once, as a single table of *required* arguments, *optional* arguments, and *boolean* switches.
//! From that one declaration `declargs` produces:
//! * a typed result container, pre-populated with defaults,
//! * a parser which walks the Cli tokens and fills the container (or fails with a diagnostic),
//! * a help message consistent with the same declaration.
//!
//! `declargs` deliberately stays small: there are no sub-commands, no repeated or multi-valued flags, no combined short flags, and no validation across parameters.
//! The library never exits the process; exit codes are left to the program.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_greeter_d.rs")]
//! ```
//! or via the builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_greeter.rs")]
//! ```
//!
//! The builder version generates the following Cli program.
//! Required arguments always come first, so `--help` must follow `<count>`:
//! ```console
//! $ greeter 0 --help
//! USAGE:
//!     greeter <count> [--name <name>] [--verbose] [--help]
//!
//! ARGUMENTS:
//!     <count>          How many greetings.
//!
//! OPTIONS:
//!     --name <name>    Who to greet. (default: anon)
//!     --verbose        Talk more.
//!     --help           Show this help message.
//!
//! $ greeter 2 --name Ada
//! Hello, Ada!
//! Hello, Ada!
//!
//! $ greeter --help
//! Error: '--help' is not a valid i32.
//! greeter --help
//!         ^
//! USAGE:
//! <truncated>
//! ```
//!
//! # Declarations
//! A [`Declarations`] is built from [`Descriptor`]s, of which there are three kinds:
//! * [`Descriptor::required`]: a positional argument.
//! Required arguments must all appear, and are consumed in their declared order immediately after the program name.
//! * [`Descriptor::optional`]: a flagged argument, taking the token following its flag (ex: `--name Ada`).
//! When absent, its declared default stands.
//! Repeating the flag is allowed; the last occurrence wins.
//! * [`Descriptor::boolean`]: a switch (ex: `--verbose`), `true` when its flag appears and `false` otherwise.
//!
//! Optionals and booleans may appear in any order after the required arguments.
//! The flag token is matched exactly; there is no `--flag=value` syntax and no abbreviation.
//!
//! The descriptor constructors are `const fn`s, so the full declaration may also be written as a `const` table:
//! ```no_run
#![doc = include_str!("../demos/demo_const_table.rs")]
//! ```
//!
//! ### Types
//! Each argument carries a [`Kind`], which determines both the type of its value and the converter applied to its token.
//! The supported types are the signed & unsigned integers (`i8`..`i64`, `isize`, `u8`..`u64`, `usize`), `f32`, `f64`, `char`, and `String`.
//! Every type implements [`Scalar`]; converters never panic, instead reporting an [`InvalidConversion`].
//!
//! Integer tokens may be written in decimal, hex (`0x..`), or octal (leading `0`).
//! Out of range values are rejected rather than truncated.
//!
//! ### Unknown tokens
//! By default, a token matching no flag is reported with a warning and ignored.
//! Use [`Declarations::unknown_tokens`] with [`UnknownTokens::Reject`] to treat these as errors instead.
//!
//! ### Results
//! The result container is a [`Values`], created by [`Declarations::defaults`] and filled in by [`ArgumentParser::parse_tokens`] (or [`ArgumentParser::parse`]).
//! Read typed values back out via [`Values::get`], [`Values::take`], and [`Values::flag`].
//!
//! ### Help
//! [`ArgumentParser::help`] renders the help message, [`ArgumentParser::print_help`] writes it to stdout.
//! When a terminal width is detected, long descriptions are wrapped to fit.
//!
//! # Features
//! * `tracing_debug`: emit debug logs from the parser via [`tracing`](https://docs.rs/tracing/latest/tracing/).
pub mod derive;
pub use declargs_builder::*;
