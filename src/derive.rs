//! Derive Api for `declargs` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(Declargs)]`.
//! This implements [`Declared`](../prelude/trait.Declared.html) for `S`, which provides `S::parse() -> Result<S, ParseError>` along with the help message functions.
//! `declargs` infers the intended Cli from the fields of `S`.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_greeter_d.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ demo_greeter_d
//! Error: not all required arguments included (expected 1, received 0).
//! demo_greeter_d
//!               ^
//! USAGE:
//!     greeter <count> [--name <name>] [--verbose]
//!
//! ARGUMENTS:
//!     <count>          How many greetings.
//!
//! OPTIONS:
//!     --name <name>    Who to greet. (default: anon)
//!     --verbose        Talk more.
//! ```
//!
//! ### Parser Configuration
//! * `#[declargs(strict)]` on the struct rejects unrecognized tokens, rather than warning and ignoring them (see [`UnknownTokens`](../enum.UnknownTokens.html)).
//!
//! ### Parameter Configuration
//! The implicit Cli inference uses the following rules:
//! ```console
//! Field                                   | Descriptor
//! ----------------------------------------------------------------------
//! bool                                    | Descriptor::boolean(..)
//! T with `flag`, `default`, or `precision`| Descriptor::optional(..)
//! T                                       | Descriptor::required(..)
//! ```
//!
//! The field type `T` must implement [`Scalar`](../trait.Scalar.html).
//! The following explicit field attributes may be combined as necessary.
//! * `#[declargs(required)]`, `#[declargs(optional)]`, or `#[declargs(boolean)]` to explicitly choose the kind of parameter.
//! Only one of these may be used on the same field.
//! An explicit `optional` without a `default` takes `Default::default()` (ex: `0`, or `""` for a `String`).
//! * `#[declargs(flag = "..")]` to set the flag token of an optional or boolean (defaults to `--field-name`, with underscores as hyphens).
//! * `#[declargs(default = ..)]` to set the default of an optional.
//! The value must be the literal type of the field (ex: `"anon"` for a `String`, `0.5` for an `f64`).
//! * `#[declargs(precision = N)]` to render an optional's default with `N` significant digits in the help message.
//! * `#[declargs(label = "..")]` to set the `<label>` of a required or optional (defaults to the field name).
//! * `#[declargs(description = "..")]` to set the help description.
//!
//! Misconfigurations (ex: a `bool` field with a `default`, or two fields sharing a flag) are reported as compile errors.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Declargs)]
//! #[declargs(strict)]
//! struct Parameters {
//!     // Required: <input>
//!     input: String,
//!     // Required: <ITEMS>
//!     #[declargs(label = "ITEMS")]
//!     items: u32,
//!     // Optional: [--ratio <ratio>], defaulting to 0.5
//!     #[declargs(default = 0.5, precision = 2)]
//!     ratio: f64,
//!     // Optional: [-d <depth>], defaulting to 0
//!     #[declargs(flag = "-d")]
//!     depth: usize,
//!     // Boolean: [--dry-run]
//!     dry_run: bool,
//! }
//! ```
pub use declargs_derive::*;
