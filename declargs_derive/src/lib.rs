extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `declargs::prelude::Declared` for a struct with named fields.
///
/// Each field becomes a required argument, an optional argument, or a boolean switch (see `declargs::derive`).
#[proc_macro_derive(Declargs, attributes(declargs))]
pub fn declargs(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(derive_parser) => TokenStream2::from(derive_parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
