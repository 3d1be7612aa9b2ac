extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveParser;

/// Generate the `longopt` configuration for a struct with named fields.
/// The struct may not have generic parameters.
///
/// Every field becomes an option, using the field name (with `_` replaced by `-`) as the descriptor.
/// The option's type is inferred from the field's type.
///
/// Field attributes:
/// * `#[getopt("DESCRIPTOR")]`: use `DESCRIPTOR` in place of the field name (ex: `"verbose!"`, `"level:i"`, `"path=s@"`).
/// * `#[getopt(skip)]`: do not configure an option for the field.
///
/// Generates:
/// * `fn getopt_parser(&mut self) -> OptionParser<'_>`, with each field added.
/// * `fn getopt_parse() -> (Self, Vec<String>)`, which parses the Cli over `Self::default()` and returns the unconsumed tokens.
#[proc_macro_derive(Getopt, attributes(getopt))]
pub fn getopt(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveParser::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
