use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParameter, DeriveParser};

impl TryFrom<DeriveParser> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveParser) -> Result<Self, Self::Error> {
        let DeriveParser {
            struct_name,
            parameters,
        } = value;
        let options = parameters
            .into_iter()
            .map(TokenStream2::from)
            .collect::<Vec<_>>();

        Ok(quote! {
            impl #struct_name {
                pub fn getopt_parser(&mut self) -> ::longopt::OptionParser<'_> {
                    ::longopt::OptionParser::new()
                    #( #options )*
                }

                pub fn getopt_parse() -> (#struct_name, Vec<String>) {
                    let mut target = #struct_name::default();
                    let remaining = target.getopt_parser().build().parse();
                    (target, remaining)
                }
            }
        })
    }
}

impl From<DeriveParameter> for TokenStream2 {
    fn from(value: DeriveParameter) -> Self {
        let DeriveParameter {
            field_name,
            descriptor,
        } = value;

        quote! {
            .add(#descriptor, &mut self.#field_name)
        }
    }
}
