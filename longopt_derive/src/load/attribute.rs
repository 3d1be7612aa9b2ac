use quote::ToTokens;

use crate::model::FieldAttribute;

pub(super) const ATTRIBUTE_NAME: &str = "getopt";

/// Read the comma separated contents of a `#[getopt(..)]` attribute.
pub(super) fn field_attributes(
    attribute: &syn::Attribute,
) -> Result<Vec<FieldAttribute>, syn::Error> {
    let attributes_parser =
        syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
    let expressions = attribute.parse_args_with(attributes_parser)?;
    let mut field_attributes = Vec::default();

    for expression in expressions {
        match expression {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(descriptor),
                ..
            }) => {
                field_attributes.push(FieldAttribute::Descriptor(descriptor.value()));
            }
            syn::Expr::Path(ref path) if path.path.is_ident("skip") => {
                field_attributes.push(FieldAttribute::Skip);
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &expression,
                    format!("Unparseable attribute: {}", expression.to_token_stream()),
                ));
            }
        };
    }

    Ok(field_attributes)
}
