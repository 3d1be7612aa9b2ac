use syn::spanned::Spanned;

use crate::load::attribute::{field_attributes, ATTRIBUTE_NAME};
use crate::load::incompatible_error;
use crate::model::{DeriveParameter, DeriveParser, FieldAttribute};

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Getopt may not be derived for a struct with generic parameters.",
            ));
        }

        let struct_name = value.ident;

        let fields = match value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => {
                return Ok(DeriveParser {
                    struct_name,
                    parameters: Vec::default(),
                });
            }
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Getopt may only be derived for a struct with named fields.",
                ));
            }
        };

        let mut parameters = Vec::default();

        for field in fields.named {
            if let Some(parameter) = DeriveParameter::load(field)? {
                parameters.push(parameter);
            }
        }

        Ok(DeriveParser {
            struct_name,
            parameters,
        })
    }
}

impl DeriveParameter {
    fn load(field: syn::Field) -> Result<Option<Self>, syn::Error> {
        let field_name = field
            .ident
            .ok_or_else(|| syn::Error::new(field.ty.span(), "Getopt requires named fields."))?;
        let mut descriptor: Option<String> = None;
        let mut skip = false;

        for attribute in field
            .attrs
            .iter()
            .filter(|attribute| attribute.path().is_ident(ATTRIBUTE_NAME))
        {
            for field_attribute in field_attributes(attribute)? {
                match field_attribute {
                    FieldAttribute::Skip => skip = true,
                    FieldAttribute::Descriptor(value) => {
                        if let Some(previous) = descriptor.replace(value.clone()) {
                            return Err(incompatible_error(&field_name, previous, value));
                        }
                    }
                }
            }
        }

        match (skip, descriptor) {
            (true, Some(value)) => Err(incompatible_error(&field_name, "skip", value)),
            (true, None) => Ok(None),
            (false, descriptor) => {
                let descriptor =
                    descriptor.unwrap_or_else(|| field_name.to_string().replace('_', "-"));
                Ok(Some(DeriveParameter {
                    field_name,
                    descriptor,
                }))
            }
        }
    }
}
