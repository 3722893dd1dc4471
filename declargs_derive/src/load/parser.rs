use crate::model::{DeriveParameter, DeriveParser, IntermediateAttributes};
use std::collections::HashMap;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs);
        let struct_name = value.ident.clone();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                struct_name.span(),
                "Invalid - Declargs cannot derive for generic structs.",
            ));
        }

        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Invalid - only structs with named fields may derive Declargs.",
                ));
            }
        };

        let mut flags: HashMap<&str, &syn::Ident> = HashMap::default();

        for parameter in &parameters {
            if let Some(flag) = parameter.parameter_type.flag() {
                if let Some(previous) = flags.insert(flag, &parameter.field_name) {
                    return Err(syn::Error::new(
                        struct_name.span(),
                        format!(
                            "Invalid - duplicate flag '{flag}' on fields `{previous}` and `{}`.",
                            parameter.field_name
                        ),
                    ));
                }
            }
        }

        Ok(DeriveParser {
            strict: attributes.singletons.contains("strict"),
            struct_name,
            parameters,
        })
    }
}
