use crate::model::{DeriveParameter, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

impl DeriveParameter {
    /// The storage name of this parameter in the `Values` container.
    pub(crate) fn name(&self) -> String {
        self.field_name.unraw().to_string()
    }

    /// The `Descriptor` expression declaring this parameter.
    pub(crate) fn descriptor(&self) -> TokenStream2 {
        let name = self.name();
        let label = &self.label;
        let field_type = &self.field_type.tokens;
        let description = match &self.description {
            Some(description) => description.tokens.clone(),
            None => quote! { "" },
        };

        match &self.parameter_type {
            ParameterType::Required => quote! {
                ::declargs::Descriptor::required(
                    <#field_type as ::declargs::Scalar>::KIND,
                    #name,
                    #label,
                    #description
                )
            },
            ParameterType::Optional {
                flag,
                default,
                precision,
            } => {
                let default = match default {
                    Some(default) => default.tokens.clone(),
                    None => quote! { ::core::default::Default::default() },
                };
                let optional = quote! {
                    ::declargs::Descriptor::optional(
                        #name,
                        <#field_type as ::declargs::Scalar>::literal(#default),
                        #flag,
                        #label,
                        #description
                    )
                };

                match precision {
                    Some(precision) => {
                        let precision = &precision.tokens;
                        quote! { #optional.precision(#precision) }
                    }
                    None => optional,
                }
            }
            ParameterType::Boolean { flag } => quote! {
                ::declargs::Descriptor::boolean(#name, #flag, #description)
            },
        }
    }

    /// The field initializer, taking this parameter's value out of the `values` container.
    pub(crate) fn capture(&self) -> TokenStream2 {
        let field_name = &self.field_name;
        let field_type = &self.field_type.tokens;
        let name = self.name();

        quote! {
            #field_name: values
                .take::<#field_type>(#name)
                .expect("internal error - declared value must be present")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::Span;
    use rstest::rstest;

    #[test]
    fn descriptor_required() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("count"),
            field_type: DeriveValue {
                tokens: quote! { i32 },
            },
            label: "COUNT".to_string(),
            description: Some(DeriveValue {
                tokens: quote! { "How many." },
            }),
            parameter_type: ParameterType::Required,
        };

        // Execute
        let token_stream = parameter.descriptor();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                ::declargs::Descriptor::required(
                    <i32 as ::declargs::Scalar>::KIND,
                    "count",
                    "COUNT",
                    "How many."
                )
            }
            .to_string()
        );
    }

    #[rstest]
    #[case(None, None, quote! {
        ::declargs::Descriptor::optional(
            "ratio",
            <f64 as ::declargs::Scalar>::literal(::core::default::Default::default()),
            "--ratio",
            "ratio",
            ""
        )
    })]
    #[case(Some(quote! { 0.5 }), None, quote! {
        ::declargs::Descriptor::optional(
            "ratio",
            <f64 as ::declargs::Scalar>::literal(0.5),
            "--ratio",
            "ratio",
            ""
        )
    })]
    #[case(Some(quote! { 0.5 }), Some(quote! { 2 }), quote! {
        ::declargs::Descriptor::optional(
            "ratio",
            <f64 as ::declargs::Scalar>::literal(0.5),
            "--ratio",
            "ratio",
            ""
        ).precision(2)
    })]
    fn descriptor_optional(
        #[case] default: Option<TokenStream2>,
        #[case] precision: Option<TokenStream2>,
        #[case] expected: TokenStream2,
    ) {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("ratio"),
            field_type: DeriveValue {
                tokens: quote! { f64 },
            },
            label: "ratio".to_string(),
            description: None,
            parameter_type: ParameterType::Optional {
                flag: "--ratio".to_string(),
                default: default.map(|tokens| DeriveValue { tokens }),
                precision: precision.map(|tokens| DeriveValue { tokens }),
            },
        };

        // Execute
        let token_stream = parameter.descriptor();

        // Verify
        assert_eq!(token_stream.to_string(), expected.to_string());
    }

    #[test]
    fn descriptor_boolean() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("verbose"),
            field_type: DeriveValue {
                tokens: quote! { bool },
            },
            label: "verbose".to_string(),
            description: Some(DeriveValue {
                tokens: quote! { "Talk more." },
            }),
            parameter_type: ParameterType::Boolean {
                flag: "-v".to_string(),
            },
        };

        // Execute
        let token_stream = parameter.descriptor();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                ::declargs::Descriptor::boolean("verbose", "-v", "Talk more.")
            }
            .to_string()
        );
    }

    #[test]
    fn capture() {
        // Setup
        let parameter = DeriveParameter {
            field_name: syn::Ident::new_raw("type", Span::call_site()),
            field_type: DeriveValue {
                tokens: quote! { String },
            },
            label: "type".to_string(),
            description: None,
            parameter_type: ParameterType::Required,
        };

        // Execute
        let token_stream = parameter.capture();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                r#type: values
                    .take::<String>("type")
                    .expect("internal error - declared value must be present")
            }
            .to_string()
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
