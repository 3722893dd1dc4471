use crate::model::DeriveParser;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            strict,
            parameters,
        } = value;
        let count = parameters.len();
        let descriptors: Vec<TokenStream2> =
            parameters.iter().map(|p| p.descriptor()).collect();
        let captures: Vec<TokenStream2> = parameters.iter().map(|p| p.capture()).collect();
        let policy = if strict {
            quote! { ::declargs::UnknownTokens::Reject }
        } else {
            quote! { ::declargs::UnknownTokens::Warn }
        };
        let from_values = if parameters.is_empty() {
            quote! {
                fn from_values(_values: ::declargs::Values) -> Self {
                    Self {}
                }
            }
        } else {
            quote! {
                fn from_values(mut values: ::declargs::Values) -> Self {
                    Self {
                        #( #captures, )*
                    }
                }
            }
        };

        quote! {
            impl ::declargs::prelude::Declared for #struct_name {
                fn declarations() -> ::declargs::Declarations {
                    let descriptors: [::declargs::Descriptor; #count] = [
                        #( #descriptors, )*
                    ];
                    ::declargs::Declarations::new(descriptors).unknown_tokens(#policy)
                }

                #from_values
            }
        }
    }
}
