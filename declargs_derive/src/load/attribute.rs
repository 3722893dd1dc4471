use crate::model::{DeriveValue, IntermediateAttributes};
use quote::{quote, ToTokens};
use std::collections::{HashMap, HashSet};

impl From<&syn::Attribute> for IntermediateAttributes {
    fn from(value: &syn::Attribute) -> Self {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let attributes_parse = value.parse_args_with(attributes_parser);
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in
            attributes_parse.expect("syn::Attribute must parse as comma separated syn::Expr")
        {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(path) => {
                    if let Some(ident) = path.path.get_ident() {
                        singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    let tts = expression.to_token_stream();
                    let expression_string = quote! {
                        #tts
                    };
                    panic!("Unparseable attribute: {expression_string}");
                }
            };
        }

        Self { singletons, pairs }
    }
}

impl IntermediateAttributes {
    /// Load the `#[declargs(..)]` attribute, if any, from the list of attributes.
    pub(crate) fn load(attributes: &[syn::Attribute]) -> Self {
        attributes
            .iter()
            .filter(|attribute| attribute.path().is_ident("declargs"))
            .last()
            .map(IntermediateAttributes::from)
            .unwrap_or_default()
    }

    /// The first value of the attribute pair `key = ..`.
    pub(crate) fn pair(&self, key: &str) -> Option<&DeriveValue> {
        self.pairs.get(key).map(|values| {
            values
                .first()
                .expect("attribute pair must contain non-empty values")
        })
    }
}
