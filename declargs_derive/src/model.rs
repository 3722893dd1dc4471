use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The raw contents of a `#[declargs(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParameterType {
    Required,
    Optional {
        flag: String,
        default: Option<DeriveValue>,
        precision: Option<DeriveValue>,
    },
    Boolean {
        flag: String,
    },
}

impl ParameterType {
    pub fn flag(&self) -> Option<&str> {
        match self {
            ParameterType::Required => None,
            ParameterType::Optional { flag, .. } | ParameterType::Boolean { flag } => Some(flag),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub field_type: DeriveValue,
    pub label: String,
    pub description: Option<DeriveValue>,
    pub parameter_type: ParameterType,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub strict: bool,
    pub parameters: Vec<DeriveParameter>,
}
