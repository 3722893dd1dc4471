use crate::load::incompatible_error;
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, ParameterType};
use quote::ToTokens;
use syn::ext::IdentExt;

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs);
        let field_name = value
            .ident
            .clone()
            .expect("internal error - named field must have an ident");
        let explicit_required = attributes.singletons.contains("required");
        let explicit_optional = attributes.singletons.contains("optional");
        let explicit_boolean = attributes.singletons.contains("boolean");
        let flag = attributes
            .pair("flag")
            .map(|derive_value| string_literal(&field_name, "flag", derive_value))
            .transpose()?;
        let label = attributes
            .pair("label")
            .map(|derive_value| string_literal(&field_name, "label", derive_value))
            .transpose()?;
        let default = attributes.pair("default").cloned();
        let precision = attributes.pair("precision").cloned();
        let description = attributes.pair("description").cloned();

        for (left, right) in [
            (
                (explicit_required, "#[declargs(required)]"),
                (explicit_optional, "#[declargs(optional)]"),
            ),
            (
                (explicit_required, "#[declargs(required)]"),
                (explicit_boolean, "#[declargs(boolean)]"),
            ),
            (
                (explicit_optional, "#[declargs(optional)]"),
                (explicit_boolean, "#[declargs(boolean)]"),
            ),
        ] {
            if left.0 && right.0 {
                return Err(incompatible_error(&field_name, left.1, right.1));
            }
        }

        let is_bool = match &value.ty {
            syn::Type::Path(path) => path.qself.is_none() && path.path.is_ident("bool"),
            _ => false,
        };

        let parameter_type = if explicit_boolean || (is_bool && !explicit_required && !explicit_optional)
        {
            if !is_bool {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - field `{field_name}` must be a `bool` to be `#[declargs(boolean)]`."),
                ));
            }

            disallow(
                &field_name,
                "#[declargs(boolean)]",
                &[
                    (label.is_some(), "#[declargs(label = ..)]"),
                    (default.is_some(), "#[declargs(default = ..)]"),
                    (precision.is_some(), "#[declargs(precision = ..)]"),
                ],
            )?;

            ParameterType::Boolean {
                flag: flag.unwrap_or_else(|| default_flag(&field_name)),
            }
        } else if is_bool {
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - field `{field_name}` is a `bool`, which may only be `#[declargs(boolean)]`."),
            ));
        } else if explicit_optional
            || (!explicit_required && (flag.is_some() || default.is_some() || precision.is_some()))
        {
            ParameterType::Optional {
                flag: flag.unwrap_or_else(|| default_flag(&field_name)),
                default,
                precision,
            }
        } else {
            disallow(
                &field_name,
                "#[declargs(required)]",
                &[
                    (flag.is_some(), "#[declargs(flag = ..)]"),
                    (default.is_some(), "#[declargs(default = ..)]"),
                    (precision.is_some(), "#[declargs(precision = ..)]"),
                ],
            )?;

            ParameterType::Required
        };

        Ok(DeriveParameter {
            label: label.unwrap_or_else(|| field_name.unraw().to_string()),
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            description,
            parameter_type,
        })
    }
}

fn disallow(
    field_name: &syn::Ident,
    parameter: &str,
    attributes: &[(bool, &str)],
) -> Result<(), syn::Error> {
    match attributes.iter().find(|(present, _)| *present) {
        Some((_, attribute)) => Err(incompatible_error(field_name, parameter, *attribute)),
        None => Ok(()),
    }
}

fn string_literal(
    field_name: &syn::Ident,
    key: &str,
    derive_value: &DeriveValue,
) -> Result<String, syn::Error> {
    syn::parse2::<syn::LitStr>(derive_value.tokens.clone())
        .map(|literal| literal.value())
        .map_err(|_| {
            syn::Error::new(
                field_name.span(),
                format!("Invalid - field `{field_name}` expects a string literal for `{key} = ..`."),
            )
        })
}

// Ex: `dry_run` becomes `--dry-run`.
fn default_flag(field_name: &syn::Ident) -> String {
    format!("--{}", field_name.unraw().to_string().replace('_', "-"))
}
