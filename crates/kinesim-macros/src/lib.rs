use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{
    Attribute, Data, DeriveInput, Error, Field, Fields, GenericArgument, PathArguments, Result,
    Type, parse_macro_input,
};

/// Derive macro that generates a `Default` implementation for configuration
/// structs from inline `#[default(...)]` values.
///
/// String fields accept string literals and convert them with `.into()`.
/// Every other type uses the expression as-is and relies on inference.
///
/// # Example
/// ```
/// use kinesim_macros::ConfigDefaults;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(ConfigDefaults, Serialize, Deserialize)]
/// #[serde(default)]
/// pub struct EngineConfig {
///     #[default(0.02)]
///     pub step_size: f64,
///
///     #[default(3)]
///     pub chart_stride: usize,
///
///     #[default("table")]
///     pub format: String,
/// }
///
/// let config = EngineConfig::default();
/// assert_eq!(config.step_size, 0.02);
/// assert_eq!(config.chart_stride, 3);
/// assert_eq!(config.format, "table");
/// ```
///
/// # Errors
///
/// Compilation fails if the input is not a struct with named fields, if a
/// field lacks a `#[default(...)]` attribute, or if the attribute is empty.
///
/// ```compile_fail
/// use kinesim_macros::ConfigDefaults;
///
/// #[derive(ConfigDefaults)]
/// struct MissingDefault {
///     #[default(42)]
///     pub field1: i32,
///     pub field2: String,
/// }
/// ```
///
/// ```compile_fail
/// use kinesim_macros::ConfigDefaults;
///
/// #[derive(ConfigDefaults)]
/// struct EmptyDefault {
///     #[default()]
///     pub field1: i32,
/// }
/// ```
#[proc_macro_derive(ConfigDefaults, attributes(default))]
pub fn config_defaults(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_default_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive macro for structs whose `Option<T>` fields have a documented
/// fallback value applied when the field is absent.
///
/// For every field annotated with `#[fallback(expr)]` it generates:
/// - `pub const DEFAULT_<FIELD>: T = expr;`
/// - `pub fn <field>_or_default(&self) -> T`
///
/// `T` must be `Copy` and the expression must be usable in a `const`.
/// Fields without the attribute are left alone.
///
/// # Example
/// ```
/// use kinesim_macros::FieldFallbacks;
///
/// #[derive(FieldFallbacks)]
/// pub struct Oscillator {
///     #[fallback(0.5)]
///     pub amplitude: Option<f64>,
///     pub label: String,
/// }
///
/// let osc = Oscillator { amplitude: None, label: "spring".into() };
/// assert_eq!(osc.amplitude_or_default(), 0.5);
/// assert_eq!(Oscillator::DEFAULT_AMPLITUDE, 0.5);
/// ```
///
/// A fallback on a non-optional field is rejected:
///
/// ```compile_fail
/// use kinesim_macros::FieldFallbacks;
///
/// #[derive(FieldFallbacks)]
/// struct NotOptional {
///     #[fallback(2.0)]
///     pub radius: f64,
/// }
/// ```
#[proc_macro_derive(FieldFallbacks, attributes(fallback))]
pub fn field_fallbacks(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_fallback_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_default_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_defaults = named_fields(input, "ConfigDefaults")?
        .iter()
        .map(|field| {
            let field_name = field_ident(field)?;
            let value = attribute_tokens(field, "default")?.ok_or_else(|| {
                Error::new_spanned(
                    field,
                    format!(
                        "Field '{field_name}' must have a #[default(...)] attribute specifying its default value"
                    ),
                )
            })?;

            if is_string_type(&field.ty) {
                Ok(quote! { #field_name: ::std::convert::Into::into(#value) })
            } else {
                Ok(quote! { #field_name: #value })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics Default for #name #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#field_defaults),*
                }
            }
        }
    })
}

fn generate_fallback_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut items = Vec::new();
    for field in named_fields(input, "FieldFallbacks")? {
        let Some(value) = attribute_tokens(field, "fallback")? else {
            continue;
        };

        let field_name = field_ident(field)?;
        let inner = option_inner_type(&field.ty).ok_or_else(|| {
            Error::new_spanned(
                &field.ty,
                format!("Field '{field_name}' has #[fallback] but is not an Option<T>"),
            )
        })?;

        let const_name = format_ident!("DEFAULT_{}", field_name.to_string().to_uppercase());
        let accessor = format_ident!("{}_or_default", field_name);
        let const_doc = format!("Value used when `{field_name}` is absent.");
        let accessor_doc = format!("`{field_name}`, or [`Self::{const_name}`] when absent.");

        items.push(quote! {
            #[doc = #const_doc]
            pub const #const_name: #inner = #value;

            #[doc = #accessor_doc]
            #[inline]
            pub fn #accessor(&self) -> #inner {
                self.#field_name.unwrap_or(Self::#const_name)
            }
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #name #ty_generics #where_clause {
            #(#items)*
        }
    })
}

fn named_fields<'a>(
    input: &'a DeriveInput,
    derive_name: &str,
) -> Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            Fields::Unnamed(_) => Err(Error::new_spanned(
                input,
                format!("{derive_name} only supports structs with named fields"),
            )),
            Fields::Unit => Err(Error::new_spanned(
                input,
                format!("{derive_name} cannot be derived for unit structs"),
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(Error::new_spanned(
            input,
            format!("{derive_name} can only be derived for structs"),
        )),
    }
}

fn field_ident(field: &Field) -> Result<&syn::Ident> {
    field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "expected a named field"))
}

/// Tokens inside `#[<name>(...)]`, or `None` when the attribute is absent.
fn attribute_tokens(field: &Field, name: &str) -> Result<Option<proc_macro2::TokenStream>> {
    let Some(attr) = find_attribute(&field.attrs, name) else {
        return Ok(None);
    };

    let field_name = field
        .ident
        .as_ref()
        .map(|i| i.to_string())
        .unwrap_or_else(|| "unnamed field".to_string());

    let tokens: proc_macro2::TokenStream = attr.parse_args().map_err(|e| {
        Error::new_spanned(
            attr,
            format!("Failed to parse #[{name}] attribute for field '{field_name}': {e}"),
        )
    })?;

    if tokens.is_empty() {
        return Err(Error::new_spanned(
            attr,
            format!("Field '{field_name}' has an empty #[{name}()] attribute. Please provide a value."),
        ));
    }

    Ok(Some(tokens))
}

fn find_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "String"),
        _ => false,
    }
}

fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}
