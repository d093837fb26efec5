//! Attribute macros for llmwrap

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use std::collections::HashMap;
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Attribute, Expr, ExprLit, FnArg, GenericArgument, ItemFn, Lit, Meta, Pat,
    PathArguments, Type,
};

/// Generates a tool-calling schema from a function's signature
///
/// The function is kept as written and a companion `<name>_tool_schema()`
/// returning an `llmwrap_core::ToolSchema` is emitted next to it:
///
/// - the first paragraph of the doc comment becomes the tool description
/// - doc lines of the form `name (type): description`, `name: description`
///   or `` `name` - description `` describe the matching parameter
/// - each parameter's JSON type comes from its Rust type via `JsonType`
/// - `Option<T>` parameters are optional; `#[tool(default = ...)]` makes a
///   parameter optional and records the default
///
/// The generated code names `::llmwrap_core`, so the calling crate needs it as
/// a dependency.
///
/// # Example
///
/// ```rust
/// use llmwrap_derive::tool_schema;
///
/// /// Get the current weather information for a specific location.
/// ///
/// /// Args:
/// ///     location (String): The location for which to get the weather.
/// ///     unit (String): The unit of temperature ('C' or 'F').
/// #[tool_schema]
/// fn get_weather(location: String, #[tool(default = "C")] unit: Option<String>) -> String {
///     format!("22 degrees in {location} ({})", unit.unwrap_or_default())
/// }
///
/// let schema = get_weather_tool_schema();
/// assert_eq!(schema.name(), "get_weather");
/// assert_eq!(schema.required(), ["location".to_string()]);
/// ```
#[proc_macro_attribute]
pub fn tool_schema(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(Span::call_site(), "tool_schema takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut function = parse_macro_input!(input as ItemFn);
    match expand(&mut function) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct Param {
    name: String,
    ty: Type,
    default: Option<Expr>,
}

fn expand(function: &mut ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    if let Some(generic) = function.sig.generics.type_params().next() {
        return Err(syn::Error::new_spanned(
            generic,
            "tool_schema cannot map generic parameter types",
        ));
    }

    let mut params = Vec::new();
    for input in &mut function.sig.inputs {
        let FnArg::Typed(arg) = input else {
            continue;
        };
        let Pat::Ident(pat) = arg.pat.as_ref() else {
            return Err(syn::Error::new_spanned(
                &arg.pat,
                "tool_schema needs a plain name for every parameter",
            ));
        };

        let name = pat.ident.unraw().to_string();
        let default = take_default(&mut arg.attrs)?;
        let mut ty = (*arg.ty).clone();
        erase_lifetimes(&mut ty);
        params.push(Param { name, ty, default });
    }

    let names: Vec<&str> = params.iter().map(|param| param.name.as_str()).collect();
    let docs = DocComment::parse(&function.attrs, &names);

    let description = docs
        .summary
        .as_ref()
        .map(|summary| quote! { .description(#summary) });
    let calls = params.iter().map(|param| {
        let name = &param.name;
        let description = docs.params.get(name).map_or("", String::as_str);
        let (ty, optional) = option_inner(&param.ty).map_or((&param.ty, false), |inner| (inner, true));

        match (&param.default, optional) {
            (Some(default), _) => {
                quote! { .optional_param::<#ty>(#name, #description, #default) }
            }
            (None, true) => quote! { .optional::<#ty>(#name, #description) },
            (None, false) => quote! { .param::<#ty>(#name, #description) },
        }
    });

    let fn_name = function.sig.ident.unraw().to_string();
    let schema_fn = format_ident!("{}_tool_schema", fn_name);
    let schema_doc = format!("Tool-calling schema for `{fn_name}`, built from its signature");
    let vis = &function.vis;

    Ok(quote! {
        #function

        #[doc = #schema_doc]
        #[must_use]
        #vis fn #schema_fn() -> ::llmwrap_core::ToolSchema {
            ::llmwrap_core::ToolSchema::function(#fn_name)
                #description
                #(#calls)*
        }
    })
}

// Reads and strips `#[tool(default = ...)]` from a parameter
fn take_default(attrs: &mut Vec<Attribute>) -> syn::Result<Option<Expr>> {
    let mut default = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("tool")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                default = Some(meta.value()?.parse::<Expr>()?);
                Ok(())
            } else {
                Err(meta.error("expected `default = ...`"))
            }
        })?;
    }
    attrs.retain(|attr| !attr.path().is_ident("tool"));
    Ok(default)
}

fn erase_lifetimes(ty: &mut Type) {
    if let Type::Reference(reference) = ty {
        reference.lifetime = None;
        erase_lifetimes(&mut reference.elem);
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

#[derive(Default)]
struct DocComment {
    summary: Option<String>,
    params: HashMap<String, String>,
}

impl DocComment {
    /// Summary is the first paragraph; it ends at a blank line, a heading
    /// (`# Arguments`, `Args:`) or the first parameter line.
    fn parse(attrs: &[Attribute], names: &[&str]) -> Self {
        let mut doc = Self::default();
        let mut summary = Vec::new();
        let mut in_summary = true;

        for line in doc_lines(attrs) {
            let line = line.trim();
            if let Some((name, description)) = param_line(line, names) {
                doc.params.insert(name.to_owned(), description.to_owned());
                in_summary = false;
                continue;
            }
            if !in_summary {
                continue;
            }
            if line.is_empty() {
                in_summary = summary.is_empty();
            } else if line.starts_with('#') || line.ends_with(':') {
                in_summary = false;
            } else {
                summary.push(line.to_owned());
            }
        }

        if !summary.is_empty() {
            doc.summary = Some(summary.join(" "));
        }
        doc
    }
}

fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(pair) => match &pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value()),
                _ => None,
            },
            _ => None,
        })
        .flat_map(|text| text.lines().map(str::to_owned).collect::<Vec<_>>())
        .collect()
}

fn param_line<'a>(line: &'a str, names: &[&str]) -> Option<(&'a str, &'a str)> {
    let line = line.trim_start_matches(&['*', '-'][..]).trim_start();
    let line = line.strip_prefix('`').unwrap_or(line);

    let end = line
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    let (name, rest) = line.split_at(end);
    if !names.contains(&name) {
        return None;
    }

    let mut rest = rest.strip_prefix('`').unwrap_or(rest).trim_start();
    if rest.starts_with('(') {
        rest = rest[rest.find(')')? + 1..].trim_start();
    }
    let description = rest.strip_prefix(':').or_else(|| rest.strip_prefix('-'))?;
    Some((name, description.trim()))
}
