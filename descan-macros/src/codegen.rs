//! Turning tokenized format strings into a runtime `vscan` invocation.
//!
//! The macro does not generate per-field parsing code; it rebuilds a
//! sanitized format string (named captures lowered to anonymous fields) and
//! an ordered argument array, then defers to the runtime engine. Everything
//! the runtime would reject about the format string has already been
//! rejected here, with spans.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Expr, Ident, LitStr, spanned::Spanned};

use crate::tokenization::{FormatToken, Placeholder, tokenize_format_string};

/// The pieces of one `scan!`/`scanln!` expansion.
pub struct ScanExpansion {
    /// Format string as the runtime engine sees it: named fields lowered to
    /// `{}`, literal braces re-escaped.
    pub runtime_format: String,
    /// `&mut`-reference expressions in field order.
    pub arg_exprs: Vec<TokenStream>,
}

/// Validate the format string against the explicit arguments and build the
/// expansion. All diagnostics carry spans into the macro invocation.
pub fn build_expansion(
    format_lit: &LitStr,
    explicit_args: &[&Expr],
) -> Result<ScanExpansion, syn::Error> {
    let format_str = format_lit.value();
    if format_str.is_empty() {
        return Err(syn::Error::new(
            format_lit.span(),
            "Format string cannot be empty. Provide at least one field or literal text.",
        ));
    }

    let tokens = tokenize_format_string(&format_str, format_lit)?;

    let has_indexed = tokens.iter().any(|token| {
        matches!(
            token,
            FormatToken::Field(field) if matches!(field.placeholder, Placeholder::Indexed(_))
        )
    });
    let has_auto = tokens.iter().any(|token| {
        matches!(
            token,
            FormatToken::Field(field)
                if matches!(field.placeholder, Placeholder::Anonymous | Placeholder::Named(_))
        )
    });
    if has_indexed && has_auto {
        return Err(syn::Error::new(
            format_lit.span(),
            "Cannot mix explicit indices like '{0}' with '{}' or named fields in one format string.",
        ));
    }

    if has_indexed {
        build_indexed(format_lit, &tokens, explicit_args)
    } else {
        build_auto(format_lit, &tokens, explicit_args)
    }
}

/// Explicit-index mode: fields keep their `{N}` form; the argument array is
/// exactly the explicit argument list.
fn build_indexed(
    format_lit: &LitStr,
    tokens: &[FormatToken],
    explicit_args: &[&Expr],
) -> Result<ScanExpansion, syn::Error> {
    let mut runtime_format = String::new();
    let mut used = vec![false; explicit_args.len()];

    for token in tokens {
        match token {
            FormatToken::Text(text) => push_escaped(text, &mut runtime_format),
            FormatToken::Field(field) => {
                let Placeholder::Indexed(index) = field.placeholder else {
                    unreachable!("mode split on has_indexed");
                };
                let Some(slot) = used.get_mut(index) else {
                    return Err(syn::Error::new(
                        format_lit.span(),
                        format!(
                            "Argument index {index} out of range: {} argument(s) provided.",
                            explicit_args.len()
                        ),
                    ));
                };
                *slot = true;
                runtime_format.push('{');
                runtime_format.push_str(&index.to_string());
                if let Some(spec) = &field.spec {
                    runtime_format.push(':');
                    runtime_format.push_str(spec);
                }
                runtime_format.push('}');
            }
        }
    }

    if let Some(unused) = used.iter().position(|used| !used) {
        return Err(syn::Error::new(
            explicit_args[unused].span(),
            format!("Unused argument: no field references index {unused}."),
        ));
    }

    Ok(ScanExpansion {
        runtime_format,
        arg_exprs: explicit_args.iter().map(|expr| quote!(#expr)).collect(),
    })
}

/// Auto mode: anonymous fields consume the explicit arguments in order and
/// named fields lower to `&mut ident`; the runtime sees only `{}` fields.
fn build_auto(
    format_lit: &LitStr,
    tokens: &[FormatToken],
    explicit_args: &[&Expr],
) -> Result<ScanExpansion, syn::Error> {
    let mut runtime_format = String::new();
    let mut arg_exprs = Vec::new();
    let mut next_explicit = 0usize;

    for token in tokens {
        match token {
            FormatToken::Text(text) => push_escaped(text, &mut runtime_format),
            FormatToken::Field(field) => {
                match &field.placeholder {
                    Placeholder::Anonymous => {
                        let Some(expr) = explicit_args.get(next_explicit) else {
                            return Err(syn::Error::new(
                                format_lit.span(),
                                format!(
                                    "Anonymous field '{{}}' number {} has no corresponding \
                                     argument. Provide a mutable reference (e.g., &mut var) or \
                                     use named capture (e.g., '{{var}}').",
                                    next_explicit + 1
                                ),
                            ));
                        };
                        next_explicit += 1;
                        arg_exprs.push(quote!(#expr));
                    }
                    Placeholder::Named(name) => {
                        let ident = Ident::new(name, Span::call_site());
                        arg_exprs.push(quote!(&mut #ident));
                    }
                    Placeholder::Indexed(_) => unreachable!("mode split on has_indexed"),
                }
                runtime_format.push('{');
                if let Some(spec) = &field.spec {
                    runtime_format.push(':');
                    runtime_format.push_str(spec);
                }
                runtime_format.push('}');
            }
        }
    }

    if next_explicit < explicit_args.len() {
        let unused = explicit_args.len() - next_explicit;
        return Err(syn::Error::new(
            explicit_args[next_explicit].span(),
            format!(
                "Too many arguments: {unused} unused argument(s) provided. The format string \
                 has {next_explicit} anonymous field(s)."
            ),
        ));
    }

    Ok(ScanExpansion {
        runtime_format,
        arg_exprs,
    })
}

/// Re-escape literal text so the runtime tokenizer reads it back verbatim.
fn push_escaped(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '{' => out.push_str("{{"),
            '}' => out.push_str("}}"),
            other => out.push(other),
        }
    }
}
