//! Procedural macros for the `descan` scanning crate.
//!
//! The macros are thin: they validate the format string at compile time
//! (brace balance, arg-id syntax, indexing mode, arity against the supplied
//! arguments), lower named captures to anonymous fields, and expand to one
//! call into the runtime engine. No per-field parsing code is generated;
//! parsing behavior lives entirely in `descan` itself.
//!
//! # Expansion shape
//!
//! `scan!(input, "{name}: {}", &mut count)` becomes, roughly:
//!
//! ```ignore
//! ::descan::vscan(
//!     input,
//!     "{}: {}",
//!     ::descan::ScanArgs::new(&mut [
//!         ::descan::ScanArg::new(&mut name),
//!         ::descan::ScanArg::new(&mut count),
//!     ]),
//! )
//! ```
//!
//! The argument array lives on the caller's stack for the duration of the
//! call expression; nothing is heap-allocated by the expansion.

#![forbid(unsafe_code)]

mod codegen;
mod constants;
mod parsing;
mod tokenization;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

use codegen::{ScanExpansion, build_expansion};
use parsing::{ScanInput, ScanlnInput};

/// Scan a string against a format string; evaluates to a
/// `descan::ScanResult`.
///
/// See the re-export in `descan` for the full field syntax. Errors in the
/// format string or its pairing with the argument list are compile errors.
#[proc_macro]
pub fn scan(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as ScanInput);
    let explicit_args: Vec<_> = invocation.args.iter().collect();

    let expansion = match build_expansion(&invocation.format, &explicit_args) {
        Ok(expansion) => expansion,
        Err(error) => return error.to_compile_error().into(),
    };

    let input_expr = &invocation.input;
    let call = vscan_call(quote!(#input_expr), &invocation.format, &expansion);
    TokenStream::from(quote!({ #call }))
}

/// Read one line from stdin and scan it; evaluates to
/// `std::io::Result<usize>` carrying the number of scanned arguments.
#[proc_macro]
pub fn scanln(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as ScanlnInput);
    let explicit_args: Vec<_> = invocation.args.iter().collect();

    let expansion = match build_expansion(&invocation.format, &explicit_args) {
        Ok(expansion) => expansion,
        Err(error) => return error.to_compile_error().into(),
    };

    let call = vscan_call(quote!(__descan_line), &invocation.format, &expansion);

    // The buffer lives inside the expansion block, so a partial-success view
    // borrowing it could not escape; scanln! therefore returns the collapsed
    // io::Result instead of a ScanResult. The internal bindings carry the
    // __descan prefix so they cannot shadow a caller destination named
    // `line` or `buffer`.
    let expanded = quote! {{
        let mut __descan_buffer = ::std::string::String::new();
        let _ = ::std::io::Write::flush(&mut ::std::io::stdout());
        match ::std::io::stdin().read_line(&mut __descan_buffer) {
            ::std::result::Result::Ok(_) => {
                let __descan_line = __descan_buffer
                    .trim_end_matches('\n')
                    .trim_end_matches('\r');
                #call.into_result().map_err(::std::io::Error::from)
            }
            ::std::result::Result::Err(error) => ::std::result::Result::Err(error),
        }
    }};
    TokenStream::from(expanded)
}

fn vscan_call(
    input_expr: proc_macro2::TokenStream,
    format: &LitStr,
    expansion: &ScanExpansion,
) -> proc_macro2::TokenStream {
    let runtime_format = LitStr::new(&expansion.runtime_format, format.span());
    let arg_exprs = &expansion.arg_exprs;
    quote! {
        ::descan::vscan(
            #input_expr,
            #runtime_format,
            ::descan::ScanArgs::new(&mut [#(::descan::ScanArg::new(#arg_exprs)),*]),
        )
    }
}
