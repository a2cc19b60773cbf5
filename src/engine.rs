//! The scan driver: literal matching, field dispatch, backtracking.

use crate::args::ScanArgs;
use crate::context::ScanContext;
use crate::error::{FieldError, FormatError, InputError, ScanError};
use crate::format::{Field, FormatToken, Tokens};
use crate::locale::Locale;
use crate::result::ScanResult;

/// Scan `input` against `format`, writing through the bound arguments.
///
/// This is the type-erased entry point; the `scan!` macro is sugar over it.
/// Programmer errors (malformed format string, arg-id out of range,
/// specifier/type incompatibility) are detected before any input is
/// consumed and come back as [`ScanError::Format`] with `read_count == 0`
/// and the input untouched. Input mismatches come back as partial success:
/// see [`ScanResult`].
///
/// Trailing unconsumed input is not an error; it is returned in
/// `remaining` for the caller to continue from.
///
/// # Examples
///
/// ```
/// use descan::{ScanArg, ScanArgs, vscan};
///
/// let mut word = String::new();
/// let mut count = 0u32;
/// let result = vscan(
///     "peaches 12, more",
///     "{} {},",
///     ScanArgs::new(&mut [ScanArg::new(&mut word), ScanArg::new(&mut count)]),
/// );
/// assert!(result.is_ok());
/// assert_eq!(result.read_count, 2);
/// assert_eq!((word.as_str(), count), ("peaches", 12));
/// assert_eq!(result.remaining, " more");
/// ```
pub fn vscan<'i>(input: &'i str, format: &str, args: ScanArgs<'_, '_>) -> ScanResult<'i> {
    vscan_with_locale(input, format, args, Locale::default())
}

/// [`vscan`] with an explicit [`Locale`] for `L`-flagged fields.
pub fn vscan_with_locale<'i>(
    input: &'i str,
    format: &str,
    mut args: ScanArgs<'_, '_>,
    locale: Locale,
) -> ScanResult<'i> {
    if let Err(error) = validate(format, &args) {
        return ScanResult {
            read_count: 0,
            remaining: input,
            error: Some(ScanError::Format(error)),
        };
    }

    let mut ctx = ScanContext::with_locale(input, locale);
    let mut read_count = 0usize;

    for token in Tokens::new(format) {
        let token = match token {
            Ok(token) => token,
            // Unreachable after validation, but the format is walked twice
            // and the second walk must not trust the first.
            Err(error) => {
                return ScanResult {
                    read_count,
                    remaining: ctx.rest(),
                    error: Some(ScanError::Format(error)),
                };
            }
        };

        let checkpoint = ctx.checkpoint();
        let error = match token {
            FormatToken::Literal(text) => match match_literal(&mut ctx, text) {
                Ok(()) => continue,
                Err(source) => ScanError::Literal(source),
            },
            FormatToken::Field(field) => {
                let index = resolve_index(&mut ctx, field);
                match args.scan_field(index, field.raw_spec(), &mut ctx) {
                    Ok(()) => {
                        read_count += 1;
                        continue;
                    }
                    Err(FieldError::Spec(error)) => ScanError::Format(error),
                    Err(FieldError::Input(source)) => ScanError::Argument { index, source },
                }
            }
        };

        // Putback: report the position before the failed token, not
        // mid-field, so the caller can retry from `remaining`.
        ctx.restore(checkpoint);
        return ScanResult {
            read_count,
            remaining: ctx.rest(),
            error: Some(error),
        };
    }

    ScanResult {
        read_count,
        remaining: ctx.rest(),
        error: None,
    }
}

/// Pre-scan pass: resolve every field against the argument list and let each
/// destination vet its specifier. Runs before any input is consumed so all
/// programmer errors surface with the input untouched.
fn validate(format: &str, args: &ScanArgs<'_, '_>) -> Result<(), FormatError> {
    let mut implicit = 0usize;
    for token in Tokens::new(format) {
        let field = match token? {
            FormatToken::Field(field) => field,
            FormatToken::Literal(_) => continue,
        };
        let index = match field.index {
            Some(index) => index,
            None => {
                let index = implicit;
                implicit += 1;
                index
            }
        };
        if index >= args.len() {
            return Err(FormatError::IndexOutOfRange {
                index,
                arity: args.len(),
            });
        }
        args.check_spec(index, field.raw_spec())?;
    }
    Ok(())
}

fn resolve_index(ctx: &mut ScanContext<'_>, field: Field<'_>) -> usize {
    match field.index {
        Some(index) => index,
        None => ctx.take_implicit_index(),
    }
}

/// Match one literal run. Each whitespace character in the format matches
/// zero or more whitespace characters in the input (scan-style elision);
/// everything else, escaped braces included, must match exactly.
fn match_literal(ctx: &mut ScanContext<'_>, text: &str) -> Result<(), InputError> {
    for expected in text.chars() {
        if expected.is_whitespace() {
            ctx.skip_whitespace();
            continue;
        }
        match ctx.peek() {
            Some(found) if found == expected => ctx.bump(),
            Some(_) => return Err(InputError::LiteralMismatch { expected }),
            None => return Err(InputError::EndOfInput),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ScanArg;

    #[test]
    fn literal_and_fields() {
        let mut a = 0i32;
        let mut b = 0.0f64;
        let result = vscan(
            "5 -> 5.5",
            "{} -> {}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert!(result.is_ok());
        assert_eq!(result.read_count, 2);
        assert_eq!(result.remaining, "");
        assert_eq!((a, b), (5, 5.5));
    }

    #[test]
    fn trailing_input_is_not_an_error() {
        let mut a = 0u32;
        let result = vscan("7 leftovers", "{}", ScanArgs::new(&mut [ScanArg::new(&mut a)]));
        assert!(result.is_ok());
        assert_eq!(result.remaining, " leftovers");
    }

    #[test]
    fn partial_success_restores_to_before_the_failed_field() {
        let mut a = 0i32;
        let mut b = 0i32;
        let result = vscan(
            "42 foo",
            "{} {}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert_eq!(result.read_count, 1);
        assert_eq!(a, 42);
        assert_eq!(result.remaining, "foo");
        assert_eq!(
            result.error,
            Some(ScanError::Argument {
                index: 1,
                source: InputError::ExpectedDigit { base: 10 },
            })
        );
    }

    #[test]
    fn failed_retry_succeeds_on_corrected_arguments() {
        let mut a = 0i32;
        let mut b = 0i32;
        let first = vscan(
            "42 foo",
            "{} {}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert_eq!(first.read_count, 1);

        // Retry the unconsumed tail with a destination that matches it.
        let mut word = String::new();
        let second = vscan(
            first.remaining,
            "{}",
            ScanArgs::new(&mut [ScanArg::new(&mut word)]),
        );
        assert!(second.is_ok());
        assert_eq!(word, "foo");
    }

    #[test]
    fn whitespace_in_format_matches_any_run_of_whitespace() {
        let mut a = 0i32;
        let mut b = 0i32;
        let result = vscan(
            "1 \t  2",
            "{} {}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert!(result.is_ok());
        assert_eq!((a, b), (1, 2));
    }

    #[test]
    fn whitespace_in_format_matches_zero_characters() {
        let mut a = 0i32;
        let result = vscan("x1", "x {}", ScanArgs::new(&mut [ScanArg::new(&mut a)]));
        assert!(result.is_ok());
        assert_eq!(a, 1);
    }

    #[test]
    fn literal_mismatch_reports_and_rewinds() {
        let mut a = 0i32;
        let result = vscan("5 @ 6", "{} # ", ScanArgs::new(&mut [ScanArg::new(&mut a)]));
        assert_eq!(result.read_count, 1);
        assert_eq!(result.remaining, " @ 6");
        assert_eq!(
            result.error,
            Some(ScanError::Literal(InputError::LiteralMismatch {
                expected: '#'
            }))
        );
    }

    #[test]
    fn positional_fields_match_implicit_order() {
        let mut a0 = String::new();
        let mut b0 = 0i32;
        let explicit = vscan(
            "pair 7",
            "{0} {1}",
            ScanArgs::new(&mut [ScanArg::new(&mut a0), ScanArg::new(&mut b0)]),
        );

        let mut a1 = String::new();
        let mut b1 = 0i32;
        let implicit = vscan(
            "pair 7",
            "{} {}",
            ScanArgs::new(&mut [ScanArg::new(&mut a1), ScanArg::new(&mut b1)]),
        );

        assert_eq!(explicit, implicit);
        assert_eq!((a0, b0), (a1, b1));
    }

    #[test]
    fn positional_fields_can_repeat_and_reorder() {
        let mut a = 0i32;
        let mut b = 0i32;
        let result = vscan(
            "1 2 3",
            "{1} {0} {1}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert!(result.is_ok());
        assert_eq!(result.read_count, 3);
        assert_eq!((a, b), (2, 3));
    }

    #[test]
    fn escaped_braces_match_literally_and_read_nothing() {
        let result = vscan("{}", "{{}}", ScanArgs::new(&mut []));
        assert!(result.is_ok());
        assert_eq!(result.read_count, 0);
        assert_eq!(result.remaining, "");
    }

    #[test]
    fn format_errors_touch_no_input() {
        let mut a = 0i32;
        let result = vscan("12", "{} {", ScanArgs::new(&mut [ScanArg::new(&mut a)]));
        assert_eq!(result.read_count, 0);
        assert_eq!(result.remaining, "12");
        assert_eq!(a, 0, "validation must run before any scanning");
        assert!(matches!(
            result.error,
            Some(ScanError::Format(FormatError::UnmatchedOpen(3)))
        ));
    }

    #[test]
    fn arity_mismatch_is_fatal_before_scanning() {
        let mut a = 0i32;
        let result = vscan("1 2", "{} {}", ScanArgs::new(&mut [ScanArg::new(&mut a)]));
        assert_eq!(
            result.error,
            Some(ScanError::Format(FormatError::IndexOutOfRange {
                index: 1,
                arity: 1
            }))
        );
        assert_eq!(result.remaining, "1 2");
    }

    #[test]
    fn spec_type_mismatch_is_fatal_before_scanning() {
        let mut a = 0i32;
        let mut b = 0i32;
        // "{1:s}" pairs a span specifier with an integer destination.
        let result = vscan(
            "1 2",
            "{0} {1:s}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert_eq!(a, 0, "first field must not run when a later spec is bad");
        assert!(matches!(
            result.error,
            Some(ScanError::Format(FormatError::UnknownSpecifier {
                conv: 's',
                ..
            }))
        ));
    }

    #[test]
    fn end_of_input_mid_literal() {
        let result = vscan("ab", "abc", ScanArgs::new(&mut []));
        assert_eq!(result.remaining, "ab");
        assert_eq!(
            result.error,
            Some(ScanError::Literal(InputError::EndOfInput))
        );
    }

    #[test]
    fn locale_applies_only_to_flagged_fields() {
        let mut plain = 0.0f64;
        let mut flagged = 0.0f64;
        let result = vscan_with_locale(
            "1.5 2,5",
            "{} {:Lf}",
            ScanArgs::new(&mut [ScanArg::new(&mut plain), ScanArg::new(&mut flagged)]),
            Locale::new(',', Some('.')),
        );
        assert!(result.is_ok());
        assert_eq!((plain, flagged), (1.5, 2.5));
    }

    #[test]
    fn zero_width_field_reads_and_consumes_nothing() {
        let mut a = 9i32;
        let mut b = 0i32;
        let result = vscan(
            "37",
            "{:d0}{}",
            ScanArgs::new(&mut [ScanArg::new(&mut a), ScanArg::new(&mut b)]),
        );
        assert!(result.is_ok());
        assert_eq!(result.read_count, 2);
        assert_eq!((a, b), (9, 37));
    }
}
