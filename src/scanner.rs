//! The per-type extension point and the built-in scanners.
//!
//! A scannable type supplies two operations: interpret the opaque format
//! specifier once (`parse_spec`, pure), and consume characters from the
//! context to produce a value (`scan`). Resolution happens entirely at
//! compile time through monomorphization; no runtime type tags exist.
//!
//! Built-in scanners cover the primitive integers (with base selection and
//! checked accumulation), floats (with locale decimal point under the `L`
//! flag), `char`, `bool`, whitespace-delimited spans into `String`, and
//! bounded spans into [`BoundedString`]. Numeric and span scanners skip
//! leading whitespace; `char` does not, matching classic scan semantics.

use std::any::type_name;
use std::borrow::Cow;
use std::ops::Deref;

use crate::context::ScanContext;
use crate::error::{FormatError, InputError};
use crate::format::SpecOptions;

/// Input-to-value conversion for one type.
///
/// `scan` writes through `self` only on success; on failure the destination
/// is unspecified and the driver (not the scanner) rewinds the cursor to the
/// pre-call checkpoint. A width of 0 in the specifier is a zero-width match:
/// `scan` returns `Ok` without consuming input or touching the destination.
///
/// # Examples
///
/// A user type registers itself by implementing the trait:
///
/// ```
/// use descan::{FormatError, InputError, ScanContext, Scannable};
///
/// struct Celsius(f64);
///
/// impl Scannable for Celsius {
///     type Spec = ();
///
///     fn parse_spec(raw: &str) -> Result<(), FormatError> {
///         if raw.is_empty() {
///             Ok(())
///         } else {
///             Err(FormatError::BadSpec(raw.into()))
///         }
///     }
///
///     fn scan(&mut self, ctx: &mut ScanContext<'_>, _spec: &()) -> Result<(), InputError> {
///         let mut degrees = 0.0f64;
///         degrees.scan(ctx, &descan::FloatSpec::default())?;
///         if ctx.next_char()? != 'C' {
///             return Err(InputError::custom("expected a trailing 'C'"));
///         }
///         self.0 = degrees;
///         Ok(())
///     }
/// }
/// ```
pub trait Scannable {
    /// The interpreted form of this type's format specifier.
    type Spec;

    /// Validate and interpret the opaque specifier slice. Pure: independent
    /// of the input, so the driver can run it before any input is consumed.
    fn parse_spec(raw: &str) -> Result<Self::Spec, FormatError>;

    /// Consume characters from `ctx` and write the value into `self`.
    fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &Self::Spec) -> Result<(), InputError>;
}

// ============================================================================
// Integers
// ============================================================================

/// Radix selection for an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntBase {
    /// `i`: detect by prefix. `0x`/`0X` hex, `0o` octal, `0b` binary,
    /// decimal otherwise.
    Auto,
    /// A fixed radix from the conversion character (`d`, `x`, `o`, `b`).
    Fixed(u32),
}

/// Interpreted specifier for the integer scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSpec {
    pub base: IntBase,
    pub width: Option<usize>,
    pub locale_aware: bool,
}

impl Default for IntSpec {
    fn default() -> Self {
        Self {
            base: IntBase::Fixed(10),
            width: None,
            locale_aware: false,
        }
    }
}

impl IntSpec {
    fn parse(raw: &str, ty: &'static str) -> Result<Self, FormatError> {
        let options = SpecOptions::parse(raw)?;
        let base = match options.conv {
            None | Some('d') => IntBase::Fixed(10),
            Some('x') => IntBase::Fixed(16),
            Some('o') => IntBase::Fixed(8),
            Some('b') => IntBase::Fixed(2),
            Some('i') => IntBase::Auto,
            Some(conv) => return Err(FormatError::UnknownSpecifier { conv, ty }),
        };
        Ok(Self {
            base,
            width: options.width,
            locale_aware: options.locale_aware,
        })
    }
}

macro_rules! int_scannable {
    ($signed:literal: $($t:ty),+ $(,)?) => {$(
        impl Scannable for $t {
            type Spec = IntSpec;

            fn parse_spec(raw: &str) -> Result<IntSpec, FormatError> {
                IntSpec::parse(raw, type_name::<$t>())
            }

            fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &IntSpec) -> Result<(), InputError> {
                if spec.width == Some(0) {
                    return Ok(());
                }
                ctx.skip_whitespace();
                if ctx.is_empty() {
                    return Err(InputError::EndOfInput);
                }

                let max = spec.width.unwrap_or(usize::MAX);
                let mut n = 0usize;
                let mut negative = false;
                match ctx.peek() {
                    Some('+') => {
                        ctx.bump();
                        n += 1;
                    }
                    Some('-') if $signed => {
                        negative = true;
                        ctx.bump();
                        n += 1;
                    }
                    _ => {}
                }

                let mut seen_digit = false;
                let base: u32 = match spec.base {
                    IntBase::Fixed(16) => {
                        // Accept an optional 0x prefix, but only when a hex
                        // digit follows and the whole prefix fits the width.
                        let mut look = ctx.rest().chars();
                        if look.next() == Some('0')
                            && matches!(look.next(), Some('x' | 'X'))
                            && look.next().is_some_and(|c| c.is_ascii_hexdigit())
                            && n + 3 <= max
                        {
                            ctx.advance(2);
                            n += 2;
                        }
                        16
                    }
                    IntBase::Fixed(base) => base,
                    IntBase::Auto => {
                        if n < max && ctx.peek() == Some('0') {
                            // A lone "0" is a valid decimal zero.
                            ctx.bump();
                            n += 1;
                            seen_digit = true;
                            let mut look = ctx.rest().chars();
                            let marker = look.next();
                            let first = look.next();
                            let detected = match marker {
                                Some('x' | 'X') if first.is_some_and(|c| c.is_ascii_hexdigit()) => {
                                    Some(16)
                                }
                                Some('o' | 'O') if first.and_then(|c| c.to_digit(8)).is_some() => {
                                    Some(8)
                                }
                                Some('b' | 'B') if first.and_then(|c| c.to_digit(2)).is_some() => {
                                    Some(2)
                                }
                                _ => None,
                            };
                            match detected {
                                Some(base) if n < max => {
                                    ctx.bump();
                                    n += 1;
                                    base
                                }
                                _ => 10,
                            }
                        } else {
                            10
                        }
                    }
                };

                let mut value: $t = 0;
                while n < max {
                    let Some(c) = ctx.peek() else { break };
                    if let Some(digit) = c.to_digit(base) {
                        let digit = digit as $t;
                        value = value
                            .checked_mul(base as $t)
                            .and_then(|v| {
                                if negative {
                                    v.checked_sub(digit)
                                } else {
                                    v.checked_add(digit)
                                }
                            })
                            .ok_or(InputError::OutOfRange)?;
                        ctx.bump();
                        n += 1;
                        seen_digit = true;
                    } else if spec.locale_aware
                        && seen_digit
                        && ctx.locale().grouping == Some(c)
                    {
                        // Grouping separators are ignored, but only between
                        // digits; a trailing one belongs to the next field.
                        let mut look = ctx.rest().chars();
                        look.next();
                        if look.next().and_then(|next| next.to_digit(base)).is_some() {
                            ctx.bump();
                            n += 1;
                        } else {
                            break;
                        }
                    } else {
                        break;
                    }
                }

                if !seen_digit {
                    return Err(InputError::ExpectedDigit { base });
                }
                *self = value;
                Ok(())
            }
        }
    )+};
}

int_scannable!(true: i8, i16, i32, i64, i128, isize);
int_scannable!(false: u8, u16, u32, u64, u128, usize);

// ============================================================================
// Floats
// ============================================================================

/// Interpreted specifier for the float scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatSpec {
    pub width: Option<usize>,
    pub locale_aware: bool,
}

impl FloatSpec {
    fn parse(raw: &str, ty: &'static str) -> Result<Self, FormatError> {
        let options = SpecOptions::parse(raw)?;
        match options.conv {
            None | Some('f' | 'e' | 'g') => {}
            Some(conv) => return Err(FormatError::UnknownSpecifier { conv, ty }),
        }
        Ok(Self {
            width: options.width,
            locale_aware: options.locale_aware,
        })
    }
}

/// Walk one floating-point token: sign, digits, decimal point, exponent, or
/// one of the `inf`/`infinity`/`nan` words. Returns the token with the
/// locale decimal point rewritten to `.` so `str::parse` understands it.
fn take_float_token<'i>(
    ctx: &mut ScanContext<'i>,
    spec: &FloatSpec,
) -> Result<Cow<'i, str>, InputError> {
    ctx.skip_whitespace();
    if ctx.is_empty() {
        return Err(InputError::EndOfInput);
    }

    let start = ctx.checkpoint();
    let max = spec.width.unwrap_or(usize::MAX);
    let mut n = 0usize;
    if matches!(ctx.peek(), Some('+' | '-')) {
        ctx.bump();
        n += 1;
    }

    if ctx.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        for word in ["infinity", "inf", "nan"] {
            if n + word.len() <= max && ctx.eat_ascii_ci(word) {
                return Ok(Cow::Borrowed(ctx.slice_from(start)));
            }
        }
        return Err(InputError::InvalidFloat);
    }

    let point = if spec.locale_aware {
        ctx.locale().decimal_point
    } else {
        '.'
    };

    let mut seen_digit = false;
    let mut seen_point = false;
    let mut seen_exp = false;
    while n < max {
        match ctx.peek() {
            Some(c) if c.is_ascii_digit() => {
                ctx.bump();
                n += 1;
                seen_digit = true;
            }
            Some(c) if c == point && !seen_point && !seen_exp => {
                ctx.bump();
                n += 1;
                seen_point = true;
            }
            Some(c)
                if spec.locale_aware
                    && seen_digit
                    && !seen_point
                    && !seen_exp
                    && ctx.locale().grouping == Some(c) =>
            {
                // Grouping separators are accepted in the integral part,
                // but only between digits; a trailing one belongs to the
                // next field.
                let mut look = ctx.rest().chars();
                look.next();
                if look.next().is_some_and(|d| d.is_ascii_digit()) {
                    ctx.bump();
                    n += 1;
                } else {
                    break;
                }
            }
            Some('e' | 'E') if seen_digit && !seen_exp => {
                // Take the exponent marker only when its digits fit too;
                // otherwise stop here so the token stays parseable.
                let mut look = ctx.rest().chars();
                look.next();
                let (has_digits, required) = match look.next() {
                    Some('+' | '-') => (look.next().is_some_and(|d| d.is_ascii_digit()), 3),
                    Some(d) => (d.is_ascii_digit(), 2),
                    None => (false, 2),
                };
                if !has_digits || n + required > max {
                    break;
                }
                ctx.bump();
                n += 1;
                seen_exp = true;
                if matches!(ctx.peek(), Some('+' | '-')) {
                    ctx.bump();
                    n += 1;
                }
            }
            _ => break,
        }
    }

    if !seen_digit {
        return Err(InputError::ExpectedDigit { base: 10 });
    }
    let token = ctx.slice_from(start);
    let grouping = if spec.locale_aware {
        ctx.locale().grouping
    } else {
        None
    };
    let has_grouping = grouping.is_some_and(|g| token.contains(g));
    if has_grouping || (point != '.' && token.contains(point)) {
        let mut owned = token.to_string();
        if let Some(g) = grouping {
            owned.retain(|c| c != g);
        }
        if point != '.' {
            owned = owned.replace(point, ".");
        }
        Ok(Cow::Owned(owned))
    } else {
        Ok(Cow::Borrowed(token))
    }
}

macro_rules! float_scannable {
    ($($t:ty),+ $(,)?) => {$(
        impl Scannable for $t {
            type Spec = FloatSpec;

            fn parse_spec(raw: &str) -> Result<FloatSpec, FormatError> {
                FloatSpec::parse(raw, type_name::<$t>())
            }

            fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &FloatSpec) -> Result<(), InputError> {
                if spec.width == Some(0) {
                    return Ok(());
                }
                let token = take_float_token(ctx, spec)?;
                *self = token.parse::<$t>().map_err(|_| InputError::InvalidFloat)?;
                Ok(())
            }
        }
    )+};
}

float_scannable!(f32, f64);

// ============================================================================
// Characters and booleans
// ============================================================================

/// Interpreted specifier for `char` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharSpec {
    pub width: Option<usize>,
}

impl CharSpec {
    fn parse(raw: &str, ty: &'static str) -> Result<Self, FormatError> {
        let options = SpecOptions::parse(raw)?;
        match options.conv {
            None | Some('c') => {}
            Some(conv) => return Err(FormatError::UnknownSpecifier { conv, ty }),
        }
        Ok(Self {
            width: options.width,
        })
    }
}

impl Scannable for char {
    type Spec = CharSpec;

    fn parse_spec(raw: &str) -> Result<CharSpec, FormatError> {
        CharSpec::parse(raw, type_name::<char>())
    }

    /// Reads exactly the next character. Unlike the numeric and span
    /// scanners, whitespace is not skipped: `%c` semantics.
    fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &CharSpec) -> Result<(), InputError> {
        if spec.width == Some(0) {
            return Ok(());
        }
        *self = ctx.next_char()?;
        Ok(())
    }
}

/// Interpreted specifier for `bool` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoolSpec {
    pub width: Option<usize>,
}

impl BoolSpec {
    fn parse(raw: &str, ty: &'static str) -> Result<Self, FormatError> {
        let options = SpecOptions::parse(raw)?;
        if let Some(conv) = options.conv {
            return Err(FormatError::UnknownSpecifier { conv, ty });
        }
        Ok(Self {
            width: options.width,
        })
    }
}

impl Scannable for bool {
    type Spec = BoolSpec;

    fn parse_spec(raw: &str) -> Result<BoolSpec, FormatError> {
        BoolSpec::parse(raw, type_name::<bool>())
    }

    fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &BoolSpec) -> Result<(), InputError> {
        if spec.width == Some(0) {
            return Ok(());
        }
        ctx.skip_whitespace();
        let max = spec.width.unwrap_or(usize::MAX);
        match ctx.peek() {
            None => Err(InputError::EndOfInput),
            Some('1') => {
                ctx.bump();
                *self = true;
                Ok(())
            }
            Some('0') => {
                ctx.bump();
                *self = false;
                Ok(())
            }
            Some('t') if max >= 4 && ctx.rest().starts_with("true") => {
                ctx.advance(4);
                *self = true;
                Ok(())
            }
            Some('f') if max >= 5 && ctx.rest().starts_with("false") => {
                ctx.advance(5);
                *self = false;
                Ok(())
            }
            Some(_) => Err(InputError::ExpectedBool),
        }
    }
}

// ============================================================================
// Character spans
// ============================================================================

/// Interpreted specifier for span fields (`String`, [`BoundedString`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrSpec {
    pub width: Option<usize>,
}

impl StrSpec {
    fn parse(raw: &str, ty: &'static str) -> Result<Self, FormatError> {
        let options = SpecOptions::parse(raw)?;
        match options.conv {
            None | Some('s') => {}
            Some(conv) => return Err(FormatError::UnknownSpecifier { conv, ty }),
        }
        Ok(Self {
            width: options.width,
        })
    }
}

impl Scannable for String {
    type Spec = StrSpec;

    fn parse_spec(raw: &str) -> Result<StrSpec, FormatError> {
        StrSpec::parse(raw, type_name::<String>())
    }

    /// Reads the next whitespace-delimited span, at most `width` characters.
    /// Growth is the destination's policy; the engine allocates nothing.
    fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &StrSpec) -> Result<(), InputError> {
        if spec.width == Some(0) {
            return Ok(());
        }
        ctx.skip_whitespace();
        if ctx.is_empty() {
            return Err(InputError::EndOfInput);
        }
        self.clear();
        let max = spec.width.unwrap_or(usize::MAX);
        take_span(ctx, max, |c| self.push(c));
        Ok(())
    }
}

fn take_span(ctx: &mut ScanContext<'_>, max: usize, mut push: impl FnMut(char)) {
    let mut n = 0usize;
    while n < max {
        match ctx.peek() {
            Some(c) if !ctx.locale().is_space(c) => {
                push(c);
                ctx.bump();
                n += 1;
            }
            _ => break,
        }
    }
}

/// A character-span destination with a hard capacity of `N` characters.
///
/// Scanning into a `BoundedString` can never write past the bound: the scan
/// legally stops at the capacity (or at the field width, whichever is
/// smaller) and the rest of the span stays in the unconsumed input. This is
/// the by-construction replacement for C's unbounded `%s` overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedString<const N: usize> {
    inner: String,
}

impl<const N: usize> BoundedString<N> {
    /// Maximum number of characters this destination holds.
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.inner
    }
}

impl<const N: usize> Scannable for BoundedString<N> {
    type Spec = StrSpec;

    fn parse_spec(raw: &str) -> Result<StrSpec, FormatError> {
        StrSpec::parse(raw, type_name::<Self>())
    }

    fn scan(&mut self, ctx: &mut ScanContext<'_>, spec: &StrSpec) -> Result<(), InputError> {
        let cap = spec.width.map_or(N, |w| w.min(N));
        if cap == 0 {
            return Ok(());
        }
        ctx.skip_whitespace();
        if ctx.is_empty() {
            return Err(InputError::EndOfInput);
        }
        self.inner.clear();
        let inner = &mut self.inner;
        take_span(ctx, cap, |c| inner.push(c));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    fn scan_one<T: Scannable + Default>(input: &str, raw_spec: &str) -> Result<(T, String), InputError> {
        let mut ctx = ScanContext::new(input);
        let spec = T::parse_spec(raw_spec).expect("spec must parse");
        let mut value = T::default();
        value.scan(&mut ctx, &spec)?;
        Ok((value, ctx.rest().to_string()))
    }

    #[test]
    fn decimal_integer() {
        let (value, rest) = scan_one::<i32>("  -42 tail", "").unwrap();
        assert_eq!(value, -42);
        assert_eq!(rest, " tail");
    }

    #[test]
    fn unsigned_rejects_minus() {
        let error = scan_one::<u32>("-42", "").unwrap_err();
        assert_eq!(error, InputError::ExpectedDigit { base: 10 });
    }

    #[test]
    fn hex_with_and_without_prefix() {
        assert_eq!(scan_one::<u32>("ff", "x").unwrap().0, 0xff);
        assert_eq!(scan_one::<u32>("0xFF", "x").unwrap().0, 0xff);
    }

    #[test]
    fn auto_base_prefixes() {
        assert_eq!(scan_one::<i64>("0x10", "i").unwrap().0, 16);
        assert_eq!(scan_one::<i64>("0o10", "i").unwrap().0, 8);
        assert_eq!(scan_one::<i64>("0b10", "i").unwrap().0, 2);
        assert_eq!(scan_one::<i64>("010", "i").unwrap().0, 10);
        assert_eq!(scan_one::<i64>("0", "i").unwrap().0, 0);
    }

    #[test]
    fn binary_and_octal_conversions() {
        assert_eq!(scan_one::<u8>("1010", "b").unwrap().0, 10);
        assert_eq!(scan_one::<u16>("777", "o").unwrap().0, 0o777);
    }

    #[test]
    fn width_caps_integer_digits() {
        let (value, rest) = scan_one::<u32>("123456", "d3").unwrap();
        assert_eq!(value, 123);
        assert_eq!(rest, "456");
    }

    #[test]
    fn signed_min_does_not_overflow() {
        assert_eq!(scan_one::<i8>("-128", "").unwrap().0, i8::MIN);
        assert_eq!(
            scan_one::<i8>("128", "").unwrap_err(),
            InputError::OutOfRange
        );
    }

    #[test]
    fn overflow_is_an_error_not_a_wrap() {
        assert_eq!(
            scan_one::<u8>("300", "").unwrap_err(),
            InputError::OutOfRange
        );
    }

    #[test]
    fn grouping_separator_under_locale_flag() {
        let mut ctx = ScanContext::with_locale("1,234,567 tail", Locale::new('.', Some(',')));
        let spec = <u32 as Scannable>::parse_spec("Ld").unwrap();
        let mut value = 0u32;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 1_234_567);
        assert_eq!(ctx.rest(), " tail");
    }

    #[test]
    fn grouping_ignored_without_locale_flag() {
        let mut ctx = ScanContext::with_locale("1,234", Locale::new('.', Some(',')));
        let spec = <u32 as Scannable>::parse_spec("d").unwrap();
        let mut value = 0u32;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 1);
        assert_eq!(ctx.rest(), ",234");
    }

    #[test]
    fn trailing_group_char_is_left_for_the_next_field() {
        let mut ctx = ScanContext::with_locale("12, 13", Locale::new('.', Some(',')));
        let spec = <u32 as Scannable>::parse_spec("Ld").unwrap();
        let mut value = 0u32;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 12);
        assert_eq!(ctx.rest(), ", 13");
    }

    #[test]
    fn plain_float() {
        let (value, rest) = scan_one::<f64>("3.14 tail", "").unwrap();
        assert_eq!(value, 3.14);
        assert_eq!(rest, " tail");
    }

    #[test]
    fn float_with_exponent() {
        assert_eq!(scan_one::<f64>("6.02e23", "").unwrap().0, 6.02e23);
        assert_eq!(scan_one::<f64>("-1E-3", "").unwrap().0, -1e-3);
    }

    #[test]
    fn exponent_without_digits_stays_in_input() {
        let (value, rest) = scan_one::<f64>("2e tail", "").unwrap();
        assert_eq!(value, 2.0);
        assert_eq!(rest, "e tail");
    }

    #[test]
    fn special_float_words() {
        assert_eq!(scan_one::<f64>("inf", "").unwrap().0, f64::INFINITY);
        assert_eq!(scan_one::<f64>("-Infinity", "").unwrap().0, f64::NEG_INFINITY);
        assert!(scan_one::<f64>("NaN", "").unwrap().0.is_nan());
    }

    #[test]
    fn locale_decimal_comma() {
        let mut ctx = ScanContext::with_locale("3,14", Locale::new(',', Some('.')));
        let spec = <f64 as Scannable>::parse_spec("Lf").unwrap();
        let mut value = 0.0f64;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 3.14);
    }

    #[test]
    fn locale_grouping_in_the_float_integral_part() {
        let mut ctx = ScanContext::with_locale("1.234,56 tail", Locale::new(',', Some('.')));
        let spec = <f64 as Scannable>::parse_spec("Lf").unwrap();
        let mut value = 0.0f64;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 1234.56);
        assert_eq!(ctx.rest(), " tail");
    }

    #[test]
    fn float_grouping_stops_at_the_fractional_part() {
        // Grouping is integral-part only and must sit between digits.
        let mut ctx = ScanContext::with_locale("1,234.5. tail", Locale::new('.', Some(',')));
        let spec = <f64 as Scannable>::parse_spec("Lf").unwrap();
        let mut value = 0.0f64;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 1234.5);
        assert_eq!(ctx.rest(), ". tail");
    }

    #[test]
    fn default_mode_ignores_process_locale() {
        // Without the L flag the decimal point is '.' no matter the locale.
        let mut ctx = ScanContext::with_locale("3.14", Locale::new(',', Some('.')));
        let spec = <f64 as Scannable>::parse_spec("f").unwrap();
        let mut value = 0.0f64;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 3.14);
    }

    #[test]
    fn char_does_not_skip_whitespace() {
        let (value, rest) = scan_one::<char>(" x", "").unwrap();
        assert_eq!(value, ' ');
        assert_eq!(rest, "x");
    }

    #[test]
    fn bool_words_and_digits() {
        assert_eq!(scan_one::<bool>("true", "").unwrap().0, true);
        assert_eq!(scan_one::<bool>("false", "").unwrap().0, false);
        assert_eq!(scan_one::<bool>("1", "").unwrap().0, true);
        assert_eq!(scan_one::<bool>("0", "").unwrap().0, false);
        assert_eq!(
            scan_one::<bool>("yes", "").unwrap_err(),
            InputError::ExpectedBool
        );
    }

    #[test]
    fn string_span_is_whitespace_delimited() {
        let (value, rest) = scan_one::<String>("  alpha beta", "").unwrap();
        assert_eq!(value, "alpha");
        assert_eq!(rest, " beta");
    }

    #[test]
    fn string_width_truncates_without_error() {
        let (value, rest) = scan_one::<String>("abcdef", "s3").unwrap();
        assert_eq!(value, "abc");
        assert_eq!(rest, "def");
    }

    #[test]
    fn string_at_end_of_input_fails() {
        assert_eq!(
            scan_one::<String>("   ", "").unwrap_err(),
            InputError::EndOfInput
        );
    }

    #[test]
    fn bounded_string_never_exceeds_capacity() {
        let (value, rest) = scan_one::<BoundedString<4>>("abcdefgh", "").unwrap();
        assert_eq!(value.as_str(), "abcd");
        assert_eq!(rest, "efgh");
    }

    #[test]
    fn bounded_string_width_tightens_the_cap() {
        let (value, _) = scan_one::<BoundedString<8>>("abcdefgh", "s2").unwrap();
        assert_eq!(value.as_str(), "ab");
    }

    #[test]
    fn zero_width_consumes_nothing() {
        let mut ctx = ScanContext::new("123");
        let spec = <i32 as Scannable>::parse_spec("d0").unwrap();
        let mut value = 7i32;
        value.scan(&mut ctx, &spec).unwrap();
        assert_eq!(value, 7);
        assert_eq!(ctx.rest(), "123");
    }

    #[test]
    fn unknown_specifier_names_the_type() {
        let error = <i32 as Scannable>::parse_spec("q").unwrap_err();
        assert!(matches!(
            error,
            FormatError::UnknownSpecifier { conv: 'q', .. }
        ));
    }
}
