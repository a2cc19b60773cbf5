//! Numeric locale policy consumed by the built-in scanners.

/// Decimal-point and digit-grouping policy for numeric fields.
///
/// The default is a fixed, locale-independent policy: `.` as the decimal
/// point, no grouping separator, Unicode whitespace classification. A field
/// only consults the locale when its specifier carries the `L` flag, so
/// default-mode scanning never varies with process locale settings.
///
/// This is a plain value, not a binding to the OS locale; callers who want
/// `LC_NUMERIC` behavior construct the matching `Locale` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Character separating the integral and fractional parts of a float.
    pub decimal_point: char,
    /// Digit-grouping separator accepted (and ignored) between the digits of
    /// an integer or of a float's integral part, e.g. `,` in `1,000,000`.
    /// `None` disables grouping.
    pub grouping: Option<char>,
}

impl Locale {
    /// A locale with the given decimal point and optional grouping separator.
    pub const fn new(decimal_point: char, grouping: Option<char>) -> Self {
        Self {
            decimal_point,
            grouping,
        }
    }

    /// Whitespace classification used for span delimiting and elision.
    ///
    /// Fixed to Unicode whitespace in every locale; kept as a method so the
    /// classification has a single home.
    pub fn is_space(&self, ch: char) -> bool {
        ch.is_whitespace()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new('.', None)
    }
}
