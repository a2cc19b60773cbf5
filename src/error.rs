//! Error types for format-string validation and input scanning.
//!
//! Two disjoint categories exist and never mix:
//!
//! - [`FormatError`]: programmer errors (malformed format string, arg-id out
//!   of range, specifier/type incompatibility). Detected before any input is
//!   consumed.
//! - [`InputError`]: the input does not match the expected shape. Always
//!   recoverable through the partial-success [`ScanResult`](crate::ScanResult).

use thiserror::Error;

/// A defect in the format string or its relationship to the argument list.
///
/// These are programmer errors: they are reported before the engine touches
/// any input, and the `scan!` macro rejects most of them at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A `{` with no matching `}` and no `{{` escape.
    #[error("unmatched '{{' at byte {0} of the format string")]
    UnmatchedOpen(usize),

    /// A `}` outside a replacement field and not part of a `}}` escape.
    #[error("unmatched '}}' at byte {0} of the format string")]
    UnmatchedClose(usize),

    /// A replacement field whose body is not `[arg-id] [':' spec]`.
    #[error("malformed replacement field at byte {0} of the format string")]
    FieldSyntax(usize),

    /// An explicit arg-id that does not fit in `usize`.
    #[error("argument index at byte {0} of the format string is too large")]
    IndexOverflow(usize),

    /// Implicit `{}` and explicit `{N}` fields mixed in one format string.
    #[error("cannot mix implicit '{{}}' and explicit '{{N}}' argument indices")]
    MixedIndexing,

    /// A field referenced an argument beyond the bound argument list.
    #[error("argument index {index} out of range: {arity} argument(s) bound")]
    IndexOutOfRange { index: usize, arity: usize },

    /// The conversion character is not understood by the destination type.
    #[error("unknown specifier {conv:?} for destination type {ty}")]
    UnknownSpecifier { conv: char, ty: &'static str },

    /// The specifier did not match `[L] [conv-char] [width]`.
    #[error("malformed format specifier {0:?}")]
    BadSpec(Box<str>),
}

/// A mismatch between the input and the shape the current field expects.
///
/// Always recoverable: the driver rewinds the cursor to the start of the
/// failed field and reports through [`ScanResult`](crate::ScanResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The cursor reached the end of the input range.
    #[error("unexpected end of input")]
    EndOfInput,

    /// A literal format character did not match the input.
    #[error("expected literal {expected:?}")]
    LiteralMismatch { expected: char },

    /// A numeric field found no digit where one was required.
    #[error("expected a digit in base {base}")]
    ExpectedDigit { base: u32 },

    /// A numeric value does not fit the destination type.
    #[error("numeric value out of range for the destination type")]
    OutOfRange,

    /// A floating-point token could not be interpreted.
    #[error("malformed floating-point number")]
    InvalidFloat,

    /// Neither `true`/`false` nor `1`/`0` was found for a bool field.
    #[error("expected a boolean")]
    ExpectedBool,

    /// Failure reported by a user-defined scanner.
    #[error("{0}")]
    Custom(Box<str>),
}

impl InputError {
    /// Shorthand for user scanners reporting a domain-specific mismatch.
    pub fn custom(message: impl Into<Box<str>>) -> Self {
        Self::Custom(message.into())
    }
}

/// What a type-erased scan target can report: either its specifier was
/// rejected (programmer error) or the input did not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Spec(#[from] FormatError),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// The error slot of a [`ScanResult`](crate::ScanResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The format string itself (or its pairing with the argument list) is
    /// invalid. Reported with `read_count == 0` and untouched input.
    #[error("invalid format string: {0}")]
    Format(#[from] FormatError),

    /// A literal run of the format string failed to match the input.
    #[error("literal mismatch: {0}")]
    Literal(InputError),

    /// Scanning argument `index` failed; earlier arguments keep their values.
    #[error("argument {index}: {source}")]
    Argument { index: usize, source: InputError },
}

impl ScanError {
    /// True for the recoverable input-mismatch category, false for
    /// programmer errors.
    pub fn is_input_mismatch(&self) -> bool {
        !matches!(self, Self::Format(_))
    }
}

impl From<ScanError> for std::io::Error {
    fn from(error: ScanError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, error)
    }
}
