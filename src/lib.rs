//! Type-safe, format-string-driven input scanning: the inverse of `format!`.
//!
//! `descan` turns textual input back into typed values, driven by the same
//! `{}`-style replacement-field syntax `format!` uses for the opposite
//! direction.
//!
//! # Architecture
//!
//! One scan call flows through four layers:
//! 1. **Format grammar** (`format`): tokenizes the format string into literal
//!    runs and replacement fields `{ [arg-id] [':' spec] }`, streaming, with
//!    `{{`/`}}` escapes. Purely a function of the format string, which is
//!    what lets `scan!` run the same checks at compile time.
//! 2. **Scan context** (`context`): the cursor over the borrowed input, the
//!    locale, and the implicit-argument counter, with checkpoint/restore for
//!    backtracking.
//! 3. **Scanners** (`scanner`): one [`Scannable`] implementation per
//!    destination type, which parses the specifier once and then scans a
//!    value. User types plug in by implementing the trait; dispatch is
//!    monomorphized, no registry and no allocation.
//! 4. **Engine** (`engine`): interleaves literal matching and field
//!    scanning, owns the rewind protocol, and builds the [`ScanResult`].
//!
//! # Partial success
//!
//! Input mismatches never panic and never throw away work: the result
//! carries how many arguments were scanned, the unconsumed tail (rewound to
//! the start of the failed field), and the error detail. Programmer errors
//! (a malformed format string, an arg-id beyond the bound arguments, a
//! specifier the destination type rejects) are a separate category, detected
//! before any input is consumed, and mostly at compile time when going
//! through [`scan!`].
//!
//! # Examples
//!
//! ```
//! use descan::scan;
//!
//! let mut product = String::new();
//! let mut price = 0.0f64;
//! let result = scan!("Candy -> 2.75", "{} -> {}", &mut product, &mut price);
//! assert!(result.is_ok());
//! assert_eq!(product, "Candy");
//! assert_eq!(price, 2.75);
//! ```
//!
//! Named capture binds fields to variables in scope, like the printing
//! macros do:
//!
//! ```
//! use descan::scan;
//!
//! let mut x = 0i32;
//! let mut y = 0i32;
//! scan!("x=10, y=20", "x={x}, y={y}").into_result().unwrap();
//! assert_eq!((x, y), (10, 20));
//! ```
//!
//! # Security
//!
//! - `#![forbid(unsafe_code)]`: no unsafe code anywhere in the workspace.
//! - Bounded span destinations ([`BoundedString`]) make the classic
//!   unbounded-`%s` overflow unrepresentable: truncation at the bound is
//!   defined, successful behavior.
//! - Numeric overflow during scanning is a reported error, never a wrap.
//! - The macros enforce compile-time limits on format-string length and
//!   field count, so a hostile format string cannot stall the compiler.

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod args;
mod context;
mod engine;
mod error;
mod format;
mod locale;
mod result;
mod scanner;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use args::{ScanArg, ScanArgs, ScanTarget};
pub use context::{Checkpoint, ScanContext};
pub use engine::{vscan, vscan_with_locale};
pub use error::{FieldError, FormatError, InputError, ScanError};
pub use format::{Field, FormatToken, SpecOptions, Tokens};
pub use locale::Locale;
pub use result::ScanResult;
pub use scanner::{
    BoolSpec, BoundedString, CharSpec, FloatSpec, IntBase, IntSpec, Scannable, StrSpec,
};

/// Scan a string against a format string: the variadic call surface.
///
/// ```ignore
/// scan!(input_expr, "format string", &mut args...) -> ScanResult
/// ```
///
/// The format string is validated at compile time: balanced braces and
/// escapes, arg-id syntax, no mixing of implicit and explicit indices, and
/// arity against the supplied arguments. Fields may be anonymous (`{}`,
/// consuming the explicit arguments in order), explicitly indexed (`{0}`),
/// or named (`{ident}`, capturing the in-scope variable of that name).
/// Everything after `:` in a field is handed to the destination type's
/// [`Scannable`] implementation.
///
/// Every destination is borrowed mutably for the whole call, so two fields
/// cannot target overlapping places. Scanning into two elements of one array
/// needs disjoint slices:
///
/// ```
/// use descan::scan;
///
/// let mut arr = [0i32; 2];
/// let (head, tail) = arr.split_at_mut(1);
/// scan!("3 4", "{} {}", &mut head[0], &mut tail[0]).into_result().unwrap();
/// assert_eq!(arr, [3, 4]);
/// ```
pub use descan_macros::scan;

/// Read one line from stdin and scan it; returns `std::io::Result<usize>`
/// with the number of scanned arguments.
///
/// Flushes stdout first (so prompts appear), trims the trailing newline,
/// and converts scan failures into `std::io::ErrorKind::InvalidInput`.
/// Destinations resolve in the caller's scope, even when named like the
/// expansion's own plumbing:
///
/// ```no_run
/// use descan::scanln;
///
/// let mut line = String::new();
/// let mut buffer = String::new();
/// scanln!("{line} {buffer}").unwrap();
/// ```
pub use descan_macros::scanln;
