//! Compile-time limits and capacity hints for the scan macros.
//!
//! The limits bound how much work a single `scan!` invocation can demand
//! from the compiler; every legitimate format string fits far inside them.

/// Maximum length of a format string in bytes.
pub const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of tokens (literal runs plus fields) in a format string.
pub const MAX_TOKENS: usize = 256;

/// Maximum length of an arg-id (index digits or captured identifier).
pub const MAX_ARG_ID_LEN: usize = 128;

/// Initial capacity hint for the token vector; most format strings have a
/// handful of tokens.
pub const TOKENS_INITIAL_CAPACITY: usize = 4;

/// Initial capacity hint for literal runs between fields; separators are
/// typically short (": ", " -> ").
pub const TEXT_SEGMENT_CAPACITY: usize = 16;
