//! The default format-spec mini-language shared by the built-in scanners.

use crate::error::FormatError;

/// The parsed shape of a default-grammar specifier: `[L] [conv-char] [width]`.
///
/// - `L` selects the locale-aware variant for this field.
/// - `conv` is a single alphabetic conversion character; its meaning belongs
///   to the destination type (for integers it selects the base).
/// - `width` caps how many characters the field may consume. Width 0 is a
///   legal zero-width match.
///
/// The raw specifier slice is opaque to the engine; user scanners are free to
/// ignore this grammar entirely and interpret the slice themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecOptions {
    pub locale_aware: bool,
    pub conv: Option<char>,
    pub width: Option<usize>,
}

impl SpecOptions {
    /// Parse a raw specifier slice. An empty slice parses to all-defaults.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let mut rest = raw;

        let locale_aware = match rest.strip_prefix('L') {
            Some(stripped) => {
                rest = stripped;
                true
            }
            None => false,
        };

        let conv = match rest.chars().next() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                rest = &rest[ch.len_utf8()..];
                Some(ch)
            }
            _ => None,
        };

        let width = if rest.is_empty() {
            None
        } else if rest.bytes().all(|b| b.is_ascii_digit()) {
            Some(
                rest.parse::<usize>()
                    .map_err(|_| FormatError::BadSpec(raw.into()))?,
            )
        } else {
            return Err(FormatError::BadSpec(raw.into()));
        };

        Ok(Self {
            locale_aware,
            conv,
            width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_is_all_defaults() {
        assert_eq!(SpecOptions::parse("").unwrap(), SpecOptions::default());
    }

    #[test]
    fn conv_and_width() {
        let options = SpecOptions::parse("x8").unwrap();
        assert_eq!(options.conv, Some('x'));
        assert_eq!(options.width, Some(8));
        assert!(!options.locale_aware);
    }

    #[test]
    fn locale_flag_comes_first() {
        let options = SpecOptions::parse("Lf").unwrap();
        assert!(options.locale_aware);
        assert_eq!(options.conv, Some('f'));
        assert_eq!(options.width, None);
    }

    #[test]
    fn bare_width() {
        let options = SpecOptions::parse("12").unwrap();
        assert_eq!(options.conv, None);
        assert_eq!(options.width, Some(12));
    }

    #[test]
    fn zero_width_is_legal() {
        assert_eq!(SpecOptions::parse("s0").unwrap().width, Some(0));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(matches!(
            SpecOptions::parse("d4x"),
            Err(FormatError::BadSpec(_))
        ));
        assert!(matches!(
            SpecOptions::parse("#"),
            Err(FormatError::BadSpec(_))
        ));
    }
}
