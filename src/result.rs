//! The partial-success result of one scan call.

use crate::error::ScanError;

/// Outcome of one top-level scan invocation.
///
/// Constructed once per call and returned by value, never thrown. On failure
/// the already-scanned leading arguments keep their values (`read_count`
/// says how many), the failed argument is unspecified, and `remaining` starts
/// at the position before the failed field, so a caller can correct the
/// input and retry from exactly there.
///
/// `remaining` aliases the original input's storage, like any subslice.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult<'i> {
    /// Number of arguments successfully scanned. Counts arguments, not
    /// characters.
    pub read_count: usize,
    /// The unconsumed tail of the input.
    pub remaining: &'i str,
    /// `None` on full success; otherwise what stopped the scan.
    pub error: Option<ScanError>,
}

impl<'i> ScanResult<'i> {
    /// True when every field of the format string was satisfied.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse into a `Result`, trading partial-success detail for `?`
    /// ergonomics: `Ok(read_count)` or the recorded error.
    pub fn into_result(self) -> Result<usize, ScanError> {
        match self.error {
            None => Ok(self.read_count),
            Some(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    #[test]
    fn into_result_keeps_the_count_on_success() {
        let result = ScanResult {
            read_count: 2,
            remaining: "tail",
            error: None,
        };
        assert!(result.is_ok());
        assert_eq!(result.into_result(), Ok(2));
    }

    #[test]
    fn into_result_surfaces_the_error() {
        let result = ScanResult {
            read_count: 1,
            remaining: "x",
            error: Some(ScanError::Argument {
                index: 1,
                source: InputError::EndOfInput,
            }),
        };
        assert!(!result.is_ok());
        assert!(result.into_result().is_err());
    }
}
