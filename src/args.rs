//! Type-erased argument capture for the variadic call surface.
//!
//! `scan!` expands to a stack-resident slice of [`ScanArg`], one erased
//! reference per destination, handed to [`vscan`](crate::vscan) as a
//! [`ScanArgs`] view. The erasure is a plain trait object; scanner resolution
//! still happened at compile time inside the blanket [`ScanTarget`] impl, so
//! there is no registry lookup and no heap allocation per call.

use crate::context::ScanContext;
use crate::error::{FieldError, FormatError};
use crate::scanner::Scannable;

/// Object-safe facade over one destination's [`Scannable`] implementation.
pub trait ScanTarget {
    /// Validate the specifier without scanning. Run for every field before
    /// any input is consumed.
    fn check_spec(&self, raw: &str) -> Result<(), FormatError>;

    /// Interpret the specifier and scan one value from the context.
    fn scan_field(&mut self, raw: &str, ctx: &mut ScanContext<'_>) -> Result<(), FieldError>;
}

impl<T: Scannable> ScanTarget for T {
    fn check_spec(&self, raw: &str) -> Result<(), FormatError> {
        T::parse_spec(raw).map(drop)
    }

    fn scan_field(&mut self, raw: &str, ctx: &mut ScanContext<'_>) -> Result<(), FieldError> {
        let spec = T::parse_spec(raw)?;
        self.scan(ctx, &spec)?;
        Ok(())
    }
}

/// One bound output argument: an erased mutable reference to a destination.
pub struct ScanArg<'a> {
    target: &'a mut dyn ScanTarget,
}

impl<'a> ScanArg<'a> {
    pub fn new<T: Scannable>(target: &'a mut T) -> Self {
        Self { target }
    }
}

impl std::fmt::Debug for ScanArg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanArg").finish_non_exhaustive()
    }
}

/// Ordered view over the bound argument references for one scan call.
///
/// Borrows a caller-owned slice; the engine holds it only for the duration
/// of the call and never retains the references afterward.
#[derive(Debug)]
pub struct ScanArgs<'a, 'v> {
    args: &'v mut [ScanArg<'a>],
}

impl<'a, 'v> ScanArgs<'a, 'v> {
    pub fn new(args: &'v mut [ScanArg<'a>]) -> Self {
        Self { args }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub(crate) fn check_spec(&self, index: usize, raw: &str) -> Result<(), FormatError> {
        let arg = self
            .args
            .get(index)
            .ok_or(FormatError::IndexOutOfRange {
                index,
                arity: self.args.len(),
            })?;
        arg.target.check_spec(raw)
    }

    pub(crate) fn scan_field(
        &mut self,
        index: usize,
        raw: &str,
        ctx: &mut ScanContext<'_>,
    ) -> Result<(), FieldError> {
        let arity = self.args.len();
        let arg = self
            .args
            .get_mut(index)
            .ok_or(FormatError::IndexOutOfRange { index, arity })?;
        arg.target.scan_field(raw, ctx)
    }
}
