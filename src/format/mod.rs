//! Format string tokenization.
//!
//! A format string is literal text interleaved with replacement fields of the
//! shape `{ [arg-id] [':' format-spec] }`. `{{` and `}}` are escapes for
//! literal braces. Tokenization is purely a function of the format string:
//! it never looks at the input or the argument types, which is what lets the
//! `scan!` macro run the same grammar at compile time.
//!
//! Tokens are produced one at a time by [`Tokens`], so the engine can walk a
//! format string twice (validate, then execute) without allocating.

use nom::{
    IResult, Parser,
    bytes::complete::take_while,
    character::complete::{char as brace, digit1},
    combinator::opt,
    sequence::{delimited, preceded},
};

use crate::error::FormatError;

mod spec;

pub use spec::SpecOptions;

/// One replacement field: `{ [arg-id] [':' format-spec] }`.
///
/// `index` is `None` for implicit `{}` fields. `spec` is the opaque slice
/// after `:`, owned by the field and interpreted only by the matched scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'f> {
    pub index: Option<usize>,
    pub spec: Option<&'f str>,
}

impl<'f> Field<'f> {
    /// The specifier slice, empty when the field had none.
    pub fn raw_spec(&self) -> &'f str {
        self.spec.unwrap_or("")
    }
}

/// One token of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatToken<'f> {
    /// Literal text that must match the input (whitespace elides, see engine).
    /// Escaped braces arrive as one-character literals `"{"` / `"}"`.
    Literal(&'f str),
    /// A replacement field.
    Field(Field<'f>),
}

/// Streaming tokenizer over a format string.
///
/// Yields `Result` items; after the first error the iterator is fused.
/// Mixing implicit and explicit arg-ids is detected here, statefully, since
/// it is a property of the whole format string rather than of one field.
#[derive(Debug)]
pub struct Tokens<'f> {
    format: &'f str,
    rest: &'f str,
    seen_implicit: bool,
    seen_explicit: bool,
    failed: bool,
}

impl<'f> Tokens<'f> {
    pub fn new(format: &'f str) -> Self {
        Self {
            format,
            rest: format,
            seen_implicit: false,
            seen_explicit: false,
            failed: false,
        }
    }

    fn offset(&self) -> usize {
        self.format.len() - self.rest.len()
    }

    fn field(&mut self) -> Result<FormatToken<'f>, FormatError> {
        let offset = self.offset();
        let (remaining, (id, spec)) = parse_field(self.rest).map_err(|_| {
            if self.rest.contains('}') {
                FormatError::FieldSyntax(offset)
            } else {
                FormatError::UnmatchedOpen(offset)
            }
        })?;

        let index = match id {
            Some(digits) => Some(
                digits
                    .parse::<usize>()
                    .map_err(|_| FormatError::IndexOverflow(offset))?,
            ),
            None => None,
        };

        match index {
            Some(_) => self.seen_explicit = true,
            None => self.seen_implicit = true,
        }
        if self.seen_implicit && self.seen_explicit {
            return Err(FormatError::MixedIndexing);
        }

        self.rest = remaining;
        Ok(FormatToken::Field(Field { index, spec }))
    }
}

impl<'f> Iterator for Tokens<'f> {
    type Item = Result<FormatToken<'f>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }

        if let Some(remaining) = self.rest.strip_prefix("{{") {
            self.rest = remaining;
            return Some(Ok(FormatToken::Literal("{")));
        }
        if let Some(remaining) = self.rest.strip_prefix("}}") {
            self.rest = remaining;
            return Some(Ok(FormatToken::Literal("}")));
        }

        if self.rest.starts_with('{') {
            let token = self.field();
            self.failed = token.is_err();
            return Some(token);
        }
        if self.rest.starts_with('}') {
            self.failed = true;
            return Some(Err(FormatError::UnmatchedClose(self.offset())));
        }

        // Literal run up to the next brace (or the end of the format).
        let end = self
            .rest
            .find(['{', '}'])
            .unwrap_or(self.rest.len());
        let (run, remaining) = self.rest.split_at(end);
        self.rest = remaining;
        Some(Ok(FormatToken::Literal(run)))
    }
}

fn parse_field(input: &str) -> IResult<&str, (Option<&str>, Option<&str>)> {
    delimited(
        brace('{'),
        (
            opt(digit1),
            opt(preceded(brace(':'), take_while(|c| c != '{' && c != '}'))),
        ),
        brace('}'),
    )
    .parse(input)
}
