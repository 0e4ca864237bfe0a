// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Shared parsing machinery for the days whose inputs have a real grammar
//!
//! The grammars themselves are built with [chumsky] in each day's module. This module holds the
//! combinators they have in common, and [ParseError], an owned rendition of chumsky's [Rich]
//! errors which can outlive the input it was produced from.

use chumsky::error::Rich;
use chumsky::prelude::*;

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Range;

pub(crate) type RichErr<'a> = extra::Err<Rich<'a, char>>;

/// Surround `$inner` with optional inline whitespace
macro_rules! padded {
    ($inner: expr) => {{ $inner.padded_by(::chumsky::text::inline_whitespace()) }};
}

/// Require at least one inline whitespace character after `$inner`
macro_rules! with_sep {
    ($inner: expr) => {{ $inner.then_ignore(::chumsky::text::inline_whitespace().at_least(1)) }};
}

pub(crate) use padded;
pub(crate) use with_sep;

#[derive(Debug, PartialEq, Clone)]
/// A single error encountered while parsing puzzle input
pub struct ParseError {
    /// Byte range within the input where the error occured
    pub span: Range<usize>,
    /// The character found at `span`, or [`None`] if the input ended
    pub found: Option<char>,
    /// Descriptions of what would have been accepted instead
    pub expected: Vec<String>,
    /// A complete description of the error
    pub message: String,
}

impl From<Rich<'_, char>> for ParseError {
    fn from(err: Rich<'_, char>) -> Self {
        Self {
            span: err.span().into_range(),
            found: err.found().copied(),
            expected: err.expected().map(ToString::to_string).collect(),
            message: err.to_string(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {}", self.span.start, self.span.end, self.message)
    }
}

#[derive(Debug, PartialEq, Clone)]
/// All of the errors reported by one parse
pub struct ParseErrors(pub Vec<ParseError>);

impl Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0[..] {
            [] => write!(f, "failed to parse input"),
            [err] => write!(f, "failed to parse input at {err}"),
            errs => {
                writeln!(f, "failed to parse input:")?;
                for err in errs {
                    writeln!(f, "- {err}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for ParseErrors {}

/// Run `parser` over the entirety of `text`
pub(crate) fn run_parser<'a, T>(
    parser: impl Parser<'a, &'a str, T, RichErr<'a>>,
    text: &'a str,
) -> Result<T, ParseErrors> {
    parser
        .parse(text)
        .into_result()
        .map_err(|errs| ParseErrors(errs.into_iter().map(ParseError::from).collect()))
}

/// Decimal digits, leading zeros included
fn digits<'a>() -> impl Parser<'a, &'a str, &'a str, RichErr<'a>> + Clone {
    text::digits(10).at_least(1).to_slice()
}

/// A decimal integer with an optional leading `+` or `-`
///
/// Out of range values are emitted as errors of their own rather than competing with the
/// grammar's alternatives.
pub(crate) fn signed_int<'a>() -> impl Parser<'a, &'a str, i64, RichErr<'a>> + Clone {
    one_of("+-")
        .or_not()
        .then(digits())
        .to_slice()
        .labelled("signed integer")
        .validate(|s: &str, e, emitter| {
            s.parse::<i64>().unwrap_or_else(|err| {
                let msg = format!("error parsing {s} as i64: {err}");
                emitter.emit(Rich::custom(e.span(), msg));
                0
            })
        })
}

/// An unsigned decimal integer
pub(crate) fn unsigned<'a>() -> impl Parser<'a, &'a str, usize, RichErr<'a>> + Clone {
    digits()
        .labelled("unsigned integer")
        .validate(|s: &str, e, emitter| {
            s.parse::<usize>().unwrap_or_else(|err| {
                let msg = format!("error parsing {s} as usize: {err}");
                emitter.emit(Rich::custom(e.span(), msg));
                0
            })
        })
}

/// A single word, such as an adjective or colour
pub(crate) fn word<'a>() -> impl Parser<'a, &'a str, &'a str, RichErr<'a>> + Clone {
    text::ascii::ident().labelled("word")
}
