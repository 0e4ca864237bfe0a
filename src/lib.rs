// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Solutions to the first ten days of [Advent of Code 2020]
//!
//! Each day lives in its own module, exposing `part1` and `part2` functions which take the raw
//! puzzle input and return the answer. None of them perform any I/O.
//!
//! The most involved piece is the [handheld] module, which simulates the boot code of the
//! handheld game console from [Day 8], detects infinite loops, and searches for the single
//! corrupted instruction that keeps the program from terminating.
//!
//! # Example
//!
//! ```rust
//! use aoc2020::prelude::*;
//! let program = Program::parse("nop +0\nacc +1\njmp -2\n").unwrap();
//!
//! assert_eq!(run(&program).unwrap(), RunResult::Looped(1));
//! ```
//!
//! [Advent of Code 2020]: https://adventofcode.com/2020
//! [Day 8]: https://adventofcode.com/2020/day/8

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::num::ParseIntError;

pub mod handheld;
pub mod input;
pub mod parse;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;

/// A small module that re-exports items needed when working with the handheld simulator
pub mod prelude {
    pub use crate::handheld::{
        Fix, Handheld, HandheldError, Instruction, OpCode, Program, RunResult, Step, find_fix, run,
    };
    pub use crate::{Error, Result};
}

use handheld::HandheldError;
use parse::ParseErrors;

/// Shorthand for results of the daily solutions
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
/// An error occured while solving a puzzle
pub enum Error {
    /// The input did not match the day's grammar
    Parse(ParseErrors),
    /// A line that should hold a single integer didn't
    InvalidInteger {
        /// 1-based line number
        line: usize,
        /// The underlying integer parse failure
        source: ParseIntError,
    },
    /// A line was malformed in a way specific to the day's format
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        reason: &'static str,
    },
    /// The handheld console simulator failed
    Handheld(HandheldError),
    /// No single `jmp` to `nop` swap lets the boot code terminate
    NoFixFound,
    /// Two adjacent adapters can't be connected
    InvalidJoltage {
        /// The lower joltage
        from: i64,
        /// The higher joltage
        to: i64,
    },
    /// The preamble is too short to form a pair, or leaves nothing to check
    PreambleTooShort,
    /// The input has no answer for the named search
    NoSolution(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(errs) => write!(f, "{errs}"),
            Error::InvalidInteger { line, source } => {
                write!(f, "line {line}: could not parse integer: {source}")
            }
            Error::InvalidLine { line, reason } => write!(f, "line {line}: {reason}"),
            Error::Handheld(e) => write!(f, "handheld console error: {e}"),
            Error::NoFixFound => write!(f, "no single jmp -> nop swap terminates the program"),
            Error::InvalidJoltage { from, to } => {
                write!(f, "a {to} jolt adapter can't be connected to a {from} jolt one")
            }
            Error::PreambleTooShort => {
                write!(f, "preamble must hold at least 2 values and leave some to check")
            }
            Error::NoSolution(what) => write!(f, "no solution found: {what}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidInteger { source, .. } => Some(source),
            Error::Handheld(e) => Some(e),
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseErrors> for Error {
    fn from(errs: ParseErrors) -> Self {
        Self::Parse(errs)
    }
}

impl From<HandheldError> for Error {
    fn from(err: HandheldError) -> Self {
        match err {
            HandheldError::Parse(errs) => Self::Parse(errs),
            err => Self::Handheld(err),
        }
    }
}
