// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! A simulator for the handheld game console's boot code from [Day 8]
//!
//! The boot code is a [Program] of [Instruction]s, each an [OpCode] with a signed argument:
//!
//! * `nop` does nothing and moves on to the next instruction
//! * `acc` adds its argument to the accumulator, then moves on
//! * `jmp` moves the instruction pointer by its argument
//!
//! A [Handheld] runs a program until the instruction pointer lands exactly one past the last
//! instruction, or an instruction is about to run for the second time. Neither is an error, and
//! both are reported by [RunResult].
//!
//! # Example
//!
//! ```rust
//! use aoc2020::prelude::*;
//! let program: Program = "nop +0\nacc +1\njmp +4\nacc +3\njmp -3\nacc -99\nacc +1\njmp -4\nacc +6"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(run(&program).unwrap(), RunResult::Looped(5));
//! assert_eq!(
//!     find_fix(&program).unwrap(),
//!     Some(Fix { index: 7, accumulator: 8 })
//! );
//! ```
//!
//! [Day 8]: https://adventofcode.com/2020/day/8

mod fmt_impls;
mod parse;
pub mod trace;

use crate::parse::{ParseErrors, run_parser};
use std::ops::Index;
use std::str::FromStr;

pub use trace::{Trace, TracedInstr};

/// The operation performed by an [Instruction]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OpCode {
    /// No operation
    #[doc(alias = "nop")]
    Nop,
    /// Add the argument to the accumulator
    #[doc(alias = "acc")]
    Acc,
    /// Jump relative to the current instruction
    #[doc(alias = "jmp")]
    Jmp,
}

/// A single line of boot code
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Instruction {
    /// What the instruction does
    pub op: OpCode,
    /// The signed argument
    pub arg: i64,
}

impl Instruction {
    /// Construct a new [Instruction]
    pub const fn new(op: OpCode, arg: i64) -> Self {
        Self { op, arg }
    }
}

impl FromStr for Instruction {
    type Err = ParseErrors;

    /// Parse a single instruction, such as `jmp -4`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run_parser(parse::single_instruction(), s)
    }
}

/// A non-empty sequence of [Instruction]s
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Program(Box<[Instruction]>);

impl Program {
    /// Collect `instructions` into a [Program], failing if there are none
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Result<Self, HandheldError> {
        let instructions: Box<[Instruction]> = instructions.into_iter().collect();
        if instructions.is_empty() {
            Err(HandheldError::EmptyProgram)
        } else {
            Ok(Self(instructions))
        }
    }

    /// Parse a program with one instruction per line. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, HandheldError> {
        Self::new(run_parser(parse::program(), text).map_err(HandheldError::Parse)?)
    }

    /// The number of instructions in the program
    #[allow(clippy::len_without_is_empty, reason = "programs are never empty")]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The instructions of the program, in order
    pub fn instructions(&self) -> &[Instruction] {
        &self.0
    }

    /// Return a copy of the program with the instruction at `index` changed to `op`. Its argument
    /// is left unchanged.
    ///
    /// Panics if `index` is out of range.
    pub fn with_op(&self, index: usize, op: OpCode) -> Self {
        let mut patched = self.clone();
        patched.0[index].op = op;
        patched
    }
}

impl FromStr for Program {
    type Err = HandheldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

/// How a complete run of a [Program] ended
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RunResult {
    /// The instruction pointer moved to one past the last instruction
    Terminated(i64),
    /// An instruction was about to run a second time
    Looped(i64),
}

impl RunResult {
    /// The accumulator at the point the run ended
    pub const fn accumulator(self) -> i64 {
        match self {
            RunResult::Terminated(acc) | RunResult::Looped(acc) => acc,
        }
    }
}

/// The outcome of a single call to [`Handheld::step`]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    /// An instruction ran and there are more to run
    Running,
    /// The run has ended with [`RunResult::Looped`]
    Looped(i64),
    /// The run has ended with [`RunResult::Terminated`]
    Terminated(i64),
}

impl From<RunResult> for Step {
    fn from(result: RunResult) -> Self {
        match result {
            RunResult::Terminated(acc) => Step::Terminated(acc),
            RunResult::Looped(acc) => Step::Looped(acc),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
/// An error occured when parsing or running boot code
pub enum HandheldError {
    /// The boot code could not be parsed
    Parse(ParseErrors),
    /// The boot code had no instructions
    EmptyProgram,
    /// A jump tried to move the instruction pointer before the start of the program, or more than
    /// one past its end
    OutOfBounds {
        /// Location of the offending instruction
        ip: usize,
        /// Where it tried to jump to
        target: i64,
    },
    /// The accumulator overflowed an `i64`
    AccumulatorOverflow {
        /// Location of the offending instruction
        ip: usize,
    },
}

/// The result of a successful search by [find_fix]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Fix {
    /// Index of the `jmp` instruction that was changed to `nop`
    pub index: usize,
    /// The accumulator once the patched program terminated
    pub accumulator: i64,
}

/// Execution state for a single run of a [Program]
///
/// Each [Handheld] owns its own copy of the program, so runs never interfere with one another.
#[derive(Debug, PartialEq, Clone)]
pub struct Handheld {
    program: Program,
    ip: usize,
    accumulator: i64,
    visited: Box<[bool]>,
    finished: Option<RunResult>,
    trace: Option<Trace>,
}

impl Handheld {
    /// Create a new handheld, with the instruction pointer and accumulator both at `0`
    pub fn new(program: Program) -> Self {
        let visited = vec![false; program.len()].into_boxed_slice();
        Self {
            program,
            ip: 0,
            accumulator: 0,
            visited,
            finished: None,
            trace: None,
        }
    }

    /// The index of the next instruction to execute
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// The current value of the accumulator
    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    /// The program being run
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Whether the instruction at `index` has run during this attempt
    pub fn has_executed(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    /// Execute a single instruction
    ///
    /// If the instruction at the pointer has already run, nothing is executed and
    /// [`Step::Looped`] is returned. Once a run has ended, every further call returns the same
    /// outcome.
    ///
    /// On error, the handheld is left exactly as it was before the call.
    pub fn step(&mut self) -> Result<Step, HandheldError> {
        if let Some(result) = self.finished {
            return Ok(result.into());
        }
        let ip = self.ip;
        if self.visited[ip] {
            self.finished = Some(RunResult::Looped(self.accumulator));
            return Ok(Step::Looped(self.accumulator));
        }

        let instruction = self.program[ip];
        let (offset, accumulator) = match instruction.op {
            OpCode::Nop => (1, self.accumulator),
            OpCode::Acc => (
                1,
                self.accumulator
                    .checked_add(instruction.arg)
                    .ok_or(HandheldError::AccumulatorOverflow { ip })?,
            ),
            OpCode::Jmp => (instruction.arg, self.accumulator),
        };
        let next = isize::try_from(offset)
            .ok()
            .and_then(|offset| ip.checked_add_signed(offset))
            .filter(|&next| next <= self.program.len())
            .ok_or_else(|| HandheldError::OutOfBounds {
                ip,
                target: i64::try_from(ip)
                    .unwrap_or(i64::MAX)
                    .saturating_add(offset),
            })?;

        if let Some(trace) = self.trace.as_mut() {
            trace.push(TracedInstr::new(ip, instruction, self.accumulator, accumulator, next));
        }
        self.visited[ip] = true;
        self.accumulator = accumulator;
        self.ip = next;

        if next == self.program.len() {
            self.finished = Some(RunResult::Terminated(accumulator));
            Ok(Step::Terminated(accumulator))
        } else {
            Ok(Step::Running)
        }
    }

    /// Execute until the program terminates or loops
    ///
    /// This takes at most one step more than the program has instructions.
    pub fn run(&mut self) -> Result<RunResult, HandheldError> {
        loop {
            match self.step()? {
                Step::Running => (),
                Step::Looped(acc) => break Ok(RunResult::Looped(acc)),
                Step::Terminated(acc) => break Ok(RunResult::Terminated(acc)),
            }
        }
    }
}

/// Run a copy of `program` on a fresh [Handheld]
pub fn run(program: &Program) -> Result<RunResult, HandheldError> {
    Handheld::new(program.clone()).run()
}

/// Search for a single `jmp` which, once changed to `nop`, lets `program` terminate
///
/// Candidates are tried in the order the `jmp` instructions appear, each on its own copy of the
/// program, and the first one to terminate is returned. Returns [`None`] if none do.
pub fn find_fix(program: &Program) -> Result<Option<Fix>, HandheldError> {
    let jumps = program
        .instructions()
        .iter()
        .enumerate()
        .filter(|(_, instruction)| instruction.op == OpCode::Jmp)
        .map(|(index, _)| index);

    for index in jumps {
        let candidate = program.with_op(index, OpCode::Nop);
        if let RunResult::Terminated(accumulator) = Handheld::new(candidate).run()? {
            return Ok(Some(Fix { index, accumulator }));
        }
    }
    Ok(None)
}
