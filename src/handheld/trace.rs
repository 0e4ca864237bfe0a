// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Opt-in tracing of the instructions a [Handheld] executes
use std::fmt::{self, Display};

use super::{Handheld, Instruction, OpCode};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// A record of a single executed instruction, which can be queried with its various methods, or
/// converted into a [String] using its [Display] impl.
pub struct TracedInstr {
    instr_ptr: usize,
    instruction: Instruction,
    acc_before: i64,
    acc_after: i64,
    next_ptr: usize,
}

impl TracedInstr {
    pub(super) const fn new(
        instr_ptr: usize,
        instruction: Instruction,
        acc_before: i64,
        acc_after: i64,
        next_ptr: usize,
    ) -> Self {
        Self {
            instr_ptr,
            instruction,
            acc_before,
            acc_after,
            next_ptr,
        }
    }

    /// Return the instruction pointer's position when the traced instruction was executed
    pub fn instr_ptr(&self) -> usize {
        self.instr_ptr
    }

    /// Return the instruction that was executed
    pub fn instruction(&self) -> Instruction {
        self.instruction
    }

    /// Return the accumulator before the instruction ran
    pub fn acc_before(&self) -> i64 {
        self.acc_before
    }

    /// Return the accumulator after the instruction ran
    pub fn acc_after(&self) -> i64 {
        self.acc_after
    }

    /// Return where the instruction pointer moved to
    pub fn next_ptr(&self) -> usize {
        self.next_ptr
    }
}

impl Handheld {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    ///# use aoc2020::prelude::*;
    /// let mut handheld = Handheld::new("acc +3\njmp -1".parse().unwrap());
    /// assert!(handheld.start_trace().is_none());
    /// assert_eq!(handheld.run().unwrap(), RunResult::Looped(3));
    /// let trace = handheld.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 2);
    /// assert_eq!(
    ///     trace.0[1].to_string(),
    ///     "ran instruction at 0001: jmp -1 | jumped to 0000"
    /// );
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Handheld::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, PartialEq, Clone)]
/// A log of instructions that a [Handheld] has executed since a call to
/// [Handheld::start_trace]
///
/// see [Handheld::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    pub(super) fn push(&mut self, instr: TracedInstr) {
        self.0.push(instr);
    }

    pub(super) fn new() -> Self {
        Self(Vec::new())
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ran instruction at {:0>4}: {} | ",
            self.instr_ptr, self.instruction
        )?;
        match self.instruction.op {
            OpCode::Nop => write!(f, "no-op"),
            OpCode::Acc => write!(f, "acc {} -> {}", self.acc_before, self.acc_after),
            OpCode::Jmp => write!(f, "jumped to {:0>4}", self.next_ptr),
        }
    }
}
