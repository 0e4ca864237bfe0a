// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::{HandheldError, Instruction, OpCode, Program, RunResult};
use itertools::Itertools;

use std::error::Error;
use std::fmt::{self, Display};

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Nop => write!(f, "nop"),
            OpCode::Acc => write!(f, "acc"),
            OpCode::Jmp => write!(f, "jmp"),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.op, self.arg)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format("\n"))
    }
}

impl Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunResult::Terminated(acc) => write!(f, "terminated with accumulator {acc}"),
            RunResult::Looped(acc) => write!(f, "looped with accumulator {acc}"),
        }
    }
}

impl Display for HandheldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandheldError::Parse(errs) => write!(f, "{errs}"),
            HandheldError::EmptyProgram => write!(f, "program has no instructions"),
            HandheldError::OutOfBounds { ip, target } => {
                write!(f, "instruction {ip} tried to jump out of bounds to {target}")
            }
            HandheldError::AccumulatorOverflow { ip } => {
                write!(f, "accumulator overflowed at instruction {ip}")
            }
        }
    }
}

impl Error for HandheldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandheldError::Parse(errs) => Some(errs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_display_reparses() {
        let text = "nop +0\nacc +1\njmp -1";
        let program: Program = text.parse().unwrap();
        assert_eq!(program.to_string(), text);
        assert_eq!(program.to_string().parse(), Ok(program));
    }
}
