// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 8]: Handheld Halting, solved with the [handheld](crate::handheld) simulator
//!
//! [Day 8]: https://adventofcode.com/2020/day/8

use crate::handheld::{Program, find_fix, run};
use crate::{Error, Result};

/// The accumulator just before any instruction runs a second time
///
/// Boot code which terminates instead has its final accumulator returned.
pub fn part1(input: &str) -> Result<i64> {
    Ok(run(&Program::parse(input)?)?.accumulator())
}

/// The accumulator once the corrupted `jmp` has been changed to `nop` and the program terminates
pub fn part2(input: &str) -> Result<i64> {
    find_fix(&Program::parse(input)?)?
        .map(|fix| fix.accumulator)
        .ok_or(Error::NoFixFound)
}
