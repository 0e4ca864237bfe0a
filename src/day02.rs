// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 2]: Password Philosophy
//!
//! Each line holds a policy and a password, written as `1-3 a: abcde`.
//!
//! [Day 2]: https://adventofcode.com/2020/day/2

use crate::Result;
use crate::parse::{RichErr, padded, run_parser, unsigned, with_sep};
use chumsky::prelude::*;

/// A password, along with the policy it was set under
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Policy<'a> {
    /// The first number of the policy
    pub low: usize,
    /// The second number of the policy
    pub high: usize,
    /// The letter the policy is about
    pub letter: char,
    /// The password itself
    pub password: &'a str,
}

impl Policy<'_> {
    /// Valid under the sled rental policy: `letter` appears between `low` and `high` times
    pub fn is_valid_count(&self) -> bool {
        let count = self.password.chars().filter(|&c| c == self.letter).count();
        (self.low..=self.high).contains(&count)
    }

    /// Valid under the toboggan policy: exactly one of the 1-based positions `low` and `high`
    /// holds `letter`
    pub fn is_valid_position(&self) -> bool {
        let at = |pos: usize| {
            pos.checked_sub(1)
                .and_then(|i| self.password.chars().nth(i))
                .is_some_and(|c| c == self.letter)
        };
        at(self.low) ^ at(self.high)
    }
}

fn policy<'a>() -> impl Parser<'a, &'a str, Policy<'a>, RichErr<'a>> {
    let letter = any()
        .filter(|c: &char| c.is_alphanumeric())
        .labelled("policy letter");
    let password = any()
        .filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .to_slice()
        .labelled("password");

    unsigned()
        .then_ignore(just('-'))
        .then(with_sep!(unsigned()))
        .then(letter)
        .then_ignore(with_sep!(just(':')))
        .then(password)
        .map(|(((low, high), letter), password)| Policy {
            low,
            high,
            letter,
            password,
        })
        .labelled("password policy")
        .as_context()
}

fn policies<'a>() -> impl Parser<'a, &'a str, Vec<Policy<'a>>, RichErr<'a>> {
    padded!(policy().or_not())
        .separated_by(text::newline())
        .collect::<Vec<_>>()
        .map(|lines| lines.into_iter().flatten().collect())
}

/// Parse every non-blank line of `input` as a [Policy]
pub fn parse(input: &str) -> Result<Vec<Policy<'_>>> {
    Ok(run_parser(policies(), input)?)
}

/// Number of passwords valid under [`Policy::is_valid_count`]
pub fn part1(input: &str) -> Result<usize> {
    Ok(parse(input)?.iter().filter(|p| p.is_valid_count()).count())
}

/// Number of passwords valid under [`Policy::is_valid_position`]
pub fn part2(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .iter()
        .filter(|p| p.is_valid_position())
        .count())
}
