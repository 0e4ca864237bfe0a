// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 7]: Handy Haversacks
//!
//! Each rule says which bags, and how many of each, a bag of some colour must directly contain:
//!
//! ```text
//! light red bags contain 1 bright white bag, 2 muted yellow bags.
//! faded blue bags contain no other bags.
//! ```
//!
//! [Day 7]: https://adventofcode.com/2020/day/7

use crate::parse::{RichErr, padded, run_parser, unsigned, with_sep, word};
use crate::{Error, Result};
use chumsky::prelude::*;
use std::collections::{HashMap, HashSet};

/// The bag everyone is interested in
pub const TARGET: &str = "shiny gold";

/// The contents of a single bag, as `(count, colour)` pairs
pub type Contents<'a> = Vec<(usize, &'a str)>;

/// A colour such as `light red`, followed by `bag` or `bags`
fn bag<'a>() -> impl Parser<'a, &'a str, &'a str, RichErr<'a>> + Clone {
    with_sep!(word())
        .then(word())
        .to_slice()
        .then_ignore(text::inline_whitespace().at_least(1))
        .then_ignore(just("bags").or(just("bag")))
        .labelled("bag colour")
}

fn contents<'a>() -> impl Parser<'a, &'a str, Contents<'a>, RichErr<'a>> {
    let counted = with_sep!(unsigned()).then(bag());
    choice((
        just("no other bags").to(Vec::new()),
        counted
            .separated_by(padded!(just(',')))
            .at_least(1)
            .collect::<Vec<_>>(),
    ))
    .labelled("bag contents")
}

fn rule<'a>() -> impl Parser<'a, &'a str, (&'a str, Contents<'a>), RichErr<'a>> {
    bag()
        .then_ignore(padded!(just("contain")))
        .then(contents())
        .then_ignore(just('.').or_not())
        .labelled("bag rule")
        .as_context()
}

fn rules<'a>() -> impl Parser<'a, &'a str, Vec<(&'a str, Contents<'a>)>, RichErr<'a>> {
    padded!(rule().or_not())
        .separated_by(text::newline())
        .collect::<Vec<_>>()
        .map(|lines| lines.into_iter().flatten().collect())
}

/// Every bag rule, keyed by the colour of the outer bag
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BagRules<'a>(pub HashMap<&'a str, Contents<'a>>);

impl<'a> BagRules<'a> {
    /// Parse one rule per line. Blank lines are skipped.
    pub fn parse(input: &'a str) -> Result<Self> {
        Ok(Self(run_parser(rules(), input)?.into_iter().collect()))
    }

    /// Every bag that could, at any depth, contain a `bag` bag
    pub fn containers_of(&self, bag: &str) -> HashSet<&'a str> {
        let mut parents: HashMap<&str, Vec<&'a str>> = HashMap::new();
        for (&outer, contents) in &self.0 {
            for &(_, inner) in contents {
                parents.entry(inner).or_default().push(outer);
            }
        }

        let mut found = HashSet::new();
        let mut pending = vec![bag];
        while let Some(current) = pending.pop() {
            for &outer in parents.get(current).into_iter().flatten() {
                if found.insert(outer) {
                    pending.push(outer);
                }
            }
        }
        found
    }

    /// The total number of bags required inside a `bag` bag
    ///
    /// A colour without a rule of its own is treated as an empty bag. Rules which would require a
    /// bag to contain itself are reported as an error.
    pub fn count_inside(&self, bag: &str) -> Result<u64> {
        self.count_memoized(bag, &mut HashMap::new())
    }

    /// `memo` maps a colour to its total, or to [`None`] while that total is being computed
    fn count_memoized<'b>(
        &'b self,
        bag: &'b str,
        memo: &mut HashMap<&'b str, Option<u64>>,
    ) -> Result<u64> {
        match memo.get(bag) {
            Some(Some(total)) => return Ok(*total),
            Some(None) => return Err(Error::NoSolution("bag rules are cyclic")),
            None => (),
        }
        memo.insert(bag, None);
        let mut total: u64 = 0;
        for &(count, inner) in self.0.get(bag).into_iter().flatten() {
            let inside = self.count_memoized(inner, memo)?;
            total = u64::try_from(count)
                .ok()
                .and_then(|count| count.checked_mul(inside.checked_add(1)?))
                .and_then(|bags| total.checked_add(bags))
                .ok_or(Error::NoSolution("bag count overflows a u64"))?;
        }
        memo.insert(bag, Some(total));
        Ok(total)
    }
}

/// Number of bag colours which can eventually contain a shiny gold bag
pub fn part1(input: &str) -> Result<usize> {
    Ok(BagRules::parse(input)?.containers_of(TARGET).len())
}

/// Number of bags inside a shiny gold bag
pub fn part2(input: &str) -> Result<u64> {
    BagRules::parse(input)?.count_inside(TARGET)
}
