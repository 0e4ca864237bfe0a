// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 6]: Custom Customs
//!
//! [Day 6]: https://adventofcode.com/2020/day/6

use crate::Result;
use crate::input::groups;
use std::collections::BTreeSet;

/// How the answers of a group's members are combined
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Questions anyone in the group answered "yes" to
    Union,
    /// Questions everyone in the group answered "yes" to
    Intersect,
}

/// Combine each group's answers according to `mode`
pub fn group_answers(input: &str, mode: Mode) -> Vec<BTreeSet<char>> {
    groups(input)
        .map(|people| {
            let mut people = people.into_iter().map(|p| p.chars().collect::<BTreeSet<_>>());
            let first = people.next().unwrap_or_default();
            people.fold(first, |acc, person| match mode {
                Mode::Union => &acc | &person,
                Mode::Intersect => &acc & &person,
            })
        })
        .collect()
}

/// Sum over all groups of the questions combined with `mode`
pub fn sum_counts(input: &str, mode: Mode) -> usize {
    group_answers(input, mode).iter().map(BTreeSet::len).sum()
}

/// Sum of the questions anyone in each group answered "yes" to
pub fn part1(input: &str) -> Result<usize> {
    Ok(sum_counts(input, Mode::Union))
}

/// Sum of the questions everyone in each group answered "yes" to
pub fn part2(input: &str) -> Result<usize> {
    Ok(sum_counts(input, Mode::Intersect))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groupings() {
        let expected: Vec<BTreeSet<char>> = ["a", "abcd", "def"]
            .into_iter()
            .map(|s| s.chars().collect())
            .collect();
        assert_eq!(group_answers("a\n\n \n\n\nabc\nd\n\ndef", Mode::Union), expected);
    }

    #[test]
    fn disjoint_answers_intersect_to_nothing() {
        assert_eq!(sum_counts("ab\ncd\n", Mode::Intersect), 0);
    }
}
