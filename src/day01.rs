// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 1]: Report Repair
//!
//! [Day 1]: https://adventofcode.com/2020/day/1

use crate::input::parse_ints;
use crate::{Error, Result};
use std::cmp::Ordering;

/// The sum the expense report entries must add up to
pub const TARGET: i64 = 2020;

/// Find two entries at distinct positions of `values` which sum to `target`
pub fn find_pair(values: &[i64], target: i64) -> Option<(i64, i64)> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    pair_in_sorted(&sorted, target.into())
}

/// Two-pointer search over an ascending slice, summing in `i128` so entries can't overflow
fn pair_in_sorted(sorted: &[i64], target: i128) -> Option<(i64, i64)> {
    let (mut lo, mut hi) = (0, sorted.len().checked_sub(1)?);
    while lo < hi {
        match (i128::from(sorted[lo]) + i128::from(sorted[hi])).cmp(&target) {
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
            Ordering::Equal => return Some((sorted[lo], sorted[hi])),
        }
    }
    None
}

/// Find three entries at distinct positions of `values` which sum to `target`
pub fn find_triple(values: &[i64], target: i64) -> Option<(i64, i64, i64)> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted.iter().enumerate().find_map(|(i, &first)| {
        pair_in_sorted(&sorted[i + 1..], i128::from(target) - i128::from(first))
            .map(|(a, b)| (first, a, b))
    })
}

/// Product of the two entries summing to 2020
pub fn part1(input: &str) -> Result<i64> {
    let (a, b) =
        find_pair(&parse_ints(input)?, TARGET).ok_or(Error::NoSolution("no pair sums to 2020"))?;
    a.checked_mul(b).ok_or(Error::NoSolution("product overflows an i64"))
}

/// Product of the three entries summing to 2020
pub fn part2(input: &str) -> Result<i64> {
    let (a, b, c) = find_triple(&parse_ints(input)?, TARGET)
        .ok_or(Error::NoSolution("no triple sums to 2020"))?;
    a.checked_mul(b)
        .and_then(|ab| ab.checked_mul(c))
        .ok_or(Error::NoSolution("product overflows an i64"))
}
