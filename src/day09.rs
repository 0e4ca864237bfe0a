// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 9]: Encoding Error
//!
//! [Day 9]: https://adventofcode.com/2020/day/9

use crate::input::parse_ints;
use crate::{Error, Result};
use itertools::{Itertools, MinMaxResult};

/// The preamble length used by the real puzzle input
pub const PREAMBLE: usize = 25;

/// Whether `value` is the sum of two entries at distinct positions of `window`
fn is_pair_sum(window: &[i64], value: i64) -> bool {
    window
        .iter()
        .tuple_combinations()
        .any(|(a, b)| a.checked_add(*b) == Some(value))
}

/// Find the first value after the preamble which is not the sum of two of the `preamble` values
/// before it
pub fn find_invalid(values: &[i64], preamble: usize) -> Result<Option<i64>> {
    if preamble < 2 || preamble >= values.len() {
        return Err(Error::PreambleTooShort);
    }
    Ok(values
        .windows(preamble + 1)
        .find(|w| !is_pair_sum(&w[..preamble], w[preamble]))
        .map(|w| w[preamble]))
}

/// Find a contiguous run of at least two values summing to `target`, returning the sum of the
/// smallest and largest values in it
///
/// Runs are summed as `i128`, so large values can't overflow part way through a run.
pub fn find_weakness(values: &[i64], target: i64) -> Option<i64> {
    let target = i128::from(target);
    (0..values.len()).find_map(|start| {
        let mut sum = i128::from(values[start]);
        values[start + 1..].iter().enumerate().find_map(|(i, &v)| {
            sum += i128::from(v);
            if sum != target {
                return None;
            }
            match values[start..=start + 1 + i].iter().minmax() {
                MinMaxResult::MinMax(min, max) => min.checked_add(*max),
                MinMaxResult::OneElement(_) | MinMaxResult::NoElements => {
                    unreachable!("run has at least two values")
                }
            }
        })
    })
}

/// The first value not made up of two of the `preamble` values before it
pub fn part1(input: &str, preamble: usize) -> Result<i64> {
    find_invalid(&parse_ints(input)?, preamble)?
        .ok_or(Error::NoSolution("every value is the sum of two earlier ones"))
}

/// The encryption weakness, based on the value found in [part1]
pub fn part2(input: &str, preamble: usize) -> Result<i64> {
    let values = parse_ints(input)?;
    let target = find_invalid(&values, preamble)?
        .ok_or(Error::NoSolution("every value is the sum of two earlier ones"))?;
    find_weakness(&values, target).ok_or(Error::NoSolution("no contiguous run sums to the target"))
}
