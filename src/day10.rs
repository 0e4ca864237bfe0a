// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 10]: Adapter Array
//!
//! [Day 10]: https://adventofcode.com/2020/day/10

use crate::input::parse_ints;
use crate::{Error, Result};
use itertools::Itertools;

/// The full chain of joltages: the outlet (`0`), every adapter in ascending order, then the
/// device (`3` above the highest adapter)
///
/// Fails if two neighbours in the chain are more than 3 jolts apart, or an adapter is rated
/// below the outlet.
pub fn chain(adapters: &[i64]) -> Result<Vec<i64>> {
    let mut chain = Vec::with_capacity(adapters.len() + 2);
    chain.push(0);
    chain.extend(adapters.iter().copied().sorted_unstable());
    let device = chain
        .last()
        .copied()
        .unwrap_or(0)
        .checked_add(3)
        .ok_or(Error::NoSolution("device joltage overflows an i64"))?;
    chain.push(device);
    if let Some((&from, &to)) = chain.iter().tuple_windows().find(|&(a, b)| b < a || b - a > 3) {
        return Err(Error::InvalidJoltage { from, to });
    }
    Ok(chain)
}

/// Count how many steps of each size, from `0` to `3` jolts, make up the full chain
pub fn joltage_differences(adapters: &[i64]) -> Result<[usize; 4]> {
    let mut freq = [0; 4];
    for (a, b) in chain(adapters)?.into_iter().tuple_windows() {
        let step = usize::try_from(b - a).expect("chain is sorted and gaps are at most 3");
        freq[step] += 1;
    }
    Ok(freq)
}

/// Count the distinct arrangements of adapters which connect the outlet to the device
///
/// A count too large for a `u64` is reported as [`Error::NoSolution`].
pub fn arrangements(adapters: &[i64]) -> Result<u64> {
    let chain = chain(adapters)?;
    // ways[i] is the number of arrangements ending at chain[i]
    let mut ways = vec![0u64; chain.len()];
    ways[0] = 1;
    for i in 1..chain.len() {
        ways[i] = (i.saturating_sub(3)..i)
            .filter(|&j| chain[i] - chain[j] <= 3)
            .try_fold(0u64, |total, j| total.checked_add(ways[j]))
            .ok_or(Error::NoSolution("arrangement count overflows a u64"))?;
    }
    Ok(ways[chain.len() - 1])
}

/// Number of 1-jolt differences multiplied by the number of 3-jolt differences
pub fn part1(input: &str) -> Result<usize> {
    let freq = joltage_differences(&parse_ints(input)?)?;
    Ok(freq[1] * freq[3])
}

/// Number of distinct adapter arrangements
pub fn part2(input: &str) -> Result<u64> {
    arrangements(&parse_ints(input)?)
}
