// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 3]: Toboggan Trajectory
//!
//! [Day 3]: https://adventofcode.com/2020/day/3

use crate::input::numbered_lines;
use crate::{Error, Result};
use std::num::NonZeroUsize;

const ONE: NonZeroUsize = NonZeroUsize::MIN;
const TWO: NonZeroUsize = ONE.saturating_add(1);

/// The slopes checked in part 2, as `(right, down)`
pub const SLOPES: [(usize, NonZeroUsize); 5] =
    [(1, ONE), (3, ONE), (5, ONE), (7, ONE), (1, TWO)];

/// A map of open squares and trees, which repeats endlessly to the right
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Forest {
    width: usize,
    trees: Vec<Vec<bool>>,
}

impl Forest {
    /// Parse a map of `.` (open) and `#` (tree) squares
    pub fn parse(input: &str) -> Result<Self> {
        let mut width = None;
        let trees = numbered_lines(input)
            .map(|(line, row)| {
                if *width.get_or_insert(row.len()) != row.len() {
                    return Err(Error::InvalidLine {
                        line,
                        reason: "rows of the map must all be the same width",
                    });
                }
                row.chars()
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        _ => Err(Error::InvalidLine {
                            line,
                            reason: "map squares must be '.' or '#'",
                        }),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<Vec<bool>>>>()?;
        Ok(Self {
            width: width.unwrap_or(0),
            trees,
        })
    }

    /// Whether there's a tree `right` squares across and `down` squares down from the top left
    pub fn is_tree(&self, right: usize, down: usize) -> bool {
        self.trees[down][right % self.width]
    }

    /// Count the trees hit starting from the top left, moving `right` then `down` each step
    /// until the bottom of the map is passed
    pub fn trees_on_slope(&self, right: usize, down: NonZeroUsize) -> usize {
        (0..self.trees.len())
            .step_by(down.get())
            .enumerate()
            // reduced first, since the map repeats every `width` squares
            .filter(|&(step, row)| self.is_tree((step % self.width) * (right % self.width), row))
            .count()
    }
}

/// Trees hit going right 3, down 1
pub fn part1(input: &str) -> Result<usize> {
    Ok(Forest::parse(input)?.trees_on_slope(3, ONE))
}

/// Product of the trees hit on each of the [SLOPES]
pub fn part2(input: &str) -> Result<usize> {
    let forest = Forest::parse(input)?;
    SLOPES
        .iter()
        .map(|&(right, down)| forest.trees_on_slope(right, down))
        .try_fold(1usize, usize::checked_mul)
        .ok_or(Error::NoSolution("product of tree counts overflows a usize"))
}
