// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 5]: Binary Boarding
//!
//! A boarding pass such as `FBFBBFFRLR` is a binary number in disguise: `F` and `L` are `0`,
//! `B` and `R` are `1`. The first seven characters pick the row, the last three the column.
//!
//! [Day 5]: https://adventofcode.com/2020/day/5

use crate::input::numbered_lines;
use crate::{Error, Result};
use itertools::Itertools;

/// A decoded boarding pass
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Seat {
    /// Row, from `0` to `127`
    pub row: u16,
    /// Column, from `0` to `7`
    pub column: u16,
}

impl Seat {
    /// Decode a 10 character boarding pass, or return [`None`] if it is malformed
    pub fn decode(pass: &str) -> Option<Self> {
        fn bits(s: &str, zero: u8, one: u8) -> Option<u16> {
            s.bytes().try_fold(0, |acc, b| match b {
                b if b == zero => Some(acc << 1),
                b if b == one => Some((acc << 1) | 1),
                _ => None,
            })
        }
        if pass.len() != 10 || !pass.is_ascii() {
            return None;
        }
        let (row, column) = pass.split_at(7);
        Some(Self {
            row: bits(row, b'F', b'B')?,
            column: bits(column, b'L', b'R')?,
        })
    }

    /// The seat's unique id, `row * 8 + column`
    pub const fn id(self) -> u16 {
        self.row * 8 + self.column
    }
}

/// Decode the seat ids of every boarding pass in `input`
pub fn seat_ids(input: &str) -> Result<Vec<u16>> {
    numbered_lines(input)
        .map(|(line, pass)| {
            Seat::decode(pass).map(Seat::id).ok_or(Error::InvalidLine {
                line,
                reason: "boarding passes must be 7 of 'F'/'B' followed by 3 of 'L'/'R'",
            })
        })
        .collect()
}

/// The highest seat id
pub fn part1(input: &str) -> Result<u16> {
    seat_ids(input)?
        .into_iter()
        .max()
        .ok_or(Error::NoSolution("no boarding passes"))
}

/// The one missing seat id whose neighbours are both taken
pub fn part2(input: &str) -> Result<u16> {
    let mut ids = seat_ids(input)?;
    ids.sort_unstable();
    let gaps: Vec<u16> = ids
        .iter()
        .tuple_windows()
        .filter(|&(a, b)| b - a == 2)
        .map(|(a, _)| a + 1)
        .collect();
    match gaps[..] {
        [seat] => Ok(seat),
        [] => Err(Error::NoSolution("no empty seat between two taken ones")),
        _ => Err(Error::NoSolution("more than one empty seat between taken ones")),
    }
}
