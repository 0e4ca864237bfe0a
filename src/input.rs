// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Helpers for the simple line-oriented input formats shared between days

use crate::{Error, Result};

/// Parse `text` as one integer per line, skipping blank and whitespace-only lines
///
/// # Example
///
/// ```
/// assert_eq!(aoc2020::input::parse_ints("1\n -2 \n\n3\n").unwrap(), vec![1, -2, 3]);
/// ```
pub fn parse_ints(text: &str) -> Result<Vec<i64>> {
    numbered_lines(text)
        .map(|(line, s)| {
            s.parse()
                .map_err(|source| Error::InvalidInteger { line, source })
        })
        .collect()
}

/// Split `text` into groups of trimmed lines separated by one or more blank lines
///
/// A line holding only whitespace counts as blank. Empty groups are never yielded.
pub fn groups(text: &str) -> impl Iterator<Item = Vec<&str>> {
    numbered_groups(text).map(|group| group.into_iter().map(|(_, line)| line).collect())
}

/// Like [groups], but with each line paired with its 1-based line number
pub fn numbered_groups(text: &str) -> impl Iterator<Item = Vec<(usize, &str)>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .peekable();
    std::iter::from_fn(move || {
        while lines.next_if(|(_, line)| line.is_empty()).is_some() {}
        let group: Vec<_> =
            std::iter::from_fn(|| lines.next_if(|(_, line)| !line.is_empty())).collect();
        (!group.is_empty()).then_some(group)
    })
}

/// Iterate over the non-blank lines of `text`, each paired with its 1-based line number
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}
