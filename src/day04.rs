// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Day 4]: Passport Processing
//!
//! [Day 4]: https://adventofcode.com/2020/day/4

use crate::input::numbered_groups;
use crate::{Error, Result};
use std::collections::HashMap;

/// Fields every passport must have. `cid` is deliberately absent.
pub const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

const EYE_COLOURS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

/// The `key:value` fields of a single passport
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Passport<'a>(pub HashMap<&'a str, &'a str>);

impl Passport<'_> {
    /// Whether every one of the [REQUIRED_FIELDS] is present
    pub fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS.iter().all(|f| self.0.contains_key(f))
    }

    /// Whether every required field is present and every field present holds a valid value
    pub fn is_valid(&self) -> bool {
        self.has_required_fields() && self.0.iter().all(|(key, value)| validate_field(key, value))
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn year_in(s: &str, min: u32, max: u32) -> bool {
    is_digits(s, 4) && s.parse::<u32>().is_ok_and(|year| (min..=max).contains(&year))
}

fn valid_height(s: &str) -> bool {
    let in_range = |digits: &str, min: u32, max: u32| {
        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && digits.parse().is_ok_and(|h: u32| (min..=max).contains(&h))
    };
    if let Some(cm) = s.strip_suffix("cm") {
        in_range(cm, 150, 193)
    } else if let Some(inches) = s.strip_suffix("in") {
        in_range(inches, 59, 76)
    } else {
        false
    }
}

/// Check a single field's value against the rules for its key. Unknown keys are accepted.
pub fn validate_field(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => valid_height(value),
        "hcl" => value.strip_prefix('#').is_some_and(|hex| {
            hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        }),
        "ecl" => EYE_COLOURS.contains(&value),
        "pid" => is_digits(value, 9),
        _ => true,
    }
}

/// Parse blank-line separated passports, each made of whitespace separated `key:value` pairs
pub fn parse(input: &str) -> Result<Vec<Passport<'_>>> {
    numbered_groups(input)
        .map(|lines| {
            lines
                .into_iter()
                .flat_map(|(line, text)| text.split_whitespace().map(move |field| (line, field)))
                .map(|(line, field)| {
                    field.split_once(':').ok_or(Error::InvalidLine {
                        line,
                        reason: "passport fields must be written as key:value",
                    })
                })
                .collect::<Result<HashMap<_, _>>>()
                .map(Passport)
        })
        .collect()
}

/// Number of passports with all the required fields
pub fn part1(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .iter()
        .filter(|p| p.has_required_fields())
        .count())
}

/// Number of passports with all the required fields, all holding valid values
pub fn part2(input: &str) -> Result<usize> {
    Ok(parse(input)?.iter().filter(|p| p.is_valid()).count())
}
