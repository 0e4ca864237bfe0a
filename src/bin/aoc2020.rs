// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use aoc2020::handheld::{Handheld, Program};
use aoc2020::parse::ParseError;
use aoc2020::{
    Error, day01, day02, day03, day04, day05, day06, day07, day08, day09, day10,
};
use clap::Parser;
use std::fs::read_to_string;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[cfg(feature = "ariadne")]
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str = "Input file containing the puzzle input\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Advent of Code 2020 solver", long_about = None)]
struct Args {
    #[arg(help = "Puzzle day to solve (1 to 10)")]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=10))]
    day: u8,
    #[arg(help = INPUT_HELP.split_at(38).0)]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "Preamble length for day 9")]
    #[arg(short, long)]
    #[arg(default_value_t = day09::PREAMBLE)]
    preamble: usize,
    #[arg(help = "Trace the instructions executed by the day 8 boot code to stderr")]
    #[arg(short, long)]
    trace: bool,
}

/// Sort the expected patterns, making sure that "something else" is the last listed entry
fn sorted_expectations(err: &ParseError) -> Vec<&str> {
    let mut expected: Vec<&str> = err
        .expected
        .iter()
        .map(String::as_str)
        // no need to explicitly mention whitespace
        .filter(|pat| !pat.contains("whitespace"))
        .collect();
    expected.sort_unstable_by(|&a, &b| {
        use std::cmp::Ordering;
        match (a, b) {
            ("something else", _) => Ordering::Greater,
            (_, "something else") => Ordering::Less,
            (a, b) => a.cmp(b),
        }
    });
    expected.dedup();
    expected
}

#[cfg(not(feature = "ariadne"))]
fn report_parse_err(err: &ParseError, file: &str, _: &str) {
    eprintln!("error parsing {file} at bytes {}..{}:", err.span.start, err.span.end);
    match err.found {
        Some(found) => eprintln!("Found token \'{}\'", found.escape_default()),
        None => eprintln!("{}", err.message),
    }

    match &sorted_expectations(err)[..] {
        &[] => (),
        &[pat] => eprintln!("Expected \"{pat}\""),
        pats => {
            eprintln!("Expected one of the following:");
            for pat in pats {
                eprintln!("- {pat}");
            }
        }
    }
}

#[cfg(feature = "ariadne")]
fn report_parse_err(err: &ParseError, file: &str, source: &str) {
    use std::fmt::Write;

    let mut builder = Report::build(ReportKind::Error, (file, err.span.clone()))
        .with_message(format!("Failed to parse {}", file.fg(Color::Red)));

    let label = Label::new((file, err.span.clone())).with_color(Color::Yellow);
    builder = builder.with_label(match err.found {
        Some(found) => label.with_message(format!(
            "Found token \'{}\'",
            found.escape_default().fg(Color::Cyan)
        )),
        None => label.with_message(&err.message),
    });

    match &sorted_expectations(err)[..] {
        &[] => (),
        &[pat] => {
            builder = builder.with_note(format!("Expected \"{}\"", pat.fg(Color::Blue)));
        }
        pats => {
            let mut note = String::from("Expected one of the following:\n");
            for pat in pats {
                writeln!(&mut note, "- {}", pat.fg(Color::Blue)).expect("can write to &mut String");
            }
            builder = builder.with_note(note);
        }
    }

    builder
        .finish()
        .eprint((file, Source::from(source)))
        .expect("failed to print to stderr");
}

/// Run the day 8 boot code unmodified, writing each executed instruction to stderr
fn trace_boot_code(input: &str) -> Result<(), Error> {
    let mut handheld = Handheld::new(Program::parse(input)?);
    handheld.start_trace();
    let result = handheld.run()?;
    for instr in handheld.end_trace().into_iter().flat_map(|trace| trace.0) {
        eprintln!("{instr}");
    }
    eprintln!("{result}");
    Ok(())
}

fn solve(args: &Args, input: &str) -> Result<[String; 2], Error> {
    macro_rules! parts {
        ($day: ident) => {
            [$day::part1(input)?.to_string(), $day::part2(input)?.to_string()]
        };
        ($day: ident, $($arg: expr),+) => {
            [
                $day::part1(input, $($arg),+)?.to_string(),
                $day::part2(input, $($arg),+)?.to_string(),
            ]
        };
    }

    Ok(match args.day {
        1 => parts!(day01),
        2 => parts!(day02),
        3 => parts!(day03),
        4 => parts!(day04),
        5 => parts!(day05),
        6 => parts!(day06),
        7 => parts!(day07),
        8 => {
            if args.trace {
                trace_boot_code(input)?;
            }
            parts!(day08)
        }
        9 => parts!(day09, args.preamble),
        10 => parts!(day10),
        _ => unreachable!("clap restricts the day to 1..=10"),
    })
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let file_name = match args.input.as_ref() {
        Some(path) if path.as_os_str() != "-" => path.to_string_lossy().into_owned(),
        _ => String::from("<stdin>"),
    };

    let input = match read_input(args.input.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read {file_name}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match solve(&args, &input) {
        Ok([part1, part2]) => {
            println!("part 1: {part1}");
            println!("part 2: {part2}");
            ExitCode::SUCCESS
        }
        Err(Error::Parse(errs)) => {
            for err in &errs.0 {
                report_parse_err(err, &file_name, &input);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("day {} failed: {e}", args.day);
            ExitCode::FAILURE
        }
    }
}
