//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use aoc2020::handheld::{Trace, TracedInstr};
use aoc2020::prelude::*;
use aoc2020::{day01, day02, day03, day04, day05, day06, day07, day08, day09, day10};
use itertools::Itertools;

// first, some groundwork for common elements of different tests

/// A struct with the information about an expected traced instruction
struct ExpectedOp {
    instr_ptr: usize,
    acc_before: i64,
    acc_after: i64,
    next_ptr: usize,
}

impl ExpectedOp {
    const fn new(instr_ptr: usize, acc_before: i64, acc_after: i64, next_ptr: usize) -> Self {
        Self {
            instr_ptr,
            acc_before,
            acc_after,
            next_ptr,
        }
    }

    fn validate(self, traced: TracedInstr) {
        assert_eq!(self.instr_ptr, traced.instr_ptr());
        assert_eq!(self.acc_before, traced.acc_before());
        assert_eq!(self.acc_after, traced.acc_after());
        assert_eq!(self.next_ptr, traced.next_ptr());
    }
}

fn validate_trace(expected: impl IntoIterator<Item = ExpectedOp>, Trace(trace): Trace) {
    expected
        .into_iter()
        .zip_eq(trace)
        .for_each(|(op, instr)| op.validate(instr))
}

mod day01_examples {
    const REPORT: &str = "1721\n979\n366\n299\n675\n1456\n";

    mod part1 {
        use super::REPORT;
        use crate::*;

        #[test]
        fn expense_report() {
            let entries = [1721, 979, 366, 299, 675, 1456];
            assert_eq!(day01::find_pair(&entries, 2020), Some((299, 1721)));
            assert_eq!(day01::part1(REPORT), Ok(514_579));
        }
    }

    mod part2 {
        use super::REPORT;
        use crate::*;

        #[test]
        fn expense_report() {
            assert_eq!(day01::part2(REPORT), Ok(241_861_950));
        }
    }
}

mod day02_examples {
    const PASSWORDS: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

    mod part1 {
        use super::PASSWORDS;
        use crate::*;

        #[test]
        fn password_list() {
            let valid = day02::parse(PASSWORDS)
                .unwrap()
                .iter()
                .map(day02::Policy::is_valid_count)
                .collect_vec();
            assert_eq!(valid, [true, false, true]);
            assert_eq!(day02::part1(PASSWORDS), Ok(2));
        }
    }

    mod part2 {
        use super::PASSWORDS;
        use crate::*;

        #[test]
        fn password_list() {
            let valid = day02::parse(PASSWORDS)
                .unwrap()
                .iter()
                .map(day02::Policy::is_valid_position)
                .collect_vec();
            assert_eq!(valid, [true, false, false]);
            assert_eq!(day02::part2(PASSWORDS), Ok(1));
        }
    }
}

mod day03_examples {
    const MAP: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

    mod part1 {
        use super::MAP;
        use crate::*;

        #[test]
        fn toboggan_map() {
            assert_eq!(day03::part1(MAP), Ok(7));
        }
    }

    mod part2 {
        use super::MAP;
        use crate::*;

        #[test]
        fn every_slope() {
            let forest = day03::Forest::parse(MAP).unwrap();
            let trees = day03::SLOPES.map(|(right, down)| forest.trees_on_slope(right, down));
            assert_eq!(trees, [2, 7, 3, 4, 2]);
            assert_eq!(day03::part2(MAP), Ok(336));
        }
    }
}

mod day04_examples {
    mod part1 {
        use crate::*;

        #[test]
        fn batch_file() {
            const BATCH: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753704 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";
            let present = day04::parse(BATCH)
                .unwrap()
                .iter()
                .map(day04::Passport::has_required_fields)
                .collect_vec();
            assert_eq!(present, [true, false, true, false]);
            assert_eq!(day04::part1(BATCH), Ok(2));
        }
    }

    mod part2 {
        use crate::*;

        #[test]
        fn field_rules() {
            use day04::validate_field;
            assert!(validate_field("byr", "2002"));
            assert!(!validate_field("byr", "2003"));
            assert!(validate_field("hgt", "60in"));
            assert!(validate_field("hgt", "190cm"));
            assert!(!validate_field("hgt", "190in"));
            assert!(!validate_field("hgt", "190"));
            assert!(validate_field("hcl", "#123abc"));
            assert!(!validate_field("hcl", "#123abz"));
            assert!(!validate_field("hcl", "123abc"));
            assert!(validate_field("ecl", "brn"));
            assert!(!validate_field("ecl", "wat"));
            assert!(validate_field("pid", "000000001"));
            assert!(!validate_field("pid", "0123456789"));
        }

        #[test]
        fn invalid_passports() {
            const BATCH: &str = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";
            assert_eq!(day04::part2(BATCH), Ok(0));
        }

        #[test]
        fn valid_passports() {
            const BATCH: &str = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";
            assert_eq!(day04::part2(BATCH), Ok(4));
        }
    }
}

mod day05_examples {
    mod part1 {
        use crate::*;

        #[test]
        fn boarding_passes() {
            macro_rules! example {
                ($pass: literal is row $row: literal column $column: literal id $id: literal) => {{
                    let seat = day05::Seat::decode($pass).unwrap();
                    assert_eq!(seat, day05::Seat { row: $row, column: $column });
                    assert_eq!(seat.id(), $id);
                }}
            }
            example!("FBFBBFFRLR" is row 44 column 5 id 357);
            example!("BFFFBBFRRR" is row 70 column 7 id 567);
            example!("FFFBBBFRRR" is row 14 column 7 id 119);
            example!("BBFFBBFRLL" is row 102 column 4 id 820);
            assert_eq!(day05::part1("BFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n"), Ok(820));
        }
    }
}

mod day06_examples {
    const ANSWERS: &str = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb\n";

    mod part1 {
        use super::ANSWERS;
        use crate::*;

        #[test]
        fn anyone_answered() {
            assert_eq!(day06::part1("abcx\nabcy\nabcz\n"), Ok(6));
            assert_eq!(day06::part1(ANSWERS), Ok(11));
        }
    }

    mod part2 {
        use super::ANSWERS;
        use crate::*;

        #[test]
        fn everyone_answered() {
            assert_eq!(day06::part2(ANSWERS), Ok(6));
        }
    }
}

mod day07_examples {
    const RULES: &str = "\
light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

    mod part1 {
        use super::RULES;
        use crate::*;

        #[test]
        fn luggage_rules() {
            let rules = day07::BagRules::parse(RULES).unwrap();
            let containers = rules.containers_of("shiny gold").into_iter().sorted().collect_vec();
            assert_eq!(containers, ["bright white", "dark orange", "light red", "muted yellow"]);
            assert_eq!(day07::part1(RULES), Ok(4));
        }
    }

    mod part2 {
        use super::RULES;
        use crate::*;

        #[test]
        fn luggage_rules() {
            assert_eq!(day07::part2(RULES), Ok(32));
        }

        #[test]
        fn deeper_nesting() {
            const NESTED: &str = "\
shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.
";
            assert_eq!(day07::part2(NESTED), Ok(126));
        }
    }
}

mod day08_examples {
    const BOOT_CODE: &str = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    mod part1 {
        use super::BOOT_CODE;
        use crate::*;

        #[test]
        fn infinite_loop() {
            let mut handheld = Handheld::new(Program::parse(BOOT_CODE).unwrap());
            handheld.start_trace();
            assert_eq!(handheld.run(), Ok(RunResult::Looped(5)));
            const EXPECTED: [ExpectedOp; 7] = [
                ExpectedOp::new(0, 0, 0, 1),
                ExpectedOp::new(1, 0, 1, 2),
                ExpectedOp::new(2, 1, 1, 6),
                ExpectedOp::new(6, 1, 2, 7),
                ExpectedOp::new(7, 2, 2, 3),
                ExpectedOp::new(3, 2, 5, 4),
                ExpectedOp::new(4, 5, 5, 1),
            ];
            validate_trace(EXPECTED, handheld.end_trace().unwrap());
            // the instruction about to run a second time
            assert_eq!(handheld.ip(), 1);
            assert_eq!(day08::part1(BOOT_CODE), Ok(5));
        }
    }

    mod part2 {
        use super::BOOT_CODE;
        use crate::*;

        #[test]
        fn fixed_program() {
            let program = Program::parse(BOOT_CODE).unwrap();
            assert_eq!(find_fix(&program), Ok(Some(Fix { index: 7, accumulator: 8 })));

            let mut handheld = Handheld::new(program.with_op(7, OpCode::Nop));
            handheld.start_trace();
            assert_eq!(handheld.run(), Ok(RunResult::Terminated(8)));
            const EXPECTED: [ExpectedOp; 6] = [
                ExpectedOp::new(0, 0, 0, 1),
                ExpectedOp::new(1, 0, 1, 2),
                ExpectedOp::new(2, 1, 1, 6),
                ExpectedOp::new(6, 1, 2, 7),
                ExpectedOp::new(7, 2, 2, 8),
                ExpectedOp::new(8, 2, 8, 9),
            ];
            validate_trace(EXPECTED, handheld.end_trace().unwrap());
            assert_eq!(day08::part2(BOOT_CODE), Ok(8));
        }
    }
}

mod day09_examples {
    const XMAS: &str = "\
35\n20\n15\n25\n47\n40\n62\n55\n65\n95\n102\n117\n150\n182\n127\n219\n299\n277\n309\n576\n";

    mod part1 {
        use super::XMAS;
        use crate::*;

        #[test]
        fn first_invalid_number() {
            assert_eq!(day09::part1(XMAS, 5), Ok(127));
        }

        #[test]
        fn full_preamble() {
            let mut values: Vec<i64> = (1..=25).collect();
            values.push(26);
            values.push(49);
            values.push(100);
            assert_eq!(day09::find_invalid(&values, 25), Ok(Some(100)));
        }
    }

    mod part2 {
        use super::XMAS;
        use crate::*;

        #[test]
        fn encryption_weakness() {
            assert_eq!(day09::part2(XMAS, 5), Ok(62));
        }
    }
}

mod day10_examples {
    const SHORT: &str = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n";
    const LONG: &str = "\
28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n\
4\n2\n34\n10\n3\n";

    mod part1 {
        use super::{LONG, SHORT};
        use crate::*;

        #[test]
        fn joltage_differences() {
            let adapters = aoc2020::input::parse_ints(SHORT).unwrap();
            assert_eq!(day10::joltage_differences(&adapters), Ok([0, 7, 0, 5]));
            assert_eq!(day10::part1(SHORT), Ok(35));
            assert_eq!(day10::part1(LONG), Ok(220));
        }
    }

    mod part2 {
        use super::{LONG, SHORT};
        use crate::*;

        #[test]
        fn arrangements() {
            assert_eq!(day10::part2(SHORT), Ok(8));
            assert_eq!(day10::part2(LONG), Ok(19208));
        }
    }
}
