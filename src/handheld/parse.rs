// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::{Instruction, OpCode};
use crate::parse::{RichErr, padded, signed_int, with_sep};
use chumsky::prelude::*;

fn opcode<'a>() -> impl Parser<'a, &'a str, OpCode, RichErr<'a>> + Clone {
    choice((
        just("nop").to(OpCode::Nop),
        just("acc").to(OpCode::Acc),
        just("jmp").to(OpCode::Jmp),
    ))
    .labelled("operation (nop, acc or jmp)")
}

fn instruction<'a>() -> impl Parser<'a, &'a str, Instruction, RichErr<'a>> + Clone {
    with_sep!(opcode())
        .then(signed_int())
        .map(|(op, arg)| Instruction { op, arg })
        .labelled("instruction")
        .as_context()
}

pub(super) fn single_instruction<'a>() -> impl Parser<'a, &'a str, Instruction, RichErr<'a>> {
    padded!(instruction())
}

/// One instruction per line, with blank lines allowed anywhere
pub(super) fn program<'a>() -> impl Parser<'a, &'a str, Vec<Instruction>, RichErr<'a>> {
    padded!(instruction().or_not())
        .separated_by(text::newline())
        .collect::<Vec<_>>()
        .map(|lines| lines.into_iter().flatten().collect())
}
