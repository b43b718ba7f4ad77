use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::token::Token;

/// The fixed instruction table of the target machine.
///
/// Variant names are the source mnemonics; lookup is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum Op {
    PUSH,
    DUPE,
    SWAP,
    DROP,
    ADD,
    SUB,
    MUL,
    DIV,
    MOD,
    STORE,
    RETRV,
    LABEL,
    GOSUB,
    JMP,
    JEZ,
    JLZ,
    RETURN,
    END,
    PUTC,
    PUTN,
    GETC,
    GETN,
}

/// What kind of parameter an instruction takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    None,
    Number,
    Label,
}

impl Op {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Fixed opcode prefix. Unique and prefix-free across the table, so the
    /// emitted stream stays decodable by the downstream machine.
    pub fn tokens(self) -> &'static [Token] {
        use Token::{Newline as L, Space as S, Tab as T};
        match self {
            Op::PUSH => &[S, S],
            Op::DUPE => &[S, L, S],
            Op::SWAP => &[S, L, T],
            Op::DROP => &[S, L, L],
            Op::ADD => &[T, S, S, S],
            Op::SUB => &[T, S, S, T],
            Op::MUL => &[T, S, S, L],
            Op::DIV => &[T, S, T, S],
            Op::MOD => &[T, S, T, T],
            Op::STORE => &[T, T, S],
            Op::RETRV => &[T, T, T],
            Op::LABEL => &[L, S, S],
            Op::GOSUB => &[L, S, T],
            Op::JMP => &[L, S, L],
            Op::JEZ => &[L, T, S],
            Op::JLZ => &[L, T, T],
            Op::RETURN => &[L, T, L],
            Op::END => &[L, L, L],
            Op::PUTC => &[T, L, S, S],
            Op::PUTN => &[T, L, S, T],
            Op::GETC => &[T, L, T, S],
            Op::GETN => &[T, L, T, T],
        }
    }

    pub fn param(self) -> Param {
        match self {
            Op::PUSH => Param::Number,
            Op::LABEL | Op::GOSUB | Op::JMP | Op::JEZ | Op::JLZ => Param::Label,
            _ => Param::None,
        }
    }
}

/// Accepted mnemonic lengths, derived from the table itself so the line
/// classifier tracks additions and removals automatically.
pub static MNEMONIC_LEN: Lazy<RangeInclusive<usize>> = Lazy::new(|| {
    let mut min = usize::MAX;
    let mut max = 0;
    for op in Op::iter() {
        let len = op.to_string().len();
        min = min.min(len);
        max = max.max(len);
    }
    min..=max
});
