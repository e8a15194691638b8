use core::fmt;

use crate::{
    table::{Category, InsnInfo},
    words::{AluWord0, AluWord1LdsIdxOp, AluWord1Op2, AluWord1Op3, Format},
};

/// ALU execution lane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lane {
    X,
    Y,
    Z,
    W,
    Trans,
}

impl Lane {
    pub const ALL: [Lane; 5] = [Lane::X, Lane::Y, Lane::Z, Lane::W, Lane::Trans];

    /// Lane for a destination channel.
    pub fn from_chan(chan: u32) -> Self {
        match chan & 3 {
            0 => Self::X,
            1 => Self::Y,
            2 => Self::Z,
            _ => Self::W,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::W => "w",
            Self::Trans => "t",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/// ALU source operand fields.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Src {
    pub sel: u32,
    pub rel: bool,
    pub chan: u32,
    pub neg: bool,
    pub abs: bool,
}

/// Selector of the literal constant pool.
pub const SRC_LITERAL: u32 = 253;
/// Selector of the previous vector result.
pub const SRC_PV: u32 = 254;

/// Decoded instruction.
#[derive(Copy, Clone)]
pub struct Insn {
    info: &'static InsnInfo,
    words: [u32; 3],
    lane: Option<Lane>,
}

impl Insn {
    pub fn new(info: &'static InsnInfo, words: [u32; 3]) -> Self {
        Self {
            info,
            words,
            lane: None,
        }
    }

    pub fn info(&self) -> &'static InsnInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn category(&self) -> Category {
        self.info.category
    }

    pub fn format(&self, index: usize) -> Format {
        self.info.fmt[index]
    }

    pub fn raw(&self, index: usize) -> u32 {
        self.words[index]
    }

    /// Raw words, unused words are zero.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.info.size]
    }

    /// Interprets word `index` with layout `W`.
    pub fn word<W: From<u32>>(&self, index: usize) -> W {
        W::from(self.words[index])
    }

    /// Execution lane, assigned for instructions of an ALU group.
    pub fn lane(&self) -> Option<Lane> {
        self.lane
    }

    pub(crate) fn set_lane(&mut self, lane: Lane) {
        self.lane = Some(lane);
    }

    pub fn has_flags(&self, flags: u32) -> bool {
        self.info.has_flags(flags)
    }

    /// Returns the source operand `index` of an ALU instruction.
    ///
    /// Negation of the first two operands only exists in ALU_WORD0 and the
    /// absolute flag only in ALU_WORD1_OP2. The third operand exists in
    /// ALU_WORD1_OP3 and ALU_WORD1_LDS_IDX_OP, negated only in the former.
    pub fn src(&self, index: usize) -> Option<Src> {
        if !matches!(self.info.category, Category::Alu | Category::Lds) {
            return None;
        }
        let word0: AluWord0 = self.word(0);
        let op2 = self.info.fmt[1] == Format::AluWord1Op2;
        let neg_avail = self.info.fmt[0] == Format::AluWord0;
        match index {
            0 => Some(Src {
                sel: word0.src0_sel(),
                rel: word0.src0_rel(),
                chan: word0.src0_chan(),
                neg: neg_avail && word0.src0_neg(),
                abs: op2 && self.word::<AluWord1Op2>(1).src0_abs(),
            }),
            1 => Some(Src {
                sel: word0.src1_sel(),
                rel: word0.src1_rel(),
                chan: word0.src1_chan(),
                neg: neg_avail && word0.src1_neg(),
                abs: op2 && self.word::<AluWord1Op2>(1).src1_abs(),
            }),
            2 => match self.info.fmt[1] {
                Format::AluWord1Op3 => {
                    let word1: AluWord1Op3 = self.word(1);
                    Some(Src {
                        sel: word1.src2_sel(),
                        rel: word1.src2_rel(),
                        chan: word1.src2_chan(),
                        neg: word1.src2_neg(),
                        abs: false,
                    })
                }
                Format::AluWord1LdsIdxOp => {
                    let word1: AluWord1LdsIdxOp = self.word(1);
                    Some(Src {
                        sel: word1.src2_sel(),
                        rel: word1.src2_rel(),
                        chan: word1.src2_chan(),
                        neg: false,
                        abs: false,
                    })
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Source operands reading the literal pool.
    pub(crate) fn literal_srcs(&self) -> impl Iterator<Item = Src> + '_ {
        let count = if self.info.fmt[1] == Format::AluWord1Op3 {
            3
        } else {
            2
        };
        (0..count)
            .filter_map(|i| self.src(i))
            .filter(|src| src.sel == SRC_LITERAL)
    }
}

impl fmt::Debug for Insn {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Insn")
            .field("name", &self.info.name)
            .field("words", &self.words())
            .field("lane", &self.lane)
            .finish()
    }
}
