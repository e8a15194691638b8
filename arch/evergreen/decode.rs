use evgasm_core::{bytes::Bytes, error::Error, utils::zextract};

use crate::{insn::Insn, table::InsnTable};

/// Size of a CF or ALU instruction.
pub const CF_INSN_SIZE: usize = 8;
pub const ALU_INSN_SIZE: usize = 8;
/// Size of a fetch instruction including the padding word.
pub const TC_INSN_SIZE: usize = 16;

/// Where decoding continues after a CF instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Next {
    Offset(usize),
    EndOfProgram,
}

/// Instruction decoder over a shared [`InsnTable`].
#[derive(Copy, Clone)]
pub struct Decoder {
    table: &'static InsnTable,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_table(InsnTable::get())
    }

    pub fn with_table(table: &'static InsnTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static InsnTable {
        self.table
    }

    /// Decodes a control-flow instruction at `offset`.
    ///
    /// The 4-bit CF_ALU opcode is tried before the 8-bit CF opcode.
    pub fn decode_cf(&self, buf: &[u8], offset: usize) -> Result<(Insn, Next), Error> {
        let [word0, word1] = Bytes::at(buf, offset).read_words::<2>()?;
        let info = self
            .table
            .cf_short(zextract(word1, 26, 4))
            .or_else(|| self.table.cf_long(zextract(word1, 22, 8)))
            .ok_or(Error::UnknownInstruction {
                offset,
                word: word1,
            })?;
        let insn = Insn::new(info, [word0, word1, 0]);

        let eop = info.fmt[1].has_end_of_program() && zextract::<u32, u32>(word1, 21, 1) != 0;
        let next = if eop {
            Next::EndOfProgram
        } else {
            Next::Offset(offset + CF_INSN_SIZE)
        };
        Ok((insn, next))
    }

    /// Decodes one ALU instruction at `offset`.
    ///
    /// The 5-bit OP3 opcode is tried before the 11-bit OP2 opcode.
    pub fn decode_alu(&self, buf: &[u8], offset: usize) -> Result<(Insn, usize), Error> {
        let [word0, word1] = Bytes::at(buf, offset).read_words::<2>()?;
        let info = self
            .table
            .alu_short(zextract(word1, 13, 5))
            .or_else(|| self.table.alu_long(zextract(word1, 7, 11)))
            .ok_or(Error::UnknownInstruction {
                offset,
                word: word1,
            })?;
        Ok((Insn::new(info, [word0, word1, 0]), offset + ALU_INSN_SIZE))
    }

    /// Decodes a texture, vertex or memory read instruction at `offset`.
    pub fn decode_tc(&self, buf: &[u8], offset: usize) -> Result<(Insn, usize), Error> {
        let words = Bytes::at(buf, offset).read_words::<3>()?;
        let info = self
            .table
            .tex(zextract(words[0], 0, 5))
            .ok_or(Error::UnknownInstruction {
                offset,
                word: words[0],
            })?;
        Ok((Insn::new(info, words), offset + TC_INSN_SIZE))
    }
}
