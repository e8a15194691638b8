//! CF program walker and single-clause decoding.

use core::{fmt::Write, str::FromStr};

use evgasm_core::{error::Error, printer::PrinterExt, ArchDecoder};

use crate::{
    decode::{Decoder, Next, CF_INSN_SIZE},
    dump,
    group::AluGroup,
    insn::Insn,
    printer::{self, Slot},
    table::{opcode, DEC_LOOP_IDX, INC_LOOP_IDX},
    words::{CfAluWord0, CfAluWord1, CfWord0, CfWord1, Format},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Print the field dump of every word after the instruction.
    pub words: bool,
    /// Use `key="value"` renderings.
    pub debug: bool,
}

struct Walker<'a, E> {
    out: &'a mut dyn Write,
    ext: &'a E,
    opts: &'a Options,
    decoder: Decoder,
    loop_idx: usize,
    /// Counter shared by ALU groups and fetch instructions of all clauses.
    clause_count: usize,
}

impl<E: PrinterExt> Walker<'_, E> {
    fn insn(&mut self, insn: &Insn, count: usize) -> Result<(), Error> {
        if self.opts.debug {
            printer::print_insn_debug(self.out, insn, Some(count), Some(self.loop_idx))?;
        } else {
            let slot = Slot {
                count: Some(count),
                loop_idx: self.loop_idx,
                lane: None,
            };
            printer::print_insn(self.out, self.ext, insn, None, slot)?;
        }
        self.out.write_char('\n')?;
        if self.opts.words {
            dump::insn_words(self.out, insn)?;
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    fn group(&mut self, group: &AluGroup) -> Result<(), Error> {
        if self.opts.debug {
            let count = Some(group.id());
            printer::print_group_debug(self.out, group, count, Some(self.loop_idx))?;
            self.out.write_char('\n')?;
        } else {
            printer::print_group(self.out, self.ext, group, self.loop_idx)?;
        }
        if self.opts.words {
            for insn in group.insns() {
                dump::insn_words(self.out, insn)?;
                self.out.write_char('\n')?;
            }
        }
        Ok(())
    }

    fn alu_clause(&mut self, buf: &[u8], cf: &Insn) -> Result<(), Error> {
        let word0: CfAluWord0 = cf.word(0);
        let word1: CfAluWord1 = cf.word(1);
        let mut offset = word0.addr() as usize * 8;
        let end = offset + (word1.count() as usize + 1) * 8;
        while offset < end {
            let (group, next) = self.decoder.decode_alu_group(buf, offset, self.clause_count)?;
            self.group(&group)?;
            self.clause_count += 1;
            offset = next;
        }
        Ok(())
    }

    fn tc_clause(&mut self, buf: &[u8], cf: &Insn) -> Result<(), Error> {
        let word0: CfWord0 = cf.word(0);
        let word1: CfWord1 = cf.word(1);
        let mut offset = word0.addr() as usize * 8;
        let end = offset + (word1.count() as usize + 1) * 16;
        while offset < end {
            let (insn, next) = self.decoder.decode_tc(buf, offset)?;
            self.insn(&insn, self.clause_count)?;
            self.clause_count += 1;
            offset = next;
        }
        Ok(())
    }
}

/// Disassembles the CF program in `buf` with the clauses it references.
///
/// The walk starts at offset 0 and stops after the instruction carrying
/// the end-of-program bit.
pub fn disasm_buffer<E: PrinterExt>(
    out: &mut dyn Write,
    ext: &E,
    buf: &[u8],
    opts: &Options,
) -> Result<(), Error> {
    let mut walker = Walker {
        out,
        ext,
        opts,
        decoder: Decoder::new(),
        loop_idx: 0,
        clause_count: 0,
    };
    let mut offset = 0;
    let mut cf_count = 0;

    loop {
        let (insn, next) = walker.decoder.decode_cf(buf, offset)?;
        if insn.has_flags(DEC_LOOP_IDX) {
            walker.loop_idx = walker.loop_idx.saturating_sub(1);
        }
        walker.insn(&insn, cf_count)?;
        cf_count += 1;

        if insn.format(0) == Format::CfAluWord0 {
            walker.alu_clause(buf, &insn)?;
        }
        if insn.info().opcode == opcode::TC {
            walker.tc_clause(buf, &insn)?;
        }

        if insn.has_flags(INC_LOOP_IDX) {
            walker.loop_idx += 1;
        }
        match next {
            Next::Offset(next) => offset = next,
            Next::EndOfProgram => break,
        }
    }

    Ok(())
}

/// Instruction stream decoded by [`ClauseDecoder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClauseKind {
    Cf,
    Alu,
    Tc,
}

impl FromStr for ClauseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cf" => Ok(Self::Cf),
            "alu" => Ok(Self::Alu),
            "tc" => Ok(Self::Tc),
            _ => Err(format!("unknown clause kind '{s}', expected cf, alu or tc")),
        }
    }
}

#[derive(Clone, Debug)]
enum Unit {
    Insn(Insn),
    Group(AluGroup),
}

/// Linear decoder for a single clause kind.
///
/// CF instructions decode one at a time, ALU clauses one group at a time
/// and fetch clauses one 16-byte slot at a time.
pub struct ClauseDecoder {
    decoder: Decoder,
    kind: ClauseKind,
    opts: Options,
    counter: bool,
    count: usize,
    last: Option<(Unit, usize)>,
}

impl ClauseDecoder {
    pub fn new(kind: ClauseKind) -> Self {
        Self {
            decoder: Decoder::new(),
            kind,
            opts: Options::default(),
            counter: false,
            count: 0,
            last: None,
        }
    }

    pub fn with_options(mut self, opts: Options) -> Self {
        self.opts = opts;
        self
    }

    /// Print the unit counter before each unit.
    pub fn with_counter(mut self, counter: bool) -> Self {
        self.counter = counter;
        self
    }

    pub fn kind(&self) -> ClauseKind {
        self.kind
    }

    /// Prints the word dumps of the last decoded unit.
    pub fn print_words(&self, out: &mut dyn Write) -> Result<(), Error> {
        match &self.last {
            Some((Unit::Insn(insn), _)) => dump::insn_words(out, insn)?,
            Some((Unit::Group(group), _)) => {
                for insn in group.insns() {
                    dump::insn_words(out, insn)?;
                }
            }
            None => {}
        }
        Ok(())
    }
}

impl ArchDecoder for ClauseDecoder {
    fn decode(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        let count = self.count;
        let (unit, len) = match self.kind {
            ClauseKind::Cf => {
                let (insn, _) = self.decoder.decode_cf(bytes, 0)?;
                (Unit::Insn(insn), CF_INSN_SIZE)
            }
            ClauseKind::Alu => {
                let (group, len) = self.decoder.decode_alu_group(bytes, 0, count)?;
                (Unit::Group(group), len)
            }
            ClauseKind::Tc => {
                let (insn, len) = self.decoder.decode_tc(bytes, 0)?;
                (Unit::Insn(insn), len)
            }
        };
        self.last = Some((unit, count));
        self.count += 1;
        Ok(len)
    }

    fn print(&self, out: &mut Vec<String>) -> Result<(), Error> {
        let Some((unit, count)) = &self.last else {
            return Ok(());
        };
        let count = self.counter.then_some(*count);
        match unit {
            Unit::Insn(insn) => {
                let mut s = String::new();
                if self.opts.debug {
                    printer::print_insn_debug(&mut s, insn, count, None)?;
                } else {
                    let slot = Slot {
                        count,
                        ..Slot::default()
                    };
                    printer::print_insn(&mut s, &(), insn, None, slot)?;
                }
                out.push(s);
            }
            Unit::Group(group) if self.opts.debug => {
                let mut s = String::new();
                printer::print_group_debug(&mut s, group, count, None)?;
                out.push(s);
            }
            Unit::Group(group) => {
                for (i, insn) in group.insns().iter().enumerate() {
                    let slot = Slot {
                        count: if i == 0 { count } else { None },
                        loop_idx: 0,
                        lane: insn.lane(),
                    };
                    let mut s = String::new();
                    printer::print_insn(&mut s, &(), insn, Some(group), slot)?;
                    out.push(s);
                }
            }
        }
        Ok(())
    }
}
