//! Format-string driven instruction renderer.

use core::fmt::{self, Write};

use evgasm_core::{
    error::Error,
    printer::{FormatterFn, PrinterExt},
};

use crate::{
    dump,
    group::AluGroup,
    insn::{Insn, Lane, Src, SRC_LITERAL, SRC_PV},
    maps::{asm, field},
    table::Category,
    words::*,
};

/// Position of an instruction in the listing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    /// Instruction counter, printed before the instruction.
    pub count: Option<usize>,
    /// Loop nesting depth, each level indents by 4 columns.
    pub loop_idx: usize,
    pub lane: Option<Lane>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Token {
    Name,
    AluDst,
    AluSrc0,
    AluSrc1,
    AluSrc2,
    AluMod,
    Omod,
    Clamp,
    CfAddr,
    CfCnt,
    CfStreamId,
    PopCount,
    CfCond,
    CfConst,
    Wqm,
    Vpm,
    CfAluAddr,
    CfAluCnt,
    LoopIdx,
    Mark,
    BurstCount,
    NoBarrier,
    Kcache,
    ExpType,
    ExpArrayBase,
    ExpRwGpr,
    ExpIndexGpr,
    RatInst,
    RatId,
    RatIndexMode,
    RatIndexGpr,
    CompMask,
    RatRwGpr,
    ArraySize,
    ElemSize,
    VtxDstGpr,
    VtxFetchType,
    VtxFetchWholeQuad,
    VtxBufferId,
    VtxSrcGpr,
    VtxDataFormat,
    VtxNumFormat,
    VtxFormatComp,
    VtxSrfMode,
    VtxOffset,
    VtxEndianSwap,
    VtxCbns,
    VtxMegaFetch,
    LdsOp,
    Nl,
    Dump,
    TexSrcReg,
    TexDstReg,
    TexResId,
    TexSamplerId,
    TexProps,
    MemOpName,
}

#[rustfmt::skip]
const TOKENS: &[(&str, Token)] = &[
    ("name", Token::Name),
    ("alu_dst", Token::AluDst),
    ("alu_src0", Token::AluSrc0),
    ("alu_src1", Token::AluSrc1),
    ("alu_src2", Token::AluSrc2),
    ("alu_mod", Token::AluMod),
    ("omod", Token::Omod),
    ("clamp", Token::Clamp),
    ("cf_addr", Token::CfAddr),
    ("cf_cnt", Token::CfCnt),
    ("cf_stream_id", Token::CfStreamId),
    ("pop_count", Token::PopCount),
    ("cf_cond", Token::CfCond),
    ("cf_const", Token::CfConst),
    ("wqm", Token::Wqm),
    ("vpm", Token::Vpm),
    ("cf_alu_addr", Token::CfAluAddr),
    ("cf_alu_cnt", Token::CfAluCnt),
    ("loop_idx", Token::LoopIdx),
    ("mark", Token::Mark),
    ("burst_count", Token::BurstCount),
    ("no_barrier", Token::NoBarrier),
    ("kcache", Token::Kcache),
    ("exp_type", Token::ExpType),
    ("exp_array_base", Token::ExpArrayBase),
    ("exp_rw_gpr", Token::ExpRwGpr),
    ("exp_index_gpr", Token::ExpIndexGpr),
    ("rat_inst", Token::RatInst),
    ("rat_id", Token::RatId),
    ("rat_index_mode", Token::RatIndexMode),
    ("rat_index_gpr", Token::RatIndexGpr),
    ("comp_mask", Token::CompMask),
    ("rat_rw_gpr", Token::RatRwGpr),
    ("array_size", Token::ArraySize),
    ("elem_size", Token::ElemSize),
    ("vtx_dst_gpr", Token::VtxDstGpr),
    ("vtx_fetch_type", Token::VtxFetchType),
    ("vtx_fetch_whole_quad", Token::VtxFetchWholeQuad),
    ("vtx_buffer_id", Token::VtxBufferId),
    ("vtx_src_gpr", Token::VtxSrcGpr),
    ("vtx_data_format", Token::VtxDataFormat),
    ("vtx_num_format", Token::VtxNumFormat),
    ("vtx_format_comp", Token::VtxFormatComp),
    ("vtx_srf_mode", Token::VtxSrfMode),
    ("vtx_offset", Token::VtxOffset),
    ("vtx_endian_swap", Token::VtxEndianSwap),
    ("vtx_cbns", Token::VtxCbns),
    ("vtx_mega_fetch", Token::VtxMegaFetch),
    ("lds_op", Token::LdsOp),
    ("nl", Token::Nl),
    ("dump", Token::Dump),
    ("tex_src_reg", Token::TexSrcReg),
    ("tex_dst_reg", Token::TexDstReg),
    ("tex_res_id", Token::TexResId),
    ("tex_sampler_id", Token::TexSamplerId),
    ("tex_props", Token::TexProps),
    ("mem_op_name", Token::MemOpName),
];

impl Token {
    /// Matches a token name followed by a non-alphanumeric character.
    fn find(s: &str) -> Option<(Token, usize)> {
        TOKENS
            .iter()
            .find(|(name, _)| {
                s.starts_with(name)
                    && !s[name.len()..].starts_with(|c: char| c.is_ascii_alphanumeric())
            })
            .map(|(name, token)| (*token, name.len()))
    }
}

/// Formats a float like C's `%.9e`.
pub(crate) fn c_exp(value: f32) -> impl fmt::Display {
    FormatterFn(move |fmt| {
        if value.is_nan() {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            return write!(fmt, "{sign}nan");
        }
        if value.is_infinite() {
            let sign = if value.is_sign_negative() { "-" } else { "" };
            return write!(fmt, "{sign}inf");
        }
        let s = format!("{value:.9e}");
        let (mantissa, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let sign = if exp < 0 { '-' } else { '+' };
        write!(fmt, "{mantissa}e{sign}{:02}", exp.abs())
    })
}

fn gpr(gpr: u32, rel: bool, chan: Option<u32>, index_mode: u32) -> impl fmt::Display {
    FormatterFn(move |fmt| {
        let reg = FormatterFn(|fmt| {
            if gpr <= 123 {
                write!(fmt, "R{gpr}")
            } else {
                write!(fmt, "T{}", 127 - gpr)
            }
        });
        match (rel, index_mode) {
            (true, 0..=3) => write!(fmt, "{reg}[A0.{}]", Lane::from_chan(index_mode))?,
            (true, 4) => write!(fmt, "{reg}[AL]")?,
            (true, 5) => write!(fmt, "SR{gpr}")?,
            (true, 6) => write!(fmt, "SR{gpr}[A0.x]")?,
            _ => write!(fmt, "{reg}")?,
        }
        if let Some(chan) = chan {
            write!(fmt, ".{}", Lane::from_chan(chan))?;
        }
        Ok(())
    })
}

/// Component selectors of a 4-component swizzle.
///
/// `unused` is accepted for selector 7 and printed as `_`.
fn swizzle(name: &'static str, sel: [u32; 4], unused: bool) -> Result<Option<String>, Error> {
    let mut out = String::with_capacity(5);
    out.push('.');
    for sel in sel {
        let c = match sel {
            0..=5 => asm::dst_sel(sel).unwrap_or("_"),
            7 if unused => "_",
            _ => return Err(Error::InvalidField { name, value: sel }),
        };
        out.push_str(c);
    }
    let identity = sel.iter().enumerate().all(|(i, s)| *s == i as u32);
    Ok(if identity { None } else { Some(out) })
}

struct Printer<'a, E> {
    ext: &'a E,
    insn: &'a Insn,
    group: Option<&'a AluGroup>,
    loop_idx: usize,
    nl: bool,
}

impl<'a, E: PrinterExt> Printer<'a, E> {
    /// Line break requested by `%nl`, printed before the next optional field.
    fn prefix(&mut self, out: &mut dyn Write) -> fmt::Result {
        if self.nl {
            self.nl = false;
            write!(out, "\n{:1$}", "", self.loop_idx * 4 + 9)?;
        }
        Ok(())
    }

    fn src(&self, out: &mut dyn Write, index: usize) -> Result<(), Error> {
        let Some(Src {
            sel,
            rel,
            chan,
            neg,
            abs,
        }) = self.insn.src(index)
        else {
            return Err(Error::InvalidField {
                name: "src",
                value: index as u32,
            });
        };
        let ext = self.ext;
        let lane = Lane::from_chan(chan);

        if neg {
            out.write_char('-')?;
        }
        if abs {
            out.write_char('|')?;
        }
        match sel {
            0..=127 => {
                let im = self.insn.word::<AluWord0>(0).index_mode();
                ext.print_register(out, gpr(sel, rel, Some(chan), im))?;
            }
            128..=159 => ext.print_register(out, format_args!("KC0[{}].{lane}", sel - 128))?,
            160..=191 => ext.print_register(out, format_args!("KC1[{}].{lane}", sel - 160))?,
            256..=287 => ext.print_register(out, format_args!("KC2[{}].{lane}", sel - 256))?,
            288..=319 => ext.print_register(out, format_args!("KC3[{}].{lane}", sel - 288))?,
            SRC_LITERAL => {
                let value = self
                    .group
                    .and_then(|group| group.literal(chan))
                    .ok_or(Error::InvalidField {
                        name: "src_chan",
                        value: chan,
                    })?;
                let float = c_exp(f32::from_bits(value));
                ext.print_immediate(out, format_args!("({value:#010x}, {float}f).{lane}"))?;
            }
            SRC_PV => ext.print_register(out, format_args!("PV.{lane}"))?,
            _ => ext.print_register(out, asm::src_sel(sel).unwrap_or("<invalid>"))?,
        }
        if abs {
            out.write_char('|')?;
        }
        Ok(())
    }

    fn kcache(
        &self,
        out: &mut dyn Write,
        index: u32,
        bank: u32,
        mode: u32,
        addr: u32,
    ) -> Result<(), Error> {
        match mode {
            0 => Ok(()),
            1 => {
                // FIXME: lock range of KCACHE_LOCK_1 is not verified against hardware
                let (lo, hi) = (addr * 16, addr * 16 + 15);
                self.ext
                    .print_modifier(out, format_args!("KCACHE{index}(CB{bank}:{lo}-{hi}) "))?;
                Ok(())
            }
            _ => Err(Error::InvalidField {
                name: "kcache_mode",
                value: mode,
            }),
        }
    }

    fn print(&mut self, out: &mut dyn Write, slot: Slot) -> Result<(), Error> {
        let ext = self.ext;
        let insn = self.insn;

        write!(out, "{:1$}", "", self.loop_idx * 4)?;
        match (insn.category(), slot.count) {
            (Category::Cf, Some(count)) => ext.print_counter(out, format_args!("{count:02} "))?,
            (Category::Cf, None) => out.write_str("   ")?,
            (_, Some(count)) => ext.print_counter(out, format_args!("   {count:4}  "))?,
            (_, None) => out.write_str("         ")?,
        }
        if let Some(lane) = slot.lane {
            ext.print_slot(out, format_args!("{lane}: "))?;
        }

        let mut s: &'static str = insn.info().fmt_str;
        while let Some(pos) = s.find('%') {
            out.write_str(&s[..pos])?;
            let rest = &s[pos + 1..];
            let (token, len) = Token::find(rest).ok_or(Error::UnknownFormatToken(rest))?;
            self.token(out, token)?;
            s = &rest[len..];
        }
        out.write_str(s)?;
        Ok(())
    }

    fn token(&mut self, out: &mut dyn Write, token: Token) -> Result<(), Error> {
        let ext = self.ext;
        let insn = self.insn;

        match token {
            Token::Name => {
                if insn.category() == Category::Alu {
                    ext.print_mnemonic(out, format_args!("{:<11}", insn.name()))?;
                } else {
                    ext.print_mnemonic(out, insn.name())?;
                }
            }
            Token::AluDst => {
                let word1: AluWord1Op2 = insn.word(1);
                if insn.format(1) == Format::AluWord1Op2 && !word1.write_mask() {
                    out.write_str("____")?;
                } else {
                    let im = insn.word::<AluWord0>(0).index_mode();
                    let reg = gpr(word1.dst_gpr(), word1.dst_rel(), Some(word1.dst_chan()), im);
                    ext.print_register(out, reg)?;
                }
            }
            Token::AluSrc0 => self.src(out, 0)?,
            Token::AluSrc1 => self.src(out, 1)?,
            Token::AluSrc2 => self.src(out, 2)?,
            Token::AluMod => {
                let word0: AluWord0 = insn.word(0);
                let word1: AluWord1Op2 = insn.word(1);
                out.write_str("    ")?;
                out.write_str(asm::bank_swizzle(word1.bank_swizzle()).unwrap_or("<invalid>"))?;
                match word0.pred_sel() {
                    2 => ext.print_modifier(out, " (!p)")?,
                    3 => ext.print_modifier(out, " (p)")?,
                    _ => {}
                }
                if insn.format(1) == Format::AluWord1Op2 {
                    if word1.update_exec_mask() {
                        ext.print_modifier(out, " UPDATE_EXEC_MASK")?;
                    }
                    if word1.update_pred() {
                        ext.print_modifier(out, " UPDATE_PRED")?;
                    }
                }
            }
            Token::Omod => match insn.word::<AluWord1Op2>(1).omod() {
                0 => out.write_str("  ")?,
                1 => ext.print_modifier(out, "*2")?,
                2 => ext.print_modifier(out, "*4")?,
                _ => ext.print_modifier(out, "/2")?,
            },
            Token::Clamp => {
                if insn.word::<AluWord1Op2>(1).clamp() {
                    ext.print_modifier(out, "CLAMP")?;
                }
            }
            Token::CfAddr => ext.print_immediate(out, insn.word::<CfWord0>(0).addr())?,
            Token::CfCnt => ext.print_immediate(out, insn.word::<CfWord1>(1).count() + 1)?,
            Token::CfStreamId => ext.print_immediate(out, insn.word::<CfWord1>(1).count() % 2)?,
            Token::PopCount => {
                let pop_count = insn.word::<CfWord1>(1).pop_count();
                if pop_count != 0 {
                    ext.print_modifier(out, format_args!("POP_CNT({pop_count})"))?;
                }
            }
            Token::CfCond => {
                let word1: CfWord1 = insn.word(1);
                if word1.valid_pixel_mode() && word1.cond() != 0 {
                    let cond = asm::cf_cond(word1.cond()).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("CND({cond})"))?;
                }
            }
            Token::CfConst => {
                let word1: CfWord1 = insn.word(1);
                if word1.valid_pixel_mode() && matches!(word1.cond(), 2 | 3) {
                    ext.print_modifier(out, format_args!("CF_CONST({})", word1.cf_const()))?;
                }
            }
            Token::Wqm => {
                if insn.word::<CfWord1>(1).whole_quad_mode() {
                    ext.print_modifier(out, "WHOLE_QUAD")?;
                }
            }
            Token::Vpm => {
                if insn.word::<CfWord1>(1).valid_pixel_mode() {
                    ext.print_modifier(out, "VPM")?;
                }
            }
            Token::CfAluAddr => ext.print_immediate(out, insn.word::<CfAluWord0>(0).addr())?,
            Token::CfAluCnt => {
                ext.print_immediate(out, insn.word::<CfAluWord1>(1).count() + 1)?;
            }
            Token::LoopIdx => {
                // FIXME: prints CF_CONST, not verified to be the loop index
                let cf_const = insn.word::<CfWord1>(1).cf_const();
                ext.print_register(out, format_args!("i{cf_const}"))?;
            }
            Token::Mark => {
                if insn.word::<AllocExportWord1Buf>(1).mark() {
                    ext.print_modifier(out, "MARK")?;
                }
            }
            Token::BurstCount => {
                let burst_count = insn.word::<AllocExportWord1Buf>(1).burst_count();
                if burst_count != 0 {
                    ext.print_modifier(out, format_args!("BRSTCNT({burst_count})"))?;
                }
            }
            Token::NoBarrier => {
                if !insn.word::<CfWord1>(1).barrier() {
                    ext.print_modifier(out, "NO_BARRIER")?;
                }
            }
            Token::Kcache => {
                let word0: CfAluWord0 = insn.word(0);
                let word1: CfAluWord1 = insn.word(1);
                self.kcache(
                    out,
                    0,
                    word0.kcache_bank0(),
                    word0.kcache_mode0(),
                    word1.kcache_addr0(),
                )?;
                self.kcache(
                    out,
                    1,
                    word0.kcache_bank1(),
                    word1.kcache_mode1(),
                    word1.kcache_addr1(),
                )?;
            }
            Token::ExpType => {
                let ty = insn.word::<AllocExportWord0>(0).ty();
                out.write_str(asm::export_type(ty).unwrap_or("<invalid>"))?;
            }
            Token::ExpArrayBase => {
                let word0: AllocExportWord0 = insn.word(0);
                let base = word0.array_base();
                let base = match word0.ty() {
                    0 => base % 8,
                    1 => base % 4,
                    2 => base % 32,
                    _ => base,
                };
                ext.print_immediate(out, base)?;
            }
            Token::ExpRwGpr => {
                let rw_gpr = insn.word::<AllocExportWord0>(0).rw_gpr();
                let mut sel = None;
                if insn.format(1) == Format::AllocExportWord1Swiz {
                    let word1: AllocExportWord1Swiz = insn.word(1);
                    let raw = [word1.sel_x(), word1.sel_y(), word1.sel_z(), word1.sel_w()];
                    sel = swizzle("sel", raw, true)?;
                }
                let sel = sel.as_deref().unwrap_or("");
                ext.print_register(out, format_args!("R{rw_gpr}{sel}"))?;
            }
            // index register of an indexed export is not decoded
            Token::ExpIndexGpr | Token::RatInst => {
                let rat_inst = insn.word::<AllocExportWord0Rat>(0).rat_inst();
                out.write_str(asm::rat_inst(rat_inst).unwrap_or("<invalid>"))?;
            }
            Token::RatId => ext.print_immediate(out, insn.word::<AllocExportWord0Rat>(0).rat_id())?,
            Token::RatIndexMode => {
                let rim = insn.word::<AllocExportWord0Rat>(0).rat_index_mode();
                if rim != 0 {
                    ext.print_register(out, format_args!("+idx{}", rim - 1))?;
                }
            }
            Token::RatIndexGpr => {
                let index_gpr = insn.word::<AllocExportWord0Rat>(0).index_gpr();
                ext.print_register(out, gpr(index_gpr, false, None, 0))?;
            }
            Token::CompMask => {
                let mask = insn.word::<AllocExportWord1Buf>(1).comp_mask();
                if mask != 0xf {
                    out.write_char('.')?;
                    for (i, c) in ['x', 'y', 'z', 'w'].into_iter().enumerate() {
                        out.write_char(if mask & (1 << i) != 0 { c } else { '_' })?;
                    }
                }
            }
            Token::RatRwGpr => {
                let rw_gpr = insn.word::<AllocExportWord0Rat>(0).rw_gpr();
                ext.print_register(out, gpr(rw_gpr, false, None, 0))?;
            }
            Token::ArraySize => {
                let elem_size = insn.word::<AllocExportWord0>(0).elem_size();
                let array_size = insn.word::<AllocExportWord1Buf>(1).array_size();
                write!(out, "ARRAY_SIZE({array_size}")?;
                if elem_size != 0 {
                    write!(out, ",{}", elem_size + 1)?;
                }
                out.write_char(')')?;
            }
            Token::ElemSize => {
                let elem_size = insn.word::<AllocExportWord0>(0).elem_size();
                if elem_size != 0 {
                    write!(out, "ELEM_SIZE({elem_size})")?;
                }
            }
            Token::VtxDstGpr => {
                let word1: VtxWord1Gpr = insn.word(1);
                ext.print_register(out, gpr(word1.dst_gpr(), word1.dst_rel(), None, 0))?;
                let raw = [
                    word1.dst_sel_x(),
                    word1.dst_sel_y(),
                    word1.dst_sel_z(),
                    word1.dst_sel_w(),
                ];
                if raw != [0, 1, 2, 3] {
                    out.write_char('.')?;
                    for sel in raw {
                        out.write_str(asm::dst_sel(sel).unwrap_or("<invalid>"))?;
                    }
                }
            }
            Token::VtxFetchType => {
                let fetch_type = insn.word::<VtxWord0>(0).fetch_type();
                if fetch_type != 0 {
                    self.prefix(out)?;
                    let name = field::fetch_type(fetch_type).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("FETCH_TYPE({name})"))?;
                }
            }
            Token::VtxFetchWholeQuad => {
                if insn.word::<VtxWord0>(0).fetch_whole_quad() {
                    ext.print_modifier(out, "WHOLE_QUAD")?;
                }
            }
            Token::VtxBufferId => {
                let buffer_id = insn.word::<VtxWord0>(0).buffer_id();
                ext.print_register(out, format_args!("fc{buffer_id}"))?;
            }
            Token::VtxSrcGpr => {
                let word0: VtxWord0 = insn.word(0);
                let reg = gpr(word0.src_gpr(), word0.src_rel(), Some(word0.src_sel_x()), 0);
                ext.print_register(out, reg)?;
            }
            Token::VtxDataFormat => {
                let word1: VtxWord1Gpr = insn.word(1);
                if !word1.use_const_fields() {
                    self.prefix(out)?;
                    let name = field::data_format(word1.data_format()).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("FORMAT({name})"))?;
                }
            }
            Token::VtxNumFormat => {
                let word1: VtxWord1Gpr = insn.word(1);
                let num_format = word1.num_format_all();
                if !word1.use_const_fields() && num_format != 0 {
                    self.prefix(out)?;
                    let name = field::num_format(num_format).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("NUM_FORMAT({name})"))?;
                }
            }
            Token::VtxFormatComp => {
                let word1: VtxWord1Gpr = insn.word(1);
                let format_comp = word1.format_comp_all();
                if !word1.use_const_fields() && format_comp != 0 {
                    self.prefix(out)?;
                    let name = field::format_comp(format_comp).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("FORMAT_COMP({name})"))?;
                }
            }
            Token::VtxSrfMode => {
                let word1: VtxWord1Gpr = insn.word(1);
                let srf_mode = word1.srf_mode_all();
                if !word1.use_const_fields() && srf_mode != 0 {
                    self.prefix(out)?;
                    let name = field::srf_mode(srf_mode).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("SRF_MODE({name})"))?;
                }
            }
            Token::VtxOffset => {
                let offset = insn.word::<VtxWord2>(2).offset();
                if offset != 0 {
                    ext.print_modifier(out, format_args!("OFFSET({offset})"))?;
                }
            }
            Token::VtxEndianSwap => {
                let use_const_fields = insn.word::<VtxWord1Gpr>(1).use_const_fields();
                let endian_swap = insn.word::<VtxWord2>(2).endian_swap();
                if !use_const_fields && endian_swap != 0 {
                    self.prefix(out)?;
                    let name = field::endian_swap(endian_swap).unwrap_or("<invalid>");
                    ext.print_modifier(out, format_args!("ENDIAN_SWAP({name})"))?;
                }
            }
            Token::VtxCbns => {
                if insn.word::<VtxWord2>(2).const_buf_no_stride() {
                    self.prefix(out)?;
                    ext.print_modifier(out, "CONST_BUF_NO_STRIDE")?;
                }
            }
            Token::VtxMegaFetch => {
                let count = insn.word::<VtxWord0>(0).mega_fetch_count();
                ext.print_modifier(out, format_args!("MEGA({})", count + 1))?;
            }
            Token::LdsOp => {
                let lds_op = insn.word::<AluWord1LdsIdxOp>(1).lds_op();
                ext.print_mnemonic(out, field::lds_op(lds_op).unwrap_or("<invalid>"))?;
            }
            Token::Nl => self.nl = true,
            Token::Dump => {
                out.write_str("\n\n")?;
                dump::insn_words(out, insn)?;
            }
            Token::TexSrcReg => {
                let src_gpr = insn.word::<TexWord0>(0).src_gpr();
                let word2: TexWord2 = insn.word(2);
                let raw = [word2.ssx(), word2.ssy(), word2.ssz(), word2.ssw()];
                let sel = swizzle("src_sel", raw, false)?;
                let sel = sel.as_deref().unwrap_or("");
                ext.print_register(out, format_args!("R{src_gpr}{sel}"))?;
            }
            Token::TexDstReg => {
                let word1: TexWord1 = insn.word(1);
                let raw = [word1.dsx(), word1.dsy(), word1.dsz(), word1.dsw()];
                let sel = swizzle("dst_sel", raw, true)?;
                let sel = sel.as_deref().unwrap_or("");
                ext.print_register(out, format_args!("R{}{sel}", word1.dst_gpr()))?;
            }
            Token::TexResId => {
                let resource_id = insn.word::<TexWord0>(0).resource_id();
                ext.print_register(out, format_args!("t{resource_id}"))?;
            }
            Token::TexSamplerId => {
                let sampler_id = insn.word::<TexWord2>(2).sampler_id();
                ext.print_register(out, format_args!("s{sampler_id}"))?;
            }
            Token::TexProps => {
                let word1: TexWord1 = insn.word(1);
                // normalized coordinates can not be told apart from sampler arguments
                if !(word1.ctx() || word1.cty() || word1.ctz() || word1.ctw()) {
                    ext.print_modifier(out, "UNNORM(XYZW)")?;
                }
            }
            Token::MemOpName => match insn.word::<MemRdWord0>(0).mem_op() {
                0 => ext.print_mnemonic(out, "MEM_RD_SCRATCH:")?,
                2 => ext.print_mnemonic(out, "MEM_RD_SCATTER:")?,
                _ => ext.print_mnemonic(out, "UNKNOWN")?,
            },
        }
        Ok(())
    }
}

/// Renders `insn` at `slot`.
///
/// `group` is required for instructions reading the literal pool.
pub fn print_insn<E: PrinterExt>(
    out: &mut dyn Write,
    ext: &E,
    insn: &Insn,
    group: Option<&AluGroup>,
    slot: Slot,
) -> Result<(), Error> {
    let mut printer = Printer {
        ext,
        insn,
        group,
        loop_idx: slot.loop_idx,
        nl: false,
    };
    printer.print(out, slot)
}

/// Collapses runs of whitespace into single spaces.
pub fn single_spaced(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn insn_to_string(insn: &Insn, group: Option<&AluGroup>) -> Result<String, Error> {
    let mut s = String::new();
    print_insn(&mut s, &(), insn, group, Slot::default())?;
    Ok(single_spaced(&s))
}

/// Renders `insn` as `cnt=<n> l=<n> inst="..."`.
pub fn print_insn_debug(
    out: &mut dyn Write,
    insn: &Insn,
    count: Option<usize>,
    loop_idx: Option<usize>,
) -> Result<(), Error> {
    if let Some(count) = count {
        write!(out, "cnt={count} ")?;
    }
    if let Some(loop_idx) = loop_idx {
        write!(out, "l={loop_idx} ")?;
    }
    write!(out, "inst=\"{}\"", insn_to_string(insn, None)?)?;
    Ok(())
}

/// Renders every instruction of `group` on its own line.
///
/// The group id is printed as the counter of the first instruction.
pub fn print_group<E: PrinterExt>(
    out: &mut dyn Write,
    ext: &E,
    group: &AluGroup,
    loop_idx: usize,
) -> Result<(), Error> {
    for (i, insn) in group.insns().iter().enumerate() {
        let slot = Slot {
            count: if i == 0 { Some(group.id()) } else { None },
            loop_idx,
            lane: insn.lane(),
        };
        print_insn(out, ext, insn, Some(group), slot)?;
        out.write_char('\n')?;
    }
    Ok(())
}

/// Renders `group` as `x="..." y="..."`.
pub fn print_group_buf(out: &mut dyn Write, group: &AluGroup) -> Result<(), Error> {
    for (i, insn) in group.insns().iter().enumerate() {
        if i != 0 {
            out.write_char(' ')?;
        }
        let lane = insn.lane().unwrap_or(Lane::Trans);
        write!(out, "{lane}=\"{}\"", insn_to_string(insn, Some(group))?)?;
    }
    Ok(())
}

/// Renders `group` as `cnt=<n> l=<n> inst.x="..." inst.t="..."`.
pub fn print_group_debug(
    out: &mut dyn Write,
    group: &AluGroup,
    count: Option<usize>,
    loop_idx: Option<usize>,
) -> Result<(), Error> {
    if let Some(count) = count {
        write!(out, "cnt={count} ")?;
    }
    if let Some(loop_idx) = loop_idx {
        write!(out, "l={loop_idx} ")?;
    }
    for (i, insn) in group.insns().iter().enumerate() {
        if i != 0 {
            out.write_char(' ')?;
        }
        let lane = insn.lane().unwrap_or(Lane::Trans);
        write!(out, "inst.{lane}=\"{}\"", insn_to_string(insn, Some(group))?)?;
    }
    Ok(())
}
