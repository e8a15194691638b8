//! Field-by-field dumps of microcode words.

use core::fmt::{self, Write};

use crate::{insn::Insn, maps::field as map, words::*};

type Map = fn(u32) -> Option<&'static str>;

fn line(out: &mut dyn Write, name: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(out, "  {name} = {value}")
}

fn line_map(out: &mut dyn Write, name: &str, value: u32, map: Map) -> fmt::Result {
    let s = map(value).unwrap_or("<invalid>");
    writeln!(out, "  {name} = {value} ({s})")
}

fn line_hex(out: &mut dyn Write, name: &str, value: u32) -> fmt::Result {
    writeln!(out, "  {name} = {value:#x}")
}

fn line_src_sel(out: &mut dyn Write, name: &str, sel: u32) -> fmt::Result {
    write!(out, "  {name} = {sel} (")?;
    match sel {
        0..=127 => write!(out, "GPR[{sel}]")?,
        128..=159 => write!(out, "Kcache constant {} in bank 0", sel - 128)?,
        160..=191 => write!(out, "Kcache constant {} in bank 1", sel - 160)?,
        256..=287 => write!(out, "Kcache constant {} in bank 2", sel - 256)?,
        288..=319 => write!(out, "Kcache constant {} in bank 3", sel - 288)?,
        _ => out.write_str(map::alu_src_sel(sel).unwrap_or("<invalid>"))?,
    }
    out.write_str(")\n")
}

fn cf_word0(out: &mut dyn Write, w: CfWord0) -> fmt::Result {
    line(out, "addr", w.addr())?;
    line_map(out, "jump_table_sel", w.jump_table_sel(), map::jump_table_sel)
}

fn cf_gws_word0(out: &mut dyn Write, w: CfGwsWord0) -> fmt::Result {
    line(out, "value", w.value())?;
    line(out, "resource", w.resource())?;
    line(out, "sign", w.s() as u32)?;
    line_map(out, "val_index_mode", w.val_index_mode(), map::gws_index_mode)?;
    line_map(out, "rsrc_index_mode", w.rsrc_index_mode(), map::gws_index_mode)?;
    line_map(out, "gws_opcode", w.gws_opcode(), map::gws_opcode)
}

fn cf_word1(out: &mut dyn Write, w: CfWord1) -> fmt::Result {
    line(out, "pop_count", w.pop_count())?;
    line(out, "cf_const", w.cf_const())?;
    line_map(out, "cond", w.cond(), map::cf_cond)?;
    line(out, "count", w.count())?;
    line(out, "valid_pixel_mode", w.valid_pixel_mode() as u32)?;
    line(out, "end_of_program", w.end_of_program() as u32)?;
    line_map(out, "cf_inst", w.cf_inst(), map::cf_inst)?;
    line(out, "whole_quad_mode", w.whole_quad_mode() as u32)?;
    line(out, "barrier", w.barrier() as u32)
}

fn cf_alu_word0(out: &mut dyn Write, w: CfAluWord0) -> fmt::Result {
    line(out, "addr", w.addr())?;
    line(out, "kcache_bank0", w.kcache_bank0())?;
    line(out, "kcache_bank1", w.kcache_bank1())?;
    line_map(out, "kcache_mode0", w.kcache_mode0(), map::kcache_mode)
}

fn cf_alu_word1(out: &mut dyn Write, w: CfAluWord1) -> fmt::Result {
    line_map(out, "kcache_mode1", w.kcache_mode1(), map::kcache_mode)?;
    line_hex(out, "kcache_addr0", w.kcache_addr0())?;
    line_hex(out, "kcache_addr1", w.kcache_addr1())?;
    line(out, "count", w.count())?;
    line(out, "alt_const", w.alt_const() as u32)?;
    line_map(out, "cf_inst", w.cf_inst(), map::cf_alu_inst)?;
    line(out, "whole_quad_mode", w.whole_quad_mode() as u32)?;
    line(out, "barrier", w.barrier() as u32)
}

fn cf_alu_word0_ext(out: &mut dyn Write, w: CfAluWord0Ext) -> fmt::Result {
    let modes = [
        w.kcache_bank_index_mode0(),
        w.kcache_bank_index_mode1(),
        w.kcache_bank_index_mode2(),
        w.kcache_bank_index_mode3(),
    ];
    for (i, mode) in modes.into_iter().enumerate() {
        writeln!(
            out,
            "  kcache_bank_index_mode{i} = {mode} ({})",
            map::cf_index_mode(mode).unwrap_or("<invalid>")
        )?;
    }
    line(out, "kcache_bank2", w.kcache_bank2())?;
    line(out, "kcache_bank3", w.kcache_bank3())?;
    line_map(out, "kcache_mode2", w.kcache_mode2(), map::kcache_mode)
}

fn cf_alu_word1_ext(out: &mut dyn Write, w: CfAluWord1Ext) -> fmt::Result {
    line_map(out, "kcache_mode3", w.kcache_mode3(), map::kcache_mode)?;
    line_hex(out, "kcache_addr2", w.kcache_addr2())?;
    line_hex(out, "kcache_addr3", w.kcache_addr3())?;
    line_map(out, "cf_inst", w.cf_inst(), map::cf_alu_inst)?;
    line(out, "barrier", w.barrier() as u32)
}

fn alloc_export_word0(out: &mut dyn Write, w: AllocExportWord0) -> fmt::Result {
    line(out, "array_base", w.array_base())?;
    line_map(out, "type", w.ty(), map::export_type)?;
    line(out, "rw_gpr", w.rw_gpr())?;
    line_map(out, "rw_rel", w.rr() as u32, map::rel)?;
    line(out, "index_gpr", w.index_gpr())?;
    line(out, "elem_size", w.elem_size())
}

fn alloc_export_word0_rat(out: &mut dyn Write, w: AllocExportWord0Rat) -> fmt::Result {
    line(out, "rat_id", w.rat_id())?;
    line_map(out, "rat_inst", w.rat_inst(), map::rat_inst)?;
    line_map(out, "rat_index_mode", w.rat_index_mode(), map::cf_index_mode)?;
    line_map(out, "type", w.ty(), map::export_type)?;
    line(out, "rw_gpr", w.rw_gpr())?;
    line_map(out, "rw_rel", w.rr() as u32, map::rel)?;
    line(out, "index_gpr", w.index_gpr())?;
    line(out, "elem_size", w.elem_size())
}

fn alloc_export_word1_buf(out: &mut dyn Write, w: AllocExportWord1Buf) -> fmt::Result {
    line(out, "array_size", w.array_size())?;
    line_hex(out, "comp_mask", w.comp_mask())?;
    line(out, "burst_count", w.burst_count())?;
    line(out, "valid_pixel_mode", w.valid_pixel_mode() as u32)?;
    line(out, "end_of_program", w.end_of_program() as u32)?;
    line_map(out, "cf_inst", w.cf_inst(), map::cf_inst)?;
    line(out, "mark", w.mark() as u32)?;
    line(out, "barrier", w.barrier() as u32)
}

fn alloc_export_word1_swiz(out: &mut dyn Write, w: AllocExportWord1Swiz) -> fmt::Result {
    line_map(out, "sel_x", w.sel_x(), map::sel)?;
    line_map(out, "sel_y", w.sel_y(), map::sel)?;
    line_map(out, "sel_z", w.sel_z(), map::sel)?;
    line_map(out, "sel_w", w.sel_w(), map::sel)?;
    line(out, "burst_count", w.burst_count())?;
    line(out, "valid_pixel_mode", w.valid_pixel_mode() as u32)?;
    line(out, "end_of_program", w.end_of_program() as u32)?;
    line_map(out, "cf_inst", w.cf_inst(), map::cf_inst)?;
    line(out, "mark", w.mark() as u32)?;
    line(out, "barrier", w.barrier() as u32)
}

fn alu_word0(out: &mut dyn Write, w: AluWord0) -> fmt::Result {
    line_src_sel(out, "src0_sel", w.src0_sel())?;
    line_src_sel(out, "src1_sel", w.src1_sel())?;
    line_map(out, "src0_rel", w.src0_rel() as u32, map::rel)?;
    line_map(out, "src1_rel", w.src1_rel() as u32, map::rel)?;
    line_map(out, "src0_chan", w.src0_chan(), map::chan)?;
    line_map(out, "src1_chan", w.src1_chan(), map::chan)?;
    line(out, "src0_neg", w.src0_neg() as u32)?;
    line(out, "src1_neg", w.src1_neg() as u32)?;
    line_map(out, "index_mode", w.index_mode(), map::index_mode)?;
    line_map(out, "pred_sel", w.pred_sel(), map::pred_sel)?;
    line(out, "last", w.last() as u32)
}

fn alu_word1_op2(out: &mut dyn Write, w: AluWord1Op2) -> fmt::Result {
    line(out, "src0_abs", w.src0_abs() as u32)?;
    line(out, "src1_abs", w.src1_abs() as u32)?;
    line(out, "update_exec_mask", w.update_exec_mask() as u32)?;
    line(out, "update_pred", w.update_pred() as u32)?;
    line(out, "write_mask", w.write_mask() as u32)?;
    line_map(out, "omod", w.omod(), map::omod)?;
    line_map(out, "alu_inst", w.alu_inst(), map::op2_inst)?;
    line_map(out, "bank_swizzle", w.bank_swizzle(), map::bank_swizzle)?;
    line(out, "dst_gpr", w.dst_gpr())?;
    line_map(out, "dst_rel", w.dst_rel() as u32, map::rel)?;
    line_map(out, "dst_chan", w.dst_chan(), map::chan)?;
    line(out, "clamp", w.clamp() as u32)
}

fn alu_word1_op3(out: &mut dyn Write, w: AluWord1Op3) -> fmt::Result {
    line_src_sel(out, "src2_sel", w.src2_sel())?;
    line_map(out, "src2_rel", w.src2_rel() as u32, map::rel)?;
    line_map(out, "src2_chan", w.src2_chan(), map::chan)?;
    line(out, "src2_neg", w.src2_neg() as u32)?;
    line_map(out, "alu_inst", w.alu_inst(), map::op3_inst)?;
    line_map(out, "bank_swizzle", w.bank_swizzle(), map::bank_swizzle)?;
    line(out, "dst_gpr", w.dst_gpr())?;
    line_map(out, "dst_rel", w.dst_rel() as u32, map::rel)?;
    line_map(out, "dst_chan", w.dst_chan(), map::chan)?;
    line(out, "clamp", w.clamp() as u32)
}

fn alu_word0_lds_idx_op(out: &mut dyn Write, w: AluWord0LdsIdxOp) -> fmt::Result {
    line_src_sel(out, "src0_sel", w.src0_sel())?;
    line_map(out, "src0_rel", w.src0_rel() as u32, map::rel)?;
    line_map(out, "src0_chan", w.src0_chan(), map::chan)?;
    line(out, "idx_offset_4", w.idx_offset_4() as u32)?;
    line_src_sel(out, "src1_sel", w.src1_sel())?;
    line_map(out, "src1_rel", w.src1_rel() as u32, map::rel)?;
    line_map(out, "src1_chan", w.src1_chan(), map::chan)?;
    line(out, "idx_offset_5", w.idx_offset_5() as u32)?;
    line_map(out, "index_mode", w.index_mode(), map::index_mode)?;
    line_map(out, "pred_sel", w.pred_sel(), map::pred_sel)?;
    line(out, "last", w.last() as u32)
}

fn alu_word1_lds_idx_op(out: &mut dyn Write, w: AluWord1LdsIdxOp) -> fmt::Result {
    line_src_sel(out, "src2_sel", w.src2_sel())?;
    line_map(out, "src2_rel", w.src2_rel() as u32, map::rel)?;
    line_map(out, "src2_chan", w.src2_chan(), map::chan)?;
    line(out, "idx_offset_1", w.idx_offset_1() as u32)?;
    line_map(out, "alu_inst", w.alu_inst(), map::op3_inst)?;
    line_map(out, "bank_swizzle", w.bank_swizzle(), map::bank_swizzle)?;
    let lds_op = map::lds_op(w.lds_op()).unwrap_or("<invalid>");
    writeln!(out, "  lds_op = {} (DS_INST_{lds_op})", w.lds_op())?;
    line(out, "idx_offset_0", w.idx_offset_0() as u32)?;
    line(out, "idx_offset_2", w.idx_offset_2() as u32)?;
    line_map(out, "dst_chan", w.dst_chan(), map::chan)?;
    line(out, "idx_offset_3", w.idx_offset_3() as u32)
}

fn vtx_word0(out: &mut dyn Write, w: VtxWord0) -> fmt::Result {
    line_map(out, "vc_inst", w.vc_inst(), map::vc_inst)?;
    line_map(out, "fetch_type", w.fetch_type(), map::fetch_type)?;
    line(out, "fetch_whole_quad", w.fetch_whole_quad() as u32)?;
    line(out, "buffer_id", w.buffer_id())?;
    line(out, "src_gpr", w.src_gpr())?;
    line(out, "src_rel", w.src_rel() as u32)?;
    line_map(out, "src_sel_x", w.src_sel_x(), map::vtx_src_sel)?;
    line(out, "mega_fetch_count", w.mega_fetch_count())
}

fn vtx_word1_gpr(out: &mut dyn Write, w: VtxWord1Gpr) -> fmt::Result {
    line(out, "dst_gpr", w.dst_gpr())?;
    line(out, "dst_rel", w.dst_rel() as u32)?;
    line_map(out, "dst_sel_x", w.dst_sel_x(), map::sel)?;
    line_map(out, "dst_sel_y", w.dst_sel_y(), map::sel)?;
    line_map(out, "dst_sel_z", w.dst_sel_z(), map::sel)?;
    line_map(out, "dst_sel_w", w.dst_sel_w(), map::sel)?;
    line(out, "use_const_fields", w.use_const_fields() as u32)?;
    line_map(out, "data_format", w.data_format(), map::data_format)?;
    line_map(out, "num_format_all", w.num_format_all(), map::num_format)?;
    line_map(out, "format_comp_all", w.format_comp_all(), map::format_comp)?;
    line_map(out, "srf_mode_all", w.srf_mode_all(), map::srf_mode)
}

fn vtx_word2(out: &mut dyn Write, w: VtxWord2) -> fmt::Result {
    line_hex(out, "offset", w.offset())?;
    line_map(out, "endian_swap", w.endian_swap(), map::endian_swap)?;
    line(out, "const_buf_no_stride", w.const_buf_no_stride() as u32)?;
    line(out, "mega_fetch", w.mega_fetch() as u32)
}

/// Prints the hex bytes of `word` and its fields as `fmt`.
pub fn word_dump(out: &mut dyn Write, word: u32, fmt: Format) -> fmt::Result {
    out.write_str("Hex dump: ")?;
    for b in word.to_le_bytes() {
        write!(out, "{b:02x} ")?;
    }
    out.write_char('\n')?;

    let body: fn(&mut dyn Write, u32) -> fmt::Result = match fmt {
        Format::CfWord0 => |out, w| cf_word0(out, w.into()),
        Format::CfGwsWord0 => |out, w| cf_gws_word0(out, w.into()),
        Format::CfWord1 => |out, w| cf_word1(out, w.into()),
        Format::CfAluWord0 => |out, w| cf_alu_word0(out, w.into()),
        Format::CfAluWord1 => |out, w| cf_alu_word1(out, w.into()),
        Format::CfAluWord0Ext => |out, w| cf_alu_word0_ext(out, w.into()),
        Format::CfAluWord1Ext => |out, w| cf_alu_word1_ext(out, w.into()),
        Format::AllocExportWord0 => |out, w| alloc_export_word0(out, w.into()),
        Format::AllocExportWord0Rat => |out, w| alloc_export_word0_rat(out, w.into()),
        Format::AllocExportWord1Buf => |out, w| alloc_export_word1_buf(out, w.into()),
        Format::AllocExportWord1Swiz => |out, w| alloc_export_word1_swiz(out, w.into()),
        Format::AluWord0 => |out, w| alu_word0(out, w.into()),
        Format::AluWord1Op2 => |out, w| alu_word1_op2(out, w.into()),
        Format::AluWord1Op3 => |out, w| alu_word1_op3(out, w.into()),
        Format::AluWord0LdsIdxOp => |out, w| alu_word0_lds_idx_op(out, w.into()),
        Format::AluWord1LdsIdxOp => |out, w| alu_word1_lds_idx_op(out, w.into()),
        Format::VtxWord0 => |out, w| vtx_word0(out, w.into()),
        Format::VtxWord1Gpr => |out, w| vtx_word1_gpr(out, w.into()),
        Format::VtxWord2 => |out, w| vtx_word2(out, w.into()),
        _ => return out.write_str("dump: unsupported microcode format\n"),
    };
    writeln!(out, "{}", fmt.name())?;
    body(out, word)
}

/// Prints the mnemonic of `insn` followed by the dumps of its words.
pub fn insn_words(out: &mut dyn Write, insn: &Insn) -> fmt::Result {
    writeln!(out, "{}", insn.name())?;
    for (word, fmt) in insn.words().iter().zip(insn.info().fmt) {
        word_dump(out, *word, fmt)?;
    }
    Ok(())
}
