//! Bit layouts of the 32-bit microcode words.

use core::fmt;

use evgasm_core::utils::sextract;

fn sext5(value: u32) -> i32 {
    sextract(value, 0, 5)
}

fn sext7(value: u32) -> i32 {
    sextract(value, 0, 7)
}

macro_rules! word {
    ($(
        $(#[$attr:meta])*
        $name:ident {
            $($field:ident, $set:ident = $pos:expr, $len:expr, $ret:tt $(, $map:expr)?;)*
        }
    )*) => ($(
        $(#[$attr])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn raw(&self) -> u32 {
                self.0
            }

            evgasm_core::impl_field! {
                $($field, $set = $pos, $len, $ret $(, $map)?;)*
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                fmt.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field()))*
                    .finish()
            }
        }
    )*);
}

word! {
    CfWord0 {
        addr, with_addr = 0, 24, u32;
        jump_table_sel, with_jump_table_sel = 24, 3, u32;
    }

    CfGwsWord0 {
        value, with_value = 0, 10, u32;
        resource, with_resource = 16, 5, u32;
        s, with_s = 25, 1, bool;
        val_index_mode, with_val_index_mode = 26, 2, u32;
        rsrc_index_mode, with_rsrc_index_mode = 28, 2, u32;
        gws_opcode, with_gws_opcode = 30, 2, u32;
    }

    CfWord1 {
        pop_count, with_pop_count = 0, 3, u32;
        cf_const, with_cf_const = 3, 5, u32;
        cond, with_cond = 8, 2, u32;
        count, with_count = 10, 6, u32;
        valid_pixel_mode, with_valid_pixel_mode = 20, 1, bool;
        end_of_program, with_end_of_program = 21, 1, bool;
        cf_inst, with_cf_inst = 22, 8, u32;
        whole_quad_mode, with_whole_quad_mode = 30, 1, bool;
        barrier, with_barrier = 31, 1, bool;
    }

    CfAluWord0 {
        addr, with_addr = 0, 22, u32;
        kcache_bank0, with_kcache_bank0 = 22, 4, u32;
        kcache_bank1, with_kcache_bank1 = 26, 4, u32;
        kcache_mode0, with_kcache_mode0 = 30, 2, u32;
    }

    CfAluWord1 {
        kcache_mode1, with_kcache_mode1 = 0, 2, u32;
        kcache_addr0, with_kcache_addr0 = 2, 8, u32;
        kcache_addr1, with_kcache_addr1 = 10, 8, u32;
        count, with_count = 18, 7, u32;
        alt_const, with_alt_const = 25, 1, bool;
        cf_inst, with_cf_inst = 26, 4, u32;
        whole_quad_mode, with_whole_quad_mode = 30, 1, bool;
        barrier, with_barrier = 31, 1, bool;
    }

    CfAluWord0Ext {
        kcache_bank_index_mode0, with_kcache_bank_index_mode0 = 4, 2, u32;
        kcache_bank_index_mode1, with_kcache_bank_index_mode1 = 6, 2, u32;
        kcache_bank_index_mode2, with_kcache_bank_index_mode2 = 8, 2, u32;
        kcache_bank_index_mode3, with_kcache_bank_index_mode3 = 10, 2, u32;
        kcache_bank2, with_kcache_bank2 = 22, 4, u32;
        kcache_bank3, with_kcache_bank3 = 26, 4, u32;
        kcache_mode2, with_kcache_mode2 = 30, 2, u32;
    }

    CfAluWord1Ext {
        kcache_mode3, with_kcache_mode3 = 0, 2, u32;
        kcache_addr2, with_kcache_addr2 = 2, 8, u32;
        kcache_addr3, with_kcache_addr3 = 10, 8, u32;
        cf_inst, with_cf_inst = 26, 4, u32;
        barrier, with_barrier = 31, 1, bool;
    }

    AllocExportWord0 {
        array_base, with_array_base = 0, 13, u32;
        ty, with_ty = 13, 2, u32;
        rw_gpr, with_rw_gpr = 15, 7, u32;
        rr, with_rr = 22, 1, bool;
        index_gpr, with_index_gpr = 23, 7, u32;
        elem_size, with_elem_size = 30, 2, u32;
    }

    AllocExportWord0Rat {
        rat_id, with_rat_id = 0, 4, u32;
        rat_inst, with_rat_inst = 4, 6, u32;
        rat_index_mode, with_rat_index_mode = 11, 2, u32;
        ty, with_ty = 13, 2, u32;
        rw_gpr, with_rw_gpr = 15, 7, u32;
        rr, with_rr = 22, 1, bool;
        index_gpr, with_index_gpr = 23, 7, u32;
        elem_size, with_elem_size = 30, 2, u32;
    }

    AllocExportWord1Buf {
        array_size, with_array_size = 0, 12, u32;
        comp_mask, with_comp_mask = 12, 4, u32;
        burst_count, with_burst_count = 16, 4, u32;
        valid_pixel_mode, with_valid_pixel_mode = 20, 1, bool;
        end_of_program, with_end_of_program = 21, 1, bool;
        cf_inst, with_cf_inst = 22, 8, u32;
        mark, with_mark = 30, 1, bool;
        barrier, with_barrier = 31, 1, bool;
    }

    AllocExportWord1Swiz {
        sel_x, with_sel_x = 0, 3, u32;
        sel_y, with_sel_y = 3, 3, u32;
        sel_z, with_sel_z = 6, 3, u32;
        sel_w, with_sel_w = 9, 3, u32;
        burst_count, with_burst_count = 16, 4, u32;
        valid_pixel_mode, with_valid_pixel_mode = 20, 1, bool;
        end_of_program, with_end_of_program = 21, 1, bool;
        cf_inst, with_cf_inst = 22, 8, u32;
        mark, with_mark = 30, 1, bool;
        barrier, with_barrier = 31, 1, bool;
    }

    AluWord0 {
        src0_sel, with_src0_sel = 0, 9, u32;
        src0_rel, with_src0_rel = 9, 1, bool;
        src0_chan, with_src0_chan = 10, 2, u32;
        src0_neg, with_src0_neg = 12, 1, bool;
        src1_sel, with_src1_sel = 13, 9, u32;
        src1_rel, with_src1_rel = 22, 1, bool;
        src1_chan, with_src1_chan = 23, 2, u32;
        src1_neg, with_src1_neg = 25, 1, bool;
        index_mode, with_index_mode = 26, 3, u32;
        pred_sel, with_pred_sel = 29, 2, u32;
        last, with_last = 31, 1, bool;
    }

    AluWord1Op2 {
        src0_abs, with_src0_abs = 0, 1, bool;
        src1_abs, with_src1_abs = 1, 1, bool;
        update_exec_mask, with_update_exec_mask = 2, 1, bool;
        update_pred, with_update_pred = 3, 1, bool;
        write_mask, with_write_mask = 4, 1, bool;
        omod, with_omod = 5, 2, u32;
        alu_inst, with_alu_inst = 7, 11, u32;
        bank_swizzle, with_bank_swizzle = 18, 3, u32;
        dst_gpr, with_dst_gpr = 21, 7, u32;
        dst_rel, with_dst_rel = 28, 1, bool;
        dst_chan, with_dst_chan = 29, 2, u32;
        clamp, with_clamp = 31, 1, bool;
    }

    AluWord1Op3 {
        src2_sel, with_src2_sel = 0, 9, u32;
        src2_rel, with_src2_rel = 9, 1, bool;
        src2_chan, with_src2_chan = 10, 2, u32;
        src2_neg, with_src2_neg = 12, 1, bool;
        alu_inst, with_alu_inst = 13, 5, u32;
        bank_swizzle, with_bank_swizzle = 18, 3, u32;
        dst_gpr, with_dst_gpr = 21, 7, u32;
        dst_rel, with_dst_rel = 28, 1, bool;
        dst_chan, with_dst_chan = 29, 2, u32;
        clamp, with_clamp = 31, 1, bool;
    }

    AluWord0LdsIdxOp {
        src0_sel, with_src0_sel = 0, 9, u32;
        src0_rel, with_src0_rel = 9, 1, bool;
        src0_chan, with_src0_chan = 10, 2, u32;
        idx_offset_4, with_idx_offset_4 = 12, 1, bool;
        src1_sel, with_src1_sel = 13, 9, u32;
        src1_rel, with_src1_rel = 22, 1, bool;
        src1_chan, with_src1_chan = 23, 2, u32;
        idx_offset_5, with_idx_offset_5 = 25, 1, bool;
        index_mode, with_index_mode = 26, 3, u32;
        pred_sel, with_pred_sel = 29, 2, u32;
        last, with_last = 31, 1, bool;
    }

    AluWord1LdsIdxOp {
        src2_sel, with_src2_sel = 0, 9, u32;
        src2_rel, with_src2_rel = 9, 1, bool;
        src2_chan, with_src2_chan = 10, 2, u32;
        idx_offset_1, with_idx_offset_1 = 12, 1, bool;
        alu_inst, with_alu_inst = 13, 5, u32;
        bank_swizzle, with_bank_swizzle = 18, 3, u32;
        lds_op, with_lds_op = 21, 6, u32;
        idx_offset_0, with_idx_offset_0 = 27, 1, bool;
        idx_offset_2, with_idx_offset_2 = 28, 1, bool;
        dst_chan, with_dst_chan = 29, 2, u32;
        idx_offset_3, with_idx_offset_3 = 31, 1, bool;
    }

    AluWord1LdsDirectLiteralLo {
        offset_a, with_offset_a = 0, 13, u32;
        stride_a, with_stride_a = 13, 7, u32;
        thread_rel_a, with_thread_rel_a = 22, 1, bool;
    }

    AluWord1LdsDirectLiteralHi {
        offset_b, with_offset_b = 0, 13, u32;
        stride_b, with_stride_b = 13, 7, u32;
        thread_rel_b, with_thread_rel_b = 22, 1, bool;
        direct_read_32, with_direct_read_32 = 31, 1, bool;
    }

    VtxWord0 {
        vc_inst, with_vc_inst = 0, 5, u32;
        fetch_type, with_fetch_type = 5, 2, u32;
        fetch_whole_quad, with_fetch_whole_quad = 7, 1, bool;
        buffer_id, with_buffer_id = 8, 8, u32;
        src_gpr, with_src_gpr = 16, 7, u32;
        src_rel, with_src_rel = 23, 1, bool;
        src_sel_x, with_src_sel_x = 24, 2, u32;
        mega_fetch_count, with_mega_fetch_count = 26, 6, u32;
    }

    VtxWord1Gpr {
        dst_gpr, with_dst_gpr = 0, 7, u32;
        dst_rel, with_dst_rel = 7, 1, bool;
        dst_sel_x, with_dst_sel_x = 9, 3, u32;
        dst_sel_y, with_dst_sel_y = 12, 3, u32;
        dst_sel_z, with_dst_sel_z = 15, 3, u32;
        dst_sel_w, with_dst_sel_w = 18, 3, u32;
        use_const_fields, with_use_const_fields = 21, 1, bool;
        data_format, with_data_format = 22, 6, u32;
        num_format_all, with_num_format_all = 28, 2, u32;
        format_comp_all, with_format_comp_all = 30, 1, u32;
        srf_mode_all, with_srf_mode_all = 31, 1, u32;
    }

    VtxWord1Sem {
        semantic_id, with_semantic_id = 0, 8, u32;
        dst_sel_x, with_dst_sel_x = 9, 3, u32;
        dst_sel_y, with_dst_sel_y = 12, 3, u32;
        dst_sel_z, with_dst_sel_z = 15, 3, u32;
        dst_sel_w, with_dst_sel_w = 18, 3, u32;
        use_const_fields, with_use_const_fields = 21, 1, bool;
        data_format, with_data_format = 22, 6, u32;
        num_format_all, with_num_format_all = 28, 2, u32;
        format_comp_all, with_format_comp_all = 30, 1, u32;
        srf_mode_all, with_srf_mode_all = 31, 1, u32;
    }

    VtxWord2 {
        offset, with_offset = 0, 16, u32;
        endian_swap, with_endian_swap = 16, 2, u32;
        const_buf_no_stride, with_const_buf_no_stride = 18, 1, bool;
        mega_fetch, with_mega_fetch = 19, 1, bool;
    }

    TexWord0 {
        tex_inst, with_tex_inst = 0, 5, u32;
        inst_mod, with_inst_mod = 5, 2, u32;
        fwq, with_fwq = 7, 1, bool;
        resource_id, with_resource_id = 8, 8, u32;
        src_gpr, with_src_gpr = 16, 7, u32;
        sr, with_sr = 23, 1, bool;
        ac, with_ac = 24, 1, bool;
        rim, with_rim = 25, 2, u32;
        sim, with_sim = 27, 2, u32;
    }

    TexWord1 {
        dst_gpr, with_dst_gpr = 0, 7, u32;
        dr, with_dr = 7, 1, bool;
        dsx, with_dsx = 9, 3, u32;
        dsy, with_dsy = 12, 3, u32;
        dsz, with_dsz = 15, 3, u32;
        dsw, with_dsw = 18, 3, u32;
        lod_bias, with_lod_bias = 21, 7, i32, sext7;
        ctx, with_ctx = 28, 1, bool;
        cty, with_cty = 29, 1, bool;
        ctz, with_ctz = 30, 1, bool;
        ctw, with_ctw = 31, 1, bool;
    }

    TexWord2 {
        offset_x, with_offset_x = 0, 5, i32, sext5;
        offset_y, with_offset_y = 5, 5, i32, sext5;
        offset_z, with_offset_z = 10, 5, i32, sext5;
        sampler_id, with_sampler_id = 15, 5, u32;
        ssx, with_ssx = 20, 3, u32;
        ssy, with_ssy = 23, 3, u32;
        ssz, with_ssz = 26, 3, u32;
        ssw, with_ssw = 29, 3, u32;
    }

    MemRdWord0 {
        mem_inst, with_mem_inst = 0, 5, u32;
        elem_size, with_elem_size = 5, 2, u32;
        fwq, with_fwq = 7, 1, bool;
        mem_op, with_mem_op = 8, 3, u32;
        uncached, with_uncached = 11, 1, bool;
        indexed, with_indexed = 12, 1, bool;
        src_gpr, with_src_gpr = 16, 7, u32;
        src_rel, with_src_rel = 23, 1, bool;
        ssx, with_ssx = 24, 2, u32;
        burst_count, with_burst_count = 26, 4, u32;
    }

    MemRdWord1 {
        dst_gpr, with_dst_gpr = 0, 7, u32;
        dst_rel, with_dst_rel = 7, 1, bool;
        dsx, with_dsx = 9, 3, u32;
        dsy, with_dsy = 12, 3, u32;
        dsw, with_dsw = 15, 3, u32;
        dsz, with_dsz = 18, 3, u32;
        data_format, with_data_format = 22, 6, u32;
        num_format_all, with_num_format_all = 28, 2, u32;
        format_comp_all, with_format_comp_all = 30, 1, u32;
        srf_mode_all, with_srf_mode_all = 31, 1, u32;
    }

    MemRdWord2 {
        array_base, with_array_base = 0, 13, u32;
        endian_swap, with_endian_swap = 16, 2, u32;
        array_size, with_array_size = 20, 12, u32;
    }

    MemGdsWord0 {
        mem_inst, with_mem_inst = 0, 5, u32;
        mem_op, with_mem_op = 8, 3, u32;
        src_gpr, with_src_gpr = 11, 7, u32;
        src_rel_mode, with_src_rel_mode = 18, 2, u32;
        ssx, with_ssx = 20, 3, u32;
        ssy, with_ssy = 23, 3, u32;
        ssz, with_ssz = 26, 3, u32;
    }

    MemGdsWord1 {
        dst_gpr, with_dst_gpr = 0, 7, u32;
        dst_rel_mode, with_dst_rel_mode = 7, 2, u32;
        gds_op, with_gds_op = 9, 6, u32;
        src_gpr, with_src_gpr = 16, 7, u32;
        uim, with_uim = 24, 2, u32;
        uav_id, with_uav_id = 26, 4, u32;
        alloc_consume, with_alloc_consume = 30, 1, bool;
        bcast_first_req, with_bcast_first_req = 31, 1, bool;
    }

    MemGdsWord2 {
        dsx, with_dsx = 0, 3, u32;
        dsy, with_dsy = 3, 3, u32;
        dsz, with_dsz = 6, 3, u32;
        dsw, with_dsw = 9, 3, u32;
    }
}

/// Microcode word format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    #[default]
    None,
    CfWord0,
    CfGwsWord0,
    CfWord1,
    CfAluWord0,
    CfAluWord1,
    CfAluWord0Ext,
    CfAluWord1Ext,
    AllocExportWord0,
    AllocExportWord0Rat,
    AllocExportWord1Buf,
    AllocExportWord1Swiz,
    AluWord0,
    AluWord1Op2,
    AluWord1Op3,
    AluWord0LdsIdxOp,
    AluWord1LdsIdxOp,
    AluWord1LdsDirectLiteralLo,
    AluWord1LdsDirectLiteralHi,
    VtxWord0,
    VtxWord1Gpr,
    VtxWord1Sem,
    VtxWord2,
    TexWord0,
    TexWord1,
    TexWord2,
    MemRdWord0,
    MemRdWord1,
    MemRdWord2,
    MemGdsWord0,
    MemGdsWord1,
    MemGdsWord2,
}

impl Format {
    pub fn is_none(&self) -> bool {
        *self == Self::None
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::CfWord0 => "CF_WORD0",
            Self::CfGwsWord0 => "CF_GWS_WORD0",
            Self::CfWord1 => "CF_WORD1",
            Self::CfAluWord0 => "CF_ALU_WORD0",
            Self::CfAluWord1 => "CF_ALU_WORD1",
            Self::CfAluWord0Ext => "CF_ALU_WORD0_EXT",
            Self::CfAluWord1Ext => "CF_ALU_WORD1_EXT",
            Self::AllocExportWord0 => "CF_ALLOC_EXPORT_WORD0",
            Self::AllocExportWord0Rat => "CF_ALLOC_EXPORT_WORD0_RAT",
            Self::AllocExportWord1Buf => "CF_ALLOC_EXPORT_WORD1_BUF",
            Self::AllocExportWord1Swiz => "CF_ALLOC_EXPORT_WORD1_SWIZ",
            Self::AluWord0 => "ALU_WORD0",
            Self::AluWord1Op2 => "ALU_WORD1_OP2",
            Self::AluWord1Op3 => "ALU_WORD1_OP3",
            Self::AluWord0LdsIdxOp => "ALU_WORD0_LDS_IDX_OP",
            Self::AluWord1LdsIdxOp => "ALU_WORD1_LDS_IDX_OP",
            Self::AluWord1LdsDirectLiteralLo => "ALU_WORD1_LDS_DIRECT_LITERAL_LO",
            Self::AluWord1LdsDirectLiteralHi => "ALU_WORD1_LDS_DIRECT_LITERAL_HI",
            Self::VtxWord0 => "VTX_WORD0",
            Self::VtxWord1Gpr => "VTX_WORD1_GPR",
            Self::VtxWord1Sem => "VTX_WORD1_SEM",
            Self::VtxWord2 => "VTX_WORD2",
            Self::TexWord0 => "TEX_WORD0",
            Self::TexWord1 => "TEX_WORD1",
            Self::TexWord2 => "TEX_WORD2",
            Self::MemRdWord0 => "MEM_RD_WORD0",
            Self::MemRdWord1 => "MEM_RD_WORD1",
            Self::MemRdWord2 => "MEM_RD_WORD2",
            Self::MemGdsWord0 => "MEM_GDS_WORD0",
            Self::MemGdsWord1 => "MEM_GDS_WORD1",
            Self::MemGdsWord2 => "MEM_GDS_WORD2",
        }
    }

    /// Returns true for second words that carry the end-of-program bit.
    pub fn has_end_of_program(&self) -> bool {
        matches!(
            self,
            Self::CfWord1 | Self::AllocExportWord1Buf | Self::AllocExportWord1Swiz
        )
    }
}
