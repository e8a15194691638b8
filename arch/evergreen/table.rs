//! Instruction format table and the opcode lookup arrays built from it.

use std::sync::OnceLock;

use evgasm_core::flags::Flags;

use crate::words::Format;

pub const TRANS_ONLY: u32 = 0x0001;
pub const INC_LOOP_IDX: u32 = 0x0002;
pub const DEC_LOOP_IDX: u32 = 0x0004;
pub const DST_INT: u32 = 0x0008;
pub const DST_UINT: u32 = 0x0010;
pub const DST_FLOAT: u32 = 0x0020;
pub const ACT_MASK: u32 = 0x0040;
pub const LDS: u32 = 0x0080;
pub const MEM: u32 = 0x0100;
pub const MEM_READ: u32 = 0x0200;
pub const MEM_WRITE: u32 = 0x0400;
pub const PRED_MASK: u32 = 0x0800;

const CF_LONG_SIZE: usize = 256;
const CF_SHORT_SIZE: usize = 16;
const ALU_LONG_SIZE: usize = 256;
const ALU_SHORT_SIZE: usize = 32;
const TEX_SIZE: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Cf,
    Alu,
    Lds,
    Vtx,
    Tex,
    MemRd,
    MemGds,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cf => "CF",
            Self::Alu => "ALU",
            Self::Lds => "LDS",
            Self::Vtx => "VTX",
            Self::Tex => "TEX",
            Self::MemRd => "MEM_RD",
            Self::MemGds => "MEM_GDS",
        }
    }
}

/// Instruction identifier, an index into [`INSNS`] plus one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode(u16);

impl Opcode {
    pub const fn raw(&self) -> u16 {
        self.0
    }

    pub fn info(&self) -> &'static InsnInfo {
        &INSNS[self.0 as usize - 1]
    }
}

#[derive(Debug)]
pub struct InsnInfo {
    pub opcode: Opcode,
    pub name: &'static str,
    pub category: Category,
    pub fmt_str: &'static str,
    pub fmt: [Format; 3],
    /// Raw value of the opcode field.
    pub inst: u32,
    pub flags: Flags,
    /// Number of words.
    pub size: usize,
}

impl InsnInfo {
    pub fn has_flags(&self, flags: u32) -> bool {
        self.flags.any(flags)
    }
}

const fn fmt_size(fmt: [Format; 3]) -> usize {
    let mut size = 0;
    let mut i = 0;
    while i < fmt.len() {
        if !matches!(fmt[i], Format::None) {
            size += 1;
        }
        i += 1;
    }
    size
}

macro_rules! define_insns {
    ($(
        $id:ident $(as $mnemonic:literal)? =
            $fmt_str:expr,
            [$f0:ident, $f1:ident, $f2:ident],
            $category:ident,
            $inst:expr,
            $flags:expr;
    )+) => {
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[repr(u16)]
        enum Id {
            NONE,
            $($id,)+
        }

        pub mod opcode {
            use super::{Id, Opcode};

            $(pub const $id: Opcode = Opcode(Id::$id as u16);)+
        }

        pub static INSNS: &[InsnInfo] = &[$(
            InsnInfo {
                opcode: opcode::$id,
                name: define_insns!(@name $id $($mnemonic)?),
                category: Category::$category,
                fmt_str: $fmt_str,
                fmt: [Format::$f0, Format::$f1, Format::$f2],
                inst: $inst,
                flags: Flags::from_raw($flags),
                size: fmt_size([Format::$f0, Format::$f1, Format::$f2]),
            },
        )+];

        const _: () = assert!(Id::NONE as u16 == 0);
    };
    (@name $id:ident) => (stringify!($id));
    (@name $id:ident $mnemonic:literal) => ($mnemonic);
}

const CF_PLAIN: &str = "%name %no_barrier";
const CF_JUMP: &str = "%name %pop_count ADDR(%cf_addr) %cf_cond %cf_const %vpm %no_barrier";
const CF_CLAUSE: &str = "%name: ADDR(%cf_addr) CNT(%cf_cnt) %vpm %wqm %no_barrier";
const CF_LOOP_START: &str = "%name %loop_idx FAIL_JUMP_ADDR(%cf_addr) %no_barrier";
const CF_LOOP_END: &str = "%name %loop_idx PASS_JUMP_ADDR(%cf_addr) %no_barrier";
const CF_STREAM: &str = "%name STREAM(%cf_stream_id) %no_barrier";
const CF_ALU: &str = "%name: ADDR(%cf_alu_addr) CNT(%cf_alu_cnt) %kcache %wqm %no_barrier";
const CF_EXPORT: &str =
    "%name: %exp_type%exp_array_base, %exp_rw_gpr %burst_count %vpm %mark %no_barrier";
const CF_MEM_BUF: &str = "%name: %exp_type%exp_array_base, %exp_rw_gpr%comp_mask, %array_size %elem_size %burst_count %mark %vpm %no_barrier";
const CF_MEM_RAT: &str = "%name_%rat_inst: RAT%rat_id%rat_index_mode[%rat_index_gpr], %rat_rw_gpr%comp_mask, %array_size %elem_size %mark %vpm %no_barrier";

const ALU_0: &str = "%name%alu_mod";
const ALU_1: &str = "%name %alu_dst, %alu_src0%alu_mod %omod %clamp";
const ALU_2: &str = "%name %alu_dst, %alu_src0, %alu_src1%alu_mod %omod %clamp";
const ALU_3: &str = "%name %alu_dst, %alu_src0, %alu_src1, %alu_src2%alu_mod %clamp";
const ALU_LDS: &str = "%name %lds_op %alu_src0, %alu_src1, %alu_src2%alu_mod";

const VTX_FETCH: &str = "%name %vtx_dst_gpr, %vtx_src_gpr, %vtx_buffer_id %vtx_fetch_type %vtx_mega_fetch %vtx_fetch_whole_quad %vtx_offset%nl %vtx_data_format %vtx_num_format %vtx_format_comp %vtx_srf_mode %vtx_endian_swap %vtx_cbns";
const VTX_SEMANTIC: &str = "%name %vtx_src_gpr, %vtx_buffer_id %vtx_fetch_type %vtx_mega_fetch %vtx_offset%nl %vtx_data_format %vtx_num_format %vtx_format_comp %vtx_srf_mode %vtx_endian_swap %vtx_cbns";
const TEX: &str = "%name %tex_dst_reg, %tex_src_reg, %tex_res_id, %tex_sampler_id %tex_props";
const MEM_RD_OP: &str = "%mem_op_name";

const CF_MEM: u32 = MEM | MEM_WRITE;
const FETCH: u32 = MEM | MEM_READ;
const PRED: u32 = PRED_MASK | DST_FLOAT;
const PRED_INT: u32 = PRED_MASK | DST_INT;
const KILL: u32 = ACT_MASK | DST_FLOAT;
const KILL_INT: u32 = ACT_MASK | DST_INT;
const T_FLOAT: u32 = TRANS_ONLY | DST_FLOAT;
const T_INT: u32 = TRANS_ONLY | DST_INT;
const T_UINT: u32 = TRANS_ONLY | DST_UINT;

define_insns! {
    // Control flow
    NOP = CF_PLAIN, [CfWord0, CfWord1, None], Cf, 0, 0;
    TC = CF_CLAUSE, [CfWord0, CfWord1, None], Cf, 1, 0;
    VC = CF_CLAUSE, [CfWord0, CfWord1, None], Cf, 2, 0;
    GDS = CF_CLAUSE, [CfWord0, CfWord1, None], Cf, 3, 0;
    LOOP_START = CF_LOOP_START, [CfWord0, CfWord1, None], Cf, 4, INC_LOOP_IDX | ACT_MASK;
    LOOP_END = CF_LOOP_END, [CfWord0, CfWord1, None], Cf, 5, DEC_LOOP_IDX | ACT_MASK;
    LOOP_START_DX10 = CF_LOOP_START, [CfWord0, CfWord1, None], Cf, 6, INC_LOOP_IDX | ACT_MASK;
    LOOP_START_NO_AL = CF_LOOP_START, [CfWord0, CfWord1, None], Cf, 7, INC_LOOP_IDX | ACT_MASK;
    LOOP_CONTINUE = CF_JUMP, [CfWord0, CfWord1, None], Cf, 8, ACT_MASK;
    LOOP_BREAK = CF_JUMP, [CfWord0, CfWord1, None], Cf, 9, ACT_MASK;
    JUMP = CF_JUMP, [CfWord0, CfWord1, None], Cf, 10, ACT_MASK;
    PUSH = CF_JUMP, [CfWord0, CfWord1, None], Cf, 11, ACT_MASK;
    ELSE = CF_JUMP, [CfWord0, CfWord1, None], Cf, 13, ACT_MASK;
    POP = CF_JUMP, [CfWord0, CfWord1, None], Cf, 14, ACT_MASK;
    CALL = CF_JUMP, [CfWord0, CfWord1, None], Cf, 18, 0;
    CALL_FS = CF_PLAIN, [CfWord0, CfWord1, None], Cf, 19, 0;
    RETURN = CF_PLAIN, [CfWord0, CfWord1, None], Cf, 20, 0;
    EMIT_VERTEX = CF_STREAM, [CfWord0, CfWord1, None], Cf, 21, 0;
    EMIT_CUT_VERTEX = CF_STREAM, [CfWord0, CfWord1, None], Cf, 22, 0;
    CUT_VERTEX = CF_STREAM, [CfWord0, CfWord1, None], Cf, 23, 0;
    KILL = CF_JUMP, [CfWord0, CfWord1, None], Cf, 24, ACT_MASK;
    WAIT_ACK = CF_PLAIN, [CfWord0, CfWord1, None], Cf, 26, 0;
    TC_ACK = CF_CLAUSE, [CfWord0, CfWord1, None], Cf, 27, 0;
    VC_ACK = CF_CLAUSE, [CfWord0, CfWord1, None], Cf, 28, 0;
    JUMPTABLE = CF_JUMP, [CfWord0, CfWord1, None], Cf, 29, ACT_MASK;
    GLOBAL_WAVE_SYNC = CF_PLAIN, [CfGwsWord0, CfWord1, None], Cf, 30, 0;
    HALT = CF_PLAIN, [CfWord0, CfWord1, None], Cf, 31, 0;

    // Memory export
    MEM_STREAM0_BUF0 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 64, CF_MEM;
    MEM_STREAM0_BUF1 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 65, CF_MEM;
    MEM_STREAM0_BUF2 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 66, CF_MEM;
    MEM_STREAM0_BUF3 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 67, CF_MEM;
    MEM_STREAM1_BUF0 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 68, CF_MEM;
    MEM_STREAM1_BUF1 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 69, CF_MEM;
    MEM_STREAM1_BUF2 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 70, CF_MEM;
    MEM_STREAM1_BUF3 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 71, CF_MEM;
    MEM_STREAM2_BUF0 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 72, CF_MEM;
    MEM_STREAM2_BUF1 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 73, CF_MEM;
    MEM_STREAM2_BUF2 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 74, CF_MEM;
    MEM_STREAM2_BUF3 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 75, CF_MEM;
    MEM_STREAM3_BUF0 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 76, CF_MEM;
    MEM_STREAM3_BUF1 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 77, CF_MEM;
    MEM_STREAM3_BUF2 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 78, CF_MEM;
    MEM_STREAM3_BUF3 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 79, CF_MEM;
    MEM_WR_SCRATCH = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 80, CF_MEM;
    MEM_RING = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 82, CF_MEM;
    EXPORT = CF_EXPORT, [AllocExportWord0, AllocExportWord1Swiz, None], Cf, 83, 0;
    EXPORT_DONE = CF_EXPORT, [AllocExportWord0, AllocExportWord1Swiz, None], Cf, 84, 0;
    MEM_EXPORT = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 85, CF_MEM;
    MEM_RAT = CF_MEM_RAT, [AllocExportWord0Rat, AllocExportWord1Buf, None], Cf, 86, CF_MEM;
    MEM_RAT_CACHELESS = CF_MEM_RAT, [AllocExportWord0Rat, AllocExportWord1Buf, None], Cf, 87, CF_MEM;
    MEM_RING1 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 88, CF_MEM;
    MEM_RING2 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 89, CF_MEM;
    MEM_RING3 = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 90, CF_MEM;
    MEM_EXPORT_COMBINED = CF_MEM_BUF, [AllocExportWord0, AllocExportWord1Buf, None], Cf, 91, CF_MEM;
    MEM_RAT_COMBINED_CACHELESS = CF_MEM_RAT, [AllocExportWord0Rat, AllocExportWord1Buf, None], Cf, 92, CF_MEM;

    // ALU clause
    ALU = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 8, 0;
    ALU_PUSH_BEFORE = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 9, ACT_MASK;
    ALU_POP_AFTER = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 10, ACT_MASK;
    ALU_POP2_AFTER = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 11, ACT_MASK;
    ALU_EXTENDED = CF_PLAIN, [CfAluWord0Ext, CfAluWord1Ext, None], Cf, 12, 0;
    ALU_CONTINUE = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 13, ACT_MASK;
    ALU_BREAK = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 14, ACT_MASK;
    ALU_ELSE_AFTER = CF_ALU, [CfAluWord0, CfAluWord1, None], Cf, 15, ACT_MASK;

    // ALU, two source operands at most
    ADD = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 0, DST_FLOAT;
    MUL = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 1, DST_FLOAT;
    MUL_IEEE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 2, DST_FLOAT;
    MAX = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 3, DST_FLOAT;
    MIN = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 4, DST_FLOAT;
    MAX_DX10 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 5, DST_FLOAT;
    MIN_DX10 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 6, DST_FLOAT;
    SETE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 8, DST_FLOAT;
    SETGT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 9, DST_FLOAT;
    SETGE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 10, DST_FLOAT;
    SETNE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 11, DST_FLOAT;
    SETE_DX10 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 12, DST_INT;
    SETGT_DX10 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 13, DST_INT;
    SETGE_DX10 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 14, DST_INT;
    SETNE_DX10 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 15, DST_INT;
    FRACT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 16, DST_FLOAT;
    TRUNC = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 17, DST_FLOAT;
    CEIL = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 18, DST_FLOAT;
    RNDNE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 19, DST_FLOAT;
    FLOOR = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 20, DST_FLOAT;
    ASHR_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 21, DST_INT;
    LSHR_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 22, DST_INT;
    LSHL_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 23, DST_INT;
    MOV = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 25, 0;
    ALU_NOP as "NOP" = ALU_0, [AluWord0, AluWord1Op2, None], Alu, 26, 0;
    MUL_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 27, DST_FLOAT;
    FLT64_TO_FLT32 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 28, DST_FLOAT;
    FLT32_TO_FLT64 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 29, DST_FLOAT;
    PRED_SETGT_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 30, PRED_MASK | DST_UINT;
    PRED_SETGE_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 31, PRED_MASK | DST_UINT;
    PRED_SETE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 32, PRED;
    PRED_SETGT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 33, PRED;
    PRED_SETGE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 34, PRED;
    PRED_SETNE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 35, PRED;
    PRED_SET_INV = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 36, PRED;
    PRED_SET_POP = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 37, PRED;
    PRED_SET_CLR = ALU_0, [AluWord0, AluWord1Op2, None], Alu, 38, PRED;
    PRED_SET_RESTORE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 39, PRED;
    PRED_SETE_PUSH = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 40, PRED;
    PRED_SETGT_PUSH = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 41, PRED;
    PRED_SETGE_PUSH = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 42, PRED;
    PRED_SETNE_PUSH = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 43, PRED;
    KILLE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 44, KILL;
    KILLGT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 45, KILL;
    KILLGE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 46, KILL;
    KILLNE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 47, KILL;
    AND_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 48, DST_INT;
    OR_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 49, DST_INT;
    XOR_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 50, DST_INT;
    NOT_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 51, DST_INT;
    ADD_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 52, DST_INT;
    SUB_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 53, DST_INT;
    MAX_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 54, DST_INT;
    MIN_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 55, DST_INT;
    MAX_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 56, DST_UINT;
    MIN_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 57, DST_UINT;
    SETE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 58, DST_INT;
    SETGT_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 59, DST_INT;
    SETGE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 60, DST_INT;
    SETNE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 61, DST_INT;
    SETGT_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 62, DST_UINT;
    SETGE_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 63, DST_UINT;
    KILLGT_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 64, ACT_MASK | DST_UINT;
    KILLGE_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 65, ACT_MASK | DST_UINT;
    PRED_SETE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 66, PRED_INT;
    PRED_SETGT_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 67, PRED_INT;
    PRED_SETGE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 68, PRED_INT;
    PRED_SETNE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 69, PRED_INT;
    KILLE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 70, KILL_INT;
    KILLGT_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 71, KILL_INT;
    KILLGE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 72, KILL_INT;
    KILLNE_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 73, KILL_INT;
    PRED_SETE_PUSH_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 74, PRED_INT;
    PRED_SETGT_PUSH_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 75, PRED_INT;
    PRED_SETGE_PUSH_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 76, PRED_INT;
    PRED_SETNE_PUSH_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 77, PRED_INT;
    PRED_SETLT_PUSH_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 78, PRED_INT;
    PRED_SETLE_PUSH_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 79, PRED_INT;
    FLT_TO_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 80, DST_INT;
    BFREV_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 81, DST_INT;
    ADDC_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 82, DST_UINT;
    SUBB_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 83, DST_UINT;
    GROUP_BARRIER = ALU_0, [AluWord0, AluWord1Op2, None], Alu, 84, 0;
    GROUP_SEQ_BEGIN = ALU_0, [AluWord0, AluWord1Op2, None], Alu, 85, 0;
    GROUP_SEQ_END = ALU_0, [AluWord0, AluWord1Op2, None], Alu, 86, 0;
    SET_MODE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 87, 0;
    SET_CF_IDX0 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 88, 0;
    SET_CF_IDX1 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 89, 0;
    SET_LDS_SIZE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 90, 0;
    EXP_IEEE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 129, T_FLOAT;
    LOG_CLAMPED = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 130, T_FLOAT;
    LOG_IEEE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 131, T_FLOAT;
    RECIP_CLAMPED = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 132, T_FLOAT;
    RECIP_FF = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 133, T_FLOAT;
    RECIP_IEEE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 134, T_FLOAT;
    RECIPSQRT_CLAMPED = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 135, T_FLOAT;
    RECIPSQRT_FF = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 136, T_FLOAT;
    RECIPSQRT_IEEE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 137, T_FLOAT;
    SQRT_IEEE = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 138, T_FLOAT;
    SIN = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 141, T_FLOAT;
    COS = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 142, T_FLOAT;
    MULLO_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 143, T_INT;
    MULHI_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 144, T_INT;
    MULLO_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 145, T_UINT;
    MULHI_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 146, T_UINT;
    RECIP_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 147, T_INT;
    RECIP_UINT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 148, T_UINT;
    RECIP_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 149, DST_FLOAT;
    RECIP_CLAMPED_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 150, DST_FLOAT;
    RECIPSQRT_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 151, DST_FLOAT;
    RECIPSQRT_CLAMPED_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 152, DST_FLOAT;
    SQRT_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 153, DST_FLOAT;
    FLT_TO_UINT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 154, T_UINT;
    INT_TO_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 155, T_FLOAT;
    UINT_TO_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 156, T_FLOAT;
    BFM_INT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 160, DST_INT;
    FLT32_TO_FLT16 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 162, DST_FLOAT;
    FLT16_TO_FLT32 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 163, DST_FLOAT;
    UBYTE0_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 164, DST_FLOAT;
    UBYTE1_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 165, DST_FLOAT;
    UBYTE2_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 166, DST_FLOAT;
    UBYTE3_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 167, DST_FLOAT;
    BCNT_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 170, DST_INT;
    FFBH_UINT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 171, DST_UINT;
    FFBL_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 172, DST_INT;
    FFBH_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 173, DST_INT;
    FLT_TO_UINT4 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 174, DST_UINT;
    DOT_IEEE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 175, DST_FLOAT;
    FLT_TO_INT_RPI = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 176, DST_INT;
    FLT_TO_INT_FLOOR = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 177, DST_INT;
    MULHI_UINT24 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 178, DST_UINT;
    MBCNT_32HI_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 179, DST_INT;
    OFFSET_TO_FLT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 180, DST_FLOAT;
    MUL_UINT24 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 181, DST_UINT;
    BCNT_ACCUM_PREV_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 182, DST_INT;
    MBCNT_32LO_ACCUM_PREV_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 183, DST_INT;
    SETE_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 184, DST_INT;
    SETNE_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 185, DST_INT;
    SETGT_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 186, DST_INT;
    SETGE_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 187, DST_INT;
    MIN_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 188, DST_FLOAT;
    MAX_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 189, DST_FLOAT;
    DOT4 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 190, DST_FLOAT;
    DOT4_IEEE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 191, DST_FLOAT;
    CUBE = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 192, DST_FLOAT;
    MAX4 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 193, DST_FLOAT;
    FREXP_64 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 196, DST_FLOAT;
    LDEXP_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 197, DST_FLOAT;
    FRACT_64 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 198, DST_FLOAT;
    PRED_SETGT_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 199, PRED;
    PRED_SETE_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 200, PRED;
    PRED_SETGE_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 201, PRED;
    MUL_64_VEC = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 202, DST_FLOAT;
    ADD_64 = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 203, DST_FLOAT;
    MOVA_INT = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 204, DST_INT;
    FLT64_TO_FLT32_VEC = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 205, DST_FLOAT;
    FLT32_TO_FLT64_VEC = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 206, DST_FLOAT;
    SAD_ACCUM_PREV_UINT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 207, DST_UINT;
    DOT = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 208, DST_FLOAT;
    MUL_PREV = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 209, DST_FLOAT;
    MUL_IEEE_PREV = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 210, DST_FLOAT;
    ADD_PREV = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 211, DST_FLOAT;
    MULADD_PREV = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 212, DST_FLOAT;
    MULADD_IEEE_PREV = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 213, DST_FLOAT;
    INTERP_XY = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 214, DST_FLOAT;
    INTERP_ZW = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 215, DST_FLOAT;
    INTERP_X = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 216, DST_FLOAT;
    INTERP_Z = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 217, DST_FLOAT;
    STORE_FLAGS = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 218, 0;
    LOAD_STORE_FLAGS = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 219, 0;
    LDS_1A = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 220, LDS;
    LDS_1A1D = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 221, LDS;
    LDS_2A = ALU_2, [AluWord0, AluWord1Op2, None], Alu, 223, LDS;
    INTERP_LOAD_P0 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 224, DST_FLOAT;
    INTERP_LOAD_P10 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 225, DST_FLOAT;
    INTERP_LOAD_P20 = ALU_1, [AluWord0, AluWord1Op2, None], Alu, 226, DST_FLOAT;

    // ALU, three source operands
    BFE_UINT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 4, DST_UINT;
    BFE_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 5, DST_INT;
    BFI_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 6, DST_INT;
    FMA = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 7, DST_FLOAT;
    CNDNE_64 = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 9, DST_FLOAT;
    FMA_64 = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 10, DST_FLOAT;
    LERP_UINT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 11, DST_UINT;
    BIT_ALIGN_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 12, DST_INT;
    BYTE_ALIGN_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 13, DST_INT;
    SAD_ACCUM_UINT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 14, DST_UINT;
    SAD_ACCUM_HI_UINT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 15, DST_UINT;
    MULADD_UINT24 = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 16, DST_UINT;
    LDS_IDX_OP = ALU_LDS, [AluWord0LdsIdxOp, AluWord1LdsIdxOp, None], Lds, 17, LDS;
    MULADD = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 20, DST_FLOAT;
    MULADD_M2 = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 21, DST_FLOAT;
    MULADD_M4 = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 22, DST_FLOAT;
    MULADD_D2 = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 23, DST_FLOAT;
    MULADD_IEEE = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 24, DST_FLOAT;
    CNDE = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 25, DST_FLOAT;
    CNDGT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 26, DST_FLOAT;
    CNDGE = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 27, DST_FLOAT;
    CNDE_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 28, DST_INT;
    CNDGT_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 29, DST_INT;
    CNDGE_INT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 30, DST_INT;
    MUL_LIT = ALU_3, [AluWord0, AluWord1Op3, None], Alu, 31, DST_FLOAT;

    // Vertex fetch
    FETCH = VTX_FETCH, [VtxWord0, VtxWord1Gpr, VtxWord2], Vtx, 0, FETCH;
    SEMANTIC = VTX_SEMANTIC, [VtxWord0, VtxWord1Sem, VtxWord2], Vtx, 1, FETCH;
    GET_BUFFER_RESINFO = VTX_FETCH, [VtxWord0, VtxWord1Gpr, VtxWord2], Vtx, 14, 0;

    // Memory read
    MEM_RD = MEM_RD_OP, [MemRdWord0, MemRdWord1, MemRdWord2], MemRd, 2, FETCH;

    // Texture fetch
    LD = TEX, [TexWord0, TexWord1, TexWord2], Tex, 3, FETCH;
    GET_TEXTURE_RESINFO = TEX, [TexWord0, TexWord1, TexWord2], Tex, 4, 0;
    GET_NUMBER_OF_SAMPLES = TEX, [TexWord0, TexWord1, TexWord2], Tex, 5, 0;
    GET_LOD = TEX, [TexWord0, TexWord1, TexWord2], Tex, 6, 0;
    GET_GRADIENTS_H = TEX, [TexWord0, TexWord1, TexWord2], Tex, 7, 0;
    GET_GRADIENTS_V = TEX, [TexWord0, TexWord1, TexWord2], Tex, 8, 0;
    SET_TEXTURE_OFFSETS = TEX, [TexWord0, TexWord1, TexWord2], Tex, 9, 0;
    KEEP_GRADIENTS = TEX, [TexWord0, TexWord1, TexWord2], Tex, 10, 0;
    SET_GRADIENTS_H = TEX, [TexWord0, TexWord1, TexWord2], Tex, 11, 0;
    SET_GRADIENTS_V = TEX, [TexWord0, TexWord1, TexWord2], Tex, 12, 0;
    PASS = TEX, [TexWord0, TexWord1, TexWord2], Tex, 13, 0;
    SAMPLE = TEX, [TexWord0, TexWord1, TexWord2], Tex, 16, FETCH;
    SAMPLE_L = TEX, [TexWord0, TexWord1, TexWord2], Tex, 17, FETCH;
    SAMPLE_LB = TEX, [TexWord0, TexWord1, TexWord2], Tex, 18, FETCH;
    SAMPLE_LZ = TEX, [TexWord0, TexWord1, TexWord2], Tex, 19, FETCH;
    SAMPLE_G = TEX, [TexWord0, TexWord1, TexWord2], Tex, 20, FETCH;
    SAMPLE_G_L = TEX, [TexWord0, TexWord1, TexWord2], Tex, 21, FETCH;
    SAMPLE_G_LB = TEX, [TexWord0, TexWord1, TexWord2], Tex, 22, FETCH;
    SAMPLE_G_LZ = TEX, [TexWord0, TexWord1, TexWord2], Tex, 23, FETCH;
    SAMPLE_C = TEX, [TexWord0, TexWord1, TexWord2], Tex, 24, FETCH;
    SAMPLE_C_L = TEX, [TexWord0, TexWord1, TexWord2], Tex, 25, FETCH;
    SAMPLE_C_LB = TEX, [TexWord0, TexWord1, TexWord2], Tex, 26, FETCH;
    SAMPLE_C_LZ = TEX, [TexWord0, TexWord1, TexWord2], Tex, 27, FETCH;
    SAMPLE_C_G = TEX, [TexWord0, TexWord1, TexWord2], Tex, 28, FETCH;
    SAMPLE_C_G_L = TEX, [TexWord0, TexWord1, TexWord2], Tex, 29, FETCH;
    SAMPLE_C_G_LB = TEX, [TexWord0, TexWord1, TexWord2], Tex, 30, FETCH;
    SAMPLE_C_G_LZ = TEX, [TexWord0, TexWord1, TexWord2], Tex, 31, FETCH;
}

/// Opcode lookup arrays, one per opcode field.
pub struct InsnTable {
    cf_long: [Option<&'static InsnInfo>; CF_LONG_SIZE],
    cf_short: [Option<&'static InsnInfo>; CF_SHORT_SIZE],
    alu_long: [Option<&'static InsnInfo>; ALU_LONG_SIZE],
    alu_short: [Option<&'static InsnInfo>; ALU_SHORT_SIZE],
    tex: [Option<&'static InsnInfo>; TEX_SIZE],
}

fn lookup(table: &[Option<&'static InsnInfo>], value: u32) -> Option<&'static InsnInfo> {
    table.get(value as usize).copied().flatten()
}

impl InsnTable {
    /// Returns the process-wide table, building it on first use.
    pub fn get() -> &'static Self {
        static TABLE: OnceLock<InsnTable> = OnceLock::new();
        TABLE.get_or_init(Self::build)
    }

    fn build() -> Self {
        let mut table = Self {
            cf_long: [None; CF_LONG_SIZE],
            cf_short: [None; CF_SHORT_SIZE],
            alu_long: [None; ALU_LONG_SIZE],
            alu_short: [None; ALU_SHORT_SIZE],
            tex: [None; TEX_SIZE],
        };

        for info in INSNS {
            let slot = match (info.fmt[0], info.fmt[1]) {
                (_, Format::CfWord1 | Format::AllocExportWord1Buf | Format::AllocExportWord1Swiz) => {
                    table.cf_long.get_mut(info.inst as usize)
                }
                (_, Format::CfAluWord1 | Format::CfAluWord1Ext) => {
                    table.cf_short.get_mut(info.inst as usize)
                }
                (_, Format::AluWord1Op2) => table.alu_long.get_mut(info.inst as usize),
                (_, Format::AluWord1Op3 | Format::AluWord1LdsIdxOp) => {
                    table.alu_short.get_mut(info.inst as usize)
                }
                (Format::TexWord0 | Format::VtxWord0 | Format::MemRdWord0, _) => {
                    table.tex.get_mut(info.inst as usize)
                }
                _ => None,
            };
            match slot {
                Some(slot) => *slot = Some(info),
                None => warn!("'{}' not indexed", info.name),
            }
        }

        debug!("instruction table built, {} entries", INSNS.len());

        table
    }

    /// Lookup by the 8-bit `cf_inst` field of CF_WORD1 and export words.
    pub fn cf_long(&self, value: u32) -> Option<&'static InsnInfo> {
        lookup(&self.cf_long, value)
    }

    /// Lookup by the 4-bit `cf_inst` field of CF_ALU_WORD1.
    pub fn cf_short(&self, value: u32) -> Option<&'static InsnInfo> {
        lookup(&self.cf_short, value)
    }

    /// Lookup by the 11-bit `alu_inst` field of ALU_WORD1_OP2.
    pub fn alu_long(&self, value: u32) -> Option<&'static InsnInfo> {
        lookup(&self.alu_long, value)
    }

    /// Lookup by the 5-bit `alu_inst` field of ALU_WORD1_OP3.
    pub fn alu_short(&self, value: u32) -> Option<&'static InsnInfo> {
        lookup(&self.alu_short, value)
    }

    pub fn tex(&self, value: u32) -> Option<&'static InsnInfo> {
        lookup(&self.tex, value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static InsnInfo> {
        INSNS.iter()
    }
}
