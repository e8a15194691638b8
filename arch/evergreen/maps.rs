//! Symbolic names of field values.

/// Names used by the disassembly renderer.
pub mod asm {
    evgasm_core::define_map! {
        pub fn bank_swizzle {
            0 => "",
            1 => "VEC_021",
            2 => "VEC_120",
            3 => "VEC_102",
            4 => "VEC_201",
            5 => "VEC_210",
        }

        pub fn rat_inst {
            0 => "NOP",
            1 => "STORE_TYPED",
            2 => "STORE_RAW",
            3 => "STORE_RAW_FDENORM",
            4 => "CMPXCHG_INT",
            5 => "CMPXCHG_FLT",
            6 => "CMPXCHG_FDENORM",
            7 => "ADD",
            8 => "SUB",
            9 => "RSUB",
            10 => "MIN_INT",
            11 => "MIN_UINT",
            12 => "MAX_INT",
            13 => "MAX_UINT",
            14 => "AND",
            15 => "OR",
            16 => "XOR",
            17 => "MSKOR",
            18 => "INC_UINT",
            19 => "DEC_UINT",
            32 => "NOP_RTN",
            34 => "XCHG_RTN",
            35 => "XCHG_FDENORM_RTN",
            36 => "CMPXCHG_INT_RTN",
            37 => "CMPXCHG_FLT_RTN",
            38 => "CMPXCHG_FDENORM_RTN",
            39 => "ADD_RTN",
            40 => "SUB_RTN",
            41 => "RSUB_RTN",
            42 => "MIN_INT_RTN",
            43 => "MIN_UINT_RTN",
            44 => "MAX_INT_RTN",
            45 => "MAX_UINT_RTN",
            46 => "AND_RTN",
            47 => "OR_RTN",
            48 => "XOR_RTN",
            49 => "MSKOR_RTN",
            50 => "INC_UINT_RTN",
            51 => "DEC_UINT_RTN",
        }

        pub fn cf_cond {
            0 => "ACTIVE",
            1 => "FALSE",
            2 => "BOOL",
            3 => "NOT_BOOL",
        }

        /// Source selectors without a register or constant form.
        pub fn src_sel {
            219 => "QA",
            220 => "QB",
            221 => "QA.pop",
            222 => "QB.pop",
            223 => "ALU_SRC_LDS_DIRECT_A",
            224 => "ALU_SRC_LDS_DIRECT_B",
            227 => "ALU_SRC_TIME_HI",
            228 => "ALU_SRC_TIME_LO",
            229 => "ALU_SRC_MASK_HI",
            230 => "ALU_SRC_MASK_LO",
            231 => "ALU_SRC_HW_WAVE_ID",
            232 => "ALU_SRC_SIMD_ID",
            233 => "ALU_SRC_SE_ID",
            234 => "ALU_SRC_HW_THREADGRP_ID",
            235 => "ALU_SRC_WAVE_ID_IN_GRP",
            236 => "ALU_SRC_NUM_THREADGRP_WAVES",
            237 => "ALU_SRC_HW_ALU_ODD",
            238 => "ALU_SRC_LOOP_IDX",
            240 => "ALU_SRC_PARAM_BASE_ADDR",
            241 => "ALU_SRC_NEW_PRIM_MASK",
            243 => "ALU_SRC_PRIM_MASK_LO",
            244 => "ALU_SRC_1_DBL_L",
            245 => "ALU_SRC_1_DBL_M",
            246 => "ALU_SRC_0_5_DBL_L",
            247 => "ALU_SRC_0_5_DBL_M",
            248 => "0.0f",
            249 => "1.0f",
            250 => "1",
            251 => "-1",
            252 => "0.5",
            255 => "PS",
        }

        /// Destination swizzle selectors.
        pub fn dst_sel {
            0 => "x",
            1 => "y",
            2 => "z",
            3 => "w",
            4 => "0",
            5 => "1",
            7 => "_",
        }

        pub fn export_type {
            0 => "PIX",
            1 => "POS",
            2 => "PARAM",
            3 => "IND_ACK",
        }
    }
}

/// Names used by the word dumps.
pub mod field {
    evgasm_core::define_map! {
        /// Relative addressing.
        pub fn rel {
            0 => "Absolute",
            1 => "Relative",
        }

        pub fn chan {
            0 => "CHAN_X",
            1 => "CHAN_Y",
            2 => "CHAN_Z",
            3 => "CHAN_W",
        }

        pub fn sel {
            0 => "SEL_X",
            1 => "SEL_Y",
            2 => "SEL_Z",
            3 => "SEL_W",
            4 => "SEL_0",
            5 => "SEL_1",
            7 => "SEL_MASK",
        }

        pub fn cf_index_mode {
            0 => "CF_INDEX_NONE",
            1 => "CF_INDEX_0",
            2 => "CF_INDEX_1",
            3 => "CF_INVALID",
        }

        pub fn kcache_mode {
            0 => "CF_KCACHE_NOP",
            1 => "CF_KCACHE_LOCK_1",
            2 => "CF_KCACHE_LOCK_2",
            3 => "CF_KCACHE_LOCK_LOOP_INDEX",
        }

        pub fn cf_inst {
            0 => "CF_INST_NOP",
            1 => "CF_INST_TC",
            2 => "CF_INST_VC",
            3 => "CF_INST_GDS",
            4 => "CF_INST_LOOP_START",
            5 => "CF_INST_LOOP_END",
            6 => "CF_INST_LOOP_START_DX10",
            7 => "CF_INST_LOOP_START_NO_AL",
            8 => "CF_INST_LOOP_CONTINUE",
            9 => "CF_INST_LOOP_BREAK",
            10 => "CF_INST_JUMP",
            11 => "CF_INST_PUSH",
            13 => "CF_INST_ELSE",
            14 => "CF_INST_POP",
            18 => "CF_INST_CALL",
            19 => "CF_INST_CALL_FS",
            20 => "CF_INST_RETURN",
            21 => "CF_INST_EMIT_VERTEX",
            22 => "CF_INST_EMIT_CUT_VERTEX",
            23 => "CF_INST_CUT_VERTEX",
            24 => "CF_INST_KILL",
            26 => "CF_INST_WAIT_ACK",
            27 => "CF_INST_TC_ACK",
            28 => "CF_INST_VC_ACK",
            29 => "CF_INST_JUMPTABLE",
            30 => "CF_INST_GLOBAL_WAVE_SYNC",
            31 => "CF_INST_HALT",
            64 => "CF_INST_MEM_STREAM0_BUF0",
            65 => "CF_INST_MEM_STREAM0_BUF1",
            66 => "CF_INST_MEM_STREAM0_BUF2",
            67 => "CF_INST_MEM_STREAM0_BUF3",
            68 => "CF_INST_MEM_STREAM1_BUF0",
            69 => "CF_INST_MEM_STREAM1_BUF1",
            70 => "CF_INST_MEM_STREAM1_BUF2",
            71 => "CF_INST_MEM_STREAM1_BUF3",
            72 => "CF_INST_MEM_STREAM2_BUF0",
            73 => "CF_INST_MEM_STREAM2_BUF1",
            74 => "CF_INST_MEM_STREAM2_BUF2",
            75 => "CF_INST_MEM_STREAM2_BUF3",
            76 => "CF_INST_MEM_STREAM3_BUF0",
            77 => "CF_INST_MEM_STREAM3_BUF1",
            78 => "CF_INST_MEM_STREAM3_BUF2",
            79 => "CF_INST_MEM_STREAM3_BUF3",
            80 => "CF_INST_MEM_WR_SCRATCH",
            82 => "CF_INST_MEM_RING",
            83 => "CF_INST_EXPORT",
            84 => "CF_INST_EXPORT_DONE",
            85 => "CF_INST_MEM_EXPORT",
            86 => "CF_INST_MEM_RAT",
            87 => "CF_INST_MEM_RAT_CACHELESS",
            88 => "CF_INST_MEM_RING1",
            89 => "CF_INST_MEM_RING2",
            90 => "CF_INST_MEM_RING3",
            91 => "CF_INST_MEM_EXPORT_COMBINED",
            92 => "CF_INST_MEM_RAT_COMBINED_CACHELESS",
        }

        pub fn jump_table_sel {
            0 => "CF_JUMPTABLE_SEL_CONST_A",
            1 => "CF_JUMPTABLE_SEL_CONST_B",
            2 => "CF_JUMPTABLE_SEL_CONST_C",
            3 => "CF_JUMPTABLE_SEL_CONST_D",
            4 => "CF_JUMPTABLE_SEL_INDEX_0",
            5 => "CF_JUMPTABLE_SEL_INDEX_1",
        }

        pub fn gws_index_mode {
            0 => "GWS_INDEX_NONE",
            1 => "GWS_INDEX_0",
            2 => "GWS_INDEX_1",
            3 => "GWS_INDEX_MIX",
        }

        pub fn gws_opcode {
            0 => "GWS_SEMA_V",
            1 => "GWS_SEMA_P",
            2 => "GWS_BARRIER",
            3 => "GWS_INIT",
        }

        pub fn cf_cond {
            0 => "CF_COND_ACTIVE",
            1 => "CF_COND_FALSE",
            2 => "CF_COND_BOOL",
            3 => "CF_COND_NOT_BOOL",
        }

        pub fn cf_alu_inst {
            8 => "CF_INST_ALU",
            9 => "CF_INST_ALU_PUSH_BEFORE",
            10 => "CF_INST_ALU_POP_AFTER",
            11 => "CF_INST_ALU_POP2_AFTER",
            12 => "CF_INST_ALU_EXTENDED",
            13 => "CF_INST_ALU_CONTINUE",
            14 => "CF_INST_ALU_BREAK",
            15 => "CF_INST_ALU_ELSE_AFTER",
        }

        pub fn export_type {
            0 => "EXPORT_PIXEL/EXPORT_WRITE",
            1 => "EXPORT_POS/EXPORT_WRITE_IND",
            2 => "EXPORT_PARAM/EXPORT_WRITE_ACK",
            3 => "EXPORT_WRITE_IND_ACK",
        }

        pub fn rat_inst {
            0 => "EXPORT_RAT_INST_NOP",
            1 => "EXPORT_RAT_INST_STORE_TYPED",
            2 => "EXPORT_RAT_INST_STORE_RAW",
            3 => "EXPORT_RAT_INST_STORE_RAW_FDENORM",
            4 => "EXPORT_RAT_INST_CMPXCHG_INT",
            5 => "EXPORT_RAT_INST_CMPXCHG_FLT",
            6 => "EXPORT_RAT_INST_CMPXCHG_FDENORM",
            7 => "EXPORT_RAT_INST_ADD",
            8 => "EXPORT_RAT_INST_SUB",
            9 => "EXPORT_RAT_INST_RSUB",
            10 => "EXPORT_RAT_INST_MIN_INT",
            11 => "EXPORT_RAT_INST_MIN_UINT",
            12 => "EXPORT_RAT_INST_MAX_INT",
            13 => "EXPORT_RAT_INST_MAX_UINT",
            14 => "EXPORT_RAT_INST_AND",
            15 => "EXPORT_RAT_INST_OR",
            16 => "EXPORT_RAT_INST_XOR",
            17 => "EXPORT_RAT_INST_MSKOR",
            18 => "EXPORT_RAT_INST_INC_UINT",
            19 => "EXPORT_RAT_INST_DEC_UINT",
            32 => "EXPORT_RAT_INST_NOP_RTN",
            34 => "EXPORT_RAT_INST_XCHG_RTN",
            35 => "EXPORT_RAT_INST_XCHG_FDENORM_RTN",
            36 => "EXPORT_RAT_INST_CMPXCHG_INT_RTN",
            37 => "EXPORT_RAT_INST_CMPXCHG_FLT_RTN",
            38 => "EXPORT_RAT_INST_CMPXCHG_FDENORM_RTN",
            39 => "EXPORT_RAT_INST_ADD_RTN",
            40 => "EXPORT_RAT_INST_SUB_RTN",
            41 => "EXPORT_RAT_INST_RSUB_RTN",
            42 => "EXPORT_RAT_INST_MIN_INT_RTN",
            43 => "EXPORT_RAT_INST_MIN_UINT_RTN",
            44 => "EXPORT_RAT_INST_MAX_INT_RTN",
            45 => "EXPORT_RAT_INST_MAX_UINT_RTN",
            46 => "EXPORT_RAT_INST_AND_RTN",
            47 => "EXPORT_RAT_INST_OR_RTN",
            48 => "EXPORT_RAT_INST_XOR_RTN",
            49 => "EXPORT_RAT_INST_MSKOR_RTN",
            50 => "EXPORT_RAT_INST_INC_UINT_RTN",
            51 => "EXPORT_RAT_INST_DEC_UINT_RTN",
        }

        /// Special source selectors, 219 and up.
        pub fn alu_src_sel {
            219 => "ALU_SRC_LDS_OQ_A",
            220 => "ALU_SRC_LDS_OQ_B",
            221 => "ALU_SRC_LDS_OQ_A_POP",
            222 => "ALU_SRC_LDS_OQ_B_POP",
            223 => "ALU_SRC_LDS_DIRECT_A",
            224 => "ALU_SRC_LDS_DIRECT_B",
            227 => "ALU_SRC_TIME_HI",
            228 => "ALU_SRC_TIME_LO",
            229 => "ALU_SRC_MASK_HI",
            230 => "ALU_SRC_MASK_LO",
            231 => "ALU_SRC_HW_WAVE_ID",
            232 => "ALU_SRC_SIMD_ID",
            233 => "ALU_SRC_SE_ID",
            234 => "ALU_SRC_HW_THREADGRP_ID",
            235 => "ALU_SRC_WAVE_ID_IN_GRP",
            236 => "ALU_SRC_NUM_THREADGRP_WAVES",
            237 => "ALU_SRC_HW_ALU_ODD",
            238 => "ALU_SRC_LOOP_IDX",
            240 => "ALU_SRC_PARAM_BASE_ADDR",
            241 => "ALU_SRC_NEW_PRIM_MASK",
            242 => "ALU_SRC_PRIM_MASK_HI",
            243 => "ALU_SRC_PRIM_MASK_LO",
            244 => "ALU_SRC_1_DBL_L",
            245 => "ALU_SRC_1_DBL_M",
            246 => "ALU_SRC_0_5_DBL_L",
            247 => "ALU_SRC_0_5_DBL_M",
            248 => "ALU_SRC_0",
            249 => "ALU_SRC_1",
            250 => "ALU_SRC_1_INT",
            251 => "ALU_SRC_M_1_INT",
            252 => "ALU_SRC_0_5",
            253 => "ALU_SRC_LITERAL",
            254 => "ALU_SRC_PV",
            255 => "ALU_SRC_PS",
        }

        pub fn index_mode {
            0 => "INDEX_AR_X",
            4 => "INDEX_LOOP",
            5 => "INDEX_GLOBAL",
            6 => "INDEX_GLOBAL_AR_X",
        }

        pub fn pred_sel {
            0 => "PRED_SEL_OFF",
            2 => "PRED_SEL_ZERO",
            3 => "PRED_SEL_ONE",
        }

        pub fn omod {
            0 => "ALU_OMOD_OFF",
            1 => "ALU_OMOD_M2",
            2 => "ALU_OMOD_M4",
            3 => "ALU_OMOD_D2",
        }

        pub fn op2_inst {
            0 => "OP2_INST_ADD",
            1 => "OP2_INST_MUL",
            2 => "OP2_INST_MUL_IEEE",
            3 => "OP2_INST_MAX",
            4 => "OP2_INST_MIN",
            5 => "OP2_INST_MAX_DX10",
            6 => "OP2_INST_MIN_DX10",
            8 => "OP2_INST_SETE",
            9 => "OP2_INST_SETGT",
            10 => "OP2_INST_SETGE",
            11 => "OP2_INST_SETNE",
            12 => "OP2_INST_SETE_DX10",
            13 => "OP2_INST_SETGT_DX10",
            14 => "OP2_INST_SETGE_DX10",
            15 => "OP2_INST_SETNE_DX10",
            16 => "OP2_INST_FRACT",
            17 => "OP2_INST_TRUNC",
            18 => "OP2_INST_CEIL",
            19 => "OP2_INST_RNDNE",
            20 => "OP2_INST_FLOOR",
            21 => "OP2_INST_ASHR_INT",
            22 => "OP2_INST_LSHR_INT",
            23 => "OP2_INST_LSHL_INT",
            25 => "OP2_INST_MOV",
            26 => "OP2_INST_NOP",
            27 => "OP2_INST_MUL_64",
            28 => "OP2_INST_FLT64_TO_FLT32",
            29 => "OP2_INST_FLT32_TO_FLT64",
            30 => "OP2_INST_PRED_SETGT_UINT",
            31 => "OP2_INST_PRED_SETGE_UINT",
            32 => "OP2_INST_PRED_SETE",
            33 => "OP2_INST_PRED_SETGT",
            34 => "OP2_INST_PRED_SETGE",
            35 => "OP2_INST_PRED_SETNE",
            36 => "OP2_INST_PRED_SET_INV",
            37 => "OP2_INST_PRED_SET_POP",
            38 => "OP2_INST_PRED_SET_CLR",
            39 => "OP2_INST_PRED_SET_RESTORE",
            40 => "OP2_INST_PRED_SETE_PUSH",
            41 => "OP2_INST_PRED_SETGT_PUSH",
            42 => "OP2_INST_PRED_SETGE_PUSH",
            43 => "OP2_INST_PRED_SETNE_PUSH",
            44 => "OP2_INST_KILLE",
            45 => "OP2_INST_KILLGT",
            46 => "OP2_INST_KILLGE",
            47 => "OP2_INST_KILLNE",
            48 => "OP2_INST_AND_INT",
            49 => "OP2_INST_OR_INT",
            50 => "OP2_INST_XOR_INT",
            51 => "OP2_INST_NOT_INT",
            52 => "OP2_INST_ADD_INT",
            53 => "OP2_INST_SUB_INT",
            54 => "OP2_INST_MAX_INT",
            55 => "OP2_INST_MIN_INT",
            56 => "OP2_INST_MAX_UINT",
            57 => "OP2_INST_MIN_UINT",
            58 => "OP2_INST_SETE_INT",
            59 => "OP2_INST_SETGT_INT",
            60 => "OP2_INST_SETGE_INT",
            61 => "OP2_INST_SETNE_INT",
            62 => "OP2_INST_SETGT_UINT",
            63 => "OP2_INST_SETGE_UINT",
            64 => "OP2_INST_KILLGT_UINT",
            65 => "OP2_INST_KILLGE_UINT",
            66 => "OP2_INST_PRED_SETE_INT",
            67 => "OP2_INST_PRED_SETGT_INT",
            68 => "OP2_INST_PRED_SETGE_INT",
            69 => "OP2_INST_PRED_SETNE_INT",
            70 => "OP2_INST_KILLE_INT",
            71 => "OP2_INST_KILLGT_INT",
            72 => "OP2_INST_KILLGE_INT",
            73 => "OP2_INST_KILLNE_INT",
            74 => "OP2_INST_PRED_SETE_PUSH_INT",
            75 => "OP2_INST_PRED_SETGT_PUSH_INT",
            76 => "OP2_INST_PRED_SETGE_PUSH_INT",
            77 => "OP2_INST_PRED_SETNE_PUSH_INT",
            78 => "OP2_INST_PRED_SETLT_PUSH_INT",
            79 => "OP2_INST_PRED_SETLE_PUSH_INT",
            80 => "OP2_INST_FLT_TO_INT",
            81 => "OP2_INST_BFREV_INT",
            82 => "OP2_INST_ADDC_UINT",
            83 => "OP2_INST_SUBB_UINT",
            84 => "OP2_INST_GROUP_BARRIER",
            85 => "OP2_INST_GROUP_SEQ_BEGIN",
            86 => "OP2_INST_GROUP_SEQ_END",
            87 => "OP2_INST_SET_MODE",
            88 => "OP2_INST_SET_CF_IDX0",
            89 => "OP2_INST_SET_CF_IDX1",
            90 => "OP2_INST_SET_LDS_SIZE",
            129 => "OP2_INST_EXP_IEEE",
            130 => "OP2_INST_LOG_CLAMPED",
            131 => "OP2_INST_LOG_IEEE",
            132 => "OP2_INST_RECIP_CLAMPED",
            133 => "OP2_INST_RECIP_FF",
            134 => "OP2_INST_RECIP_IEEE",
            135 => "OP2_INST_RECIPSQRT_CLAMPED",
            136 => "OP2_INST_RECIPSQRT_FF",
            137 => "OP2_INST_RECIPSQRT_IEEE",
            138 => "OP2_INST_SQRT_IEEE",
            141 => "OP2_INST_SIN",
            142 => "OP2_INST_COS",
            143 => "OP2_INST_MULLO_INT",
            144 => "OP2_INST_MULHI_INT",
            145 => "OP2_INST_MULLO_UINT",
            146 => "OP2_INST_MULHI_UINT",
            147 => "OP2_INST_RECIP_INT",
            148 => "OP2_INST_RECIP_UINT",
            149 => "OP2_INST_RECIP_64",
            150 => "OP2_INST_RECIP_CLAMPED_64",
            151 => "OP2_INST_RECIPSQRT_64",
            152 => "OP2_INST_RECIPSQRT_CLAMPED_64",
            153 => "OP2_INST_SQRT_64",
            154 => "OP2_INST_FLT_TO_UINT",
            155 => "OP2_INST_INT_TO_FLT",
            156 => "OP2_INST_UINT_TO_FLT",
            160 => "OP2_INST_BFM_INT",
            162 => "OP2_INST_FLT32_TO_FLT16",
            163 => "OP2_INST_FLT16_TO_FLT32",
            164 => "OP2_INST_UBYTE0_FLT",
            165 => "OP2_INST_UBYTE1_FLT",
            166 => "OP2_INST_UBYTE2_FLT",
            167 => "OP2_INST_UBYTE3_FLT",
            170 => "OP2_INST_BCNT_INT",
            171 => "OP2_INST_FFBH_UINT",
            172 => "OP2_INST_FFBL_INT",
            173 => "OP2_INST_FFBH_INT",
            174 => "OP2_INST_FLT_TO_UINT4",
            175 => "OP2_INST_DOT_IEEE",
            176 => "OP2_INST_FLT_TO_INT_RPI",
            177 => "OP2_INST_FLT_TO_INT_FLOOR",
            178 => "OP2_INST_MULHI_UINT24",
            179 => "OP2_INST_MBCNT_32HI_INT",
            180 => "OP2_INST_OFFSET_TO_FLT",
            181 => "OP2_INST_MUL_UINT24",
            182 => "OP2_INST_BCNT_ACCUM_PREV_INT",
            183 => "OP2_INST_MBCNT_32LO_ACCUM_PREV_INT",
            184 => "OP2_INST_SETE_64",
            185 => "OP2_INST_SETNE_64",
            186 => "OP2_INST_SETGT_64",
            187 => "OP2_INST_SETGE_64",
            188 => "OP2_INST_MIN_64",
            189 => "OP2_INST_MAX_64",
            190 => "OP2_INST_DOT4",
            191 => "OP2_INST_DOT4_IEEE",
            192 => "OP2_INST_CUBE",
            193 => "OP2_INST_MAX4",
            196 => "OP2_INST_FREXP_64",
            197 => "OP2_INST_LDEXP_64",
            198 => "OP2_INST_FRACT_64",
            199 => "OP2_INST_PRED_SETGT_64",
            200 => "OP2_INST_PRED_SETE_64",
            201 => "OP2_INST_PRED_SETGE_64",
            202 => "OP2_INST_MUL_64_VEC",
            203 => "OP2_INST_ADD_64",
            204 => "OP2_INST_MOVA_INT",
            205 => "OP2_INST_FLT64_TO_FLT32_VEC",
            206 => "OP2_INST_FLT32_TO_FLT64_VEC",
            207 => "OP2_INST_SAD_ACCUM_PREV_UINT",
            208 => "OP2_INST_DOT",
            209 => "OP2_INST_MUL_PREV",
            210 => "OP2_INST_MUL_IEEE_PREV",
            211 => "OP2_INST_ADD_PREV",
            212 => "OP2_INST_MULADD_PREV",
            213 => "OP2_INST_MULADD_IEEE_PREV",
            214 => "OP2_INST_INTERP_XY",
            215 => "OP2_INST_INTERP_ZW",
            216 => "OP2_INST_INTERP_X",
            217 => "OP2_INST_INTERP_Z",
            218 => "OP2_INST_STORE_FLAGS",
            219 => "OP2_INST_LOAD_STORE_FLAGS",
            220 => "OP2_INST_LDS_1A",
            221 => "OP2_INST_LDS_1A1D",
            223 => "OP2_INST_LDS_2A",
            224 => "OP2_INST_INTERP_LOAD_P0",
            225 => "OP2_INST_INTERP_LOAD_P10",
            226 => "OP2_INST_INTERP_LOAD_P20",
        }

        pub fn bank_swizzle {
            0 => "ALU_VEC_012, SQ_ALU_SCL_210",
            1 => "ALU_VEC_021, SQ_ALU_SCL_122",
            2 => "ALU_VEC_120, SQ_ALU_SCL_212",
            3 => "ALU_VEC_102, SQ_ALU_SCL_221",
            4 => "ALU_VEC_201",
            5 => "ALU_VEC_210",
        }

        pub fn op3_inst {
            4 => "OP3_INST_BFE_UINT",
            5 => "OP3_INST_BFE_INT",
            6 => "OP3_INST_BFI_INT",
            7 => "OP3_INST_FMA",
            9 => "OP3_INST_CNDNE_64",
            10 => "OP3_INST_FMA_64",
            11 => "OP3_INST_LERP_UINT",
            12 => "OP3_INST_BIT_ALIGN_INT",
            13 => "OP3_INST_BYTE_ALIGN_INT",
            14 => "OP3_INST_SAD_ACCUM_UINT",
            15 => "OP3_INST_SAD_ACCUM_HI_UINT",
            16 => "OP3_INST_MULADD_UINT24",
            17 => "OP3_INST_LDS_IDX_OP",
            20 => "OP3_INST_MULADD",
            21 => "OP3_INST_MULADD_M2",
            22 => "OP3_INST_MULADD_M4",
            23 => "OP3_INST_MULADD_D2",
            24 => "OP3_INST_MULADD_IEEE",
            25 => "OP3_INST_CNDE",
            26 => "OP3_INST_CNDGT",
            27 => "OP3_INST_CNDGE",
            28 => "OP3_INST_CNDE_INT",
            29 => "OP3_INST_CNDGT_INT",
            30 => "OP3_INST_CNDGE_INT",
            31 => "OP3_INST_MUL_LIT",
        }

        pub fn lds_op {
            0 => "ADD",
            1 => "SUB",
            2 => "RSUB",
            3 => "INC",
            4 => "DEC",
            5 => "MIN_INT",
            6 => "MAX_INT",
            7 => "MIN_UINT",
            8 => "MAX_UINT",
            9 => "AND",
            10 => "OR",
            11 => "XOR",
            12 => "MSKOR",
            13 => "WRITE",
            14 => "WRITE_REL",
            15 => "WRITE2",
            16 => "CMP_STORE",
            17 => "CMP_STORE_SPF",
            18 => "BYTE_WRITE",
            19 => "SHORT_WRITE",
            32 => "ADD_RET",
            34 => "RSUB_RET",
            35 => "INC_RET",
            36 => "DEC_RET",
            37 => "MIN_INT_RET",
            38 => "MAX_INT_RET",
            39 => "MIN_UINT_RET",
            40 => "MAX_UINT_RET",
            41 => "AND_RET",
            42 => "OR_RET",
            43 => "XOR_RET",
            44 => "MSKOR_RET",
            45 => "XCHG_RET",
            46 => "XCHG_REL_RET",
            47 => "XCHG2_RET",
            48 => "CMP_XCHG_RET",
            49 => "CMP_XCHG_SPF_RET",
            50 => "READ_RET",
            51 => "READ_REL_RET",
            52 => "READ2_RET",
            53 => "READWRITE_RET",
            54 => "BYTE_READ_RET",
            55 => "UBYTE_READ_RET",
            56 => "SHORT_READ_RET",
            57 => "USHORT_READ_RET",
            63 => "ATOMIC_ORDERED_ALLOC_RET",
        }

        pub fn vc_inst {
            0 => "VC_INST_FETCH",
            1 => "VC_INST_SEMANTIC",
            14 => "VC_INST_GET_BUFFER_RESINFO",
        }

        pub fn fetch_type {
            0 => "VERTEX_DATA",
            1 => "INSTANCE_DATA",
            2 => "NO_INDEX_OFFSET",
        }

        pub fn vtx_src_sel {
            0 => "SEL_X",
            1 => "SEL_Y",
            2 => "SEL_Z",
            3 => "SEL_W",
        }

        pub fn data_format {
            0 => "UNKNOWN",
            1 => "8",
            2 => "4_4",
            3 => "3_3_2",
            4 => "RESERVED_4",
            5 => "16",
            6 => "16_FLOAT",
            7 => "8_8",
            8 => "5_6_5",
            9 => "6_5_5",
            10 => "1_5_5_5",
            11 => "4_4_4_4",
            12 => "5_5_5_1",
            13 => "32",
            14 => "32_FLOAT",
            15 => "16_16",
            16 => "16_16_FLOAT",
            17 => "8_24",
            18 => "8_24_FLOAT",
            19 => "24_8",
            20 => "24_8_FLOAT",
            21 => "10_11_11",
            22 => "10_11_11_FLOAT",
            23 => "11_11_10",
            24 => "11_11_10_FLOAT",
            25 => "2_10_10_10",
            26 => "8_8_8_8",
            27 => "10_10_10_2",
            28 => "X24_8_32_FLOAT",
            29 => "32_32",
            30 => "32_32_FLOAT",
            31 => "16_16_16_16",
            32 => "16_16_16_16_FLOAT",
            33 => "RESERVED_33",
            34 => "32_32_32_32",
            35 => "32_32_32_32_FLOAT",
            36 => "RESERVED_36",
            37 => "1",
            38 => "1_REVERSED",
            39 => "GB_GR",
            40 => "BG_RG",
            41 => "32_AS_8",
            42 => "32_AS_8_8",
            43 => "5_9_9_9_SHAREDEXP",
            44 => "8_8_8",
            45 => "16_16_16",
            46 => "16_16_16_FLOAT",
            47 => "32_32_32",
            48 => "32_32_32_FLOAT",
            49 => "BC1",
            50 => "BC2",
            51 => "BC3",
            52 => "BC4",
            53 => "BC5",
            54 => "APC0",
            55 => "APC1",
            56 => "APC2",
            57 => "APC3",
            58 => "APC4",
            59 => "APC5",
            60 => "APC6",
            61 => "APC7",
            62 => "CTX1",
            63 => "UNKNOWN",
        }

        pub fn num_format {
            0 => "NORM",
            1 => "INT",
            2 => "SCALED",
        }

        pub fn format_comp {
            0 => "UNSIGNED",
            1 => "SIGNED",
        }

        pub fn srf_mode {
            0 => "ZERO_CLAMP_MINUS_ONE",
            1 => "NO_ZERO",
        }

        pub fn endian_swap {
            0 => "NONE",
            1 => "8IN16",
            2 => "8IN32",
        }
    }
}
