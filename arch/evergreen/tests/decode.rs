use evgasm_core::{error::Error, flags::Flags};
use evgasm_evergreen::{
    opcode,
    printer::{self, Slot},
    words::*,
    Category, Decoder, Format, InsnInfo, InsnTable, Insn, Lane, Next,
};

fn push(buf: &mut Vec<u8>, words: &[u32]) {
    for word in words {
        buf.extend_from_slice(&word.to_le_bytes());
    }
}

fn mov(src: u32, dst: u32, chan: u32, last: bool) -> [u32; 2] {
    let word0 = AluWord0::default()
        .with_src0_sel(src)
        .with_src0_chan(chan)
        .with_last(last);
    let word1 = AluWord1Op2::default()
        .with_write_mask(true)
        .with_alu_inst(25)
        .with_dst_gpr(dst)
        .with_dst_chan(chan);
    [word0.raw(), word1.raw()]
}

fn recip(last: bool) -> [u32; 2] {
    let word0 = AluWord0::default().with_src0_sel(1).with_last(last);
    let word1 = AluWord1Op2::default().with_write_mask(true).with_alu_inst(134);
    [word0.raw(), word1.raw()]
}

#[test]
fn table_lookup() {
    let table = InsnTable::get();
    for info in table.iter() {
        let found = match (info.category, info.fmt[1]) {
            (Category::Cf, Format::CfAluWord1 | Format::CfAluWord1Ext) => table.cf_short(info.inst),
            (Category::Cf, _) => table.cf_long(info.inst),
            (Category::Alu | Category::Lds, Format::AluWord1Op2) => table.alu_long(info.inst),
            (Category::Alu | Category::Lds, _) => table.alu_short(info.inst),
            _ => table.tex(info.inst),
        };
        assert_eq!(found.map(|i| i.opcode), Some(info.opcode), "{}", info.name);
        assert_eq!(info.opcode.info().name, info.name);
    }
}

#[test]
fn cf_next() -> Result<(), Error> {
    let decoder = Decoder::new();
    let mut buf = vec![];

    let nop = CfWord1::default().with_barrier(true);
    push(&mut buf, &[0, nop.raw()]);
    push(&mut buf, &[0, nop.with_end_of_program(true).raw()]);
    let export = AllocExportWord1Swiz::default()
        .with_cf_inst(84)
        .with_end_of_program(true);
    push(&mut buf, &[0, export.raw()]);
    // bit 21 is a part of the count field of CF_ALU_WORD1
    let alu = CfAluWord1::default().with_cf_inst(8).with_count(8);
    push(&mut buf, &[0, alu.raw()]);

    let (insn, next) = decoder.decode_cf(&buf, 0)?;
    assert_eq!(insn.info().opcode, opcode::NOP);
    assert_eq!(next, Next::Offset(8));

    let (_, next) = decoder.decode_cf(&buf, 8)?;
    assert_eq!(next, Next::EndOfProgram);

    let (insn, next) = decoder.decode_cf(&buf, 16)?;
    assert_eq!(insn.info().opcode, opcode::EXPORT_DONE);
    assert_eq!(next, Next::EndOfProgram);

    let (insn, next) = decoder.decode_cf(&buf, 24)?;
    assert_eq!(insn.info().opcode, opcode::ALU);
    assert_eq!(next, Next::Offset(32));

    assert!(matches!(decoder.decode_cf(&buf, 32), Err(Error::More(_))));
    Ok(())
}

#[test]
fn unknown_instruction() {
    let decoder = Decoder::new();
    let mut buf = vec![];
    push(&mut buf, &[0, CfWord1::default().with_cf_inst(127).raw()]);
    assert_eq!(
        decoder.decode_cf(&buf, 0).err(),
        Some(Error::UnknownInstruction {
            offset: 0,
            word: 127 << 22
        })
    );

    let mut buf = vec![];
    push(&mut buf, &[15, 0, 0, 0]);
    assert_eq!(
        decoder.decode_tc(&buf, 0).err(),
        Some(Error::UnknownInstruction { offset: 0, word: 15 })
    );
}

#[test]
fn group_literals() -> Result<(), Error> {
    let mut buf = vec![];
    push(&mut buf, &mov(253, 0, 2, true));
    push(&mut buf, &[1, 2, 3, 4]);

    let (group, next) = Decoder::new().decode_alu_group(&buf, 0, 3)?;
    assert_eq!(group.id(), 3);
    assert_eq!(group.len(), 1);
    assert_eq!(group.literal_count(), 2);
    assert_eq!(group.literals(), &[1, 2, 3, 4]);
    assert_eq!(group.literal(2), Some(3));
    assert_eq!(group.size(), 24);
    assert_eq!(next, 24);
    Ok(())
}

#[test]
fn group_lanes() -> Result<(), Error> {
    let mut buf = vec![];
    push(&mut buf, &recip(false));
    push(&mut buf, &mov(1, 0, 1, false));
    push(&mut buf, &mov(1, 1, 2, true));

    let (group, next) = Decoder::new().decode_alu_group(&buf, 0, 0)?;
    assert_eq!(next, 24);
    assert_eq!(group.literal_count(), 0);
    let lanes: Vec<_> = group.insns().iter().map(Insn::lane).collect();
    assert_eq!(lanes, [Some(Lane::Trans), Some(Lane::Y), Some(Lane::Z)]);
    assert!(group.insn_in_lane(Lane::X).is_none());
    assert_eq!(
        group.insn_in_lane(Lane::Trans).map(|i| i.name()),
        Some("RECIP_IEEE")
    );
    Ok(())
}

#[test]
fn group_lane_overflow() {
    let decoder = Decoder::new();

    let mut buf = vec![];
    push(&mut buf, &mov(1, 0, 0, false));
    push(&mut buf, &mov(1, 1, 0, false));
    push(&mut buf, &mov(1, 2, 0, true));
    assert_eq!(
        decoder.decode_alu_group(&buf, 0, 5).err(),
        Some(Error::LaneAllocationOverflow { group: 5 })
    );

    let mut buf = vec![];
    push(&mut buf, &recip(false));
    push(&mut buf, &recip(true));
    assert_eq!(
        decoder.decode_alu_group(&buf, 0, 0).err(),
        Some(Error::LaneAllocationOverflow { group: 0 })
    );
}

#[test]
fn group_too_long() {
    let mut buf = vec![];
    for chan in 0..4 {
        push(&mut buf, &mov(1, 0, chan, false));
    }
    push(&mut buf, &recip(false));
    push(&mut buf, &mov(1, 0, 0, true));
    assert_eq!(
        Decoder::new().decode_alu_group(&buf, 0, 7).err(),
        Some(Error::TooManyInstructionsInGroup { group: 7 })
    );
}

#[test]
fn group_truncated() {
    let mut buf = vec![];
    push(&mut buf, &mov(1, 0, 0, false));
    assert!(matches!(
        Decoder::new().decode_alu_group(&buf, 0, 0),
        Err(Error::More(_))
    ));

    // literal pool is missing
    let mut buf = vec![];
    push(&mut buf, &mov(253, 0, 0, true));
    assert!(matches!(
        Decoder::new().decode_alu_group(&buf, 0, 0),
        Err(Error::More(_))
    ));
}

#[test]
fn kcache_mode() -> Result<(), Error> {
    let word0 = CfAluWord0::default().with_kcache_mode0(2);
    let word1 = CfAluWord1::default().with_cf_inst(8).with_barrier(true);
    let mut buf = vec![];
    push(&mut buf, &[word0.raw(), word1.raw()]);

    let (insn, _) = Decoder::new().decode_cf(&buf, 0)?;
    let mut s = String::new();
    let err = printer::print_insn(&mut s, &(), &insn, None, Slot::default()).err();
    assert_eq!(
        err,
        Some(Error::InvalidField {
            name: "kcache_mode",
            value: 2
        })
    );
    Ok(())
}

static BOGUS: InsnInfo = InsnInfo {
    opcode: opcode::NOP,
    name: "BOGUS",
    category: Category::Cf,
    fmt_str: "%name %bogus",
    fmt: [Format::CfWord0, Format::CfWord1, Format::None],
    inst: 0,
    flags: Flags::from_raw(0),
    size: 2,
};

static RAT_INDEX: InsnInfo = InsnInfo {
    opcode: opcode::MEM_RAT,
    name: "RAT_INDEX",
    category: Category::Cf,
    fmt_str: "%name %exp_index_gpr%dump",
    fmt: [Format::AllocExportWord0Rat, Format::AllocExportWord1Buf, Format::None],
    inst: 0,
    flags: Flags::from_raw(0),
    size: 2,
};

#[test]
fn format_tokens() {
    let insn = Insn::new(&BOGUS, [0; 3]);
    let mut s = String::new();
    let err = printer::print_insn(&mut s, &(), &insn, None, Slot::default()).err();
    assert!(matches!(err, Some(Error::UnknownFormatToken(s)) if s.starts_with("bogus")));

    let word0 = AllocExportWord0Rat::default().with_rat_inst(2);
    let insn = Insn::new(&RAT_INDEX, [word0.raw(), 0, 0]);
    let mut s = String::new();
    assert!(printer::print_insn(&mut s, &(), &insn, None, Slot::default()).is_ok());
    assert!(s.starts_with("   RAT_INDEX STORE_RAW\n\nRAT_INDEX\nHex dump: 20 00 00 00 \n"));
    assert!(s.contains("CF_ALLOC_EXPORT_WORD0_RAT\n  rat_id = 0\n  rat_inst = 2 ("));
    assert!(s.contains("CF_ALLOC_EXPORT_WORD1_BUF\n"));
}

#[test]
fn c_style_float() -> Result<(), Error> {
    let mut buf = vec![];
    push(&mut buf, &mov(253, 0, 0, false));
    push(&mut buf, &mov(253, 0, 1, true));
    push(&mut buf, &[0x3e800000, 0xff800000]);

    let (group, _) = Decoder::new().decode_alu_group(&buf, 0, 0)?;
    let mut s = String::new();
    printer::print_group_buf(&mut s, &group)?;
    assert_eq!(
        s,
        "x=\"MOV R0.x, (0x3e800000, 2.500000000e-01f).x\" \
         y=\"MOV R0.y, (0xff800000, -inff).y\""
    );
    Ok(())
}
