use evgasm_core::error::Error;
use evgasm_evergreen::{disasm_buffer, dump, words::*, Format, Options};
use evgasm_test::utils::check;

fn push(buf: &mut Vec<u8>, words: &[u32]) {
    for word in words {
        buf.extend_from_slice(&word.to_le_bytes());
    }
}

fn cf(buf: &mut Vec<u8>, addr: u32, inst: u32) {
    let word0 = CfWord0::default().with_addr(addr);
    let word1 = CfWord1::default().with_cf_inst(inst).with_barrier(true);
    push(buf, &[word0.raw(), word1.raw()]);
}

/// ALU clause, a loop around a fetch clause and the final export.
fn program() -> Vec<u8> {
    let mut buf = vec![];

    let word0 = CfAluWord0::default().with_addr(6);
    let word1 = CfAluWord1::default().with_cf_inst(8).with_barrier(true);
    push(&mut buf, &[word0.raw(), word1.raw()]);
    cf(&mut buf, 5, 6);
    cf(&mut buf, 8, 1);
    cf(&mut buf, 2, 5);
    let word1 = AllocExportWord1Swiz::default()
        .with_sel_y(1)
        .with_sel_z(2)
        .with_sel_w(3)
        .with_cf_inst(84)
        .with_end_of_program(true)
        .with_barrier(true);
    push(&mut buf, &[0, word1.raw()]);
    push(&mut buf, &[0, 0]);

    let word0 = AluWord0::default().with_src0_sel(1).with_last(true);
    let word1 = AluWord1Op2::default().with_write_mask(true).with_alu_inst(25);
    push(&mut buf, &[word0.raw(), word1.raw()]);
    push(&mut buf, &[0, 0]);

    let word0 = TexWord0::default().with_tex_inst(16);
    let word1 = TexWord1::default()
        .with_dsy(1)
        .with_dsz(2)
        .with_dsw(3)
        .with_ctx(true)
        .with_cty(true)
        .with_ctz(true)
        .with_ctw(true);
    let word2 = TexWord2::default().with_ssy(1).with_ssz(2).with_ssw(3);
    push(&mut buf, &[word0.raw(), word1.raw(), word2.raw(), 0]);

    // never reached
    cf(&mut buf, 0, 0);
    buf
}

fn trim_lines(s: &str) -> String {
    s.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

#[test]
fn walk() -> Result<(), String> {
    let mut out = String::new();
    disasm_buffer(&mut out, &(), &program(), &Options::default()).map_err(|e| e.to_string())?;

    let expect = "\
00 ALU: ADDR(6) CNT(1)
      0  x: MOV         R0.x, R1.x
01 LOOP_START_DX10 i0 FAIL_JUMP_ADDR(5)
    02 TC: ADDR(8) CNT(1)
          1  SAMPLE R0, R0, t0, s0
03 LOOP_END i0 PASS_JUMP_ADDR(2)
04 EXPORT_DONE: PIX0, R0";
    check("walk", 1, expect, &trim_lines(&out))
}

#[test]
fn walk_debug() -> Result<(), String> {
    let opts = Options {
        debug: true,
        ..Options::default()
    };
    let mut out = String::new();
    disasm_buffer(&mut out, &(), &program(), &opts).map_err(|e| e.to_string())?;

    let expect = r#"cnt=0 l=0 inst="ALU: ADDR(6) CNT(1)"
cnt=0 l=0 inst.x="MOV R0.x, R1.x"
cnt=1 l=0 inst="LOOP_START_DX10 i0 FAIL_JUMP_ADDR(5)"
cnt=2 l=1 inst="TC: ADDR(8) CNT(1)"
cnt=1 l=1 inst="SAMPLE R0, R0, t0, s0"
cnt=3 l=0 inst="LOOP_END i0 PASS_JUMP_ADDR(2)"
cnt=4 l=0 inst="EXPORT_DONE: PIX0, R0""#;
    check("walk_debug", 1, expect, &trim_lines(&out))
}

#[test]
fn walk_words() -> Result<(), Error> {
    let opts = Options {
        words: true,
        ..Options::default()
    };
    let mut out = String::new();
    disasm_buffer(&mut out, &(), &program(), &opts)?;
    assert!(out.contains("ALU\nHex dump: 06 00 00 00 \nCF_ALU_WORD0\n  addr = 6\n"));
    assert!(out.contains("MOV\nHex dump: 01 00 00 80 \nALU_WORD0\n"));
    assert!(out.contains("SAMPLE\nHex dump: 10 00 00 00 \ndump: unsupported microcode format\n"));
    Ok(())
}

#[test]
fn walk_without_end() {
    let mut buf = vec![];
    cf(&mut buf, 0, 0);
    let mut out = String::new();
    let err = disasm_buffer(&mut out, &(), &buf, &Options::default()).err();
    assert!(matches!(err, Some(Error::More(_))));
    assert_eq!(out.trim_end(), "00 NOP");
}

#[test]
fn word_dump() -> Result<(), String> {
    let word = CfWord1::default()
        .with_end_of_program(true)
        .with_barrier(true)
        .raw();
    let mut out = String::new();
    dump::word_dump(&mut out, word, Format::CfWord1).map_err(|e| e.to_string())?;
    let expect = "Hex dump: 00 00 20 80 \n\
CF_WORD1
  pop_count = 0
  cf_const = 0
  cond = 0 (CF_COND_ACTIVE)
  count = 0
  valid_pixel_mode = 0
  end_of_program = 1
  cf_inst = 0 (CF_INST_NOP)
  whole_quad_mode = 0
  barrier = 1
";
    check("word_dump", 1, expect, &out)?;

    let mut out = String::new();
    dump::word_dump(&mut out, 0, Format::TexWord0).map_err(|e| e.to_string())?;
    check(
        "word_dump",
        1,
        "Hex dump: 00 00 00 00 \ndump: unsupported microcode format\n",
        &out,
    )
}
