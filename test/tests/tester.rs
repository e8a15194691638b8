use evgasm_test::test::{Parser, Test};

#[test]
fn parse_flags() {
    let src = " +count\t+debug  -abc-foo -foo  +bar+foo";
    let mut flags = evgasm_test::test::parse_flags(src);
    assert_eq!(flags.next(), Some(("count", true)));
    assert_eq!(flags.next(), Some(("debug", true)));
    assert_eq!(flags.next(), Some(("abc-foo", false)));
    assert_eq!(flags.next(), Some(("foo", false)));
    assert_eq!(flags.next(), Some(("bar+foo", true)));
    assert_eq!(flags.next(), None);
}

#[test]
fn parse() -> Result<(), String> {
    let src = r#"# comment
        00000004 80a00000  ALU: ADDR(4) CNT(1) # +count
        0010: 00000000 89800000  EXPORT_DONE: PIX0, R0
              03020100  nop
        \label only
    "#;

    let mut parser = Parser::new("input", src);
    let mut test = Test::default();

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 2);
    assert_eq!(test.address, 0);
    assert_eq!(test.bytes, &[0x04, 0, 0, 0, 0x00, 0x00, 0xa0, 0x80]);
    assert_eq!(test.asm[0], "ALU: ADDR(4) CNT(1)");
    assert_eq!(test.comment, "+count");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 3);
    assert_eq!(test.address, 0x10);
    assert_eq!(test.bytes, &[0, 0, 0, 0, 0x00, 0x00, 0x80, 0x89]);
    assert_eq!(test.asm[0], "EXPORT_DONE: PIX0, R0");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.bytes, &[0x00, 0x01, 0x02, 0x03]);
    assert_eq!(test.asm[0], "nop");

    assert!(parser.parse(&mut test).is_err());

    Ok(())
}

#[test]
fn parse_bundle() -> Result<(), String> {
    let src = r#"
        00000000 00000000  x: first
        00000000 80000000  y: second
        0000803f 00000000  --

        00000000 80000000  x: third
    "#;

    let mut parser = Parser::new("input", src).set_bundle_end("--");
    let mut test = Test::default();

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 2);
    assert_eq!(test.bytes.len(), 24);
    assert_eq!(&test.bytes[16..20], &[0x3f, 0x80, 0x00, 0x00]);
    assert_eq!(test.asm, ["x: first", "y: second"]);

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.bytes.len(), 8);
    assert_eq!(test.asm, ["x: third"]);

    assert!(!parser.parse(&mut test)?);

    Ok(())
}

#[test]
fn parse_all() -> Result<(), String> {
    let src = "00000000 00000000  x: a\n00000001 80000000  y: b\n--\n";
    let data = Parser::parse_all(src, "--")?;
    assert_eq!(data.len(), 16);
    assert_eq!(data[8], 1);
    Ok(())
}

#[test]
fn check() {
    assert!(evgasm_test::utils::check("input", 1, "a\nb", "a\nb").is_ok());
    assert!(evgasm_test::utils::check("input", 1, "a\nb", "a\nc").is_err());
}
