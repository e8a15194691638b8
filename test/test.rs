use std::{fmt, str::Lines};

use evgasm_core::ArchDecoder;

use super::utils::Diff;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ParserError {
    file: String,
    line: usize,
    msg: String,
}

impl ParserError {
    fn new(file: &str, line: usize, msg: String) -> Self {
        Self {
            file: file.to_owned(),
            line,
            msg,
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "error: {}, {}:{}", self.msg, self.file, self.line)
    }
}

/// One test case: the encoded bytes and the expected rendering.
#[derive(Clone, Debug, Default)]
pub struct Test<'a> {
    pub line: usize,
    pub comment: &'a str,
    pub address: u64,
    pub bytes: Vec<u8>,
    pub asm: Vec<&'a str>,
}

/// Reader of `.test` files.
///
/// A line is `[address:] bytes  asm [# comment]`. Bytes are hex tokens read
/// as little-endian numbers, so `0000803f` yields `3f 80 00 00`. Two or more
/// spaces end the bytes. A leading `\` marks a line without bytes.
///
/// With a bundle end marker set, lines accumulate until the marker line or
/// an empty line.
pub struct Parser<'a> {
    file: String,
    lines: Lines<'a>,
    line: usize,
    bundle_end: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(file: &str, input: &'a str) -> Self {
        Self {
            file: file.to_owned(),
            lines: input.lines(),
            line: 0,
            bundle_end: "",
        }
    }

    pub fn set_bundle_end(mut self, s: &'a str) -> Self {
        self.bundle_end = s;
        self
    }

    fn error<T>(&self, msg: String) -> Result<T, String> {
        Err(ParserError::new(&self.file, self.line, msg).to_string())
    }

    pub fn parse(&mut self, output: &mut Test<'a>) -> Result<bool, String> {
        output.bytes.clear();
        output.asm.clear();

        let mut empty_lines = true;
        let mut first = true;
        while let Some(line) = self.lines.next().map(|l| l.trim()) {
            self.line += 1;

            let (line, comment) = line.split_once('#').unwrap_or((line, ""));

            let mut cur = line.trim();
            if empty_lines && (cur.is_empty() || cur == "...") {
                continue;
            }
            empty_lines = false;

            if !self.bundle_end.is_empty() && cur.is_empty() {
                return Ok(true);
            }

            if first {
                first = false;
                output.comment = comment.trim();
                output.line = self.line;
            }

            // parse address
            output.address = 0;
            if let Some(pos) = cur.find(':') {
                let (head, tail) = cur.split_at(pos);
                if head.chars().count() < 17 {
                    match u64::from_str_radix(head, 16) {
                        Ok(i) => output.address = i,
                        Err(_) => {
                            return self.error(format!("invalid address \"{head}\""));
                        }
                    }
                    cur = tail[1..].trim_start();
                }
            }

            // '\' is an escape to asm
            if cur.starts_with('\\') {
                cur = cur.trim_start_matches('\\');
            } else {
                // parse bytes
                while !cur.is_empty() {
                    let stop = cur.chars().take_while(|c| c.is_whitespace()).count() > 1;
                    cur = cur.trim_start();
                    if stop {
                        break;
                    }
                    match cur.find(|c: char| !c.is_ascii_hexdigit()) {
                        Some(pos) if pos >= 2 => {
                            let (head, tail) = cur.split_at(pos);
                            let raw = match u64::from_str_radix(head, 16) {
                                Ok(raw) => raw,
                                Err(_) => return self.error(format!("invalid bytes \"{head}\"")),
                            };
                            let raw = &raw.to_le_bytes()[..(head.len() + 1) / 2];
                            output.bytes.extend_from_slice(raw);
                            cur = tail;
                        }
                        _ => break,
                    }
                }
            }

            if self.bundle_end.is_empty() && output.bytes.is_empty() {
                return self.error("no instruction bytes".to_owned());
            }

            if self.bundle_end.is_empty() || self.bundle_end != cur.trim() {
                output.asm.push(cur);
            }

            if self.bundle_end.is_empty() || self.bundle_end == cur.trim() {
                return Ok(true);
            }
        }

        Ok(!output.bytes.is_empty())
    }

    /// Concatenates the bytes of every test in `src`.
    pub fn parse_all(src: &str, bundle_end: &str) -> Result<Vec<u8>, String> {
        let mut parser = Parser::new("input", src).set_bundle_end(bundle_end);
        let mut test = Test::default();
        let mut data = vec![];
        while parser.parse(&mut test)? {
            data.extend_from_slice(&test.bytes);
        }
        Ok(data)
    }
}

pub fn parse_flags(s: &str) -> impl Iterator<Item = (&str, bool)> {
    s.split_whitespace().filter_map(|i| {
        let state = match i.chars().next() {
            Some('+') => true,
            Some('-') => false,
            _ => return None,
        };
        let name = &i[1..];
        Some((name, state))
    })
}

fn push_insn(out: &mut String, s: &str) {
    for (i, s) in s.split_whitespace().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(s);
    }
}

fn lines_to_string<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        push_insn(&mut out, line.as_ref());
    }
    out
}

/// Drives a decoder over a `.test` file and reports every mismatch.
pub trait Runner {
    fn create(&mut self, test: &Test) -> Box<dyn ArchDecoder>;

    fn bundle_end(&self) -> &'static str {
        ""
    }

    fn run(&mut self, file: &str, tests: &str) -> Result<(), String> {
        let mut test = Test::default();
        let mut parser = Parser::new(file, tests).set_bundle_end(self.bundle_end());
        let mut lines = Vec::new();
        let mut failed = 0;
        while parser.parse(&mut test)? {
            let mut decoder = self.create(&test);
            lines.clear();
            let (len, result) = match decoder.decode(&test.bytes) {
                Ok(len) => match decoder.print(&mut lines) {
                    Ok(()) => (len, lines_to_string(&lines)),
                    Err(err) => (len, format!("<{err}>")),
                },
                Err(_) => (0, String::new()),
            };

            let expect_len = test.bytes.len();
            let expect = lines_to_string(&test.asm);
            if len == 0 || len != expect_len || result != expect {
                failed += 1;

                if len == 0 {
                    eprintln!("error: failed to decode, {}:{}", file, test.line);
                } else {
                    if len != expect_len {
                        eprintln!("error: invalid length, {}:{}", file, test.line);
                        eprintln!("  expect: {expect_len}");
                        eprintln!("  result: {len}");
                    }
                    if result != expect {
                        eprintln!("error: invalid output, {}:{}", file, test.line);
                    }
                }

                let diff = Diff::new(file, test.line, &test.bytes, &expect, &result);
                eprintln!("{diff}");
            }
        }
        if failed == 0 {
            Ok(())
        } else {
            Err(format!("failed {failed} tests"))
        }
    }
}
