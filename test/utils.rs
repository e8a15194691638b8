use std::fmt::{self, Write as _};

/// Little-endian 32-bit words, the way `.test` files spell them.
struct Words<'a>(pub &'a [u8]);

impl fmt::Display for Words<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, chunk) in self.0.chunks(4).enumerate() {
            if i != 0 {
                fmt.write_char(' ')?;
            }
            let mut raw = [0; 4];
            raw[..chunk.len()].copy_from_slice(chunk);
            write!(fmt, "{:0w$x}", u32::from_le_bytes(raw), w = chunk.len() * 2)?;
        }
        Ok(())
    }
}

/// Makes trailing whitespace visible.
struct Escape<'a>(pub &'a str);

impl fmt::Display for Escape<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let body = self.0.trim_end();
        fmt.write_str(body)?;
        for c in self.0[body.len()..].chars() {
            match c {
                '\t' => fmt.write_char('→')?,
                ' ' => fmt.write_char('•')?,
                _ => fmt.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Line diff between the expected and the produced text.
pub struct Diff<'a> {
    file: &'a str,
    line: usize,
    bytes: &'a [u8],
    expect: &'a str,
    result: &'a str,
}

impl<'a> Diff<'a> {
    pub fn new(
        file: &'a str,
        line: usize,
        bytes: &'a [u8],
        expect: &'a str,
        result: &'a str,
    ) -> Self {
        Self {
            file,
            line,
            bytes,
            expect,
            result,
        }
    }
}

impl fmt::Display for Diff<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        use diff::Result as E;
        let w = 5;
        if !self.file.is_empty() {
            writeln!(out, "{:w$}--> {}", ' ', self.file)?;
        }
        if !self.bytes.is_empty() {
            for (i, chunk) in self.bytes.chunks(16).enumerate() {
                let prefix = if i == 0 { "raw | " } else { "| " };
                writeln!(out, "{prefix:>8}{}", Words(chunk))?;
            }
            writeln!(out, "{:7}{:-<36}", ' ', ' ')?;
        }
        let mut ln = std::cmp::max(self.line, 1);
        let mut ln2 = ln;
        for diff in diff::lines(self.expect, self.result) {
            match diff {
                E::Left(l) => {
                    writeln!(out, "{ln:w$} - {}↴", Escape(l))?;
                    ln += 1;
                }
                E::Both(l, _) => {
                    writeln!(out, "{ln:w$} | {}↴", Escape(l))?;
                    ln += 1;
                    ln2 = ln;
                }
                E::Right(r) => {
                    writeln!(out, "{ln2:w$} + {}↴", Escape(r))?;
                    ln2 += 1;
                }
            }
        }
        Ok(())
    }
}

/// Compares two multi-line texts and prints a diff when they differ.
pub fn check(file: &str, line: usize, left: &str, right: &str) -> Result<(), String> {
    if left != right {
        let err = "invalid result";
        eprintln!("error: {err}");
        eprintln!("{}", Diff::new(file, line, &[], left, right));
        return Err(err.to_string());
    }
    Ok(())
}
