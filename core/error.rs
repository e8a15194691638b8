use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Need more bytes to decode an instruction.
    More(usize),
    /// No instruction matches the opcode fields of a word.
    UnknownInstruction { offset: usize, word: u32 },
    /// Format string contains a token without a renderer.
    UnknownFormatToken(&'static str),
    /// All lanes an ALU instruction may use are busy.
    LaneAllocationOverflow { group: usize },
    /// ALU group is not terminated within five instructions.
    TooManyInstructionsInGroup { group: usize },
    /// Field holds a reserved or unsupported value.
    InvalidField { name: &'static str, value: u32 },
    /// Failed to write the output.
    Fmt,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::More(bits) => write!(fmt, "Need more data ({bits} bits)"),
            Self::UnknownInstruction { offset, word } => {
                write!(fmt, "Unknown instruction {word:#010x} at offset {offset:#x}")
            }
            Self::UnknownFormatToken(s) => {
                let end = s
                    .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                    .unwrap_or(s.len());
                write!(fmt, "Unknown format token '%{}'", &s[..end])
            }
            Self::LaneAllocationOverflow { group } => {
                write!(fmt, "ALU group {group}: no free lane for instruction")
            }
            Self::TooManyInstructionsInGroup { group } => {
                write!(fmt, "ALU group {group}: too many instructions")
            }
            Self::InvalidField { name, value } => {
                write!(fmt, "Invalid value {value} for field {name}")
            }
            Self::Fmt => fmt.write_str("Failed to format output"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::Fmt
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
