//! Decoder and disassembler for the AMD Evergreen GPU instruction set.
//!
//! A program is a list of 64-bit control-flow (CF) instructions. CF
//! instructions reference ALU clauses, made of groups of up to five
//! instructions sharing a literal pool, and fetch clauses of 128-bit
//! texture, vertex and memory read instructions.

#[macro_use]
extern crate log;

pub mod decode;
pub mod disasm;
pub mod dump;
pub mod group;
pub mod insn;
pub mod maps;
pub mod printer;
pub mod table;
pub mod words;

pub use self::decode::{Decoder, Next};
pub use self::disasm::{disasm_buffer, ClauseDecoder, ClauseKind, Options};
pub use self::group::AluGroup;
pub use self::insn::{Insn, Lane, Src};
pub use self::table::{opcode, Category, InsnInfo, InsnTable, Opcode};
pub use self::words::Format;
