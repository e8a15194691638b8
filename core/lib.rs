#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bytes;
pub mod error;
pub mod flags;
pub mod macros;
pub mod utils;

#[cfg(feature = "print")]
pub mod printer;

use alloc::{string::String, vec::Vec};

use crate::error::Error;

/// Decoder for one kind of instruction stream.
///
/// Used by the test harness and the command-line tool to drive any clause
/// decoder through the same interface.
pub trait ArchDecoder {
    /// Decodes one unit from the start of `bytes` and returns the number of
    /// consumed bytes.
    fn decode(&mut self, bytes: &[u8]) -> Result<usize, Error>;

    /// Renders the last decoded unit, one entry per instruction.
    fn print(&self, out: &mut Vec<String>) -> Result<(), Error>;
}
