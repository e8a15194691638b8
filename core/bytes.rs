use core::cmp;

use crate::error::Error;

/// Little-endian reader over an instruction buffer.
pub struct Bytes<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Bytes<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Creates a reader positioned at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            offset: cmp::min(offset, data.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn advance(&mut self, count: usize) {
        self.offset = cmp::min(self.offset + count, self.data.len());
    }

    pub fn read(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if self.offset + len > self.data.len() {
            return Err(Error::More((self.offset + len) * 8));
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut raw = [0; N];
        raw.copy_from_slice(self.read(N)?);
        Ok(raw)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(u32::from_le_bytes(self.read_array::<4>()?))
    }

    /// Reads `N` consecutive 32-bit words.
    pub fn read_words<const N: usize>(&mut self) -> Result<[u32; N], Error> {
        if self.offset + N * 4 > self.data.len() {
            return Err(Error::More((self.offset + N * 4) * 8));
        }
        let mut words = [0; N];
        for word in words.iter_mut() {
            *word = self.read_u32()?;
        }
        Ok(words)
    }
}
