/// Bit set of instruction properties.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Flags {
    raw: u32,
}

impl Flags {
    pub const fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    pub const fn any(&self, flags: u32) -> bool {
        self.raw & flags != 0
    }
}
