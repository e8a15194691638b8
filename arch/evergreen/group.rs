use evgasm_core::{bytes::Bytes, error::Error};

use crate::{
    decode::Decoder,
    insn::{Insn, Lane},
    table::TRANS_ONLY,
    words::{AluWord0, AluWord1Op2},
};

/// Maximum number of instructions in a group.
pub const MAX_GROUP_SIZE: usize = 5;
/// Size of the literal pool in 32-bit words.
pub const MAX_LITERALS: usize = 4;

/// ALU instructions issued together, with their shared literal pool.
#[derive(Clone, Debug)]
pub struct AluGroup {
    id: usize,
    insns: Vec<Insn>,
    literal: [u32; MAX_LITERALS],
    literal_count: usize,
}

impl AluGroup {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn insns(&self) -> &[Insn] {
        &self.insns
    }

    pub fn len(&self) -> usize {
        self.insns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insns.is_empty()
    }

    /// Number of 64-bit literal slots, each holding two constants.
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Literal constant read by channel `chan`.
    pub fn literal(&self, chan: u32) -> Option<u32> {
        self.literals().get(chan as usize).copied()
    }

    pub fn literals(&self) -> &[u32] {
        &self.literal[..self.literal_count * 2]
    }

    /// Instruction assigned to `lane`.
    pub fn insn_in_lane(&self, lane: Lane) -> Option<&Insn> {
        self.insns.iter().find(|insn| insn.lane() == Some(lane))
    }

    /// Size of the encoded group in bytes.
    pub fn size(&self) -> usize {
        (self.insns.len() + self.literal_count) * 8
    }
}

impl Decoder {
    /// Decodes the ALU group starting at `offset`.
    ///
    /// Returns the group and the offset after its literal pool.
    pub fn decode_alu_group(
        &self,
        buf: &[u8],
        offset: usize,
        id: usize,
    ) -> Result<(AluGroup, usize), Error> {
        let mut group = AluGroup {
            id,
            insns: Vec::with_capacity(MAX_GROUP_SIZE),
            literal: [0; MAX_LITERALS],
            literal_count: 0,
        };
        let mut busy = [false; Lane::ALL.len()];
        let mut offset = offset;

        loop {
            if group.insns.len() == MAX_GROUP_SIZE {
                return Err(Error::TooManyInstructionsInGroup { group: id });
            }
            let (mut insn, next) = self.decode_alu(buf, offset)?;
            offset = next;

            // chan z and w are in the second slot
            let literal_count = insn
                .literal_srcs()
                .map(|src| (src.chan as usize + 2) / 2)
                .max()
                .unwrap_or(0);
            group.literal_count = group.literal_count.max(literal_count);

            let mut lane = if insn.has_flags(TRANS_ONLY) {
                Lane::Trans
            } else {
                Lane::from_chan(insn.word::<AluWord1Op2>(1).dst_chan())
            };
            if busy[lane.index()] {
                lane = Lane::Trans;
            }
            if busy[lane.index()] {
                return Err(Error::LaneAllocationOverflow { group: id });
            }
            busy[lane.index()] = true;
            insn.set_lane(lane);

            let last = insn.word::<AluWord0>(0).last();
            group.insns.push(insn);
            if last {
                break;
            }
        }

        let mut bytes = Bytes::at(buf, offset);
        for literal in &mut group.literal[..group.literal_count * 2] {
            *literal = bytes.read_u32()?;
        }
        offset += group.literal_count * 8;

        Ok((group, offset))
    }
}
