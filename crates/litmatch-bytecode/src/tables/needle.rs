//! Needle table: the single-literal engine's payload.
//!
//! Layout (20-byte header, key, zero padding to 8 bytes):
//! - 0-3: total table size (u32)
//! - 4-7: literal id (u32)
//! - 8-15: group mask (u64)
//! - 16-17: key length (u16)
//! - 18: flags (bit 0: caseless)
//! - 19: reserved
//! - 20..: key bytes, ASCII upper-cased when caseless

use litmatch_core::{GroupMask, LiteralId};

use super::{declared_size, read_u16_le, read_u32_le, read_u64_le};

/// Size of the fixed needle header.
pub const NEEDLE_HEADER_SIZE: usize = 20;

/// Flag: key was folded and the scan compares caselessly.
pub const NEEDLE_NOCASE: u8 = 1 << 0;

/// Fixed part of a needle table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeedleHeader {
    pub size: u32,
    pub id: LiteralId,
    pub groups: GroupMask,
    pub key_len: u16,
    pub flags: u8,
}

impl NeedleHeader {
    pub fn write_to(&self, bytes: &mut [u8]) {
        bytes[0..4].copy_from_slice(&self.size.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.id.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.groups.to_le_bytes());
        bytes[16..18].copy_from_slice(&self.key_len.to_le_bytes());
        bytes[18] = self.flags;
        bytes[19] = 0;
    }

    fn read(bytes: &[u8]) -> Option<Self> {
        Some(Self {
            size: read_u32_le(bytes, 0)?,
            id: read_u32_le(bytes, 4)?,
            groups: read_u64_le(bytes, 8)?,
            key_len: read_u16_le(bytes, 16)?,
            flags: *bytes.get(18)?,
        })
    }
}

/// Size function of the single-literal family.
pub fn table_size(payload: &[u8]) -> usize {
    declared_size(payload, NEEDLE_HEADER_SIZE + 1)
}

/// Read-only view over a needle table.
#[derive(Clone, Copy, Debug)]
pub struct NeedleView<'a> {
    header: NeedleHeader,
    key: &'a [u8],
}

impl<'a> NeedleView<'a> {
    /// `None` if the payload is not a well-formed needle table.
    pub fn new(payload: &'a [u8]) -> Option<Self> {
        let size = table_size(payload);
        if size == 0 {
            return None;
        }
        let header = NeedleHeader::read(payload)?;
        let key_end = NEEDLE_HEADER_SIZE + header.key_len as usize;
        if header.key_len == 0 || key_end > size {
            return None;
        }
        Some(Self {
            header,
            key: &payload[NEEDLE_HEADER_SIZE..key_end],
        })
    }

    pub fn id(&self) -> LiteralId {
        self.header.id
    }

    pub fn groups(&self) -> GroupMask {
        self.header.groups
    }

    pub fn nocase(&self) -> bool {
        self.header.flags & NEEDLE_NOCASE != 0
    }

    pub fn key(&self) -> &'a [u8] {
        self.key
    }
}
