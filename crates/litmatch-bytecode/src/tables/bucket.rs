//! Bucket table: the multi-literal engine's payload.
//!
//! Layout:
//! - 0-15: header (size, literal count, bucket count, flags, records offset)
//! - 16..: bucket starts, `bucket_count + 1` u32 table offsets; the last
//!   one is the end of the records
//! - records_offset..: literal records grouped by bucket
//!
//! Record layout (32-byte header, bytes, zero padding to 8 bytes):
//! - 0-3: literal id (u32)
//! - 4-5: length (u16)
//! - 6: flags (bit 0: caseless)
//! - 7: mask length
//! - 8-15: group mask (u64)
//! - 16-23: msk, end-aligned, zero filled
//! - 24-31: cmp, end-aligned, zero filled
//! - 32..: literal bytes

use litmatch_core::{GroupMask, LiteralId, MAX_MASK_LEN};

use super::{declared_size, pad_table, read_u16_le, read_u32_le, read_u64_le};

/// Size of the fixed bucket table header.
pub const BUCKET_HEADER_SIZE: usize = 16;

/// Size of the fixed part of a literal record.
pub const RECORD_HEADER_SIZE: usize = 32;

/// Header flag: built with the size-over-speed preference.
pub const BUCKET_SMALL: u8 = 1 << 0;

/// Header flag: laid out for 256-bit SIMD.
pub const BUCKET_WIDE: u8 = 1 << 1;

/// Record flag: caseless literal.
pub const RECORD_NOCASE: u8 = 1 << 0;

/// Offset of the first record for a table with `bucket_count` buckets.
pub const fn records_offset(bucket_count: usize) -> usize {
    pad_table(BUCKET_HEADER_SIZE + 4 * (bucket_count + 1))
}

/// Size of one record holding a literal of `len` bytes.
pub const fn record_size(len: usize) -> usize {
    pad_table(RECORD_HEADER_SIZE + len)
}

/// Fixed part of a bucket table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketHeader {
    pub size: u32,
    pub literal_count: u32,
    pub bucket_count: u16,
    pub flags: u8,
    pub records_offset: u32,
}

impl BucketHeader {
    pub fn write_to(&self, bytes: &mut [u8]) {
        bytes[0..4].copy_from_slice(&self.size.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.literal_count.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.bucket_count.to_le_bytes());
        bytes[10] = self.flags;
        bytes[11] = 0;
        bytes[12..16].copy_from_slice(&self.records_offset.to_le_bytes());
    }

    fn read(bytes: &[u8]) -> Option<Self> {
        Some(Self {
            size: read_u32_le(bytes, 0)?,
            literal_count: read_u32_le(bytes, 4)?,
            bucket_count: read_u16_le(bytes, 8)?,
            flags: *bytes.get(10)?,
            records_offset: read_u32_le(bytes, 12)?,
        })
    }
}

/// Fixed part of a literal record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    pub id: LiteralId,
    pub len: u16,
    pub flags: u8,
    pub mask_len: u8,
    pub groups: GroupMask,
    pub msk: [u8; MAX_MASK_LEN],
    pub cmp: [u8; MAX_MASK_LEN],
}

impl RecordHeader {
    pub fn write_to(&self, bytes: &mut [u8]) {
        bytes[0..4].copy_from_slice(&self.id.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.len.to_le_bytes());
        bytes[6] = self.flags;
        bytes[7] = self.mask_len;
        bytes[8..16].copy_from_slice(&self.groups.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.msk);
        bytes[24..32].copy_from_slice(&self.cmp);
    }

    fn read(bytes: &[u8]) -> Option<Self> {
        let mut msk = [0u8; MAX_MASK_LEN];
        let mut cmp = [0u8; MAX_MASK_LEN];
        msk.copy_from_slice(bytes.get(16..24)?);
        cmp.copy_from_slice(bytes.get(24..32)?);
        Some(Self {
            id: read_u32_le(bytes, 0)?,
            len: read_u16_le(bytes, 4)?,
            flags: *bytes.get(6)?,
            mask_len: *bytes.get(7)?,
            groups: read_u64_le(bytes, 8)?,
            msk,
            cmp,
        })
    }
}

/// Size function of the multi-literal family.
pub fn table_size(payload: &[u8]) -> usize {
    declared_size(payload, records_offset(1))
}

/// Read-only view over a bucket table.
#[derive(Clone, Debug)]
pub struct BucketView<'a> {
    table: &'a [u8],
    header: BucketHeader,
    starts: Vec<usize>,
}

impl<'a> BucketView<'a> {
    /// `None` if the payload is not a well-formed bucket table.
    pub fn new(payload: &'a [u8]) -> Option<Self> {
        let size = table_size(payload);
        if size == 0 {
            return None;
        }
        let table = &payload[..size];
        let header = BucketHeader::read(table)?;
        let bucket_count = header.bucket_count as usize;
        if bucket_count == 0 || header.records_offset as usize != records_offset(bucket_count) {
            return None;
        }

        let starts = (0..=bucket_count)
            .map(|i| read_u32_le(table, BUCKET_HEADER_SIZE + 4 * i).map(|v| v as usize))
            .collect::<Option<Vec<_>>>()?;
        let ordered = starts.windows(2).all(|w| w[0] <= w[1]);
        if !ordered || starts[0] != header.records_offset as usize || starts[bucket_count] > size {
            return None;
        }

        Some(Self {
            table,
            header,
            starts,
        })
    }

    pub fn literal_count(&self) -> usize {
        self.header.literal_count as usize
    }

    pub fn bucket_count(&self) -> usize {
        self.header.bucket_count as usize
    }

    pub fn is_small(&self) -> bool {
        self.header.flags & BUCKET_SMALL != 0
    }

    pub fn is_wide(&self) -> bool {
        self.header.flags & BUCKET_WIDE != 0
    }

    /// Records of bucket `index`. Stops early at a malformed record.
    pub fn bucket(&self, index: usize) -> Records<'a> {
        Records {
            table: self.table,
            pos: self.starts[index],
            end: self.starts[index + 1],
        }
    }
}

/// One literal record.
#[derive(Clone, Copy, Debug)]
pub struct RecordView<'a> {
    header: RecordHeader,
    bytes: &'a [u8],
}

impl<'a> RecordView<'a> {
    pub fn id(&self) -> LiteralId {
        self.header.id
    }

    pub fn groups(&self) -> GroupMask {
        self.header.groups
    }

    pub fn nocase(&self) -> bool {
        self.header.flags & RECORD_NOCASE != 0
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// `(msk, cmp)` trimmed to the mask length.
    pub fn mask(&self) -> (&[u8], &[u8]) {
        let start = MAX_MASK_LEN - (self.header.mask_len as usize).min(MAX_MASK_LEN);
        (&self.header.msk[start..], &self.header.cmp[start..])
    }
}

/// Iterator over the records of one bucket.
#[derive(Clone, Debug)]
pub struct Records<'a> {
    table: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = RecordView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let record = self
            .table
            .get(self.pos..self.end)
            .and_then(RecordHeader::read)
            .and_then(|header| {
                let len = header.len as usize;
                let next = self.pos + record_size(len);
                if len == 0 || next > self.end {
                    return None;
                }
                let start = self.pos + RECORD_HEADER_SIZE;
                Some((header, start, next))
            });

        match record {
            Some((header, start, next)) => {
                self.pos = next;
                Some(RecordView {
                    header,
                    bytes: &self.table[start..start + header.len as usize],
                })
            }
            None => {
                self.pos = self.end;
                None
            }
        }
    }
}
