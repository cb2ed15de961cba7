//! Hand-built reference tables for tests.

use crate::tables::bucket::{
    BUCKET_HEADER_SIZE, BucketHeader, RECORD_HEADER_SIZE, RecordHeader, record_size, records_offset,
};
use crate::tables::needle::{NEEDLE_HEADER_SIZE, NeedleHeader};
use crate::tables::pad_table;

pub fn needle_payload(id: u32, groups: u64, key: &[u8], flags: u8) -> Vec<u8> {
    let size = pad_table(NEEDLE_HEADER_SIZE + key.len());
    let mut bytes = vec![0u8; size];
    NeedleHeader {
        size: size as u32,
        id,
        groups,
        key_len: key.len() as u16,
        flags,
    }
    .write_to(&mut bytes);
    bytes[NEEDLE_HEADER_SIZE..NEEDLE_HEADER_SIZE + key.len()].copy_from_slice(key);
    bytes
}

/// One `(id, bytes)` list per bucket; no masks, all groups.
pub fn bucket_payload(buckets: &[&[(u32, &[u8])]], flags: u8) -> Vec<u8> {
    let start = records_offset(buckets.len());
    let records: usize = buckets
        .iter()
        .flat_map(|b| b.iter())
        .map(|(_, s)| record_size(s.len()))
        .sum();
    let size = start + records;
    let mut bytes = vec![0u8; size];

    let count: usize = buckets.iter().map(|b| b.len()).sum();
    BucketHeader {
        size: size as u32,
        literal_count: count as u32,
        bucket_count: buckets.len() as u16,
        flags,
        records_offset: start as u32,
    }
    .write_to(&mut bytes);

    let mut pos = start;
    for (i, bucket) in buckets.iter().enumerate() {
        let slot = BUCKET_HEADER_SIZE + 4 * i;
        bytes[slot..slot + 4].copy_from_slice(&(pos as u32).to_le_bytes());
        for &(id, s) in bucket.iter() {
            RecordHeader {
                id,
                len: s.len() as u16,
                flags: 0,
                mask_len: 0,
                groups: u64::MAX,
                msk: [0; 8],
                cmp: [0; 8],
            }
            .write_to(&mut bytes[pos..]);
            bytes[pos + RECORD_HEADER_SIZE..pos + RECORD_HEADER_SIZE + s.len()].copy_from_slice(s);
            pos += record_size(s.len());
        }
    }
    let slot = BUCKET_HEADER_SIZE + 4 * buckets.len();
    bytes[slot..slot + 4].copy_from_slice(&(pos as u32).to_le_bytes());
    bytes
}
