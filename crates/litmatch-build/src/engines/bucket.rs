use litmatch_bytecode::tables::bucket::{
    BUCKET_HEADER_SIZE, BUCKET_SMALL, BUCKET_WIDE, BucketHeader, RECORD_HEADER_SIZE,
    RECORD_NOCASE, RecordHeader, record_size, records_offset,
};
use litmatch_core::{LimitsConfig, Literal, MAX_MASK_LEN, TargetInfo};
use tracing::debug;

use super::fold_key;
use crate::engine::{EngineBlob, MultiLiteralEngine};
use crate::flood::{SECONDARY_SIMD_MAX_LITERALS, SECONDARY_SIMD_WIDE_MAX_LITERALS};

/// Buckets used by the small-set SIMD layout.
const SIMD_BUCKETS: usize = 8;
/// Buckets used by the small-set SIMD layout on wide-SIMD targets.
const SIMD_WIDE_BUCKETS: usize = 16;
/// Buckets used by the general hashed layout.
const GENERAL_BUCKETS: usize = 32;
const GENERAL_SMALL_BUCKETS: usize = 16;

/// Builds bucket tables for the multi-literal family.
#[derive(Clone, Copy, Debug, Default)]
pub struct BucketBuilder;

impl MultiLiteralEngine for BucketBuilder {
    fn build_table(
        &self,
        lits: &[Literal],
        make_small: bool,
        target: &TargetInfo,
        limits: &LimitsConfig,
    ) -> Option<EngineBlob> {
        debug_assert!(!lits.is_empty());

        if let Some(lit) = lits.iter().find(|l| l.len() > u16::MAX as usize) {
            debug!(id = lit.id(), len = lit.len(), "literal too long for a bucket record");
            return None;
        }

        let (bucket_count, wide) = layout(lits.len(), make_small, target, limits);
        let start = records_offset(bucket_count);
        let records: usize = lits.iter().map(|l| record_size(l.len())).sum();
        let size = start + records;
        let (Ok(size32), Ok(count32)) = (u32::try_from(size), u32::try_from(lits.len())) else {
            debug!(size, "bucket table exceeds 32-bit offsets");
            return None;
        };

        let mut flags = 0;
        if make_small {
            flags |= BUCKET_SMALL;
        }
        if wide {
            flags |= BUCKET_WIDE;
        }

        let mut bytes = vec![0u8; size];
        BucketHeader {
            size: size32,
            literal_count: count32,
            bucket_count: bucket_count as u16,
            flags,
            records_offset: start as u32,
        }
        .write_to(&mut bytes);

        // Rank order; the caller's slice stays as given.
        let mut order: Vec<&Literal> = lits.iter().collect();
        order.sort_by(|a, b| (a.len(), a.bytes(), a.id()).cmp(&(b.len(), b.bytes(), b.id())));

        let mut pos = start;
        let mut next_bucket = 0;
        for (rank, lit) in order.iter().enumerate() {
            let bucket = rank * bucket_count / order.len();
            while next_bucket <= bucket {
                write_start(&mut bytes, next_bucket, pos);
                next_bucket += 1;
            }
            write_record(&mut bytes[pos..pos + record_size(lit.len())], lit);
            pos += record_size(lit.len());
        }
        while next_bucket <= bucket_count {
            write_start(&mut bytes, next_bucket, pos);
            next_bucket += 1;
        }

        debug!(literals = lits.len(), bucket_count, size, "bucket table built");
        Some(EngineBlob::new(bytes))
    }
}

/// Bucket count and whether the wide layout is used.
fn layout(
    count: usize,
    make_small: bool,
    target: &TargetInfo,
    limits: &LimitsConfig,
) -> (usize, bool) {
    if limits.allow_secondary_simd {
        if count <= SECONDARY_SIMD_MAX_LITERALS {
            return (SIMD_BUCKETS, false);
        }
        if target.has_wide_simd() && count <= SECONDARY_SIMD_WIDE_MAX_LITERALS {
            return (SIMD_WIDE_BUCKETS, true);
        }
    }
    if make_small {
        (GENERAL_SMALL_BUCKETS, false)
    } else {
        (GENERAL_BUCKETS, false)
    }
}

fn write_start(bytes: &mut [u8], bucket: usize, pos: usize) {
    let slot = BUCKET_HEADER_SIZE + 4 * bucket;
    bytes[slot..slot + 4].copy_from_slice(&(pos as u32).to_le_bytes());
}

fn write_record(dst: &mut [u8], lit: &Literal) {
    let mut msk = [0u8; MAX_MASK_LEN];
    let mut cmp = [0u8; MAX_MASK_LEN];
    let mask_len = match lit.mask() {
        Some(mask) => {
            let from = MAX_MASK_LEN - mask.len();
            msk[from..].copy_from_slice(mask.msk());
            cmp[from..].copy_from_slice(mask.cmp());
            mask.len()
        }
        None => 0,
    };

    RecordHeader {
        id: lit.id(),
        len: lit.len() as u16,
        flags: if lit.nocase() { RECORD_NOCASE } else { 0 },
        mask_len: mask_len as u8,
        groups: lit.groups(),
        msk,
        cmp,
    }
    .write_to(dst);

    let body = &mut dst[RECORD_HEADER_SIZE..RECORD_HEADER_SIZE + lit.len()];
    for (d, b) in body.iter_mut().zip(fold_key(lit.bytes(), lit.nocase())) {
        *d = b;
    }
}
