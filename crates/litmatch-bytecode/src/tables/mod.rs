//! Reference engine table formats.
//!
//! Each engine family owns its payload layout. The only thing the object
//! layer relies on is the family's size function. Both reference formats
//! open with a little-endian `u32` holding the total table size, and keep
//! every variable-length part padded to [`TABLE_ALIGN`].

pub mod bucket;
pub mod needle;

#[cfg(test)]
mod tables_tests;

/// Padding granularity inside reference tables.
pub const TABLE_ALIGN: usize = 8;

/// Round up to the next multiple of [`TABLE_ALIGN`].
pub const fn pad_table(value: usize) -> usize {
    (value + TABLE_ALIGN - 1) & !(TABLE_ALIGN - 1)
}

#[inline]
pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let b = bytes.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

#[inline]
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let b = bytes.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

#[inline]
pub(crate) fn read_u64_le(bytes: &[u8], offset: usize) -> Option<u64> {
    let b = bytes.get(offset..offset + 8)?;
    let mut arr = [0u8; 8];
    arr.copy_from_slice(b);
    Some(u64::from_le_bytes(arr))
}

/// Declared table size, or 0 when it is missing, zero, smaller than
/// `min_size` or larger than the bytes available.
pub(crate) fn declared_size(payload: &[u8], min_size: usize) -> usize {
    match read_u32_le(payload, 0) {
        Some(size) if (size as usize) >= min_size && (size as usize) <= payload.len() => {
            size as usize
        }
        _ => 0,
    }
}
