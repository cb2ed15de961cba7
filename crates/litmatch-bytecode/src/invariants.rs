//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::header::EngineTag;

/// Decode a tag this crate wrote itself.
///
/// Every object is built through [`BytecodeObject::from_parts`] or validated
/// by [`BytecodeObject::from_bytes`], so an unknown tag here means memory
/// was corrupted or a caller handed in a buffer that never was an object.
///
/// [`BytecodeObject::from_parts`]: crate::BytecodeObject::from_parts
/// [`BytecodeObject::from_bytes`]: crate::BytecodeObject::from_bytes
pub(crate) fn ensure_tag(byte: u8) -> EngineTag {
    EngineTag::from_u8(byte)
        .unwrap_or_else(|| panic!("bytecode: unknown engine tag {byte:#04x} in object header"))
}

pub(crate) fn ensure_header(bytes: &[u8], header_region: usize) {
    assert!(
        bytes.len() >= header_region,
        "bytecode: buffer of {} bytes is shorter than the {header_region}-byte header region",
        bytes.len()
    );
}
