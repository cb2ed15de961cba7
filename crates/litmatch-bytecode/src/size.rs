//! Object size recovery.
//!
//! An object does not record its payload size; the engine family that wrote
//! the payload knows how to read it back. [`SizeTable`] routes each tag to
//! that family's size function.

use super::constants::HEADER_REGION;
use super::header::EngineTag;
use super::invariants::{ensure_header, ensure_tag};
use super::object::BytecodeObject;
use super::tables::{bucket, needle};

/// Payload size query of one engine family. Returns 0 for an invalid payload.
pub type TableSizeFn = fn(&[u8]) -> usize;

/// Per-family size functions, keyed by [`EngineTag`].
#[derive(Clone, Copy, Debug)]
pub struct SizeTable {
    pub single: TableSizeFn,
    pub multi: TableSizeFn,
}

impl SizeTable {
    /// Size functions of the reference table formats.
    pub const REFERENCE: Self = Self {
        single: needle::table_size,
        multi: bucket::table_size,
    };

    pub fn size_fn(&self, tag: EngineTag) -> TableSizeFn {
        match tag {
            EngineTag::Single => self.single,
            EngineTag::Multi => self.multi,
        }
    }
}

impl Default for SizeTable {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Total size of an object: header region plus engine payload.
///
/// Returns 0 when the engine reports 0, i.e. the payload is not valid.
pub fn bytecode_size(object: &BytecodeObject, sizes: &SizeTable) -> usize {
    total_size(object.tag(), object.payload(), sizes)
}

/// [`bytecode_size`] over a raw object buffer.
///
/// # Panics
///
/// If the buffer is shorter than the header region or carries an unknown
/// tag. Objects from this crate never do.
pub fn bytecode_size_raw(bytes: &[u8], sizes: &SizeTable) -> usize {
    ensure_header(bytes, HEADER_REGION);
    let tag = ensure_tag(bytes[0]);
    total_size(tag, &bytes[HEADER_REGION..], sizes)
}

fn total_size(tag: EngineTag, payload: &[u8], sizes: &SizeTable) -> usize {
    match (sizes.size_fn(tag))(payload) {
        0 => 0,
        engine_size => HEADER_REGION + engine_size,
    }
}
