//! Assembled bytecode object.

use std::io;
use std::path::Path;

use super::aligned_vec::AlignedVec;
use super::constants::HEADER_REGION;
use super::header::{EngineTag, Header};
use super::invariants::ensure_tag;

/// Error loading an object from untrusted bytes.
#[derive(Debug, thiserror::Error)]
pub enum BytecodeError {
    #[error("object too small: {0} bytes (minimum {min})", min = HEADER_REGION + 1)]
    TooSmall(usize),
    #[error("unknown engine tag: {0:#04x}")]
    UnknownTag(u8),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A tagged, cache-line aligned literal matcher.
///
/// Layout: header (tag byte, zero padded to [`HEADER_REGION`]) followed by
/// the engine payload. The buffer starts on a 64-byte boundary, so the
/// payload does too. Immutable after creation.
#[derive(Clone, Debug)]
pub struct BytecodeObject {
    storage: AlignedVec,
}

impl BytecodeObject {
    /// Lay out a header for `tag` followed by a verbatim copy of `payload`.
    ///
    /// Size policy is the caller's concern; this only builds the layout.
    pub fn from_parts(tag: EngineTag, payload: &[u8]) -> Self {
        let mut storage = AlignedVec::zeroed(HEADER_REGION + payload.len());
        let bytes = storage.as_mut_slice();
        Header::new(tag).write_to(bytes);
        bytes[HEADER_REGION..].copy_from_slice(payload);
        Self { storage }
    }

    /// Load an object from raw bytes, checking the header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BytecodeError> {
        check_header(bytes)?;
        Ok(Self {
            storage: AlignedVec::copy_from_slice(bytes),
        })
    }

    /// Load an object from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BytecodeError> {
        let storage = AlignedVec::from_file(path)?;
        check_header(&storage)?;
        Ok(Self { storage })
    }

    pub fn tag(&self) -> EngineTag {
        ensure_tag(self.storage[0])
    }

    pub fn header(&self) -> Header {
        Header::new(self.tag())
    }

    /// Engine payload, starting at [`HEADER_REGION`].
    pub fn payload(&self) -> &[u8] {
        &self.storage[HEADER_REGION..]
    }

    /// The whole object, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Allocated size: header region plus payload.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Always false: an object holds at least its header region.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl PartialEq for BytecodeObject {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BytecodeObject {}

fn check_header(bytes: &[u8]) -> Result<(), BytecodeError> {
    if bytes.len() <= HEADER_REGION {
        return Err(BytecodeError::TooSmall(bytes.len()));
    }
    if Header::from_bytes(bytes).is_none() {
        return Err(BytecodeError::UnknownTag(bytes[0]));
    }
    Ok(())
}
