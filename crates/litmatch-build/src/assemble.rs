//! Bytecode object assembly.

use litmatch_bytecode::{BytecodeObject, EngineTag};
use litmatch_core::LimitsConfig;

use crate::engine::EngineBlob;
use crate::error::{InternalError, ResourceLimit, Result};

/// Pack an engine table behind a header tagged `tag`.
///
/// The object is one cache-line aligned allocation: the header region
/// rounded up to a cache line, then the table bytes verbatim.
pub fn assemble(blob: EngineBlob, tag: EngineTag, limits: &LimitsConfig) -> Result<BytecodeObject> {
    let size = blob.size();
    if size == 0 {
        return Err(InternalError::EmptyTable(tag).into());
    }
    if size > limits.max_bytecode_size {
        return Err(ResourceLimit::BytecodeTooLarge {
            size,
            limit: limits.max_bytecode_size,
        }
        .into());
    }

    Ok(BytecodeObject::from_parts(tag, blob.as_bytes()))
}
