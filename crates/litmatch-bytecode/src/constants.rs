//! Bytecode layout constants.

use super::header::Header;

/// Cache line size. The header region is rounded up to it and object
/// buffers start on it.
pub const CACHE_LINE: usize = 64;

/// Unrounded header size in bytes.
pub const HEADER_SIZE: usize = std::mem::size_of::<Header>();

/// Offset of the engine payload within an object.
pub const HEADER_REGION: usize = round_up_cache_line(HEADER_SIZE);

/// Round up to the next multiple of [`CACHE_LINE`].
pub const fn round_up_cache_line(value: usize) -> usize {
    (value + CACHE_LINE - 1) & !(CACHE_LINE - 1)
}

const _: () = assert!(HEADER_REGION == CACHE_LINE);
