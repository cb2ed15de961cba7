#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Bytecode object format for litmatch literal matchers.
//!
//! This crate contains:
//! - The object layout (engine tag header, cache-line rounded, then payload)
//! - 64-byte aligned storage for objects
//! - Per-family size dispatch (`SizeTable`, `bytecode_size`)
//! - Reference engine table formats and their read-side views
//! - A human-readable dump for debugging

mod aligned_vec;
mod constants;
mod dump;
mod header;
mod invariants;
mod object;
mod size;
pub mod tables;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod size_tests;
#[cfg(test)]
mod test_utils;

pub use aligned_vec::{ALIGN, AlignedVec};
pub use constants::{CACHE_LINE, HEADER_REGION, HEADER_SIZE, round_up_cache_line};
pub use dump::dump;
pub use header::{EngineTag, Header};
pub use object::{BytecodeError, BytecodeObject};
pub use size::{SizeTable, TableSizeFn, bytecode_size, bytecode_size_raw};
