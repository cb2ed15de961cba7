#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Literal matcher build layer.
//!
//! Turns a validated literal set into a tagged bytecode object:
//! - `validate` - resource limits and reserved identifiers
//! - `select` - single-literal vs. multi-literal engine family
//! - `engine` - builder traits and the per-family dispatch
//! - `engines` - reference table builders
//! - `assemble` - header + payload packing
//! - `flood` - flood-proneness heuristic for downstream mitigation

mod assemble;
mod build;
mod engine;
pub mod engines;
mod error;
mod flood;
mod select;
mod validate;

#[cfg(test)]
pub mod test_utils;

pub use assemble::assemble;
pub use build::build;
pub use engine::{BuildCtx, EngineBlob, EngineSet, MultiLiteralEngine, SingleLiteralEngine};
pub use error::{BuildError, InternalError, ResourceLimit, Result};
pub use flood::{
    FALLBACK_FLOOD_LEN, FloodBound, SECONDARY_SIMD_FLOOD_LEN, SECONDARY_SIMD_MAX_LITERALS,
    SECONDARY_SIMD_WIDE_MAX_LITERALS, flood_prone_suffix_len,
};
pub use select::select_engine;
pub use validate::validate_literals;

pub use litmatch_bytecode::{BytecodeObject, EngineTag, SizeTable, bytecode_size};
pub use litmatch_core::{LimitsConfig, Literal, TargetInfo};
