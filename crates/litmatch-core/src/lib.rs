#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the litmatch build layer.
//!
//! Two layers for literals:
//! - **Deserialization layer** (`RawLiteral`): 1:1 mapping to the JSON input
//! - **Validated layer** (`Literal`): immutable value with enforced invariants
//!
//! Plus the read-only inputs of every build: `LimitsConfig` and `TargetInfo`.

mod limits;
mod literal;
mod raw;
mod target;


pub use limits::LimitsConfig;
pub use literal::{
    GroupMask, Literal, LiteralError, LiteralId, LiteralMask, MAX_MASK_LEN, RESERVED_LITERAL_ID,
};
pub use raw::{RawLiteral, RawLiteralError, parse_literals};
pub use target::TargetInfo;
