//! Flood-proneness heuristic.
//!
//! The numbers here are conservative estimates tied to the internals of the
//! engine families. When an engine changes, revisit them. Over-triggering
//! flood mitigation is acceptable; under-triggering is not.

use litmatch_core::{LimitsConfig, TargetInfo};
use tracing::debug;

/// Largest literal set the small-set SIMD engine takes.
pub const SECONDARY_SIMD_MAX_LITERALS: usize = 48;

/// Largest literal set the small-set SIMD engine takes with wide SIMD.
pub const SECONDARY_SIMD_WIDE_MAX_LITERALS: usize = 96;

/// Tolerated repeated-byte run for the small-set SIMD engine.
pub const SECONDARY_SIMD_FLOOD_LEN: usize = 3;

/// Tolerated repeated-byte run for the general engine.
// Raising this (9 was tried) hurts some general-engine layouts on floods.
pub const FALLBACK_FLOOD_LEN: usize = 3;

/// Repeated-byte run length below which flood mitigation is not needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloodBound {
    /// No run length stresses the engine.
    Unbounded,
    /// Runs shorter than this many bytes are harmless.
    Bytes(usize),
}

impl FloodBound {
    /// The bound as a plain number; `Unbounded` is `usize::MAX`.
    pub fn as_usize(self) -> usize {
        match self {
            Self::Unbounded => usize::MAX,
            Self::Bytes(n) => n,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl std::fmt::Display for FloodBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Bytes(n) => write!(f, "{n}"),
        }
    }
}

/// Conservative flood bound for a matcher over `num_literals` literals.
pub fn flood_prone_suffix_len(
    num_literals: usize,
    limits: &LimitsConfig,
    target: &TargetInfo,
) -> FloodBound {
    if limits.allow_single_literal && num_literals <= 1 {
        debug!(num_literals, "single-literal engine: no flood bound");
        return FloodBound::Unbounded;
    }

    if limits.allow_secondary_simd {
        if num_literals <= SECONDARY_SIMD_MAX_LITERALS {
            debug!(num_literals, "small-set SIMD engine");
            return FloodBound::Bytes(SECONDARY_SIMD_FLOOD_LEN);
        }
        if target.has_wide_simd() && num_literals <= SECONDARY_SIMD_WIDE_MAX_LITERALS {
            debug!(num_literals, "wide small-set SIMD engine");
            return FloodBound::Bytes(SECONDARY_SIMD_FLOOD_LEN);
        }
    }

    debug!(num_literals, "general engine");
    FloodBound::Bytes(FALLBACK_FLOOD_LEN)
}
