//! Engine family selection.

use litmatch_bytecode::EngineTag;
use litmatch_core::{LimitsConfig, Literal};
use tracing::debug;

/// Pick the engine family for a literal set.
///
/// The single-literal engine handles exactly one literal without a
/// supplementary mask, and only when enabled. Everything else goes to the
/// multi-literal engine.
pub fn select_engine(lits: &[Literal], limits: &LimitsConfig) -> EngineTag {
    if !limits.allow_single_literal {
        return EngineTag::Multi;
    }

    let [lit] = lits else {
        debug!(count = lits.len(), "too many literals for the single-literal engine");
        return EngineTag::Multi;
    };

    if lit.mask().is_some() {
        debug!(id = lit.id(), "single-literal engine can't handle supplementary masks");
        return EngineTag::Multi;
    }

    EngineTag::Single
}
