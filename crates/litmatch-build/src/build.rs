//! Build entry point.

use litmatch_bytecode::BytecodeObject;
use litmatch_core::Literal;
use tracing::{debug, instrument, trace};

use crate::assemble::assemble;
use crate::engine::{BuildCtx, EngineSet, MultiLiteralEngine, SingleLiteralEngine};
use crate::error::Result;
use crate::select::select_engine;
use crate::validate::validate_literals;

/// Build a literal matcher.
///
/// Returns `Ok(None)` when no matcher was built: the set is empty, or the
/// selected engine declined it. Callers may retry with other settings (for
/// example with the single-literal engine disabled) or treat it as a
/// matcher that never fires. Limit and invariant violations are errors and
/// never leave a partial object behind.
#[instrument(skip_all, fields(literals = lits.len(), make_small = make_small))]
pub fn build<S, M>(
    lits: &[Literal],
    make_small: bool,
    ctx: &BuildCtx<'_>,
    engines: &EngineSet<S, M>,
) -> Result<Option<BytecodeObject>>
where
    S: SingleLiteralEngine,
    M: MultiLiteralEngine,
{
    if lits.is_empty() {
        debug!("empty literal set, no matcher");
        return Ok(None);
    }

    for lit in lits {
        trace!(%lit, "literal");
    }

    validate_literals(lits, ctx.limits)?;
    debug_assert!(lits.iter().all(|l| l.groups() != 0));

    let tag = select_engine(lits, ctx.limits);
    debug!(%tag, "building literal table");

    let Some(blob) = engines.build_table(tag, lits, make_small, ctx) else {
        debug!(%tag, "engine declined the literal set");
        return Ok(None);
    };

    let object = assemble(blob, tag, ctx.limits)?;
    debug!(%tag, size = object.len(), "literal matcher built");
    Ok(Some(object))
}
