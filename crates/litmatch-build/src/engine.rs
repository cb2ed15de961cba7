//! Engine builder boundary.
//!
//! Each engine family supplies a table builder. The build layer treats the
//! returned table as opaque bytes; only the family's size function (see
//! [`SizeTable`](litmatch_bytecode::SizeTable)) can read it back.

use litmatch_bytecode::EngineTag;
use litmatch_core::{LimitsConfig, Literal, TargetInfo};

/// Opaque engine table produced by one builder call.
///
/// Its length is the engine size. Consumed by [`assemble`](crate::assemble).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineBlob(Vec<u8>);

impl EngineBlob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Read-only inputs shared by every step of a build.
#[derive(Clone, Copy, Debug)]
pub struct BuildCtx<'a> {
    pub limits: &'a LimitsConfig,
    pub target: &'a TargetInfo,
}

impl<'a> BuildCtx<'a> {
    pub fn new(limits: &'a LimitsConfig, target: &'a TargetInfo) -> Self {
        Self { limits, target }
    }
}

/// Table builder of the single-literal family.
pub trait SingleLiteralEngine {
    /// Build a table for one unmasked literal.
    ///
    /// `None` means the literal does not suit this engine; it is not an error.
    fn build_table(&self, lit: &Literal) -> Option<EngineBlob>;
}

/// Table builder of the multi-literal family.
pub trait MultiLiteralEngine {
    /// Build a table for a non-empty literal set.
    ///
    /// `make_small` prefers table size over scan speed. `None` means the set
    /// cannot be represented by this engine; it is not an error.
    fn build_table(
        &self,
        lits: &[Literal],
        make_small: bool,
        target: &TargetInfo,
        limits: &LimitsConfig,
    ) -> Option<EngineBlob>;
}

/// One builder per engine family, dispatched by [`EngineTag`].
#[derive(Clone, Debug, Default)]
pub struct EngineSet<S, M> {
    pub single: S,
    pub multi: M,
}

impl<S, M> EngineSet<S, M>
where
    S: SingleLiteralEngine,
    M: MultiLiteralEngine,
{
    pub fn new(single: S, multi: M) -> Self {
        Self { single, multi }
    }

    /// Call the builder of family `tag`, and only that one.
    pub fn build_table(
        &self,
        tag: EngineTag,
        lits: &[Literal],
        make_small: bool,
        ctx: &BuildCtx<'_>,
    ) -> Option<EngineBlob> {
        match tag {
            EngineTag::Single => {
                let [lit] = lits else {
                    panic!("single-literal engine selected for {} literals", lits.len());
                };
                self.single.build_table(lit)
            }
            EngineTag::Multi => {
                self.multi
                    .build_table(lits, make_small, ctx.target, ctx.limits)
            }
        }
    }
}
