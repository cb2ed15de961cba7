//! Reference table builders.
//!
//! Writers for the formats in [`litmatch_bytecode::tables`]. They lay out
//! literals deterministically and leave scan-time tuning to the runtime.

mod bucket;
mod needle;


pub use bucket::BucketBuilder;
pub use needle::NeedleBuilder;

use crate::engine::EngineSet;

/// Engine set backed by the reference builders.
pub type ReferenceEngines = EngineSet<NeedleBuilder, BucketBuilder>;

impl ReferenceEngines {
    pub fn reference() -> Self {
        EngineSet::new(NeedleBuilder, BucketBuilder)
    }
}

/// ASCII case fold applied to caseless keys.
fn fold_key(bytes: &[u8], nocase: bool) -> impl Iterator<Item = u8> + '_ {
    bytes
        .iter()
        .map(move |&b| if nocase { b.to_ascii_uppercase() } else { b })
}
