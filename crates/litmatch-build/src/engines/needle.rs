use litmatch_bytecode::tables::needle::{NEEDLE_HEADER_SIZE, NEEDLE_NOCASE, NeedleHeader};
use litmatch_bytecode::tables::pad_table;
use litmatch_core::Literal;
use tracing::debug;

use super::fold_key;
use crate::engine::{EngineBlob, SingleLiteralEngine};

/// Builds needle tables for the single-literal family.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeedleBuilder;

impl SingleLiteralEngine for NeedleBuilder {
    fn build_table(&self, lit: &Literal) -> Option<EngineBlob> {
        debug_assert!(lit.mask().is_none(), "needle tables carry no masks");

        let Ok(key_len) = u16::try_from(lit.len()) else {
            debug!(id = lit.id(), len = lit.len(), "key too long for a needle table");
            return None;
        };
        let size = pad_table(NEEDLE_HEADER_SIZE + lit.len());

        let mut bytes = vec![0u8; size];
        NeedleHeader {
            size: size as u32,
            id: lit.id(),
            groups: lit.groups(),
            key_len,
            flags: if lit.nocase() { NEEDLE_NOCASE } else { 0 },
        }
        .write_to(&mut bytes);

        let key = &mut bytes[NEEDLE_HEADER_SIZE..NEEDLE_HEADER_SIZE + lit.len()];
        for (dst, b) in key.iter_mut().zip(fold_key(lit.bytes(), lit.nocase())) {
            *dst = b;
        }

        Some(EngineBlob::new(bytes))
    }
}
