//! Literal constructors and stub engines for tests.

use std::cell::Cell;

use litmatch_core::{LimitsConfig, Literal, TargetInfo};

use crate::engine::{EngineBlob, MultiLiteralEngine, SingleLiteralEngine};

pub fn lit(s: &str, id: u32) -> Literal {
    Literal::new(s, false, id, 1).unwrap()
}

pub fn masked(s: &str, id: u32) -> Literal {
    lit(s, id).with_mask([0xffu8], [s.as_bytes()[s.len() - 1]]).unwrap()
}

pub fn lits(strs: &[&str]) -> Vec<Literal> {
    strs.iter().enumerate().map(|(i, s)| lit(s, i as u32)).collect()
}

/// Engine that returns a table of fixed size and counts its calls.
#[derive(Default)]
pub struct Stub {
    pub size: usize,
    pub decline: bool,
    pub calls: Cell<usize>,
}

impl Stub {
    pub fn sized(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::default()
        }
    }

    fn table(&self) -> Option<EngineBlob> {
        self.calls.set(self.calls.get() + 1);
        (!self.decline).then(|| EngineBlob::new(vec![0x5a; self.size]))
    }
}

impl SingleLiteralEngine for Stub {
    fn build_table(&self, _lit: &Literal) -> Option<EngineBlob> {
        self.table()
    }
}

impl MultiLiteralEngine for Stub {
    fn build_table(
        &self,
        _lits: &[Literal],
        _make_small: bool,
        _target: &TargetInfo,
        _limits: &LimitsConfig,
    ) -> Option<EngineBlob> {
        self.table()
    }
}
