//! JSON literal input.
//!
//! `RawLiteral` is a 1:1 mapping of one entry of a literal file. It carries no
//! invariants; [`RawLiteral::into_literal`] applies them.

use serde::Deserialize;

use crate::literal::{GroupMask, Literal, LiteralError, LiteralId};

/// Raw literal entry from a JSON literal file.
///
/// Content is given either as UTF-8 text (`s`) or as raw bytes (`bytes`).
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLiteral {
    pub id: LiteralId,
    #[serde(default)]
    pub s: Option<String>,
    #[serde(default)]
    pub bytes: Option<Vec<u8>>,
    #[serde(default)]
    pub nocase: bool,
    #[serde(default = "all_groups")]
    pub groups: GroupMask,
    #[serde(default)]
    pub msk: Vec<u8>,
    #[serde(default)]
    pub cmp: Vec<u8>,
}

fn all_groups() -> GroupMask {
    GroupMask::MAX
}

/// Error converting a raw entry into a [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RawLiteralError {
    #[error("literal {0}: exactly one of `s` or `bytes` is required")]
    Content(LiteralId),
    #[error(transparent)]
    Literal(#[from] LiteralError),
}

impl RawLiteral {
    pub fn into_literal(self) -> Result<Literal, RawLiteralError> {
        let bytes = match (self.s, self.bytes) {
            (Some(s), None) => s.into_bytes(),
            (None, Some(bytes)) => bytes,
            _ => return Err(RawLiteralError::Content(self.id)),
        };
        let lit = Literal::new(bytes, self.nocase, self.id, self.groups)?;
        Ok(lit.with_mask(self.msk, self.cmp)?)
    }
}

/// Parse a JSON array of literal entries.
pub fn parse_literals(json: &str) -> Result<Vec<RawLiteral>, serde_json::Error> {
    serde_json::from_str(json)
}
