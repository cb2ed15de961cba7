//! Literal value objects.

/// Literal identifier reported on match.
pub type LiteralId = u32;

/// Bitmask of logical pattern groups a literal belongs to.
pub type GroupMask = u64;

/// Identifier reserved for sentinel use inside the literal matchers.
///
/// Ingestion may carry it through; the build layer rejects it.
pub const RESERVED_LITERAL_ID: LiteralId = LiteralId::MAX;

/// Maximum length of a supplementary mask, in bytes.
pub const MAX_MASK_LEN: usize = 8;

/// Literal construction error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("literal {id}: empty string")]
    Empty { id: LiteralId },
    #[error("literal {id}: group mask must be non-zero")]
    NoGroups { id: LiteralId },
    #[error("literal {id}: msk and cmp lengths differ ({msk} vs {cmp})")]
    MaskLengthMismatch { id: LiteralId, msk: usize, cmp: usize },
    #[error("literal {id}: mask of {len} bytes exceeds maximum of {MAX_MASK_LEN}")]
    MaskTooLong { id: LiteralId, len: usize },
    #[error("literal {id}: cmp byte {index} has bits outside msk")]
    CmpOutsideMask { id: LiteralId, index: usize },
}

/// Supplementary byte mask, aligned to the end of the literal.
///
/// A position `i` of the mask constrains the input byte `b` at the same
/// offset from the literal's end: `b & msk[i] == cmp[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralMask {
    msk: Vec<u8>,
    cmp: Vec<u8>,
}

impl LiteralMask {
    pub fn msk(&self) -> &[u8] {
        &self.msk
    }

    pub fn cmp(&self) -> &[u8] {
        &self.cmp
    }

    pub fn len(&self) -> usize {
        self.msk.len()
    }

    /// Always false: empty masks are normalized away by [`Literal::with_mask`].
    pub fn is_empty(&self) -> bool {
        self.msk.is_empty()
    }
}

/// A candidate literal string.
///
/// Immutable once built. Invariants: the string is non-empty and the group
/// mask is non-zero. The identifier is not checked here (see
/// [`RESERVED_LITERAL_ID`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    bytes: Vec<u8>,
    id: LiteralId,
    nocase: bool,
    groups: GroupMask,
    mask: Option<LiteralMask>,
}

impl Literal {
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        nocase: bool,
        id: LiteralId,
        groups: GroupMask,
    ) -> Result<Self, LiteralError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(LiteralError::Empty { id });
        }
        if groups == 0 {
            return Err(LiteralError::NoGroups { id });
        }
        Ok(Self {
            bytes,
            id,
            nocase,
            groups,
            mask: None,
        })
    }

    /// Attach a supplementary mask. Empty `msk`/`cmp` leave the literal unmasked.
    pub fn with_mask(
        mut self,
        msk: impl Into<Vec<u8>>,
        cmp: impl Into<Vec<u8>>,
    ) -> Result<Self, LiteralError> {
        let (msk, cmp) = (msk.into(), cmp.into());
        let id = self.id;

        if msk.len() != cmp.len() {
            return Err(LiteralError::MaskLengthMismatch {
                id,
                msk: msk.len(),
                cmp: cmp.len(),
            });
        }
        if msk.len() > MAX_MASK_LEN {
            return Err(LiteralError::MaskTooLong { id, len: msk.len() });
        }
        if let Some(index) = msk.iter().zip(&cmp).position(|(&m, &c)| c & !m != 0) {
            return Err(LiteralError::CmpOutsideMask { id, index });
        }

        self.mask = (!msk.is_empty()).then_some(LiteralMask { msk, cmp });
        Ok(self)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes (always non-zero).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn id(&self) -> LiteralId {
        self.id
    }

    pub fn nocase(&self) -> bool {
        self.nocase
    }

    pub fn groups(&self) -> GroupMask {
        self.groups
    }

    pub fn mask(&self) -> Option<&LiteralMask> {
        self.mask.as_ref()
    }

    pub fn is_reserved_id(&self) -> bool {
        self.id == RESERVED_LITERAL_ID
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:016x} \"", self.id, self.groups)?;
        for &b in &self.bytes {
            write!(f, "{}", std::ascii::escape_default(b))?;
        }
        f.write_str("\"")?;
        if self.nocase {
            f.write_str(" (nc)")?;
        }
        if let Some(mask) = &self.mask {
            write!(f, " (msk {})", mask.len())?;
        }
        Ok(())
    }
}
