//! Object header.
//!
//! The header is a single tag byte. It occupies the first [`HEADER_REGION`]
//! bytes of an object; everything after the tag up to the payload is zero.
//!
//! [`HEADER_REGION`]: super::HEADER_REGION

/// Engine family that produced the payload.
///
/// Zero is not a valid tag, so a zeroed buffer never decodes as an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EngineTag {
    /// Specialized single-literal searcher.
    Single = 1,
    /// General multi-literal hashed/SIMD matcher.
    Multi = 2,
}

impl EngineTag {
    pub const ALL: [Self; 2] = [Self::Single, Self::Multi];

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Single),
            2 => Some(Self::Multi),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }
}

impl std::fmt::Display for EngineTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded object header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Header {
    pub tag: EngineTag,
}

impl Header {
    pub fn new(tag: EngineTag) -> Self {
        Self { tag }
    }

    /// Decode the header from the start of an object. `None` on unknown tag.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let tag = EngineTag::from_u8(*bytes.first()?)?;
        Some(Self { tag })
    }

    /// Encode the header into the start of an object buffer.
    pub fn write_to(&self, bytes: &mut [u8]) {
        bytes[0] = self.tag.as_u8();
    }
}
