//! Build errors.

use litmatch_bytecode::EngineTag;

/// A configured ceiling was exceeded. Never retried or truncated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceLimit {
    #[error("{count} literals exceed the limit of {limit}")]
    TooManyLiterals { count: usize, limit: usize },

    #[error("literal #{index} is {len} bytes, limit is {limit}")]
    LiteralTooLong {
        index: usize,
        len: usize,
        limit: usize,
    },

    #[error("literal #{index} brings the total to {total} bytes, limit is {limit}")]
    MatcherCharsExceeded { index: usize, total: u64, limit: u64 },

    #[error("engine table of {size} bytes exceeds the limit of {limit}")]
    BytecodeTooLarge { size: usize, limit: usize },
}

/// A caller or a lower layer broke the build contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    #[error("literal #{index} uses the reserved identifier")]
    ReservedId { index: usize },

    #[error("{0} engine produced an empty table")]
    EmptyTable(EngineTag),
}

/// Errors that abort a literal matcher build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(#[from] ResourceLimit),

    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
