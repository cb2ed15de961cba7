//! Literal set validation.

use litmatch_core::{LimitsConfig, Literal};

use crate::error::{InternalError, ResourceLimit, Result};

/// Check a literal set against `limits` before any engine work.
///
/// The aggregate byte budget is checked as it accumulates, so the error
/// names the first literal that crosses it and nothing after it is read.
pub fn validate_literals(lits: &[Literal], limits: &LimitsConfig) -> Result<()> {
    if lits.len() > limits.max_literal_count {
        return Err(ResourceLimit::TooManyLiterals {
            count: lits.len(),
            limit: limits.max_literal_count,
        }
        .into());
    }

    let mut total: u64 = 0;
    for (index, lit) in lits.iter().enumerate() {
        if lit.len() > limits.max_literal_len {
            return Err(ResourceLimit::LiteralTooLong {
                index,
                len: lit.len(),
                limit: limits.max_literal_len,
            }
            .into());
        }

        total += lit.len() as u64;
        if total > limits.max_matcher_chars {
            return Err(ResourceLimit::MatcherCharsExceeded {
                index,
                total,
                limit: limits.max_matcher_chars,
            }
            .into());
        }

        if lit.is_reserved_id() {
            return Err(InternalError::ReservedId { index }.into());
        }
    }

    Ok(())
}
