//! Import boundary guard.
//!
//! Limits are measured on the tokenized line count and on the character count
//! of the whole text in Unicode scalar values. Character overflow is always
//! rejected. Row overflow is rejected or truncated depending on the
//! [`OverflowPolicy`] chosen by the call site.

use tracing::warn;

use tabmap_model::{GuardLimits, OverflowPolicy};

use crate::error::GuardRejection;
use crate::tokenizer::split_lines;

/// Measured size of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSize {
    pub chars: usize,
    pub lines: usize,
}

impl TextSize {
    pub fn measure(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            lines: split_lines(text).len(),
        }
    }
}

/// How a text passed the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// Only the first `kept` lines may be used.
    Truncated { kept: usize, discarded: usize },
}

impl Admission {
    /// Number of lines dropped by truncation.
    pub fn discarded(self) -> usize {
        match self {
            Self::Accepted => 0,
            Self::Truncated { discarded, .. } => discarded,
        }
    }
}

/// Checks a size against the limits without any truncation.
pub fn check(size: TextSize, limits: GuardLimits) -> Result<(), GuardRejection> {
    if size.chars > limits.max_chars {
        return Err(GuardRejection::TooManyChars {
            count: size.chars,
            max: limits.max_chars,
        });
    }
    if size.lines > limits.max_rows {
        return Err(GuardRejection::TooManyRows {
            count: size.lines,
            max: limits.max_rows,
        });
    }
    Ok(())
}

/// Applies the guard with an overflow policy for the row limit.
pub fn admit(
    size: TextSize,
    limits: GuardLimits,
    policy: OverflowPolicy,
) -> Result<Admission, GuardRejection> {
    match check(size, limits) {
        Ok(()) => Ok(Admission::Accepted),
        Err(GuardRejection::TooManyRows { count, max }) if policy == OverflowPolicy::Truncate => {
            let discarded = count - max;
            warn!(
                lines = count,
                max_rows = max,
                discarded,
                "row limit exceeded, remaining lines ignored"
            );
            Ok(Admission::Truncated {
                kept: max,
                discarded,
            })
        }
        Err(rejection) => {
            warn!(%rejection, "input rejected");
            Err(rejection)
        }
    }
}
