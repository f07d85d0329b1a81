//! Error types for the masking library.
//!
//! All failures surface at construction time: a masker built from valid
//! options never errors while processing values.

use std::fmt;

/// Result type alias for masking operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Error type for mask configuration problems.
///
/// Runtime inputs never produce errors; empty or non-matching values
/// degrade to empty output instead.
#[derive(Debug)]
pub enum MaskError {
    /// A custom token carries a pattern that does not compile as a regex
    TokenPattern {
        symbol: char,
        pattern: String,
        reason: String,
    },

    /// A compact token definition entry is malformed
    TokenSyntax { entry: String, reason: String },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenPattern {
                symbol,
                pattern,
                reason,
            } => {
                write!(
                    f,
                    "Invalid pattern '{}' for token '{}': {}",
                    pattern, symbol, reason
                )
            }
            Self::TokenSyntax { entry, reason } => {
                write!(f, "Invalid token entry '{}': {}", entry, reason)
            }
        }
    }
}

impl std::error::Error for MaskError {}
