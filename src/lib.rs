//! Input-masking engine with token patterns and number formatting.
//!
//! This library turns raw text into a display value conforming to a
//! mask pattern, recovers the significant characters back out of it,
//! and reports when a value fills its pattern. Patterns mix literal
//! characters with token symbols (`#` digit, `@` letter, `*`
//! alphanumeric by default); custom tokens, reversed scanning, eager
//! literal insertion and locale-aware number formatting cover the rest.
//!
//! # Features
//!
//! - **Three views**: `masked`, `unmasked` and `completed` over one scan
//! - **Token flags**: `optional`, `multiple` and `repeated` consumption
//! - **Candidate masks**: pick the best-fitting pattern per value
//! - **Reversed mode**: right-anchored masks such as currency grouping
//! - **Number mode**: grouping and decimal separators for common locales
//!
//! # Architecture
//!
//! - [`token`]: token symbols, rules and the compact definition syntax
//! - [`masking`]: the scanning engine, mask selection and number mode
//! - [`error`]: configuration errors
//!
//! # Quick Start
//!
//! ```
//! use textmask::{Masker, MaskOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let masker = Masker::new(MaskOptions::pattern("(###) ###-####"))?;
//!
//! assert_eq!(masker.masked("5552345678"), "(555) 234-5678");
//! assert_eq!(masker.unmasked("(555) 234-5678"), "5552345678");
//! assert!(masker.completed("5552345678"));
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! ## Custom Tokens
//!
//! ```
//! use textmask::{Masker, MaskOptions, TokenSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = TokenSet::parse("Z:[0-9]:optional")?;
//! let masker = Masker::new(MaskOptions::pattern("#Z-#").with_tokens(tokens))?;
//!
//! assert_eq!(masker.masked("123"), "12-3");
//! assert_eq!(masker.masked("1a2"), "1-2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Number Mode
//!
//! ```
//! use textmask::{Masker, MaskOptions, NumberOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let masker = Masker::new(MaskOptions::number(
//!     NumberOptions::new().with_locale("de").with_fraction(2),
//! ))?;
//!
//! assert_eq!(masker.masked("1234,5"), "1.234,5");
//! assert_eq!(masker.unmasked("1.234,5"), "1234.5");
//! # Ok(())
//! # }
//! ```

// Public API
pub mod error;
pub mod masking;
pub mod token;

// Re-exports for convenient access
pub use error::{MaskError, MaskResult};
pub use masking::{MaskOptions, MaskSpec, Masker, NumberOptions};
pub use token::{CharTransform, TokenRule, TokenSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masker_creation() {
        let _masker = Masker::new(MaskOptions::pattern("#-#")).unwrap();
    }

    #[test]
    fn test_basic_views() {
        let masker = Masker::new(MaskOptions::pattern("##.##")).unwrap();
        assert_eq!(masker.masked("2026"), "20.26");
        assert_eq!(masker.unmasked("20.26"), "2026");
        assert!(masker.completed("2026"));
    }

    #[test]
    fn test_invalid_token_fails_construction() {
        let tokens = TokenSet::new().define('X', TokenRule::new("[unclosed"));
        let result = Masker::new(MaskOptions::pattern("X").with_tokens(tokens));
        assert!(result.is_err());
    }
}
