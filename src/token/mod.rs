//! Token definitions mapping mask symbols to matching rules.
//!
//! The built-in table recognizes `#` (digit), `@` (letter) and `*`
//! (alphanumeric). Custom sets extend or replace it per masker.

pub mod rule;
pub mod set;

pub use rule::{CharTransform, TokenRule};
pub use set::TokenSet;

pub(crate) use rule::CompiledRule;
pub(crate) use set::default_rules;
