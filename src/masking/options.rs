//! Masker configuration.

use super::number::NumberOptions;
use crate::token::TokenSet;
use std::fmt;
use std::sync::Arc;

/// What to mask against: one pattern, ranked candidates, or a function
/// choosing a pattern per value.
#[derive(Clone)]
pub enum MaskSpec {
    /// A single pattern string.
    Pattern(String),
    /// Candidate patterns; the best fit is chosen per value.
    Sequence(Vec<String>),
    /// Selector invoked with the raw value.
    Dynamic(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl fmt::Debug for MaskSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Sequence(patterns) => f.debug_tuple("Sequence").field(patterns).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Configuration for a [`Masker`](crate::Masker).
///
/// All fields are public; the constructors cover the common shapes:
///
/// ```
/// use textmask::MaskOptions;
///
/// let options = MaskOptions::pattern("#-#").eager();
/// assert!(options.eager);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaskOptions {
    /// Mask to apply; `None` passes values through untouched.
    pub mask: Option<MaskSpec>,
    /// Custom tokens, merged with or replacing the built-ins.
    pub tokens: Option<TokenSet>,
    /// Replace the built-in tokens instead of merging on top of them.
    pub tokens_replace: bool,
    /// Insert upcoming literals before their input arrives.
    pub eager: bool,
    /// Scan from the end of the value toward the start.
    pub reversed: bool,
    /// Number mode; overrides token scanning when present.
    pub number: Option<NumberOptions>,
}

impl MaskOptions {
    /// Options for a single pattern string.
    pub fn pattern(mask: impl Into<String>) -> Self {
        Self {
            mask: Some(MaskSpec::Pattern(mask.into())),
            ..Self::default()
        }
    }

    /// Options for a set of candidate patterns.
    pub fn sequence<I, S>(masks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mask: Some(MaskSpec::Sequence(
                masks.into_iter().map(Into::into).collect(),
            )),
            ..Self::default()
        }
    }

    /// Options with a per-value pattern selector.
    pub fn dynamic(selector: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            mask: Some(MaskSpec::Dynamic(Arc::new(selector))),
            ..Self::default()
        }
    }

    /// Options for number mode.
    pub fn number(number: NumberOptions) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    /// Supplies custom tokens.
    pub fn with_tokens(mut self, tokens: TokenSet) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Makes custom tokens replace the built-ins instead of merging.
    pub fn replace_tokens(mut self) -> Self {
        self.tokens_replace = true;
        self
    }

    /// Enables eager literal insertion.
    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    /// Enables reversed scanning.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pass_through() {
        let options = MaskOptions::default();
        assert!(options.mask.is_none());
        assert!(options.number.is_none());
        assert!(!options.eager);
    }

    #[test]
    fn test_pattern_constructor() {
        let options = MaskOptions::pattern("#-#");
        assert!(matches!(options.mask, Some(MaskSpec::Pattern(ref p)) if p == "#-#"));
    }

    #[test]
    fn test_sequence_constructor() {
        let options = MaskOptions::sequence(["#-#", "#-#-#"]);
        assert!(matches!(options.mask, Some(MaskSpec::Sequence(ref v)) if v.len() == 2));
    }

    #[test]
    fn test_chained_flags() {
        let options = MaskOptions::pattern("#").eager().reversed();
        assert!(options.eager);
        assert!(options.reversed);
    }

    #[test]
    fn test_debug_for_dynamic_spec() {
        let spec = MaskSpec::Dynamic(Arc::new(|_: &str| String::new()));
        assert_eq!(format!("{:?}", spec), "Dynamic(..)");
    }
}
