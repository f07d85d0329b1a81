//! Token rule definitions.
//!
//! A token rule ties a single-character mask symbol to a character class
//! plus the flags that control how the scanner consumes input for it.

use crate::error::{MaskError, MaskResult};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Character transform applied to input before a rule is tested.
///
/// The transformed character is also what gets emitted on a match, so a
/// transform like `to_ascii_uppercase` normalizes output case.
pub type CharTransform = Arc<dyn Fn(char) -> char + Send + Sync>;

/// A single token definition: character class source plus behavior flags.
///
/// Built with chainable constructors:
///
/// ```
/// use textmask::TokenRule;
///
/// let rule = TokenRule::new("[0-9]").optional();
/// assert!(rule.is_optional());
/// ```
#[derive(Clone)]
pub struct TokenRule {
    pattern: String,
    optional: bool,
    multiple: bool,
    repeated: bool,
    transform: Option<CharTransform>,
}

impl TokenRule {
    /// Creates a rule matching the given regex character class.
    ///
    /// The pattern is compiled when a [`Masker`](crate::Masker) is built;
    /// an invalid pattern fails construction with
    /// [`MaskError::TokenPattern`](crate::MaskError::TokenPattern).
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            optional: false,
            multiple: false,
            repeated: false,
            transform: None,
        }
    }

    /// Marks the token as skippable when input does not match it.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Lets the token consume a run of matching characters.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Repeats the pattern tail from this token once input outgrows it.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Attaches a character transform applied before matching.
    pub fn transform(mut self, f: impl Fn(char) -> char + Send + Sync + 'static) -> Self {
        self.transform = Some(Arc::new(f));
        self
    }

    /// Returns the regex source for this rule.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Compiles the rule, reporting the owning symbol on failure.
    pub(crate) fn compile(&self, symbol: char) -> MaskResult<CompiledRule> {
        let matcher = Regex::new(&self.pattern).map_err(|err| MaskError::TokenPattern {
            symbol,
            pattern: self.pattern.clone(),
            reason: err.to_string(),
        })?;

        Ok(CompiledRule {
            matcher,
            optional: self.optional,
            multiple: self.multiple,
            repeated: self.repeated,
            transform: self.transform.clone(),
        })
    }
}

impl fmt::Debug for TokenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRule")
            .field("pattern", &self.pattern)
            .field("optional", &self.optional)
            .field("multiple", &self.multiple)
            .field("repeated", &self.repeated)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// A token rule with its pattern compiled, ready for the scanner.
#[derive(Clone)]
pub(crate) struct CompiledRule {
    matcher: Regex,
    pub optional: bool,
    pub multiple: bool,
    pub repeated: bool,
    transform: Option<CharTransform>,
}

impl CompiledRule {
    /// Compiles a statically known pattern without flags.
    pub fn built_in(pattern: &str) -> Self {
        Self {
            matcher: Regex::new(pattern).expect("Valid built-in token pattern"),
            optional: false,
            multiple: false,
            repeated: false,
            transform: None,
        }
    }

    /// Tests one character against the rule's character class.
    pub fn matches(&self, candidate: char) -> bool {
        let mut buf = [0u8; 4];
        self.matcher.is_match(candidate.encode_utf8(&mut buf))
    }

    /// Applies the rule's transform, or returns the character unchanged.
    pub fn transform(&self, raw: char) -> char {
        match &self.transform {
            Some(f) => f(raw),
            None => raw,
        }
    }
}

impl fmt::Debug for CompiledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledRule")
            .field("matcher", &self.matcher.as_str())
            .field("optional", &self.optional)
            .field("multiple", &self.multiple)
            .field("repeated", &self.repeated)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
