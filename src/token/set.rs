//! Token collections and the compact definition syntax.
//!
//! A [`TokenSet`] maps mask symbols to rules. Sets either merge with or
//! replace the built-in table (`#` digits, `@` letters, `*` alphanumeric)
//! when a masker is built.

use super::rule::{CompiledRule, TokenRule};
use crate::error::{MaskError, MaskResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The built-in token table, compiled once.
pub(crate) fn default_rules() -> &'static HashMap<char, CompiledRule> {
    static DEFAULTS: Lazy<HashMap<char, CompiledRule>> = Lazy::new(|| {
        let mut rules = HashMap::new();
        rules.insert('#', CompiledRule::built_in("[0-9]"));
        rules.insert('@', CompiledRule::built_in("[a-zA-Z]"));
        rules.insert('*', CompiledRule::built_in("[a-zA-Z0-9]"));
        rules
    });
    &DEFAULTS
}

/// A collection of custom token definitions.
///
/// ```
/// use textmask::{TokenRule, TokenSet};
///
/// let tokens = TokenSet::new().define('X', TokenRule::new("[0-9]").optional());
/// assert_eq!(tokens.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    rules: HashMap<char, TokenRule>,
}

impl TokenSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for the given symbol, replacing any previous one.
    pub fn define(mut self, symbol: char, rule: TokenRule) -> Self {
        self.rules.insert(symbol, rule);
        self
    }

    /// Parses the compact definition syntax: `SYMBOL:PATTERN[:FLAG]`
    /// entries joined by `|`, where `FLAG` is one of `optional`,
    /// `multiple` or `repeated`.
    ///
    /// ```
    /// use textmask::TokenSet;
    ///
    /// let tokens = TokenSet::parse(r"Z:[0-9]:optional|W:[a-z]").unwrap();
    /// assert_eq!(tokens.len(), 2);
    /// ```
    pub fn parse(spec: &str) -> MaskResult<Self> {
        let mut set = Self::new();
        for entry in spec.split('|') {
            let parts: Vec<&str> = entry.split(':').collect();
            let syntax_error = |reason: &str| MaskError::TokenSyntax {
                entry: entry.to_string(),
                reason: reason.to_string(),
            };

            if parts.len() < 2 || parts.len() > 3 {
                return Err(syntax_error("expected SYMBOL:PATTERN[:FLAG]"));
            }

            let mut symbols = parts[0].chars();
            let symbol = match (symbols.next(), symbols.next()) {
                (Some(symbol), None) => symbol,
                _ => return Err(syntax_error("symbol must be a single character")),
            };

            if parts[1].is_empty() {
                return Err(syntax_error("pattern must not be empty"));
            }

            let mut rule = TokenRule::new(parts[1]);
            if let Some(&flag) = parts.get(2) {
                rule = match flag {
                    "optional" => rule.optional(),
                    "multiple" => rule.multiple(),
                    "repeated" => rule.repeated(),
                    _ => {
                        return Err(syntax_error(
                            "flag must be 'optional', 'multiple' or 'repeated'",
                        ))
                    }
                };
            }

            set.rules.insert(symbol, rule);
        }
        Ok(set)
    }

    /// Returns the rule defined for a symbol, if any.
    pub fn get(&self, symbol: char) -> Option<&TokenRule> {
        self.rules.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compiles every rule, failing on the first invalid pattern.
    pub(crate) fn compile(&self) -> MaskResult<HashMap<char, CompiledRule>> {
        self.rules
            .iter()
            .map(|(&symbol, rule)| Ok((symbol, rule.compile(symbol)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let defaults = default_rules();
        assert_eq!(defaults.len(), 3);
        assert!(defaults[&'#'].matches('7'));
        assert!(!defaults[&'#'].matches('x'));
        assert!(defaults[&'@'].matches('x'));
        assert!(defaults[&'*'].matches('7'));
        assert!(defaults[&'*'].matches('x'));
    }

    #[test]
    fn test_parse_single_entry() {
        let set = TokenSet::parse("X:[0-9]").unwrap();
        assert_eq!(set.len(), 1);
        assert!(!set.get('X').unwrap().is_optional());
    }

    #[test]
    fn test_parse_flags() {
        let set = TokenSet::parse("A:[a-z]:optional|B:[0-9]:multiple|C:.:repeated").unwrap();
        assert!(set.get('A').unwrap().is_optional());
        assert!(set.get('B').unwrap().is_multiple());
        assert!(set.get('C').unwrap().is_repeated());
    }

    #[test]
    fn test_parse_rejects_missing_pattern() {
        let err = TokenSet::parse("X").unwrap_err();
        assert!(matches!(err, MaskError::TokenSyntax { .. }));
    }

    #[test]
    fn test_parse_rejects_multichar_symbol() {
        assert!(TokenSet::parse("XY:[0-9]").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(TokenSet::parse("X:[0-9]:sometimes").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_entry() {
        assert!(TokenSet::parse("X:[0-9]|").is_err());
    }

    #[test]
    fn test_compile_reports_symbol() {
        let set = TokenSet::new().define('Q', TokenRule::new("[0-9"));
        let err = set.compile().unwrap_err();
        assert!(matches!(err, MaskError::TokenPattern { symbol: 'Q', .. }));
    }

    #[test]
    fn test_define_replaces() {
        let set = TokenSet::new()
            .define('X', TokenRule::new("[0-9]"))
            .define('X', TokenRule::new("[a-z]"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get('X').unwrap().pattern(), "[a-z]");
    }
}
