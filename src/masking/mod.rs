//! Masking engine: configuration, candidate selection and the views.
//!
//! A [`Masker`] is built once from [`MaskOptions`] and then queried with
//! raw values. The three views share one scan per value: `masked` keeps
//! pattern literals, `unmasked` keeps only token matches, and
//! `completed` reports whether the value fills the whole pattern.

pub mod number;
pub mod options;

mod cache;
mod pattern;
mod scanner;

pub use number::NumberOptions;
pub use options::{MaskOptions, MaskSpec};

use crate::error::MaskResult;
use crate::token::{default_rules, CompiledRule, TokenSet};
use cache::{ScanCache, ScanKey};
use pattern::MaskPattern;
use scanner::Scanner;
use std::collections::HashMap;

/// The masking engine.
///
/// Construction compiles all token rules and normalizes the mask
/// specification; processing never fails after that.
///
/// ```
/// use textmask::{Masker, MaskOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let masker = Masker::new(MaskOptions::pattern("(###) ###-####"))?;
/// assert_eq!(masker.masked("5552345678"), "(555) 234-5678");
/// assert_eq!(masker.unmasked("(555) 234-5678"), "5552345678");
/// assert!(masker.completed("5552345678"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Masker {
    spec: Option<MaskSpec>,
    tokens: HashMap<char, CompiledRule>,
    eager: bool,
    reversed: bool,
    number: Option<NumberOptions>,
    cache: ScanCache,
}

impl Masker {
    /// Builds a masker, compiling custom tokens and normalizing the
    /// mask specification.
    ///
    /// # Errors
    ///
    /// Fails when a custom token pattern does not compile.
    pub fn new(options: MaskOptions) -> MaskResult<Self> {
        let MaskOptions {
            mask,
            tokens,
            tokens_replace,
            eager,
            reversed,
            number,
        } = options;

        Ok(Self {
            spec: normalize_spec(mask),
            tokens: compile_tokens(tokens, tokens_replace)?,
            eager,
            reversed,
            number,
            cache: ScanCache::default(),
        })
    }

    /// Returns the display form: token matches plus pattern literals.
    pub fn masked(&self, value: &str) -> String {
        let found = self.resolve_mask(value);
        self.process(value, found.as_deref(), true)
    }

    /// Returns only the characters that matched token slots.
    pub fn unmasked(&self, value: &str) -> String {
        let found = self.resolve_mask(value);
        self.process(value, found.as_deref(), false)
    }

    /// Reports whether the value fills the whole pattern.
    ///
    /// For a plain pattern the raw configured string sets the required
    /// length, escape markers included; for sequences and dynamic
    /// masks, the selected candidate does.
    pub fn completed(&self, value: &str) -> bool {
        let Some(found) = self.resolve_mask(value) else {
            return false;
        };
        let produced = self.process(value, Some(&found), true).chars().count();
        match &self.spec {
            Some(MaskSpec::Pattern(raw)) => produced >= raw.chars().count(),
            _ => produced >= found.chars().count(),
        }
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Resolves which pattern applies to a value. `None` means
    /// pass-through (no mask configured).
    ///
    /// For sequences, candidates are probed shortest first and the
    /// first one whose match consumes as much input as the longest
    /// candidate's match wins. Equally good matches therefore select
    /// the shorter pattern.
    pub fn resolve_mask(&self, value: &str) -> Option<String> {
        match self.spec.as_ref()? {
            MaskSpec::Pattern(pattern) => Some(pattern.clone()),
            MaskSpec::Dynamic(selector) => Some(selector(value)),
            MaskSpec::Sequence(candidates) => {
                let longest = candidates.last().map(String::as_str).unwrap_or("");
                let target = self.process(value, Some(longest), false).chars().count();
                Some(
                    candidates
                        .iter()
                        .find(|candidate| {
                            self.process(value, Some(candidate), false).chars().count()
                                >= target
                        })
                        .cloned()
                        .unwrap_or_default(),
                )
            }
        }
    }

    /// Runs one scan, preferring number mode, then the cache.
    fn process(&self, value: &str, pattern: Option<&str>, with_literals: bool) -> String {
        if let Some(number) = &self.number {
            return number::format(value, with_literals, number);
        }
        let Some(pattern) = pattern else {
            return value.to_string();
        };

        let key = ScanKey::new(value, pattern, with_literals);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let resolved = MaskPattern::resolve(pattern);
        let input: Vec<char> = value.chars().collect();
        let result = Scanner::new(
            &resolved,
            &self.tokens,
            &input,
            with_literals,
            self.eager,
            self.reversed,
        )
        .run();

        self.cache.store(key, result.clone());
        result
    }
}

/// Collapses the mask specification the way values are matched:
/// sequences sort shortest first (stable), single-entry sequences
/// become plain patterns, and empty patterns mean pass-through.
fn normalize_spec(mask: Option<MaskSpec>) -> Option<MaskSpec> {
    match mask {
        Some(MaskSpec::Sequence(mut candidates)) => {
            if candidates.len() > 1 {
                candidates.sort_by_key(|candidate| candidate.chars().count());
                Some(MaskSpec::Sequence(candidates))
            } else {
                normalize_spec(candidates.pop().map(MaskSpec::Pattern))
            }
        }
        Some(MaskSpec::Pattern(pattern)) if pattern.is_empty() => None,
        other => other,
    }
}

fn compile_tokens(
    tokens: Option<TokenSet>,
    tokens_replace: bool,
) -> MaskResult<HashMap<char, CompiledRule>> {
    match tokens {
        Some(set) if tokens_replace => set.compile(),
        Some(set) => {
            let mut merged = default_rules().clone();
            merged.extend(set.compile()?);
            Ok(merged)
        }
        None => Ok(default_rules().clone()),
    }
}
