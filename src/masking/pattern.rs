//! Mask pattern escape resolution.
//!
//! A `!` marks the next pattern character as literal even when it is a
//! token symbol. A `!` directly preceded by another `!` is an ordinary
//! character, so `"!!"` yields a single literal `!`.

/// A pattern with escape markers resolved: the de-escaped character
/// sequence plus the positions that must be treated as literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MaskPattern {
    chars: Vec<char>,
    escaped: Vec<usize>,
}

impl MaskPattern {
    /// Resolves escape markers in a raw pattern string.
    pub fn resolve(raw: &str) -> Self {
        let source: Vec<char> = raw.chars().collect();
        let mut chars = Vec::with_capacity(source.len());
        let mut escaped = Vec::new();

        for (index, &ch) in source.iter().enumerate() {
            let marker = ch == '!' && (index == 0 || source[index - 1] != '!');
            if marker {
                // The marker itself is dropped; record where the escaped
                // character lands in the de-escaped sequence.
                escaped.push(index - escaped.len());
            } else {
                chars.push(ch);
            }
        }

        Self { chars, escaped }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_escaped(&self, index: usize) -> bool {
        self.escaped.contains(&index)
    }
}
