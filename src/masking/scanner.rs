//! The masking scan.
//!
//! One pass walks the pattern and the input in lockstep, emitting token
//! matches and pattern literals. Both directions run through the same
//! loop: the cursors carry a signed step, and reversed output is
//! collected in scan order then flipped once at the end.
//!
//! Cursor rules per step:
//! - A matching token emits the (transformed) input character. Repeated
//!   tokens anchor on first match and cycle the pattern tail; multiple
//!   tokens hold the cursor to absorb a run.
//! - A mismatch on an optional token retries the same input character
//!   against the next pattern slot. A mismatch elsewhere drops the input
//!   character, unless it equals the last literal that failed to line
//!   up, which consumes it silently.
//! - Literals are emitted in place, or by the trailing fill loop in
//!   eager mode, which pushes literals out before their input arrives.

use super::pattern::MaskPattern;
use crate::token::CompiledRule;
use std::collections::HashMap;

pub(crate) struct Scanner<'a> {
    pattern: &'a MaskPattern,
    tokens: &'a HashMap<char, CompiledRule>,
    input: &'a [char],
    with_literals: bool,
    eager: bool,
    reversed: bool,
    /// +1 forward, -1 reversed.
    step: isize,
    /// Last pattern index processed in scan order.
    edge: isize,
    mask_pos: isize,
    input_pos: isize,
    /// Pattern index where a repeated token first matched; -1 until then.
    repeat_anchor: isize,
    /// Set while a multiple token is absorbing a run.
    in_multiple: bool,
    /// Pattern literal that failed to line up with the input, held to
    /// swallow a later duplicate of it.
    pending_literal: Option<char>,
    output: Vec<char>,
}

impl<'a> Scanner<'a> {
    pub fn new(
        pattern: &'a MaskPattern,
        tokens: &'a HashMap<char, CompiledRule>,
        input: &'a [char],
        with_literals: bool,
        eager: bool,
        reversed: bool,
    ) -> Self {
        let mask_len = pattern.len() as isize;
        let input_len = input.len() as isize;
        let (step, edge, mask_pos, input_pos) = if reversed {
            (-1, 0, mask_len - 1, input_len - 1)
        } else {
            (1, mask_len - 1, 0, 0)
        };

        Self {
            pattern,
            tokens,
            input,
            with_literals,
            eager,
            reversed,
            step,
            edge,
            mask_pos,
            input_pos,
            repeat_anchor: -1,
            in_multiple: false,
            pending_literal: None,
            output: Vec::with_capacity(pattern.len()),
        }
    }

    /// Runs the scan to exhaustion of either the pattern or the input.
    pub fn run(mut self) -> String {
        while self.in_bounds() {
            let mask_char = self.pattern.chars()[self.mask_pos as usize];
            let rule = self.tokens.get(&mask_char);
            let raw = self.input[self.input_pos as usize];
            // An escaped symbol still applies its rule's transform even
            // though it is compared as a literal.
            let candidate = rule.map_or(raw, |r| r.transform(raw));

            match rule {
                Some(rule) if !self.is_escaped(self.mask_pos) => {
                    self.match_token(rule, candidate)
                }
                _ => self.copy_literal(mask_char, candidate),
            }

            if self.eager {
                self.eager_fill();
            }
        }

        if self.reversed {
            self.output.reverse();
        }
        self.output.into_iter().collect()
    }

    /// One step on a token slot. Always consumes an input character,
    /// except where a retry against the next slot is set up.
    fn match_token(&mut self, rule: &CompiledRule, candidate: char) {
        if rule.matches(candidate) {
            self.output.push(candidate);
            if rule.repeated {
                if self.repeat_anchor == -1 {
                    self.repeat_anchor = self.mask_pos;
                } else if self.mask_pos == self.edge && self.mask_pos != self.repeat_anchor {
                    // Cycle back so the next advance lands on the anchor.
                    self.mask_pos = self.repeat_anchor - self.step;
                }
                if self.edge == self.repeat_anchor {
                    self.mask_pos -= self.step;
                }
            } else if rule.multiple {
                self.in_multiple = true;
                self.mask_pos -= self.step;
            }
            self.mask_pos += self.step;
        } else if rule.multiple {
            if self.in_multiple {
                // The run ended; retry this character on the next slot.
                self.mask_pos += self.step;
                self.input_pos -= self.step;
                self.in_multiple = false;
            }
        } else if Some(candidate) == self.pending_literal {
            self.pending_literal = None;
        } else if rule.optional {
            self.mask_pos += self.step;
            self.input_pos -= self.step;
        }
        self.input_pos += self.step;
    }

    /// One step on a literal slot (including escaped token symbols).
    fn copy_literal(&mut self, literal: char, candidate: char) {
        if self.with_literals && !self.eager {
            self.output.push(literal);
        }
        if candidate == literal && !self.eager {
            self.input_pos += self.step;
        } else {
            self.pending_literal = Some(literal);
        }
        if !self.eager {
            self.mask_pos += self.step;
        }
    }

    /// Emits consecutive literal slots ahead of the input, consuming
    /// input characters that already equal them.
    fn eager_fill(&mut self) {
        while self.within_pattern(self.mask_pos) && self.literal_slot(self.mask_pos) {
            let mask_char = self.pattern.chars()[self.mask_pos as usize];
            if self.with_literals {
                self.output.push(mask_char);
                if self.input_at(self.input_pos) == Some(mask_char) {
                    self.mask_pos += self.step;
                    self.input_pos += self.step;
                    continue;
                }
            } else if self.input_at(self.input_pos) == Some(mask_char) {
                self.input_pos += self.step;
            }
            self.mask_pos += self.step;
        }
    }

    fn in_bounds(&self) -> bool {
        if self.reversed {
            self.mask_pos > -1 && self.input_pos > -1
        } else {
            self.mask_pos < self.pattern.len() as isize
                && self.input_pos < self.input.len() as isize
        }
    }

    fn within_pattern(&self, pos: isize) -> bool {
        if self.reversed {
            pos >= self.edge
        } else {
            pos <= self.edge
        }
    }

    fn literal_slot(&self, pos: isize) -> bool {
        let mask_char = self.pattern.chars()[pos as usize];
        !self.tokens.contains_key(&mask_char) || self.is_escaped(pos)
    }

    fn is_escaped(&self, pos: isize) -> bool {
        self.pattern.is_escaped(pos as usize)
    }

    fn input_at(&self, pos: isize) -> Option<char> {
        usize::try_from(pos)
            .ok()
            .and_then(|index| self.input.get(index).copied())
    }
}
