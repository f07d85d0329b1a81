//! Locale-aware number formatting.
//!
//! Number mode replaces token scanning entirely: the value is reduced to
//! sign, integer digits and fraction digits, then regrouped with the
//! locale's separators. Formatting works on digit strings, so precision
//! is never lost to a float round-trip and extra fraction digits are
//! truncated, never rounded.

/// Options for number mode.
///
/// Any presence of this struct on [`MaskOptions`](crate::MaskOptions)
/// switches the masker to number formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberOptions {
    /// BCP-47 style locale tag; unknown tags fall back to `en`.
    pub locale: String,
    /// Maximum fraction digits kept in the output.
    pub fraction: usize,
    /// Drops a leading minus sign when set.
    pub unsigned: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fraction: 0,
            unsigned: false,
        }
    }
}

impl NumberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_fraction(mut self, fraction: usize) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }
}

/// Integer grouping style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    /// Groups of three throughout.
    Western,
    /// Rightmost group of three, then groups of two.
    Indian,
}

/// Separator and grouping data for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Locale {
    group: char,
    decimal: char,
    grouping: Grouping,
    /// Minimum integer digits beyond a full group before grouping
    /// applies. CLDR value; 2 for locales like `es` that leave
    /// four-digit integers ungrouped.
    min_grouping: u8,
}

const EN: Locale = Locale {
    group: ',',
    decimal: '.',
    grouping: Grouping::Western,
    min_grouping: 1,
};

impl Locale {
    fn lookup(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        Self::resolve(&tag)
            .or_else(|| tag.split('-').next().and_then(Self::resolve))
            .unwrap_or(EN)
    }

    fn resolve(tag: &str) -> Option<Self> {
        let western = |group, decimal, min_grouping| {
            Some(Locale {
                group,
                decimal,
                grouping: Grouping::Western,
                min_grouping,
            })
        };
        match tag {
            "en" | "en-us" | "en-gb" | "ja" | "ko" | "zh" => western(',', '.', 1),
            "en-in" | "hi" => Some(Locale {
                group: ',',
                decimal: '.',
                grouping: Grouping::Indian,
                min_grouping: 1,
            }),
            "de" | "de-at" | "it" | "nl" | "pt" | "pt-br" | "da" | "tr" | "id" => {
                western('.', ',', 1)
            }
            "de-ch" => western('\u{2019}', '.', 1),
            "fr" => western('\u{202f}', ',', 1),
            "es" => western('.', ',', 2),
            "ru" | "sv" | "nb" | "no" | "nn" | "fi" | "cs" => western('\u{a0}', ',', 1),
            "pl" => Some(Locale {
                group: '\u{a0}',
                decimal: ',',
                grouping: Grouping::Western,
                min_grouping: 2,
            }),
            _ => None,
        }
    }

    /// Separator stripped from input. Locales that leave four-digit
    /// integers ungrouped expose no separator on a short probe, so
    /// cleanup falls back to a plain space for them.
    fn probe_group(&self) -> char {
        if self.min_grouping > 1 {
            ' '
        } else {
            self.group
        }
    }

    /// Groups integer digits with the locale separator.
    fn group_digits(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping as usize {
            return digits.to_string();
        }

        match self.grouping {
            Grouping::Western => join_from_right(digits, 3, self.group),
            Grouping::Indian => {
                let (head, tail) = digits.split_at(digits.len() - 3);
                let mut out = join_from_right(head, 2, self.group);
                out.push(self.group);
                out.push_str(tail);
                out
            }
        }
    }
}

/// Inserts `separator` between groups of `size` digits, counted from
/// the right.
fn join_from_right(digits: &str, size: usize, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % size == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Reduces a value to canonical `digits[.digits]` form: group
/// separators removed, the first decimal separator turned into `.`,
/// one doubled dot collapsed, everything else stripped.
fn sanitize(value: &str, group: char, decimal: char) -> String {
    let ungrouped: String = value.chars().filter(|&c| c != group).collect();
    let decimal_as_dot = ungrouped.replacen(decimal, ".", 1);
    let collapsed = decimal_as_dot.replacen("..", ".", 1);
    collapsed
        .chars()
        .filter(|&c| c == '.' || c.is_ascii_digit())
        .collect()
}

/// Splits the leading numeric prefix into integer and fraction digits.
/// Returns `None` when the prefix holds no digit at all.
fn split_number(cleaned: &str) -> Option<(&str, Option<&str>)> {
    let int_end = cleaned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cleaned.len());
    let int_part = &cleaned[..int_end];
    let rest = &cleaned[int_end..];

    let frac_part = rest.strip_prefix('.').map(|frac| {
        let frac_end = frac
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(frac.len());
        &frac[..frac_end]
    });

    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return None;
    }
    Some((int_part, frac_part))
}

/// Formats a raw value in number mode.
///
/// `with_separators` selects the masked view; the unmasked view strips
/// the formatted result back to canonical form. Values without any
/// digits reduce to the bare sign.
pub(crate) fn format(value: &str, with_separators: bool, opts: &NumberOptions) -> String {
    let locale = Locale::lookup(&opts.locale);
    let sign = if !opts.unsigned && value.starts_with('-') {
        "-"
    } else {
        ""
    };

    let group_probe = locale.probe_group();
    // With no fraction capacity the locale decimal is never printed,
    // and a plain dot is the only separator recognized on input.
    let decimal_probe = if opts.fraction == 0 {
        '.'
    } else {
        locale.decimal
    };

    let cleaned = sanitize(value, group_probe, decimal_probe);
    let Some((int_digits, frac_digits)) = split_number(&cleaned) else {
        return sign.to_string();
    };

    let int_digits = int_digits.trim_start_matches('0');
    let int_digits = if int_digits.is_empty() {
        "0"
    } else {
        int_digits
    };

    let mut formatted = locale.group_digits(int_digits);
    let frac = frac_digits.unwrap_or("");
    let kept = &frac[..frac.len().min(opts.fraction)];
    if !kept.is_empty() {
        formatted.push(locale.decimal);
        formatted.push_str(kept);
    }

    if with_separators {
        // Keep a just-typed decimal separator visible while the
        // fraction is still empty.
        let trailing_dot =
            cleaned.ends_with('.') && !cleaned[..cleaned.len() - 1].contains('.');
        if opts.fraction > 0 && trailing_dot {
            formatted.push(decimal_probe);
        }
    } else {
        formatted = sanitize(&formatted, group_probe, decimal_probe);
    }

    format!("{sign}{formatted}")
}
