//! English spelling of non-negative integers.
//!
//! Spelling recurses by magnitude band (ones, teens, tens, hundreds,
//! thousands, millions, billions). Every band defers its remainder to the
//! band below it, and a zero remainder renders as the empty string. That
//! leaves a trailing space on round numbers in the spaced style
//! (`20` spells `"twenty "`). The generated palindromes depend on every one
//! of these characters, so the quirk is kept as is.

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Largest value accepted by the speller.
///
/// The billion band has no upper neighbour and would recurse into itself
/// for larger inputs; the cap keeps its quotient below one billion.
pub const MAX_SPELLABLE: u64 = 999_999_999_999_999_999;

/// How a standalone zero is spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroStyle {
    /// `0` spells `"zero"`.
    #[default]
    Word,
    /// `0` spells the empty string.
    Empty,
}

/// How multi-word numerals are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralStyle {
    /// Tens and remainder joined by a space, output left untrimmed
    /// (`"forty five"`, `"twenty "`).
    #[default]
    Spaced,
    /// Tens and a non-empty remainder joined by `-`, output trimmed
    /// (`"forty-five"`, `"twenty"`, `"one hundred"`).
    Hyphenated,
}

/// Converts integers into English words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberSpeller {
    zero: ZeroStyle,
    style: NumeralStyle,
}

impl NumberSpeller {
    /// Create a speller with explicit zero and joining conventions.
    pub const fn new(zero: ZeroStyle, style: NumeralStyle) -> Self {
        Self { zero, style }
    }

    /// Zero convention in use.
    pub fn zero_style(&self) -> ZeroStyle {
        self.zero
    }

    /// Joining convention in use.
    pub fn style(&self) -> NumeralStyle {
        self.style
    }

    /// Spell a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] for negative values and
    /// values above [`MAX_SPELLABLE`].
    pub fn spell(&self, n: i64) -> Result<String, GeneratorError> {
        let value = u64::try_from(n)
            .map_err(|_| GeneratorError::invalid(format!("cannot spell negative number {n}")))?;
        self.spell_unsigned(value)
    }

    /// Spell an unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] for values above
    /// [`MAX_SPELLABLE`].
    pub fn spell_unsigned(&self, n: u64) -> Result<String, GeneratorError> {
        if n > MAX_SPELLABLE {
            return Err(GeneratorError::invalid(format!(
                "{n} exceeds the largest spellable number {MAX_SPELLABLE}"
            )));
        }
        if n == 0 {
            let zero = match self.zero {
                ZeroStyle::Word => "zero",
                ZeroStyle::Empty => "",
            };
            return Ok(zero.to_owned());
        }

        let spelled = self.band(n);
        Ok(match self.style {
            NumeralStyle::Spaced => spelled,
            NumeralStyle::Hyphenated => spelled.trim().to_owned(),
        })
    }

    /// Spell a floating-point value that holds a whole number.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] for NaN, infinities,
    /// fractional values, negative values and values above [`MAX_SPELLABLE`].
    pub fn spell_float(&self, value: f64) -> Result<String, GeneratorError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(GeneratorError::invalid(format!(
                "{value} is not a whole number"
            )));
        }
        if value < 0.0 {
            return Err(GeneratorError::invalid(format!(
                "cannot spell negative number {value}"
            )));
        }
        // 1e18 is the first float past MAX_SPELLABLE.
        if value >= 1e18 {
            return Err(GeneratorError::invalid(format!(
                "{value} exceeds the largest spellable number {MAX_SPELLABLE}"
            )));
        }
        // Whole, non-negative and below 1e18: the conversion is exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = value as u64;
        self.spell_unsigned(whole)
    }

    fn band(&self, n: u64) -> String {
        match n {
            0 => String::new(),
            1..=9 => word(&ONES, n).to_owned(),
            10..=19 => word(&TEENS, n % 10).to_owned(),
            20..=99 => {
                let tens = word(&TENS, (n / 10).saturating_sub(2));
                let rest = self.band(n % 10);
                match self.style {
                    NumeralStyle::Spaced => format!("{tens} {rest}"),
                    NumeralStyle::Hyphenated if rest.is_empty() => tens.to_owned(),
                    NumeralStyle::Hyphenated => format!("{tens}-{rest}"),
                }
            }
            100..=999 => format!("{} hundred {}", word(&ONES, n / 100), self.band(n % 100)),
            1_000..=999_999 => format!(
                "{} thousand {}",
                self.band(n / 1_000),
                self.band(n % 1_000)
            ),
            1_000_000..=999_999_999 => format!(
                "{} million {}",
                self.band(n / 1_000_000),
                self.band(n % 1_000_000)
            ),
            _ => format!(
                "{} billion {}",
                self.band(n / 1_000_000_000),
                self.band(n % 1_000_000_000)
            ),
        }
    }
}

/// Spell `n` with the canonical conventions ([`ZeroStyle::Word`],
/// [`NumeralStyle::Spaced`]).
///
/// # Errors
///
/// See [`NumberSpeller::spell`].
pub fn spell_number(n: i64) -> Result<String, GeneratorError> {
    NumberSpeller::default().spell(n)
}

/// Spell a whole-number float with the canonical conventions.
///
/// # Errors
///
/// See [`NumberSpeller::spell_float`].
pub fn spell_float(value: f64) -> Result<String, GeneratorError> {
    NumberSpeller::default().spell_float(value)
}

fn word(table: &[&'static str], index: u64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or_default()
}
