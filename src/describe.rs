//! English enumeration of letter counts.
//!
//! Entries render as `<count> ❛<letter>❜s` in ascending letter order. All
//! entries but the last are joined with `", "`, and the last one is
//! appended after `" and "`. A single entry therefore comes out as
//! `" and three ❛a❜s"` with nothing before the conjunction; the generated
//! text depends on that exact shape, so it is kept.

use crate::counting::LetterCounts;
use crate::error::GeneratorError;
use crate::numerals::NumberSpeller;

/// Text preceding the enumeration in the instruction sentence.
pub const LEAD_IN: &str = "With that - please write down";

/// Text following the enumeration in the instruction sentence.
pub const TRAILER: &str = ", in a palindromic sequence whose second half runs thus:";

/// Enumerate `counts` with the canonical numeral conventions.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] when `counts` is empty.
pub fn describe_counts(counts: &LetterCounts) -> Result<String, GeneratorError> {
    describe_with(counts, &NumberSpeller::default())
}

/// Enumerate `counts`, spelling each count with `speller`.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] when `counts` is empty or a
/// count is too large to spell.
pub fn describe_with(
    counts: &LetterCounts,
    speller: &NumberSpeller,
) -> Result<String, GeneratorError> {
    let mut parts = counts
        .iter()
        .map(|(letter, n)| -> Result<String, GeneratorError> {
            let n = u64::try_from(n)
                .map_err(|_| GeneratorError::invalid(format!("count {n} does not fit in u64")))?;
            Ok(format!("{} ❛{letter}❜s", speller.spell_unsigned(n)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let last = parts
        .pop()
        .ok_or_else(|| GeneratorError::invalid("cannot describe an empty count table"))?;
    Ok(format!("{} and {last}", parts.join(", ")))
}

/// Wrap the enumeration of `counts` in the full instruction sentence.
///
/// # Errors
///
/// See [`describe_with`].
pub fn instructions(
    counts: &LetterCounts,
    speller: &NumberSpeller,
) -> Result<String, GeneratorError> {
    Ok(format!("{LEAD_IN} {}{TRAILER}", describe_with(counts, speller)?))
}
