//! Bounded search for a self-describing palindrome.
//!
//! The search iterates
//! `F(M) = mirror(prefix + " " + instructions(count(M)))`, seeded with the
//! counts of the bare prefix, until a candidate reproduces itself verbatim
//! or the iteration budget runs out. The map is not contractive: most
//! prefixes fall into a cycle of candidates instead of a fixpoint, which is
//! reported as a normal outcome rather than an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::counting::{count_differences, count_with, CountMode, LetterCounts};
use crate::describe::instructions;
use crate::error::GeneratorError;
use crate::numerals::{NumberSpeller, NumeralStyle, ZeroStyle};
use crate::palindrome::mirror;

/// Iteration budget of a search. One million iterations take roughly a minute.
pub const DEFAULT_MAX_ITERATIONS: u64 = 30_000_000;

/// Iterations between progress log lines.
const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Formatting conventions used to build candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// How tens and remainders are joined.
    pub numerals: NumeralStyle,
    /// How a standalone zero is spelled.
    pub zero: ZeroStyle,
    /// Which characters are counted.
    pub counting: CountMode,
}

impl Dialect {
    /// Spaced numerals, `"zero"`, case-folded word characters.
    pub fn canonical() -> Self {
        Self::default()
    }

    /// Hyphenated, trimmed numerals with canonical counting.
    pub fn hyphenated() -> Self {
        Self {
            numerals: NumeralStyle::Hyphenated,
            ..Self::default()
        }
    }

    /// Speller configured for this dialect.
    pub fn speller(&self) -> NumberSpeller {
        NumberSpeller::new(self.zero, self.numerals)
    }

    /// Count `text` the way this dialect does.
    pub fn count(&self, text: &str) -> LetterCounts {
        count_with(text, self.counting)
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A candidate reproduced itself.
    Converged,
    /// The iteration budget ran out.
    Exhausted,
    /// The candidates entered a cycle of the given length (cycle detection only).
    Cycle {
        /// Number of distinct candidates in the cycle.
        period: u64,
    },
    /// The caller asked the search to stop.
    Cancelled,
}

/// Final message of a search and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixpointResult {
    /// The fixpoint when `converged`, otherwise the last candidate produced.
    pub message: String,
    /// Whether `message` reproduces itself.
    pub converged: bool,
    /// Loop iterations performed, not counting the seed candidate.
    pub iterations: u64,
    /// Why the search stopped.
    pub outcome: Outcome,
}

impl FixpointResult {
    /// The `(message, success)` pair.
    pub fn into_pair(self) -> (String, bool) {
        (self.message, self.converged)
    }
}

/// Configurable fixpoint search over a fixed prefix.
#[derive(Debug, Clone)]
pub struct FixpointSearch<'a> {
    prefix: &'a str,
    max_iterations: u64,
    dialect: Dialect,
    detect_cycles: bool,
}

impl<'a> FixpointSearch<'a> {
    /// Search seeded with `prefix`, the default budget and the canonical dialect.
    pub fn new(prefix: &'a str) -> Self {
        Self {
            prefix,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            dialect: Dialect::canonical(),
            detect_cycles: false,
        }
    }

    /// Override the iteration budget.
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Use a non-canonical dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Stop early once the candidates are known to cycle.
    pub fn detect_cycles(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Run until convergence or budget exhaustion.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] when a candidate cannot be
    /// described, e.g. a prefix without a single countable character.
    pub fn run(&self) -> Result<FixpointResult, GeneratorError> {
        self.run_until(|| false)
    }

    /// Like [`FixpointSearch::run`], but polls `should_stop` before every
    /// iteration and ends with [`Outcome::Cancelled`] once it returns `true`.
    ///
    /// # Errors
    ///
    /// See [`FixpointSearch::run`].
    #[instrument(skip_all, fields(prefix_len = self.prefix.len(), budget = self.max_iterations))]
    pub fn run_until(
        &self,
        mut should_stop: impl FnMut() -> bool,
    ) -> Result<FixpointResult, GeneratorError> {
        let dialect = self.dialect;
        let seed_counts = dialect.count(self.prefix);
        let mut message = next_candidate(self.prefix, &seed_counts, dialect)?;
        let mut claimed = seed_counts;
        let mut iterations: u64 = 0;

        // Brent's cycle detection: compare against a checkpoint moved at powers of two.
        let mut checkpoint = message.clone();
        let mut power: u64 = 1;
        let mut lambda: u64 = 0;

        let outcome = loop {
            if iterations >= self.max_iterations {
                break Outcome::Exhausted;
            }
            if should_stop() {
                break Outcome::Cancelled;
            }

            let counts = dialect.count(&message);
            let next = next_candidate(self.prefix, &counts, dialect)?;
            iterations = iterations.saturating_add(1);
            claimed = counts;

            if next == message {
                info!(iterations, "fixpoint found");
                return Ok(FixpointResult {
                    message: next,
                    converged: true,
                    iterations,
                    outcome: Outcome::Converged,
                });
            }

            if self.detect_cycles {
                lambda = lambda.saturating_add(1);
                if next == checkpoint {
                    message = next;
                    break Outcome::Cycle { period: lambda };
                }
                if lambda == power {
                    checkpoint.clone_from(&next);
                    power = power.saturating_mul(2);
                    lambda = 0;
                }
            }

            message = next;
            if iterations % PROGRESS_INTERVAL == 0 {
                debug!(iterations, "fixpoint search in progress");
            }
        };

        let mismatched = count_differences(&claimed, &dialect.count(&message));
        warn!(
            iterations,
            ?outcome,
            mismatched = mismatched.len(),
            differences = ?mismatched,
            "no fixpoint found"
        );

        Ok(FixpointResult {
            message,
            converged: false,
            iterations,
            outcome,
        })
    }
}

/// Build the candidate describing `counts`: the prefix and the instruction
/// sentence, mirrored.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidArgument`] when `counts` is empty.
pub fn next_candidate(
    prefix: &str,
    counts: &LetterCounts,
    dialect: Dialect,
) -> Result<String, GeneratorError> {
    let sentence = instructions(counts, &dialect.speller())?;
    Ok(mirror(&format!("{prefix} {sentence}")))
}

/// Whether describing `message` reproduces `message` exactly.
///
/// # Errors
///
/// See [`next_candidate`].
pub fn is_fixpoint(prefix: &str, message: &str, dialect: Dialect) -> Result<bool, GeneratorError> {
    Ok(next_candidate(prefix, &dialect.count(message), dialect)? == message)
}

/// Search with the default budget and canonical dialect, returning the
/// `(message, success)` pair.
///
/// # Errors
///
/// See [`FixpointSearch::run`].
pub fn fixpoint(prefix: &str) -> Result<(String, bool), GeneratorError> {
    FixpointSearch::new(prefix).run().map(FixpointResult::into_pair)
}
