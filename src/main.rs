//! Mordnilap CLI entry point.
//!
//! Provides `search` (the default), `spell`, `count` and `verify`
//! subcommands. Generated text goes to stdout, logs go to stderr.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use mordnilap::config::{Config, SearchConfig};
use mordnilap::counting::{count_differences, count_with, CountMode};
use mordnilap::describe::describe_counts;
use mordnilap::fixpoint::{is_fixpoint, next_candidate, FixpointSearch};
use mordnilap::logging;
use mordnilap::numerals::{spell_number, NumeralStyle};

/// Mordnilap: search for a palindrome that spells out its own letter counts.
#[derive(Parser)]
#[command(name = "mordnilap", version, about)]
struct Cli {
    /// Subcommand to execute; `search` when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Search for a self-describing palindrome and print it.
    Search(SearchArgs),
    /// Spell a number in English words.
    Spell {
        /// Number to spell.
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Print the letter counts of a text and their English description.
    Count {
        /// Text to count.
        text: String,
        /// Character counting mode.
        #[arg(long, value_enum, default_value_t = CountingArg::Folded)]
        counting: CountingArg,
    },
    /// Check whether the message stored in a file is a fixpoint.
    Verify {
        /// Prefix the message was generated from (defaults to the configured one).
        #[arg(long)]
        prefix: Option<String>,
        /// File holding the message; one trailing newline is ignored.
        file: PathBuf,
        /// Dialect overrides.
        #[command(flatten)]
        dialect: DialectArgs,
    },
}

/// Flags of the `search` subcommand.
#[derive(Args, Default)]
struct SearchArgs {
    /// Fixed text every candidate starts with.
    #[arg(long)]
    prefix: Option<String>,
    /// Give up after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Stop as soon as the candidates are known to cycle.
    #[arg(long)]
    detect_cycles: bool,
    /// Dialect overrides.
    #[command(flatten)]
    dialect: DialectArgs,
    /// Print the full result as JSON.
    #[arg(long)]
    json: bool,
}

/// Flags selecting a non-canonical dialect.
#[derive(Args, Default)]
struct DialectArgs {
    /// Numeral joining style.
    #[arg(long, value_enum)]
    numerals: Option<NumeralsArg>,
    /// Character counting mode.
    #[arg(long, value_enum)]
    counting: Option<CountingArg>,
}

impl DialectArgs {
    fn apply(&self, search: &mut SearchConfig) {
        if let Some(numerals) = self.numerals {
            search.numerals = numerals.into();
        }
        if let Some(counting) = self.counting {
            search.counting = counting.into();
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NumeralsArg {
    Spaced,
    Hyphenated,
}

impl From<NumeralsArg> for NumeralStyle {
    fn from(arg: NumeralsArg) -> Self {
        match arg {
            NumeralsArg::Spaced => Self::Spaced,
            NumeralsArg::Hyphenated => Self::Hyphenated,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CountingArg {
    Folded,
    Raw,
}

impl From<CountingArg> for CountMode {
    fn from(arg: CountingArg) -> Self {
        match arg {
            CountingArg::Folded => Self::FoldedWordChars,
            CountingArg::Raw => Self::RawNonWhitespace,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;

    let _logging_guard = match &config.logging.dir {
        Some(dir) => Some(logging::init_file(dir, &config.logging.level)?),
        None => {
            logging::init_cli(&config.logging.level);
            None
        }
    };

    match cli.command {
        None => handle_search(&config, SearchArgs::default()),
        Some(Command::Search(args)) => handle_search(&config, args),
        Some(Command::Spell { number }) => handle_spell(number),
        Some(Command::Count { text, counting }) => handle_count(&text, counting.into()),
        Some(Command::Verify {
            prefix,
            file,
            dialect,
        }) => handle_verify(&config, prefix, &file, &dialect),
    }
}

/// Run the fixpoint search and print the outcome.
///
/// Exits successfully whether or not a fixpoint was found.
fn handle_search(config: &Config, args: SearchArgs) -> anyhow::Result<ExitCode> {
    let mut search_config = config.search.clone();
    if let Some(prefix) = args.prefix {
        search_config.prefix = prefix;
    }
    if args.timeout_secs.is_some() {
        search_config.timeout_secs = args.timeout_secs;
    }
    search_config.detect_cycles |= args.detect_cycles;
    args.dialect.apply(&mut search_config);

    let deadline = search_config
        .timeout_secs
        .and_then(|secs| Instant::now().checked_add(Duration::from_secs(secs)));

    info!(
        prefix = %search_config.prefix,
        dialect = ?search_config.dialect(),
        detect_cycles = search_config.detect_cycles,
        "starting fixpoint search"
    );

    let started = Instant::now();
    let result = FixpointSearch::new(&search_config.prefix)
        .dialect(search_config.dialect())
        .detect_cycles(search_config.detect_cycles)
        .run_until(|| deadline.is_some_and(|d| Instant::now() >= d))
        .context("fixpoint search failed")?;

    info!(
        converged = result.converged,
        iterations = result.iterations,
        outcome = ?result.outcome,
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "fixpoint search finished"
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&result).context("failed to serialize search result")?;
        println!("{json}");
    } else {
        println!("{}", result.message);
        println!("converged: {}", result.converged);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the English spelling of `number`.
fn handle_spell(number: i64) -> anyhow::Result<ExitCode> {
    let spelled = spell_number(number).with_context(|| format!("cannot spell {number}"))?;
    println!("{spelled}");
    Ok(ExitCode::SUCCESS)
}

/// Print sorted letter counts of `text` followed by their description.
fn handle_count(text: &str, mode: CountMode) -> anyhow::Result<ExitCode> {
    let counts = count_with(text, mode);
    for (letter, n) in counts.iter() {
        println!("{letter}: {n}");
    }
    if !counts.is_empty() {
        println!("{}", describe_counts(&counts)?);
    }
    Ok(ExitCode::SUCCESS)
}

/// Check a stored message against the candidate it describes.
///
/// Exits with failure when the message is not a fixpoint.
fn handle_verify(
    config: &Config,
    prefix: Option<String>,
    file: &Path,
    dialect_args: &DialectArgs,
) -> anyhow::Result<ExitCode> {
    let mut search_config = config.search.clone();
    if let Some(prefix) = prefix {
        search_config.prefix = prefix;
    }
    dialect_args.apply(&mut search_config);
    let dialect = search_config.dialect();

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let message = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(&raw);
    debug!(path = %file.display(), chars = message.chars().count(), "verifying message");

    if is_fixpoint(&search_config.prefix, message, dialect)? {
        println!("fixpoint: yes");
        return Ok(ExitCode::SUCCESS);
    }

    let described = next_candidate(&search_config.prefix, &dialect.count(message), dialect)?;
    println!("fixpoint: no");
    for (letter, delta) in count_differences(&dialect.count(&described), &dialect.count(message)) {
        println!("{letter}: {delta:+}");
    }
    Ok(ExitCode::FAILURE)
}
