//! Mordnilap: a generator for self-describing palindromes.
//!
//! Searches for a message that mirrors itself around its midpoint and whose
//! first half spells out how often every letter occurs in the whole message.
//! The message is found by fixpoint iteration: describe the letter counts of
//! the previous candidate, mirror the result, repeat until a candidate
//! reproduces itself or the iteration budget runs out.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod counting;
pub mod describe;
pub mod error;
pub mod numerals;
pub mod palindrome;

pub mod fixpoint;

pub mod config;
pub mod logging;

pub use error::GeneratorError;
pub use fixpoint::{fixpoint, Dialect, FixpointResult, FixpointSearch, Outcome};
