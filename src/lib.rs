//! Corpus-relative benchmarks and grades for code-quality measurements.
//!
//! A measurement of a project (propagation cost, core size, overly complex
//! files, duplication, comment density) is compared with a corpus of
//! previously analyzed projects in the same language. The pipeline picks the
//! comparable projects ([`select`]), summarizes them ([`benchmark`]) and ranks
//! the measurement against them ([`score`]).

pub mod benchmark;
pub mod config;
pub mod corpus;
pub mod error;
pub mod measurement;
pub mod score;
pub mod select;
pub mod stats;

pub(crate) mod report_helpers;

#[cfg(test)]
mod testkit;

pub use error::{Error, Result};
