//! Error type shared by the benchmark and scoring pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving settings, loading a corpus, or generating
/// benchmarks. Per-metric scoring problems are not errors: they are recorded
/// as explanations and contribute nothing to the composite.
#[derive(Debug, Error)]
pub enum Error {
    /// The language has no entry in the settings table.
    #[error("unable to create benchmarks - {0} is not a supported language")]
    UnsupportedLanguage(String),

    /// The corpus (or the selected subset) contained no cases.
    #[error("unable to create benchmarks - no similar cases found")]
    NoSimilarCases,

    /// The corpus carries no values at all for a composite score column.
    #[error("unable to create grade percentiles - no values for {0}")]
    MissingColumn(String),

    /// A per-language dataset could not be read or parsed.
    #[error("dataset error in {}: {source}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The CSV snapshot stored in a selection audit could not be read back.
    #[error("selection snapshot error: {0}")]
    Snapshot(#[source] csv::Error),

    /// A saved benchmark run belongs to another language than the one asked
    /// for.
    #[error("saved benchmark run is for {found}, not {expected}")]
    RunLanguage { expected: String, found: String },

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a CSV error raised while reading the dataset at `path`.
    pub fn dataset(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Dataset {
            path: path.into(),
            source,
        }
    }

    /// True when the caller may fall back to a default benchmark request.
    /// An unsupported language is never recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoSimilarCases)
    }
}
