//! Error types for sequence-order coupling computations.

use thiserror::Error;

/// Errors raised while validating sequences, loading distance tables
/// or computing coupling numbers.
///
/// All variants carry enough context (symbol, position, length, lag, table)
/// to diagnose a failure without re-running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SocnError {
    /// A residue outside the 20 canonical amino acids. `position` is 1-based.
    #[error("invalid residue '{symbol}' at position {position}: only the 20 canonical amino acids are accepted")]
    InvalidSequence { symbol: char, position: usize },

    #[error("empty sequence")]
    EmptySequence,

    #[error("sequence of length {length} is shorter than the maximum lag {max_lag}")]
    SequenceTooShort { length: usize, max_lag: usize },

    #[error("maximum lag must be at least 1, got {max_lag}")]
    InvalidLag { max_lag: usize },

    /// Packaged or caller-supplied reference data is missing or malformed.
    #[error("failed to load distance table '{table}': {reason}")]
    TableLoad { table: String, reason: String },

    /// A residue pair has no entry in a distance table.
    #[error("distance table '{table}' has no entry for the pair {a}-{b}")]
    MissingDistanceEntry { table: String, a: char, b: char },

    #[error("failed to assemble descriptor table: {0}")]
    Frame(String),

    /// Failure tied to one record of a batch.
    #[error("record '{id}': {source}")]
    Record {
        id: String,
        #[source]
        source: Box<SocnError>,
    },
}

pub type Result<T> = std::result::Result<T, SocnError>;

impl From<polars::error::PolarsError> for SocnError {
    fn from(err: polars::error::PolarsError) -> Self {
        SocnError::Frame(err.to_string())
    }
}
