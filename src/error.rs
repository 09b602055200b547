//! Error types for the connectivity and similarity components.
//!
//! Structural contract violations (batch shape, grid dimensions, threshold
//! range) abort a call; geometric disagreements are scoring outcomes and
//! never surface here. Netlist parse failures degrade at the granularity of
//! one sample or row.

use thiserror::Error;

/// Errors raised by the grid connectivity checker.
#[derive(Debug, Error)]
pub enum ConnectivityError {
    #[error("netlist batch has {nets} samples but grid batch has {grids}")]
    ShapeMismatch { nets: usize, grids: usize },

    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidGrid { width: usize, height: usize },

    #[error("label buffer holds {actual} cells but the grid declares {expected}")]
    LabelMismatch { actual: usize, expected: usize },
}

/// Errors raised while reading the persisted netlist text format.
#[derive(Debug, Error)]
pub enum NetlistError {
    #[error("failed to read netlist file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("net '{net}' is missing its END terminator")]
    MissingEnd { net: String },

    #[error("bad coordinate '{token}' on line {line}")]
    BadCoordinate { token: String, line: usize },
}

/// Errors raised by the similarity deduplicator.
#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("similarity threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    #[error(transparent)]
    Netlist(#[from] NetlistError),
}
