//! Error types for the search and input layers.

use thiserror::Error;

use super::position::Span;

/// Failures raised while deriving or walking a search range.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("digit length {length} is out of range (supported: {min}..={max})")]
    LengthOutOfRange { length: u64, min: u32, max: u32 },

    #[error("invalid search range: start {start} is past end {end}")]
    InvalidRange { start: u64, end: u64 },

    #[error("search range [{start}, {end}) holds numbers without exactly {length} digits")]
    RangeOutsideLength { start: u64, end: u64, length: u32 },

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised while reading requested digit lengths.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid digit length `{token}`")]
    Malformed { token: String, span: Span },

    #[error("unsupported digit length `{token}`")]
    OutOfRange {
        token: String,
        span: Span,
        #[source]
        source: SearchError,
    },

    #[error("failed to read standard input: {0}")]
    Read(#[from] std::io::Error),
}

impl InputError {
    pub fn span(&self) -> Option<Span> {
        match self {
            InputError::Malformed { span, .. } | InputError::OutOfRange { span, .. } => Some(*span),
            InputError::Read(_) => None,
        }
    }
}

/// Top-level error for a whole run.
#[derive(Debug, Error)]
pub enum QuodigiousError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl QuodigiousError {
    /// True when stdout was closed by the reader (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            QuodigiousError::Search(SearchError::Io(err))
                if err.kind() == std::io::ErrorKind::BrokenPipe
        )
    }
}

pub type Result<T, E = QuodigiousError> = std::result::Result<T, E>;
