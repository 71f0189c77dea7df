use thiserror::Error;

/// Errors surfaced by the playground core and the execution bridge.
#[derive(Debug, Error)]
pub enum DiamondError {
    #[error("unterminated string starting at column {column}")]
    UnterminatedString { column: usize },

    #[error("language '{0}' is not registered")]
    NotRegistered(String),

    #[error("execution service failed: {0}")]
    ExecutionTransportFailure(#[from] TransportFailure),

    #[error("discarded stale response for run #{generation} (current run is #{current})")]
    StaleResponse { generation: u64, current: u64 },

    #[error("invalid color '{0}' (expected six hex digits, e.g. FFA500)")]
    InvalidColor(String),

    #[error("unknown token category '{0}'")]
    UnknownTokenKind(String),

    #[error("unknown font style '{0}' (expected 'bold' or 'normal')")]
    UnknownFontStyle(String),
}

/// Ways a run request can fail before producing output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("{0}")]
    Network(String),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}
