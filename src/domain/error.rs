use thiserror::Error;

/// Failures the core operations can report. An empty result (no nodes,
/// no category match, unreachable target) is never an error.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
