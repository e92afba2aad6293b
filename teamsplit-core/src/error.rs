/// Engine error types.
use thiserror::Error;

/// Errors raised by the grouping engine. Every operation is pure, so the same
/// input always fails the same way; nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Unknown tier, malformed rank label, or a division outside 1-4 for a divided tier.
    #[error("invalid rank \"{input}\": {reason}")]
    InvalidRank { input: String, reason: String },

    #[error("{expected} active participants are required, got {actual}")]
    RosterSize { expected: usize, actual: usize },

    /// Nothing left to show after clamping `top_k`.
    #[error("no team split selected (requested top {requested}, {available} available)")]
    EmptySelection { requested: usize, available: usize },

    #[error("duplicate participant id: {0}")]
    DuplicateParticipant(i64),
}

impl EngineError {
    pub(crate) fn invalid_rank(input: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidRank {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
