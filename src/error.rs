use thiserror::Error;

use crate::protocol::ProtocolStage;

/// Failures at the edges of the engine. The engines themselves are total and never return these.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid ISO week id: {0:?} (expected YYYY-Www)")]
    InvalidWeekId(String),

    #[error("stage {attempted} cannot be recorded before {missing} is complete")]
    StageOutOfOrder {
        attempted: ProtocolStage,
        missing: ProtocolStage,
    },

    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
