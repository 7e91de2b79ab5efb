use thiserror::Error;

/// Errors returned by fallible core operations
///
/// Illegal state transitions are not errors; they are silent no-ops on
/// [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
