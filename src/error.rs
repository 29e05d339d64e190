use thiserror::Error;

use crate::session::SessionState;

/// Top-level error type for EchoNote.
///
/// Engine-originated failures are terminal for the current session: the
/// controller moves to `Errored` and the user must start a brand-new session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EchoNoteError {
    /// No speech-recognition capability is present in the host environment.
    #[error("speech recognition is not available in this environment")]
    EngineUnavailable,

    /// The active engine reported an error; the kind string is surfaced verbatim.
    #[error("recognition engine error: {0}")]
    Engine(String),

    /// A user action was requested in a state that does not permit it.
    #[error("invalid session state transition: {from} -> {to}")]
    InvalidTransition {
        from: SessionState,
        to: SessionState,
    },

    #[error("session error: {0}")]
    Session(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for EchoNoteError {
    fn from(err: config::ConfigError) -> Self {
        EchoNoteError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for EchoNoteError {
    fn from(err: serde_json::Error) -> Self {
        EchoNoteError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for EchoNote operations.
pub type Result<T> = std::result::Result<T, EchoNoteError>;
