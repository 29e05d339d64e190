use std::fmt;

/// Lifecycle state of one dictation session.
///
/// `Stopped` and `Errored` are terminal: restarting dictation requires a
/// brand-new controller against the same session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No session in progress. Ready to start.
    Idle,
    /// Actively listening; result events are being aggregated.
    Listening,
    /// Listening suspended; the live buffer is preserved intact.
    Paused,
    /// Session ended normally. Terminal.
    Stopped,
    /// The engine reported an error. Terminal.
    Errored,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::Listening => write!(f, "Listening"),
            SessionState::Paused => write!(f, "Paused"),
            SessionState::Stopped => write!(f, "Stopped"),
            SessionState::Errored => write!(f, "Errored"),
        }
    }
}

impl SessionState {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SessionState) -> bool {
        matches!(
            (self, target),
            (SessionState::Idle, SessionState::Listening)
                | (SessionState::Listening, SessionState::Paused)
                | (SessionState::Listening, SessionState::Stopped)
                | (SessionState::Listening, SessionState::Errored)
                | (SessionState::Paused, SessionState::Listening)
                | (SessionState::Paused, SessionState::Stopped)
                | (SessionState::Paused, SessionState::Errored)
        )
    }

    /// An engine instance may exist in these states.
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Listening | SessionState::Paused)
    }

    /// Terminal states require a new session to continue dictating.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Stopped | SessionState::Errored)
    }
}
