//! Dictation session management
//!
//! This module provides the session state machine and the
//! `SessionController` that:
//! - drives the recognition engine lifecycle (start/pause/resume/stop)
//! - feeds result events through the transcript aggregator
//! - archives completed sessions into the shared `SessionStore`
//! - publishes live, history and status updates through a `TranscriptSink`

mod config;
mod controller;
mod state;

pub use config::RecognitionConfig;
pub use controller::{EngineRun, SessionController};
pub use state::SessionState;
