//! Abstract speech-recognition engine interface
//!
//! The core never talks to a concrete recognition backend directly. An engine
//! is started per session (or per resume/language change, since the
//! abstraction has no true pause primitive) and reports back through an
//! ordered event stream: `Started`, zero or more `Result`s, then `Error`
//! and/or `Ended`. Events for one instance are always delivered serially.

mod scripted;

pub use scripted::ScriptedEngine;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::session::RecognitionConfig;

/// One recognized hypothesis for a result slot.
#[derive(Debug, Clone)]
pub struct RecognitionAlternative {
    /// Raw transcript text as produced by the engine.
    pub transcript: String,
}

/// One result slot in a recognition update. Only the top alternative is used.
#[derive(Debug, Clone)]
pub struct RecognitionResult {
    pub alternatives: Vec<RecognitionAlternative>,
    /// Final results never change again; non-final ones are volatile hypotheses.
    pub is_final: bool,
}

impl RecognitionResult {
    /// A final result carrying a single alternative.
    pub fn final_text(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative {
                transcript: transcript.into(),
            }],
            is_final: true,
        }
    }

    /// A non-final (interim) result carrying a single alternative.
    pub fn interim_text(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![RecognitionAlternative {
                transcript: transcript.into(),
            }],
            is_final: false,
        }
    }
}

/// One incoming recognition update.
///
/// `result_index` marks the first result in `results` that has not been
/// reported in a previous event; everything before it was already processed.
#[derive(Debug, Clone)]
pub struct ResultEvent {
    pub result_index: usize,
    pub results: Vec<RecognitionResult>,
}

impl ResultEvent {
    pub fn new(result_index: usize, results: Vec<RecognitionResult>) -> Self {
        Self {
            result_index,
            results,
        }
    }
}

/// Lifecycle and result events emitted by a recognition engine instance.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The engine began listening.
    Started,
    /// A recognition update with interim and/or final results.
    Result(ResultEvent),
    /// The engine failed; the kind string is host-provided and passed on verbatim.
    Error(String),
    /// The engine stopped listening. Always the last event of an instance.
    Ended,
}

/// Speech-recognition engine capability.
///
/// `start` and `stop` are requests: completion is only observed through the
/// event stream (`Started`, `Ended`, `Error`), never synchronously.
#[async_trait::async_trait]
pub trait RecognitionEngine: Send {
    /// Begin recognition.
    ///
    /// Returns a channel receiver that will receive this instance's events,
    /// in order, ending with `Ended`.
    async fn start(&mut self) -> Result<mpsc::Receiver<EngineEvent>>;

    /// Request the engine to stop listening.
    async fn stop(&mut self) -> Result<()>;

    /// Get engine name for logging.
    fn name(&self) -> &str;
}

/// Builds a fresh engine instance for a configuration.
///
/// The controller needs a factory rather than a single instance: pause/resume
/// and language changes tear the current instance down and create a new one.
pub type EngineFactory =
    Box<dyn Fn(&RecognitionConfig) -> Result<Box<dyn RecognitionEngine>> + Send + Sync>;
