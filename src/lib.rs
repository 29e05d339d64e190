pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod sink;
pub mod store;
pub mod transcript;

pub use config::Config;
pub use engine::{
    EngineEvent, EngineFactory, RecognitionAlternative, RecognitionEngine, RecognitionResult,
    ResultEvent, ScriptedEngine,
};
pub use error::{EchoNoteError, Result};
pub use session::{EngineRun, RecognitionConfig, SessionController, SessionState};
pub use sink::{LogSink, NullSink, TranscriptSink};
pub use store::{ExportDocument, SessionRecord, SessionStore};
pub use transcript::{smart_punctuate, LiveBuffer, LiveUpdate, NormalizeFn, TranscriptAggregator};
