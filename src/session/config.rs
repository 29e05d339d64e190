use serde::{Deserialize, Serialize};

/// Configuration for one recognition session.
///
/// Immutable for the lifetime of an engine instance; changing the language
/// while listening forces the controller to stop and restart the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Recognition language as a BCP-47 tag (e.g. "en-US")
    pub language: String,

    /// Keep listening across pauses in speech
    pub continuous: bool,

    /// Emit non-final partial hypotheses
    pub interim_results: bool,

    /// Enable the grammar hint and the punctuation pass on finalized fragments
    pub auto_punctuate: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
            auto_punctuate: true,
        }
    }
}
