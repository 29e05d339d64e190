use crate::engine::ResultEvent;

use super::normalize::{smart_punctuate, NormalizeFn};

/// The in-progress transcript of one session.
///
/// Finalized fragments are append-only for the lifetime of a session; the
/// interim text is fully replaced on every update and never persisted.
#[derive(Debug, Default)]
pub struct LiveBuffer {
    finalized: Vec<String>,
    interim: String,
}

impl LiveBuffer {
    /// The finalized transcript so far, space-joined and trimmed.
    pub fn finalized_text(&self) -> String {
        self.finalized.join(" ").trim().to_string()
    }

    /// The most recent unfinalized hypothesis, if any.
    pub fn interim(&self) -> &str {
        &self.interim
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty() && self.interim.is_empty()
    }

    fn push_final(&mut self, fragment: String) {
        self.finalized.push(fragment);
    }

    fn set_interim(&mut self, interim: String) {
        self.interim = interim;
    }

    fn clear(&mut self) {
        self.finalized.clear();
        self.interim.clear();
    }
}

/// Per-result snapshot handed to the live-update feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveUpdate {
    /// Newly finalized (normalized) text this round; empty if none.
    pub final_delta: String,
    /// The full interim accumulator for this event. Replaces any previous
    /// interim state rather than appending to it.
    pub interim: String,
}

/// Merges recognition result events into a [`LiveBuffer`].
pub struct TranscriptAggregator {
    buffer: LiveBuffer,
    normalize: Option<NormalizeFn>,
}

impl TranscriptAggregator {
    /// Create an aggregator; when `auto_punctuate` is on, finalized fragments
    /// pass through [`smart_punctuate`].
    pub fn new(auto_punctuate: bool) -> Self {
        let mut agg = Self {
            buffer: LiveBuffer::default(),
            normalize: None,
        };
        agg.set_auto_punctuate(auto_punctuate);
        agg
    }

    /// Replace the punctuation pass with a custom normalizer.
    pub fn with_normalizer(normalize: NormalizeFn) -> Self {
        Self {
            buffer: LiveBuffer::default(),
            normalize: Some(normalize),
        }
    }

    /// Enable or disable the default punctuation pass.
    pub fn set_auto_punctuate(&mut self, on: bool) {
        self.normalize = if on {
            Some(Box::new(|text: &str| smart_punctuate(text)) as NormalizeFn)
        } else {
            None
        };
    }

    /// Merge one result event into the buffer.
    ///
    /// Only results at or after `result_index` are visited; earlier ones were
    /// already reported in a prior event. A `result_index` past the end of
    /// the results is clamped rather than treated as an error.
    pub fn ingest(&mut self, event: &ResultEvent) -> LiveUpdate {
        let mut final_delta = String::new();
        let mut interim = String::new();

        let start = event.result_index.min(event.results.len());
        for result in &event.results[start..] {
            let Some(alt) = result.alternatives.first() else {
                continue;
            };
            let transcript = alt.transcript.trim();
            if transcript.is_empty() {
                continue;
            }

            if result.is_final {
                let fragment = match &self.normalize {
                    Some(normalize) => normalize(transcript),
                    None => transcript.to_string(),
                };
                if !final_delta.is_empty() {
                    final_delta.push(' ');
                }
                final_delta.push_str(&fragment);
            } else {
                if !interim.is_empty() {
                    interim.push(' ');
                }
                interim.push_str(transcript);
            }
        }

        if !final_delta.is_empty() {
            self.buffer.push_final(final_delta.clone());
        }
        self.buffer.set_interim(interim.clone());

        LiveUpdate {
            final_delta,
            interim,
        }
    }

    pub fn buffer(&self) -> &LiveBuffer {
        &self.buffer
    }

    /// Discard the whole live buffer (session start and session end).
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Drop any pending interim text, keeping finalized fragments.
    ///
    /// Used when the engine instance is recreated: the superseded instance
    /// will never finalize its pending hypothesis.
    pub fn discard_interim(&mut self) {
        self.buffer.interim.clear();
    }

    /// Replace the finalized transcript wholesale (merge-history-to-live).
    pub fn replace_live(&mut self, text: String) {
        self.buffer.finalized = vec![text];
        self.buffer.interim.clear();
    }
}
