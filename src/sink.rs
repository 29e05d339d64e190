use tracing::{debug, info};

use crate::session::SessionState;
use crate::store::SessionRecord;

/// Narrow publish interface between the core and its UI/export collaborators.
///
/// Rendering, escaping and animation live entirely behind this seam; the
/// core only hands over plain strings and snapshots.
pub trait TranscriptSink: Send {
    /// One live update per ingested result event. `final_delta` is the newly
    /// finalized text (possibly empty); `interim` replaces any previously
    /// shown interim text.
    fn publish_live(&mut self, final_delta: &str, interim: &str);

    /// The session history changed; `records` is newest first.
    fn publish_history(&mut self, records: &[SessionRecord]);

    /// The session state changed, with a human-readable label.
    fn publish_status(&mut self, state: SessionState, message: &str);
}

/// A sink that logs updates through `tracing`. Default for the demo binary.
#[derive(Debug, Default)]
pub struct LogSink;

impl TranscriptSink for LogSink {
    fn publish_live(&mut self, final_delta: &str, interim: &str) {
        debug!(final_delta, interim, "Live transcript update");
    }

    fn publish_history(&mut self, records: &[SessionRecord]) {
        info!(sessions = records.len(), "Session history updated");
    }

    fn publish_status(&mut self, state: SessionState, message: &str) {
        info!(state = %state, "{message}");
    }
}

/// A sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl TranscriptSink for NullSink {
    fn publish_live(&mut self, _final_delta: &str, _interim: &str) {}

    fn publish_history(&mut self, _records: &[SessionRecord]) {}

    fn publish_status(&mut self, _state: SessionState, _message: &str) {}
}
