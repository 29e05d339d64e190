use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// A completed, immutable dictation result.
///
/// Created only when a session ends with non-empty finalized text; destroyed
/// only by explicit deletion. The serde field names (`id`, `text`,
/// `createdAt`, `lang`) are part of the export format and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,

    /// Finalized transcript, space-joined.
    pub text: String,

    /// When the session ended (ISO-8601 in the export document).
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Recognition language as a BCP-47 tag.
    #[serde(rename = "lang")]
    pub language: String,
}

/// The durable export document: the current live finalized text plus the
/// full history, newest session first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub live: String,
    pub sessions: Vec<SessionRecord>,
}

impl ExportDocument {
    /// Pretty-printed JSON, the exact bytes written on export.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Ordered collection of completed session records, newest first.
///
/// The store exclusively owns the history; collaborators read snapshots but
/// never hold a mutable reference.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: Vec<SessionRecord>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive a completed session at the front of the history.
    ///
    /// Callers must trim `text` and guard against emptiness first; an empty
    /// text here is a caller bug, not a store-level error.
    pub fn add(&mut self, text: impl Into<String>, language: impl Into<String>) -> SessionRecord {
        let text = text.into();
        debug_assert!(
            !text.trim().is_empty(),
            "callers must trim text and skip empty sessions"
        );

        let record = SessionRecord {
            id: format!("sess_{}", Uuid::new_v4().simple()),
            text,
            created_at: Utc::now(),
            language: language.into(),
        };
        info!(
            session_id = %record.id,
            chars = record.text.len(),
            lang = %record.language,
            "Archived dictation session"
        );
        self.records.insert(0, record.clone());
        record
    }

    /// Remove the record with the given id. A no-op if no such record exists.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        if removed {
            info!(session_id = %id, "Deleted dictation session");
        } else {
            debug!(session_id = %id, "Delete requested for unknown session id");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&SessionRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The full history, newest first.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Concatenate every record's text in history order, blank-line
    /// separated, for replaying into the live buffer. Does not mutate.
    pub fn merge_all_to_text(&self) -> String {
        self.records
            .iter()
            .map(|record| record.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Snapshot the history together with the current live finalized text.
    pub fn serialize(&self, live: impl Into<String>) -> ExportDocument {
        ExportDocument {
            live: live.into(),
            sessions: self.records.clone(),
        }
    }
}
