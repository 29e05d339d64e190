use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::engine::{EngineEvent, EngineFactory, RecognitionEngine, ResultEvent};
use crate::error::{EchoNoteError, Result};
use crate::sink::TranscriptSink;
use crate::store::SessionStore;
use crate::transcript::TranscriptAggregator;

use super::config::RecognitionConfig;
use super::state::SessionState;

/// Handle to one engine instance's event stream.
///
/// Events must be fed back through [`SessionController::handle_event`] tagged
/// with this epoch; the controller discards events carrying a superseded
/// epoch, which is how in-flight results from a stopped instance are dropped.
#[derive(Debug)]
pub struct EngineRun {
    pub epoch: u64,
    pub events: mpsc::Receiver<EngineEvent>,
}

/// State machine governing one dictation session's lifecycle.
///
/// All transitions happen inside the handler for a single event (engine
/// callback or user action); the controller is driven from one task and
/// holds no locks of its own. The session history lives in a shared
/// [`SessionStore`] so it survives across controller instances: `Stopped`
/// and `Errored` are terminal, and a fresh controller is needed to dictate
/// again.
pub struct SessionController {
    config: RecognitionConfig,
    state: SessionState,
    aggregator: TranscriptAggregator,
    engine: Option<Box<dyn RecognitionEngine>>,
    factory: Option<EngineFactory>,
    store: Arc<Mutex<SessionStore>>,
    sink: Box<dyn TranscriptSink>,
    /// Identity of the currently active engine instance. Bumped on every
    /// (re)start and on pause, so events from older instances are stale.
    epoch: u64,
    unavailable_notified: bool,
}

impl SessionController {
    /// Create a controller in the `Idle` state.
    ///
    /// `factory` is `None` when the host has no recognition capability at
    /// all; `start` then fails fast with [`EchoNoteError::EngineUnavailable`].
    pub fn new(
        config: RecognitionConfig,
        factory: Option<EngineFactory>,
        store: Arc<Mutex<SessionStore>>,
        sink: Box<dyn TranscriptSink>,
    ) -> Self {
        let aggregator = TranscriptAggregator::new(config.auto_punctuate);
        Self {
            config,
            state: SessionState::Idle,
            aggregator,
            engine: None,
            factory,
            store,
            sink,
            epoch: 0,
            unavailable_notified: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    /// The shared session history.
    pub fn store(&self) -> Arc<Mutex<SessionStore>> {
        Arc::clone(&self.store)
    }

    /// The finalized live transcript so far (plain-text export content).
    pub fn live_text(&self) -> String {
        self.aggregator.buffer().finalized_text()
    }

    /// The current interim preview; never persisted.
    pub fn interim_text(&self) -> &str {
        self.aggregator.buffer().interim()
    }

    /// Start a new session. Only valid from `Idle`.
    ///
    /// Clears the live buffer, builds a fresh engine instance from the
    /// factory and starts it. The caller owns the returned [`EngineRun`] and
    /// is responsible for feeding its events back, typically via [`drive`].
    ///
    /// [`drive`]: SessionController::drive
    pub async fn start(&mut self) -> Result<EngineRun> {
        if self.factory.is_none() {
            if !self.unavailable_notified {
                self.unavailable_notified = true;
                self.sink.publish_status(
                    self.state,
                    "Speech recognition is not available in this environment",
                );
            }
            return Err(EchoNoteError::EngineUnavailable);
        }
        if self.state != SessionState::Idle {
            return Err(EchoNoteError::InvalidTransition {
                from: self.state,
                to: SessionState::Listening,
            });
        }

        self.aggregator.clear();
        self.sink.publish_live("", "");
        let run = self.spawn_engine().await?;
        self.transition(SessionState::Listening)?;
        info!(lang = %self.config.language, "Dictation session starting");
        Ok(run)
    }

    /// Toggle between `Listening` and `Paused`.
    ///
    /// The engine abstraction has no true pause primitive, so pausing stops
    /// the current instance (superseding its remaining events) and resuming
    /// creates a new instance with the same configuration. The live buffer
    /// is preserved intact across the gap.
    ///
    /// Returns the new instance's [`EngineRun`] when resuming, `None` when
    /// pausing.
    pub async fn pause(&mut self) -> Result<Option<EngineRun>> {
        match self.state {
            SessionState::Listening => {
                self.transition(SessionState::Paused)?;
                self.supersede_engine().await;
                info!("Dictation paused");
                self.sink.publish_status(self.state, "Paused");
                Ok(None)
            }
            SessionState::Paused => {
                let run = self.spawn_engine().await?;
                self.transition(SessionState::Listening)?;
                info!("Dictation resumed");
                Ok(Some(run))
            }
            _ => Err(EchoNoteError::InvalidTransition {
                from: self.state,
                to: SessionState::Paused,
            }),
        }
    }

    /// Request the session to stop.
    ///
    /// From `Listening` this asks the engine to halt; finalization happens
    /// when the engine delivers `Ended`, not synchronously. From `Paused`
    /// there is no live engine instance left, so the session finalizes
    /// immediately.
    pub async fn stop(&mut self) -> Result<()> {
        let was_paused = self.state == SessionState::Paused;
        self.transition(SessionState::Stopped)?;

        if let Some(mut engine) = self.engine.take() {
            engine
                .stop()
                .await
                .map_err(|e| EchoNoteError::Engine(e.to_string()))?;
        } else if was_paused {
            self.finalize().await;
            self.sink.publish_status(self.state, "Stopped");
        }
        Ok(())
    }

    /// Switch the recognition language.
    ///
    /// While listening this stops the current engine instance and starts a
    /// fresh one with the updated configuration; any pending interim text is
    /// lost, finalized text is preserved. Outside of `Listening` only the
    /// configuration is updated.
    pub async fn change_language(&mut self, language: impl Into<String>) -> Result<Option<EngineRun>> {
        let language = language.into();
        info!(from = %self.config.language, to = %language, "Changing recognition language");
        self.config.language = language;

        if self.state != SessionState::Listening {
            return Ok(None);
        }

        self.supersede_engine().await;
        self.aggregator.discard_interim();
        self.sink.publish_live("", "");
        let run = self.spawn_engine().await?;
        Ok(Some(run))
    }

    /// Keep listening across pauses in speech (effective next engine instance).
    pub fn set_continuous(&mut self, on: bool) {
        self.config.continuous = on;
    }

    /// Emit partial hypotheses (effective next engine instance).
    pub fn set_interim_results(&mut self, on: bool) {
        self.config.interim_results = on;
    }

    /// Toggle the punctuation pass for subsequently finalized fragments.
    pub fn set_auto_punctuate(&mut self, on: bool) {
        self.config.auto_punctuate = on;
        self.aggregator.set_auto_punctuate(on);
    }

    /// Consume an engine event stream until the session reaches a terminal
    /// state or the stream closes.
    ///
    /// This is the single-task event loop: every event is handled to
    /// completion before the next one is taken.
    pub async fn drive(&mut self, mut run: EngineRun) {
        while let Some(event) = run.events.recv().await {
            self.handle_event(run.epoch, event).await;
            if self.state.is_terminal() || run.epoch != self.epoch {
                break;
            }
        }
    }

    /// React to one engine event.
    ///
    /// Events carrying an epoch other than the currently active instance's
    /// are discarded; a superseded instance must not touch the live buffer.
    pub async fn handle_event(&mut self, epoch: u64, event: EngineEvent) {
        if epoch != self.epoch {
            debug!(
                stale_epoch = epoch,
                current_epoch = self.epoch,
                "Discarding event from superseded engine instance"
            );
            return;
        }

        match event {
            EngineEvent::Started => {
                if self.state == SessionState::Listening {
                    info!(lang = %self.config.language, "Recognition engine listening");
                    self.sink.publish_status(self.state, "Listening…");
                }
            }
            EngineEvent::Result(result_event) => self.handle_result(&result_event),
            EngineEvent::Error(kind) => self.handle_error(kind).await,
            EngineEvent::Ended => self.handle_ended().await,
        }
    }

    fn handle_result(&mut self, event: &ResultEvent) {
        if self.state != SessionState::Listening {
            debug!(state = %self.state, "Ignoring result event outside Listening");
            return;
        }
        let update = self.aggregator.ingest(event);
        self.sink.publish_live(&update.final_delta, &update.interim);
    }

    async fn handle_error(&mut self, kind: String) {
        if !self.state.is_active() {
            debug!(state = %self.state, error = %kind, "Ignoring engine error outside an active session");
            return;
        }
        warn!(error = %kind, "Recognition engine reported an error");
        // Valid from both Listening and Paused.
        let _ = self.transition(SessionState::Errored);
        self.sink
            .publish_status(self.state, &format!("Error: {kind}"));

        if let Some(mut engine) = self.engine.take() {
            if let Err(e) = engine.stop().await {
                warn!(error = %e, "Failed to stop engine after error");
            }
        }
    }

    async fn handle_ended(&mut self) {
        match self.state {
            SessionState::Idle | SessionState::Errored => return,
            SessionState::Stopped => {}
            _ => {
                let _ = self.transition(SessionState::Stopped);
            }
        }
        self.engine = None;
        self.finalize().await;
        self.sink.publish_status(self.state, "Stopped");
    }

    /// Replace the live transcript with the merged history. Not permitted
    /// while listening; the history itself is left untouched.
    pub async fn merge_history_to_live(&mut self) -> Result<()> {
        if self.state == SessionState::Listening {
            return Err(EchoNoteError::Session(
                "cannot merge history into the live transcript while listening".to_string(),
            ));
        }
        let merged = self.store.lock().await.merge_all_to_text();
        if merged.trim().is_empty() {
            return Ok(());
        }
        self.aggregator.replace_live(merged.clone());
        self.sink.publish_live(&merged, "");
        Ok(())
    }

    /// Discard the live transcript without archiving it.
    pub fn clear_live(&mut self) {
        self.aggregator.clear();
        self.sink.publish_live("", "");
    }

    /// Snapshot the history plus the current live finalized text for export.
    pub async fn export_document(&self) -> crate::store::ExportDocument {
        self.store.lock().await.serialize(self.live_text())
    }

    async fn finalize(&mut self) {
        let text = self.live_text();
        self.aggregator.clear();

        if text.is_empty() {
            // Whitespace-only sessions are expected, not an error.
            debug!("Session ended with no finalized text, nothing to archive");
            return;
        }

        let store = Arc::clone(&self.store);
        let mut store = store.lock().await;
        store.add(text, self.config.language.clone());
        self.sink.publish_history(store.records());
    }

    /// Build and start a fresh engine instance for the current configuration.
    async fn spawn_engine(&mut self) -> Result<EngineRun> {
        let factory = self
            .factory
            .as_ref()
            .ok_or(EchoNoteError::EngineUnavailable)?;
        let mut engine = factory(&self.config).map_err(|e| EchoNoteError::Engine(e.to_string()))?;
        let events = engine
            .start()
            .await
            .map_err(|e| EchoNoteError::Engine(e.to_string()))?;
        debug!(engine = engine.name(), epoch = self.epoch + 1, "Engine instance started");
        self.engine = Some(engine);
        self.epoch += 1;
        Ok(EngineRun {
            epoch: self.epoch,
            events,
        })
    }

    /// Stop and drop the current engine instance, bumping the epoch so its
    /// in-flight events are discarded.
    async fn supersede_engine(&mut self) {
        self.epoch += 1;
        if let Some(mut engine) = self.engine.take() {
            if let Err(e) = engine.stop().await {
                warn!(error = %e, "Failed to stop superseded engine instance");
            }
        }
    }

    fn transition(&mut self, to: SessionState) -> Result<()> {
        if self.state.can_transition_to(to) {
            debug!("Session state: {} -> {}", self.state, to);
            self.state = to;
            Ok(())
        } else {
            Err(EchoNoteError::InvalidTransition {
                from: self.state,
                to,
            })
        }
    }
}
