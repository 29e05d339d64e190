use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use super::{EngineEvent, RecognitionEngine, ResultEvent};

/// A recognition engine that replays a fixed script of events.
///
/// Used by the demo binary and by tests in place of a host-provided engine.
/// On `start` it emits `Started`, then the scripted events in order, then
/// `Ended`. A `stop` request skips whatever remains of the script, so the
/// instance still terminates with `Ended` like a real engine would.
pub struct ScriptedEngine {
    script: Vec<EngineEvent>,
    halt: Arc<AtomicBool>,
}

impl ScriptedEngine {
    pub fn new(script: Vec<EngineEvent>) -> Self {
        Self {
            script,
            halt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Convenience: a script consisting only of result events.
    pub fn from_results(results: Vec<ResultEvent>) -> Self {
        Self::new(results.into_iter().map(EngineEvent::Result).collect())
    }

    /// An engine that hears nothing and immediately ends.
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl RecognitionEngine for ScriptedEngine {
    async fn start(&mut self) -> Result<mpsc::Receiver<EngineEvent>> {
        let (tx, rx) = mpsc::channel(32);
        let script = std::mem::take(&mut self.script);
        let halt = Arc::clone(&self.halt);
        halt.store(false, Ordering::SeqCst);

        tokio::spawn(async move {
            if tx.send(EngineEvent::Started).await.is_err() {
                return;
            }
            for event in script {
                if halt.load(Ordering::SeqCst) {
                    debug!("Scripted engine halted, skipping remaining events");
                    break;
                }
                let errored = matches!(event, EngineEvent::Error(_));
                if tx.send(event).await.is_err() {
                    return;
                }
                if errored {
                    break;
                }
            }
            let _ = tx.send(EngineEvent::Ended).await;
        });

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.halt.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
