//! Two scripted dictation sessions against a shared history, then a
//! merge-to-live pass and the final export document.
//!
//! Run with: cargo run --example scripted_session

use std::sync::Arc;

use anyhow::Result;
use echonote::{
    EngineFactory, LogSink, RecognitionConfig, RecognitionEngine, RecognitionResult, ResultEvent,
    ScriptedEngine, SessionController, SessionStore,
};
use tokio::sync::Mutex;

fn factory_for(lines: Vec<&'static str>) -> EngineFactory {
    Box::new(move |_config| {
        let events = lines
            .iter()
            .enumerate()
            .map(|(i, _)| {
                // Engines re-deliver earlier slots; result_index points at the
                // first new one.
                let results = lines[..=i]
                    .iter()
                    .map(|line| RecognitionResult::final_text(*line))
                    .collect();
                ResultEvent::new(i, results)
            })
            .collect();
        Ok(Box::new(ScriptedEngine::from_results(events)) as Box<dyn RecognitionEngine>)
    })
}

async fn dictate(store: Arc<Mutex<SessionStore>>, lines: Vec<&'static str>) -> Result<()> {
    let mut controller = SessionController::new(
        RecognitionConfig::default(),
        Some(factory_for(lines)),
        store,
        Box::new(LogSink),
    );
    let run = controller.start().await?;
    controller.drive(run).await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store = Arc::new(Mutex::new(SessionStore::new()));

    dictate(Arc::clone(&store), vec!["first dictation pass"]).await?;
    dictate(Arc::clone(&store), vec!["second pass", "with two fragments"]).await?;

    // A fresh controller replays the whole history into its live buffer.
    let mut reviewer = SessionController::new(
        RecognitionConfig::default(),
        None,
        Arc::clone(&store),
        Box::new(LogSink),
    );
    reviewer.merge_history_to_live().await?;
    println!("merged live transcript:\n{}\n", reviewer.live_text());

    let document = reviewer.export_document().await;
    println!("{}", document.to_json()?);

    Ok(())
}
