use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use echonote::{
    Config, EngineFactory, LogSink, RecognitionConfig, RecognitionResult, ResultEvent,
    ScriptedEngine, SessionController, SessionStore,
};
use tokio::sync::Mutex;
use tracing::info;

/// Dictation session demo: runs one scripted recognition session and prints
/// the export document.
#[derive(Debug, Parser)]
#[command(name = "echonote")]
struct Args {
    /// Path to a config file (resolved by the `config` crate)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the recognition language (BCP-47 tag)
    #[arg(short, long)]
    language: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut recognition = match &args.config {
        Some(path) => {
            let cfg = Config::load(path)?;
            info!("Loaded config: {}", cfg.service.name);
            cfg.recognition.into()
        }
        None => RecognitionConfig::default(),
    };
    if let Some(language) = args.language {
        recognition.language = language;
    }

    let store = Arc::new(Mutex::new(SessionStore::new()));
    let factory: EngineFactory = Box::new(|_config| {
        Ok(Box::new(ScriptedEngine::from_results(vec![
            ResultEvent::new(0, vec![RecognitionResult::interim_text("hello")]),
            ResultEvent::new(0, vec![RecognitionResult::final_text("hello this is echonote")]),
            ResultEvent::new(
                1,
                vec![
                    RecognitionResult::final_text("hello this is echonote"),
                    RecognitionResult::final_text("does the live transcript work"),
                ],
            ),
        ])) as Box<dyn echonote::RecognitionEngine>)
    });

    let mut controller =
        SessionController::new(recognition, Some(factory), Arc::clone(&store), Box::new(LogSink));

    let run = controller.start().await?;
    controller.drive(run).await;

    let document = controller.export_document().await;
    println!("{}", document.to_json()?);

    Ok(())
}
