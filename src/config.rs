use serde::Deserialize;

use crate::error::Result;
use crate::session::RecognitionConfig;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub recognition: RecognitionDefaults,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

/// Recognition defaults that seed a [`RecognitionConfig`] per session.
#[derive(Debug, Deserialize)]
pub struct RecognitionDefaults {
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
    pub auto_punctuate: bool,
}

impl From<RecognitionDefaults> for RecognitionConfig {
    fn from(defaults: RecognitionDefaults) -> Self {
        RecognitionConfig {
            language: defaults.language,
            continuous: defaults.continuous,
            interim_results: defaults.interim_results,
            auto_punctuate: defaults.auto_punctuate,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
