//! Live transcript aggregation
//!
//! This module turns the engine's interleaved interim/final result events
//! into a stable live transcript:
//! - `TranscriptAggregator` merges result events into a `LiveBuffer`
//! - `LiveBuffer` holds finalized fragments plus the volatile interim preview
//! - `normalize` applies the heuristic punctuation/capitalization pass

mod aggregator;
mod normalize;

pub use aggregator::{LiveBuffer, LiveUpdate, TranscriptAggregator};
pub use normalize::{smart_punctuate, NormalizeFn};
