// Unit tests for transcript aggregation and the punctuation pass.
//
// These cover the merge rules for interim/final results and the heuristic
// normalization applied to finalized fragments.

use echonote::{smart_punctuate, RecognitionResult, ResultEvent, TranscriptAggregator};

#[test]
fn test_smart_punctuate_capitalizes_and_terminates() {
    assert_eq!(smart_punctuate("hello world"), "Hello world.");
    assert_eq!(smart_punctuate("is this working"), "Is this working.");
}

#[test]
fn test_smart_punctuate_short_fragment_gets_no_period() {
    assert_eq!(smart_punctuate("ok"), "Ok", "length <= 8 must not gain a period");
}

#[test]
fn test_smart_punctuate_keeps_existing_terminator() {
    assert_eq!(smart_punctuate("already done."), "Already done.");
    assert_eq!(smart_punctuate("really?"), "Really?");
}

#[test]
fn test_smart_punctuate_capitalizes_after_terminators() {
    assert_eq!(
        smart_punctuate("one thing. another thing? third thing"),
        "One thing. Another thing? Third thing."
    );
}

#[test]
fn test_ingest_splits_final_and_interim() {
    let mut agg = TranscriptAggregator::new(true);
    let update = agg.ingest(&ResultEvent::new(
        0,
        vec![
            RecognitionResult::final_text("hello over there"),
            RecognitionResult::interim_text("and then"),
        ],
    ));

    assert_eq!(update.final_delta, "Hello over there.");
    assert_eq!(update.interim, "and then");
    assert_eq!(agg.buffer().finalized_text(), "Hello over there.");
    assert_eq!(agg.buffer().interim(), "and then");
}

#[test]
fn test_ingest_skips_results_before_result_index() {
    let mut agg = TranscriptAggregator::new(true);
    agg.ingest(&ResultEvent::new(
        0,
        vec![RecognitionResult::final_text("first fragment")],
    ));
    // The engine re-delivers slot 0; result_index says it was already reported.
    let update = agg.ingest(&ResultEvent::new(
        1,
        vec![
            RecognitionResult::final_text("first fragment"),
            RecognitionResult::final_text("second fragment"),
        ],
    ));

    assert_eq!(update.final_delta, "Second fragment.");
    assert_eq!(
        agg.buffer().finalized_text(),
        "First fragment. Second fragment.",
        "re-delivered results must not be duplicated"
    );
}

#[test]
fn test_replay_invariant_all_final_in_order() {
    let fragments = ["hello world", "is this working", "ok", "already done."];
    let mut agg = TranscriptAggregator::new(true);

    for (i, fragment) in fragments.iter().enumerate() {
        let mut results: Vec<RecognitionResult> = fragments[..i]
            .iter()
            .map(|f| RecognitionResult::final_text(*f))
            .collect();
        results.push(RecognitionResult::final_text(*fragment));
        agg.ingest(&ResultEvent::new(i, results));
    }

    let expected = fragments
        .iter()
        .map(|f| smart_punctuate(f))
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(agg.buffer().finalized_text(), expected);
}

#[test]
fn test_interim_is_volatile() {
    let mut agg = TranscriptAggregator::new(true);

    agg.ingest(&ResultEvent::new(
        0,
        vec![RecognitionResult::interim_text("half a thou")],
    ));
    assert_eq!(agg.buffer().interim(), "half a thou");
    assert_eq!(agg.buffer().finalized_text(), "", "interim text must never finalize on its own");

    // Next event carries no interim alternative: the snapshot is empty.
    let update = agg.ingest(&ResultEvent::new(
        0,
        vec![RecognitionResult::final_text("half a thought")],
    ));
    assert_eq!(update.interim, "");
    assert_eq!(agg.buffer().interim(), "");
    assert_eq!(agg.buffer().finalized_text(), "Half a thought.");
}

#[test]
fn test_result_index_is_clamped() {
    let mut agg = TranscriptAggregator::new(true);
    let update = agg.ingest(&ResultEvent::new(
        5,
        vec![RecognitionResult::final_text("out of range")],
    ));

    assert_eq!(update.final_delta, "");
    assert_eq!(update.interim, "");
    assert!(agg.buffer().is_empty());
}

#[test]
fn test_empty_and_whitespace_transcripts_are_dropped() {
    let mut agg = TranscriptAggregator::new(true);
    let update = agg.ingest(&ResultEvent::new(
        0,
        vec![
            RecognitionResult::final_text("   "),
            RecognitionResult::interim_text(""),
        ],
    ));

    assert_eq!(update.final_delta, "");
    assert!(agg.buffer().is_empty());
}

#[test]
fn test_result_without_alternatives_is_skipped() {
    let mut agg = TranscriptAggregator::new(true);
    let update = agg.ingest(&ResultEvent::new(
        0,
        vec![
            RecognitionResult {
                alternatives: vec![],
                is_final: true,
            },
            RecognitionResult::final_text("still here"),
        ],
    ));

    assert_eq!(update.final_delta, "Still here.");
}

#[test]
fn test_auto_punctuate_off_keeps_raw_text() {
    let mut agg = TranscriptAggregator::new(false);
    let update = agg.ingest(&ResultEvent::new(
        0,
        vec![RecognitionResult::final_text("hello world")],
    ));

    assert_eq!(update.final_delta, "hello world");
    assert_eq!(agg.buffer().finalized_text(), "hello world");
}

#[test]
fn test_custom_normalizer_is_pluggable() {
    let mut agg =
        TranscriptAggregator::with_normalizer(Box::new(|text: &str| text.to_uppercase()));
    let update = agg.ingest(&ResultEvent::new(
        0,
        vec![RecognitionResult::final_text("quiet words")],
    ));

    assert_eq!(update.final_delta, "QUIET WORDS");
}

#[test]
fn test_discard_interim_keeps_finalized_text() {
    let mut agg = TranscriptAggregator::new(true);
    agg.ingest(&ResultEvent::new(
        0,
        vec![
            RecognitionResult::final_text("kept fragment"),
            RecognitionResult::interim_text("pending"),
        ],
    ));

    agg.discard_interim();
    assert_eq!(agg.buffer().interim(), "");
    assert_eq!(agg.buffer().finalized_text(), "Kept fragment.");
}

#[test]
fn test_replace_live_overwrites_buffer() {
    let mut agg = TranscriptAggregator::new(true);
    agg.ingest(&ResultEvent::new(
        0,
        vec![RecognitionResult::final_text("old content")],
    ));

    agg.replace_live("merged history".to_string());
    assert_eq!(agg.buffer().finalized_text(), "merged history");
    assert_eq!(agg.buffer().interim(), "");
}
