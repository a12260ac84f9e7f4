use lexicon::{KeywordSet, Lexicon, Stopwords};
use nlp::{DictionaryTranslator, Language, NoTranslation, Translate};
use scoring::{ScoringPipeline, SentimentScorer};

fn to_strings(lemmas: &[&str]) -> Vec<String> {
    lemmas.iter().map(|l| l.to_string()).collect()
}

fn build_pipeline(translator: Box<dyn Translate>) -> ScoringPipeline {
    let primary = Lexicon::from_entries([("gut", 0.8), ("schlecht", -0.8)]);
    let secondary = Lexicon::from_entries([("boring", -0.4)]);
    let scorer = SentimentScorer::new(
        primary,
        secondary,
        translator,
        Language::German,
        Language::English,
    );
    ScoringPipeline::new(scorer, Stopwords::default())
}

#[test]
fn scores_single_keyword_post_end_to_end() {
    let pipeline = build_pipeline(Box::new(NoTranslation));
    let keywords = KeywordSet::from_lemmas(["film"]);
    let lemmas = to_strings(&["der", "film", "ist", "sehr", "gut"]);

    let document = pipeline.score(42, "Der Film ist sehr gut", &lemmas, &keywords);

    assert!(document.is_relevant());
    assert_eq!(document.windows().len(), 1);

    let window = &document.windows()["film"];
    let captured: Vec<(&str, i32)> = window
        .tokens()
        .iter()
        .map(|t| (t.lemma(), t.distance_weight()))
        .collect();
    assert_eq!(
        captured,
        vec![("der", 4), ("ist", 4), ("sehr", 3), ("gut", 2)]
    );

    // Only "gut" scores: 0.8 * 2 = 1.6, positive scale -> 0.8; the mean
    // over four tokens is 0.2, compressed by the cube root.
    let expected = 0.2f64.powf(1.0 / 3.0);
    let sentiment = window.sentiment().unwrap();
    assert!(sentiment > 0.0);
    assert!((sentiment - expected).abs() < 1e-12);

    // A single window carries the document score unchanged.
    assert_eq!(document.overall_sentiment(), Some(sentiment));
}

#[test]
fn negation_lowers_the_score() {
    let pipeline = build_pipeline(Box::new(NoTranslation));
    let keywords = KeywordSet::from_lemmas(["film"]);

    let plain = pipeline.score(
        1,
        "text",
        &to_strings(&["der", "film", "gut"]),
        &keywords,
    );
    let negated = pipeline.score(
        2,
        "text",
        &to_strings(&["der", "film", "nicht", "gut"]),
        &keywords,
    );

    let plain_score = plain.overall_sentiment().unwrap();
    let negated_score = negated.overall_sentiment().unwrap();
    assert!(negated_score < plain_score);
}

#[test]
fn lexicon_miss_falls_back_through_translation() {
    let translator = DictionaryTranslator::from_entries(
        [("langweilig", "boring")],
        Language::German,
        Language::English,
    );
    let pipeline = build_pipeline(Box::new(translator));
    let keywords = KeywordSet::from_lemmas(["film"]);

    let document = pipeline.score(
        1,
        "text",
        &to_strings(&["der", "film", "langweilig"]),
        &keywords,
    );

    let window = &document.windows()["film"];
    let langweilig = window
        .trace()
        .iter()
        .find(|score| score.lemma == "langweilig")
        .unwrap();
    assert_eq!(langweilig.polarity, -0.4);
    assert!(document.overall_sentiment().unwrap() < 0.0);
}

#[test]
fn repeated_keyword_keeps_last_occurrence_window() {
    let pipeline = build_pipeline(Box::new(NoTranslation));
    let keywords = KeywordSet::from_lemmas(["film"]);
    let lemmas = to_strings(&[
        "film", "gut", "dann", "kam", "wende", "leider", "film", "schlecht",
    ]);

    let document = pipeline.score(1, "text", &lemmas, &keywords);

    // Both occurrences anchor a window, the later one wins the key.
    assert_eq!(document.windows().len(), 1);
    let window = &document.windows()["film"];
    assert!(window.tokens().iter().any(|t| t.lemma() == "schlecht"));
    assert!(window.sentiment().unwrap() < 0.0);
}

#[test]
fn hashtag_keyword_variant_anchors_a_window() {
    let pipeline = build_pipeline(Box::new(NoTranslation));
    let keywords = KeywordSet::from_lemmas(["film", "#film"]);

    let document = pipeline.score(
        1,
        "text",
        &to_strings(&["#film", "gut"]),
        &keywords,
    );

    assert!(document.is_relevant());
    assert!(document.windows().contains_key("#film"));
    assert!(document.overall_sentiment().unwrap() > 0.0);
}

#[test]
fn irrelevant_posts_are_not_aggregated() {
    let pipeline = build_pipeline(Box::new(NoTranslation));
    let keywords = KeywordSet::from_lemmas(["film"]);

    let document = pipeline.score(
        1,
        "text",
        &to_strings(&["heute", "nur", "wetter"]),
        &keywords,
    );

    assert!(!document.is_relevant());
    assert!(document.overall_sentiment().is_none());
}
