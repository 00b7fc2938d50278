// tests/custom_lexicon.rs
// The analyzer over caller-supplied lexicons: in-code entries, the JSON
// loader and the classic tab-separated loader. Context rules (negation,
// boosters, contrast, punctuation emphasis) must work the same no matter
// where the lexicon came from.

use vader_sentiment_analyzer::{Lexicon, SentimentAnalyzer, SentimentScores};

fn assert_scores(
    analyzer: &SentimentAnalyzer,
    text: &str,
    neg: f64,
    neu: f64,
    pos: f64,
    compound: f64,
) {
    let scores = analyzer.polarity_scores(text);
    let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
    assert!(
        close(scores.neg, neg)
            && close(scores.neu, neu)
            && close(scores.pos, pos)
            && close(scores.compound, compound),
        "{text:?}: got {scores:?}, expected neg={neg} neu={neu} pos={pos} compound={compound}"
    );
}

fn ops_lexicon() -> Lexicon {
    Lexicon::from_entries([("stellar", 3.0), ("meltdown", -2.8), ("glitch", -1.4)])
}

#[test]
fn scores_with_an_in_code_lexicon() {
    let analyzer = SentimentAnalyzer::with_lexicon(ops_lexicon());
    assert_scores(&analyzer, "a stellar launch", 0.0, 0.2, 0.8, 0.6124);
    assert_scores(&analyzer, "total meltdown again", 0.655, 0.345, 0.0, -0.5859);
}

#[test]
fn context_rules_apply_to_custom_entries() {
    let analyzer = SentimentAnalyzer::with_lexicon(ops_lexicon());
    // bare "no" is not a negator, so glitch keeps its full weight
    assert_scores(&analyzer, "no glitch at all", 0.444, 0.556, 0.0, -0.34);
    // contrast marker shifts weight to the trailing clause
    assert_scores(
        &analyzer,
        "stellar launch but constant meltdown",
        0.486,
        0.28,
        0.234,
        -0.5719,
    );
    // exclamation marks amplify
    assert_scores(&analyzer, "a stellar launch!!", 0.0, 0.179, 0.821, 0.6792);
}

#[test]
fn json_loader_matches_in_code_entries() {
    let from_json =
        Lexicon::from_json_str(r#"{"stellar": 3.0, "meltdown": -2.8, "glitch": -1.4}"#).unwrap();
    let json_analyzer = SentimentAnalyzer::with_lexicon(from_json);
    let entries_analyzer = SentimentAnalyzer::with_lexicon(ops_lexicon());
    for text in [
        "a stellar launch",
        "no glitch at all",
        "stellar launch but constant meltdown",
    ] {
        assert_eq!(
            json_analyzer.polarity_scores(text),
            entries_analyzer.polarity_scores(text),
            "{text:?}"
        );
    }
    assert_scores(&json_analyzer, "a stellar launch", 0.0, 0.2, 0.8, 0.6124);
}

#[test]
fn tsv_loader_feeds_the_analyzer() {
    let lexicon = Lexicon::from_tsv_str("abysmal\t-3.1\nzesty\t2.1\n").unwrap();
    let analyzer = SentimentAnalyzer::with_lexicon(lexicon);
    assert_scores(
        &analyzer,
        "what an abysmal effort",
        0.577,
        0.423,
        0.0,
        -0.6249,
    );
    // "little" is a dampening booster, not a lexicon word
    assert_scores(&analyzer, "a zesty little dish", 0.0, 0.392, 0.608, 0.4767);
}

#[test]
fn injected_lexicon_replaces_the_bundled_one() {
    let bundled = SentimentAnalyzer::new();
    let custom = SentimentAnalyzer::with_lexicon(ops_lexicon());

    // words the other lexicon does not know score fully neutral
    assert_eq!(
        bundled.polarity_scores("a stellar launch"),
        SentimentScores {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0
        }
    );
    assert_eq!(
        custom.polarity_scores("This is a great product"),
        SentimentScores {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0
        }
    );
    assert_scores(&custom, "a stellar launch", 0.0, 0.2, 0.8, 0.6124);

    assert!(custom.lexicon().contains("stellar"));
    assert!(!custom.lexicon().contains("great"));
    assert_eq!(custom.lexicon().len(), 3);
    assert!(bundled.lexicon().contains("great"));
}
