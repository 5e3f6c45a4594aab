use super::*;

fn kw() -> Vec<String> {
    builtin_keywords()
}

#[test]
fn test_all_keyword_tokens() {
    let score = compute_relevance("covid vaccine pandemic", &kw());
    assert!((score - 1.0).abs() < 1e-6);
}

#[test]
fn test_no_keyword_tokens() {
    let score = compute_relevance("the cat sat on the mat", &kw());
    assert_eq!(score, 0.0);
}

#[test]
fn test_keyword_multiplicity_counts() {
    let score = compute_relevance("covid covid flu", &kw());
    assert!((score - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_non_keywords_never_contribute() {
    let score = compute_relevance("flu flu flu flu", &kw());
    assert_eq!(score, 0.0);
}

#[test]
fn test_case_insensitive() {
    let a = compute_relevance("COVID Vaccine PANDEMIC", &kw());
    let b = compute_relevance("covid vaccine pandemic", &kw());
    assert_eq!(a, b);
}

#[test]
fn test_punctuation_becomes_separator() {
    // "covid." normalizes to "covid " and both carry a trailing empty token.
    let a = compute_relevance("covid.", &kw());
    let b = compute_relevance("covid ", &kw());
    assert_eq!(a, b);
    assert!((a - 0.5).abs() < 1e-6);
}

#[test]
fn test_tokenize_keeps_edge_artifacts() {
    assert_eq!(tokenize(" a "), vec!["", "a", ""]);
    assert_eq!(tokenize("a b"), vec!["a", "b"]);
    assert_eq!(tokenize(""), vec![""]);
    assert_eq!(tokenize("   "), vec!["", ""]);
}

#[test]
fn test_normalize_maps_non_word_chars() {
    assert_eq!(normalize("Covid-19, now!"), "covid 19  now ");
}

#[test]
fn test_punctuation_only_scores_zero() {
    let score = compute_relevance("...!!!", &kw());
    assert_eq!(score, 0.0);
}

#[test]
fn test_word_counts() {
    let tokens = ["covid", "covid", "mask"];
    let counts = word_counts(&tokens);
    assert_eq!(counts.get("covid"), Some(&2));
    assert_eq!(counts.get("mask"), Some(&1));
    assert_eq!(counts.get("flu"), None);
}

#[test]
fn test_gate_threshold_is_inclusive() {
    // 1 keyword hit over 10 tokens scores exactly 0.1.
    let text = "covid a b c d e f g h i";
    match gate(text, &kw(), DEFAULT_THRESHOLD) {
        Gate::Relevant(score) => assert!((score - 0.1).abs() < 1e-6),
        other => panic!("expected Relevant, got {other:?}"),
    }
}

#[test]
fn test_gate_below_threshold() {
    match gate("one covid mention in a much longer unrelated sentence overall", &kw(), 0.2) {
        Gate::BelowThreshold(score) => assert!(score < 0.2),
        other => panic!("expected BelowThreshold, got {other:?}"),
    }
}

#[test]
fn test_gate_score_accessor() {
    assert_eq!(Gate::Relevant(0.5).score(), 0.5);
    assert_eq!(Gate::BelowThreshold(0.05).score(), 0.05);
}
