use std::collections::HashMap;

pub mod keywords;

pub use keywords::{KeywordError, builtin_keywords, load_keywords};

pub const DEFAULT_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    Relevant(f32),
    BelowThreshold(f32),
}

impl Gate {
    pub fn score(&self) -> f32 {
        match self {
            Gate::Relevant(s) | Gate::BelowThreshold(s) => *s,
        }
    }
}

/// Lowercases the text and maps every character that is neither an ASCII word
/// character nor whitespace to a single space, so punctuation acts as a
/// separator rather than being deleted.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if is_word_char(ch) || ch.is_whitespace() {
            out.push(ch);
        } else {
            out.push(' ');
        }
    }
    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Splits on whitespace runs. Leading and trailing runs still delimit an
/// empty token, so the denominator of the relevance score counts them; this
/// keeps "covid." and "covid " scoring identically.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_ws = false;
    for (idx, ch) in normalized.char_indices() {
        if ch.is_whitespace() {
            if !in_ws {
                tokens.push(&normalized[start..idx]);
                in_ws = true;
            }
        } else if in_ws {
            start = idx;
            in_ws = false;
        }
    }
    if in_ws {
        tokens.push("");
    } else {
        tokens.push(&normalized[start..]);
    }
    tokens
}

pub fn word_counts<'a>(tokens: &[&'a str]) -> HashMap<&'a str, u32> {
    let mut counts = HashMap::new();
    for &token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Ratio of matched-keyword occurrences to total token count. The tokenizer
/// always yields at least one token, so the denominator is never zero; a
/// non-finite score is still mapped to 0.0 as a guard.
pub fn compute_relevance(text: &str, keywords: &[String]) -> f32 {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    let counts = word_counts(&tokens);

    let mut hits = 0u32;
    for keyword in keywords {
        if let Some(&n) = counts.get(keyword.as_str()) {
            hits += n;
        }
    }

    let score = hits as f32 / tokens.len() as f32;
    if score.is_finite() { score } else { 0.0 }
}

pub fn gate(text: &str, keywords: &[String], threshold: f32) -> Gate {
    let score = compute_relevance(text, keywords);
    if score < threshold {
        Gate::BelowThreshold(score)
    } else {
        Gate::Relevant(score)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/relevance/tests.rs"]
mod tests;
