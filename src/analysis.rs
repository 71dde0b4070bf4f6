//! Text heuristics for advisor replies
//!
//! Cheap keyword scans that decorate an answer with related tickers,
//! follow-up suggestions and a confidence score.

/// Company name → ticker
const KNOWN_SYMBOLS: &[(&str, &str)] = &[
    ("apple", "AAPL"),
    ("microsoft", "MSFT"),
    ("google", "GOOGL"),
    ("amazon", "AMZN"),
    ("tesla", "TSLA"),
    ("nvidia", "NVDA"),
    ("meta", "META"),
    ("netflix", "NFLX"),
];

/// Reply keyword → follow-up suggestion
const SUGGESTION_TRIGGERS: &[(&str, &str)] = &[
    ("consider", "Research recommended investments"),
    ("diversif", "Review portfolio diversification"),
    ("risk", "Assess your risk tolerance"),
    ("etf", "Explore ETF options"),
];

const MAX_SUGGESTIONS: usize = 4;

const BASE_CONFIDENCE: f32 = 0.7;
const HEDGING_WORDS: &[&str] = &["uncertain", "might"];
const EVIDENCE_PHRASES: &[&str] = &["data shows", "analysis indicates"];
const DETAILED_REPLY_CHARS: usize = 200;

/// Tickers of well-known companies mentioned by name, sorted and deduplicated
pub fn extract_symbols(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();

    let mut symbols: Vec<&'static str> = KNOWN_SYMBOLS
        .iter()
        .filter(|(name, _)| lower.contains(name))
        .map(|(_, symbol)| *symbol)
        .collect();

    symbols.sort_unstable();
    symbols.dedup();
    symbols
}

/// Follow-up actions suggested by the wording of a reply
pub fn extract_suggestions(reply: &str) -> Vec<&'static str> {
    let lower = reply.to_lowercase();

    SUGGESTION_TRIGGERS
        .iter()
        .filter(|(trigger, _)| lower.contains(trigger))
        .map(|(_, suggestion)| *suggestion)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Confidence in [0, 1] from hedging, evidence wording and reply length
pub fn confidence(reply: &str) -> f32 {
    let lower = reply.to_lowercase();
    let mut score = BASE_CONFIDENCE;

    if HEDGING_WORDS.iter().any(|w| lower.contains(w)) {
        score -= 0.2;
    }
    if EVIDENCE_PHRASES.iter().any(|p| lower.contains(p)) {
        score += 0.2;
    }
    if reply.chars().count() > DETAILED_REPLY_CHARS {
        score += 0.1;
    }

    score.clamp(0.0, 1.0)
}
