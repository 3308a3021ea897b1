//! Compact badge labels for constrained UI chips

use regex::Regex;
use std::sync::LazyLock;

/// Words skipped when falling back to the title text.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "and", "or", "for", "with", "to", "in", "on", "by", "at",
];

struct BadgePatterns {
    led: Regex,
    delta: Regex,
    amount: Regex,
    count: Regex,
}

/// Compiled once; `badge_summary` runs per mined achievement.
static PATTERNS: LazyLock<BadgePatterns> = LazyLock::new(|| BadgePatterns {
    led: Regex::new(r"(?i)\b(led|managed)\s+(?:a\s+)?(?:team\s+of\s+)?(\d+)\s*(\w*)")
        .expect("Invalid led/managed badge regex"),
    delta: Regex::new(r"(?i)\b(\w+)\s+by\s+(\d+(?:\.\d+)?\s*%)")
        .expect("Invalid delta badge regex"),
    amount: Regex::new(r"(?i)\$\s*[\d,]+(?:\.\d+)?\s*(?:k|m|b|thousand|million|billion)?\b")
        .expect("Invalid amount badge regex"),
    count: Regex::new(r"\b(\d[\d,]*\+?)\s+([A-Za-z]\w*)").expect("Invalid count badge regex"),
});

/// Produce a label of at most four words for a badge chip, from an
/// achievement title and description. Pure helper: same inputs, same label.
///
/// Patterns are tried in priority order against the title first, then the
/// description; the first match wins. With no match, the label is the first
/// four non-stopword words of the title.
pub fn badge_summary(title: &str, description: &str) -> String {
    for text in [title, description] {
        if let Some(caps) = PATTERNS.led.captures(text) {
            let noun = caps.get(3).map(|m| m.as_str()).unwrap_or("");
            if noun.is_empty() {
                return format!("{} {}", capitalize(&caps[1]), &caps[2]);
            }
            return format!("{} {} {}", capitalize(&caps[1]), &caps[2], capitalize(noun));
        }
    }

    for text in [title, description] {
        if let Some(caps) = PATTERNS.delta.captures(text) {
            let delta: String = caps[2].split_whitespace().collect();
            return format!("{} by {}", capitalize(&caps[1]), delta);
        }
    }

    for text in [title, description] {
        if let Some(m) = PATTERNS.amount.find(text) {
            return m.as_str().split_whitespace().collect();
        }
    }

    for text in [title, description] {
        if let Some(caps) = PATTERNS.count.captures(text) {
            return format!("{} {}", &caps[1], capitalize(&caps[2]));
        }
    }

    title
        .split_whitespace()
        .filter(|word| {
            let clean = word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            !STOPWORDS.contains(&clean.as_str())
        })
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
