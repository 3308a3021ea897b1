//! Regex-based achievement extraction from free-text job descriptions
//!
//! No NLP model involved: a sentence fragment counts as an achievement only
//! when it matches one of a fixed set of quantitative patterns, and its
//! confidence is a sum of keyword bonuses and buzzword penalties. The whole
//! extractor is a pure function over its input string.

use crate::config::ExtractionConfig;
use crate::model::view::{AchievementIcon, ExtractedAchievement};
use aho_corasick::AhoCorasick;
use regex::{Captures, Regex};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Formats a title from the capture groups of a matched title pattern.
type TitleFormatter = fn(&Captures) -> String;

/// Buzzwords that drag a fragment's confidence down. Matched
/// case-insensitively, leftmost-longest, so "leveraged" counts once.
const BUZZWORDS: &[&str] = &[
    "synergy",
    "synergies",
    "leverage",
    "leveraged",
    "leveraging",
    "facilitate",
    "facilitated",
    "facilitating",
    "optimize",
    "optimized",
    "streamline",
    "streamlined",
    "collaborate",
    "collaborated",
    "coordinate",
    "coordinated",
    "responsible for",
    "involved in",
    "participated in",
    "contributed to",
    "assisted with",
    "worked on",
];

pub struct AchievementExtractor {
    config: ExtractionConfig,
    measurement_patterns: Vec<Regex>,
    category_keywords: Vec<(AchievementIcon, &'static [&'static str])>,
    buzzword_matcher: AhoCorasick,
    title_patterns: Vec<(Regex, TitleFormatter)>,
    whitespace_regex: Regex,
}

impl AchievementExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        let buzzword_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(BUZZWORDS)
            .expect("Invalid buzzword patterns");

        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            config,
            measurement_patterns: Self::measurement_patterns(),
            category_keywords: Self::category_keywords(),
            buzzword_matcher,
            title_patterns: Self::title_patterns(),
            whitespace_regex,
        }
    }

    /// Extract up to the configured maximum of achievement records from a
    /// job-description string, sorted by descending confidence.
    ///
    /// Never errors: input that clears no pattern simply yields fewer or
    /// zero records.
    pub fn extract_achievements(&self, description: &str) -> Vec<ExtractedAchievement> {
        if description.chars().count() < self.config.min_description_length {
            return Vec::new();
        }

        let mut candidates = Vec::new();

        for fragment in split_sentences(description) {
            let fragment = fragment.trim();
            if fragment.chars().count() < self.config.min_fragment_length {
                continue;
            }

            let Some((confidence, icon)) = self.score_fragment(fragment) else {
                continue;
            };

            if confidence > self.config.confidence_threshold {
                candidates.push(ExtractedAchievement {
                    title: self.build_title(fragment),
                    description: self.build_description(fragment),
                    icon,
                    confidence,
                });
            }
        }

        // Stable sort keeps document order among equal scores
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(self.config.max_achievements);
        candidates
    }

    /// Score a single fragment. Returns `None` when the measurement gate
    /// rejects it, otherwise the clamped confidence and the icon category.
    fn score_fragment(&self, fragment: &str) -> Option<(f32, AchievementIcon)> {
        if !self
            .measurement_patterns
            .iter()
            .any(|pattern| pattern.is_match(fragment))
        {
            return None;
        }

        let mut confidence = self.config.base_confidence;

        let words: HashSet<String> = fragment
            .unicode_words()
            .map(|word| word.to_lowercase())
            .collect();

        let mut icon = AchievementIcon::Award;
        for (category, keywords) in &self.category_keywords {
            let hits = keywords
                .iter()
                .filter(|keyword| words.contains(**keyword))
                .count();
            if hits > 0 {
                icon = *category;
                confidence += hits as f32 * self.config.keyword_bonus;
                break;
            }
        }

        let buzzword_count = self.buzzword_matcher.find_iter(fragment).count();
        confidence -= buzzword_count as f32 * self.config.buzzword_penalty;

        if fragment.chars().any(|c| c.is_ascii_digit()) {
            confidence += self.config.numeric_bonus;
        }

        Some((confidence.clamp(0.0, 1.0), icon))
    }

    /// Generate a short headline via the ordered title pattern table, first
    /// match wins. Falls back to the fragment's first four words, capitalized.
    fn build_title(&self, fragment: &str) -> String {
        for (pattern, formatter) in &self.title_patterns {
            if let Some(captures) = pattern.captures(fragment) {
                return formatter(&captures);
            }
        }

        fragment
            .split_whitespace()
            .take(4)
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Clean the source sentence into a short display description.
    fn build_description(&self, fragment: &str) -> String {
        let stripped = strip_leading_pronoun(fragment);
        let collapsed = self
            .whitespace_regex
            .replace_all(stripped, " ")
            .trim()
            .to_string();

        let truncated = if collapsed.chars().count() > self.config.max_description_length {
            let cut: String = collapsed
                .chars()
                .take(self.config.max_description_length.saturating_sub(3))
                .collect();
            format!("{}...", cut.trim_end())
        } else {
            collapsed
        };

        capitalize_first(&truncated)
    }

    /// Quantitative patterns gating the whole extraction. A fragment that
    /// matches none of these is not an achievement, whatever else it says.
    fn measurement_patterns() -> Vec<Regex> {
        let patterns = [
            // percentage with an improvement/reduction verb
            r"(?i)\b(?:increased|improved|reduced|decreased|grew|boosted|cut|raised|lowered|doubled|tripled)\b[^%]*?\d+(?:\.\d+)?\s*(?:%|percent)",
            // currency amounts, optional magnitude suffix
            r"(?i)[$€£]\s*\d[\d,]*(?:\.\d+)?\s*(?:k\b|m\b|b\b|bn\b|thousand|million|billion)?",
            r"(?i)\b\d[\d,]*(?:\.\d+)?\s*(?:thousand|million|billion)\s+(?:dollars|euros|pounds)\b",
            // team and headcount counts
            r"(?i)\b(?:team|group|staff)s?\s+of\s+\d+",
            r"(?i)\b(?:led|managed|supervised|mentored|trained|hired|onboarded)\b[^,;]*?\b\d+\s+(?:people|engineers|developers|designers|analysts|members|employees|interns|staff)\b",
            // time saved
            r"(?i)\b(?:saved|cut|freed\s+up)\b[^,;]*?\b\d+(?:\.\d+)?\s*(?:hours?|days?|weeks?|months?|minutes?)\b",
            // volume and scale counts with plural object nouns
            r"(?i)\b\d[\d,]*\+?\s+(?:clients?|users?|customers?|projects?|files?|records?|documents?|transactions?|requests?|downloads?|stores?|locations?|countries|markets?)\b",
            // awards and recognition
            r"(?i)\b(?:awarded|won|received|earned|named|recognized|honored)\b[^,;]*?\b(?:award|prize|medal|honor|recognition|title)s?\b",
            r"(?i)\b(?:employee|engineer|salesperson|performer)\s+of\s+the\s+(?:month|quarter|year)\b",
        ];

        patterns
            .iter()
            .map(|pattern| Regex::new(pattern).expect("Invalid measurement pattern"))
            .collect()
    }

    /// Icon categories in priority order: the first category with a keyword
    /// hit claims the fragment.
    fn category_keywords() -> Vec<(AchievementIcon, &'static [&'static str])> {
        vec![
            (
                AchievementIcon::Award,
                &[
                    "award",
                    "awarded",
                    "awards",
                    "won",
                    "winner",
                    "recognized",
                    "recognition",
                    "honored",
                    "prize",
                ][..],
            ),
            (
                AchievementIcon::Users,
                &[
                    "team",
                    "teams",
                    "led",
                    "managed",
                    "mentored",
                    "supervised",
                    "hired",
                    "trained",
                    "onboarded",
                    "people",
                ][..],
            ),
            (
                AchievementIcon::Target,
                &[
                    "delivered",
                    "launched",
                    "shipped",
                    "deployed",
                    "completed",
                    "migrated",
                    "achieved",
                    "exceeded",
                    "deadline",
                ][..],
            ),
            (
                AchievementIcon::TrendingUp,
                &[
                    "increased",
                    "grew",
                    "growth",
                    "improved",
                    "boosted",
                    "doubled",
                    "tripled",
                    "revenue",
                    "sales",
                    "reduced",
                    "decreased",
                ][..],
            ),
        ]
    }

    /// Ordered title pattern table, first match wins.
    fn title_patterns() -> Vec<(Regex, TitleFormatter)> {
        let table: Vec<(&str, TitleFormatter)> = vec![
            (
                r"(?i)\b(?:led|managed)\s+(?:a\s+)?team\s+of\s+(\d+)",
                |caps| format!("Led Team of {} People", &caps[1]),
            ),
            (
                r"(?i)\btransferred\s+([\d,]+)\s+\w+",
                |caps| format!("Transferred {} Items", &caps[1]),
            ),
            (
                r"(?i)\b(increased|improved|reduced|decreased|grew|boosted|cut|raised|doubled|tripled)\s+([\w\s]{1,30}?)\s+by\s+(\d+(?:\.\d+)?)\s*%",
                |caps| {
                    format!(
                        "{} {} by {}%",
                        capitalize_first(&caps[1]),
                        title_case(&caps[2]),
                        &caps[3]
                    )
                },
            ),
            (
                r"(?i)\bgenerated\s+\$\s*([\d,.]+\s*(?:k|m|b|thousand|million|billion)?)\b",
                |caps| format!("Generated ${}", caps[1].trim()),
            ),
            (
                r"(?i)\bsaved\s+\$\s*([\d,.]+\s*(?:k|m|b|thousand|million|billion)?)\b",
                |caps| format!("Saved ${}", caps[1].trim()),
            ),
            (
                r"(?i)\b([\d,]+\+?)\s+(clients?|users?|customers?|projects?|files?|records?|people)\b",
                |caps| format!("{} {}", &caps[1], title_case(&caps[2])),
            ),
        ];

        table
            .into_iter()
            .map(|(pattern, formatter)| {
                (
                    Regex::new(pattern).expect("Invalid title pattern"),
                    formatter,
                )
            })
            .collect()
    }
}

impl Default for AchievementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split prose into sentence fragments on terminal punctuation. A period
/// flanked by digits is a decimal point ("$2.5m", "3.5%"), not a boundary.
fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut fragments = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        if c == '.'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit())
        {
            continue;
        }
        fragments.push(&text[start..i]);
        start = i + 1;
    }
    if start < text.len() {
        fragments.push(&text[start..]);
    }
    fragments
}

fn strip_leading_pronoun(fragment: &str) -> &str {
    if let Some(prefix) = fragment.get(..2) {
        if prefix.eq_ignore_ascii_case("i ") {
            return &fragment[2..];
        }
    }
    if let Some(prefix) = fragment.get(..3) {
        if prefix.eq_ignore_ascii_case("we ") {
            return &fragment[3..];
        }
    }
    fragment
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
