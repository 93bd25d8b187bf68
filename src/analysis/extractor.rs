//! Keyword and phrase extraction

use crate::analysis::normalizer::Normalizer;
use crate::error::{Result, ResumeTailorError};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Default minimum length for single-word keywords.
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 2;

/// A deduplicated set of keyword tokens derived from one piece of text.
///
/// Tokens are trimmed and never empty. By default they are folded to
/// lowercase at insert, so uniqueness is case-insensitive; a case-preserving
/// set keeps tokens as given for case-sensitive comparisons. Order is
/// irrelevant but iteration is deterministic. Serializes as a plain array.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    tokens: BTreeSet<String>,
    #[serde(skip)]
    preserve_case: bool,
}

impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for KeywordSet {}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set that keeps token case as given instead of folding to lowercase.
    pub fn case_preserving() -> Self {
        Self {
            tokens: BTreeSet::new(),
            preserve_case: true,
        }
    }

    /// Inserts a token, rejecting empty or whitespace-only input. Unless the
    /// set is case-preserving, the token is folded to lowercase first.
    /// Returns true if the token was not already present.
    pub fn insert(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        if self.preserve_case {
            self.tokens.insert(token.to_string())
        } else {
            self.tokens.insert(token.to_lowercase())
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    pub fn union(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet {
            tokens: self.tokens.union(&other.tokens).cloned().collect(),
            preserve_case: self.preserve_case,
        }
    }

    /// Tokens sorted for display.
    pub fn to_vec(&self) -> Vec<String> {
        self.tokens.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

/// Extracts single-token and multi-word keywords from raw text.
///
/// Single tokens go through normalize -> lowercase -> word split -> stop-word
/// and length filters. Multi-word phrases come from a fixed catalogue and are
/// matched case-insensitively as substrings, so stop-word filtering cannot
/// break them apart.
pub struct KeywordExtractor {
    normalizer: Normalizer,
    stop_words: HashSet<&'static str>,
    word: Regex,
    phrase_matcher: AhoCorasick,
    phrases: Vec<&'static str>,
    min_length: usize,
    case_sensitive: bool,
}

/// Stop words filtered out of single-token keywords.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "a", "an",
];

/// Multi-word technical and soft-skill phrases, grouped by rough category.
/// Every phrase found in the text is added as a single keyword.
const PHRASE_CATALOGUE: &[&[&str]] = &[
    // data & AI
    &[
        "machine learning",
        "artificial intelligence",
        "data science",
        "deep learning",
        "natural language processing",
    ],
    // engineering
    &[
        "software engineering",
        "software development",
        "web development",
        "mobile development",
    ],
    // operations
    &[
        "database management",
        "system administration",
        "cloud computing",
        "continuous integration",
    ],
    // quality
    &["quality assurance", "test automation", "code review"],
    // analysis
    &["business analysis", "data analysis", "requirements gathering"],
    // management
    &["project management", "product management", "team leadership"],
    // customer-facing
    &["customer service", "technical writing", "public speaking"],
    // ways of working
    &["problem solving", "critical thinking", "time management"],
];

impl KeywordExtractor {
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_MIN_KEYWORD_LENGTH, false)
    }

    pub fn with_options(min_length: usize, case_sensitive: bool) -> Result<Self> {
        let phrases: Vec<&'static str> = PHRASE_CATALOGUE.iter().flat_map(|c| c.iter().copied()).collect();

        let phrase_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&phrases)
            .map_err(|e| {
                ResumeTailorError::Configuration(format!("Failed to build phrase matcher: {}", e))
            })?;

        let word = Regex::new(r"\b\w+\b").expect("Invalid word regex");

        Ok(Self {
            normalizer: Normalizer::new(),
            stop_words: STOP_WORDS.iter().copied().collect(),
            word,
            phrase_matcher,
            phrases,
            min_length,
            case_sensitive,
        })
    }

    /// Extracts the keyword set for `text` with the configured minimum length.
    /// Empty text yields an empty set.
    pub fn extract(&self, text: &str) -> KeywordSet {
        self.extract_with_min_length(text, self.min_length)
    }

    pub fn extract_with_min_length(&self, text: &str, min_length: usize) -> KeywordSet {
        let mut keywords = if self.case_sensitive {
            KeywordSet::case_preserving()
        } else {
            KeywordSet::new()
        };
        if text.trim().is_empty() {
            return keywords;
        }

        let cleaned = self.normalizer.normalize(text);
        let cased = if self.case_sensitive {
            cleaned
        } else {
            cleaned.to_lowercase()
        };

        for m in self.word.find_iter(&cased) {
            let token = m.as_str();
            if token.chars().count() >= min_length && !self.stop_words.contains(token) {
                keywords.insert(token);
            }
        }

        // Phrases are inserted in their catalogue form, case-insensitively,
        // independent of the single-token filters above.
        for m in self.phrase_matcher.find_iter(&cased) {
            keywords.insert(self.phrases[m.pattern().as_usize()]);
        }

        keywords
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
