//! Match score and tier derivation

use crate::analysis::matcher::MatchPartition;
use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Excellent => write!(f, "excellent"),
            Tier::Good => write!(f, "good"),
            Tier::Fair => write!(f, "fair"),
            Tier::Poor => write!(f, "poor"),
        }
    }
}

/// Integer match score in [0, 100] with its tier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub percent: u8,
    pub tier: Tier,
}

/// Derives scores from match partitions using configured tier thresholds.
pub struct ScoreCalculator {
    thresholds: ScoringConfig,
}

impl ScoreCalculator {
    pub fn new(thresholds: ScoringConfig) -> Self {
        Self { thresholds }
    }

    /// `floor(|matched| / |target| * 100)` clamped to [0, 100]; 0 when the
    /// target set is empty. Pure, never fails.
    pub fn score(&self, partition: &MatchPartition) -> Score {
        let percent = if partition.target_size == 0 {
            0
        } else {
            let ratio = partition.matched.len() as f64 / partition.target_size as f64;
            (ratio * 100.0).floor().clamp(0.0, 100.0) as u8
        };

        Score {
            percent,
            tier: self.tier_for(percent),
        }
    }

    fn tier_for(&self, percent: u8) -> Tier {
        if percent >= self.thresholds.excellent_threshold {
            Tier::Excellent
        } else if percent >= self.thresholds.good_threshold {
            Tier::Good
        } else if percent >= self.thresholds.fair_threshold {
            Tier::Fair
        } else {
            Tier::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::KeywordSet;
    use crate::analysis::matcher::KeywordMatcher;
    use crate::analysis::synonyms::SynonymTable;

    fn keyword_set(tokens: &[&str]) -> KeywordSet {
        tokens.iter().copied().collect()
    }

    fn calculator() -> ScoreCalculator {
        ScoreCalculator::new(ScoringConfig::default())
    }

    #[test]
    fn test_half_matched_is_fair() {
        let synonyms = SynonymTable::new();
        let matcher = KeywordMatcher::new(&synonyms);
        let candidate = keyword_set(&["python", "communication"]);
        let target = keyword_set(&["python", "communication", "leadership", "problem solving"]);

        let partition = matcher.match_keywords(&candidate, &target);
        let score = calculator().score(&partition);

        assert_eq!(score.percent, 50);
        assert_eq!(score.tier, Tier::Fair);
    }

    #[test]
    fn test_empty_target_scores_zero() {
        let synonyms = SynonymTable::new();
        let matcher = KeywordMatcher::new(&synonyms);
        let partition = matcher.match_keywords(&keyword_set(&["python"]), &KeywordSet::new());

        let score = calculator().score(&partition);

        assert_eq!(score.percent, 0);
        assert_eq!(score.tier, Tier::Poor);
    }

    #[test]
    fn test_percent_is_floored() {
        let synonyms = SynonymTable::new();
        let matcher = KeywordMatcher::new(&synonyms);
        let candidate = keyword_set(&["rust", "tokio"]);
        let target = keyword_set(&["rust", "tokio", "axum"]);

        let partition = matcher.match_keywords(&candidate, &target);
        let score = calculator().score(&partition);

        // 2/3 = 66.67 floors to 66
        assert_eq!(score.percent, 66);
        assert_eq!(score.tier, Tier::Fair);
    }

    #[test]
    fn test_tier_boundaries() {
        let calc = calculator();
        assert_eq!(calc.tier_for(100), Tier::Excellent);
        assert_eq!(calc.tier_for(85), Tier::Excellent);
        assert_eq!(calc.tier_for(84), Tier::Good);
        assert_eq!(calc.tier_for(70), Tier::Good);
        assert_eq!(calc.tier_for(50), Tier::Fair);
        assert_eq!(calc.tier_for(49), Tier::Poor);
        assert_eq!(calc.tier_for(0), Tier::Poor);
    }

    #[test]
    fn test_full_match_is_excellent() {
        let synonyms = SynonymTable::new();
        let matcher = KeywordMatcher::new(&synonyms);
        let set = keyword_set(&["rust", "async", "grpc"]);

        let partition = matcher.match_keywords(&set, &set);
        let score = calculator().score(&partition);

        assert_eq!(score.percent, 100);
        assert_eq!(score.tier, Tier::Excellent);
    }
}
