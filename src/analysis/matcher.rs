//! Keyword matching between a candidate set and a target set

use crate::analysis::extractor::KeywordSet;
use crate::analysis::synonyms::SynonymTable;
use serde::Serialize;
use std::collections::BTreeSet;

/// Decomposition of a target keyword set against a candidate set.
///
/// Invariants: `matched` and `missing` are disjoint and their union is the
/// target set; `matched` is the union of `exact` and `synonym_matched`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchPartition {
    pub exact: KeywordSet,
    pub synonym_matched: KeywordSet,
    pub matched: KeywordSet,
    pub missing: KeywordSet,
    pub target_size: usize,
}

/// Partitions target keywords into exact, synonym-matched, and missing.
pub struct KeywordMatcher<'a> {
    synonyms: &'a SynonymTable,
    case_sensitive: bool,
}

impl<'a> KeywordMatcher<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self {
            synonyms,
            case_sensitive: false,
        }
    }

    pub fn with_case_sensitivity(synonyms: &'a SynonymTable, case_sensitive: bool) -> Self {
        Self {
            synonyms,
            case_sensitive,
        }
    }

    /// Compares every target token against the candidate set. The synonym
    /// pass stops at the first candidate hit per target token; worst case is
    /// O(|target| x |candidate|), fine at resume scale.
    pub fn match_keywords(&self, candidate: &KeywordSet, target: &KeywordSet) -> MatchPartition {
        let candidate_keys: BTreeSet<String> =
            candidate.iter().map(|t| self.comparison_key(t)).collect();

        let mut exact = self.partition_set();
        let mut synonym_matched = self.partition_set();
        let mut missing = self.partition_set();

        for token in target.iter() {
            let key = self.comparison_key(token);
            if candidate_keys.contains(&key) {
                exact.insert(token);
            } else if candidate_keys
                .iter()
                .any(|candidate_key| self.synonyms.are_synonyms(&key, candidate_key))
            {
                synonym_matched.insert(token);
            } else {
                missing.insert(token);
            }
        }

        let matched = exact.union(&synonym_matched);

        MatchPartition {
            exact,
            synonym_matched,
            matched,
            missing,
            target_size: target.len(),
        }
    }

    // partition sets must not fold case away when comparisons are
    // case-sensitive
    fn partition_set(&self) -> KeywordSet {
        if self.case_sensitive {
            KeywordSet::case_preserving()
        } else {
            KeywordSet::new()
        }
    }

    fn comparison_key(&self, token: &str) -> String {
        if self.case_sensitive {
            token.to_string()
        } else {
            token.to_lowercase()
        }
    }
}
