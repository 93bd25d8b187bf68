//! Synonym resolution over a static equivalence-class table

use std::collections::HashMap;

/// Fallback rule applied when two tokens are neither equal nor in a shared
/// synonym class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantFallback {
    /// One token contains the other and both are longer than 3 characters.
    /// Catches pluralization and compound variants ("database"/"databases",
    /// "management"/"management systems") at the cost of occasional false
    /// positives on unrelated words sharing a substring.
    Substring,
    /// Jaro-Winkler similarity at or above the given threshold.
    Similarity(f64),
    /// No fallback; only equality and class membership match.
    Off,
}

/// Equivalence classes of surface forms denoting one concept. Membership is
/// symmetric across the whole class.
const SYNONYM_CLASSES: &[&[&str]] = &[
    &["javascript", "js", "ecmascript"],
    &["python", "py"],
    &["artificial intelligence", "ai", "machine learning", "ml"],
    &["database", "db", "databases"],
    &["leadership", "lead", "leading", "manage", "management"],
    &["communication", "communicate", "communicating"],
    &["project management", "pm", "project manager"],
    &["software development", "development", "programming"],
    &["web development", "web dev", "frontend", "backend"],
];

/// Static synonym table, built once at startup and shared read-only.
pub struct SynonymTable {
    membership: HashMap<&'static str, Vec<usize>>,
    fallback: VariantFallback,
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::with_fallback(VariantFallback::Substring)
    }

    pub fn with_fallback(fallback: VariantFallback) -> Self {
        let mut membership: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (class_id, class) in SYNONYM_CLASSES.iter().enumerate() {
            for token in class.iter() {
                membership.entry(token).or_default().push(class_id);
            }
        }

        Self {
            membership,
            fallback,
        }
    }

    /// Whether two tokens denote the same concept. Symmetric and
    /// deterministic; first rule that applies wins.
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }

        if self.share_class(a, b) {
            return true;
        }

        match self.fallback {
            VariantFallback::Substring => {
                a.len() > 3 && b.len() > 3 && (a.contains(b) || b.contains(a))
            }
            VariantFallback::Similarity(threshold) => strsim::jaro_winkler(a, b) >= threshold,
            VariantFallback::Off => false,
        }
    }

    fn share_class(&self, a: &str, b: &str) -> bool {
        match (self.membership.get(a), self.membership.get(b)) {
            (Some(classes_a), Some(classes_b)) => {
                classes_a.iter().any(|id| classes_b.contains(id))
            }
            _ => false,
        }
    }

    pub fn class_count(&self) -> usize {
        SYNONYM_CLASSES.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_matches() {
        let table = SynonymTable::new();
        assert!(table.are_synonyms("rust", "rust"));
    }

    #[test]
    fn test_class_membership() {
        let table = SynonymTable::new();
        assert!(table.are_synonyms("python", "py"));
        assert!(table.are_synonyms("js", "ecmascript"));
        assert!(table.are_synonyms("ai", "ml"));
        assert!(!table.are_synonyms("python", "java"));
    }

    #[test]
    fn test_symmetry() {
        let table = SynonymTable::new();
        let pairs = [
            ("python", "py"),
            ("database", "databases"),
            ("management", "management systems"),
            ("python", "java"),
            ("rust", "go"),
        ];

        for (a, b) in pairs {
            assert_eq!(
                table.are_synonyms(a, b),
                table.are_synonyms(b, a),
                "asymmetric result for ({}, {})",
                a,
                b
            );
        }
    }

    #[test]
    fn test_substring_fallback() {
        let table = SynonymTable::new();
        // documented permissive behavior, locked in for compatibility
        assert!(table.are_synonyms("management", "management systems"));
        assert!(table.are_synonyms("database", "databases"));
        // both sides must be longer than 3 characters
        assert!(!table.are_synonyms("art", "artistic"));
    }

    #[test]
    fn test_fallback_off() {
        let table = SynonymTable::with_fallback(VariantFallback::Off);
        assert!(!table.are_synonyms("management", "management systems"));
        assert!(table.are_synonyms("python", "py"));
    }

    #[test]
    fn test_similarity_fallback() {
        let table = SynonymTable::with_fallback(VariantFallback::Similarity(0.8));
        assert!(table.are_synonyms("kubernetes", "kuberntes"));
        assert!(!table.are_synonyms("python", "java"));
    }
}
