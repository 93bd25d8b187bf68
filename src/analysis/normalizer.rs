//! Text cleaning and whitespace normalization

use regex::Regex;

/// Cleans raw text into a canonical single-spaced form.
///
/// Characters outside the allow-list (alphanumerics, whitespace and
/// `- . , ; : ! ?`) are replaced with a space, then whitespace runs are
/// collapsed. Case is left untouched; callers lowercase where they need to.
pub struct Normalizer {
    disallowed: Regex,
    whitespace: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        let disallowed = Regex::new(r"[^\w\s\-.,;:!?]").expect("Invalid character filter regex");
        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            disallowed,
            whitespace,
        }
    }

    /// Best-effort cleanup; never fails, empty input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.disallowed.replace_all(text, " ");
        self.whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   \n\t  "), "");
    }

    #[test]
    fn test_whitespace_collapse() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("  Senior\tRust\n\nEngineer  "),
            "Senior Rust Engineer"
        );
    }

    #[test]
    fn test_disallowed_characters_become_spaces() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("C++/Rust (5+ years)"),
            "C Rust 5 years"
        );
        assert_eq!(
            normalizer.normalize("team-lead, devops; ci: yes!"),
            "team-lead, devops; ci: yes!"
        );
    }

    #[test]
    fn test_case_is_preserved() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("PostgreSQL"), "PostgreSQL");
    }

    #[test]
    fn test_idempotence() {
        let normalizer = Normalizer::new();
        let samples = [
            "",
            "plain text",
            "  messy\t*input*  with\n(noise)  ",
            "already-clean, text; here: ok!",
        ];

        for sample in samples {
            let once = normalizer.normalize(sample);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }
}
