//! Rule-based improvement suggestions and tailored content formatting

use crate::analysis::matcher::MatchPartition;
use crate::analysis::scoring::Score;
use crate::analysis::sections::{ResumeSections, SectionLabel};
use crate::config::ScoringConfig;
use std::collections::BTreeMap;

/// Number of missing keywords surfaced in the keyword suggestion.
const TOP_MISSING: usize = 5;

/// Minimum word count below which a skills section is flagged as thin.
const MIN_SKILLS_WORDS: usize = 10;

/// Derives improvement suggestions from the deterministic analysis results.
pub struct SuggestionEngine {
    thresholds: ScoringConfig,
}

impl SuggestionEngine {
    pub fn new(thresholds: ScoringConfig) -> Self {
        Self { thresholds }
    }

    pub fn suggest(
        &self,
        score: &Score,
        partition: &MatchPartition,
        sections: &ResumeSections,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        if score.percent < self.thresholds.fair_threshold {
            suggestions.push(
                "Consider significantly restructuring your resume to better align with job requirements"
                    .to_string(),
            );
        } else if score.percent < self.thresholds.good_threshold {
            suggestions.push(
                "Add more relevant keywords and experiences to improve job match".to_string(),
            );
        }

        if !partition.missing.is_empty() {
            let top_missing: Vec<String> = partition
                .missing
                .iter()
                .take(TOP_MISSING)
                .map(|kw| kw.to_string())
                .collect();
            suggestions.push(format!(
                "Include these important keywords: {}",
                top_missing.join(", ")
            ));
        }

        if let Some(skills) = sections.get(SectionLabel::Skills) {
            if skills.split_whitespace().count() < MIN_SKILLS_WORDS {
                suggestions.push(
                    "Expand your skills section with more relevant technical and soft skills"
                        .to_string(),
                );
            }
        }

        if let Some(experience) = sections.get(SectionLabel::Experience) {
            let lower = experience.to_lowercase();
            if !lower.contains("quantified") && !lower.contains("achieved") {
                suggestions.push(
                    "Add quantified achievements and specific results to your experience"
                        .to_string(),
                );
            }
        }

        suggestions
    }

    /// Rebuilds resume text from its segmented sections, substituting
    /// replacement content where provided. Empty sections are skipped.
    pub fn format_tailored(
        &self,
        sections: &ResumeSections,
        replacements: &BTreeMap<SectionLabel, String>,
    ) -> String {
        let mut output = Vec::new();

        for (label, content) in sections.iter() {
            let body = replacements
                .get(&label)
                .map(|s| s.as_str())
                .unwrap_or(content);
            if body.trim().is_empty() {
                continue;
            }

            output.push(format!(
                "{}\n{}",
                label.to_string().to_uppercase(),
                "=".repeat(20)
            ));
            output.push(body.trim().to_string());
            output.push(String::new());
        }

        output.join("\n").trim_end().to_string()
    }
}
