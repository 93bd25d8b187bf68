//! Rendering analysis reports to console, JSON, or Markdown

use crate::analysis::scoring::Tier;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::Colorize;

pub struct ReportFormatter {
    format: OutputFormat,
    detailed: bool,
    color: bool,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat, detailed: bool, color: bool) -> Self {
        Self {
            format,
            detailed,
            color,
        }
    }

    pub fn render(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => Ok(self.render_console(report)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Markdown => Ok(self.render_markdown(report)),
        }
    }

    fn render_console(&self, report: &AnalysisReport) -> String {
        colored::control::set_override(self.color);

        let mut out = Vec::new();

        out.push(format!("{}", "Resume Match Report".bold()));
        out.push(format!("  Resume: {}", report.resume_path));
        out.push(format!("  Job:    {}", report.job_path));
        out.push(String::new());

        let tier_label = report.score.tier.to_string();
        let tier_colored = match report.score.tier {
            Tier::Excellent => tier_label.green().bold(),
            Tier::Good => tier_label.cyan().bold(),
            Tier::Fair => tier_label.yellow().bold(),
            Tier::Poor => tier_label.red().bold(),
        };
        out.push(format!(
            "  Match score: {}% ({})",
            report.score.percent, tier_colored
        ));
        out.push(format!(
            "  Keywords matched: {} of {} ({} exact, {} via synonyms)",
            report.matched_count(),
            report.target_keyword_count,
            report.exact_matches.len(),
            report.synonym_matches.len()
        ));

        if !report.missing_keywords.is_empty() {
            out.push(String::new());
            out.push(format!("{}", "Missing keywords:".bold()));
            let shown = if self.detailed {
                report.missing_keywords.len()
            } else {
                10.min(report.missing_keywords.len())
            };
            for keyword in report.missing_keywords.iter().take(shown) {
                out.push(format!("  - {}", keyword.red()));
            }
            if report.missing_keywords.len() > shown {
                out.push(format!(
                    "  ... and {} more",
                    report.missing_keywords.len() - shown
                ));
            }
        }

        if !report.suggestions.is_empty() {
            out.push(String::new());
            out.push(format!("{}", "Suggestions:".bold()));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                out.push(format!("  {}. {}", i + 1, suggestion));
            }
        }

        if self.detailed {
            out.push(String::new());
            out.push(format!("{}", "Detected resume sections:".bold()));
            for (label, content) in report.sections.iter() {
                out.push(format!("  - {}: {} characters", label, content.len()));
            }

            out.push(String::new());
            out.push(format!("{}", "Matched keywords:".bold()));
            for keyword in &report.exact_matches {
                out.push(format!("  - {}", keyword.green()));
            }
            for keyword in &report.synonym_matches {
                out.push(format!("  - {} (synonym)", keyword.cyan()));
            }
        }

        if let Some(tailored) = &report.tailored_resume {
            out.push(String::new());
            out.push(format!("{}", "Tailored resume:".bold()));
            out.push(tailored.clone());
        }

        out.push(String::new());
        out.push(format!(
            "Completed in {}ms at {}",
            report.processing_time_ms,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.join("\n")
    }

    fn render_markdown(&self, report: &AnalysisReport) -> String {
        let mut out = Vec::new();

        out.push("# Resume Match Report".to_string());
        out.push(String::new());
        out.push(format!("- **Resume**: `{}`", report.resume_path));
        out.push(format!("- **Job description**: `{}`", report.job_path));
        out.push(format!(
            "- **Match score**: {}% ({})",
            report.score.percent, report.score.tier
        ));
        out.push(format!(
            "- **Keywords matched**: {} of {}",
            report.matched_count(),
            report.target_keyword_count
        ));

        if !report.missing_keywords.is_empty() {
            out.push(String::new());
            out.push("## Missing keywords".to_string());
            out.push(String::new());
            for keyword in &report.missing_keywords {
                out.push(format!("- {}", keyword));
            }
        }

        if !report.suggestions.is_empty() {
            out.push(String::new());
            out.push("## Suggestions".to_string());
            out.push(String::new());
            for suggestion in &report.suggestions {
                out.push(format!("- {}", suggestion));
            }
        }

        if self.detailed {
            out.push(String::new());
            out.push("## Matched keywords".to_string());
            out.push(String::new());
            for keyword in &report.exact_matches {
                out.push(format!("- {} (exact)", keyword));
            }
            for keyword in &report.synonym_matches {
                out.push(format!("- {} (synonym)", keyword));
            }
        }

        if let Some(tailored) = &report.tailored_resume {
            out.push(String::new());
            out.push("## Tailored resume".to_string());
            out.push(String::new());
            out.push("```".to_string());
            out.push(tailored.clone());
            out.push("```".to_string());
        }

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::KeywordSet;
    use crate::analysis::matcher::KeywordMatcher;
    use crate::analysis::scoring::ScoreCalculator;
    use crate::analysis::sections::SectionSegmenter;
    use crate::analysis::synonyms::SynonymTable;
    use crate::config::ScoringConfig;

    fn sample_report() -> AnalysisReport {
        let synonyms = SynonymTable::new();
        let matcher = KeywordMatcher::new(&synonyms);
        let candidate: KeywordSet = ["python", "communication"].into_iter().collect();
        let target: KeywordSet = ["python", "communication", "kubernetes"].into_iter().collect();
        let partition = matcher.match_keywords(&candidate, &target);
        let score = ScoreCalculator::new(ScoringConfig::default()).score(&partition);
        let sections = SectionSegmenter::new().segment("SKILLS\nPython");

        AnalysisReport::new(
            "resume.txt".to_string(),
            "job.txt".to_string(),
            score,
            &partition,
            candidate.len(),
            sections,
            vec!["Add kubernetes".to_string()],
            None,
            12,
        )
    }

    #[test]
    fn test_json_rendering_is_valid() {
        let formatter = ReportFormatter::new(OutputFormat::Json, false, false);
        let rendered = formatter.render(&sample_report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["score"]["percent"], 66);
        assert_eq!(value["missing_keywords"][0], "kubernetes");
        assert_eq!(value["sections"]["skills"], "Python");
    }

    #[test]
    fn test_console_rendering_mentions_score() {
        let formatter = ReportFormatter::new(OutputFormat::Console, false, false);
        let rendered = formatter.render(&sample_report()).unwrap();

        assert!(rendered.contains("66%"));
        assert!(rendered.contains("kubernetes"));
        assert!(rendered.contains("Add kubernetes"));
    }

    #[test]
    fn test_markdown_rendering() {
        let formatter = ReportFormatter::new(OutputFormat::Markdown, true, false);
        let rendered = formatter.render(&sample_report()).unwrap();

        assert!(rendered.starts_with("# Resume Match Report"));
        assert!(rendered.contains("- kubernetes"));
        assert!(rendered.contains("(exact)"));
    }
}
