//! Prompt templates for the generation oracle

/// Templates with `{placeholder}` substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub job_analysis: String,
    pub tailoring: String,
    pub suggestions: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            job_analysis: JOB_ANALYSIS_TEMPLATE.to_string(),
            tailoring: TAILORING_TEMPLATE.to_string(),
            suggestions: SUGGESTIONS_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_job_analysis(&self, job_description: &str) -> String {
        self.job_analysis.replace("{job_description}", job_description)
    }

    pub fn render_tailoring(
        &self,
        original_resume: &str,
        job_requirements: &str,
        analysis: &str,
    ) -> String {
        self.tailoring
            .replace("{original_resume}", original_resume)
            .replace("{job_requirements}", job_requirements)
            .replace("{analysis}", analysis)
    }

    pub fn render_suggestions(&self, analysis_results: &str) -> String {
        self.suggestions.replace("{analysis_results}", analysis_results)
    }
}

const JOB_ANALYSIS_TEMPLATE: &str = r#"Analyze the following job description and extract its key requirements.

<JOB DESCRIPTION>
{job_description}
</JOB DESCRIPTION>

Return a JSON object with exactly these fields:
- "technical_skills": array of required technical skills
- "soft_skills": array of required soft skills
- "experience_level": short string describing seniority
- "education_requirements": array of required degrees or qualifications
- "responsibilities": array of main responsibilities
- "qualifications": array of other qualifications"#;

const TAILORING_TEMPLATE: &str = r#"Rewrite the resume below so it better targets the given job requirements. Keep every claim truthful to the original resume; reorder, reword, and emphasize, but never invent experience.

<RESUME>
{original_resume}
</RESUME>

<JOB REQUIREMENTS>
{job_requirements}
</JOB REQUIREMENTS>

<MATCH ANALYSIS>
{analysis}
</MATCH ANALYSIS>

Return the full tailored resume as plain text with the same section structure as the original."#;

const SUGGESTIONS_TEMPLATE: &str = r#"Given the following resume match analysis, list concrete improvements the candidate should make.

<ANALYSIS>
{analysis_results}
</ANALYSIS>

Return each suggestion on its own line, prefixed with "- "."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_analysis_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_job_analysis("Senior Rust engineer, Tokio and gRPC.");

        assert!(prompt.contains("Senior Rust engineer, Tokio and gRPC."));
        assert!(prompt.contains("technical_skills"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_tailoring_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_tailoring("resume body", "{\"x\":1}", "{\"score\":50}");

        assert!(prompt.contains("resume body"));
        assert!(prompt.contains("{\"x\":1}"));
        assert!(prompt.contains("{\"score\":50}"));
        assert!(!prompt.contains("{original_resume}"));
    }
}
