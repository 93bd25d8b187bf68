//! Analysis report structure

use crate::analysis::matcher::MatchPartition;
use crate::analysis::scoring::Score;
use crate::analysis::sections::ResumeSections;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything one analysis run produced, in a serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub resume_path: String,
    pub job_path: String,
    pub score: Score,
    pub exact_matches: Vec<String>,
    pub synonym_matches: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub candidate_keyword_count: usize,
    pub target_keyword_count: usize,
    pub sections: ResumeSections,
    pub suggestions: Vec<String>,
    pub tailored_resume: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u128,
}

impl AnalysisReport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        resume_path: String,
        job_path: String,
        score: Score,
        partition: &MatchPartition,
        candidate_keyword_count: usize,
        sections: ResumeSections,
        suggestions: Vec<String>,
        tailored_resume: Option<String>,
        processing_time_ms: u128,
    ) -> Self {
        Self {
            resume_path,
            job_path,
            score,
            exact_matches: partition.exact.to_vec(),
            synonym_matches: partition.synonym_matched.to_vec(),
            missing_keywords: partition.missing.to_vec(),
            candidate_keyword_count,
            target_keyword_count: partition.target_size,
            sections,
            suggestions,
            tailored_resume,
            generated_at: Utc::now(),
            processing_time_ms,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.exact_matches.len() + self.synonym_matches.len()
    }
}
