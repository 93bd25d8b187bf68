//! Resume section segmentation

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Fixed set of resume section labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Achievements,
    Other,
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionLabel::Contact => "contact",
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
            SectionLabel::Skills => "skills",
            SectionLabel::Certifications => "certifications",
            SectionLabel::Projects => "projects",
            SectionLabel::Achievements => "achievements",
            SectionLabel::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Labeled section contents, lines joined by newline. Sections that stayed
/// empty are omitted from the map. Serializes as the plain label-to-text map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResumeSections {
    sections: BTreeMap<SectionLabel, String>,
}

impl ResumeSections {
    pub fn get(&self, label: SectionLabel) -> Option<&str> {
        self.sections.get(&label).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, &str)> {
        self.sections.iter().map(|(label, text)| (*label, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Splits free-form resume text into labeled sections via header-line
/// heuristics.
///
/// A non-empty line of at most 3 words matching one of the header patterns
/// switches the current section; every other line accumulates under the
/// current label. A line like "Git, Docker, CI" under a header can misfire
/// the heuristic; that behavior is intentional and kept for compatibility.
pub struct SectionSegmenter {
    patterns: Vec<(SectionLabel, Regex)>,
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionSegmenter {
    pub fn new() -> Self {
        let header_patterns = [
            (SectionLabel::Contact, r"contact|personal|address|phone|email"),
            (SectionLabel::Summary, r"summary|profile|objective|about"),
            (
                SectionLabel::Experience,
                r"experience|employment|work|career|professional",
            ),
            (
                SectionLabel::Education,
                r"education|academic|degree|university|college",
            ),
            (
                SectionLabel::Skills,
                r"skills|technical|competencies|abilities",
            ),
            (
                SectionLabel::Certifications,
                r"certifications?|licenses?|credentials",
            ),
            (SectionLabel::Projects, r"projects?|portfolio"),
            (
                SectionLabel::Achievements,
                r"achievements?|awards?|honors?|accomplishments?",
            ),
        ];

        let patterns = header_patterns
            .into_iter()
            .map(|(label, pattern)| {
                (label, Regex::new(pattern).expect("Invalid section header regex"))
            })
            .collect();

        Self { patterns }
    }

    pub fn segment(&self, resume_text: &str) -> ResumeSections {
        let mut content: BTreeMap<SectionLabel, Vec<&str>> = BTreeMap::new();
        let mut current = SectionLabel::Other;

        for line in resume_text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(label) = self.header_label(line) {
                // header lines switch sections and are not kept as content;
                // a repeated header re-opens the same bucket
                current = label;
                continue;
            }

            content.entry(current).or_default().push(line);
        }

        let sections = content
            .into_iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(label, lines)| (label, lines.join("\n")))
            .collect();

        ResumeSections { sections }
    }

    fn header_label(&self, line: &str) -> Option<SectionLabel> {
        if line.unicode_words().count() > 3 {
            return None;
        }

        let lower = line.to_lowercase();
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(&lower))
            .map(|(label, _)| *label)
    }
}
