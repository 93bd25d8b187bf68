//! Deterministic text-analysis core: normalization, keyword extraction,
//! synonym resolution, matching, scoring, and section segmentation.
//!
//! Everything in this module is pure and synchronous. The generation oracle
//! (`crate::llm`) is never called from here.

pub mod extractor;
pub mod matcher;
pub mod normalizer;
pub mod scoring;
pub mod sections;
pub mod suggestions;
pub mod synonyms;

pub use extractor::{KeywordExtractor, KeywordSet};
pub use matcher::{KeywordMatcher, MatchPartition};
pub use normalizer::Normalizer;
pub use scoring::{Score, ScoreCalculator, Tier};
pub use sections::{ResumeSections, SectionLabel, SectionSegmenter};
pub use suggestions::SuggestionEngine;
pub use synonyms::{SynonymTable, VariantFallback};
