//! Text-generation oracle boundary
//!
//! The analysis core never calls into this module; orchestration in `main`
//! combines its output with the deterministic results.

pub mod gemini;
pub mod oracle;
pub mod prompts;
pub mod structured;

pub use gemini::GeminiClient;
pub use oracle::TextOracle;
pub use prompts::PromptTemplates;
pub use structured::StructuredOutput;
