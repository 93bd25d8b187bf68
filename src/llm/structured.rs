//! Best-effort structured-output parsing and schema-default merging

use regex::Regex;
use serde_json::{json, Value};

/// Result of trying to read structured data out of free-form model output.
/// Parsing never fails; unparseable text is handed back to the caller, which
/// decides what to substitute.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredOutput {
    Parsed(Value),
    Unparseable(String),
}

/// Tries a direct JSON parse, then scans for JSON-like fragments embedded in
/// surrounding prose (models often wrap JSON in explanations or code fences).
pub fn parse_structured(text: &str) -> StructuredOutput {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return StructuredOutput::Parsed(value);
    }

    let fragment_patterns = [r"(?s)\{.*\}", r"(?s)\[.*\]"];
    for pattern in fragment_patterns {
        let regex = Regex::new(pattern).expect("Invalid JSON fragment regex");
        for m in regex.find_iter(text) {
            if let Ok(value) = serde_json::from_str::<Value>(m.as_str()) {
                return StructuredOutput::Parsed(value);
            }
        }
    }

    StructuredOutput::Unparseable(text.to_string())
}

/// Back-fills missing keys in `value` from `defaults`, recursing into nested
/// objects. Keys already present are never overwritten, even when null.
pub fn merge_defaults(value: &mut Value, defaults: &Value) {
    if let (Value::Object(map), Value::Object(default_map)) = (value, defaults) {
        for (key, default_value) in default_map {
            match map.get_mut(key) {
                None => {
                    map.insert(key.clone(), default_value.clone());
                }
                Some(existing) => merge_defaults(existing, default_value),
            }
        }
    }
}

/// Fully enumerated default schema for job-requirement analysis output.
pub fn job_requirements_defaults() -> Value {
    json!({
        "technical_skills": [],
        "soft_skills": [],
        "experience_level": "",
        "education_requirements": [],
        "responsibilities": [],
        "qualifications": []
    })
}
