//! Structured output contract
//!
//! Defines the record the agent must emit as its final answer, the format
//! instructions injected into its system prompt, and the parser that
//! validates the raw final text against the schema.

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// The structured record produced by a successful research run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResponse {
    /// Central topic of the research
    pub topic: String,
    /// Concise summary of the findings
    pub summary: String,
    /// Sources consulted (URLs or titles)
    pub sources: Vec<String>,
    /// Names of the tools the agent used
    pub tools_used: Vec<String>,
}

/// Format instructions embedded verbatim in the agent's system prompt
pub fn format_instructions() -> String {
    let schema = serde_json::json!({
        "properties": {
            "topic": {"title": "Topic", "type": "string"},
            "summary": {"title": "Summary", "type": "string"},
            "sources": {"items": {"type": "string"}, "title": "Sources", "type": "array"},
            "tools_used": {"items": {"type": "string"}, "title": "Tools Used", "type": "array"}
        },
        "required": ["topic", "summary", "sources", "tools_used"],
        "title": "ResearchResponse",
        "type": "object"
    });

    format!(
        "The output should be formatted as a JSON instance that conforms to the JSON schema below.\n\
         \n\
         Here is the output schema:\n\
         ```\n{}\n```",
        schema
    )
}

/// Parse a raw final answer into a structured record.
///
/// Tolerates a fenced ```json wrapper around the object. Anything else that
/// is not a JSON object with all four fields fails the parse; callers treat
/// that as a valid no-record terminal state.
pub fn parse(text: &str) -> Result<ResearchResponse> {
    let stripped = strip_code_fence(text);
    Ok(serde_json::from_str(stripped)?)
}

/// Remove a surrounding markdown code fence, if present
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") up to the first newline
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };

    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResearchResponse {
        ResearchResponse {
            topic: "History of the printing press".to_string(),
            summary: "Movable type spread through Europe after 1450.".to_string(),
            sources: vec!["Wikipedia: Printing press".to_string()],
            tools_used: vec!["search".to_string(), "save_to_file".to_string()],
        }
    }

    #[test]
    fn test_roundtrip_equality() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed = parse(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_parse_fenced_json() {
        let record = sample();
        let fenced = format!("```json\n{}\n```", serde_json::to_string(&record).unwrap());
        assert_eq!(parse(&fenced).unwrap(), record);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse("Agent stopped: reached the maximum of 10 steps without a final answer.").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let text = r#"{"topic": "t", "summary": "s", "sources": []}"#;
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_parse_rejects_mistyped_field() {
        let text = r#"{"topic": "t", "summary": "s", "sources": "not-a-list", "tools_used": []}"#;
        assert!(parse(text).is_err());
    }

    #[test]
    fn test_format_instructions_mention_all_fields() {
        let instructions = format_instructions();
        for field in ["topic", "summary", "sources", "tools_used"] {
            assert!(instructions.contains(field));
        }
    }

    #[test]
    fn test_non_ascii_preserved() {
        let mut record = sample();
        record.summary = "La imprenta cambió Europa".to_string();
        let pretty = serde_json::to_string_pretty(&record).unwrap();
        assert!(pretty.contains("cambió"));
        assert_eq!(parse(&pretty).unwrap(), record);
    }
}
