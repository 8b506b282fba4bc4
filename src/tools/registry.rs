//! Tool registry - manages and dispatches tool calls
//!
//! Holds the fixed, ordered catalog of research tools and routes tool calls
//! to their handlers. Every failure inside a tool is converted into a
//! textual result; the agent loop treats all tool outcomes uniformly as
//! text fed back into the conversation.

use crate::core::{Config, Result, ToolCall, ToolDefinition, ToolResult};
use crate::tools::save::SaveTool;
use crate::tools::search::SearchTool;
use crate::tools::wiki::WikiTool;

/// Registry of available tools
pub struct ToolRegistry {
    /// Tool definitions, in catalog order
    definitions: Vec<ToolDefinition>,
    search: SearchTool,
    wiki: WikiTool,
    save: SaveTool,
}

impl ToolRegistry {
    /// Create the registry with the fixed research tool set
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            definitions: Self::build_definitions(),
            search: SearchTool::new(config.tools.search_results)?,
            wiki: WikiTool::new(config.tools.wiki_results, config.tools.wiki_excerpt_chars)?,
            save: SaveTool::new(config.output_path()),
        })
    }

    /// The catalog handed to the model, in registration order
    fn build_definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::function(
                "search",
                "Search the web for information",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The search query"
                        }
                    },
                    "required": ["query"]
                }),
            ),
            ToolDefinition::function(
                "wiki",
                "Look up a topic on Wikipedia and return a short summary",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The topic to look up"
                        }
                    },
                    "required": ["query"]
                }),
            ),
            ToolDefinition::function(
                "save_to_file",
                "Save research data to a text file",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "data": {
                            "type": "string",
                            "description": "The full aggregated research notes to save"
                        }
                    },
                    "required": ["data"]
                }),
            ),
        ]
    }

    /// Get all tool definitions in catalog order
    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// Names of the registered tools, in catalog order
    pub fn tool_names(&self) -> Vec<&str> {
        self.definitions
            .iter()
            .map(|d| d.function.name.as_str())
            .collect()
    }

    /// Execute a tool call
    ///
    /// Never returns an error: tool failures, missing arguments, and
    /// unknown names all become failure results whose text goes back to
    /// the model.
    pub async fn execute(&self, tool_call: &ToolCall) -> ToolResult {
        match tool_call.name.as_str() {
            "search" => match tool_call.get_string("query") {
                Some(query) => match self.search.search(&query).await {
                    Ok(output) => ToolResult::success("search", output),
                    Err(e) => ToolResult::failure("search", e.to_string()),
                },
                None => ToolResult::failure("search", "Missing 'query' argument"),
            },
            "wiki" => match tool_call.get_string("query") {
                Some(query) => match self.wiki.lookup(&query).await {
                    Ok(output) => ToolResult::success("wiki", output),
                    Err(e) => ToolResult::failure("wiki", e.to_string()),
                },
                None => ToolResult::failure("wiki", "Missing 'query' argument"),
            },
            "save_to_file" => match tool_call.get_string("data") {
                Some(data) => match self.save.save(&data) {
                    Ok(output) => ToolResult::success("save_to_file", output),
                    Err(e) => ToolResult::failure("save_to_file", e.to_string()),
                },
                None => ToolResult::failure("save_to_file", "Missing 'data' argument"),
            },
            other => ToolResult::failure(other, format!("Unknown tool: {}", other)),
        }
    }
}
