//! Chat provider trait for abstracting the reasoning engine
//!
//! The agent only ever needs one kind of call: a tool-calling chat
//! completion over the current conversation. Keeping it behind a trait
//! lets tests script the engine deterministically.

use async_trait::async_trait;

use crate::core::{Message, Result, ToolCall, ToolDefinition};

/// Response from a chat provider
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Text content of the response
    pub content: String,
    /// Any tool calls the model wants to make
    pub tool_calls: Vec<ToolCall>,
    /// Token usage information
    pub usage: Option<TokenUsage>,
    /// Model that generated the response
    pub model: String,
}

impl LlmResponse {
    /// Whether this response is a final answer (no tool calls requested)
    pub fn is_final(&self) -> bool {
        self.tool_calls.is_empty()
    }
}

/// Token usage information
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Options for LLM generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Temperature for sampling (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

/// Trait for chat providers
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a response with tool definitions available
    async fn chat_with_tools(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: Option<GenerateOptions>,
    ) -> Result<LlmResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}
