//! LLM module - reasoning engine integration
//!
//! Provides the chat provider abstraction with an OpenAI-compatible client.

pub mod openai;
pub mod traits;

pub use openai::OpenAiClient;
pub use traits::{ChatProvider, GenerateOptions, LlmResponse, TokenUsage};
