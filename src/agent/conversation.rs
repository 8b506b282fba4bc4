//! Conversation transcript for one agent run
//!
//! Holds the ordered sequence of turns: system instructions, the query,
//! assistant tool-call turns, and tool results. Grows monotonically within
//! a run and is discarded when the run ends.

use crate::core::{Message, ToolCall};

/// The per-run conversation state
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the system instructions
    pub fn add_system(&mut self, content: impl Into<String>) {
        self.messages.push(Message::system(content));
    }

    /// Add the user query
    pub fn add_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Record an assistant turn that requests tool calls
    pub fn add_assistant_tool_calls(&mut self, tool_calls: Vec<ToolCall>) {
        self.messages.push(Message::assistant_tool_calls(tool_calls));
    }

    /// Record a tool result answering a specific call
    pub fn add_tool_result(&mut self, call_id: impl Into<String>, output: impl Into<String>) {
        self.messages.push(Message::tool_result(call_id, output));
    }

    /// All messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get message count
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_kept_in_order() {
        let mut conv = Conversation::new();
        conv.add_system("instructions");
        conv.add_user("query");
        conv.add_assistant_tool_calls(vec![ToolCall::new(
            "call_1",
            "search",
            serde_json::json!({"query": "q"}),
        )]);
        conv.add_tool_result("call_1", "result text");

        let roles: Vec<&str> = conv.messages().iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "tool"]);
        assert_eq!(conv.len(), 4);
    }

    #[test]
    fn test_tool_result_references_call() {
        let mut conv = Conversation::new();
        conv.add_tool_result("call_9", "output");
        assert_eq!(
            conv.messages()[0].tool_call_id.as_deref(),
            Some("call_9")
        );
    }
}
