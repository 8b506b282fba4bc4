//! Agent executor
//!
//! Runs the orchestration loop for one research query: the model repeatedly
//! chooses between invoking a tool and emitting a final answer, until it
//! answers or the step budget runs out.

use std::sync::Arc;

use crate::agent::conversation::Conversation;
use crate::agent::loop_state::{AgentLoopState, Observation};
use crate::core::{Config, Result};
use crate::llm::{ChatProvider, GenerateOptions, OpenAiClient};
use crate::response;
use crate::tools::ToolRegistry;

/// Agent that orchestrates the reasoning engine and the research tools
pub struct Agent {
    /// Configuration
    config: Config,
    /// Reasoning engine handle
    llm: Arc<dyn ChatProvider>,
    /// Tool registry
    tools: ToolRegistry,
}

impl Agent {
    /// Create an agent from configuration, wiring the OpenAI client
    pub fn from_config(config: Config) -> Result<Self> {
        let llm = Arc::new(OpenAiClient::from_config(&config)?);
        let tools = ToolRegistry::from_config(&config)?;
        Ok(Self::with_provider(config, llm, tools))
    }

    /// Create an agent with a custom provider (used by tests to script
    /// the engine deterministically)
    pub fn with_provider(config: Config, llm: Arc<dyn ChatProvider>, tools: ToolRegistry) -> Self {
        Self { config, llm, tools }
    }

    /// System instructions injected at the start of every run.
    ///
    /// Ordering (gather, aggregate, save once, answer) is advisory: the
    /// model is told the order but the loop does not gate tool eligibility.
    fn system_instructions() -> String {
        format!(
            "You are a research assistant.\n\
             Follow this exact order:\n\
             1) Use the search/wiki tools to gather information. Do NOT call save yet.\n\
             2) Aggregate FULL raw findings into comprehensive notes (no truncation).\n\
             3) Call the `save_to_file` tool ONCE with the FULL notes (plain text).\n\
             4) Finally, return ONLY the JSON per schema:\n{}\n\
             Never call `save_to_file` before you have gathered and aggregated the notes.",
            response::format_instructions()
        )
    }

    /// Run the loop for one query and return the raw final answer text.
    ///
    /// The loop ends when the model responds without tool calls; if the
    /// step budget is exhausted first, the returned text is a diagnostic
    /// message rather than JSON, so downstream parsing fails cleanly.
    pub async fn run(&self, query: &str) -> Result<String> {
        let mut conversation = Conversation::new();
        conversation.add_system(Self::system_instructions());
        conversation.add_user(query);

        let mut state = AgentLoopState::new(self.config.agent.max_steps);

        while state.should_continue() {
            let step = state.step + 1;
            self.trace(&format!("[Step {}/{}] Thinking...", step, state.max_steps));

            let llm_response = self
                .llm
                .chat_with_tools(
                    &self.config.openai.model,
                    conversation.messages(),
                    self.tools.definitions(),
                    Some(GenerateOptions {
                        // Deterministic mode: same query, same trajectory
                        temperature: Some(0.0),
                        ..Default::default()
                    }),
                )
                .await?;

            if llm_response.is_final() {
                state.final_answer = Some(llm_response.content);
                break;
            }

            self.trace(&format!(
                "[Step {}/{}] Executing {} tool call(s)",
                step,
                state.max_steps,
                llm_response.tool_calls.len()
            ));

            conversation.add_assistant_tool_calls(llm_response.tool_calls.clone());

            // Tool calls run strictly in the order the model issued them;
            // every result goes back to the model, failures included
            for call in &llm_response.tool_calls {
                let result = self.tools.execute(call).await;

                let status = if result.success { "ok" } else { "failed" };
                self.trace(&format!("  {} ({})", result.tool_name, status));

                conversation.add_tool_result(call.id.as_str(), result.output.as_str());
                state.add_observation(Observation::from(result));
            }

            state.next_step();
        }

        let answer = match state.final_answer.clone() {
            Some(answer) => answer,
            None => format!(
                "Agent stopped: reached the maximum of {} steps without a final answer.",
                state.max_steps
            ),
        };

        self.trace(&format!(
            "[Agent] Complete ({} steps, tools used: {})",
            state.step,
            state.tools_invoked().join(", ")
        ));

        Ok(answer)
    }

    /// Progress line on stderr when debug is enabled; stdout is reserved
    /// for the structured record
    fn trace(&self, line: &str) {
        if self.config.agent.debug {
            eprintln!("{}", line);
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
