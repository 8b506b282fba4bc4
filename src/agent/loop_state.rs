//! Agent loop state management
//!
//! Tracks the state of the reasoning loop: the step budget, observations
//! from tool executions, and the final answer once one is produced.

use serde::{Deserialize, Serialize};

/// State of the agent reasoning loop
#[derive(Debug, Clone)]
pub struct AgentLoopState {
    /// Current step number (0-indexed)
    pub step: usize,
    /// Maximum allowed steps
    pub max_steps: usize,
    /// Observations collected from tool executions, in invocation order
    pub observations: Vec<Observation>,
    /// Final answer if the agent has completed reasoning
    pub final_answer: Option<String>,
}

impl AgentLoopState {
    /// Create a new loop state with the given step budget
    pub fn new(max_steps: usize) -> Self {
        Self {
            step: 0,
            max_steps,
            observations: Vec::new(),
            final_answer: None,
        }
    }

    /// Check if the loop should continue
    pub fn should_continue(&self) -> bool {
        self.step < self.max_steps && self.final_answer.is_none()
    }

    /// Add an observation from a tool execution
    pub fn add_observation(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    /// Increment the step counter
    pub fn next_step(&mut self) {
        self.step += 1;
    }

    /// Names of the tools invoked so far, deduplicated, first-use order
    pub fn tools_invoked(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for obs in &self.observations {
            if !names.contains(&obs.tool_name) {
                names.push(obs.tool_name.clone());
            }
        }
        names
    }
}

/// An observation from a tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Name of the tool that produced this observation
    pub tool_name: String,
    /// Whether the tool execution was successful
    pub success: bool,
    /// Text output from the tool
    pub output: String,
}

impl Observation {
    /// Create a successful observation
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: output.into(),
        }
    }

    /// Create an error observation
    pub fn error(tool_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: error.into(),
        }
    }
}

impl From<crate::core::ToolResult> for Observation {
    fn from(result: crate::core::ToolResult) -> Self {
        Self {
            tool_name: result.tool_name,
            success: result.success,
            output: result.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_state_new() {
        let state = AgentLoopState::new(10);
        assert_eq!(state.step, 0);
        assert_eq!(state.max_steps, 10);
        assert!(state.observations.is_empty());
        assert!(state.final_answer.is_none());
    }

    #[test]
    fn test_should_continue() {
        let mut state = AgentLoopState::new(2);
        assert!(state.should_continue());

        state.next_step();
        assert!(state.should_continue());

        state.next_step();
        assert!(!state.should_continue()); // Reached max steps
    }

    #[test]
    fn test_final_answer_stops_loop() {
        let mut state = AgentLoopState::new(10);
        state.final_answer = Some("done".to_string());
        assert!(!state.should_continue());
    }

    #[test]
    fn test_tools_invoked_dedupes_in_order() {
        let mut state = AgentLoopState::new(10);
        state.add_observation(Observation::success("wiki", "Page: X"));
        state.add_observation(Observation::success("search", "results"));
        state.add_observation(Observation::success("wiki", "Page: Y"));
        state.add_observation(Observation::success("save_to_file", "saved"));

        assert_eq!(state.tools_invoked(), vec!["wiki", "search", "save_to_file"]);
    }
}
