//! Agent module - orchestration and conversation management
//!
//! Contains the executor loop that coordinates reasoning-engine calls and
//! tool execution for a single research run.

pub mod conversation;
pub mod executor;
pub mod loop_state;

pub use conversation::Conversation;
pub use executor::Agent;
pub use loop_state::{AgentLoopState, Observation};
