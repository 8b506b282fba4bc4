//! Delver - AI Research Agent
//!
//! A single-session research assistant: given a query, an agent gathers
//! information through web search and encyclopedia lookup, persists its
//! aggregated notes behind a minimum-content guard, and emits a validated
//! structured record.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **LLM**: Chat provider abstraction with an OpenAI-compatible client
//! - **Tools**: Search, encyclopedia lookup, and guarded save
//! - **Agent**: The orchestration loop and per-run conversation state
//! - **Response**: The structured output schema and its parser
//! - **CLI**: Session driver and entry-point helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use delver::{Config, Session};
//!
//! #[tokio::main]
//! async fn main() {
//!     let session = Session::from_config(Config::load()).unwrap();
//!     session.run_and_report("History of the printing press").await.unwrap();
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod core;
pub mod llm;
pub mod response;
pub mod tools;

// Re-export commonly used items
pub use agent::Agent;
pub use cli::Session;
pub use core::{Config, DelverError, Result};
pub use response::ResearchResponse;
