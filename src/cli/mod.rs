//! CLI module - command-line interface
//!
//! Contains the session driver and query prompting.

pub mod session;

pub use session::{prompt_query, Session};
