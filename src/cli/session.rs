//! Session driver
//!
//! Runs one research query end-to-end: agent loop, then structured-output
//! parsing. A final answer that fails the schema yields no record and no
//! diagnostic; that silence is part of the interface contract.

use std::io::{self, BufRead, Write};

use crate::agent::Agent;
use crate::core::{Config, Result};
use crate::response::{self, ResearchResponse};

/// Drives a single research session
pub struct Session {
    agent: Agent,
}

impl Session {
    /// Create a session from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self {
            agent: Agent::from_config(config)?,
        })
    }

    /// Create a session around an already-built agent
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }

    /// Run one query and return the parsed record, or `None` when the
    /// final answer does not match the schema
    pub async fn run(&self, query: &str) -> Result<Option<ResearchResponse>> {
        let raw = self.agent.run(query).await?;
        Ok(response::parse(&raw).ok())
    }

    /// Run one query and print the record as indented JSON on stdout;
    /// prints nothing when no record was produced
    pub async fn run_and_report(&self, query: &str) -> Result<()> {
        if let Some(record) = self.run(query).await? {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Ok(())
    }
}

/// Prompt for a query on stdin, returning the trimmed line
pub fn prompt_query() -> io::Result<String> {
    print!("What can I help you research? ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
