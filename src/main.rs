//! Delver - AI Research Agent
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::Parser;
use delver::{cli, Config, Session};

/// Delver - AI Research Agent
#[derive(Parser, Debug)]
#[command(name = "delver")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Research query; prompts on stdin when omitted
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Chat model to use
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Maximum reasoning/tool steps before the loop stops
    #[arg(long)]
    max_steps: Option<usize>,

    /// File research notes are appended to
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration (loads .env before anything else is constructed)
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref model) = args.model {
        config.openai.model = model.clone();
    }

    if let Some(max_steps) = args.max_steps {
        config.agent.max_steps = max_steps;
    }

    if let Some(ref output) = args.output {
        if let Some(parent) = output.parent() {
            config.output.dir = parent.display().to_string();
        }
        if let Some(name) = output.file_name() {
            config.output.file = name.to_string_lossy().into_owned();
        }
    }

    if args.debug {
        config.agent.debug = true;
    }

    // Query from arguments, or one line from stdin
    let query = if args.query.is_empty() {
        cli::prompt_query()?
    } else {
        args.query.join(" ").trim().to_string()
    };

    if query.is_empty() {
        println!("Empty query. Aborting.");
        return Ok(());
    }

    let session = Session::from_config(config)?;
    session.run_and_report(&query).await?;

    Ok(())
}
