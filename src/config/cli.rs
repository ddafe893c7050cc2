use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "forwards", version)]
#[command(about = "Manage Postfix mail forwards through the REST backend")]
pub struct CliConfig {
    #[arg(long, help = "Backend base URL [default: http://127.0.0.1:2105]")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds [default: 15]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List domains and their forwards
    List,
    /// Create a forward; FROM without '@' is completed with @DOMAIN
    Create {
        domain: String,
        from: String,
        to: String,
    },
    /// Change the destination of a forward
    Update {
        domain: String,
        from: String,
        to: String,
    },
    /// Delete a forward
    Delete { domain: String, from: String },
    /// Add a domain
    AddDomain { name: String },
    /// Remove a domain together with its forwards
    RemoveDomain { name: String },
}
