use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "uxr-ds")]
#[command(about = "Preview the design-system template helpers from the command line")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Call a template function; each argument is parsed as JSON, falling back to a plain string.
    Call {
        name: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print the page window for a page of a paginated list.
    Paginate {
        #[arg(allow_hyphen_values = true)]
        current: i64,
        total: i64,
    },
    /// List the registered template function names.
    List,
}

/// `42` and `"x"` are JSON; `hello` is not, so it becomes the string `"hello"`.
pub fn parse_arg(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}
