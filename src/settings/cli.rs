use super::Parser;
use crate::flog::Level;

/// Append one record to a log file.
#[derive(Parser, Debug)]
#[command(name = "flog", version)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long)]
    pub settings: Option<String>,

    /// Log file, overrides `flog.path`
    #[arg(long)]
    pub path: Option<String>,

    /// info, debug, warning or error; overrides `flog.level`
    #[arg(long)]
    pub level: Option<Level>,

    pub message: Vec<String>,
}
