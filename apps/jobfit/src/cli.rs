use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Scores a scanned résumé against a role's requirement set.
#[derive(Debug, Parser)]
#[command(name = "jobfit", version, about)]
pub struct Cli {
    /// Path to the résumé: a scanned image (png/jpg/…) or a text-based PDF.
    pub resume: Option<PathBuf>,

    /// Target role from the catalogue (case-insensitive).
    #[arg(short, long)]
    pub role: Option<String>,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List the supported roles and exit.
    #[arg(long)]
    pub list_roles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
