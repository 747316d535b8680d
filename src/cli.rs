//! CLI argument parsing module for depreview

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a category label override in format: KEY=NAME
fn parse_label(s: &str) -> Result<(String, String), String> {
    let (key, name) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid label format (expected KEY=NAME): {}", s))?;

    let key = key.trim();
    let name = name.trim();
    if key.is_empty() {
        return Err(format!("empty category key in label: {}", s));
    }
    if name.is_empty() {
        return Err(format!("empty label name for category: {}", key));
    }

    Ok((key.to_string(), name.to_string()))
}

/// Interactive review of outdated dependencies
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depreview",
    version,
    about = "Review outdated dependencies and upgrade the selected ones"
)]
pub struct CliArgs {
    /// Analysis snapshot (JSON) listing current and latest versions
    #[arg(long, value_name = "FILE")]
    pub analysis: PathBuf,

    /// Manifest to patch
    #[arg(long, value_name = "FILE", default_value = "package.json")]
    pub manifest: PathBuf,

    /// Write the patched manifest here instead of over the original
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override a category display label (can be specified multiple times)
    #[arg(long, value_name = "KEY=NAME", value_parser = parse_label, action = ArgAction::Append)]
    pub label: Vec<(String, String)>,

    // Selection options
    /// Select every pending upgrade without prompting
    #[arg(long)]
    pub all: bool,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    // Output options
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Check if the operator should be prompted
    pub fn is_interactive(&self) -> bool {
        !self.all
    }

    /// Check if output should be styled
    pub fn use_color(&self) -> bool {
        !self.no_color
    }
}
