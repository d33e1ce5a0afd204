//! Shared helper functions for CLI commands
//!
//! Workspace/repository opening, output format resolution and small string
//! utilities used across command modules.

use clap::ValueEnum;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, FileStore, Repository, Workspace};

/// Locate the workspace from `--workspace` or the current directory
pub fn open_workspace(global: &GlobalOpts) -> Result<Workspace> {
    let found = match &global.workspace {
        Some(path) => Workspace::discover_from(path),
        None => Workspace::discover(),
    };
    found.map_err(|e| miette::miette!("{}", e))
}

/// Open the workspace store with every collection seeded
pub fn open_repository(global: &GlobalOpts) -> Result<(Workspace, Repository<FileStore>)> {
    let workspace = open_workspace(global)?;
    let repo = workspace.open_repository()?;
    Ok((workspace, repo))
}

/// Effective output format: `--format` wins, then `default_format` from
/// config, then `fallback`
pub fn resolve_format(global: &GlobalOpts, config: &Config, fallback: OutputFormat) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    match config
        .default_format
        .as_deref()
        .and_then(|f| OutputFormat::from_str(f, true).ok())
    {
        Some(OutputFormat::Auto) | None => fallback,
        Some(f) => f,
    }
}

/// Print records as JSON or YAML. Returns false for other formats.
pub fn print_serialized<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).into_diagnostic()?;
            println!("{}", json);
            Ok(true)
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(value).into_diagnostic()?;
            print!("{}", yaml);
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Format a string ID for display, truncating if too long
///
/// Seeded records use short numeric ids; generated ones are 26-char ULIDs.
pub fn format_short_id_str(id: &str) -> String {
    if id.chars().count() > 16 {
        let head: String = id.chars().take(13).collect();
        format!("{}...", head)
    } else {
        id.to_string()
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
