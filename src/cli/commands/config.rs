//! `showroom config` command - Configuration management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::helpers::{open_workspace, print_serialized};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Currency};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Remove a configuration value
    Unset(UnsetArgs),

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (see `showroom config keys`)
    pub key: String,

    /// Value to set
    pub value: String,

    /// Set in global (user) config instead of workspace config
    #[arg(long, short = 'g')]
    pub global: bool,
}

#[derive(clap::Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key to remove
    pub key: String,

    /// Remove from global (user) config instead of workspace config
    #[arg(long, short = 'g')]
    pub global: bool,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("author", "User id recorded on new pre-orders"),
    ("currency", "Display currency: USD, NGN or EUR"),
    (
        "default_format",
        "Default output format (yaml, json, tsv, csv, md, id)",
    ),
    ("hero_interval_ms", "Hero rotation interval in milliseconds"),
];

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Set(args) => run_set(args, global),
        ConfigCommands::Unset(args) => run_unset(args, global),
        ConfigCommands::Path => run_path(global),
        ConfigCommands::Keys => run_keys(),
    }
}

fn load_effective(global: &GlobalOpts) -> Config {
    let workspace = open_workspace(global).ok();
    Config::load_for(workspace.as_ref())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_effective(global);

    if let Some(key) = &args.key {
        return match get_config_value(&config, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None => Err(miette::miette!("Key '{}' is not set", key)),
        };
    }

    if global.format != OutputFormat::Auto && print_serialized(&config, global.format)? {
        return Ok(());
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();
    for (key, _) in VALID_KEYS {
        print_config_value(key, get_config_value(&config, key).as_deref());
    }

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Environment variables (SHOWROOM_AUTHOR, SHOWROOM_CURRENCY)");
    println!("  2. Workspace config (.showroom/config.yaml)");
    println!("  3. Global config (~/.config/showroom/config.yaml)");
    Ok(())
}

fn run_set(args: SetArgs, global: &GlobalOpts) -> Result<()> {
    let value = normalize_value(&args.key, &args.value)?;
    let config_path = target_path(args.global, global)?;

    let mut config_map = read_mapping(&config_path)?;
    if let serde_yml::Value::Mapping(map) = &mut config_map {
        map.insert(serde_yml::Value::String(args.key.clone()), value);
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    let yaml = serde_yml::to_string(&config_map).into_diagnostic()?;
    fs::write(&config_path, yaml).into_diagnostic()?;

    let scope = if args.global { "global" } else { "workspace" };
    println!(
        "{} Set {} {} {} in {} config",
        style("✓").green(),
        style(&args.key).cyan(),
        style("→").dim(),
        style(&args.value).yellow(),
        scope
    );
    Ok(())
}

fn run_unset(args: UnsetArgs, global: &GlobalOpts) -> Result<()> {
    let config_path = target_path(args.global, global)?;
    if !config_path.exists() {
        return Err(miette::miette!(
            "Config file does not exist: {}",
            config_path.display()
        ));
    }

    let mut config_map = read_mapping(&config_path)?;
    let removed = match &mut config_map {
        serde_yml::Value::Mapping(map) => map
            .remove(&serde_yml::Value::String(args.key.clone()))
            .is_some(),
        _ => false,
    };
    if !removed {
        return Err(miette::miette!("Key '{}' not found in config", args.key));
    }

    let yaml = serde_yml::to_string(&config_map).into_diagnostic()?;
    fs::write(&config_path, yaml).into_diagnostic()?;

    let scope = if args.global { "global" } else { "workspace" };
    println!(
        "{} Removed {} from {} config",
        style("✓").green(),
        style(&args.key).cyan(),
        scope
    );
    Ok(())
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    println!("{}", style("Configuration file paths:").bold());
    println!();

    match Config::global_config_path() {
        Some(path) => print_path("Global:", &path),
        None => println!(
            "  {} {}",
            style("Global:").cyan(),
            style("(no config directory on this platform)").dim()
        ),
    }

    println!();
    match open_workspace(global) {
        Ok(workspace) => print_path("Workspace:", &workspace.config_path()),
        Err(_) => println!(
            "  {} {}",
            style("Workspace:").cyan(),
            style("(not in a showroom workspace)").dim()
        ),
    }
    Ok(())
}

fn print_path(label: &str, path: &Path) {
    println!("  {} {}", style(label).cyan(), path.display());
    let state = if path.exists() {
        style("(exists)").green()
    } else {
        style("(not created)").dim()
    };
    println!("  {:width$} {}", "", state, width = label.len());
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();
    for (key, description) in VALID_KEYS {
        println!("  {:<20} {}", style(key).cyan(), style(description).dim());
    }
    println!();
    println!(
        "{}",
        style("Use 'showroom config set <key> <value>' to set a value.").dim()
    );
    Ok(())
}

fn target_path(use_global: bool, global: &GlobalOpts) -> Result<PathBuf> {
    if use_global {
        Config::global_config_path()
            .ok_or_else(|| miette::miette!("Could not determine global config directory"))
    } else {
        Ok(open_workspace(global)?.config_path())
    }
}

fn read_mapping(path: &Path) -> Result<serde_yml::Value> {
    if !path.exists() {
        return Ok(serde_yml::Value::Mapping(Default::default()));
    }
    let content = fs::read_to_string(path).into_diagnostic()?;
    match serde_yml::from_str::<serde_yml::Value>(&content) {
        Ok(v @ serde_yml::Value::Mapping(_)) => Ok(v),
        // Comment-only or empty files parse to null
        _ => Ok(serde_yml::Value::Mapping(Default::default())),
    }
}

/// Check a value against its key and convert it to the stored YAML type
fn normalize_value(key: &str, value: &str) -> Result<serde_yml::Value> {
    match key {
        "author" => Ok(serde_yml::Value::String(value.to_string())),
        "currency" => {
            let currency: Currency = value.parse().map_err(|e| miette::miette!("{}", e))?;
            Ok(serde_yml::Value::String(currency.code().to_string()))
        }
        "default_format" => {
            use clap::ValueEnum;
            let format = OutputFormat::from_str(value, true)
                .map_err(|_| miette::miette!("Unknown output format: {}", value))?;
            let name = format
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_else(|| value.to_lowercase());
            Ok(serde_yml::Value::String(name))
        }
        "hero_interval_ms" => {
            let ms: u64 = value
                .parse()
                .map_err(|_| miette::miette!("hero_interval_ms must be a whole number"))?;
            Ok(serde_yml::Value::Number(ms.into()))
        }
        _ => Err(miette::miette!(
            "Unknown config key '{}'. Run 'showroom config keys' to list valid keys",
            key
        )),
    }
}

fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "author" => config.author.clone(),
        "currency" => config.currency.map(|c| c.code().to_string()),
        "default_format" => config.default_format.clone(),
        "hero_interval_ms" => config.hero_interval_ms.map(|ms| ms.to_string()),
        _ => None,
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("  {}: {}", style(key).cyan(), style(v).yellow()),
        None => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
    }
}
