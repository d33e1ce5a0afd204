//! `showroom init` command - Initialize a new workspace

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::Path;

use crate::core::workspace::{Workspace, WorkspaceError};
use crate::core::{Repository, RepositoryError};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Rewrite the workspace config even if .showroom/ already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    let workspace = if args.force {
        Workspace::init_force(&path)
    } else {
        Workspace::init(&path)
    };

    match workspace {
        Ok(workspace) => {
            let store = workspace.open_store().map_err(RepositoryError::from)?;
            let seeded = Repository::new(store).ensure_seeded()?;

            println!(
                "{} Initialized showroom workspace at {}",
                style("✓").green(),
                style(workspace.root().display()).cyan()
            );
            if !seeded.is_empty() {
                println!(
                    "{} Seeded {} collection(s)",
                    style("✓").green(),
                    style(seeded.len()).cyan()
                );
            }
            println!();
            print_structure(&workspace);
            println!();
            println!("Next steps:");
            println!("  {} Browse the inventory", style("showroom vehicle list").yellow());
            println!("  {} View the landing page", style("showroom home").yellow());
            println!("  {} Check stored data", style("showroom validate").yellow());
            Ok(())
        }
        Err(WorkspaceError::AlreadyExists(path)) => {
            println!(
                "{} Showroom workspace already exists at {}",
                style("!").yellow(),
                style(path.display()).cyan()
            );
            println!();
            println!("Use {} to reinitialize", style("showroom init --force").yellow());
            Ok(())
        }
        Err(e) => Err(miette::miette!("{}", e)),
    }
}

fn print_structure(workspace: &Workspace) {
    println!("Created workspace structure:");
    println!("  {}", style(".showroom/config.yaml").dim());
    if let Ok(entries) = std::fs::read_dir(workspace.store_dir()) {
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        for name in names {
            let rel = Path::new(".showroom/store").join(name);
            println!("  {}", style(rel.display()).dim());
        }
    }
}
