//! `showroom store` command - Raw key-value store access

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{open_workspace, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::{Collection, Repository, RepositoryError};

#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// Print the store directory and the file behind each key
    Path,

    /// Remove stored collections so the next access re-seeds them
    Reset(ResetArgs),

    /// Print a collection exactly as stored
    Dump(DumpArgs),
}

#[derive(clap::Args, Debug)]
pub struct ResetArgs {
    /// Collection to reset (vehicles, inquiries, preorders, testimonials, hero-media)
    #[arg(required_unless_present = "all")]
    pub collection: Option<Collection>,

    /// Reset every collection
    #[arg(long, conflicts_with = "collection")]
    pub all: bool,
}

#[derive(clap::Args, Debug)]
pub struct DumpArgs {
    /// Collection to print
    pub collection: Collection,
}

pub fn run(cmd: StoreCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        StoreCommands::Path => run_path(global),
        StoreCommands::Reset(args) => run_reset(args, global),
        StoreCommands::Dump(args) => run_dump(args, global),
    }
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;
    let store = workspace.open_store().map_err(RepositoryError::from)?;

    if global.quiet {
        println!("{}", store.dir().display());
        return Ok(());
    }

    println!("{}: {}", style("Store").bold(), style(store.dir().display()).cyan());
    for collection in Collection::all() {
        let path = store.path_for(collection.key());
        let state = if path.exists() {
            style("stored").green()
        } else {
            style("not seeded").dim()
        };
        println!(
            "  {:<14} {:<24} {}",
            collection.as_str(),
            collection.key(),
            state
        );
    }
    Ok(())
}

fn run_reset(args: ResetArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;
    let store = workspace.open_store().map_err(RepositoryError::from)?;
    let mut repo = Repository::new(store);

    let targets: Vec<Collection> = match args.collection {
        Some(c) if !args.all => vec![c],
        _ => Collection::all().to_vec(),
    };

    for collection in targets {
        let removed = repo.reset(collection)?;
        if removed {
            println!(
                "{} Reset {} ({})",
                style("✓").green(),
                style(collection.as_str()).cyan(),
                style(collection.key()).dim()
            );
        } else if !global.quiet {
            println!(
                "{} {} was not stored",
                style("!").yellow(),
                style(collection.as_str()).cyan()
            );
        }
    }

    if !global.quiet {
        println!();
        println!(
            "{}",
            style("Defaults are restored on the next access.").dim()
        );
    }
    Ok(())
}

fn run_dump(args: DumpArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;
    let store = workspace.open_store().map_err(RepositoryError::from)?;
    let repo = Repository::new(store);

    match repo.raw(args.collection)? {
        Some(content) => {
            println!("{}", content.trim_end());
        }
        None => {
            let key = repo.store().path_for(args.collection.key());
            eprintln!(
                "{} {} is not stored yet ({})",
                style("!").yellow(),
                args.collection,
                truncate_str(&key.display().to_string(), 60)
            );
        }
    }
    Ok(())
}
