//! `showroom validate` command - Check stored collections against their schemas

use console::style;
use miette::Result;
use tracing::debug;

use crate::cli::helpers::open_workspace;
use crate::cli::GlobalOpts;
use crate::core::{Collection, Repository, RepositoryError};
use crate::schema::Validator;

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Collections to validate (default: all)
    pub collections: Vec<Collection>,

    /// Stop at the first collection with errors
    #[arg(long)]
    pub fail_fast: bool,

    /// Only show summary, not individual errors
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    checked: usize,
    passed: usize,
    failed: usize,
    missing: usize,
    records: usize,
    total_errors: usize,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;
    let store = workspace.open_store().map_err(RepositoryError::from)?;
    let repo = Repository::new(store);
    let validator = Validator::default();

    let targets: Vec<Collection> = if args.collections.is_empty() {
        Collection::all().to_vec()
    } else {
        args.collections.clone()
    };

    if !global.quiet {
        println!(
            "{} Validating {} collection(s)...\n",
            style("→").blue(),
            targets.len()
        );
    }

    let mut stats = ValidationStats::default();

    for collection in targets {
        // Read raw text: parsing through the repository would stop at the
        // first malformed record
        let Some(content) = repo.raw(collection)? else {
            stats.missing += 1;
            if !global.quiet {
                println!(
                    "{} {} - not stored, defaults apply on next access",
                    style("?").yellow(),
                    collection
                );
            }
            continue;
        };

        stats.checked += 1;
        debug!(%collection, bytes = content.len(), "validating");

        match validator.validate(collection, &content) {
            Ok(count) => {
                stats.passed += 1;
                stats.records += count;
                if !global.quiet {
                    println!(
                        "{} {} ({} record(s))",
                        style("✓").green(),
                        collection,
                        count
                    );
                }
            }
            Err(e) => {
                stats.failed += 1;
                stats.total_errors += e.violation_count();

                if !args.summary {
                    println!(
                        "{} {} - {} error(s)",
                        style("✗").red(),
                        collection,
                        e.violation_count()
                    );
                    let report = miette::Report::new(e);
                    println!("{:?}", report);
                }

                if args.fail_fast {
                    break;
                }
            }
        }
    }

    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Collections checked: {}", style(stats.checked).cyan());
    println!("  Collections passed:  {}", style(stats.passed).green());
    println!("  Collections failed:  {}", style(stats.failed).red());
    if stats.missing > 0 {
        println!("  Not stored:          {}", style(stats.missing).yellow());
    }
    println!("  Records:             {}", style(stats.records).cyan());
    println!("  Total errors:        {}", style(stats.total_errors).red());
    println!();

    match stats.failed {
        0 => {
            println!(
                "{} All collections passed validation!",
                style("✓").green().bold()
            );
            Ok(())
        }
        1 => Err(miette::miette!("Validation failed: 1 collection has errors")),
        n => Err(miette::miette!(
            "Validation failed: {} collections have errors",
            n
        )),
    }
}
