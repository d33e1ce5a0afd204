//! `showroom testimonial` command - Client testimonials

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{open_repository, print_serialized, resolve_format};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::Testimonial;

#[derive(Subcommand, Debug)]
pub enum TestimonialCommands {
    /// List client testimonials
    List(ListArgs),

    /// Add a testimonial
    New(NewArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only testimonials with at least this rating
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub min_rating: Option<u8>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Client name
    #[arg(long)]
    pub name: String,

    /// Client role or title
    #[arg(long, default_value = "")]
    pub role: String,

    /// Quote text
    #[arg(long)]
    pub content: String,

    /// Rating from 1 to 5
    #[arg(long, default_value_t = 5)]
    pub rating: u8,

    /// Avatar image URL
    #[arg(long, default_value = "")]
    pub avatar: String,
}

pub fn run(cmd: TestimonialCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TestimonialCommands::List(args) => run_list(args, global),
        TestimonialCommands::New(args) => run_new(args, global),
    }
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 18),
    ColumnDef::new("name", "NAME", 22),
    ColumnDef::new("role", "ROLE", 24),
    ColumnDef::new("rating", "RATING", 8),
    ColumnDef::new("content", "QUOTE", 50),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));

    let testimonials: Vec<Testimonial> = repo.get_all()?;
    let visible: Vec<&Testimonial> = testimonials
        .iter()
        .filter(|t| args.min_rating.map_or(true, |min| t.rating >= min))
        .collect();

    if args.count {
        println!("{}", visible.len());
        return Ok(());
    }

    let format = resolve_format(global, &config, OutputFormat::Tsv);
    if print_serialized(&visible, format)? {
        return Ok(());
    }

    let rows = visible.iter().map(|t| {
        TableRow::new(t.id.clone())
            .cell("id", CellValue::Id(t.id.clone()))
            .cell("name", CellValue::Text(t.name.clone()))
            .cell("role", CellValue::Text(t.role.clone()))
            .cell("rating", CellValue::Rating(t.rating))
            .cell("content", CellValue::Text(t.content.clone()))
    });
    TableFormatter::new(LIST_COLUMNS, "testimonial").output(rows, format);
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;

    let testimonial = Testimonial::create(args.name, args.role, args.content, args.rating, args.avatar)
        .map_err(|e| miette::miette!("{}", e))?;
    let id = testimonial.id.clone();
    let stars = testimonial.stars();
    let name = testimonial.name.clone();
    repo.add(testimonial)?;

    if global.format == OutputFormat::Id {
        println!("{}", id);
        return Ok(());
    }

    println!(
        "{} Added testimonial {} from {} {}",
        style("✓").green(),
        style(&id).cyan(),
        style(name).yellow(),
        style(stars).yellow()
    );
    Ok(())
}
