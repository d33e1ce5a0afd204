//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    admin::AdminArgs, completions::CompletionsArgs, config::ConfigCommands, hero::HeroCommands,
    home::HomeArgs, init::InitArgs, inquiry::InquiryCommands, preorder::PreorderCommands,
    store::StoreCommands, testimonial::TestimonialCommands, validate::ValidateArgs,
    vehicle::VehicleCommands,
};

#[derive(Parser)]
#[command(name = "showroom")]
#[command(author, version, about = "Luxury car showroom console")]
#[command(long_about = "Browse the vehicle inventory, take inquiries and pre-orders, and manage the landing page hero banner. Data lives in a local key-value store under .showroom/.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Workspace root (default: auto-detect by finding .showroom/)
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new showroom workspace
    Init(InitArgs),

    /// Landing page: hero slide, showroom listings and testimonials
    Home(HomeArgs),

    /// Vehicle inventory
    #[command(subcommand)]
    Vehicle(VehicleCommands),

    /// Customer inquiries (general, walk-in, corporate)
    #[command(subcommand)]
    Inquiry(InquiryCommands),

    /// Pre-order reservations
    #[command(subcommand)]
    Preorder(PreorderCommands),

    /// Client testimonials
    #[command(subcommand)]
    Testimonial(TestimonialCommands),

    /// Hero banner slides
    #[command(subcommand)]
    Hero(HeroCommands),

    /// Admin dashboard summary
    Admin(AdminArgs),

    /// Inspect or reset the raw key-value store
    #[command(subcommand)]
    Store(StoreCommands),

    /// Validate stored collections against their schemas
    Validate(ValidateArgs),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (pretty for show, tsv for list)
    #[default]
    Auto,
    /// YAML format
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format, same shape as the store
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
