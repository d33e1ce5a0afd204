//! `showroom inquiry` command - General, walk-in and corporate inquiries

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::Result;
use serde_json::Value;
use std::collections::HashMap;

use crate::cli::helpers::{open_repository, print_serialized, resolve_format, truncate_str};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::resolve;
use crate::core::{Collection, Config};
use crate::entities::{Inquiry, InquiryKind, InquiryStatus, Vehicle};
use crate::schema::wizard::SchemaWizard;

#[derive(Subcommand, Debug)]
pub enum InquiryCommands {
    /// List inquiries, newest first
    List(ListArgs),

    /// Submit a new inquiry
    New(NewArgs),

    /// Show an inquiry
    Show(ShowArgs),

    /// Change an inquiry's follow-up status
    Status(StatusArgs),
}

/// Inquiry channel on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    General,
    WalkIn,
    Corporate,
}

impl From<KindArg> for InquiryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::General => InquiryKind::General,
            KindArg::WalkIn => InquiryKind::WalkIn,
            KindArg::Corporate => InquiryKind::Corporate,
        }
    }
}

/// Fleet sizes offered on the corporate form
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FleetSize {
    #[value(name = "1-5")]
    Small,
    #[value(name = "5-15")]
    Medium,
    #[value(name = "15+")]
    Large,
}

impl FleetSize {
    fn label(self) -> &'static str {
        match self {
            FleetSize::Small => "1 - 5 Vehicles",
            FleetSize::Medium => "5 - 15 Vehicles",
            FleetSize::Large => "15+ Vehicles",
        }
    }
}

/// Status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Contacted,
    Closed,
    /// All statuses
    All,
}

impl StatusFilter {
    fn admits(self, status: InquiryStatus) -> bool {
        match self {
            StatusFilter::Pending => status == InquiryStatus::Pending,
            StatusFilter::Contacted => status == InquiryStatus::Contacted,
            StatusFilter::Closed => status == InquiryStatus::Closed,
            StatusFilter::All => true,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Filter by inquiry type
    #[arg(long = "type", short = 't')]
    pub kind: Option<KindArg>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Inquiry type
    #[arg(long = "type", short = 't', default_value = "general")]
    pub kind: KindArg,

    /// Customer name
    #[arg(long)]
    pub name: Option<String>,

    /// Customer email
    #[arg(long)]
    pub email: Option<String>,

    /// Customer phone
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Vehicle the inquiry is about (ID or prefix)
    #[arg(long)]
    pub car: Option<String>,

    /// Message body
    #[arg(long, short = 'm', default_value = "")]
    pub message: String,

    /// Organization name (corporate inquiries)
    #[arg(long)]
    pub organization: Option<String>,

    /// Industry (corporate inquiries)
    #[arg(long)]
    pub industry: Option<String>,

    /// Estimated fleet size (corporate inquiries)
    #[arg(long)]
    pub fleet_size: Option<FleetSize>,

    /// Prompt for missing fields
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Inquiry ID or unique ID prefix
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Inquiry ID or unique ID prefix
    pub id: String,

    /// New status: pending, contacted or closed
    pub status: InquiryStatus,
}

pub fn run(cmd: InquiryCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        InquiryCommands::List(args) => run_list(args, global),
        InquiryCommands::New(args) => run_new(args, global),
        InquiryCommands::Show(args) => run_show(args, global),
        InquiryCommands::Status(args) => run_status(args, global),
    }
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 18),
    ColumnDef::new("date", "DATE", 12),
    ColumnDef::new("type", "TYPE", 11),
    ColumnDef::new("name", "NAME", 22),
    ColumnDef::new("email", "EMAIL", 28),
    ColumnDef::new("message", "MESSAGE", 40),
    ColumnDef::new("status", "STATUS", 11),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));

    let inquiries: Vec<Inquiry> = repo.get_all()?;
    let kind = args.kind.map(InquiryKind::from);
    let mut visible: Vec<&Inquiry> = inquiries
        .iter()
        .filter(|i| args.status.admits(i.status))
        .filter(|i| kind.map_or(true, |k| i.kind == k))
        .collect();

    if let Some(limit) = args.limit {
        visible.truncate(limit);
    }

    if args.count {
        println!("{}", visible.len());
        return Ok(());
    }

    let format = resolve_format(global, &config, OutputFormat::Tsv);
    if print_serialized(&visible, format)? {
        return Ok(());
    }

    if visible.is_empty() {
        if format == OutputFormat::Tsv && !global.quiet {
            println!("{}", style("No active inquiries.").dim());
        }
        return Ok(());
    }

    let rows = visible.iter().map(|i| {
        TableRow::new(i.id.clone())
            .cell("id", CellValue::Id(i.id.clone()))
            .cell("date", CellValue::Date(i.date))
            .cell("type", CellValue::Type(i.kind.to_string()))
            .cell("name", CellValue::Text(i.name.clone()))
            .cell("email", CellValue::Text(i.email.clone()))
            .cell("message", CellValue::Text(i.message.replace('\n', " ")))
            .cell("status", CellValue::InquiryStatus(i.status))
    });

    let formatter = TableFormatter::new(LIST_COLUMNS, "inquiry");
    let formatter = if global.quiet {
        formatter.without_summary()
    } else {
        formatter
    };
    formatter.output(rows, format);
    Ok(())
}

/// Corporate form fields folded into the message body
fn corporate_message(
    organization: Option<&str>,
    industry: Option<&str>,
    fleet_size: Option<FleetSize>,
    message: &str,
) -> String {
    let mut lines = Vec::new();
    if let Some(org) = organization.filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Organization: {}", org.trim()));
    }
    if let Some(industry) = industry.filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Industry: {}", industry.trim()));
    }
    if let Some(size) = fleet_size {
        lines.push(format!("Fleet Size: {}", size.label()));
    }
    if !message.trim().is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(message.trim().to_string());
    }
    lines.join("\n")
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;
    let kind = InquiryKind::from(args.kind);

    let car_id = match args.car.as_deref() {
        Some(query) => {
            let vehicles: Vec<Vehicle> = repo.get_all()?;
            match resolve(&vehicles, query) {
                Ok(v) => Some(v.id.clone()),
                Err(e) => {
                    // Weak reference: keep what the customer typed
                    tracing::warn!("{}", e);
                    Some(query.to_string())
                }
            }
        }
        None => None,
    };

    let message = if kind == InquiryKind::Corporate {
        corporate_message(
            args.organization.as_deref(),
            args.industry.as_deref(),
            args.fleet_size,
            &args.message,
        )
    } else {
        args.message.clone()
    };

    let (name, email, phone, message) = if args.interactive {
        let mut preset = HashMap::new();
        if let Some(ref name) = args.name {
            preset.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(ref email) = args.email {
            preset.insert("email".to_string(), Value::String(email.clone()));
        }
        if !args.phone.is_empty() {
            preset.insert("phone".to_string(), Value::String(args.phone.clone()));
        }
        if !message.is_empty() {
            preset.insert("message".to_string(), Value::String(message.clone()));
        }

        let wizard = SchemaWizard::new();
        let result = wizard.run(
            Collection::Inquiries,
            &["name", "email", "phone", "message"],
            &preset,
        )?;
        (
            result.get_string("name").unwrap_or_default().to_string(),
            result.get_string("email").unwrap_or_default().to_string(),
            result.get_string("phone").unwrap_or_default().to_string(),
            result.get_string("message").unwrap_or_default().to_string(),
        )
    } else {
        let name = args
            .name
            .ok_or_else(|| miette::miette!("--name is required (or use --interactive)"))?;
        let email = args
            .email
            .ok_or_else(|| miette::miette!("--email is required (or use --interactive)"))?;
        (name, email, args.phone, message)
    };

    let inquiry = Inquiry::create(kind, name, email, phone, message, car_id)
        .map_err(|e| miette::miette!("{}", e))?;
    let id = inquiry.id.clone();
    let name = inquiry.name.clone();
    repo.add(inquiry)?;

    if global.format == OutputFormat::Id {
        println!("{}", id);
        return Ok(());
    }

    println!(
        "{} Received {} inquiry {}",
        style("✓").green(),
        kind.as_str().to_lowercase(),
        style(&id).cyan()
    );
    println!("   From: {}", style(&name).yellow());
    if !global.quiet {
        println!(
            "   {}",
            style("Our concierge team will contact you shortly.").dim()
        );
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;
    let inquiries: Vec<Inquiry> = repo.get_all()?;
    let inquiry = resolve(&inquiries, &args.id).map_err(|e| miette::miette!("{}", e))?;

    if print_serialized(inquiry, global.format)? {
        return Ok(());
    }
    if global.format == OutputFormat::Id {
        println!("{}", inquiry.id);
        return Ok(());
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&inquiry.id).cyan());
    println!("{}: {}", style("Type").bold(), inquiry.kind);
    println!("{}: {}", style("Name").bold(), style(&inquiry.name).yellow());
    println!("{}: {}", style("Email").bold(), inquiry.email);
    if !inquiry.phone.is_empty() {
        println!("{}: {}", style("Phone").bold(), inquiry.phone);
    }
    if let Some(ref car_id) = inquiry.car_id {
        let vehicles: Vec<Vehicle> = repo.get_all()?;
        let label = vehicles
            .iter()
            .find(|v| &v.id == car_id)
            .map(|v| format!("{} ({})", v.display_name(), car_id))
            .unwrap_or_else(|| car_id.clone());
        println!("{}: {}", style("Vehicle").bold(), label);
    }
    println!(
        "{}: {}",
        style("Date").bold(),
        inquiry.date.format("%Y-%m-%d %H:%M")
    );
    println!("{}: {}", style("Status").bold(), inquiry.status);
    println!("{}", style("─".repeat(60)).dim());

    if !inquiry.message.trim().is_empty() {
        println!();
        println!("{}", inquiry.message);
    }
    Ok(())
}

fn run_status(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;
    let inquiries: Vec<Inquiry> = repo.get_all()?;
    let mut inquiry = resolve(&inquiries, &args.id)
        .map_err(|e| miette::miette!("{}", e))?
        .clone();

    let previous = inquiry.status;
    inquiry.status = args.status;
    let id = inquiry.id.clone();
    repo.update(inquiry)?;

    println!(
        "{} Inquiry {} {} → {}",
        style("✓").green(),
        style(truncate_str(&id, 16)).cyan(),
        style(previous).dim(),
        style(args.status).yellow()
    );
    Ok(())
}
