//! `showroom preorder` command - Deposit-backed reservations

use clap::{Subcommand, ValueEnum};
use console::style;
use miette::Result;
use tracing::warn;

use crate::cli::helpers::{open_repository, print_serialized, resolve_format, truncate_str};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::resolve;
use crate::core::Config;
use crate::entities::{Availability, PreOrder, PreOrderStatus, Vehicle};

#[derive(Subcommand, Debug)]
pub enum PreorderCommands {
    /// List pending reserves, newest first
    List(ListArgs),

    /// Reserve a vehicle with a deposit
    New(NewArgs),

    /// Approve, cancel or reopen a reservation
    Status(StatusArgs),
}

/// Status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Approved,
    Cancelled,
    /// All statuses
    All,
}

impl StatusFilter {
    fn admits(self, status: PreOrderStatus) -> bool {
        match self {
            StatusFilter::Pending => status == PreOrderStatus::Pending,
            StatusFilter::Approved => status == PreOrderStatus::Approved,
            StatusFilter::Cancelled => status == PreOrderStatus::Cancelled,
            StatusFilter::All => true,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by status
    #[arg(long, short = 's', default_value = "all")]
    pub status: StatusFilter,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Vehicle to reserve (ID or prefix)
    #[arg(long)]
    pub car: String,

    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Customer email
    #[arg(long)]
    pub email: String,

    /// Deposit amount in the store currency
    #[arg(long)]
    pub deposit: f64,

    /// Account placing the reservation (default: configured author)
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Pre-order ID or unique ID prefix
    pub id: String,

    /// New status: pending, approved or cancelled
    pub status: PreOrderStatus,
}

pub fn run(cmd: PreorderCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PreorderCommands::List(args) => run_list(args, global),
        PreorderCommands::New(args) => run_new(args, global),
        PreorderCommands::Status(args) => run_status(args, global),
    }
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 18),
    ColumnDef::new("date", "DATE", 12),
    ColumnDef::new("customer", "CUSTOMER", 22),
    ColumnDef::new("vehicle", "VEHICLE", 36),
    ColumnDef::new("deposit", "DEPOSIT", 14),
    ColumnDef::new("status", "STATUS", 11),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));
    let currency = config.currency();

    let orders: Vec<PreOrder> = repo.get_all()?;
    let vehicles: Vec<Vehicle> = repo.get_all()?;

    let mut visible: Vec<&PreOrder> = orders
        .iter()
        .filter(|o| args.status.admits(o.status))
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

    if format == OutputFormat::Tsv && !global.quiet {
        println!("{}", style("Pending Reserves").bold());
        println!();
    }

    let rows = visible.iter().map(|o| {
        // Weak reference: fall back to the raw id when the listing is gone
        let vehicle = vehicles
            .iter()
            .find(|v| v.id == o.car_id)
            .map(Vehicle::display_name)
            .unwrap_or_else(|| o.car_id.clone());
        TableRow::new(o.id.clone())
            .cell("id", CellValue::Id(o.id.clone()))
            .cell("date", CellValue::Date(o.date))
            .cell("customer", CellValue::Text(o.customer_name.clone()))
            .cell("vehicle", CellValue::Text(vehicle))
            .cell("deposit", CellValue::Money(o.deposit_amount, currency))
            .cell("status", CellValue::PreOrderStatus(o.status))
    });

    TableFormatter::new(LIST_COLUMNS, "pre-order")
        .without_summary()
        .output(rows, format);

    if format == OutputFormat::Tsv && !global.quiet {
        println!();
        println!("{}", style("End of pre-order history.").dim());
    }
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));

    let vehicles: Vec<Vehicle> = repo.get_all()?;
    let car_id = match resolve(&vehicles, &args.car) {
        Ok(vehicle) => {
            if vehicle.availability != Availability::PreOrder {
                warn!(
                    "{} is listed as {}, not Pre-Order",
                    vehicle.display_name(),
                    vehicle.availability
                );
            }
            vehicle.id.clone()
        }
        Err(e) => {
            warn!("{}; recording the reservation anyway", e);
            args.car.clone()
        }
    };

    let user_id = args.user.unwrap_or_else(|| config.author());
    let order = PreOrder::create(car_id, user_id, args.name, args.email, args.deposit)
        .map_err(|e| miette::miette!("{}", e))?;
    let id = order.id.clone();
    let deposit = config.currency().format(order.deposit_amount);
    repo.add(order)?;

    if global.format == OutputFormat::Id {
        println!("{}", id);
        return Ok(());
    }

    println!(
        "{} Reserved with deposit {} ({})",
        style("✓").green(),
        style(deposit).green(),
        style(&id).cyan()
    );
    Ok(())
}

fn run_status(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;
    let orders: Vec<PreOrder> = repo.get_all()?;
    let mut order = resolve(&orders, &args.id)
        .map_err(|e| miette::miette!("{}", e))?
        .clone();

    let previous = order.status;
    order.status = args.status;
    let id = order.id.clone();
    repo.update(order)?;

    println!(
        "{} Pre-order {} {} → {}",
        style("✓").green(),
        style(truncate_str(&id, 16)).cyan(),
        style(previous).dim(),
        style(args.status).yellow()
    );
    Ok(())
}
