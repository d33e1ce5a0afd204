//! `showroom vehicle` command - Inventory browsing and listing management

use clap::{Subcommand, ValueEnum};
use console::style;
use csv::ReaderBuilder;
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::helpers::{open_repository, print_serialized, resolve_format};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::filter::{brand_options, InventoryFilter, Selection};
use crate::core::identity::resolve;
use crate::core::{format_mileage, Collection, Config, Currency};
use crate::entities::{Availability, NewVehicle, Vehicle, VehicleCategory};
use crate::schema::{SchemaWizard, WizardResult};

#[derive(Subcommand, Debug)]
pub enum VehicleCommands {
    /// List the inventory with brand, category and search filters
    List(ListArgs),

    /// Show brand filter options
    Brands,

    /// Show a vehicle's detail view
    Show(ShowArgs),

    /// Add a new vehicle listing
    New(NewArgs),

    /// Bulk-add listings from a CSV file
    Import(ImportArgs),
}

/// Availability filter
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AvailabilityFilter {
    InStock,
    PreOrder,
    Sold,
    /// Any availability
    All,
}

impl AvailabilityFilter {
    fn admits(self, availability: Availability) -> bool {
        match self {
            AvailabilityFilter::InStock => availability == Availability::InStock,
            AvailabilityFilter::PreOrder => availability == Availability::PreOrder,
            AvailabilityFilter::Sold => availability == Availability::Sold,
            AvailabilityFilter::All => true,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Brand to show ("All" for every brand)
    #[arg(long, short = 'b', default_value = "All", value_parser = parse_brand)]
    pub brand: Selection<String>,

    /// Category to show: All, Individual or Corporate
    #[arg(long, short = 'c', default_value = "All", value_parser = parse_category)]
    pub category: Selection<VehicleCategory>,

    /// Case-insensitive search in brand and model
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Filter by availability
    #[arg(long, short = 'a', default_value = "all")]
    pub availability: AvailabilityFilter,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// "All" (any case) lifts the restriction
fn parse_brand(s: &str) -> std::result::Result<Selection<String>, String> {
    s.parse()
}

fn parse_category(s: &str) -> std::result::Result<Selection<VehicleCategory>, String> {
    s.parse()
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Vehicle ID or unique ID prefix
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Manufacturer
    #[arg(long)]
    pub brand: Option<String>,

    /// Model name
    #[arg(long)]
    pub model: Option<String>,

    /// Model year
    #[arg(long)]
    pub year: Option<i32>,

    /// Price in the store currency
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<f64>,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Odometer reading in miles [default: 0]
    #[arg(long)]
    pub mileage: Option<u32>,

    /// Fuel type [default: Petrol]
    #[arg(long)]
    pub fuel: Option<String>,

    /// Transmission [default: Automatic]
    #[arg(long)]
    pub transmission: Option<String>,

    /// Long-form description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Sales category, Individual or Corporate [default: Individual]
    #[arg(long, short = 'c')]
    pub category: Option<VehicleCategory>,

    /// Availability: In-Stock, Pre-Order or Sold [default: In-Stock]
    #[arg(long, short = 'a')]
    pub availability: Option<Availability>,

    /// Feature highlights (comma-separated or repeated)
    #[arg(long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Prompt for every field not given on the command line
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file with a header row
    pub file: PathBuf,

    /// Parse and validate without writing to the store
    #[arg(long)]
    pub dry_run: bool,

    /// Continue importing after errors (default: stop on first error)
    #[arg(long)]
    pub skip_errors: bool,
}

pub fn run(cmd: VehicleCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        VehicleCommands::List(args) => run_list(args, global),
        VehicleCommands::Brands => run_brands(global),
        VehicleCommands::Show(args) => run_show(args, global),
        VehicleCommands::New(args) => run_new(args, global),
        VehicleCommands::Import(args) => run_import(args, global),
    }
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 18),
    ColumnDef::new("vehicle", "VEHICLE", 36),
    ColumnDef::new("year", "YEAR", 6),
    ColumnDef::new("price", "PRICE", 16),
    ColumnDef::new("mileage", "MILEAGE", 12),
    ColumnDef::new("category", "TYPE", 12),
    ColumnDef::new("availability", "STATUS", 12),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));
    let currency = config.currency();

    let vehicles: Vec<Vehicle> = repo.get_all()?;

    let filter = InventoryFilter::new()
        .brand(args.brand)
        .category(args.category)
        .search(args.search);
    debug!(?filter, total = vehicles.len(), "filtering inventory");

    let mut visible: Vec<&Vehicle> = filter
        .apply(&vehicles)
        .into_iter()
        .filter(|v| args.availability.admits(v.availability))
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
            println!("{}", style("No Match Found").bold());
            println!(
                "{}",
                style("Try adjusting your filters or search keywords.").dim()
            );
        }
        return Ok(());
    }

    let rows = visible.iter().map(|v| vehicle_row(v, currency));
    let formatter = TableFormatter::new(LIST_COLUMNS, "vehicle");
    let formatter = if global.quiet {
        formatter.without_summary()
    } else {
        formatter
    };
    formatter.output(rows, format);

    Ok(())
}

fn vehicle_row(v: &Vehicle, currency: Currency) -> TableRow {
    TableRow::new(v.id.clone())
        .cell("id", CellValue::Id(v.id.clone()))
        .cell("vehicle", CellValue::Text(v.display_name()))
        .cell("year", CellValue::Number(i64::from(v.year)))
        .cell("price", CellValue::Money(v.price, currency))
        .cell("mileage", CellValue::Text(format_mileage(v.mileage)))
        .cell("category", CellValue::Type(v.category.to_string()))
        .cell("availability", CellValue::Availability(v.availability))
}

fn run_brands(global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;
    let vehicles: Vec<Vehicle> = repo.get_all()?;
    let options = brand_options(&vehicles);

    if print_serialized(&options, global.format)? {
        return Ok(());
    }
    for option in options {
        println!("{}", option);
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));
    let currency = config.currency();

    let vehicles: Vec<Vehicle> = repo.get_all()?;
    let vehicle = resolve(&vehicles, &args.id).map_err(|e| miette::miette!("{}", e))?;

    if print_serialized(vehicle, global.format)? {
        return Ok(());
    }
    if global.format == OutputFormat::Id {
        println!("{}", vehicle.id);
        return Ok(());
    }

    print_card(vehicle, currency);
    println!();
    print_detail(vehicle, currency);
    Ok(())
}

/// Card header shared by the inventory detail and the home page
pub(crate) fn print_card(v: &Vehicle, currency: Currency) {
    let mut badges = vec![availability_badge(v.availability)];
    if v.is_brand_new() {
        badges.push(style("Brand New".to_string()).magenta().bold());
    }
    let badges: Vec<String> = badges.into_iter().map(|b| format!("[{}]", b)).collect();

    println!("{} {}", style(v.display_name()).bold(), badges.join(" "));
    println!(
        "  {}  {}  {}  {}",
        style(currency.format(v.price)).green().bold(),
        v.year,
        format_mileage(v.mileage),
        v.fuel_type
    );

    if !v.features.is_empty() {
        let shown: Vec<&str> = v.features.iter().take(2).map(String::as_str).collect();
        let extra = v.features.len().saturating_sub(2);
        if extra > 0 {
            println!("  {} {}", shown.join(" · "), style(format!("+{} more", extra)).dim());
        } else {
            println!("  {}", shown.join(" · "));
        }
    }

    let action = match v.availability {
        Availability::PreOrder => "Pre-Order",
        _ => "Acquire",
    };
    println!("  {} {}", style("→").blue(), style(action).yellow());
}

fn availability_badge(availability: Availability) -> console::StyledObject<String> {
    let s = availability.to_string();
    match availability {
        Availability::InStock => style(s).green(),
        Availability::PreOrder => style(s).yellow(),
        Availability::Sold => style(s).red(),
    }
}

fn print_detail(v: &Vehicle, currency: Currency) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&v.id).cyan());
    println!("{}: {}", style("Price").bold(), style(currency.format(v.price)).green());
    println!("{}: {}", style("Year").bold(), v.year);
    println!("{}: {}", style("Mileage").bold(), format_mileage(v.mileage));
    println!("{}: {}", style("Condition").bold(), availability_badge(v.availability));
    println!("{}: {}", style("Fuel").bold(), v.fuel_type);
    println!("{}: {}", style("Transmission").bold(), v.transmission);
    println!("{}: {}", style("Type").bold(), v.category);
    println!("{}", style("─".repeat(60)).dim());

    if !v.description.trim().is_empty() {
        println!();
        println!("{}:", style("Description").bold());
        println!("{}", v.description);
    }

    if !v.features.is_empty() {
        println!();
        println!("{} ({}):", style("Features").bold(), v.features.len());
        for feature in &v.features {
            println!("  • {}", feature);
        }
    }

    if !v.image.is_empty() {
        println!();
        println!("{}: {}", style("Image").bold(), style(&v.image).dim());
    }

    println!();
    let action = match v.availability {
        Availability::PreOrder => "Reserve Now",
        _ => "Purchase Acquisition",
    };
    println!("{} {}", style("→").blue(), style(action).yellow().bold());
}

/// Stored field names prompted for by `vehicle new --interactive`
const NEW_VEHICLE_FIELDS: &[&str] = &[
    "brand",
    "model",
    "year",
    "price",
    "mileage",
    "fuelType",
    "transmission",
    "type",
    "availability",
    "description",
];

/// Field values given on the command line, keyed by stored field name
fn preset_values(args: &NewArgs) -> HashMap<String, Value> {
    let given = [
        ("brand", args.brand.clone().map(Value::from)),
        ("model", args.model.clone().map(Value::from)),
        ("year", args.year.map(Value::from)),
        ("price", args.price.map(Value::from)),
        ("mileage", args.mileage.map(Value::from)),
        ("fuelType", args.fuel.clone().map(Value::from)),
        ("transmission", args.transmission.clone().map(Value::from)),
        ("type", args.category.map(|c| Value::from(c.as_str()))),
        ("availability", args.availability.map(|a| Value::from(a.as_str()))),
        ("description", args.description.clone().map(Value::from)),
    ];
    given
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

fn new_vehicle_from(
    values: &WizardResult,
    image: String,
    features: Vec<String>,
) -> std::result::Result<NewVehicle, String> {
    let text = |key: &str| values.get_string(key).map(str::to_string);

    let brand = text("brand").ok_or("--brand is required (or use --interactive)")?;
    let model = text("model").ok_or("--model is required (or use --interactive)")?;
    let year = values
        .get_i64("year")
        .ok_or("--year is required (or use --interactive)")?;
    let year = i32::try_from(year).map_err(|_| format!("Year out of range: {}", year))?;
    let price = values
        .get_f64("price")
        .ok_or("--price is required (or use --interactive)")?;
    let mileage = match values.get_i64("mileage") {
        Some(m) => u32::try_from(m).map_err(|_| format!("Mileage out of range: {}", m))?,
        None => 0,
    };
    let category = match text("type") {
        Some(c) => c.parse()?,
        None => VehicleCategory::Individual,
    };
    let availability = match text("availability") {
        Some(a) => a.parse()?,
        None => Availability::InStock,
    };

    Ok(NewVehicle {
        brand,
        model,
        year,
        price,
        image,
        mileage,
        fuel_type: text("fuelType").unwrap_or_else(|| "Petrol".to_string()),
        transmission: text("transmission").unwrap_or_else(|| "Automatic".to_string()),
        description: text("description").unwrap_or_default(),
        category,
        availability,
        features,
    })
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));

    let preset = preset_values(&args);
    let values = if args.interactive {
        SchemaWizard::new().run(Collection::Vehicles, NEW_VEHICLE_FIELDS, &preset)?
    } else {
        WizardResult { values: preset }
    };

    let features = args
        .features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();

    let fields =
        new_vehicle_from(&values, args.image, features).map_err(|e| miette::miette!("{}", e))?;
    let vehicle = Vehicle::create(fields).map_err(|e| miette::miette!("{}", e))?;

    let id = vehicle.id.clone();
    let name = vehicle.display_name();
    let price = config.currency().format(vehicle.price);
    repo.add(vehicle)?;

    if global.format == OutputFormat::Id {
        println!("{}", id);
        return Ok(());
    }

    println!(
        "{} Added vehicle {}",
        style("✓").green(),
        style(&id).cyan()
    );
    println!("   {} {}", style(&name).yellow(), style(price).green());
    Ok(())
}

/// Import counters
#[derive(Default)]
struct ImportStats {
    rows_processed: usize,
    created: usize,
    errors: usize,
}

/// Map lower-cased header names to column positions
fn build_header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect()
}

fn get_field(
    record: &csv::StringRecord,
    header_map: &HashMap<String, usize>,
    field: &str,
) -> Option<String> {
    header_map
        .get(field)
        .and_then(|&idx| record.get(idx))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Build a listing from one CSV row
fn vehicle_from_row(
    record: &csv::StringRecord,
    header_map: &HashMap<String, usize>,
) -> std::result::Result<Vehicle, String> {
    let field = |name: &str| get_field(record, header_map, name);
    let required = |name: &str| field(name).ok_or_else(|| format!("missing required field '{}'", name));

    let year = required("year")?
        .parse::<i32>()
        .map_err(|_| "year must be a whole number".to_string())?;
    let price = required("price")?
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| "price must be a number".to_string())?;
    let mileage = match field("mileage") {
        Some(m) => m
            .replace(',', "")
            .parse::<u32>()
            .map_err(|_| "mileage must be a whole number".to_string())?,
        None => 0,
    };
    let category = match field("type").or_else(|| field("category")) {
        Some(c) => c.parse()?,
        None => VehicleCategory::Individual,
    };
    let availability = match field("availability") {
        Some(a) => a.parse()?,
        None => Availability::InStock,
    };
    let features = field("features")
        .map(|f| {
            f.split(';')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Vehicle::create(NewVehicle {
        brand: required("brand")?,
        model: required("model")?,
        year,
        price,
        image: field("image").unwrap_or_default(),
        mileage,
        fuel_type: field("fueltype")
            .or_else(|| field("fuel"))
            .unwrap_or_else(|| "Petrol".to_string()),
        transmission: field("transmission").unwrap_or_else(|| "Automatic".to_string()),
        description: field("description").unwrap_or_default(),
        category,
        availability,
        features,
    })
    .map_err(|e| e.to_string())
}

fn run_import(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    if !args.file.exists() {
        return Err(miette::miette!("File not found: {}", args.file.display()));
    }

    let (_, mut repo) = open_repository(global)?;

    println!(
        "{} Importing vehicles from {}{}",
        style("→").blue(),
        style(args.file.display()).yellow(),
        if args.dry_run {
            style(" (dry run)").dim().to_string()
        } else {
            String::new()
        }
    );
    println!();

    let file = File::open(&args.file).into_diagnostic()?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = rdr.headers().into_diagnostic()?.clone();
    let header_map = build_header_map(&headers);

    let mut stats = ImportStats::default();
    let mut imported = Vec::new();

    for (row_idx, result) in rdr.records().enumerate() {
        let row_num = row_idx + 2;
        stats.rows_processed += 1;

        let outcome = result
            .map_err(|e| format!("CSV parse error: {}", e))
            .and_then(|record| vehicle_from_row(&record, &header_map));

        match outcome {
            Ok(vehicle) => {
                println!(
                    "{} Row {}: {}",
                    style("✓").green(),
                    row_num,
                    style(vehicle.display_name()).yellow()
                );
                stats.created += 1;
                imported.push(vehicle);
            }
            Err(e) => {
                eprintln!("{} Row {}: {}", style("✗").red(), row_num, e);
                stats.errors += 1;
                if !args.skip_errors {
                    return Err(miette::miette!("Import failed at row {}: {}", row_num, e));
                }
            }
        }
    }

    if !args.dry_run && !imported.is_empty() {
        // Prepend in file order so the first row ends up first
        let mut vehicles: Vec<Vehicle> = repo.get_all()?;
        vehicles.splice(0..0, imported);
        repo.save(&vehicles)?;
    }

    println!();
    println!("{}", style("─".repeat(50)).dim());
    println!("{}", style("Import Summary").bold());
    println!("{}", style("─".repeat(50)).dim());
    println!("  Rows processed:   {}", style(stats.rows_processed).cyan());
    println!("  Vehicles created: {}", style(stats.created).green());
    if stats.errors > 0 {
        println!("  Errors:           {}", style(stats.errors).red());
    }
    if args.dry_run {
        println!();
        println!("{}", style("Dry run complete. Nothing was written.").yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct ListCli {
        #[command(flatten)]
        list: ListArgs,
    }

    fn parse_list(args: &[&str]) -> ListArgs {
        let argv = std::iter::once("list").chain(args.iter().copied());
        ListCli::parse_from(argv).list
    }

    #[test]
    fn test_list_args_default_to_every_listing() {
        let args = parse_list(&[]);
        assert_eq!(args.brand, Selection::All);
        assert_eq!(args.category, Selection::All);
        assert!(args.search.is_empty());

        let filter = InventoryFilter::new()
            .brand(args.brand)
            .category(args.category)
            .search(args.search);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn test_list_args_brand_and_category() {
        let args = parse_list(&["--brand", "all", "--category", "ALL"]);
        assert_eq!(args.brand, Selection::All);
        assert_eq!(args.category, Selection::All);

        let args = parse_list(&["--brand", "Mercedes-Benz", "-c", "corporate"]);
        assert_eq!(args.brand, Selection::Only("Mercedes-Benz".to_string()));
        assert_eq!(args.category, Selection::Only(VehicleCategory::Corporate));
    }

    #[test]
    fn test_list_args_reject_unknown_category() {
        let parsed = ListCli::try_parse_from(["list", "--category", "fleet"]);
        assert!(parsed.is_err());
    }

    #[derive(Parser)]
    struct NewCli {
        #[command(flatten)]
        new: NewArgs,
    }

    #[test]
    fn test_new_vehicle_from_flags_uses_defaults() {
        let args = NewCli::parse_from([
            "new", "--brand", "Bentley", "--model", "Bentayga", "--year", "2024", "--price",
            "230000",
        ])
        .new;
        let values = WizardResult {
            values: preset_values(&args),
        };
        let fields = new_vehicle_from(&values, String::new(), Vec::new()).unwrap();

        assert_eq!(fields.brand, "Bentley");
        assert_eq!(fields.year, 2024);
        assert_eq!(fields.price, 230000.0);
        assert_eq!(fields.mileage, 0);
        assert_eq!(fields.fuel_type, "Petrol");
        assert_eq!(fields.category, VehicleCategory::Individual);
        assert_eq!(fields.availability, Availability::InStock);
    }

    #[test]
    fn test_new_vehicle_from_prompted_values() {
        // Shapes produced by the number and enum prompts
        let mut values = WizardResult::default();
        values.values.insert("brand".into(), Value::from("Maybach"));
        values.values.insert("model".into(), Value::from("S 680"));
        values.values.insert("year".into(), Value::from(2025i64));
        values.values.insert("price".into(), Value::from(320000.0));
        values.values.insert("mileage".into(), Value::from(12i64));
        values.values.insert("type".into(), Value::from("Corporate"));
        values.values.insert("availability".into(), Value::from("Pre-Order"));

        let fields = new_vehicle_from(&values, String::new(), Vec::new()).unwrap();
        assert_eq!(fields.year, 2025);
        assert_eq!(fields.mileage, 12);
        assert_eq!(fields.category, VehicleCategory::Corporate);
        assert_eq!(fields.availability, Availability::PreOrder);
    }

    #[test]
    fn test_new_vehicle_requires_core_fields() {
        let args = NewCli::parse_from(["new", "--brand", "Bentley"]).new;
        let values = WizardResult {
            values: preset_values(&args),
        };
        let err = new_vehicle_from(&values, String::new(), Vec::new()).unwrap_err();
        assert!(err.contains("--model"));
    }

    fn row(headers: &[&str], values: &[&str]) -> (csv::StringRecord, HashMap<String, usize>) {
        let header_map = build_header_map(&csv::StringRecord::from(headers.to_vec()));
        (csv::StringRecord::from(values.to_vec()), header_map)
    }

    #[test]
    fn test_vehicle_from_row_with_defaults() {
        let (record, map) = row(
            &["Brand", "Model", "Year", "Price"],
            &["Bentley", "Bentayga", "2024", "210,000"],
        );
        let vehicle = vehicle_from_row(&record, &map).unwrap();
        assert_eq!(vehicle.display_name(), "Bentley Bentayga");
        assert_eq!(vehicle.price, 210_000.0);
        assert_eq!(vehicle.category, VehicleCategory::Individual);
        assert_eq!(vehicle.availability, Availability::InStock);
        assert!(vehicle.features.is_empty());
    }

    #[test]
    fn test_vehicle_from_row_full() {
        let (record, map) = row(
            &["brand", "model", "year", "price", "type", "availability", "features", "mileage"],
            &["Rolls-Royce", "Cullinan", "2025", "400000", "Corporate", "Pre-Order", "Starlight; Armoured", "12"],
        );
        let vehicle = vehicle_from_row(&record, &map).unwrap();
        assert_eq!(vehicle.category, VehicleCategory::Corporate);
        assert_eq!(vehicle.availability, Availability::PreOrder);
        assert_eq!(vehicle.features, vec!["Starlight", "Armoured"]);
        assert_eq!(vehicle.mileage, 12);
    }

    #[test]
    fn test_vehicle_from_row_rejects_bad_values() {
        let (record, map) = row(&["brand", "model", "year"], &["Audi", "RS e-tron", "2024"]);
        assert!(vehicle_from_row(&record, &map)
            .unwrap_err()
            .contains("price"));

        let (record, map) = row(
            &["brand", "model", "year", "price"],
            &["Audi", "RS e-tron", "twenty", "1"],
        );
        assert!(vehicle_from_row(&record, &map).unwrap_err().contains("year"));

        let (record, map) = row(
            &["brand", "model", "year", "price"],
            &["Audi", "RS e-tron", "2024", "-5"],
        );
        assert!(vehicle_from_row(&record, &map).is_err());
    }

    #[test]
    fn test_availability_filter() {
        assert!(AvailabilityFilter::All.admits(Availability::Sold));
        assert!(AvailabilityFilter::PreOrder.admits(Availability::PreOrder));
        assert!(!AvailabilityFilter::InStock.admits(Availability::Sold));
    }
}
