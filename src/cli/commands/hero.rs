//! `showroom hero` command - Landing page hero slides

use clap::Subcommand;
use console::style;
use miette::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cli::helpers::{open_repository, print_serialized, resolve_format};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::resolve;
use crate::core::{Collection, Config, HeroCarousel};
use crate::entities::{HeroMedia, MediaKind};
use crate::schema::{SchemaWizard, WizardResult};

#[derive(Subcommand, Debug)]
pub enum HeroCommands {
    /// List all slides, active and inactive
    List(ListArgs),

    /// Add an active slide
    Add(AddArgs),

    /// Activate or deactivate a slide
    Toggle(ToggleArgs),

    /// Rotate through the active slides in real time
    Play(PlayArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only show active slides
    #[arg(long)]
    pub active: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Image or video URL
    #[arg(long)]
    pub url: Option<String>,

    /// Headline
    #[arg(long)]
    pub title: Option<String>,

    /// Supporting line under the headline
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Media type: image or video [default: image]
    #[arg(long = "type", short = 't')]
    pub kind: Option<MediaKind>,

    /// Store the slide switched off
    #[arg(long)]
    pub inactive: bool,

    /// Prompt for every field not given on the command line
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct ToggleArgs {
    /// Slide ID or unique ID prefix
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct PlayArgs {
    /// Stop after this many advances (default: one full pass)
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Override the rotation interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Slide to start from (0-based)
    #[arg(long, default_value_t = 0)]
    pub start: usize,
}

pub fn run(cmd: HeroCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        HeroCommands::List(args) => run_list(args, global),
        HeroCommands::Add(args) => run_add(args, global),
        HeroCommands::Toggle(args) => run_toggle(args, global),
        HeroCommands::Play(args) => run_play(args, global),
    }
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 18),
    ColumnDef::new("type", "TYPE", 7),
    ColumnDef::new("title", "TITLE", 30),
    ColumnDef::new("subtitle", "SUBTITLE", 40),
    ColumnDef::new("active", "ACTIVE", 7),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));

    let media: Vec<HeroMedia> = repo.get_all()?;
    let visible: Vec<&HeroMedia> = media.iter().filter(|m| !args.active || m.active).collect();

    let format = resolve_format(global, &config, OutputFormat::Tsv);
    if print_serialized(&visible, format)? {
        return Ok(());
    }

    let rows = visible.iter().map(|m| {
        TableRow::new(m.id.clone())
            .cell("id", CellValue::Id(m.id.clone()))
            .cell("type", CellValue::Type(m.kind.to_string()))
            .cell("title", CellValue::Text(m.title.clone()))
            .cell("subtitle", CellValue::Text(m.subtitle.clone()))
            .cell("active", CellValue::Flag(m.active))
    });
    TableFormatter::new(LIST_COLUMNS, "slide").output(rows, format);
    Ok(())
}

/// Stored field names prompted for by `hero add --interactive`
const NEW_SLIDE_FIELDS: &[&str] = &["type", "url", "title", "subtitle", "active"];

fn preset_values(args: &AddArgs) -> HashMap<String, Value> {
    let given = [
        ("type", args.kind.map(|k| Value::from(k.to_string()))),
        ("url", args.url.clone().map(Value::from)),
        ("title", args.title.clone().map(Value::from)),
        ("subtitle", args.subtitle.clone().map(Value::from)),
        ("active", args.inactive.then_some(Value::Bool(false))),
    ];
    given
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

fn slide_from(values: &WizardResult) -> std::result::Result<HeroMedia, String> {
    let text = |key: &str| values.get_string(key).map(str::to_string);

    let kind = match text("type") {
        Some(k) => k.parse()?,
        None => MediaKind::Image,
    };
    let url = text("url").ok_or("--url is required (or use --interactive)")?;
    let title = text("title").ok_or("--title is required (or use --interactive)")?;

    let mut slide = HeroMedia::create(kind, url, title, text("subtitle").unwrap_or_default())
        .map_err(|e| e.to_string())?;
    slide.active = values.get_bool("active").unwrap_or(true);
    Ok(slide)
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;

    let preset = preset_values(&args);
    let values = if args.interactive {
        SchemaWizard::new().run(Collection::HeroMedia, NEW_SLIDE_FIELDS, &preset)?
    } else {
        WizardResult { values: preset }
    };

    let slide = slide_from(&values).map_err(|e| miette::miette!("{}", e))?;
    let id = slide.id.clone();
    let title = slide.title.clone();
    let active = slide.active;
    repo.add(slide)?;

    if global.format == OutputFormat::Id {
        println!("{}", id);
        return Ok(());
    }
    println!(
        "{} Added slide {} {}",
        style("✓").green(),
        style(&id).cyan(),
        style(title).yellow()
    );
    if !active {
        println!(
            "   {}",
            style("Inactive. Use 'showroom hero toggle' to show it.").dim()
        );
    }
    Ok(())
}

fn run_toggle(args: ToggleArgs, global: &GlobalOpts) -> Result<()> {
    let (_, mut repo) = open_repository(global)?;
    let media: Vec<HeroMedia> = repo.get_all()?;
    let mut slide = resolve(&media, &args.id)
        .map_err(|e| miette::miette!("{}", e))?
        .clone();

    slide.active = !slide.active;
    let state = if slide.active { "active" } else { "inactive" };
    let title = slide.title.clone();
    repo.update(slide)?;

    println!(
        "{} {} is now {}",
        style("✓").green(),
        style(title).yellow(),
        style(state).cyan()
    );
    Ok(())
}

/// One slide as the banner shows it
pub(crate) fn print_slide(slide: &HeroMedia, position: usize, total: usize) {
    let dots: String = (0..total)
        .map(|i| if i == position { '●' } else { '○' })
        .collect();
    println!(
        "{} {}",
        style(&slide.title).bold(),
        style(format!("[{}]", slide.kind)).dim()
    );
    if !slide.subtitle.is_empty() {
        println!("  {}", slide.subtitle);
    }
    println!("  {}  {}", style(dots).cyan(), style(&slide.url).dim());
}

fn run_play(args: PlayArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));
    let period = args
        .interval_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.hero_interval());

    let media: Vec<HeroMedia> = repo.get_all()?;
    let mut carousel = HeroCarousel::new(media, period, Instant::now());

    if carousel.is_empty() {
        println!("{}", style("No active hero slides.").dim());
        return Ok(());
    }
    carousel
        .select(args.start)
        .map_err(|e| miette::miette!("{}", e))?;

    let total = carousel.len();
    if let Some(slide) = carousel.current() {
        print_slide(slide, carousel.index(), total);
    }

    if !carousel.is_armed() {
        if !global.quiet {
            println!();
            println!("{}", style("Single slide, nothing to rotate.").dim());
        }
        return Ok(());
    }

    let wanted = args.cycles.unwrap_or(total as u32);
    let mut shown = 0;
    while shown < wanted {
        let wait = carousel
            .timer()
            .map(|t| t.until_next(Instant::now()))
            .unwrap_or(period);
        std::thread::sleep(wait);

        let ticks = carousel.poll(Instant::now());
        if ticks == 0 {
            continue;
        }
        debug!(ticks, index = carousel.index(), "hero advanced");
        shown += ticks;
        if let Some(slide) = carousel.current() {
            println!();
            print_slide(slide, carousel.index(), total);
        }
    }
    Ok(())
}
