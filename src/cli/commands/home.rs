//! `showroom home` command - Landing page

use console::style;
use miette::Result;
use serde::Serialize;
use std::time::Instant;

use crate::cli::commands::hero::print_slide;
use crate::cli::commands::vehicle::print_card;
use crate::cli::helpers::{open_repository, print_serialized};
use crate::cli::GlobalOpts;
use crate::core::{Config, HeroCarousel};
use crate::entities::{HeroMedia, Testimonial, Vehicle};

/// Listings featured under "Current Showroom"
const SHOWROOM_SIZE: usize = 3;

const CONCIERGE_PHONE: &str = "+234 800 EMPATHON";

#[derive(clap::Args, Debug)]
pub struct HomeArgs {
    /// Number of featured listings
    #[arg(long, short = 'n', default_value_t = SHOWROOM_SIZE)]
    pub featured: usize,

    /// Skip the testimonials section
    #[arg(long)]
    pub no_testimonials: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomePage<'a> {
    hero: Option<&'a HeroMedia>,
    showroom: &'a [Vehicle],
    testimonials: &'a [Testimonial],
}

pub fn run(args: HomeArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));
    let currency = config.currency();

    let media: Vec<HeroMedia> = repo.get_all()?;
    let vehicles: Vec<Vehicle> = repo.get_all()?;
    let testimonials: Vec<Testimonial> = if args.no_testimonials {
        Vec::new()
    } else {
        repo.get_all()?
    };

    let carousel = HeroCarousel::new(media, config.hero_interval(), Instant::now());
    let featured = &vehicles[..vehicles.len().min(args.featured)];

    let page = HomePage {
        hero: carousel.current(),
        showroom: featured,
        testimonials: &testimonials,
    };
    if print_serialized(&page, global.format)? {
        return Ok(());
    }

    if let Some(slide) = carousel.current() {
        print_slide(slide, carousel.index(), carousel.len());
        println!();
    }

    println!("{}", style("Current Showroom").bold().underlined());
    println!();
    if featured.is_empty() {
        println!("{}", style("No vehicles listed yet.").dim());
    }
    for vehicle in featured {
        print_card(vehicle, currency);
        println!();
    }
    if vehicles.len() > featured.len() {
        println!(
            "{} {}",
            style("→").blue(),
            style(format!("View all {} vehicles: showroom vehicle list", vehicles.len())).dim()
        );
        println!();
    }

    if !testimonials.is_empty() {
        println!("{}", style("Client Testimonials").bold().underlined());
        println!();
        for t in &testimonials {
            println!("{} {}", style(t.stars()).yellow(), style(&t.name).bold());
            if !t.role.is_empty() {
                println!("  {}", style(&t.role).dim());
            }
            println!("  \"{}\"", t.content);
            println!();
        }
    }

    if !global.quiet {
        println!("{}", style("─".repeat(60)).dim());
        println!("Concierge: {}", style(CONCIERGE_PHONE).cyan());
    }
    Ok(())
}
