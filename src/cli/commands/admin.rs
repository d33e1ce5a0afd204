//! `showroom admin` command - Dashboard summary for the back office

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{open_repository, print_serialized};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Currency};
use crate::entities::{
    Availability, HeroMedia, Inquiry, InquiryStatus, PreOrder, PreOrderStatus, Vehicle,
};

#[derive(clap::Args, Debug)]
pub struct AdminArgs {
    /// Write the dashboard to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Aggregated counts shown on the dashboard
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub vehicles: usize,
    pub in_stock: usize,
    pub pre_order: usize,
    pub sold: usize,
    /// Sum of listing prices, excluding sold vehicles
    pub inventory_value: f64,
    pub inquiries_pending: usize,
    pub inquiries_contacted: usize,
    pub inquiries_closed: usize,
    pub preorders_pending: usize,
    pub preorders_approved: usize,
    pub preorders_cancelled: usize,
    /// Deposits held on pending and approved reservations
    pub deposits_held: f64,
    pub active_slides: usize,
    pub total_slides: usize,
}

impl Dashboard {
    pub fn collect(
        vehicles: &[Vehicle],
        inquiries: &[Inquiry],
        orders: &[PreOrder],
        media: &[HeroMedia],
    ) -> Self {
        let mut d = Dashboard {
            vehicles: vehicles.len(),
            total_slides: media.len(),
            active_slides: media.iter().filter(|m| m.active).count(),
            ..Default::default()
        };

        for v in vehicles {
            match v.availability {
                Availability::InStock => d.in_stock += 1,
                Availability::PreOrder => d.pre_order += 1,
                Availability::Sold => d.sold += 1,
            }
            if v.availability != Availability::Sold {
                d.inventory_value += v.price;
            }
        }

        for i in inquiries {
            match i.status {
                InquiryStatus::Pending => d.inquiries_pending += 1,
                InquiryStatus::Contacted => d.inquiries_contacted += 1,
                InquiryStatus::Closed => d.inquiries_closed += 1,
            }
        }

        for o in orders {
            match o.status {
                PreOrderStatus::Pending => d.preorders_pending += 1,
                PreOrderStatus::Approved => d.preorders_approved += 1,
                PreOrderStatus::Cancelled => d.preorders_cancelled += 1,
            }
            if o.status != PreOrderStatus::Cancelled {
                d.deposits_held += o.deposit_amount;
            }
        }

        d
    }

    fn render(&self, currency: Currency, markdown: bool) -> String {
        let style_table = |builder: Builder| {
            let mut table = builder.build();
            if markdown {
                table.with(Style::markdown());
            } else {
                table.with(Style::rounded());
            }
            table.to_string()
        };

        let mut out = String::new();
        out.push_str("# Showroom Dashboard\n\n");

        out.push_str("## Inventory\n\n");
        let mut inventory = Builder::default();
        inventory.push_record(["Metric", "Value"]);
        inventory.push_record(["Listings".to_string(), self.vehicles.to_string()]);
        inventory.push_record(["In-Stock".to_string(), self.in_stock.to_string()]);
        inventory.push_record(["Pre-Order".to_string(), self.pre_order.to_string()]);
        inventory.push_record(["Sold".to_string(), self.sold.to_string()]);
        inventory.push_record([
            "Inventory Value".to_string(),
            currency.format(self.inventory_value),
        ]);
        out.push_str(&style_table(inventory));
        out.push_str("\n\n");

        out.push_str("## Inquiries\n\n");
        let mut inquiries = Builder::default();
        inquiries.push_record(["Status", "Count"]);
        inquiries.push_record(["Pending".to_string(), self.inquiries_pending.to_string()]);
        inquiries.push_record(["Contacted".to_string(), self.inquiries_contacted.to_string()]);
        inquiries.push_record(["Closed".to_string(), self.inquiries_closed.to_string()]);
        out.push_str(&style_table(inquiries));
        out.push_str("\n\n");

        out.push_str("## Pre-Orders\n\n");
        let mut orders = Builder::default();
        orders.push_record(["Status", "Count"]);
        orders.push_record(["Pending".to_string(), self.preorders_pending.to_string()]);
        orders.push_record(["Approved".to_string(), self.preorders_approved.to_string()]);
        orders.push_record(["Cancelled".to_string(), self.preorders_cancelled.to_string()]);
        orders.push_record(["Deposits Held".to_string(), currency.format(self.deposits_held)]);
        out.push_str(&style_table(orders));
        out.push_str("\n\n");

        out.push_str("## Hero Media\n\n");
        let mut hero = Builder::default();
        hero.push_record(["Slides", "Count"]);
        hero.push_record(["Active".to_string(), self.active_slides.to_string()]);
        hero.push_record(["Total".to_string(), self.total_slides.to_string()]);
        out.push_str(&style_table(hero));
        out.push('\n');

        out
    }
}

pub fn run(args: AdminArgs, global: &GlobalOpts) -> Result<()> {
    let (workspace, mut repo) = open_repository(global)?;
    let config = Config::load_for(Some(&workspace));

    let vehicles: Vec<Vehicle> = repo.get_all()?;
    let inquiries: Vec<Inquiry> = repo.get_all()?;
    let orders: Vec<PreOrder> = repo.get_all()?;
    let media: Vec<HeroMedia> = repo.get_all()?;

    let dashboard = Dashboard::collect(&vehicles, &inquiries, &orders, &media);

    if args.output.is_none() && print_serialized(&dashboard, global.format)? {
        return Ok(());
    }

    let markdown = global.format == OutputFormat::Md || args.output.is_some();
    let content = dashboard.render(config.currency(), markdown);

    match args.output {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!(
                "{} Dashboard written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", content),
    }
    Ok(())
}
