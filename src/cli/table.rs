//! Table formatting utilities for CLI list commands
//!
//! Every list command builds [`TableRow`]s of typed [`CellValue`]s and hands
//! them to a [`TableFormatter`], which renders TSV, CSV, Markdown or bare ids.

use chrono::{DateTime, Local, Utc};
use console::style;

use crate::cli::helpers::{escape_csv, format_short_id_str, truncate_str};
use crate::cli::OutputFormat;
use crate::core::Currency;
use crate::entities::{Availability, InquiryStatus, PreOrderStatus};

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Record ID (cyan, truncated when long)
    Id(String),
    /// Plain text, truncated to the column
    Text(String),
    /// Listing availability with color coding
    Availability(Availability),
    InquiryStatus(InquiryStatus),
    PreOrderStatus(PreOrderStatus),
    /// Category, kind or other enumerated label
    Type(String),
    /// Amount in the display currency
    Money(f64, Currency),
    /// Star rating out of five
    Rating(u8),
    /// Yes/no flag
    Flag(bool),
    /// DateTime displayed as date only
    Date(DateTime<Utc>),
    Number(i64),
    /// Empty/placeholder
    Empty,
}

impl CellValue {
    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => {
                format!("{:<width$}", style(format_short_id_str(id)).cyan(), width = width)
            }
            CellValue::Text(s) | CellValue::Type(s) => {
                format!("{:<width$}", truncate_str(s, width.saturating_sub(2)), width = width)
            }
            CellValue::Availability(a) => {
                let s = a.to_string();
                let styled = match a {
                    Availability::InStock => style(s).green(),
                    Availability::PreOrder => style(s).yellow(),
                    Availability::Sold => style(s).red().dim(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::InquiryStatus(status) => {
                let s = status.to_string();
                let styled = match status {
                    InquiryStatus::Pending => style(s).yellow(),
                    InquiryStatus::Contacted => style(s).cyan(),
                    InquiryStatus::Closed => style(s).dim(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::PreOrderStatus(status) => {
                let s = status.to_string();
                let styled = match status {
                    PreOrderStatus::Pending => style(s).yellow(),
                    PreOrderStatus::Approved => style(s).green(),
                    PreOrderStatus::Cancelled => style(s).red().dim(),
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Rating(r) => {
                format!("{:<width$}", style(stars(*r)).yellow(), width = width)
            }
            CellValue::Flag(b) => {
                let styled = if *b { style("yes").green() } else { style("no").dim() };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Money(..) | CellValue::Number(_) => {
                format!("{:>width$}", self.raw(), width = width)
            }
            CellValue::Date(_) => format!("{:<width$}", self.raw(), width = width),
            CellValue::Empty => format!("{:<width$}", "-", width = width),
        }
    }

    /// Format for CSV output (RFC 4180, no colors)
    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Money(amount, _) => amount.to_string(),
            CellValue::Rating(r) => r.to_string(),
            other => escape_csv(&other.raw()),
        }
    }

    /// Format for Markdown output (no colors, escaped pipes)
    pub fn format_md(&self) -> String {
        let raw = match self {
            CellValue::Flag(true) => "**yes**".to_string(),
            CellValue::Empty => "-".to_string(),
            other => other.raw(),
        };
        raw.replace('|', "\\|")
    }

    /// Get raw string value (no formatting)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(s) | CellValue::Text(s) | CellValue::Type(s) => s.clone(),
            CellValue::Availability(a) => a.to_string(),
            CellValue::InquiryStatus(s) => s.to_string(),
            CellValue::PreOrderStatus(s) => s.to_string(),
            CellValue::Money(amount, currency) => currency.format(*amount),
            CellValue::Rating(r) => stars(*r),
            CellValue::Flag(b) => if *b { "yes" } else { "no" }.to_string(),
            CellValue::Date(dt) => {
                let local: DateTime<Local> = dt.with_timezone(&Local);
                local.format("%Y-%m-%d").to_string()
            }
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Display width of this cell's content (for dynamic column sizing)
    pub fn display_width(&self) -> usize {
        match self {
            CellValue::Id(id) => id.chars().count().min(16),
            CellValue::Date(_) => 10,
            CellValue::Empty => 1,
            other => other.raw().chars().count(),
        }
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(rating.min(5) as usize)
}

/// Column definition with header label and width
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// A row of cell values for table output
pub struct TableRow {
    pub id: String,
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Table formatter that outputs rows in various formats
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    record_name: &'static str,
    show_summary: bool,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], record_name: &'static str) -> Self {
        Self {
            columns,
            record_name,
            show_summary: true,
        }
    }

    /// Drop the "N thing(s) found" line
    pub fn without_summary(mut self) -> Self {
        self.show_summary = false;
        self
    }

    /// Output rows in the specified format
    pub fn output<I>(&self, rows: I, format: OutputFormat)
    where
        I: IntoIterator<Item = TableRow>,
    {
        let rows: Vec<TableRow> = rows.into_iter().collect();

        match format {
            OutputFormat::Csv => self.output_csv(&rows),
            OutputFormat::Md => self.output_md(&rows),
            OutputFormat::Id => self.output_ids(&rows),
            _ => self.output_tsv(&rows),
        }
    }

    /// Calculate dynamic column widths based on actual content
    fn calculate_widths(&self, rows: &[TableRow]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                let max_content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);
                // +2 leaves room for the truncation marker
                col.header.len().max(max_content.saturating_add(2)).min(col.width)
            })
            .collect()
    }

    fn output_tsv(&self, rows: &[TableRow]) {
        let widths = self.calculate_widths(rows);

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| format!("{:<width$}", style(col.header).bold(), width = *w))
            .collect();
        println!("{}", header.join(" "));

        let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        println!("{}", "-".repeat(total_width));

        for row in rows {
            let parts: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, w)| match row.get(col.key) {
                    Some(value) => value.format_tsv(*w),
                    None => format!("{:<width$}", "-", width = *w),
                })
                .collect();
            println!("{}", parts.join(" "));
        }

        if self.show_summary {
            println!();
            println!("{} {}(s) found.", style(rows.len()).cyan(), self.record_name);
        }
    }

    fn output_csv(&self, rows: &[TableRow]) {
        let mut headers = vec!["id"];
        headers.extend(self.columns.iter().filter(|c| c.key != "id").map(|c| c.key));
        println!("{}", headers.join(","));

        for row in rows {
            let mut values = vec![escape_csv(&row.id)];
            for col in self.columns.iter().filter(|c| c.key != "id") {
                values.push(row.get(col.key).map(|v| v.format_csv()).unwrap_or_default());
            }
            println!("{}", values.join(","));
        }
    }

    fn output_md(&self, rows: &[TableRow]) {
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        println!("| {} |", headers.join(" | "));

        let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
        println!("|{}|", separators.join("|"));

        for row in rows {
            let values: Vec<String> = self
                .columns
                .iter()
                .map(|col| {
                    row.get(col.key)
                        .map(|v| v.format_md())
                        .unwrap_or_else(|| "-".to_string())
                })
                .collect();
            println!("| {} |", values.join(" | "));
        }
    }

    fn output_ids(&self, rows: &[TableRow]) {
        for row in rows {
            println!("{}", row.id);
        }
    }
}
