//! Command-line definitions for `recyclr-slug`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use time::Date;
use time::macros::format_description;

#[derive(Debug, Parser)]
#[command(name = "recyclr-slug", version, about = "Generate URL-safe slugs for recyclr listings")]
pub struct Cli {
    /// Slug config file (defaults to ./recyclr_slug.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SlugOverrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Per-run overrides of the configured `[slug]` options.
#[derive(Debug, Default, Args)]
pub struct SlugOverrides {
    /// Word separator
    #[arg(long, global = true)]
    pub separator: Option<char>,
    /// Maximum slug length in characters
    #[arg(long, global = true)]
    pub max_length: Option<usize>,
    /// Keep the original letter case
    #[arg(long, global = true)]
    pub keep_case: bool,
    /// Keep characters outside [A-Za-z0-9_]
    #[arg(long, global = true)]
    pub keep_special: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Slugify text
    Slug { text: String },
    /// Slugify text for a search-engine friendly path
    Seo { text: String },
    /// Prefix a slug with a YYYY-MM-DD date (today, UTC, by default)
    Date {
        title: String,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
    /// Slugify several parts and join them
    Combine {
        #[arg(required = true)]
        parts: Vec<String>,
    },
    /// Build a category/title path
    Category { category: String, title: String },
    /// Turn a slug back into display text
    Unslug { slug: String },
    /// Clean up an upload filename
    Filename { name: String },
    /// Slugify text and append a random suffix
    Random {
        text: String,
        #[arg(long)]
        length: Option<usize>,
    },
    /// Find the first slug not already taken
    Unique {
        base: String,
        /// A slug that is already in use (repeatable)
        #[arg(long)]
        taken: Vec<String>,
        /// File listing slugs already in use, one per line
        #[arg(long)]
        taken_file: Option<PathBuf>,
    },
}

fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
}
