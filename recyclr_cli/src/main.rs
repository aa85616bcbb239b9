#![warn(clippy::pedantic)]
//! ** recyclr-slug **
//! Command-line front end for the recyclr slug toolkit.

mod cli;

use std::collections::HashSet;
use std::convert::Infallible;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use recyclr_slug::{SlugConfig, generate_unique_slug_with};

use crate::cli::{Cli, Command, SlugOverrides};

const DEFAULT_CONFIG_FILE: &str = "recyclr_slug.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), &cli.overrides)?;
    let line = run(&cli.command, &config).await?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").context("while writing result")?;
    Ok(())
}

/// Load the config file (explicit, or the default one if present) and apply flag overrides.
fn resolve_config(explicit: Option<&Path>, overrides: &SlugOverrides) -> Result<SlugConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
    };
    let mut config = match path {
        Some(path) => SlugConfig::load(&path).with_context(|| format!("while loading config '{}'", path.display()))?,
        None => {
            debug!("no config file found, using defaults");
            SlugConfig::default()
        },
    };

    if let Some(sep) = overrides.separator {
        config.slug.separator = sep;
    }
    if let Some(max) = overrides.max_length {
        config.slug.max_length = max;
    }
    if overrides.keep_case {
        config.slug.lowercase = false;
    }
    if overrides.keep_special {
        config.slug.remove_special_chars = false;
    }
    config.validate().context("while applying command-line overrides")?;
    Ok(config)
}

/// Execute one subcommand and return the line to print.
async fn run(command: &Command, config: &SlugConfig) -> Result<String> {
    let slugger = config.slugger()?;
    let line = match command {
        Command::Slug { text } => slugger.slugify(text),
        Command::Seo { text } => config.seo_slugger()?.slugify(text),
        Command::Date { title, date } => match date {
            Some(date) => slugger.slugify_with_date(title, *date),
            None => slugger.slugify_with_today(title),
        },
        Command::Combine { parts } => slugger.combine(parts),
        Command::Category { category, title } => slugger.categorized(category, title),
        Command::Unslug { slug } => slugger.unslugify(slug),
        Command::Filename { name } => slugger.sanitize_filename(name),
        Command::Random { text, length } => {
            slugger.slugify_with_random_suffix(text, length.unwrap_or(config.random.suffix_length))
        },
        Command::Unique {
            base,
            taken,
            taken_file,
        } => {
            let mut in_use: HashSet<String> = taken.iter().cloned().collect();
            if let Some(path) = taken_file {
                in_use.extend(read_taken_file(path)?);
            }
            info!("searching for a free slug among {} taken", in_use.len());
            let base = slugger.slugify(base);
            generate_unique_slug_with(&base, config.unique_policy(), |candidate| {
                let exists = in_use.contains(candidate);
                async move { Ok::<_, Infallible>(exists) }
            })
            .await?
        },
    };
    Ok(line)
}

fn read_taken_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("while reading taken slugs from '{}'", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use time::macros::date;

    fn defaults() -> SlugConfig {
        resolve_config(None, &SlugOverrides::default()).unwrap()
    }

    #[tokio::test]
    async fn runs_each_text_command() {
        let config = defaults();
        let cases = [
            (Command::Slug { text: "Hello   World!!".into() }, "hello-world"),
            (Command::Unslug { slug: "my-cool-post".into() }, "My Cool Post"),
            (Command::Filename { name: "My Photo.JPG".into() }, "my-photo.jpg"),
            (
                Command::Category {
                    category: "Mobile Phones".into(),
                    title: "iPhone 12 Review".into(),
                },
                "mobile-phones/iphone-12-review",
            ),
            (
                Command::Combine {
                    parts: vec!["Electronics".into(), "Old iPhones!".into()],
                },
                "electronics-old-iphones",
            ),
            (
                Command::Date {
                    title: "My Title".into(),
                    date: Some(date!(2024 - 03 - 05)),
                },
                "2024-03-05-my-title",
            ),
        ];
        for (command, expected) in cases {
            assert_eq!(run(&command, &config).await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn unique_reads_taken_file_and_flags() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("taken.txt");
        fs::write(&path, "old-phone\n\nold-phone-1\n").unwrap();
        let command = Command::Unique {
            base: "Old Phone".into(),
            taken: vec!["old-phone-2".into()],
            taken_file: Some(path),
        };
        assert_eq!(run(&command, &defaults()).await.unwrap(), "old-phone-3");
    }

    #[tokio::test]
    async fn random_uses_configured_suffix_length() {
        let mut config = defaults();
        config.random.suffix_length = 3;
        let line = run(&Command::Random { text: "Old Phone".into(), length: None }, &config)
            .await
            .unwrap();
        assert_eq!(line.len(), "old-phone-".len() + 3);
    }

    #[test]
    fn overrides_apply_on_top_of_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recyclr_slug.toml");
        fs::write(&path, "[slug]\nmax_length = 20\n").unwrap();
        let overrides = SlugOverrides {
            separator: Some('.'),
            keep_case: true,
            ..SlugOverrides::default()
        };
        let config = resolve_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.slug.max_length, 20);
        assert_eq!(config.slug.separator, '.');
        assert!(!config.slug.lowercase);
    }

    #[test]
    fn invalid_override_is_an_error() {
        let overrides = SlugOverrides {
            max_length: Some(0),
            ..SlugOverrides::default()
        };
        assert!(resolve_config(None, &overrides).is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = resolve_config(Some(Path::new("/no/such/recyclr_slug.toml")), &SlugOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("while loading config"));
    }
}
