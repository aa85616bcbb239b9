//! TOML-backed configuration for the slug toolkit.
//!
//! Every table and key is optional; anything missing keeps its default.
//!
//! ```toml
//! [slug]
//! separator = "-"
//! max_length = 100
//! lowercase = true
//! remove_special_chars = true
//!
//! [seo]
//! max_length = 60
//!
//! [unique]
//! max_attempts = 1000
//!
//! [random]
//! suffix_length = 6
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SlugError};
use crate::options::{SEO_MAX_LENGTH, SlugOptions, Slugger};
use crate::random::DEFAULT_SUFFIX_LENGTH;
use crate::unique::UniquePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub max_length: usize,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            max_length: SEO_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub suffix_length: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            suffix_length: DEFAULT_SUFFIX_LENGTH,
        }
    }
}

/// Complete slug configuration as read from `recyclr_slug.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugConfig {
    pub slug: SlugOptions,
    pub seo: SeoConfig,
    pub unique: UniquePolicy,
    pub random: RandomConfig,
}

impl SlugConfig {
    /// Read, parse, and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded slug config from '{}'", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SlugError> {
        self.slug.validate()?;
        self.seo_options().validate()?;
        self.unique.validate()
    }

    /// The `[slug]` options with the `[seo]` length cap applied.
    pub fn seo_options(&self) -> SlugOptions {
        SlugOptions {
            max_length: self.seo.max_length,
            ..self.slug
        }
    }

    pub fn slugger(&self) -> Result<Slugger, SlugError> {
        Slugger::new(self.slug)
    }

    pub fn seo_slugger(&self) -> Result<Slugger, SlugError> {
        Slugger::new(self.seo_options())
    }

    pub fn unique_policy(&self) -> UniquePolicy {
        self.unique
    }
}
