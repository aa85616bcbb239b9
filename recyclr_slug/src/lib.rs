#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! URL-safe slug generation for the recyclr marketplace backend.
//!
//! Request handlers turn titles, category names, and uploaded filenames into
//! identifiers through this crate before handing them to the document store.
//! Everything here is a pure string transform except [`generate_unique_slug`],
//! which awaits a caller-supplied existence check.

pub const RECYCLR_SLUG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod compose;
pub mod config;
pub mod error;
pub mod filename;
pub mod options;
pub mod random;
pub mod slugify;
pub mod unique;

// Re-exports for convenience
pub use compose::{categorized_slug, combine_slug_parts, slugify_with_date, slugify_with_today, unslugify};
pub use config::SlugConfig;
pub use error::{ConfigError, SlugError, UniqueSlugError};
pub use filename::sanitize_filename;
pub use options::{SlugOptions, Slugger};
pub use random::{DEFAULT_SUFFIX_LENGTH, random_suffix, random_suffix_with, slugify_with_random_suffix};
pub use slugify::{generate_seo_path, slugify, slugify_value};
pub use unique::{UniquePolicy, generate_unique_slug, generate_unique_slug_with};
