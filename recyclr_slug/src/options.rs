//! Slug configuration and the validated [`Slugger`] built from it.

use serde::{Deserialize, Serialize};

use crate::error::SlugError;

pub const DEFAULT_SEPARATOR: char = '-';
pub const DEFAULT_MAX_LENGTH: usize = 100;
pub const SEO_MAX_LENGTH: usize = 60;

/// Policy controlling how free text becomes a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugOptions {
    /// Casefold before transforming.
    pub lowercase: bool,
    /// Word joiner; the only non-word character allowed to survive.
    pub separator: char,
    /// Hard cap on output length, in characters.
    pub max_length: usize,
    /// Drop every character outside `[A-Za-z0-9_]` and the separator.
    pub remove_special_chars: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            separator: DEFAULT_SEPARATOR,
            max_length: DEFAULT_MAX_LENGTH,
            remove_special_chars: true,
        }
    }
}

impl SlugOptions {
    /// Defaults tightened for search-engine friendly paths.
    pub fn seo() -> Self {
        Self {
            max_length: SEO_MAX_LENGTH,
            ..Self::default()
        }
    }

    /// Check that these options can uphold the slug invariants.
    ///
    /// Letters, digits and whitespace are rejected as separators: they would be
    /// indistinguishable from the text being joined.
    pub fn validate(&self) -> Result<(), SlugError> {
        let sep = self.separator;
        if sep.is_alphanumeric() || sep.is_whitespace() {
            return Err(SlugError::InvalidSeparator(sep));
        }
        if self.max_length == 0 {
            return Err(SlugError::InvalidMaxLength(self.max_length));
        }
        Ok(())
    }
}

/// A slug generator bound to a validated set of [`SlugOptions`].
///
/// ```
/// use recyclr_slug::{SlugOptions, Slugger};
///
/// let slugger = Slugger::new(SlugOptions { separator: '_', ..SlugOptions::default() }).unwrap();
/// assert_eq!(slugger.slugify("Refurbished Laptops"), "refurbished_laptops");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slugger {
    options: SlugOptions,
}

impl Slugger {
    /// Validate `options` once and wrap them.
    pub fn new(options: SlugOptions) -> Result<Self, SlugError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Slugger using [`SlugOptions::seo`].
    pub fn seo() -> Self {
        Self {
            options: SlugOptions::seo(),
        }
    }

    pub fn options(&self) -> &SlugOptions {
        &self.options
    }

    pub fn separator(&self) -> char {
        self.options.separator
    }
}
