//! Helpers that build composite identifiers out of several slugs.

use time::{Date, OffsetDateTime};

use crate::options::Slugger;

impl Slugger {
    /// Prefix the slugified title with an ISO `YYYY-MM-DD` date.
    pub fn slugify_with_date(&self, title: &str, date: Date) -> String {
        let prefix = iso_date(date);
        let slug = self.slugify(title);
        if slug.is_empty() {
            prefix
        } else {
            format!("{prefix}{}{slug}", self.separator())
        }
    }

    /// Date-prefixed slug using today's UTC date.
    pub fn slugify_with_today(&self, title: &str) -> String {
        self.slugify_with_date(title, OffsetDateTime::now_utc().date())
    }

    /// Slugify each part on its own, drop the empty ones, and join the rest.
    pub fn combine<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let sep = self.separator().to_string();
        parts
            .iter()
            .map(|part| self.slugify(part.as_ref()))
            .filter(|slug| !slug.is_empty())
            .collect::<Vec<_>>()
            .join(&sep)
    }

    /// Two-segment `category/title` path.
    pub fn categorized(&self, category: &str, title: &str) -> String {
        format!("{}/{}", self.slugify(category), self.slugify(title))
    }

    /// Best-effort reversal of a slug into display text.
    ///
    /// Each separator-delimited segment gets its first character uppercased and
    /// the segments are joined with single spaces. Casing and punctuation that
    /// `slugify` discarded cannot be recovered.
    pub fn unslugify(&self, slug: &str) -> String {
        if slug.is_empty() {
            return String::new();
        }
        slug.split(self.separator())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Date-prefixed slug, e.g. `2024-03-05-my-title`.
pub fn slugify_with_date(title: &str, date: Date) -> String {
    Slugger::default().slugify_with_date(title, date)
}

pub fn slugify_with_today(title: &str) -> String {
    Slugger::default().slugify_with_today(title)
}

/// Join independently slugified parts with the default separator.
///
/// ```
/// use recyclr_slug::combine_slug_parts;
///
/// assert_eq!(combine_slug_parts(&["Electronics", "Old iPhones!"]), "electronics-old-iphones");
/// ```
pub fn combine_slug_parts<S: AsRef<str>>(parts: &[S]) -> String {
    Slugger::default().combine(parts)
}

pub fn categorized_slug(category: &str, title: &str) -> String {
    Slugger::default().categorized(category, title)
}

pub fn unslugify(slug: &str) -> String {
    Slugger::default().unslugify(slug)
}

fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
