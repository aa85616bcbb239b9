//! The core text-to-slug transform.

use serde_json::Value;

use crate::options::Slugger;

impl Slugger {
    /// Convert arbitrary text into a slug under this slugger's options.
    ///
    /// Never fails: empty or whitespace-only text gives `""`. The result has no
    /// leading, trailing, or repeated separator, is at most `max_length`
    /// characters long, and slugifying it again returns it unchanged.
    pub fn slugify(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let opts = self.options();
        let sep = opts.separator;

        let cased = if opts.lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };
        let mut slug = join_whitespace(&cased, sep);
        if opts.remove_special_chars {
            slug.retain(|ch| is_slug_char(ch, sep));
        }
        let slug = collapse_separators(&slug, sep);
        let bounded = truncate_chars(slug.trim_matches(sep), opts.max_length);
        bounded.trim_end_matches(sep).to_string()
    }
}

/// Slugify `text` with the default options.
///
/// ```
/// assert_eq!(recyclr_slug::slugify("Hello   World!!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    Slugger::default().slugify(text)
}

/// Slugify a raw JSON value taken from a request body.
///
/// Only strings carry text; `null`, numbers, booleans, arrays and objects all give `""`.
pub fn slugify_value(value: &Value) -> String {
    match value {
        Value::String(text) => slugify(text),
        _ => String::new(),
    }
}

/// Slugify with the shorter search-engine length cap.
///
/// Callers that need other overrides build a [`Slugger`] from
/// [`SlugOptions::seo`](crate::SlugOptions::seo) instead.
pub fn generate_seo_path(text: &str) -> String {
    Slugger::seo().slugify(text)
}

fn is_slug_char(ch: char, sep: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == sep
}

/// Replace every whitespace run with a single separator.
fn join_whitespace(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(sep);
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

fn collapse_separators(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_sep = false;
    for ch in text.chars() {
        if ch == sep {
            if !last_was_sep {
                out.push(ch);
            }
            last_was_sep = true;
        } else {
            out.push(ch);
            last_was_sep = false;
        }
    }
    out
}

/// Cut `text` to at most `max` chars on a char boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlugOptions;
    use serde_json::json;

    fn slugger(options: SlugOptions) -> Slugger {
        Slugger::new(options).expect("valid options")
    }

    #[test]
    fn empty_and_non_string_input_yield_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   \t\n"), "");
        assert_eq!(slugify_value(&Value::Null), "");
        assert_eq!(slugify_value(&json!(42)), "");
        assert_eq!(slugify_value(&json!({"title": "x"})), "");
        assert_eq!(slugify_value(&json!("Trade In")), "trade-in");
    }

    #[test]
    fn collapses_whitespace_and_strips_punctuation() {
        assert_eq!(slugify("Hello   World!!"), "hello-world");
        assert_eq!(slugify("  --Sell your old -- phone--  "), "sell-your-old-phone");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn non_ascii_letters_are_dropped_by_default() {
        assert_eq!(slugify("Crème Brûlée"), "crme-brle");
    }

    #[test]
    fn keep_special_chars_and_case() {
        let s = slugger(SlugOptions {
            lowercase: false,
            remove_special_chars: false,
            ..SlugOptions::default()
        });
        assert_eq!(s.slugify("Crème  Brûlée"), "Crème-Brûlée");
    }

    #[test]
    fn custom_separator() {
        let s = slugger(SlugOptions {
            separator: '.',
            ..SlugOptions::default()
        });
        assert_eq!(s.slugify("Galaxy S21 - Ultra"), "galaxy.s21.ultra");
    }

    #[test]
    fn truncation_never_leaves_a_dangling_separator() {
        let s = slugger(SlugOptions {
            max_length: 6,
            ..SlugOptions::default()
        });
        assert_eq!(s.slugify("hello world"), "hello");
        let s = slugger(SlugOptions {
            max_length: 5,
            ..SlugOptions::default()
        });
        assert_eq!(s.slugify("hello world"), "hello");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let s = slugger(SlugOptions {
            max_length: 3,
            remove_special_chars: false,
            ..SlugOptions::default()
        });
        assert_eq!(s.slugify("ééééé"), "ééé");
    }

    #[test]
    fn seo_path_is_capped_at_sixty() {
        let long = "word ".repeat(40);
        let path = generate_seo_path(&long);
        assert!(path.chars().count() <= 60);
        assert!(!path.ends_with('-'));
        assert!(slugify(&long).chars().count() > 60);
    }

    #[test]
    fn seo_overrides_take_precedence() {
        let s = slugger(SlugOptions {
            separator: '_',
            ..SlugOptions::seo()
        })
        .slugify("a b");
        assert_eq!(s, "a_b");
    }
}
