//! Random suffixes for slugs that only need to be "probably unique".
//!
//! The generator is `SmallRng`: fast and non-cryptographic. A suffix helps
//! avoid collisions between listings with the same title; it must never be
//! used as a token, password, or anything else that has to be unguessable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::options::Slugger;

pub const DEFAULT_SUFFIX_LENGTH: usize = 6;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

impl Slugger {
    /// Slugify `text` and append `suffix_length` random `[a-z0-9]` characters.
    ///
    /// Text that slugifies to nothing yields the bare suffix.
    pub fn slugify_with_random_suffix_using<R: Rng + ?Sized>(
        &self,
        text: &str,
        suffix_length: usize,
        rng: &mut R,
    ) -> String {
        let slug = self.slugify(text);
        let suffix = random_suffix_with(rng, suffix_length);
        if slug.is_empty() {
            suffix
        } else if suffix.is_empty() {
            slug
        } else {
            format!("{slug}{}{suffix}", self.separator())
        }
    }

    pub fn slugify_with_random_suffix(&self, text: &str, suffix_length: usize) -> String {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        self.slugify_with_random_suffix_using(text, suffix_length, &mut rng)
    }
}

/// `length` characters drawn uniformly from `[a-z0-9]`.
pub fn random_suffix_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())]))
        .collect()
}

pub fn random_suffix(length: usize) -> String {
    let mut rng = SmallRng::from_rng(&mut rand::rng());
    random_suffix_with(&mut rng, length)
}

/// Default-option slug with a random suffix, e.g. `old-phone-k3x9qa`.
pub fn slugify_with_random_suffix(text: &str, suffix_length: usize) -> String {
    Slugger::default().slugify_with_random_suffix(text, suffix_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_suffix_char(ch: char) -> bool {
        ch.is_ascii_lowercase() || ch.is_ascii_digit()
    }

    #[test]
    fn suffix_has_requested_length_and_alphabet() {
        let suffix = random_suffix(32);
        assert_eq!(suffix.len(), 32);
        assert!(suffix.chars().all(is_suffix_char));
        assert_eq!(random_suffix(0), "");
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let a = random_suffix_with(&mut SmallRng::seed_from_u64(7), DEFAULT_SUFFIX_LENGTH);
        let b = random_suffix_with(&mut SmallRng::seed_from_u64(7), DEFAULT_SUFFIX_LENGTH);
        assert_eq!(a, b);
    }

    #[test]
    fn suffix_is_joined_with_separator() {
        let slug = slugify_with_random_suffix("Old Phone", DEFAULT_SUFFIX_LENGTH);
        let (base, suffix) = slug.rsplit_once('-').expect("separator present");
        assert_eq!(base, "old-phone");
        assert_eq!(suffix.len(), DEFAULT_SUFFIX_LENGTH);
        assert!(suffix.chars().all(is_suffix_char));
    }

    #[test]
    fn empty_base_gives_bare_suffix() {
        let slug = slugify_with_random_suffix("???", 4);
        assert_eq!(slug.len(), 4);
        assert!(slug.chars().all(is_suffix_char));
    }

    #[test]
    fn zero_length_suffix_keeps_plain_slug() {
        assert_eq!(slugify_with_random_suffix("Old Phone", 0), "old-phone");
    }
}
