//! Collision-free slugs backed by a caller-supplied existence check.
//!
//! The check is how the search defers to the persistent store without owning
//! it: it reports whether a candidate is already taken. Candidates are tried
//! strictly one at a time in the order `base`, `base-1`, `base-2`, … so two
//! runs against the same store state always pick the same slug.

use std::future::Future;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{SlugError, UniqueSlugError};

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Bound on how many candidates a uniqueness search may check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquePolicy {
    pub max_attempts: usize,
}

impl Default for UniquePolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl UniquePolicy {
    pub fn new(max_attempts: usize) -> Result<Self, SlugError> {
        let policy = Self { max_attempts };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), SlugError> {
        if self.max_attempts == 0 {
            return Err(SlugError::InvalidMaxAttempts(self.max_attempts));
        }
        Ok(())
    }
}

/// Find the first free slug starting from `base`, using the default policy.
///
/// See [`generate_unique_slug_with`].
pub async fn generate_unique_slug<F, Fut, E>(base: &str, check_exists: F) -> Result<String, UniqueSlugError<E>>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    generate_unique_slug_with(base, UniquePolicy::default(), check_exists).await
}

/// Find the first free slug starting from `base`.
///
/// `check_exists` must resolve to `Ok(true)` when the candidate is already in
/// use. Each check is awaited before the next candidate is built, and at most
/// `policy.max_attempts` checks are made before giving up with
/// [`UniqueSlugError::Exhausted`]. A failing check aborts the search with
/// [`UniqueSlugError::Check`].
///
/// `base` is used verbatim; slugify it first if it comes from user input.
pub async fn generate_unique_slug_with<F, Fut, E>(
    base: &str,
    policy: UniquePolicy,
    mut check_exists: F,
) -> Result<String, UniqueSlugError<E>>
where
    F: FnMut(&str) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    for attempt in 0..policy.max_attempts {
        let candidate = if attempt == 0 {
            base.to_string()
        } else {
            format!("{base}-{attempt}")
        };
        debug!("checking slug candidate '{candidate}' (attempt {})", attempt + 1);
        if !check_exists(&candidate).await.map_err(UniqueSlugError::Check)? {
            return Ok(candidate);
        }
    }

    warn!(
        "gave up finding a free slug for '{base}' after {} attempts",
        policy.max_attempts
    );
    Err(UniqueSlugError::Exhausted {
        base: base.to_string(),
        attempts: policy.max_attempts,
    })
}
