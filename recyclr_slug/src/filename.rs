//! Upload filename cleanup.

use crate::options::Slugger;

impl Slugger {
    /// Slugify the stem of `filename` and casefold its extension.
    ///
    /// The extension is whatever follows the last `.`. A name without a dot, or
    /// ending in one, has no extension and comes back without a trailing dot.
    pub fn sanitize_filename(&self, filename: &str) -> String {
        match filename.rsplit_once('.') {
            Some((stem, ext)) if !ext.is_empty() => {
                format!("{}.{}", self.slugify(stem), ext.to_lowercase())
            },
            Some((stem, _)) => self.slugify(stem),
            None => self.slugify(filename),
        }
    }
}

/// ```
/// use recyclr_slug::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Photo.JPG"), "my-photo.jpg");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    Slugger::default().sanitize_filename(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_lowercased_extension() {
        assert_eq!(sanitize_filename("My Photo.JPG"), "my-photo.jpg");
        assert_eq!(sanitize_filename("scan.final.v2.PDF"), "scanfinalv2.pdf");
    }

    #[test]
    fn no_extension_means_no_dot() {
        assert_eq!(sanitize_filename("README"), "readme");
        assert_eq!(sanitize_filename("notes."), "notes");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn dotfile_keeps_only_extension() {
        assert_eq!(sanitize_filename(".env"), ".env");
    }
}
