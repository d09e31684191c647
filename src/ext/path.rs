use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use hoganizer::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns the normal components of `self` below `root` as UTF-8 strings.
    ///
    /// The root is removed as an anchored prefix; a path outside `root` is an error.
    ///
    /// # Examples
    /// ```
    /// use hoganizer::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let segments = Path::new("/srv/templates/widgets/card.mustache")
    ///     .segments_below(Path::new("/srv/templates"))
    ///     .unwrap();
    /// assert_eq!(segments, vec!["widgets", "card.mustache"]);
    /// ```
    fn segments_below(&self, root: &Path) -> Result<Vec<String>>;

    /// Resolves `self` against `base` and lexically removes `.` and `..` components.
    ///
    /// Nothing is read from the filesystem, so the path does not need to exist.
    fn absolutize(&self, base: &Path) -> PathBuf;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn segments_below(&self, root: &Path) -> Result<Vec<String>> {
        let relative = self.strip_prefix(root).map_err(|_| Error::InvalidTemplatePath {
            path: self.display().to_string(),
            reason: format!("not located below '{}'", root.display()),
        })?;

        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment),
                _ => None,
            })
            .map(|segment| {
                segment.to_str().map(str::to_owned).ok_or_else(|| {
                    Error::InvalidTemplatePath {
                        path: self.display().to_string(),
                        reason: "contains invalid Unicode characters".to_string(),
                    }
                })
            })
            .collect()
    }

    fn absolutize(&self, base: &Path) -> PathBuf {
        let joined = base.join(self);
        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }
}
