use crate::{constants::IGNORE_FILE, error::Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, info};
use std::{fs::read_to_string, path::Path};

/// Default patterns to always ignore during template discovery
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".git/**", "**/node_modules/**"];

/// Builds the set of globs excluded from discovery.
///
/// Patterns come from three places, in order: the defaults, the `ignore`
/// list of the configuration and the `.hoganizerignore` file in the
/// template root. Patterns are matched against paths relative to
/// `template_root`; the root itself never becomes part of a glob.
pub fn build_ignore_globset<P: AsRef<Path>>(
    template_root: P,
    configured: &[String],
) -> Result<GlobSet> {
    let template_root = template_root.as_ref();
    let ignore_file_path = template_root.join(IGNORE_FILE);

    let mut patterns: Vec<String> = DEFAULT_IGNORE_PATTERNS
        .iter()
        .map(|pattern| pattern.to_string())
        .chain(configured.iter().cloned())
        .collect();

    if let Ok(contents) = read_to_string(&ignore_file_path) {
        patterns.extend(
            contents
                .lines()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_owned),
        );
    } else {
        debug!("No {IGNORE_FILE} file found, using configured patterns only.");
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in &patterns {
        debug!("Adding ignore pattern: {pattern} to globset");
        builder.add(Glob::new(pattern)?);
    }
    info!("Ignoring template paths matching: {:?}", patterns);
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_ignore_vcs_directories() {
        let dir = tempfile::tempdir().unwrap();
        let globset = build_ignore_globset(dir.path(), &[]).unwrap();
        assert!(globset.is_match(".git/HEAD.mustache"));
        assert!(globset.is_match("vendor/node_modules/x.mustache"));
        assert!(!globset.is_match("header.mustache"));
    }

    #[test]
    fn reads_patterns_from_ignore_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(IGNORE_FILE), "# drafts\n\ndrafts/**\n").unwrap();
        let globset = build_ignore_globset(dir.path(), &[]).unwrap();
        assert!(globset.is_match("drafts/new.mustache"));
        assert!(!globset.is_match("final/new.mustache"));
    }

    #[test]
    fn merges_configured_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let globset =
            build_ignore_globset(dir.path(), &["**/_*.mustache".to_string()]).unwrap();
        assert!(globset.is_match("partials/_row.mustache"));
        assert!(!globset.is_match("partials/row.mustache"));
    }

    #[test]
    fn root_with_glob_characters_is_not_a_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site{v2").join("build[1]");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(IGNORE_FILE), "drafts/**\n").unwrap();

        let globset = build_ignore_globset(&root, &[]).unwrap();
        assert!(globset.is_match("drafts/new.mustache"));
        assert!(!globset.is_match("final/new.mustache"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = build_ignore_globset(dir.path(), &["a[".to_string()]);
        assert!(matches!(result, Err(crate::error::Error::GlobSetParseError(_))));
    }
}
