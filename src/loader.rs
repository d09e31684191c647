use crate::classifier::is_template;
use crate::config::{Config, Layout};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ignore::build_ignore_globset;
use crate::ioutils::{read_text, remove_byte_order_mark};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A template read from disk, ready for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Source text without a leading byte order mark.
    pub content: String,
    /// File name without the extension.
    pub name: String,
    /// Dot-joined location below the template root, without the extension.
    pub path: String,
    /// Absolute location of the source file.
    pub file: PathBuf,
}

impl TemplateSource {
    /// Key under which the template is registered in the bundle.
    pub fn key(&self, layout: Layout) -> &str {
        match layout {
            Layout::Nested => &self.path,
            Layout::Flat => &self.name,
        }
    }
}

/// Walks the template root and returns every template file, sorted by path.
///
/// Only regular files reach the classifier; ignored paths are skipped.
pub fn discover_templates(config: &Config) -> Result<Vec<PathBuf>> {
    let root = &config.template_dir;
    if !root.is_dir() {
        return Err(Error::TemplateDirNotFound {
            template_dir: root.display().to_string(),
        });
    }

    let ignored = build_ignore_globset(root, &config.ignore)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        if ignored.is_match(relative) {
            debug!("Ignoring {}", relative.display());
            continue;
        }
        if is_template(path.to_str_checked()?, &config.extension) {
            debug!("Discovered template: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Reads every file and derives its identifiers. The first failure aborts the whole load.
pub fn load_templates(files: &[PathBuf], config: &Config) -> Result<Vec<TemplateSource>> {
    files
        .iter()
        .map(|file| load_template(file, &config.template_dir, &config.extension))
        .collect()
}

/// Reads a single template below `root`.
pub fn load_template(file: &Path, root: &Path, extension: &str) -> Result<TemplateSource> {
    let (name, path) = derive_identifiers(file, root, extension)?;
    let content = remove_byte_order_mark(read_text(file)?);
    debug!("Loaded template '{path}' from {}", file.display());

    Ok(TemplateSource { content, name, path, file: file.to_path_buf() })
}

/// Derives the flat name and the dotted namespace path of `file`.
///
/// The root is removed as an anchored prefix and the extension as an
/// anchored suffix, so neither is affected by the same text appearing
/// elsewhere in the path.
///
/// # Examples
/// ```
/// use hoganizer::loader::derive_identifiers;
/// use std::path::Path;
///
/// let (name, path) = derive_identifiers(
///     Path::new("/srv/templates/widgets/card.mustache"),
///     Path::new("/srv/templates"),
///     ".mustache",
/// )
/// .unwrap();
/// assert_eq!(name, "card");
/// assert_eq!(path, "widgets.card");
/// ```
pub fn derive_identifiers(file: &Path, root: &Path, extension: &str) -> Result<(String, String)> {
    let invalid = |reason: &str| Error::InvalidTemplatePath {
        path: file.display().to_string(),
        reason: reason.to_string(),
    };

    let mut segments = file.segments_below(root)?;
    let leaf = segments.pop().ok_or_else(|| invalid("the path names the template root"))?;
    let name = leaf
        .strip_suffix(extension)
        .ok_or_else(|| invalid("the file name does not end with the template extension"))?
        .to_string();

    segments.push(name.clone());
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(invalid("the namespace path has an empty segment"));
    }

    Ok((name, segments.join(".")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;
    use std::fs;

    const EXT: &str = ".mustache";

    fn identifiers(file: &str) -> (String, String) {
        derive_identifiers(Path::new(file), Path::new("/srv/templates"), EXT).unwrap()
    }

    #[test]
    fn root_level_template() {
        assert_eq!(identifiers("/srv/templates/header.mustache"), ("header".into(), "header".into()));
    }

    #[test]
    fn nested_template() {
        assert_eq!(
            identifiers("/srv/templates/a/b/c.mustache"),
            ("c".into(), "a.b.c".into())
        );
    }

    #[test]
    fn extension_text_inside_name_is_kept() {
        assert_eq!(
            identifiers("/srv/templates/mustache.mustache"),
            ("mustache".into(), "mustache".into())
        );
        assert_eq!(
            identifiers("/srv/templates/a.mustache-ish/x.mustache"),
            ("x".into(), "a.mustache-ish.x".into())
        );
    }

    #[test]
    fn root_text_inside_path_is_kept() {
        assert_eq!(
            identifiers("/srv/templates/srv/templates/list.mustache"),
            ("list".into(), "srv.templates.list".into())
        );
    }

    #[test]
    fn bare_extension_file_is_rejected() {
        let result =
            derive_identifiers(Path::new("/srv/templates/.mustache"), Path::new("/srv/templates"), EXT);
        assert!(matches!(result, Err(Error::InvalidTemplatePath { .. })));
    }

    #[test]
    fn flat_and_nested_keys() {
        let template = TemplateSource {
            content: String::new(),
            name: "card".into(),
            path: "widgets.card".into(),
            file: PathBuf::from("/srv/templates/widgets/card.mustache"),
        };
        assert_eq!(template.key(Layout::Nested), "widgets.card");
        assert_eq!(template.key(Layout::Flat), "card");
    }

    fn config_for(root: &Path) -> Config {
        let options = Options { template_dir: Some(root.to_path_buf()), ..Default::default() };
        Config::from_options(options, root).unwrap()
    }

    #[test]
    fn discovers_only_template_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("widgets")).unwrap();
        fs::create_dir_all(root.join("dir.mustache")).unwrap();
        fs::write(root.join("widgets/card.mustache"), "card").unwrap();
        fs::write(root.join("header.mustache"), "header").unwrap();
        fs::write(root.join("notes.txt"), "notes").unwrap();
        fs::write(root.join("mustache"), "no extension").unwrap();

        let files = discover_templates(&config_for(root)).unwrap();
        assert_eq!(
            files,
            vec![root.join("header.mustache"), root.join("widgets/card.mustache")]
        );
    }

    #[test]
    fn missing_root_is_a_discovery_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("absent"));
        assert!(matches!(
            discover_templates(&config),
            Err(Error::TemplateDirNotFound { .. })
        ));
    }

    #[test]
    fn loads_and_strips_byte_order_mark() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("bom.mustache"), "\u{feff}Hi {{name}}").unwrap();
        fs::write(root.join("plain.mustache"), "Hi").unwrap();

        let config = config_for(root);
        let files = discover_templates(&config).unwrap();
        let templates = load_templates(&files, &config).unwrap();
        assert_eq!(templates[0].content, "Hi {{name}}");
        assert_eq!(templates[1].content, "Hi");
    }

    #[test]
    fn unreadable_template_aborts_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("good.mustache"), "ok").unwrap();
        let files = vec![root.join("good.mustache"), root.join("gone.mustache")];
        let result = load_templates(&files, &config_for(root));
        assert!(matches!(result, Err(Error::ReadError { .. })));
    }
}
