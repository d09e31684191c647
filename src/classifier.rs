//! Decides which discovered files are template sources.

/// Returns the extension token used for matching: the configured extension without its leading dot.
pub fn extension_token(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}

/// Checks whether `file_path` looks like a template with the given extension.
///
/// The path qualifies when it has at least one `.` and the text after the
/// last `.` equals the extension token. A path without any dot never
/// qualifies, even when it equals the token itself.
///
/// # Examples
/// ```
/// use hoganizer::classifier::is_template;
///
/// assert!(is_template("templates/widgets/card.mustache", ".mustache"));
/// assert!(!is_template("templates/README.md", ".mustache"));
/// assert!(!is_template("mustache", ".mustache"));
/// ```
pub fn is_template(file_path: &str, extension: &str) -> bool {
    file_path
        .rsplit_once('.')
        .is_some_and(|(_, last)| last == extension_token(extension))
}
