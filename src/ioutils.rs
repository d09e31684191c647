use std::path::Path;

use crate::constants::BYTE_ORDER_MARK;
use crate::error::{Error, Result};

/// Reads a UTF-8 text file, attaching the path to any failure.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::ReadError {
        path: path.display().to_string(),
        source,
    })
}

/// Removes a single leading UTF-8 byte order mark, if present.
///
/// # Examples
/// ```
/// use hoganizer::ioutils::remove_byte_order_mark;
///
/// assert_eq!(remove_byte_order_mark("\u{feff}Hello".to_string()), "Hello");
/// assert_eq!(remove_byte_order_mark("Hello".to_string()), "Hello");
/// ```
pub fn remove_byte_order_mark(text: String) -> String {
    match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Writes `content` to `dest_path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let to_write_error = |source| Error::WriteError {
        path: dest_path.display().to_string(),
        source,
    };

    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    std::fs::write(dest_path, content).map_err(to_write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn strips_only_one_byte_order_mark() {
        let text = "\u{feff}\u{feff}body".to_string();
        assert_eq!(remove_byte_order_mark(text), "\u{feff}body");
    }

    #[test]
    fn leaves_inner_byte_order_mark() {
        let text = "a\u{feff}b".to_string();
        assert_eq!(remove_byte_order_mark(text), "a\u{feff}b");
    }

    #[test]
    fn write_file_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("public/js/templates.js");
        write_file("first", &dest).unwrap();
        write_file("second", &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "second");
    }

    #[test]
    fn read_text_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mustache");
        match read_text(&missing) {
            Err(Error::ReadError { path, .. }) => assert!(path.ends_with("missing.mustache")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
