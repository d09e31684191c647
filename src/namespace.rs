//! Derivation of the intermediate namespaces a set of template paths needs.

use indexmap::IndexSet;

/// Number of `.` separators in a dotted path.
pub fn depth(path: &str) -> usize {
    path.matches('.').count()
}

/// Returns the dotted path of the parent namespace, or `None` for a root-level name.
pub fn parent(path: &str) -> Option<&str> {
    path.rsplit_once('.').map(|(parent, _)| parent)
}

/// Collects every namespace that must exist before the given template paths can be registered.
///
/// For `a.b.c` the namespaces are `a` and `a.b`; the leaf itself is not a
/// namespace. The result has no duplicates and is ordered by depth, with
/// first-seen order among namespaces of equal depth, so every namespace
/// comes after all of its parents.
///
/// # Examples
/// ```
/// use hoganizer::namespace::build_prefixes;
///
/// let prefixes = build_prefixes(["a.b.c", "a.d", "header", "e.f"]);
/// assert_eq!(prefixes, vec!["a", "e", "a.b"]);
/// ```
pub fn build_prefixes<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = IndexSet::new();

    for path in paths {
        let segments: Vec<&str> = path.as_ref().split('.').collect();
        let namespaces = &segments[..segments.len() - 1];
        for end in 1..=namespaces.len() {
            let prefix = namespaces[..end].join(".");
            if !prefix.is_empty() {
                seen.insert(prefix);
            }
        }
    }

    let mut prefixes: Vec<String> = seen.into_iter().collect();
    prefixes.sort_by_key(|prefix| depth(prefix));
    prefixes
}
