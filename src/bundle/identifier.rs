//! JavaScript member access for namespace paths.

use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Checks whether `name` can be used after a `.` in member access.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Renders `segment` as a member access on the preceding expression.
///
/// Identifiers use dot notation; anything else is quoted in brackets.
pub fn member(segment: &str) -> String {
    if is_identifier(segment) {
        format!(".{segment}")
    } else {
        // serde_json produces a valid JavaScript string literal for any input
        format!("[{}]", serde_json::Value::from(segment))
    }
}

/// Renders a dotted namespace path as chained member accesses on `base`.
pub fn access(base: &str, path: &str) -> String {
    let mut expression = base.to_string();
    for segment in path.split('.') {
        expression.push_str(&member(segment));
    }
    expression
}
