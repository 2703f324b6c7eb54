/// Optional source normalization applied before parsing
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static METHOD_REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+\[\]::\w+)|(\w+::\w+)").unwrap());

/// Replace `Type::method` and `Type[]::new` with a `1` literal.
///
/// Signatures never contain method references, so eliding them cannot change
/// what the extractor reports.
pub fn elide_method_references(content: &str) -> Cow<'_, str> {
    METHOD_REFERENCE_RE.replace_all(content, "1")
}
