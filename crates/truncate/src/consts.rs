use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

/// Containers inside which an ellipsis may be appended. The fragment root is
/// always ellipsable on top of these.
pub(crate) const ELLIPSABLE_TAGS: &[&str] = &[
    "p", "ol", "ul", "li", "div", "header", "article", "nav", "section", "footer", "aside", "dd", "dt", "dl",
];

/// Void elements that are kept verbatim when they contribute no text.
pub(crate) const SELF_CLOSING_TAGS: &[&str] = &["br", "hr", "img"];

/// Table sections that may hold rows directly.
pub(crate) const ROW_GROUP_TAGS: &[&str] = &["thead", "tbody", "tfoot"];

pub(crate) const ROW_TAG: &str = "tr";
pub(crate) const TABLE_TAG: &str = "table";

pub(crate) const DEFAULT_ELLIPSIS: &str = "...";

/// Nesting depth past which a subtree is kept or dropped as one unit.
pub(crate) const MAX_DEPTH: usize = 128;

// A word is any leading whitespace plus the run of non-whitespace after it.
regex!(WORD_REGEX, r"\s*\S+");
// Whitespace, punctuation and character references left dangling before an ellipsis.
regex!(TRAILING_REGEX, r"(?:[\s\pP]+|&(?:[a-z]+|#[0-9]+);?)*$");

pub(crate) fn is_ellipsable(tag: &str) -> bool {
    ELLIPSABLE_TAGS.contains(&tag)
}

pub(crate) fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&tag)
}
