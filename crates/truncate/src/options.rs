use crate::consts::DEFAULT_ELLIPSIS;
use crate::error::{ErrorKind, Result};
use crate::safe_html_truncate;
use crate::walk;
use scraper::Html;
use std::borrow::Cow;
use tracing::instrument;

/// Reusable truncation options.
///
/// A `Truncator` holds no state between calls, so a single instance can be
/// shared freely (including across threads).
///
/// ```rust
/// use precis_truncate::Truncator;
/// let truncator = Truncator::default().with_ellipsis("…").unwrap();
/// assert_eq!(truncator.truncate("<p>Hello world</p>", 5), "<p>Hello…</p>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncator {
    ellipsis: Cow<'static, str>,
    input_limit: Option<usize>,
}
impl Default for Truncator {
    fn default() -> Self {
        Self {
            ellipsis: Cow::Borrowed(DEFAULT_ELLIPSIS),
            input_limit: None,
        }
    }
}
impl Truncator {
    /// Replaces the marker appended where content was cut.
    ///
    /// The marker must be non-empty and free of `<`, `>` and `&`, so it reads
    /// the same in the output as it was written here.
    pub fn with_ellipsis(mut self, ellipsis: impl Into<Cow<'static, str>>) -> Result<Self> {
        let ellipsis = ellipsis.into();
        if ellipsis.is_empty() || ellipsis.contains(['<', '>', '&']) {
            exn::bail!(ErrorKind::InvalidEllipsis(ellipsis.into_owned()));
        }
        self.ellipsis = ellipsis;
        Ok(self)
    }

    /// Caps how many bytes of input are handed to the parser, see [`safe_html_truncate`].
    pub fn with_input_limit(mut self, input_limit: impl Into<Option<usize>>) -> Self {
        self.input_limit = input_limit.into();
        self
    }

    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    pub fn input_limit(&self) -> Option<usize> {
        self.input_limit
    }

    /// Truncates `html` to at most `max_length` visible characters.
    ///
    /// The output is always well-formed: tags are never split and every tag
    /// that is opened gets closed. At most one ellipsis is inserted, and only
    /// inside a block-level container.
    #[instrument(skip(self, html), fields(html_size = html.len()))]
    pub fn truncate(&self, html: &str, max_length: usize) -> String {
        let html = match self.input_limit {
            Some(limit) if html.len() > limit => {
                let limited = safe_html_truncate(html, limit);
                tracing::debug!(limit, kept = limited.len(), "input cut before parsing");
                limited
            },
            _ => html,
        };
        let fragment = Html::parse_fragment(html);
        walk::truncate_fragment(&fragment, max_length, &self.ellipsis)
    }
}
