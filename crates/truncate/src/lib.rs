//! Truncation of HTML fragments to a visible-character budget.
//!
//! The input is parsed with a forgiving HTML5 parser, then walked depth-first
//! while a shrinking budget is threaded through it:
//!
//! - text is cut on word boundaries (or mid-word, for a single long word),
//! - elements are kept whole, recursed into, or dropped,
//! - table rows are never split,
//! - empty `<br>`, `<hr>` and `<img>` survive,
//! - when content is cut, one ellipsis is placed inside the nearest block
//!   container (`p`, `li`, `div`, ...) rather than inside inline markup.
//!
//! ```rust
//! use precis_truncate::truncate;
//! assert_eq!(truncate("<p>Hello world</p>", 5), "<p>Hello...</p>");
//! assert_eq!(truncate("<p>Hi</p>", 100), "<p>Hi</p>");
//! ```

mod consts;
pub mod error;
mod limit;
mod options;
mod root;
mod text;
mod walk;

pub use crate::limit::safe_html_truncate;
pub use crate::options::Truncator;

/// Budget used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 100;

/// Truncates `html` to at most `max_length` visible characters with the
/// default options. See [`Truncator::truncate`].
pub fn truncate(html: &str, max_length: usize) -> String {
    Truncator::default().truncate(html, max_length)
}
