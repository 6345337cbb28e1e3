//! Budgeted splitting of a single text node.

use crate::consts;
use crate::walk::Step;

/// How much of a text node survives: always a prefix of the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cut<'t> {
    pub kept: &'t str,
    pub consumed: usize,
    pub overflowed: bool,
}
impl<'t> Cut<'t> {
    fn whole(kept: &'t str, consumed: usize) -> Self {
        Self { kept, consumed, overflowed: false }
    }

    pub(crate) fn step(&self) -> Step {
        Step {
            kept: !self.kept.is_empty(),
            consumed: self.consumed,
            overflowed: self.overflowed,
        }
    }
}

/// Decides how much of `text` survives a remaining `budget`.
///
/// Lengths are measured in characters of visible text. When the text does not
/// fit, whole words are kept greedily; a text made of a single unsplittable
/// word is cut mid-word instead, and charges its full length so the caller
/// always stops after it.
pub(crate) fn split(text: &str, budget: usize) -> Cut<'_> {
    let length = text.chars().count();
    if length <= budget && budget > 0 {
        return Cut::whole(text, length);
    }
    // Dropping blank text loses nothing a reader could see.
    if text.trim().is_empty() {
        return Cut::whole("", 0);
    }
    let words: Vec<_> = consts::WORD_REGEX.find_iter(text).collect();
    if words.len() > 1 {
        let mut end = 0;
        let mut added = 0;
        for word in words {
            let word_length = word.as_str().chars().count();
            if added + word_length > budget {
                break;
            }
            added += word_length;
            end = word.end();
        }
        return Cut {
            kept: &text[..end],
            consumed: added,
            overflowed: !text[end..].trim().is_empty(),
        };
    }
    let end = text.char_indices().nth(budget).map_or(text.len(), |(index, _)| index);
    Cut {
        kept: &text[..end],
        consumed: length,
        overflowed: true,
    }
}

/// Drops the whitespace, punctuation and character references that would
/// otherwise sit right before an ellipsis.
pub(crate) fn strip_trailing(text: &str) -> &str {
    consts::TRAILING_REGEX.find(text).map_or(text, |found| &text[..found.start()])
}
