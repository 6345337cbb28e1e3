//! Clean-up applied once to the fragment root after its children are truncated.

use crate::consts;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Applies the root clean-up to a truncated fragment and serializes it.
pub(crate) fn commit(fragment: &mut Html, ellipsis: &str) -> String {
    if collapse_trailing_table(fragment, ellipsis) {
        tracing::debug!("dropped trailing table with a single row");
    }
    fragment.root_element().inner_html()
}

/// Removes the fragment's trailing table when exactly one row of it survived.
///
/// A lone row says too little to be worth showing. Larger tables are kept.
/// An ellipsis right after the table does not shield it.
fn collapse_trailing_table(fragment: &mut Html, ellipsis: &str) -> bool {
    let table = {
        let root = fragment.root_element();
        let mut trailing = root.children().rev().filter(|child| match child.value() {
            Node::Element(_) => true,
            Node::Text(text) => !text.trim().is_empty(),
            _ => false,
        });
        let mut last = trailing.next();
        if let Some(node) = last
            && let Node::Text(text) = node.value()
            && text.trim() == ellipsis.trim()
        {
            last = trailing.next();
        }
        match last.and_then(ElementRef::wrap) {
            Some(table) if is_tag(table, consts::TABLE_TAG) && count_rows(table) == 1 => table.id(),
            _ => return false,
        }
    };
    match fragment.tree.get_mut(table) {
        Some(mut node) => {
            node.detach();
            true
        },
        None => false,
    }
}

/// Counts the rows directly owned by `table`, including those in its sections.
fn count_rows(table: ElementRef<'_>) -> usize {
    table
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| {
            if is_tag(child, consts::ROW_TAG) {
                1
            } else if consts::ROW_GROUP_TAGS.iter().any(|group| is_tag(child, group)) {
                child.children().filter_map(ElementRef::wrap).filter(|row| is_tag(*row, consts::ROW_TAG)).count()
            } else {
                0
            }
        })
        .sum()
}

fn is_tag(element: ElementRef<'_>, tag: &str) -> bool {
    element.value().name().eq_ignore_ascii_case(tag)
}
