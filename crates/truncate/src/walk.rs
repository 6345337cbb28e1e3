//! The budgeted tree walk.
//!
//! The walk reads the parsed fragment and writes its decisions into a copy of
//! it: dropped nodes are detached, cut text is shortened in place and the
//! ellipsis becomes a text node of its own. Only the copy is serialized.
//!
//! Every level returns a [`Step`]: whether anything of the node survived, how
//! much of the budget it used, and whether it ran out of room. Callers derive
//! their own remaining budget from that; nothing is shared between sibling
//! branches except the once-per-call ellipsis flag held by [`Pass`].

use crate::{consts, root, text};
use ego_tree::NodeId;
use scraper::node::{Node, Text};
use scraper::{ElementRef, Html, StrTendril};
use std::collections::HashSet;

/// The outcome of truncating one node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    /// Some of the node survives in the output.
    pub kept: bool,
    pub consumed: usize,
    /// Content was dropped, or the budget ran out with content still to come.
    pub overflowed: bool,
}
impl Step {
    fn overflowed(mut self) -> Self {
        self.overflowed = true;
        self
    }
}

/// The outcome of walking one node's children.
#[derive(Debug)]
struct Walk {
    kept: bool,
    remaining: usize,
    overflowed: bool,
}

/// Truncates `fragment` to `budget` visible characters and serializes what is left.
pub(crate) fn truncate_fragment(fragment: &Html, budget: usize, ellipsis: &str) -> String {
    let mut pass = Pass::new(fragment, ellipsis);
    let step = pass.truncate_node(fragment.root_element(), budget, false, 0);
    tracing::trace!(consumed = step.consumed, overflowed = step.overflowed, "walk finished");
    root::commit(&mut pass.output, ellipsis)
}

/// State scoped to a single truncation call.
pub(crate) struct Pass<'a> {
    ellipsis: &'a str,
    ellipsis_added: bool,
    /// Elements with non-blank text somewhere below them.
    with_text: HashSet<NodeId>,
    output: Html,
}
impl<'a> Pass<'a> {
    pub(crate) fn new(fragment: &Html, ellipsis: &'a str) -> Self {
        Self {
            ellipsis,
            ellipsis_added: false,
            with_text: index_text(fragment),
            output: fragment.clone(),
        }
    }

    /// Decides what happens to `element` as a whole given `budget`.
    ///
    /// `follows` tells whether visible text comes after this element anywhere
    /// in the document, so exhausting the budget exactly can be told apart
    /// from content that simply fit. Depth zero is the fragment root.
    pub(crate) fn truncate_node(
        &mut self,
        element: ElementRef<'_>,
        budget: usize,
        follows: bool,
        depth: usize,
    ) -> Step {
        let tag = element.value().name().to_ascii_lowercase();
        let ellipsable = depth == 0 || consts::is_ellipsable(&tag);
        if budget == 0 && !ellipsable && self.with_text.contains(&element.id()) {
            tracing::trace!(tag = %tag, "no budget left for element");
            return Step::default().overflowed();
        }
        if tag == consts::ROW_TAG {
            // Rows are kept or dropped whole, never cut.
            let length = visible_length(element);
            return Step {
                kept: element.has_children(),
                consumed: length.min(budget),
                overflowed: length > budget,
            };
        }
        if depth >= consts::MAX_DEPTH {
            let length = visible_length(element);
            tracing::debug!(tag = %tag, depth, length, "nesting too deep, subtree taken whole");
            if length > budget {
                return Step::default().overflowed();
            }
            return Step {
                kept: element.has_children() || consts::is_self_closing(&tag),
                consumed: length,
                overflowed: false,
            };
        }
        let walk = self.walk_children(element, ellipsable, budget, follows, depth);
        let kept = walk.kept || consts::is_self_closing(&tag);
        if !kept {
            tracing::trace!(tag = %tag, "dropping element without content");
        }
        Step {
            kept,
            consumed: budget - walk.remaining,
            overflowed: walk.overflowed,
        }
    }

    fn walk_children(
        &mut self,
        element: ElementRef<'_>,
        ellipsable: bool,
        budget: usize,
        follows: bool,
        depth: usize,
    ) -> Walk {
        let children: Vec<_> = element.children().collect();
        // trailing[i]: whether visible text comes after the i-th child
        let mut trailing = vec![false; children.len()];
        let mut seen = false;
        for (index, child) in children.iter().enumerate().rev() {
            trailing[index] = seen;
            seen = seen
                || match child.value() {
                    Node::Text(text) => !text.trim().is_empty(),
                    Node::Element(_) => self.with_text.contains(&child.id()),
                    _ => false,
                };
        }
        let mut kept = false;
        let mut last_text = None;
        let mut remaining = budget;
        let mut overflowed = false;
        let mut children = children.into_iter().zip(trailing);
        for (child, trailing) in children.by_ref() {
            let follows = follows || trailing;
            let (step, kept_text) = match child.value() {
                Node::Element(_) => match ElementRef::wrap(child) {
                    Some(child) => (self.truncate_node(child, remaining, follows, depth + 1), None),
                    None => (Step::default(), None),
                },
                Node::Text(content) => {
                    let cut = text::split(content, remaining);
                    if !cut.kept.is_empty() && cut.kept.len() < content.len() {
                        self.set_text(child.id(), cut.kept);
                    }
                    (cut.step(), Some(cut.kept))
                },
                _ => (Step::default(), None),
            };
            if step.kept {
                kept = true;
                last_text = kept_text.map(|content| (child.id(), content));
            } else {
                self.detach(child.id());
            }
            overflowed = step.overflowed || step.consumed > remaining;
            remaining = remaining.saturating_sub(step.consumed);
            overflowed = overflowed || (remaining == 0 && follows);
            if overflowed {
                if ellipsable && !self.ellipsis_added {
                    if let Some((id, content)) = last_text {
                        self.set_text(id, text::strip_trailing(content));
                    }
                    self.append_ellipsis(element.id());
                    kept = true;
                    tracing::debug!(tag = element.value().name(), "ellipsis inserted");
                }
                break;
            }
        }
        for (child, _) in children {
            self.detach(child.id());
        }
        Walk { kept, remaining, overflowed }
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(mut node) = self.output.tree.get_mut(id) {
            node.detach();
        }
    }

    fn set_text(&mut self, id: NodeId, content: &str) {
        if let Some(mut node) = self.output.tree.get_mut(id)
            && let Node::Text(text) = node.value()
        {
            text.text = StrTendril::from(content);
        }
    }

    fn append_ellipsis(&mut self, id: NodeId) {
        self.ellipsis_added = true;
        if let Some(mut node) = self.output.tree.get_mut(id) {
            node.append(Node::Text(Text {
                text: StrTendril::from(self.ellipsis),
            }));
        }
    }
}

/// Collects every element that has non-blank text below it, in one pass.
fn index_text(fragment: &Html) -> HashSet<NodeId> {
    let mut with_text = HashSet::new();
    for node in fragment.tree.root().descendants() {
        if let Node::Text(text) = node.value()
            && !text.trim().is_empty()
        {
            // Stop at the first ancestor an earlier text node already marked.
            for ancestor in node.ancestors() {
                if !with_text.insert(ancestor.id()) {
                    break;
                }
            }
        }
    }
    with_text
}

fn visible_length(element: ElementRef<'_>) -> usize {
    element.text().map(|t| t.chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element(fragment: &Html) -> ElementRef<'_> {
        fragment.root_element().children().find_map(ElementRef::wrap).unwrap()
    }

    #[test]
    fn reports_consumed_budget() {
        let fragment = Html::parse_fragment("<p>Hello world</p>");
        let step = Pass::new(&fragment, "...").truncate_node(fragment.root_element(), 100, false, 0);
        assert_eq!(step, Step { kept: true, consumed: 11, overflowed: false });
        assert_eq!(truncate_fragment(&fragment, 100, "..."), "<p>Hello world</p>");
    }

    #[test]
    fn overflow_when_text_is_cut() {
        let fragment = Html::parse_fragment("<p>Hello world</p>");
        let step = Pass::new(&fragment, "...").truncate_node(fragment.root_element(), 5, false, 0);
        assert!(step.overflowed);
        assert_eq!(truncate_fragment(&fragment, 5, "..."), "<p>Hello...</p>");
    }

    #[test]
    fn exact_fit_is_not_overflow() {
        let fragment = Html::parse_fragment("<p>Hi</p>");
        let step = Pass::new(&fragment, "...").truncate_node(fragment.root_element(), 2, false, 0);
        assert_eq!(step, Step { kept: true, consumed: 2, overflowed: false });
    }

    #[test]
    fn exact_fit_with_more_to_come_is_overflow() {
        let fragment = Html::parse_fragment("<p>Hi</p><p>there</p>");
        let step = Pass::new(&fragment, "...").truncate_node(fragment.root_element(), 2, false, 0);
        assert!(step.overflowed);
        assert_eq!(truncate_fragment(&fragment, 2, "..."), "<p>Hi...</p>");
    }

    #[test]
    fn zero_budget_drops_inline_elements() {
        let fragment = Html::parse_fragment("<b>bold</b>");
        let step = Pass::new(&fragment, "...").truncate_node(first_element(&fragment), 0, false, 1);
        assert_eq!(step, Step::default().overflowed());
    }

    #[test]
    fn ellipsis_is_added_once() {
        let fragment = Html::parse_fragment("<p>one two</p><p>three four</p>");
        let mut pass = Pass::new(&fragment, "...");
        for paragraph in fragment.root_element().children().filter_map(ElementRef::wrap) {
            assert!(pass.truncate_node(paragraph, 3, false, 1).overflowed);
        }
        let output = pass.output.root_element().inner_html();
        assert_eq!(output, "<p>one...</p><p></p>");
    }

    #[test]
    fn text_index_marks_ancestors_only() {
        let fragment = Html::parse_fragment("<div><p><b>x</b></p><p> </p><br></div>");
        let with_text = index_text(&fragment);
        let div = first_element(&fragment);
        assert!(with_text.contains(&div.id()));
        let marked: Vec<_> = div
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| with_text.contains(&element.id()))
            .map(|element| element.value().name().to_string())
            .collect();
        assert_eq!(marked, vec!["div", "p", "b"]);
    }

    #[test]
    fn keeps_attributes() {
        let fragment = Html::parse_fragment(r#"<p title="a &quot;b&quot; &amp; c">Hello world</p>"#);
        assert_eq!(
            truncate_fragment(&fragment, 5, "..."),
            r#"<p title="a &quot;b&quot; &amp; c">Hello...</p>"#
        );
    }

    #[test]
    fn keeps_namespaced_attributes() {
        let html = r##"<p>see <svg><text xlink:href="#a">hi</text></svg> and more</p>"##;
        let fragment = Html::parse_fragment(html);
        assert_eq!(
            truncate_fragment(&fragment, 6, "..."),
            r##"<p>see <svg><text xlink:href="#a">hi</text></svg>...</p>"##
        );
    }

    #[test]
    fn deep_subtree_is_taken_whole() {
        let depth = consts::MAX_DEPTH + 50;
        let html = format!("{}deep{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let fragment = Html::parse_fragment(&html);
        assert_eq!(truncate_fragment(&fragment, 4, "..."), fragment.root_element().inner_html());
        assert_eq!(truncate_fragment(&fragment, 3, "..."), "...");
    }
}
