//! Decorative emoji handling.
//!
//! Pictographs only ever come from the page markup. Before text is swapped
//! every glyph is moved into its own marker span so that clearing text nodes
//! leaves it in place, and translated strings are stripped of glyphs so none
//! appear twice.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::Dom;
use crate::error::DomError;

/// One emoji sequence: a pictograph outside Latin-1 (`©` and `®` stay text),
/// optional presentation selector or skin tone, and any ZWJ continuations.
static GLYPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{Extended_Pictographic}&&[^\x00-\xFF]](?:\x{FE0F}|\p{Emoji_Modifier})*(?:\x{200D}\p{Extended_Pictographic}(?:\x{FE0F}|\p{Emoji_Modifier})*)*",
    )
    .expect("pictograph pattern is valid")
});

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("whitespace pattern is valid"));

const SKIP_TAGS: [&str; 3] = ["script", "style", "noscript"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Glyph(&'a str),
}

pub fn contains_glyph(text: &str) -> bool {
    GLYPH.is_match(text)
}

/// Splits `text` into plain runs and glyphs, in order. Concatenating the
/// segments gives back `text`.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in GLYPH.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        out.push(Segment::Glyph(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}

/// Removes every glyph and the doubled spacing it leaves behind.
pub fn strip(text: &str) -> String {
    if !contains_glyph(text) {
        return text.to_string();
    }
    let without = GLYPH.replace_all(text, "");
    SPACE_RUN.replace_all(&without, " ").trim().to_string()
}

/// True when `node` sits inside a marker span.
pub fn inside_marker<D: Dom>(dom: &D, node: &D::Node, class: &str) -> bool {
    let mut current = dom.parent(node);
    while let Some(ancestor) = current {
        if dom.has_class(&ancestor, class) {
            return true;
        }
        current = dom.parent(&ancestor);
    }
    false
}

fn inside_skipped_tag<D: Dom>(dom: &D, node: &D::Node) -> bool {
    let mut current = dom.parent(node);
    while let Some(ancestor) = current {
        if let Some(tag) = dom.tag_name(&ancestor) {
            if SKIP_TAGS.contains(&tag.as_str()) {
                return true;
            }
        }
        current = dom.parent(&ancestor);
    }
    false
}

pub fn create_marker<D: Dom>(dom: &D, glyph: &str, class: &str) -> Result<D::Node, DomError> {
    let span = dom.create_element("span")?;
    dom.set_attribute(&span, "class", class)?;
    dom.set_attribute(&span, "aria-hidden", "true")?;
    dom.set_attribute(&span, "data-i18n-skip", "true")?;
    let glyph = dom.create_text(glyph);
    dom.insert_before(&span, &glyph, None)?;
    Ok(span)
}

fn wrap_text_node<D: Dom>(dom: &D, text: &D::Node, class: &str) -> Result<usize, DomError> {
    let Some(parent) = dom.parent(text) else {
        return Ok(0);
    };
    let data = dom.text_data(text).unwrap_or_default();
    let mut markers = 0;
    let mut staged = Vec::new();
    for segment in segments(&data) {
        staged.push(match segment {
            Segment::Text(run) => dom.create_text(run),
            Segment::Glyph(glyph) => {
                markers += 1;
                create_marker(dom, glyph, class)?
            }
        });
    }
    // The original node stays in place until every replacement is attached.
    for (inserted, node) in staged.iter().enumerate() {
        if let Err(e) = dom.insert_before(&parent, node, Some(text)) {
            detach(dom, &staged[..inserted]);
            return Err(e);
        }
    }
    if let Err(e) = dom.remove(text) {
        detach(dom, &staged);
        return Err(e);
    }
    Ok(markers)
}

fn detach<D: Dom>(dom: &D, nodes: &[D::Node]) {
    for node in nodes {
        if let Err(e) = dom.remove(node) {
            warn!("Could not roll back partial pictograph wrap: {}", e);
        }
    }
}

/// Moves every glyph under `root` into a marker span. Text already inside a
/// marker is left alone, so running this twice changes nothing. A node that
/// cannot be rewritten is logged and skipped.
pub fn wrap_subtree<D: Dom>(dom: &D, root: &D::Node, class: &str) -> usize {
    let mut wrapped = 0;
    for text in dom.text_nodes(root) {
        let has_glyph = dom.text_data(&text).map_or(false, |data| contains_glyph(&data));
        if !has_glyph || inside_marker(dom, &text, class) || inside_skipped_tag(dom, &text) {
            continue;
        }
        match wrap_text_node(dom, &text, class) {
            Ok(count) => wrapped += count,
            Err(e) => warn!("Could not wrap pictographs in text node: {}", e),
        }
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryDom, NodeId};
    use crate::dom::NodeKind;
    use std::cell::Cell;

    #[test]
    fn segments_keep_order_and_content() {
        let text = "🚀 Fast 👍🏽 growth 👨‍👩‍👧 now";
        let parts = segments(text);
        let glyphs: Vec<_> = parts
            .iter()
            .filter_map(|s| match s {
                Segment::Glyph(g) => Some(*g),
                Segment::Text(_) => None,
            })
            .collect();
        assert_eq!(glyphs, vec!["🚀", "👍🏽", "👨‍👩‍👧"]);
        let rebuilt: String = parts
            .iter()
            .map(|s| match s {
                Segment::Text(t) | Segment::Glyph(t) => *t,
            })
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn strip_removes_glyphs_and_spacing() {
        assert_eq!(strip("⚡ Instant delivery ⚡"), "Instant delivery");
        assert_eq!(strip("Safe ✅ and fast"), "Safe and fast");
        assert_eq!(strip("❤️ Loved"), "Loved");
        assert_eq!(strip("plain text"), "plain text");
    }

    #[test]
    fn copyright_sign_is_text() {
        assert!(!contains_glyph("© 2026 SnapBoost. All rights reserved."));
        assert_eq!(strip("© 2026 SnapBoost"), "© 2026 SnapBoost");
    }

    #[test]
    fn wraps_each_glyph_once() {
        let dom = MemoryDom::parse(
            "<html><body><h1 id=\"t\">🔥 Boost 🚀 now</h1><style>.a::after { content: \"⭐\" }</style></body></html>",
        );
        let body = dom.body().unwrap();
        assert_eq!(wrap_subtree(&dom, &body, "emoji"), 2);
        let title = dom.select("#t");
        assert_eq!(
            dom.markup_of(title),
            "<h1 id=\"t\"><span class=\"emoji\" aria-hidden=\"true\" data-i18n-skip=\"true\">🔥</span> Boost \
             <span class=\"emoji\" aria-hidden=\"true\" data-i18n-skip=\"true\">🚀</span> now</h1>"
        );
        assert_eq!(dom.text_content(&title), "🔥 Boost 🚀 now");

        // Second pass finds nothing new.
        assert_eq!(wrap_subtree(&dom, &body, "emoji"), 0);
        assert_eq!(dom.query_all(None, ".emoji").unwrap().len(), 2);
    }

    /// Fails the n-th `create_element` call and delegates everything else.
    struct FailingDom {
        inner: MemoryDom,
        fail_at: usize,
        created: Cell<usize>,
    }

    impl Dom for FailingDom {
        type Node = NodeId;

        fn query(&self, scope: Option<&NodeId>, selector: &str) -> Result<Option<NodeId>, DomError> {
            self.inner.query(scope, selector)
        }

        fn query_all(&self, scope: Option<&NodeId>, selector: &str) -> Result<Vec<NodeId>, DomError> {
            self.inner.query_all(scope, selector)
        }

        fn document_element(&self) -> Result<NodeId, DomError> {
            self.inner.document_element()
        }

        fn body(&self) -> Result<NodeId, DomError> {
            self.inner.body()
        }

        fn kind(&self, node: &NodeId) -> NodeKind {
            self.inner.kind(node)
        }

        fn tag_name(&self, node: &NodeId) -> Option<String> {
            self.inner.tag_name(node)
        }

        fn children(&self, node: &NodeId) -> Vec<NodeId> {
            self.inner.children(node)
        }

        fn parent(&self, node: &NodeId) -> Option<NodeId> {
            self.inner.parent(node)
        }

        fn text_data(&self, node: &NodeId) -> Option<String> {
            self.inner.text_data(node)
        }

        fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
            self.inner.attribute(node, name)
        }

        fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
            self.inner.set_attribute(node, name, value)
        }

        fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
            let count = self.created.get() + 1;
            self.created.set(count);
            if count == self.fail_at {
                return Err(DomError::Operation {
                    op: "createElement",
                    message: "refused".to_string(),
                });
            }
            self.inner.create_element(tag)
        }

        fn create_text(&self, data: &str) -> NodeId {
            self.inner.create_text(data)
        }

        fn insert_before(&self, parent: &NodeId, node: &NodeId, reference: Option<&NodeId>) -> Result<(), DomError> {
            self.inner.insert_before(parent, node, reference)
        }

        fn remove(&self, node: &NodeId) -> Result<(), DomError> {
            self.inner.remove(node)
        }

        fn set_inner_html(&self, node: &NodeId, html: &str) -> Result<(), DomError> {
            self.inner.set_inner_html(node, html)
        }
    }

    #[test]
    fn failed_wrap_leaves_text_untouched() {
        let dom = FailingDom {
            inner: MemoryDom::parse("<html><body><h1 id=\"t\">🔥 Boost 🚀 now</h1></body></html>"),
            fail_at: 2,
            created: Cell::new(0),
        };
        let body = dom.body().unwrap();
        assert_eq!(wrap_subtree(&dom, &body, "emoji"), 0);
        let title = dom.inner.select("#t");
        assert_eq!(dom.text_content(&title), "🔥 Boost 🚀 now");
        assert_eq!(dom.inner.markup_of(title), "<h1 id=\"t\">🔥 Boost 🚀 now</h1>");
        assert!(dom.query_all(None, ".emoji").unwrap().is_empty());
    }
}
