use crate::dom::Dom;
use crate::error::DomError;

use super::pictograph::{self, inside_marker};

/// Replaces the visible text of `element` with `text`.
///
/// Every bare text node outside a pictograph marker is removed and a single
/// new one is inserted in front of the first marker (or as first child when
/// there is none). Nested elements other than text are kept.
pub fn substitute_text<D: Dom>(dom: &D, element: &D::Node, text: &str, marker_class: &str) -> Result<(), DomError> {
    let mut first_marker = None;
    let mut stale = Vec::new();
    for node in dom.text_nodes(element) {
        if inside_marker(dom, &node, marker_class) {
            if first_marker.is_none() {
                first_marker = marker_root(dom, &node, element, marker_class);
            }
        } else {
            stale.push(node);
        }
    }
    for node in &stale {
        dom.remove(node)?;
    }

    let clean = pictograph::strip(text);
    match first_marker {
        Some(marker) => {
            let parent = dom.parent(&marker).unwrap_or_else(|| element.clone());
            let node = dom.create_text(&format!("{} ", clean));
            dom.insert_before(&parent, &node, Some(&marker))
        }
        None => {
            let node = dom.create_text(&clean);
            let first = dom.children(element).into_iter().next();
            dom.insert_before(element, &node, first.as_ref())
        }
    }
}

/// The outermost marker span holding `node`, stopping at `element`.
fn marker_root<D: Dom>(dom: &D, node: &D::Node, element: &D::Node, class: &str) -> Option<D::Node> {
    let mut found = None;
    let mut current = dom.parent(node);
    while let Some(ancestor) = current {
        if &ancestor == element {
            break;
        }
        if dom.has_class(&ancestor, class) {
            found = Some(ancestor.clone());
        }
        current = dom.parent(&ancestor);
    }
    found
}

/// Writes each entry onto the matching positional `item` under `container`.
/// Surplus entries and surplus items are left alone. Returns how many were
/// written.
pub fn substitute_items<D: Dom>(
    dom: &D,
    container: &D::Node,
    item: &str,
    entries: &[&str],
    marker_class: &str,
) -> Result<usize, DomError> {
    let items = dom.query_all(Some(container), item)?;
    let mut written = 0;
    for (node, entry) in items.iter().zip(entries) {
        substitute_text(dom, node, entry, marker_class)?;
        written += 1;
    }
    Ok(written)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `<li>` per entry, escaped and stripped of pictographs.
pub fn render_bullets(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|entry| format!("<li>{}</li>", escape_html(&pictograph::strip(entry))))
        .collect()
}

pub fn replace_list<D: Dom>(dom: &D, list: &D::Node, entries: &[&str]) -> Result<(), DomError> {
    dom.set_inner_html(list, &render_bullets(entries))
}

/// Text the element shows, ignoring pictograph markers.
#[cfg(test)]
pub fn visible_text<D: Dom>(dom: &D, element: &D::Node, marker_class: &str) -> String {
    dom.text_nodes(element)
        .into_iter()
        .filter(|node| !inside_marker(dom, node, marker_class))
        .filter_map(|node| dom.text_data(&node))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDom;
    use crate::i18n::pictograph::wrap_subtree;

    const MARKER: &str = "emoji";

    fn page(body: &str) -> MemoryDom {
        let dom = MemoryDom::parse(&format!("<html><body>{}</body></html>", body));
        let root = dom.body().unwrap();
        wrap_subtree(&dom, &root, MARKER);
        dom
    }

    #[test]
    fn keeps_markers_and_nested_elements() {
        let dom = page(r#"<a id="cta" class="btn"><i class="icon"></i>Get started 🚀</a>"#);
        let cta = dom.select("#cta");
        substitute_text(&dom, &cta, "Empezar", MARKER).unwrap();
        assert_eq!(
            dom.markup_of(cta),
            r#"<a id="cta" class="btn"><i class="icon"></i>Empezar <span class="emoji" aria-hidden="true" data-i18n-skip="true">🚀</span></a>"#
        );
        assert_eq!(visible_text(&dom, &cta, MARKER), "Empezar");
    }

    #[test]
    fn plain_element_gets_single_text_node() {
        let dom = page(r#"<h2 id="t">Our <b></b>services</h2>"#);
        let title = dom.select("#t");
        substitute_text(&dom, &title, "Nos services", MARKER).unwrap();
        let texts: Vec<_> = dom.text_nodes(&title);
        assert_eq!(texts.len(), 1);
        assert_eq!(dom.markup_of(title), r#"<h2 id="t">Nos services<b></b></h2>"#);
    }

    #[test]
    fn translated_glyphs_are_dropped() {
        let dom = page(r#"<p id="p">Fast ⚡</p>"#);
        let p = dom.select("#p");
        substitute_text(&dom, &p, "⚡ Rápido", MARKER).unwrap();
        assert_eq!(dom.query_all(Some(&p), ".emoji").unwrap().len(), 1);
        assert_eq!(visible_text(&dom, &p, MARKER), "Rápido");
    }

    #[test]
    fn items_map_by_position() {
        let dom = page(
            r#"<div id="tags"><span class="feature-tag">A ✨</span><span class="feature-tag">B</span></div>"#,
        );
        let tags = dom.select("#tags");
        let written = substitute_items(&dom, &tags, ".feature-tag", &["Uno", "Dos", "Tres"], MARKER).unwrap();
        assert_eq!(written, 2);
        let texts: Vec<_> = dom
            .query_all(Some(&tags), ".feature-tag")
            .unwrap()
            .iter()
            .map(|tag| visible_text(&dom, tag, MARKER))
            .collect();
        assert_eq!(texts, vec!["Uno", "Dos"]);
    }

    #[test]
    fn bullet_entries_are_escaped() {
        assert_eq!(
            render_bullets(&["<b>bold</b>", "Tom & Jerry's \"show\""]),
            "<li>&lt;b&gt;bold&lt;/b&gt;</li><li>Tom &amp; Jerry&#39;s &quot;show&quot;</li>"
        );
        let dom = page(r#"<ul id="l"><li>Old</li></ul>"#);
        let list = dom.select("#l");
        replace_list(&dom, &list, &["<script>x</script>", "Two"]).unwrap();
        assert!(dom.query(Some(&list), "script").unwrap().is_none());
        let items = dom.query_all(Some(&list), "li").unwrap();
        assert_eq!(dom.text_content(&items[0]), "<script>x</script>");
        assert_eq!(items.len(), 2);
    }
}
