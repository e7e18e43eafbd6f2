//! Arena-backed DOM for tests. Fixtures are written as XHTML and loaded with
//! `roxmltree`; only the selector subset the page uses is understood.

use std::cell::RefCell;

use super::{Dom, NodeKind};
use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

enum Data {
    Element { tag: String, attrs: Vec<(String, String)> },
    Text(String),
}

struct Entry {
    data: Data,
    parent: Option<usize>,
    children: Vec<usize>,
}

pub struct MemoryDom {
    nodes: RefCell<Vec<Entry>>,
    root: usize,
}

impl MemoryDom {
    pub fn parse(xhtml: &str) -> Self {
        let doc = roxmltree::Document::parse(xhtml).expect("fixture must be well-formed XHTML");
        let dom = MemoryDom {
            nodes: RefCell::new(Vec::new()),
            root: 0,
        };
        let root = dom.import(doc.root_element(), None);
        MemoryDom { root, ..dom }
    }

    fn import(&self, node: roxmltree::Node, parent: Option<usize>) -> usize {
        let data = if node.is_text() {
            Data::Text(node.text().unwrap_or_default().to_string())
        } else {
            Data::Element {
                tag: node.tag_name().name().to_lowercase(),
                attrs: node
                    .attributes()
                    .map(|a| (a.name().to_string(), a.value().to_string()))
                    .collect(),
            }
        };
        let id = self.push(data, parent);
        for child in node.children().filter(|c| c.is_element() || c.is_text()) {
            let child_id = self.import(child, Some(id));
            self.nodes.borrow_mut()[id].children.push(child_id);
        }
        id
    }

    fn push(&self, data: Data, parent: Option<usize>) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Entry {
            data,
            parent,
            children: Vec::new(),
        });
        nodes.len() - 1
    }

    fn detach(&self, id: usize) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[id].parent.take() {
            nodes[parent].children.retain(|&c| c != id);
        }
    }

    /// First element matching `selector`; panics when there is none.
    pub fn select(&self, selector: &str) -> NodeId {
        self.query(None, selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("fixture has no `{}`", selector))
    }

    pub fn markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(self.root, &mut out);
        out
    }

    pub fn markup_of(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(node.0, &mut out);
        out
    }

    fn write_markup(&self, id: usize, out: &mut String) {
        let (tag, attrs, children) = {
            let nodes = self.nodes.borrow();
            match &nodes[id].data {
                Data::Text(text) => {
                    out.push_str(&escape(text));
                    return;
                }
                Data::Element { tag, attrs } => (tag.clone(), attrs.clone(), nodes[id].children.clone()),
            }
        };
        out.push('<');
        out.push_str(&tag);
        for (name, value) in &attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        out.push('>');
        for child in children {
            self.write_markup(child, out);
        }
        out.push_str(&format!("</{}>", tag));
    }

    fn matches(&self, id: usize, parts: &[(Combinator, Compound)]) -> bool {
        let Some(((combinator, last), rest)) = parts.split_last() else {
            return true;
        };
        if !self.matches_compound(id, last) {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        let mut ancestor = self.nodes.borrow()[id].parent;
        match combinator {
            Combinator::Child => ancestor.map_or(false, |p| self.matches(p, rest)),
            Combinator::Descendant => {
                while let Some(p) = ancestor {
                    if self.matches(p, rest) {
                        return true;
                    }
                    ancestor = self.nodes.borrow()[p].parent;
                }
                false
            }
        }
    }

    fn matches_compound(&self, id: usize, compound: &Compound) -> bool {
        let nodes = self.nodes.borrow();
        let Data::Element { tag, attrs } = &nodes[id].data else {
            return false;
        };
        let attr = |name: &str| attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str());
        if compound.tag.as_deref().map_or(false, |t| t != tag.as_str()) {
            return false;
        }
        if let Some(id) = &compound.id {
            if attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        let classes: Vec<&str> = attr("class").unwrap_or_default().split_whitespace().collect();
        if !compound.classes.iter().all(|c| classes.contains(&c.as_str())) {
            return false;
        }
        compound.attrs.iter().all(|(name, value)| match (attr(name), value) {
            (Some(actual), Some(expected)) => actual == expected.as_str(),
            (Some(_), None) => true,
            (None, _) => false,
        })
    }

    fn descendants(&self, id: usize, out: &mut Vec<usize>) {
        let children = self.nodes.borrow()[id].children.clone();
        for child in children {
            out.push(child);
            self.descendants(child, out);
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attrs.is_empty()
    }
}

fn parse_selector(selector: &str) -> Result<Vec<(Combinator, Compound)>, DomError> {
    let invalid = |message: &str| DomError::Selector {
        selector: selector.to_string(),
        message: message.to_string(),
    };
    let mut parts = Vec::new();
    let mut current = Compound::default();
    let mut pending = Combinator::Descendant;
    let mut universal = false;
    let mut chars = selector.trim().chars().peekable();

    fn ident(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
        let mut out = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                out.push(c);
                chars.next();
            } else {
                break;
            }
        }
        out
    }

    let mut flush = |current: &mut Compound, pending: &mut Combinator, universal: &mut bool| {
        if !current.is_empty() || *universal {
            parts.push((*pending, std::mem::take(current)));
            *pending = Combinator::Descendant;
            *universal = false;
        }
    };

    while let Some(&c) = chars.peek() {
        match c {
            ' ' => {
                chars.next();
                flush(&mut current, &mut pending, &mut universal);
            }
            '>' => {
                chars.next();
                flush(&mut current, &mut pending, &mut universal);
                pending = Combinator::Child;
            }
            '*' => {
                chars.next();
                universal = true;
            }
            '#' => {
                chars.next();
                current.id = Some(ident(&mut chars));
            }
            '.' => {
                chars.next();
                current.classes.push(ident(&mut chars));
            }
            '[' => {
                chars.next();
                let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                let attr = match body.split_once('=') {
                    Some((name, value)) => (
                        name.trim().to_string(),
                        Some(value.trim().trim_matches(|q| q == '"' || q == '\'').to_string()),
                    ),
                    None => (body.trim().to_string(), None),
                };
                current.attrs.push(attr);
            }
            c if c.is_alphanumeric() => current.tag = Some(ident(&mut chars).to_lowercase()),
            _ => return Err(invalid("unsupported selector syntax")),
        }
    }
    flush(&mut current, &mut pending, &mut universal);
    if parts.is_empty() {
        return Err(invalid("empty selector"));
    }
    Ok(parts)
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query(&self, scope: Option<&NodeId>, selector: &str) -> Result<Option<NodeId>, DomError> {
        Ok(self.query_all(scope, selector)?.into_iter().next())
    }

    fn query_all(&self, scope: Option<&NodeId>, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let parts = parse_selector(selector)?;
        let mut candidates = Vec::new();
        match scope {
            Some(scope) => self.descendants(scope.0, &mut candidates),
            None => {
                candidates.push(self.root);
                self.descendants(self.root, &mut candidates);
            }
        }
        Ok(candidates
            .into_iter()
            .filter(|&id| self.matches(id, &parts))
            .map(NodeId)
            .collect())
    }

    fn document_element(&self) -> Result<NodeId, DomError> {
        Ok(NodeId(self.root))
    }

    fn body(&self) -> Result<NodeId, DomError> {
        self.query(None, "body")?.ok_or(DomError::MissingElement("body"))
    }

    fn kind(&self, node: &NodeId) -> NodeKind {
        match self.nodes.borrow()[node.0].data {
            Data::Element { .. } => NodeKind::Element,
            Data::Text(_) => NodeKind::Text,
        }
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        match &self.nodes.borrow()[node.0].data {
            Data::Element { tag, .. } => Some(tag.clone()),
            Data::Text(_) => None,
        }
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.iter().copied().map(NodeId).collect()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent.map(NodeId)
    }

    fn text_data(&self, node: &NodeId) -> Option<String> {
        match &self.nodes.borrow()[node.0].data {
            Data::Text(text) => Some(text.clone()),
            Data::Element { .. } => None,
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        match &self.nodes.borrow()[node.0].data {
            Data::Element { attrs, .. } => attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.clone()),
            Data::Text(_) => None,
        }
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        match &mut self.nodes.borrow_mut()[node.0].data {
            Data::Element { attrs, .. } => {
                match attrs.iter_mut().find(|(n, _)| n == name) {
                    Some(attr) => attr.1 = value.to_string(),
                    None => attrs.push((name.to_string(), value.to_string())),
                }
                Ok(())
            }
            Data::Text(_) => Err(DomError::Operation {
                op: "setAttribute",
                message: "node is not an element".to_string(),
            }),
        }
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        Ok(NodeId(self.push(
            Data::Element {
                tag: tag.to_lowercase(),
                attrs: Vec::new(),
            },
            None,
        )))
    }

    fn create_text(&self, data: &str) -> NodeId {
        NodeId(self.push(Data::Text(data.to_string()), None))
    }

    fn insert_before(&self, parent: &NodeId, node: &NodeId, reference: Option<&NodeId>) -> Result<(), DomError> {
        self.detach(node.0);
        let mut nodes = self.nodes.borrow_mut();
        let position = match reference {
            Some(reference) => nodes[parent.0]
                .children
                .iter()
                .position(|&c| c == reference.0)
                .ok_or_else(|| DomError::Operation {
                    op: "insertBefore",
                    message: "reference is not a child of parent".to_string(),
                })?,
            None => nodes[parent.0].children.len(),
        };
        nodes[parent.0].children.insert(position, node.0);
        nodes[node.0].parent = Some(parent.0);
        Ok(())
    }

    fn remove(&self, node: &NodeId) -> Result<(), DomError> {
        self.detach(node.0);
        Ok(())
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) -> Result<(), DomError> {
        let wrapped = format!("<fragment>{}</fragment>", html);
        let doc = roxmltree::Document::parse(&wrapped).map_err(|e| DomError::Operation {
            op: "innerHTML",
            message: e.to_string(),
        })?;
        for child in self.children(node) {
            self.detach(child.0);
        }
        for child in doc.root_element().children().filter(|c| c.is_element() || c.is_text()) {
            let id = self.import(child, Some(node.0));
            self.nodes.borrow_mut()[node.0].children.push(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<html><body>
        <nav class="nav-links"><a href="#home">Home</a><a href="#services">Services</a></nav>
        <section id="services"><div class="card featured"><h3 class="title">One</h3></div></section>
    </body></html>"##;

    #[test]
    fn selects_by_class_attribute_and_combinator() {
        let dom = MemoryDom::parse(PAGE);
        let link = dom.select(r##".nav-links a[href="#services"]"##);
        assert_eq!(dom.text_content(&link), "Services");
        let title = dom.select("#services > .card.featured > h3");
        assert_eq!(dom.text_content(&title), "One");
        assert_eq!(dom.query(None, "section > h3").unwrap(), None);
    }

    #[test]
    fn rejects_unsupported_selectors() {
        let dom = MemoryDom::parse(PAGE);
        assert!(matches!(dom.query(None, "a:hover"), Err(DomError::Selector { .. })));
    }

    #[test]
    fn inner_html_replaces_children() {
        let dom = MemoryDom::parse(PAGE);
        let nav = dom.select(".nav-links");
        dom.set_inner_html(&nav, "<li>a &amp; b</li><li>c</li>").unwrap();
        assert_eq!(dom.markup_of(nav), r#"<nav class="nav-links"><li>a &amp; b</li><li>c</li></nav>"#);
    }
}
