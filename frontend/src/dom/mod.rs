//! The slice of the DOM the localization engine works against.
//!
//! The engine only ever walks subtrees, swaps text nodes and inserts small
//! wrapper elements, so the trait stays narrow. `BrowserDom` is the real
//! thing; tests run against the in-memory tree in `memory`.

pub mod browser;
#[cfg(test)]
pub mod memory;

pub use browser::BrowserDom;

use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    Other,
}

pub trait Dom {
    type Node: Clone + PartialEq;

    /// First match in document order. `scope` limits the search to the
    /// descendants of that element, otherwise the whole document is searched.
    fn query(&self, scope: Option<&Self::Node>, selector: &str)
        -> Result<Option<Self::Node>, DomError>;

    fn query_all(&self, scope: Option<&Self::Node>, selector: &str)
        -> Result<Vec<Self::Node>, DomError>;

    fn document_element(&self) -> Result<Self::Node, DomError>;

    fn body(&self) -> Result<Self::Node, DomError>;

    fn kind(&self, node: &Self::Node) -> NodeKind;

    /// Lowercase tag name for elements.
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Character data of a text node.
    fn text_data(&self, node: &Self::Node) -> Option<String>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

    fn create_text(&self, data: &str) -> Self::Node;

    /// Inserts `node` under `parent` before `reference`, or appends it when
    /// `reference` is `None`.
    fn insert_before(
        &self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    ) -> Result<(), DomError>;

    fn remove(&self, node: &Self::Node) -> Result<(), DomError>;

    fn set_inner_html(&self, node: &Self::Node, html: &str) -> Result<(), DomError>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        self.attribute(node, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenated text of every descendant text node.
    fn text_content(&self, node: &Self::Node) -> String {
        let mut out = String::new();
        collect_text(self, node, &mut out);
        out
    }

    /// Every text node in the subtree, in document order.
    fn text_nodes(&self, node: &Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack = vec![node.clone()];
        while let Some(current) = stack.pop() {
            match self.kind(&current) {
                NodeKind::Text => out.push(current),
                NodeKind::Element => {
                    let mut children = self.children(&current);
                    children.reverse();
                    stack.extend(children);
                }
                NodeKind::Other => {}
            }
        }
        out
    }
}

fn collect_text<D: Dom + ?Sized>(dom: &D, node: &D::Node, out: &mut String) {
    match dom.kind(node) {
        NodeKind::Text => {
            if let Some(data) = dom.text_data(node) {
                out.push_str(&data);
            }
        }
        NodeKind::Element => {
            for child in dom.children(node) {
                collect_text(dom, &child, out);
            }
        }
        NodeKind::Other => {}
    }
}
