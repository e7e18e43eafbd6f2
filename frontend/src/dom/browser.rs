use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use super::{Dom, NodeKind};
use crate::error::DomError;

/// `Dom` over the live page.
#[derive(Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { document })
    }

    fn scope_element(scope: Option<&Node>) -> Option<&Element> {
        scope.and_then(|node| node.dyn_ref::<Element>())
    }
}

impl Dom for BrowserDom {
    type Node = Node;

    fn query(&self, scope: Option<&Node>, selector: &str) -> Result<Option<Node>, DomError> {
        let found = match Self::scope_element(scope) {
            Some(element) => element.query_selector(selector),
            None => self.document.query_selector(selector),
        }
        .map_err(|e| DomError::selector(selector, e))?;
        Ok(found.map(Node::from))
    }

    fn query_all(&self, scope: Option<&Node>, selector: &str) -> Result<Vec<Node>, DomError> {
        let list = match Self::scope_element(scope) {
            Some(element) => element.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        }
        .map_err(|e| DomError::selector(selector, e))?;
        Ok((0..list.length()).filter_map(|i| list.get(i)).collect())
    }

    fn document_element(&self) -> Result<Node, DomError> {
        self.document
            .document_element()
            .map(Node::from)
            .ok_or(DomError::MissingElement("root"))
    }

    fn body(&self) -> Result<Node, DomError> {
        self.document
            .body()
            .map(Node::from)
            .ok_or(DomError::MissingElement("body"))
    }

    fn kind(&self, node: &Node) -> NodeKind {
        match node.node_type() {
            Node::ELEMENT_NODE => NodeKind::Element,
            Node::TEXT_NODE => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn tag_name(&self, node: &Node) -> Option<String> {
        node.dyn_ref::<Element>()
            .map(|element| element.tag_name().to_lowercase())
    }

    fn children(&self, node: &Node) -> Vec<Node> {
        let list = node.child_nodes();
        (0..list.length()).filter_map(|i| list.get(i)).collect()
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn text_data(&self, node: &Node) -> Option<String> {
        match node.node_type() {
            Node::TEXT_NODE => node.node_value(),
            _ => None,
        }
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()
            .and_then(|element| element.get_attribute(name))
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> Result<(), DomError> {
        let element = node
            .dyn_ref::<Element>()
            .ok_or_else(|| not_an_element("setAttribute"))?;
        element
            .set_attribute(name, value)
            .map_err(|e| DomError::js("setAttribute", e))
    }

    fn create_element(&self, tag: &str) -> Result<Node, DomError> {
        self.document
            .create_element(tag)
            .map(Node::from)
            .map_err(|e| DomError::js("createElement", e))
    }

    fn create_text(&self, data: &str) -> Node {
        self.document.create_text_node(data).into()
    }

    fn insert_before(&self, parent: &Node, node: &Node, reference: Option<&Node>) -> Result<(), DomError> {
        parent
            .insert_before(node, reference)
            .map(|_| ())
            .map_err(|e| DomError::js("insertBefore", e))
    }

    fn remove(&self, node: &Node) -> Result<(), DomError> {
        match node.parent_node() {
            Some(parent) => parent
                .remove_child(node)
                .map(|_| ())
                .map_err(|e| DomError::js("removeChild", e)),
            None => Ok(()),
        }
    }

    fn set_inner_html(&self, node: &Node, html: &str) -> Result<(), DomError> {
        let element = node
            .dyn_ref::<Element>()
            .ok_or_else(|| not_an_element("innerHTML"))?;
        element.set_inner_html(html);
        Ok(())
    }
}

fn not_an_element(op: &'static str) -> DomError {
    DomError::Operation {
        op,
        message: "node is not an element".to_string(),
    }
}
