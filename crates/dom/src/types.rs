//! Core node definitions for the headless document model.
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Navigation by index, never by pointer
//! 3. Use SmallVec for child lists (most nodes have few children)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Node identifier (index into the document arena).
pub type NodeId = u32;

/// Node type, reduced to the kinds this model actually stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Document,
    Element,
    Text,
}

/// A single document node.
///
/// Elements carry a tag name, ordered class list, attributes and inline
/// style declarations. Text nodes carry only their payload in
/// `node_value`. The document node is the arena root and carries nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    pub node_id: NodeId,
    pub node_type: NodeType,

    /// Tag name for elements, `#document` / `#text` otherwise.
    pub node_name: String,
    /// Text payload (text nodes only).
    pub node_value: String,

    /// Class list in insertion order.
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// Inline style declarations in insertion order.
    pub styles: Vec<(String, String)>,

    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>,
}

impl DomNode {
    pub fn new(node_id: NodeId, node_type: NodeType, node_name: String) -> Self {
        Self {
            node_id,
            node_type,
            node_name,
            node_value: String::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            styles: Vec::new(),
            parent_id: None,
            children_ids: SmallVec::new(),
        }
    }

    /// Get tag name for element nodes.
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Get an inline style declaration.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_helpers() {
        let mut node = DomNode::new(0, NodeType::Element, "img".to_string());
        node.attributes.insert("src".to_string(), "a.jpg".to_string());
        node.classes.push("card-img".to_string());

        assert_eq!(node.tag_name(), Some("img"));
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.attr("src"), Some("a.jpg"));
        assert_eq!(node.attr("alt"), None);
        assert!(node.has_class("card-img"));
        assert!(!node.has_class("card"));
    }

    #[test]
    fn test_text_node_has_no_tag() {
        let node = DomNode::new(1, NodeType::Text, "#text".to_string());
        assert_eq!(node.tag_name(), None);
        assert!(node.is_text());
    }
}
