//! Arena-based document storage.
//!
//! One `Vec<DomNode>` holds every node; navigation uses u32 indices, never
//! pointers. Detached subtrees are ordinary nodes whose root has no
//! parent; appending re-parents them. Nodes are never removed from the
//! arena, only detached.
//!
//! ```text
//! Document: Vec<DomNode>
//!           [#document][html][head][body][...]
//!            ↑ 4-byte index, not 8-byte pointer
//! ```

use crate::error::{DomError, Result};
use crate::events::ClickBinding;
use crate::types::{DomNode, NodeId, NodeType};
use ahash::AHashMap;

/// A headless document.
///
/// Created with the fixed `#document > html > (head, body)` skeleton;
/// everything else is built by callers and appended under `body` (or
/// `head` for metadata like favicon links).
#[derive(Debug)]
pub struct Document {
    /// All nodes stored sequentially (cache-friendly).
    nodes: Vec<DomNode>,

    /// `id` attribute → NodeId lookup.
    id_map: AHashMap<String, NodeId>,

    /// Click bindings registered against element nodes.
    pub(crate) bindings: Vec<ClickBinding>,

    /// Document title, rendered into `<head><title>`.
    pub title: String,

    document_id: NodeId,
    html_id: NodeId,
    head_id: NodeId,
    body_id: NodeId,
}

impl Document {
    /// Create a document with the `html > (head, body)` skeleton in place.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::with_capacity(256),
            id_map: AHashMap::new(),
            bindings: Vec::new(),
            title: String::new(),
            document_id: 0,
            html_id: 0,
            head_id: 0,
            body_id: 0,
        };

        doc.document_id = doc.push_node(NodeType::Document, "#document");
        doc.html_id = doc.push_node(NodeType::Element, "html");
        doc.head_id = doc.push_node(NodeType::Element, "head");
        doc.body_id = doc.push_node(NodeType::Element, "body");

        // Skeleton wiring cannot fail: all four ids were just created.
        let _ = doc.append_child(doc.document_id, doc.html_id);
        let _ = doc.append_child(doc.html_id, doc.head_id);
        let _ = doc.append_child(doc.html_id, doc.body_id);

        doc
    }

    fn push_node(&mut self, node_type: NodeType, name: &str) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(DomNode::new(node_id, node_type, name.to_string()));
        node_id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(NodeType::Element, tag)
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        let id = self.push_node(NodeType::Text, "#text");
        self.nodes[id as usize].node_value = text.to_string();
        id
    }

    /// Get node by ID (immutable).
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable).
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    pub fn document_id(&self) -> NodeId {
        self.document_id
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> NodeId {
        self.html_id
    }

    pub fn head_id(&self) -> NodeId {
        self.head_id
    }

    pub fn body_id(&self) -> NodeId {
        self.body_id
    }

    /// Total number of nodes, including detached ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterator over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &DomNode> {
        self.nodes.iter()
    }

    /// Iterator over all node IDs.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| i as NodeId)
    }

    /// Append `child` as the last child of `parent`, re-parenting if the
    /// child is already attached elsewhere. Child order is append order.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.get(parent)?.is_element() && self.get(parent)?.node_type != NodeType::Document {
            return Err(DomError::NotAnElement(parent));
        }
        self.get(child)?;

        if let Some(old_parent) = self.nodes[child as usize].parent_id {
            let siblings = &mut self.nodes[old_parent as usize].children_ids;
            siblings.retain(|id| *id != child);
        }

        self.nodes[child as usize].parent_id = Some(parent);
        self.nodes[parent as usize].children_ids.push(child);
        Ok(())
    }

    /// Set an attribute. Setting `id` keeps the id lookup map current.
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let node = self.get_mut(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        node.attributes.insert(name.to_string(), value.to_string());
        if name == "id" {
            self.id_map.insert(value.to_string(), node_id);
        }
        Ok(())
    }

    pub fn add_class(&mut self, node_id: NodeId, class: &str) -> Result<()> {
        let node = self.get_mut(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
        Ok(())
    }

    pub fn remove_class(&mut self, node_id: NodeId, class: &str) -> Result<()> {
        let node = self.get_mut(node_id)?;
        node.classes.retain(|c| c != class);
        Ok(())
    }

    /// Toggle a class; returns whether the class is now present.
    pub fn toggle_class(&mut self, node_id: NodeId, class: &str) -> Result<bool> {
        let node = self.get_mut(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        if node.has_class(class) {
            node.classes.retain(|c| c != class);
            Ok(false)
        } else {
            node.classes.push(class.to_string());
            Ok(true)
        }
    }

    /// Set an inline style declaration. An empty value removes the
    /// declaration entirely (the `style.prop = ''` behavior).
    pub fn set_style(&mut self, node_id: NodeId, property: &str, value: &str) -> Result<()> {
        let node = self.get_mut(node_id)?;
        if !node.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        node.styles.retain(|(p, _)| p != property);
        if !value.is_empty() {
            node.styles.push((property.to_string(), value.to_string()));
        }
        Ok(())
    }

    /// Set a CSS custom property on the document element.
    pub fn set_custom_property(&mut self, name: &str, value: &str) -> Result<()> {
        let html_id = self.html_id;
        self.set_style(html_id, name, value)
    }

    /// Replace an element's children with a single text node.
    pub fn set_text_content(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        if !self.get(node_id)?.is_element() {
            return Err(DomError::NotAnElement(node_id));
        }
        let old_children: Vec<NodeId> = self.nodes[node_id as usize]
            .children_ids
            .iter()
            .copied()
            .collect();
        for child in old_children {
            self.nodes[child as usize].parent_id = None;
        }
        self.nodes[node_id as usize].children_ids.clear();

        let text_id = self.create_text(text);
        self.append_child(node_id, text_id)
    }

    /// Get children of a node.
    pub fn children(&self, node_id: NodeId) -> Result<Vec<&DomNode>> {
        let node = self.get(node_id)?;
        node.children_ids
            .iter()
            .map(|&child_id| self.get(child_id))
            .collect()
    }

    /// Get parent of a node.
    pub fn parent(&self, node_id: NodeId) -> Result<Option<&DomNode>> {
        let node = self.get(node_id)?;
        match node.parent_id {
            Some(parent_id) => Ok(Some(self.get(parent_id)?)),
            None => Ok(None),
        }
    }

    /// Traverse a subtree depth-first (iterative, no recursion).
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }

    /// Find nodes matching predicate.
    pub fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, node)| {
                if predicate(node) {
                    Some(idx as NodeId)
                } else {
                    None
                }
            })
            .collect()
    }

    /// Find first node matching predicate.
    pub fn find_one<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&DomNode) -> bool,
    {
        self.nodes.iter().enumerate().find_map(|(idx, node)| {
            if predicate(node) {
                Some(idx as NodeId)
            } else {
                None
            }
        })
    }

    /// Find all elements by tag name.
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.node_name.eq_ignore_ascii_case(tag))
    }

    /// Find element by ID attribute.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_map.get(id).copied()
    }

    /// Find all elements carrying a class.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find(|node| node.is_element() && node.has_class(class))
    }

    /// Minimal selector lookup: `#id`, `.class`, or a bare tag name.
    /// Returns the first match in arena order.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        match selector.as_bytes().first() {
            Some(b'#') => self.find_by_id(&selector[1..]),
            Some(b'.') => {
                let class = &selector[1..];
                self.find_one(|node| node.is_element() && node.has_class(class))
            }
            Some(_) => {
                self.find_one(|node| node.is_element() && node.node_name.eq_ignore_ascii_case(selector))
            }
            None => None,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
