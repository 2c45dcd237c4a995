//! HTML serializer - turn a headless document into markup.
//!
//! This module handles:
//! - Depth-indented element emission
//! - Escaping of text and attribute values
//! - Void elements and the document envelope (doctype/head/body)

use crate::document::Document;
use crate::error::Result;
use crate::types::{NodeId, NodeType};
use crate::utils::escape_html;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "link", "br", "hr", "meta", "input"];

/// Serializer configuration.
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    pub indent: String,
    pub doctype: bool,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            doctype: true,
        }
    }
}

/// Document serializer.
pub struct HtmlSerializer {
    config: SerializerConfig,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serialize the whole document, envelope included.
    pub fn serialize(&self, doc: &Document) -> Result<String> {
        let mut output = String::with_capacity(4096);

        if self.config.doctype {
            output.push_str("<!DOCTYPE html>\n");
        }
        self.serialize_node(doc, doc.document_element(), 0, &mut output)?;

        Ok(output)
    }

    /// Serialize a detached subtree without the document envelope.
    pub fn serialize_subtree(&self, doc: &Document, root: NodeId) -> Result<String> {
        let mut output = String::with_capacity(1024);
        self.serialize_node(doc, root, 0, &mut output)?;
        Ok(output)
    }

    fn serialize_node(
        &self,
        doc: &Document,
        node_id: NodeId,
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        let node = doc.get(node_id)?;
        let indent = self.config.indent.repeat(depth);

        match node.node_type {
            NodeType::Element => {
                output.push_str(&indent);
                output.push('<');
                output.push_str(&node.node_name);

                if !node.classes.is_empty() {
                    output.push_str(&format!(
                        " class=\"{}\"",
                        escape_html(&node.classes.join(" "))
                    ));
                }

                // HashMap order is unstable; sort for reproducible output.
                let mut attr_names: Vec<&String> = node.attributes.keys().collect();
                attr_names.sort();
                for name in attr_names {
                    let value = &node.attributes[name];
                    output.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
                }

                if !node.styles.is_empty() {
                    let declarations: Vec<String> = node
                        .styles
                        .iter()
                        .map(|(p, v)| format!("{}: {}", p, v))
                        .collect();
                    output.push_str(&format!(
                        " style=\"{}\"",
                        escape_html(&declarations.join("; "))
                    ));
                }

                if VOID_ELEMENTS.contains(&node.node_name.as_str()) {
                    output.push_str(">\n");
                    return Ok(());
                }

                output.push_str(">\n");

                // The document title lives on `Document`, not in the tree.
                if node.node_name == "head" && !doc.title.is_empty() {
                    output.push_str(&self.config.indent.repeat(depth + 1));
                    output.push_str(&format!("<title>{}</title>\n", escape_html(&doc.title)));
                }

                for &child_id in &node.children_ids {
                    self.serialize_node(doc, child_id, depth + 1, output)?;
                }

                output.push_str(&indent);
                output.push_str("</");
                output.push_str(&node.node_name);
                output.push_str(">\n");
            }
            NodeType::Text => {
                let text = node.node_value.trim();
                if !text.is_empty() {
                    output.push_str(&indent);
                    output.push_str(&escape_html(text));
                    output.push('\n');
                }
            }
            NodeType::Document => {
                for &child_id in &node.children_ids {
                    self.serialize_node(doc, child_id, depth, output)?;
                }
            }
        }

        Ok(())
    }
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}
