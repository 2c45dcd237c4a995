//! Utility functions for document processing.

use crate::document::Document;
use crate::error::Result;
use crate::types::NodeId;

/// Escape text for HTML output.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Get all text content from a node and its children.
pub fn text_content(doc: &Document, node_id: NodeId) -> Result<String> {
    let mut text = String::new();

    doc.traverse_df(node_id, |node| {
        if node.is_text() {
            text.push_str(&node.node_value);
        }
        Ok(())
    })?;

    Ok(text.trim().to_string())
}
