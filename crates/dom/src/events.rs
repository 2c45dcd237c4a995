//! Click bindings for the headless document.
//!
//! Design: type-safe actions with synchronous dispatch.
//! No dynamic dispatch overhead - use enums, not trait objects.

use crate::document::Document;
use crate::error::Result;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// What a click on a bound element does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClickAction {
    /// Toggle a class on each listed node. All pairs flip together, so
    /// repeated clicks keep the group in lockstep.
    ToggleClasses { pairs: Vec<(NodeId, String)> },
}

/// A registered click handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickBinding {
    pub target: NodeId,
    pub action: ClickAction,
}

impl Document {
    /// Register a click binding against an element.
    pub fn bind_click(&mut self, target: NodeId, action: ClickAction) -> Result<()> {
        self.get(target)?;
        self.bindings.push(ClickBinding { target, action });
        Ok(())
    }

    /// Dispatch a click to every binding targeting `node_id`.
    /// Returns whether any binding handled it.
    pub fn click(&mut self, node_id: NodeId) -> Result<bool> {
        self.get(node_id)?;

        // Bindings are cloned out first; actions mutate the arena.
        let actions: Vec<ClickAction> = self
            .bindings
            .iter()
            .filter(|b| b.target == node_id)
            .map(|b| b.action.clone())
            .collect();

        if actions.is_empty() {
            return Ok(false);
        }

        for action in actions {
            match action {
                ClickAction::ToggleClasses { pairs } => {
                    for (target, class) in pairs {
                        self.toggle_class(target, &class)?;
                    }
                }
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_in_lockstep() {
        let mut doc = Document::new();
        let button = doc.create_element("button");
        let wrapper = doc.create_element("div");

        doc.bind_click(
            button,
            ClickAction::ToggleClasses {
                pairs: vec![
                    (button, "menu-button-active".to_string()),
                    (wrapper, "header-active".to_string()),
                ],
            },
        )
        .unwrap();

        assert!(doc.click(button).unwrap());
        assert!(doc.get(button).unwrap().has_class("menu-button-active"));
        assert!(doc.get(wrapper).unwrap().has_class("header-active"));

        assert!(doc.click(button).unwrap());
        assert!(!doc.get(button).unwrap().has_class("menu-button-active"));
        assert!(!doc.get(wrapper).unwrap().has_class("header-active"));
    }

    #[test]
    fn test_click_parity_over_many_invocations() {
        let mut doc = Document::new();
        let button = doc.create_element("button");
        doc.bind_click(
            button,
            ClickAction::ToggleClasses {
                pairs: vec![(button, "menu-button-active".to_string())],
            },
        )
        .unwrap();

        for k in 1..=7 {
            doc.click(button).unwrap();
            assert_eq!(doc.get(button).unwrap().has_class("menu-button-active"), k % 2 == 1);
        }
    }

    #[test]
    fn test_click_on_unbound_node() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        assert!(!doc.click(div).unwrap());
    }
}
