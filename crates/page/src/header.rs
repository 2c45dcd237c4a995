//! Header builder.
//!
//! Produces `header > div.container > (button.menu-button?, div.header >
//! (img.logo?, nav.menu-list?, div.social?))` from the header section of
//! the configuration. Every optional sub-field that is absent simply
//! omits its subtree.

use crate::config::HeaderConfig;
use crate::element::{create_element, ElementProps};
use crate::error::Result;
use dom::{ClickAction, Document, NodeId};

/// Build the detached header subtree. `title` is the page title, used as
/// the logo's alt-text fallback.
pub fn build_header(doc: &mut Document, title: &str, config: &HeaderConfig) -> Result<NodeId> {
    let header = create_element(doc, "header", &[], ElementProps::default());
    let container = create_element(doc, "div", &["container"], ElementProps::default());
    let wrapper = create_element(doc, "div", &["header"], ElementProps::default());

    if let Some(logo) = &config.logo {
        let logo_el = create_element(
            doc,
            "img",
            &["logo"],
            ElementProps {
                src: Some(logo.clone()),
                alt: Some(title.to_string()),
                ..Default::default()
            },
        );
        doc.append_child(wrapper, logo_el)?;
    }

    if let Some(menu) = &config.menu {
        let menu_el = create_element(doc, "nav", &["menu-list"], ElementProps::default());
        doc.append_child(wrapper, menu_el)?;

        for item in menu {
            let link = create_element(
                doc,
                "a",
                &["menu-link"],
                ElementProps {
                    href: Some(item.link.clone()),
                    text: Some(item.title.clone()),
                    ..Default::default()
                },
            );
            doc.append_child(menu_el, link)?;
        }

        // Burger button for the mobile menu; the click flips both class
        // states together, so repeated clicks stay symmetric.
        let burger = create_element(doc, "button", &["menu-button"], ElementProps::default());
        doc.bind_click(
            burger,
            ClickAction::ToggleClasses {
                pairs: vec![
                    (burger, "menu-button-active".to_string()),
                    (wrapper, "header-active".to_string()),
                ],
            },
        )?;
        doc.append_child(container, burger)?;

        tracing::debug!("Header menu: {} links", menu.len());
    }

    if let Some(social) = &config.social {
        let social_wrapper = create_element(doc, "div", &["social"], ElementProps::default());

        for item in social {
            let social_link = create_element(
                doc,
                "a",
                &["social-link"],
                ElementProps {
                    href: Some(item.link.clone()),
                    ..Default::default()
                },
            );
            let icon = create_element(
                doc,
                "img",
                &[],
                ElementProps {
                    src: Some(item.image.clone()),
                    alt: Some(item.title.clone()),
                    ..Default::default()
                },
            );
            doc.append_child(social_link, icon)?;
            doc.append_child(social_wrapper, social_link)?;
        }

        doc.append_child(wrapper, social_wrapper)?;
    }

    doc.append_child(header, container)?;
    doc.append_child(container, wrapper)?;
    Ok(header)
}
