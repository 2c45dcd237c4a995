//! Element factory.
//!
//! One call creates one detached element with its classes and properties
//! in place. Properties are an enumerated record rather than an arbitrary
//! key/value bag, so a typo is a compile error instead of a silently
//! ignored attribute.

use dom::{Document, NodeId};

/// Recognized element properties, all optional.
///
/// `alt` distinguishes "unset" from "explicitly empty": decorative images
/// carry `alt: Some("")` and render an empty alt attribute.
#[derive(Debug, Clone, Default)]
pub struct ElementProps {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub href: Option<String>,
    pub rel: Option<String>,
    /// Rendered as the `type` attribute.
    pub mime_type: Option<String>,
    /// Text content, rendered as a single child text node.
    pub text: Option<String>,
    pub aria_label: Option<String>,
    pub aria_hidden: Option<bool>,
}

/// Create one detached element with classes added in order and every set
/// property applied. The node is not attached until a caller appends it.
pub fn create_element(
    doc: &mut Document,
    tag: &str,
    classes: &[&str],
    props: ElementProps,
) -> NodeId {
    let node_id = doc.create_element(tag);

    // The node was just created, so none of these mutations can fail.
    for class in classes {
        let _ = doc.add_class(node_id, class);
    }

    if let Some(src) = &props.src {
        let _ = doc.set_attribute(node_id, "src", src);
    }
    if let Some(alt) = &props.alt {
        let _ = doc.set_attribute(node_id, "alt", alt);
    }
    if let Some(href) = &props.href {
        let _ = doc.set_attribute(node_id, "href", href);
    }
    if let Some(rel) = &props.rel {
        let _ = doc.set_attribute(node_id, "rel", rel);
    }
    if let Some(mime_type) = &props.mime_type {
        let _ = doc.set_attribute(node_id, "type", mime_type);
    }
    if let Some(aria_label) = &props.aria_label {
        let _ = doc.set_attribute(node_id, "aria-label", aria_label);
    }
    if let Some(aria_hidden) = props.aria_hidden {
        let _ = doc.set_attribute(node_id, "aria-hidden", if aria_hidden { "true" } else { "false" });
    }
    if let Some(text) = &props.text {
        let _ = doc.set_text_content(node_id, text);
    }

    node_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::utils::text_content;

    #[test]
    fn test_bare_element() {
        let mut doc = Document::new();
        let header = create_element(&mut doc, "header", &[], ElementProps::default());

        let node = doc.get(header).unwrap();
        assert_eq!(node.tag_name(), Some("header"));
        assert!(node.classes.is_empty());
        assert!(node.attributes.is_empty());
        assert!(node.parent_id.is_none());
    }

    #[test]
    fn test_classes_in_order() {
        let mut doc = Document::new();
        let span = create_element(
            &mut doc,
            "span",
            &["genre", "animated", "fadeInRight"],
            ElementProps::default(),
        );

        assert_eq!(
            doc.get(span).unwrap().classes,
            vec!["genre", "animated", "fadeInRight"]
        );
    }

    #[test]
    fn test_props_applied() {
        let mut doc = Document::new();
        let link = create_element(
            &mut doc,
            "a",
            &["menu-link"],
            ElementProps {
                href: Some("#reviews".to_string()),
                text: Some("Reviews".to_string()),
                ..Default::default()
            },
        );

        let node = doc.get(link).unwrap();
        assert_eq!(node.attr("href"), Some("#reviews"));
        assert_eq!(text_content(&doc, link).unwrap(), "Reviews");
    }

    #[test]
    fn test_explicit_empty_alt_is_kept() {
        let mut doc = Document::new();
        let img = create_element(
            &mut doc,
            "img",
            &["star"],
            ElementProps {
                src: Some("img/star-o.svg".to_string()),
                alt: Some(String::new()),
                aria_hidden: Some(true),
                ..Default::default()
            },
        );

        let node = doc.get(img).unwrap();
        assert_eq!(node.attr("alt"), Some(""));
        assert_eq!(node.attr("aria-hidden"), Some("true"));
    }
}
