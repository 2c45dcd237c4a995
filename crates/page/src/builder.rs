//! Page builder - the single entry point.
//!
//! Owns the document and the carousel collaborator, and runs the one
//! linear construction pass: root styling, favicon, title, then the
//! header and hero sections when their configuration is present.

use crate::carousel::{CarouselWidget, SwiperWidget};
use crate::config::PageConfig;
use crate::element::{create_element, ElementProps};
use crate::error::{PageError, Result};
use crate::header::build_header;
use crate::hero::build_main;
use dom::Document;

/// Derive a MIME type from a favicon URL's extension.
///
/// Deliberately naive, preserved from the original behavior: `svg` maps
/// to `image/svg-xml` (sic) and every other extension maps to
/// `image/<ext>` verbatim, so `.jpg` yields `image/jpg` rather than the
/// registered `image/jpeg`.
pub fn favicon_mime_type(favicon: &str) -> String {
    let ext = match favicon.rfind('.') {
        Some(index) => &favicon[index + 1..],
        None => favicon,
    };
    if ext == "svg" {
        "image/svg-xml".to_string()
    } else {
        format!("image/{}", ext)
    }
}

/// Builds one page into an owned document.
pub struct PageBuilder {
    doc: Document,
    carousel: Box<dyn CarouselWidget>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::with_carousel(Box::new(SwiperWidget::new()))
    }

    /// Inject a different carousel collaborator.
    pub fn with_carousel(carousel: Box<dyn CarouselWidget>) -> Self {
        Self {
            doc: Document::new(),
            carousel,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Run the construction pass against the element matched by
    /// `selector`. Re-invocation appends the sections again; nothing is
    /// deduplicated.
    pub fn render(&mut self, selector: &str, config: &PageConfig) -> Result<()> {
        let app = self
            .doc
            .query_selector(selector)
            .ok_or_else(|| PageError::RootNotFound(selector.to_string()))?;

        self.doc.add_class(app, "body-app")?;

        self.doc
            .set_style(app, "color", config.font_color.as_deref().unwrap_or(""))?;
        self.doc.set_style(
            app,
            "background-color",
            config.background_color.as_deref().unwrap_or(""),
        )?;

        if let Some(sub_color) = &config.sub_color {
            self.doc.set_custom_property("--sub-color", sub_color)?;
        }

        if let Some(favicon) = &config.favicon {
            let link = create_element(
                &mut self.doc,
                "link",
                &[],
                ElementProps {
                    rel: Some("icon".to_string()),
                    href: Some(favicon.clone()),
                    mime_type: Some(favicon_mime_type(favicon)),
                    ..Default::default()
                },
            );
            let head = self.doc.head_id();
            self.doc.append_child(head, link)?;
            tracing::debug!("Favicon: {}", favicon);
        }

        let background_image = match &config.background {
            Some(background) => format!("url(\"{}\")", background),
            None => String::new(),
        };
        self.doc.set_style(app, "background-image", &background_image)?;

        self.doc.title = config.title.clone();

        if let Some(header) = &config.header {
            let subtree = build_header(&mut self.doc, &config.title, header)?;
            self.doc.append_child(app, subtree)?;
            tracing::debug!("Header section appended");
        }

        if let Some(main) = &config.main {
            let subtree = build_main(&mut self.doc, &config.title, main, self.carousel.as_mut())?;
            self.doc.append_child(app, subtree)?;
            tracing::debug!("Hero section appended");
        }

        Ok(())
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
