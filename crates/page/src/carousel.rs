//! Carousel collaborator seam.
//!
//! The slider's navigation/animation behavior belongs to an external
//! widget. The page builder only hands it a container element and an
//! options object; nothing here reads the widget's state back.

use crate::error::Result;
use dom::{Document, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-breakpoint layout settings, keyed by minimum viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointSettings {
    pub slides_per_view: u32,
    pub space_between: u32,
}

/// Mount options handed to the widget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Infinite looping.
    pub loop_slides: bool,
    /// The single "next" navigation control.
    pub next_el: NodeId,
    pub breakpoints: BTreeMap<u32, BreakpointSettings>,
}

/// The external carousel widget.
pub trait CarouselWidget {
    fn mount(
        &mut self,
        doc: &mut Document,
        container: NodeId,
        options: CarouselOptions,
    ) -> Result<()>;
}

/// Default collaborator. Stands in for the real widget by stamping the
/// container with the mount state and the options it received, so the
/// initialization contract stays observable in the output.
#[derive(Debug, Default)]
pub struct SwiperWidget;

impl SwiperWidget {
    pub fn new() -> Self {
        Self
    }
}

impl CarouselWidget for SwiperWidget {
    fn mount(
        &mut self,
        doc: &mut Document,
        container: NodeId,
        options: CarouselOptions,
    ) -> Result<()> {
        doc.set_attribute(container, "data-carousel", "mounted")?;
        let encoded = serde_json::to_string(&options)?;
        doc.set_attribute(container, "data-carousel-options", &encoded)?;
        tracing::debug!("Mounted carousel on node {}", container);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swiper_widget_stamps_container() {
        let mut doc = Document::new();
        let container = doc.create_element("div");
        let arrow = doc.create_element("button");

        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(
            320,
            BreakpointSettings {
                slides_per_view: 1,
                space_between: 20,
            },
        );
        breakpoints.insert(
            541,
            BreakpointSettings {
                slides_per_view: 2,
                space_between: 40,
            },
        );

        let mut widget = SwiperWidget::new();
        widget
            .mount(
                &mut doc,
                container,
                CarouselOptions {
                    loop_slides: true,
                    next_el: arrow,
                    breakpoints,
                },
            )
            .unwrap();

        let node = doc.get(container).unwrap();
        assert_eq!(node.attr("data-carousel"), Some("mounted"));

        let encoded = node.attr("data-carousel-options").unwrap();
        assert!(encoded.contains("\"loopSlides\":true"));
        assert!(encoded.contains("\"320\""));
        assert!(encoded.contains("\"541\""));
        assert!(encoded.contains("\"spaceBetween\":40"));
    }
}
