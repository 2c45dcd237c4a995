//! Promotional page constructor.
//!
//! Builds a single movie/show landing page - header, hero section and
//! episode carousel - into a headless document from one typed
//! configuration object, in one synchronous pass.
//!
//! ```text
//! JSON literal → PageConfig → PageBuilder::render → Document → HtmlSerializer
//!                                    ↓
//!                        CarouselWidget (external collaborator)
//! ```
//!
//! Absence means omission: every optional configuration field that is
//! missing suppresses exactly the subtree it would have produced.

pub mod builder;
pub mod carousel;
pub mod config;
pub mod element;
pub mod error;
pub mod header;
pub mod hero;

pub use builder::{favicon_mime_type, PageBuilder};
pub use carousel::{BreakpointSettings, CarouselOptions, CarouselWidget, SwiperWidget};
pub use config::{HeaderConfig, MainConfig, MenuItem, PageConfig, Slide, SocialLink};
pub use element::{create_element, ElementProps};
pub use error::{PageError, Result};
pub use header::build_header;
pub use hero::build_main;
