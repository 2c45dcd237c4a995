//! Headless document model.
//!
//! An arena-backed DOM-like tree that can be built, mutated and queried
//! without a rendering environment, then serialized to HTML.
//!
//! ## Core Design
//!
//! ```text
//! Document (Vec<DomNode>) → builders append subtrees → HtmlSerializer → markup
//!                ↓
//!          NodeId (u32)
//! ```
//!
//! Nodes are addressed by index. Click behavior is modeled as explicit
//! bindings on the document so interactions stay testable headlessly.

pub mod document;
pub mod error;
pub mod events;
pub mod serializer;
pub mod types;
pub mod utils;

pub use document::Document;
pub use error::{DomError, Result};
pub use events::{ClickAction, ClickBinding};
pub use serializer::{HtmlSerializer, SerializerConfig};
pub use types::{DomNode, NodeId, NodeType};
