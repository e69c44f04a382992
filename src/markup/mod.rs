//! Markup module - Parser adapter around lol_html
//!
//! Exposes the capabilities the rewrite engine needs:
//! - visiting elements in document order with their source line
//! - attribute get/set through `MarkupElement`
//! - serialization back to text

pub mod document;
pub mod element;

pub use document::Document;
pub use element::{decode_entities, MarkupElement};
