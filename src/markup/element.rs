//! Attribute access on a single element

use html_escape::decode_html_entities;
use lol_html::html_content::Element;
use std::borrow::Cow;

use crate::core::error::Result;

/// The element capabilities the rewrite passes rely on
pub trait MarkupElement {
    /// Lowercase tag name
    fn tag_name(&self) -> String;

    /// Attribute value as written in the source (entities not decoded)
    fn attribute(&self, name: &str) -> Option<String>;

    /// Attribute value with character references decoded
    fn decoded_attribute(&self, name: &str) -> Option<String> {
        self.attribute(name).map(|raw| decode_entities(&raw).into_owned())
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Overwrite an attribute's value
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Decode character references (`&amp;`, `&#38;`, `&#x26;`) in an attribute value
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    decode_html_entities(raw)
}

impl MarkupElement for Element<'_, '_> {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        Element::has_attribute(self, name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        Element::set_attribute(self, name, value)?;
        Ok(())
    }
}
