//! Data model shared by the rewrite passes
//!
//! - `AnchorKind` / `AnchorRecord`: anchor-bearing elements found by the collector
//! - `IdentifierMap`: original identifier to assigned identifier
//! - `Assignment`: one row of the rewrite report

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which rule made an element an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// `<h1>`..`<h6>` carrying `id`
    Heading(u8),
    /// `<a>` carrying `name`
    NamedAnchor,
}

impl AnchorKind {
    /// Classify an element by its tag name and which identifier attribute it carries
    pub fn classify(tag_name: &str, has_id: bool, has_name: bool) -> Option<Self> {
        let tag = tag_name.to_ascii_lowercase();
        match tag.as_bytes() {
            [b'h', level @ b'1'..=b'6'] if has_id => Some(AnchorKind::Heading(level - b'0')),
            b"a" if has_name => Some(AnchorKind::NamedAnchor),
            _ => None,
        }
    }

    /// The attribute holding the identifier for this kind of anchor
    pub fn attribute(&self) -> &'static str {
        match self {
            AnchorKind::Heading(_) => "id",
            AnchorKind::NamedAnchor => "name",
        }
    }

    pub fn tag_name(&self) -> String {
        match self {
            AnchorKind::Heading(level) => format!("h{}", level),
            AnchorKind::NamedAnchor => "a".to_string(),
        }
    }
}

/// An anchor element as seen by the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRecord {
    pub kind: AnchorKind,

    /// Identifier value before rewriting, character references decoded
    pub original: String,

    /// 1-based source line of the start tag
    pub line: usize,
}

/// Mapping from original identifiers to assigned identifiers.
///
/// Keeps assignment order; lookups go through a hash index.
#[derive(Debug, Clone, Default)]
pub struct IdentifierMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an assignment. Keys are unique once the collector has run;
    /// a repeated key keeps its first assignment.
    pub(crate) fn insert(&mut self, original: impl Into<String>, assigned: impl Into<String>) {
        let original = original.into();
        if self.index.contains_key(&original) {
            return;
        }
        self.index.insert(original.clone(), self.entries.len());
        self.entries.push((original, assigned.into()));
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(original, assigned)` pairs in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, a)| (o.as_str(), a.as_str()))
    }
}

/// One anchor's rewrite, as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub line: usize,
    pub tag: String,
    pub attribute: String,
    pub original: String,
    pub assigned: String,
}

impl Assignment {
    pub fn new(record: &AnchorRecord, assigned: impl Into<String>) -> Self {
        Self {
            line: record.line,
            tag: record.kind.tag_name(),
            attribute: record.kind.attribute().to_string(),
            original: record.original.clone(),
            assigned: assigned.into(),
        }
    }
}
