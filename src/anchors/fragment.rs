//! Same-document fragment detection and resolution

use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use crate::core::model::IdentifierMap;

/// The fragment of a same-document href (`#frag`), or `None` for anything
/// with a path, scheme or query in front of the `#`
pub fn same_document_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Reduce a fragment to a comparison key: percent-decode, then keep only
/// alphanumerics, `-` and `_`.
///
/// CMS exports tend to percent-encode anchor text and drop punctuation in
/// the links pointing at it, so both sides are compared in this form.
pub fn normalize_fragment(fragment: &str) -> String {
    percent_decode_str(fragment)
        .decode_utf8_lossy()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Resolves link fragments against an identifier map
#[derive(Debug)]
pub struct FragmentResolver<'m> {
    map: &'m IdentifierMap,
    /// Normalized key -> assigned id; `None` marks a key shared by several anchors
    normalized: Option<HashMap<String, Option<&'m str>>>,
}

impl<'m> FragmentResolver<'m> {
    /// Exact matches only
    pub fn exact(map: &'m IdentifierMap) -> Self {
        Self {
            map,
            normalized: None,
        }
    }

    /// Exact matches first, then unambiguous normalized matches
    pub fn normalizing(map: &'m IdentifierMap) -> Self {
        let mut normalized: HashMap<String, Option<&'m str>> = HashMap::new();
        for (original, assigned) in map.iter() {
            let key = normalize_fragment(original);
            if key.is_empty() {
                continue;
            }
            normalized
                .entry(key)
                .and_modify(|slot| *slot = None)
                .or_insert(Some(assigned));
        }

        Self {
            map,
            normalized: Some(normalized),
        }
    }

    /// The assigned identifier a fragment refers to, if any.
    ///
    /// An empty fragment (`href="#"`) never resolves.
    pub fn resolve(&self, fragment: &str) -> Option<&'m str> {
        if fragment.is_empty() {
            return None;
        }
        if let Some(assigned) = self.map.get(fragment) {
            return Some(assigned);
        }

        let normalized = self.normalized.as_ref()?;
        let key = normalize_fragment(fragment);
        if key.is_empty() {
            return None;
        }
        normalized.get(&key).copied().flatten()
    }
}
