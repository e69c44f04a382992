//! Attribute and link rewrite passes
//!
//! Both passes read the finished `IdentifierMap` and share no other state.

use crate::anchors::collect::anchor_kind;
use crate::anchors::fragment::{same_document_fragment, FragmentResolver};
use crate::core::error::Result;
use crate::core::model::IdentifierMap;
use crate::markup::{decode_entities, Document, MarkupElement};

/// What the link pass did to a single href
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Not a same-document link (or not a link at all)
    Skipped,
    Rewritten,
    /// Same-document fragment with no matching anchor
    Dangling(String),
}

/// Totals from the link pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub rewritten: usize,
    pub dangling: Vec<String>,
}

/// Overwrite the identifier attribute of one element, if it is an anchor.
///
/// Only the attribute that qualified the element is written.
pub fn rewrite_anchor(el: &mut dyn MarkupElement, map: &IdentifierMap) -> Result<bool> {
    let Some(kind) = anchor_kind(el) else {
        return Ok(false);
    };
    let attribute = kind.attribute();
    let Some(raw) = el.attribute(attribute) else {
        return Ok(false);
    };

    match map.get(&decode_entities(&raw)) {
        Some(assigned) => {
            if assigned != raw {
                el.set_attribute(attribute, assigned)?;
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Rewrite the fragment of one `<a href="#...">`, keeping the `#`
pub fn rewrite_link(
    el: &mut dyn MarkupElement,
    resolver: &FragmentResolver<'_>,
) -> Result<LinkOutcome> {
    if !el.tag_name().eq_ignore_ascii_case("a") {
        return Ok(LinkOutcome::Skipped);
    }
    let Some(raw) = el.attribute("href") else {
        return Ok(LinkOutcome::Skipped);
    };
    let href = decode_entities(&raw);
    let Some(fragment) = same_document_fragment(&href) else {
        return Ok(LinkOutcome::Skipped);
    };
    if fragment.is_empty() {
        return Ok(LinkOutcome::Skipped);
    }

    match resolver.resolve(fragment) {
        Some(assigned) => {
            let rewritten = format!("#{assigned}");
            if rewritten != raw {
                el.set_attribute("href", &rewritten)?;
            }
            Ok(LinkOutcome::Rewritten)
        }
        None => Ok(LinkOutcome::Dangling(fragment.to_string())),
    }
}

/// Attribute pass: returns how many anchors were rewritten
pub fn rewrite_anchor_attributes(document: &mut Document, map: &IdentifierMap) -> Result<usize> {
    let mut count = 0;
    document.rewrite(|el| {
        if rewrite_anchor(el, map)? {
            count += 1;
        }
        Ok(())
    })?;
    Ok(count)
}

/// Link pass over every same-document href
pub fn rewrite_links(
    document: &mut Document,
    resolver: &FragmentResolver<'_>,
) -> Result<LinkSummary> {
    let mut summary = LinkSummary::default();
    document.rewrite(|el| {
        match rewrite_link(el, resolver)? {
            LinkOutcome::Rewritten => summary.rewritten += 1,
            LinkOutcome::Dangling(fragment) => summary.dangling.push(fragment),
            LinkOutcome::Skipped => {}
        }
        Ok(())
    })?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory element for exercising a single rewrite step
    struct FakeElement {
        tag: String,
        attrs: BTreeMap<String, String>,
        writes: usize,
    }

    impl FakeElement {
        fn new(tag: &str, attrs: &[(&str, &str)]) -> Self {
            Self {
                tag: tag.to_string(),
                attrs: attrs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                writes: 0,
            }
        }
    }

    impl MarkupElement for FakeElement {
        fn tag_name(&self) -> String {
            self.tag.clone()
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }

        fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
            self.writes += 1;
            self.attrs.insert(name.to_string(), value.to_string());
            Ok(())
        }
    }

    fn map() -> IdentifierMap {
        let mut map = IdentifierMap::new();
        map.insert("intro", "a0001");
        map.insert("seeAlso", "a0002");
        map
    }

    #[test]
    fn test_anchor_with_id_and_name_rewrites_only_name() {
        let map = map();
        let mut el = FakeElement::new("a", &[("id", "intro"), ("name", "seeAlso")]);
        assert!(rewrite_anchor(&mut el, &map).unwrap());
        assert_eq!(el.attrs["name"], "a0002");
        assert_eq!(el.attrs["id"], "intro");
        assert_eq!(el.writes, 1);
    }

    #[test]
    fn test_heading_with_name_rewrites_only_id() {
        let map = map();
        let mut el = FakeElement::new("h2", &[("id", "seeAlso"), ("name", "intro")]);
        assert!(rewrite_anchor(&mut el, &map).unwrap());
        assert_eq!(el.attrs["id"], "a0002");
        assert_eq!(el.attrs["name"], "intro");
    }

    #[test]
    fn test_non_anchor_is_untouched() {
        let map = map();
        let mut el = FakeElement::new("div", &[("id", "intro")]);
        assert!(!rewrite_anchor(&mut el, &map).unwrap());
        assert_eq!(el.writes, 0);
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn test_link_outcomes() {
        let map = map();
        let resolver = FragmentResolver::exact(&map);

        let mut internal = FakeElement::new("a", &[("href", "#intro")]);
        assert_eq!(
            rewrite_link(&mut internal, &resolver).unwrap(),
            LinkOutcome::Rewritten
        );
        assert_eq!(internal.attrs["href"], "#a0001");

        let mut external = FakeElement::new("a", &[("href", "other.html#intro")]);
        assert_eq!(
            rewrite_link(&mut external, &resolver).unwrap(),
            LinkOutcome::Skipped
        );
        assert_eq!(external.attrs["href"], "other.html#intro");

        let mut dangling = FakeElement::new("a", &[("href", "#doesNotExist")]);
        assert_eq!(
            rewrite_link(&mut dangling, &resolver).unwrap(),
            LinkOutcome::Dangling("doesNotExist".to_string())
        );
        assert_eq!(dangling.writes, 0);

        let mut top = FakeElement::new("a", &[("href", "#")]);
        assert_eq!(rewrite_link(&mut top, &resolver).unwrap(), LinkOutcome::Skipped);

        let mut area = FakeElement::new("area", &[("href", "#intro")]);
        assert_eq!(
            rewrite_link(&mut area, &resolver).unwrap(),
            LinkOutcome::Skipped
        );
    }

    #[test]
    fn test_entity_spellings_resolve_to_one_anchor() {
        let mut map = IdentifierMap::new();
        map.insert("a&b", "a0001");
        let resolver = FragmentResolver::exact(&map);

        let mut heading = FakeElement::new("h2", &[("id", "a&amp;b")]);
        assert!(rewrite_anchor(&mut heading, &map).unwrap());
        assert_eq!(heading.attrs["id"], "a0001");

        for href in ["#a&#38;b", "#a&amp;b", "#a&#x26;b", "&#35;a&amp;b"] {
            let mut link = FakeElement::new("a", &[("href", href)]);
            assert_eq!(
                rewrite_link(&mut link, &resolver).unwrap(),
                LinkOutcome::Rewritten,
                "{href}"
            );
            assert_eq!(link.attrs["href"], "#a0001", "{href}");
        }
    }

    #[test]
    fn test_already_numbered_link_is_not_rewritten() {
        let mut map = IdentifierMap::new();
        map.insert("a0001", "a0001");
        let resolver = FragmentResolver::exact(&map);
        let mut el = FakeElement::new("a", &[("href", "#a0001")]);
        assert_eq!(rewrite_link(&mut el, &resolver).unwrap(), LinkOutcome::Rewritten);
        assert_eq!(el.writes, 0);
    }

    #[test]
    fn test_passes_over_document() {
        let map = map();
        let mut doc = Document::parse(
            "<h1 id=\"intro\">A</h1><a name=\"seeAlso\">B</a><a href=\"#intro\">1</a><a href=\"#nope\">2</a>",
        );
        assert_eq!(rewrite_anchor_attributes(&mut doc, &map).unwrap(), 2);
        let summary = rewrite_links(&mut doc, &FragmentResolver::exact(&map)).unwrap();

        assert_eq!(summary.rewritten, 1);
        assert_eq!(summary.dangling, vec!["nope".to_string()]);
        assert_eq!(
            doc.as_str(),
            "<h1 id=\"a0001\">A</h1><a name=\"a0002\">B</a><a href=\"#a0001\">1</a><a href=\"#nope\">2</a>"
        );
    }
}
