//! In-memory HTML document
//!
//! The document keeps its source text; every visit or rewrite is one
//! lol_html pass over it. Bytes outside rewritten start tags are emitted
//! verbatim, so fragments stay fragments.

use lol_html::{element, HtmlRewriter, Settings};

use crate::core::error::Result;
use crate::markup::element::MarkupElement;

/// Byte offsets at which each source line starts
#[derive(Debug)]
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line containing the byte at `offset`
    fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    source: String,
}

impl Document {
    pub fn parse(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Serialize the (possibly rewritten) document
    pub fn into_string(self) -> String {
        self.source
    }

    /// Visit every element in document order, read-only.
    ///
    /// The visitor also receives the 1-based line on which the element's start
    /// tag opens.
    pub fn visit<F>(&self, mut visitor: F) -> Result<()>
    where
        F: FnMut(&dyn MarkupElement, usize),
    {
        let lines = LineIndex::new(&self.source);

        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![element!("*", |el| {
                    let line = lines.line_of(el.source_location().bytes().start);
                    visitor(&*el, line);
                    Ok(())
                })],
                ..Settings::new()
            },
            |_: &[u8]| {},
        );

        rewriter.write(self.source.as_bytes())?;
        rewriter.end()?;

        Ok(())
    }

    /// Run `rewrite` on every element in document order and replace the
    /// source with the serialized result.
    ///
    /// On error the document is left unchanged.
    pub fn rewrite<F>(&mut self, mut rewrite: F) -> Result<()>
    where
        F: FnMut(&mut dyn MarkupElement) -> Result<()>,
    {
        let mut output = Vec::with_capacity(self.source.len());

        {
            let mut rewriter = HtmlRewriter::new(
                Settings {
                    element_content_handlers: vec![element!("*", |el| {
                        rewrite(el)?;
                        Ok(())
                    })],
                    ..Settings::new()
                },
                |c: &[u8]| output.extend_from_slice(c),
            );
            rewriter.write(self.source.as_bytes())?;
            rewriter.end()?;
        }

        self.source = String::from_utf8(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_reports_document_order_and_lines() {
        let doc = Document::parse("<div>\n  <h1 id=\"a\">A</h1>\n<p><a name=\"b\">B</a></p>\n</div>");
        let mut seen = Vec::new();
        doc.visit(|el, line| seen.push((el.tag_name(), line))).unwrap();

        assert_eq!(
            seen,
            vec![
                ("div".to_string(), 1),
                ("h1".to_string(), 2),
                ("p".to_string(), 3),
                ("a".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_visit_reports_line_where_tag_opens() {
        let doc = Document::parse("<p>x</p>\n<h2\n id=\"d\">A</h2>\n<h2 id=\"e\">B</h2>\n");
        let mut seen = Vec::new();
        doc.visit(|el, line| {
            if el.tag_name() == "h2" {
                seen.push(line);
            }
        })
        .unwrap();
        assert_eq!(seen, vec![2, 4]);
    }

    #[test]
    fn test_line_index() {
        let lines = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(lines.line_of(0), 1);
        assert_eq!(lines.line_of(2), 1);
        assert_eq!(lines.line_of(3), 2);
        assert_eq!(lines.line_of(6), 3);
        assert_eq!(lines.line_of(7), 4);
        assert_eq!(LineIndex::new("").line_of(0), 1);
    }

    #[test]
    fn test_rewrite_leaves_untouched_bytes_alone() {
        let source = "<p class='x'>keep  <b>me</b></p><h2 id=old>T</h2>";
        let mut doc = Document::parse(source);
        doc.rewrite(|el| {
            if el.tag_name() == "h2" {
                el.set_attribute("id", "new")?;
            }
            Ok(())
        })
        .unwrap();

        let out = doc.into_string();
        assert!(out.starts_with("<p class='x'>keep  <b>me</b></p>"));
        assert!(out.contains("id=\"new\""));
        assert!(!out.contains("old"));
    }

    #[test]
    fn test_fragment_is_not_wrapped() {
        let mut doc = Document::parse("<h2 id=\"t\">T</h2><p>Content</p>");
        doc.rewrite(|_| Ok(())).unwrap();
        assert_eq!(doc.as_str(), "<h2 id=\"t\">T</h2><p>Content</p>");
    }

    #[test]
    fn test_empty_document() {
        let mut doc = Document::parse("");
        let mut count = 0;
        doc.visit(|_, _| count += 1).unwrap();
        doc.rewrite(|_| Ok(())).unwrap();
        assert_eq!(count, 0);
        assert_eq!(doc.into_string(), "");
    }
}
