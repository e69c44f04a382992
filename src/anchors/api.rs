//! Anchor API - text and file entry points for the rewrite

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::anchors::collect::collect_unique_anchors;
use crate::anchors::fragment::FragmentResolver;
use crate::anchors::renumber::renumber;
use crate::anchors::rewrite::{rewrite_anchor_attributes, rewrite_links};
use crate::core::error::{Error, Result};
use crate::core::file_reader::read_text_file;
use crate::core::model::Assignment;
use crate::markup::Document;

/// Prefix used when the caller does not supply one
pub const DEFAULT_PREFIX: &str = "a";

/// Characters allowed in a prefix: anything that survives as a bare fragment
static PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.:-]*$").expect("Invalid PREFIX_RE regex"));

/// Configuration for one rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Text placed in front of every generated ordinal
    pub prefix: String,

    /// Fall back to percent-decoded, punctuation-free matching when a link
    /// fragment has no exact match
    pub normalize_fragments: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            normalize_fragments: true,
        }
    }
}

impl RewriteOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Default::default()
        }
    }

    pub fn exact_fragments(mut self) -> Self {
        self.normalize_fragments = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if PREFIX_RE.is_match(&self.prefix) {
            Ok(())
        } else {
            Err(Error::InvalidPrefix(self.prefix.clone()))
        }
    }
}

/// Rewritten HTML plus what changed
#[derive(Debug, Clone, Default)]
pub struct RewriteReport {
    pub html: String,

    /// One entry per anchor, in document order
    pub assignments: Vec<Assignment>,

    pub links_rewritten: usize,

    /// Same-document fragments that matched no anchor, in document order
    pub dangling_links: Vec<String>,
}

/// Rewrite anchors and same-document links in `content`.
///
/// Duplicates are detected before the first mutation, so on error nothing
/// has been rewritten.
pub fn rewrite_html(content: &str, options: &RewriteOptions) -> Result<RewriteReport> {
    options.validate()?;
    rewrite_validated(content, options)
}

/// Read, decode and rewrite a file.
///
/// Options are checked before the file is opened.
pub fn rewrite_html_file(path: &Path, options: &RewriteOptions) -> Result<RewriteReport> {
    options.validate()?;
    let decoded = read_text_file(path)?;
    rewrite_validated(&decoded.content, options)
}

fn rewrite_validated(content: &str, options: &RewriteOptions) -> Result<RewriteReport> {
    let mut document = Document::parse(content);
    let records = collect_unique_anchors(&document)?;
    let map = renumber(&records, &options.prefix);

    rewrite_anchor_attributes(&mut document, &map)?;

    let resolver = if options.normalize_fragments {
        FragmentResolver::normalizing(&map)
    } else {
        FragmentResolver::exact(&map)
    };
    let links = rewrite_links(&mut document, &resolver)?;

    let assignments = records
        .iter()
        .zip(map.iter())
        .map(|(record, (_, assigned))| Assignment::new(record, assigned))
        .collect();

    Ok(RewriteReport {
        html: document.into_string(),
        assignments,
        links_rewritten: links.rewritten,
        dangling_links: links.dangling,
    })
}

/// Rewrite anchors in an HTML string with the given prefix
pub fn process_html(html_content: &str, prefix: &str) -> Result<String> {
    rewrite_html(html_content, &RewriteOptions::with_prefix(prefix)).map(|r| r.html)
}

/// Rewrite anchors in an HTML file (UTF-8, Shift-JIS or CP932)
pub fn process_html_file(file_path: impl AsRef<Path>, prefix: &str) -> Result<String> {
    rewrite_html_file(file_path.as_ref(), &RewriteOptions::with_prefix(prefix)).map(|r| r.html)
}
