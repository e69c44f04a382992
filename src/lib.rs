//! anchorfix - Sequential anchor identifiers for CMS-exported HTML
//!
//! Rewrites `<h1>`..`<h6 id>` and `<a name>` identifiers into
//! `{prefix}0001`, `{prefix}0002`, ... in document order and rewrites every
//! same-document link (`href="#..."`) to match. External links are left
//! byte-identical.
//!
//! ```
//! let html = r##"<h1 id="intro">A</h1><a href="#intro">top</a>"##;
//! let out = anchorfix::process_html(html, "a").unwrap();
//! assert_eq!(out, r##"<h1 id="a0001">A</h1><a href="#a0001">top</a>"##);
//! ```

pub mod anchors;
pub mod core;
pub mod markup;

pub use crate::anchors::api::{
    process_html, process_html_file, rewrite_html, rewrite_html_file, RewriteOptions,
    RewriteReport, DEFAULT_PREFIX,
};
pub use crate::core::error::{DuplicateIdError, Error, Result};
