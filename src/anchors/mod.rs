//! Anchors module - Renumber HTML anchors and fix same-document links
//!
//! Anchors are `<h1>`..`<h6>` elements carrying `id` and `<a>` elements
//! carrying `name`. The rewrite runs as: collect (read-only, duplicate
//! check) -> renumber -> attribute pass -> link pass.

pub mod api;
pub mod collect;
pub mod fragment;
pub mod renumber;
pub mod rewrite;
