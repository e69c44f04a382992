//! Identifier collection and duplicate detection
//!
//! Read-only pass: runs before any attribute is touched, so a duplicate
//! aborts the transform with the document unchanged.

use std::collections::HashMap;

use crate::core::error::{DuplicateIdError, Result};
use crate::core::model::{AnchorKind, AnchorRecord};
use crate::markup::{Document, MarkupElement};

/// Classify an element as an anchor, if it is one
pub fn anchor_kind(el: &dyn MarkupElement) -> Option<AnchorKind> {
    AnchorKind::classify(&el.tag_name(), el.has_attribute("id"), el.has_attribute("name"))
}

/// Collect every anchor element in document order
pub fn collect_anchors(document: &Document) -> Result<Vec<AnchorRecord>> {
    let mut records = Vec::new();

    document.visit(|el, line| {
        let Some(kind) = anchor_kind(el) else {
            return;
        };
        if let Some(original) = el.decoded_attribute(kind.attribute()) {
            records.push(AnchorRecord {
                kind,
                original,
                line,
            });
        }
    })?;

    Ok(records)
}

/// Find the first identifier (by first occurrence) used by more than one anchor.
///
/// All occurrences are gathered before deciding, so the error lists every line.
pub fn find_duplicate(records: &[AnchorRecord]) -> Option<DuplicateIdError> {
    let mut occurrences: HashMap<&str, Vec<usize>> = HashMap::new();
    for record in records {
        occurrences
            .entry(record.original.as_str())
            .or_default()
            .push(record.line);
    }

    records.iter().find_map(|record| {
        let lines = &occurrences[record.original.as_str()];
        (lines.len() > 1).then(|| DuplicateIdError {
            id_value: record.original.clone(),
            line_numbers: lines.clone(),
        })
    })
}

/// Collect anchors and fail if any identifier repeats
pub fn collect_unique_anchors(document: &Document) -> Result<Vec<AnchorRecord>> {
    let records = collect_anchors(document)?;
    match find_duplicate(&records) {
        Some(dup) => Err(dup.into()),
        None => Ok(records),
    }
}
