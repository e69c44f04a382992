//! Sequential identifier assignment

use crate::core::model::{AnchorRecord, IdentifierMap};

/// Minimum width of the ordinal; wider ordinals are never truncated
pub const ORDINAL_WIDTH: usize = 4;

/// `{prefix}{ordinal}` with the ordinal zero-padded to `ORDINAL_WIDTH`
pub fn sequential_id(prefix: &str, ordinal: usize) -> String {
    format!("{prefix}{ordinal:0width$}", width = ORDINAL_WIDTH)
}

/// Assign identifiers by 1-based position in document order
pub fn renumber(records: &[AnchorRecord], prefix: &str) -> IdentifierMap {
    let mut map = IdentifierMap::new();
    for (index, record) in records.iter().enumerate() {
        map.insert(record.original.as_str(), sequential_id(prefix, index + 1));
    }
    map
}
