//! File reading with encoding detection
//!
//! Candidate encodings are tried in a fixed order and the first one that
//! decodes without error wins. There is no lossy fallback.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::error::{Error, Result};

/// Encodings accepted for input files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    ShiftJis,
    Cp932,
}

/// Decode priority for input files
pub const CANDIDATE_ENCODINGS: [SourceEncoding; 3] = [
    SourceEncoding::Utf8,
    SourceEncoding::ShiftJis,
    SourceEncoding::Cp932,
];

impl SourceEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::ShiftJis => "shift_jis",
            SourceEncoding::Cp932 => "cp932",
        }
    }

    /// The decoder backing this candidate.
    ///
    /// encoding_rs implements Shift_JIS as the WHATWG decoder, which already
    /// covers the CP932 (windows-31j) extensions.
    fn encoding(&self) -> &'static Encoding {
        match self {
            SourceEncoding::Utf8 => UTF_8,
            SourceEncoding::ShiftJis | SourceEncoding::Cp932 => SHIFT_JIS,
        }
    }

    /// Strict decode: `None` if any byte sequence is malformed
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        self.encoding()
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
    }
}

/// Text decoded from a file, with the encoding that succeeded
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub content: String,
    pub encoding: SourceEncoding,
}

/// Decode bytes with the first candidate encoding that succeeds
pub fn decode_bytes(bytes: &[u8]) -> Option<DecodedText> {
    CANDIDATE_ENCODINGS.iter().find_map(|encoding| {
        encoding.decode(bytes).map(|content| DecodedText {
            content,
            encoding: *encoding,
        })
    })
}

/// Read a file and decode it with encoding auto-detection
pub fn read_text_file(path: &Path) -> Result<DecodedText> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;

    match decode_bytes(&bytes) {
        Some(decoded) => {
            debug!(
                path = %path.display(),
                encoding = decoded.encoding.label(),
                bytes = bytes.len(),
                "decoded input file"
            );
            Ok(decoded)
        }
        None => Err(Error::Decode {
            path: path.to_path_buf(),
            tried: CANDIDATE_ENCODINGS
                .iter()
                .map(|e| e.label())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}
