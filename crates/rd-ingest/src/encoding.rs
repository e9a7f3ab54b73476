//! Encoding fallback decoding
//!
//! Review exports come from spreadsheet tools on different platforms, so
//! the byte encoding varies between EUC-KR/CP949 and UTF-8 (with or
//! without a BOM). Decoding is a pure function over (bytes, label list):
//! the first label that decodes without replacement characters wins.

use encoding_rs::Encoding;
use rd_core::{Result, RevdashError};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Attempt a strict decode under a single encoding label
///
/// `"utf-8-sig"` is not a registered label; it means strict UTF-8 with
/// an optional BOM stripped. Returns `Ok(None)` when the bytes are not
/// valid under the encoding, `Err` when the label itself is unknown.
fn try_decode(bytes: &[u8], label: &str) -> Result<Option<String>> {
    if label.eq_ignore_ascii_case("utf-8-sig") {
        let stripped = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
        return Ok(std::str::from_utf8(stripped).ok().map(str::to_string));
    }

    let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
        return Err(RevdashError::UnknownEncoding(label.to_string()));
    };

    let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
    Ok(if had_errors {
        None
    } else {
        Some(decoded.into_owned())
    })
}

/// Decode file bytes by trying each encoding label in order
///
/// Returns the first clean decode. If no label succeeds, the error names
/// the offending file and every label that was tried.
pub fn decode_with_fallback(bytes: &[u8], labels: &[String], path: &Path) -> Result<String> {
    for label in labels {
        if let Some(decoded) = try_decode(bytes, label)? {
            debug!(path = %path.display(), encoding = %label, "decoded dataset file");
            return Ok(decoded);
        }
    }

    Err(RevdashError::Encoding {
        path: path.to_path_buf(),
        tried: labels.join(", "),
    })
}
