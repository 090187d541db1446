//! Raw buffer hex dump for transport debugging.

use std::fmt::Write;

const BYTES_PER_LINE: usize = 32;

/// Format a buffer as 32-byte rows of lowercase hex plus an ASCII gutter.
///
/// Every byte prints as two hex digits and a space; the gutter prints
/// printable ASCII (32..=126) verbatim and `.` for everything else. Each
/// row ends with a newline; a short final row is not padded.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();

    for chunk in data.chunks(BYTES_PER_LINE) {
        for byte in chunk {
            let _ = write!(out, "{byte:02x} ");
        }
        for &byte in chunk {
            out.push(if (32..=126).contains(&byte) { byte as char } else { '.' });
        }
        out.push('\n');
    }

    out
}
