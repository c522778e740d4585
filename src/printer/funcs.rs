use crate::chars::{hexdigit, is_print, to_lower};
use std::fmt;

/// Writes `v` with `\` doubled and every byte that is not printable, or is
/// a `"`, replaced by `\` and two hex digits.
pub(super) fn escape_bytes(
    wr: &mut dyn fmt::Write,
    v: &str,
    lower_case_hex: bool,
) -> Result<(), fmt::Error> {
    let mut start = 0;
    for (i, byte) in v.bytes().enumerate() {
        let plain = byte != b'\\' && byte != b'"' && is_print(byte as char);
        if plain {
            continue;
        }
        // Runs between escapes are printable ASCII, so `start..i` is on
        // character boundaries.
        if start < i {
            wr.write_str(&v[start..i])?;
        }
        wr.write_char('\\')?;
        if byte == b'\\' {
            wr.write_char('\\')?;
        } else {
            wr.write_char(hexdigit(byte >> 4, lower_case_hex))?;
            wr.write_char(hexdigit(byte & 0x0F, lower_case_hex))?;
        }
        start = i + 1;
    }
    if start != v.len() {
        wr.write_str(&v[start..])?;
    }
    Ok(())
}

pub(super) fn escape_html(wr: &mut dyn fmt::Write, v: &str) -> Result<(), fmt::Error> {
    let mut start = 0;
    for (i, byte) in v.bytes().enumerate() {
        let escaped = match byte {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&apos;",
            _ => continue,
        };
        if start < i {
            wr.write_str(&v[start..i])?;
        }
        wr.write_str(escaped)?;
        start = i + 1;
    }
    if start != v.len() {
        wr.write_str(&v[start..])?;
    }
    Ok(())
}

pub(super) fn lower_case(wr: &mut dyn fmt::Write, v: &str) -> Result<(), fmt::Error> {
    for c in v.chars() {
        wr.write_char(to_lower(c))?;
    }
    Ok(())
}
