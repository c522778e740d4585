pub use self::error::HexError;
use crate::chars::{hex_digit_value, hexdigit};

mod error;

const HEX_LUT: &[u8; 16] = b"0123456789ABCDEF";

/// Converts `input` to uppercase hexadecimal, two characters per byte.
pub fn to_hex<B: AsRef<[u8]>>(input: B) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for &b in input {
        output.push(HEX_LUT[(b >> 4) as usize] as char);
        output.push(HEX_LUT[(b & 15) as usize] as char);
    }
    output
}

/// Decodes one byte from its most and least significant hex characters.
pub fn hex_from_nibbles(msb: char, lsb: char) -> Option<u8> {
    let hi = hex_digit_value(msb)?;
    let lo = hex_digit_value(lsb)?;
    Some((hi << 4) | lo)
}

/// Converts hexadecimal text back to bytes.
///
/// An odd-length input is read as if it had a leading `'0'`, so `"F"`
/// decodes to `[0x0F]`. The output is `ceil(input.len() / 2)` bytes long.
pub fn from_hex(input: &str) -> Result<Vec<u8>, HexError> {
    let bytes = input.as_bytes();
    let mut output = Vec::with_capacity((bytes.len() + 1) / 2);

    let mut pos = 0;
    if bytes.len() % 2 == 1 {
        output.push(decode_pair(input, None, 0)?);
        pos = 1;
    }
    while pos < bytes.len() {
        output.push(decode_pair(input, Some(pos), pos + 1)?);
        pos += 2;
    }
    Ok(output)
}

// `msb` of `None` stands for the implicit leading zero of odd-length input.
fn decode_pair(input: &str, msb: Option<usize>, lsb: usize) -> Result<u8, HexError> {
    let hi = match msb {
        Some(index) => digit_at(input, index)?,
        None => 0,
    };
    let lo = digit_at(input, lsb)?;
    Ok((hi << 4) | lo)
}

fn digit_at(input: &str, index: usize) -> Result<u8, HexError> {
    let c = input.as_bytes()[index] as char;
    hex_digit_value(c).ok_or_else(|| {
        // Report the whole character, not a stray byte of a multi-byte one.
        let found = input
            .char_indices()
            .take_while(|&(start, _)| start <= index)
            .last()
            .map_or(c, |(_, ch)| ch);
        tracing::debug!(index, ?found, "rejecting non-hex input");
        HexError::InvalidHexDigit { index, found }
    })
}

/// Renders `value` in hexadecimal without leading zeros. Zero renders as `"0"`.
pub fn utohexstr(value: u64, lower_case: bool) -> String {
    let mut buffer = [0u8; 16];
    let mut start = buffer.len();
    let mut value = value;
    if value == 0 {
        start -= 1;
        buffer[start] = b'0';
    }
    while value != 0 {
        start -= 1;
        buffer[start] = hexdigit((value & 15) as u8, lower_case) as u8;
        value >>= 4;
    }
    buffer[start..].iter().map(|&b| b as char).collect()
}
