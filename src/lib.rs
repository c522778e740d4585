//! Small ASCII text and byte helpers.
//!
//! Character classification, a hexadecimal codec, delimiter-based
//! tokenizing and separator joining, plus a few printers built on them.
//! Everything works on single-byte (ASCII) semantics and ignores locale.
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! str-extras = "0.1"
//! ```
//!
//! # Examples
//!
//! ```
//! use str_extras::{from_hex, join, split_string, to_hex, utohexstr};
//!
//! assert_eq!(to_hex(b"\x01\xfe"), "01FE");
//! assert_eq!(from_hex("1fe").unwrap(), vec![0x01, 0xfe]);
//! assert_eq!(utohexstr(48879, true), "beef");
//!
//! let mut fields = Vec::new();
//! split_string("a, b,,c", &mut fields, ", ");
//! assert_eq!(join(&fields, "|"), "a|b|c");
//! ```

pub mod chars;
pub mod hex;
pub mod join;
pub mod printer;
pub mod text;
pub mod tokenize;

pub use crate::chars::{
    hex_digit_value, hexdigit, is_alnum, is_alpha, is_ascii, is_ascii_str, is_digit,
    is_hex_digit, is_print, to_lower, to_upper,
};
pub use crate::hex::{from_hex, hex_from_nibbles, to_hex, utohexstr, HexError};
pub use crate::join::{join, join_items, join_sized, JoinItem};
pub use crate::printer::{
    print_escaped_string, print_html_escaped, print_lower_case, PrintError, PrintResult,
    TextPrinter,
};
pub use crate::text::{bool_to_str, get_ordinal_suffix, str_in_str_no_case};
pub use crate::tokenize::{
    get_token, get_token_ws, split_string, tokens, Tokens, DEFAULT_DELIMITERS,
};
