use std::error::Error;
use std::fmt::{self, Display};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// A character that is not `0-9`, `a-f` or `A-F`, at byte offset `index`.
    InvalidHexDigit { index: usize, found: char },
}

impl Error for HexError {}

impl Display for HexError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HexError::InvalidHexDigit { index, found } => write!(
                formatter,
                "invalid hex digit {:?} at offset {}",
                found, index
            ),
        }
    }
}
