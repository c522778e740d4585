//! ASCII character classification.
//!
//! Every predicate here looks at the code point only and ignores locale, so
//! results are the same on every platform. Anything outside the ASCII range
//! is simply "not a letter", "not a digit" and so on.

pub fn is_digit(c: char) -> bool {
    ('0'..='9').contains(&c)
}

pub fn is_alpha(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z')
}

pub fn is_alnum(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Checks whether `c` is ASCII (code point at most 127).
pub fn is_ascii(c: char) -> bool {
    (c as u32) <= 127
}

/// Checks whether every character of `s` is ASCII.
pub fn is_ascii_str(s: &str) -> bool {
    s.chars().all(is_ascii)
}

/// Checks whether `c` is printable, i.e. in `0x20..=0x7E`.
///
/// Unlike C's `isprint` this does not depend on the current locale.
pub fn is_print(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E)
}

/// Returns the lowercase letter for an uppercase ASCII letter, `c` otherwise.
pub fn to_lower(c: char) -> char {
    if ('A'..='Z').contains(&c) {
        return ((c as u8) - b'A' + b'a') as char;
    }
    c
}

/// Returns the uppercase letter for a lowercase ASCII letter, `c` otherwise.
pub fn to_upper(c: char) -> char {
    if ('a'..='z').contains(&c) {
        return ((c as u8) - b'a' + b'A') as char;
    }
    c
}

/// Returns the hexadecimal character for `value`, which must be below 16.
pub fn hexdigit(value: u8, lower_case: bool) -> char {
    debug_assert!(value < 16, "hex digit out of range: {}", value);
    let hex_char = if lower_case { b'a' } else { b'A' };
    if value < 10 {
        (b'0' + value) as char
    } else {
        (hex_char + value - 10) as char
    }
}

/// Interprets `c` as a hexadecimal digit of either case.
///
/// Returns `None` when `c` is not one of `0-9`, `a-f` or `A-F`.
pub fn hex_digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

pub fn is_hex_digit(c: char) -> bool {
    hex_digit_value(c).is_some()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classes() {
        assert!(is_digit('0') && is_digit('9'));
        assert!(!is_digit('a') && !is_digit('/') && !is_digit(':'));

        assert!(is_alpha('a') && is_alpha('Z'));
        assert!(!is_alpha('_') && !is_alpha('@') && !is_alpha('['));
        assert!(!is_alpha('é'));

        assert!(is_alnum('q') && is_alnum('7'));
        assert!(!is_alnum('-'));
    }

    #[test]
    fn test_ascii() {
        assert!(is_ascii('\0'));
        assert!(is_ascii('\x7f'));
        assert!(!is_ascii('\u{80}'));
        assert!(!is_ascii('ü'));

        assert!(is_ascii_str(""));
        assert!(is_ascii_str("plain text\n"));
        assert!(!is_ascii_str("naïve"));
    }

    #[test]
    fn test_print() {
        assert!(is_print(' '));
        assert!(is_print('~'));
        assert!(!is_print('\x1f'));
        assert!(!is_print('\x7f'));
        assert!(!is_print('\t'));
        assert!(!is_print('é'));
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_lower('Z'), 'z');
        assert_eq!(to_lower('['), '[');
        assert_eq!(to_lower('a'), 'a');
        assert_eq!(to_lower('Ä'), 'Ä');

        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('z'), 'Z');
        assert_eq!(to_upper('{'), '{');
        assert_eq!(to_upper('5'), '5');
    }

    #[test]
    fn test_hexdigit() {
        assert_eq!(hexdigit(0, false), '0');
        assert_eq!(hexdigit(9, true), '9');
        assert_eq!(hexdigit(10, false), 'A');
        assert_eq!(hexdigit(15, true), 'f');

        for v in 0..16 {
            assert_eq!(hex_digit_value(hexdigit(v, false)), Some(v));
            assert_eq!(hex_digit_value(hexdigit(v, true)), Some(v));
        }
    }

    #[test]
    fn test_hex_digit_value() {
        assert_eq!(hex_digit_value('b'), Some(11));
        assert_eq!(hex_digit_value('B'), Some(11));
        assert_eq!(hex_digit_value('g'), None);
        assert_eq!(hex_digit_value(' '), None);
        assert!(is_hex_digit('e'));
        assert!(!is_hex_digit('x'));
    }
}
