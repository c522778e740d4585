//! Delimiter-based tokenizing.
//!
//! The delimiter argument is a set of characters, not a separator string:
//! `","` and `",;"` both split on single characters. Runs of delimiters
//! collapse, so no empty token is ever produced between two of them.

/// Space, tab, newline, vertical tab, form feed and carriage return.
pub const DEFAULT_DELIMITERS: &str = " \t\n\u{0B}\u{0C}\r";

/// Extracts one token from `source`.
///
/// Leading characters found in `delimiters` are skipped, then the token runs
/// up to the next delimiter. Returns the token and everything after it,
/// trailing delimiters included. When no token is left both halves are empty.
pub fn get_token<'a>(source: &'a str, delimiters: &str) -> (&'a str, &'a str) {
    let is_delim = |c: char| delimiters.contains(c);

    let start = match source.find(|c: char| !is_delim(c)) {
        Some(start) => start,
        None => return ("", ""),
    };
    let rest = &source[start..];
    let end = rest.find(is_delim).unwrap_or_else(|| rest.len());
    (&rest[..end], &rest[end..])
}

/// `get_token` over [`DEFAULT_DELIMITERS`].
pub fn get_token_ws(source: &str) -> (&str, &str) {
    get_token(source, DEFAULT_DELIMITERS)
}

/// Splits `source` on `delimiters`, appending the fragments to `out`.
pub fn split_string<'a>(source: &'a str, out: &mut Vec<&'a str>, delimiters: &str) {
    let before = out.len();
    out.extend(tokens(source, delimiters));
    tracing::trace!(fragments = out.len() - before, "split string");
}

/// Returns an iterator over the tokens of `source`, in order.
pub fn tokens<'a, 'd>(source: &'a str, delimiters: &'d str) -> Tokens<'a, 'd> {
    Tokens {
        rest: source,
        delimiters,
    }
}

/// Lazy form of [`split_string`], created by [`tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'a, 'd> {
    rest: &'a str,
    delimiters: &'d str,
}

impl<'a, 'd> Tokens<'a, 'd> {
    /// The part of the input not consumed yet.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl<'a, 'd> Iterator for Tokens<'a, 'd> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (token, rest) = get_token(self.rest, self.delimiters);
        self.rest = rest;
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}
