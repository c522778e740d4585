pub use self::error::PrintError;
use self::funcs::{escape_bytes, escape_html, lower_case};
use std::fmt;

mod error;
mod funcs;

pub type PrintResult = Result<(), PrintError>;

/// Writes transformed text into any `fmt::Write` sink.
pub struct TextPrinter<'a> {
    writer: &'a mut dyn fmt::Write,
    lower_case_hex: bool,
}

impl<'a> TextPrinter<'a> {
    pub fn new(writer: &'a mut dyn fmt::Write) -> TextPrinter {
        TextPrinter {
            writer,
            lower_case_hex: false,
        }
    }

    /// Use `a-f` instead of `A-F` in `\XX` escapes.
    pub fn lower_case_hex(&mut self, lower_case_hex: bool) -> &mut Self {
        self.lower_case_hex = lower_case_hex;
        self
    }

    pub fn is_lower_case_hex(&self) -> bool {
        self.lower_case_hex
    }

    /// Prints `s`, escaping backslashes, double quotes and unprintable bytes.
    ///
    /// A backslash becomes `\\`; any other escaped byte becomes `\` followed
    /// by its two hex digits, so `"a\"b"` prints as `a\22b`.
    pub fn escaped(&mut self, s: &str) -> PrintResult {
        escape_bytes(self.writer, s, self.lower_case_hex)?;
        Ok(())
    }

    /// Prints `s` with the HTML special characters `&<>"'` replaced by entities.
    pub fn html_escaped(&mut self, s: &str) -> PrintResult {
        escape_html(self.writer, s)?;
        Ok(())
    }

    /// Prints `s` with ASCII uppercase letters lowered.
    pub fn lower_case(&mut self, s: &str) -> PrintResult {
        lower_case(self.writer, s)?;
        Ok(())
    }
}

pub fn print_escaped_string(s: &str, out: &mut dyn fmt::Write) -> PrintResult {
    TextPrinter::new(out).escaped(s)
}

pub fn print_html_escaped(s: &str, out: &mut dyn fmt::Write) -> PrintResult {
    TextPrinter::new(out).html_escaped(s)
}

pub fn print_lower_case(s: &str, out: &mut dyn fmt::Write) -> PrintResult {
    TextPrinter::new(out).lower_case(s)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&mut dyn fmt::Write) -> PrintResult) -> String {
        let mut output = String::new();
        f(&mut output).unwrap();
        output
    }

    #[test]
    fn test_escaped() {
        assert_eq!(render(|w| print_escaped_string("plain text", w)), "plain text");
        assert_eq!(render(|w| print_escaped_string(r"a\b", w)), r"a\\b");
        assert_eq!(render(|w| print_escaped_string("say \"hi\"", w)), r"say \22hi\22");
        assert_eq!(render(|w| print_escaped_string("tab\there\n", w)), r"tab\09here\0A");
        assert_eq!(render(|w| print_escaped_string("\x7f", w)), r"\7F");
        assert_eq!(render(|w| print_escaped_string("", w)), "");
    }

    #[test]
    fn test_escaped_non_ascii_bytes() {
        assert_eq!(render(|w| print_escaped_string("é!", w)), r"\C3\A9!");
    }

    #[test]
    fn test_escaped_lower_case_hex() {
        let mut output = String::new();
        {
            let mut printer = TextPrinter::new(&mut output);
            printer.lower_case_hex(true);
            assert!(printer.is_lower_case_hex());
            printer.escaped("\x1b[0m").unwrap();
        }
        assert_eq!(output, r"\1b[0m");
    }

    #[test]
    fn test_html_escaped() {
        assert_eq!(
            render(|w| print_html_escaped(r#"<a href="x">Tom & 'Jerry'</a>"#, w)),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &apos;Jerry&apos;&lt;/a&gt;"
        );
        assert_eq!(render(|w| print_html_escaped("déjà vu", w)), "déjà vu");
    }

    #[test]
    fn test_lower_case() {
        assert_eq!(render(|w| print_lower_case("MiXeD Case 42", w)), "mixed case 42");
        assert_eq!(render(|w| print_lower_case("ÀB", w)), "Àb");
    }

    struct Broken;

    impl fmt::Write for Broken {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_writer_failure() {
        let err = print_lower_case("x", &mut Broken).unwrap_err();
        assert!(matches!(err, PrintError::FmtError(_)));
        assert!(print_html_escaped("", &mut Broken).is_ok());
    }
}
