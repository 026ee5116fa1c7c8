//! Single-pass integer extraction from one line of noisy text.
//!
//! A line is scanned left to right for runs of ASCII digits. The character
//! immediately after a run decides what happens to it:
//! - `$` reverses the run's digits (as text) before it is read as a number,
//! - `^` drops the run,
//! - anything else, or the end of the line, keeps the run as written.
//!
//! The scan never backtracks: after each run the cursor jumps past the
//! delimiter it inspected, so a `$` or `^` that is not glued to a run is
//! just noise.
//!
//! ```
//! use parse_mystery::parse_line;
//!
//! assert_eq!(parse_line("12$34^"), vec![21]);
//! assert_eq!(parse_line("800!)176^b006$"), vec![800, 600]);
//! ```

/// What the character following a digit run asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `$`: read the run backwards.
    Reverse,
    /// `^`: forget the run.
    Discard,
    /// Any other character, or end of line.
    Plain,
}

impl Delimiter {
    /// Classify the character right after a run; `None` means end of line.
    pub fn classify(ch: Option<char>) -> Self {
        match ch {
            Some('$') => Delimiter::Reverse,
            Some('^') => Delimiter::Discard,
            _ => Delimiter::Plain,
        }
    }
}

/// Reverse the characters of `s`.
///
/// ```
/// use parse_mystery::extract::reverse;
///
/// assert_eq!(reverse("hello"), "olleh");
/// assert_eq!(reverse("!!hola&&"), "&&aloh!!");
/// ```
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Parse the integers out of `line`, honoring the `$` and `^` delimiters.
///
/// Never fails: text without digits yields an empty vector, and a run too
/// long for `u64` saturates to `u64::MAX`.
pub fn parse_line(line: &str) -> Vec<u64> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let mut result = Vec::new();
    let mut search = 0;

    while search < len {
        // Skip noise up to the first digit.
        let mut begin = search;
        while begin < len && !chars[begin].is_ascii_digit() {
            begin += 1;
        }
        if begin >= len {
            break;
        }

        let mut end = begin + 1;
        while end < len && chars[end].is_ascii_digit() {
            end += 1;
        }

        let run: String = chars[begin..end].iter().collect();
        match Delimiter::classify(chars.get(end).copied()) {
            Delimiter::Reverse => {
                // Reverse the text, not the number: "100$" must read as 1.
                let value = to_number(&reverse(&run));
                log::trace!("run '{run}' at {begin}..{end} reversed -> {value}");
                result.push(value);
            }
            Delimiter::Discard => {
                log::trace!("run '{run}' at {begin}..{end} discarded");
            }
            Delimiter::Plain => {
                let value = to_number(&run);
                log::trace!("run '{run}' at {begin}..{end} kept -> {value}");
                result.push(value);
            }
        }

        search = end + 1;
    }

    result
}

/// Read an all-digit string as a number, saturating on overflow.
fn to_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit() {
        assert_eq!(parse_line("1"), vec![1]);
    }

    #[test]
    fn single_digit_reversed_is_unchanged() {
        assert_eq!(parse_line("1$"), vec![1]);
    }

    #[test]
    fn dollar_reverses_run() {
        assert_eq!(parse_line("12$"), vec![21]);
    }

    #[test]
    fn caret_discards_run() {
        assert_eq!(parse_line("123^"), vec![]);
    }

    #[test]
    fn reverse_then_discard() {
        assert_eq!(parse_line("12$34^"), vec![21]);
    }

    #[test]
    fn doubled_caret_after_letters() {
        assert_eq!(parse_line("f35^^"), vec![]);
    }

    #[test]
    fn cursor_skips_past_inspected_delimiter() {
        // The '$' right after "123^" is stepped over, so it never applies to the first run.
        assert_eq!(parse_line("123^$123$^"), vec![321]);
    }

    #[test]
    fn mixed_noise_line() {
        assert_eq!(
            parse_line("800!)176^b006$(46$*#63Z*16$*06$z5^"),
            vec![800, 600, 64, 63, 61, 60]
        );
    }

    #[test]
    fn reversal_happens_before_parsing() {
        // "010$": reversing the text gives 10; reversing the parsed 10 would give 1.
        assert_eq!(parse_line("100$"), vec![1]);
        assert_eq!(parse_line("010$"), vec![10]);
        assert_eq!(parse_line("0120$"), vec![210]);
    }

    #[test]
    fn leading_zeros_vanish_on_plain_runs() {
        assert_eq!(parse_line("007"), vec![7]);
    }

    #[test]
    fn empty_line_yields_nothing() {
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn text_without_digits_yields_nothing() {
        assert!(parse_line("no digits here $ ^ !\n").is_empty());
    }

    #[test]
    fn trailing_newline_is_plain_delimiter() {
        assert_eq!(parse_line("42\n"), vec![42]);
        assert_eq!(parse_line("42$\n"), vec![24]);
    }

    #[test]
    fn detached_markers_have_no_effect() {
        assert_eq!(parse_line("$12 ^34 $"), vec![12, 34]);
    }

    #[test]
    fn without_markers_every_run_is_collected() {
        assert_eq!(parse_line("a1b22c333 4444"), vec![1, 22, 333, 4444]);
    }

    #[test]
    fn non_ascii_digits_are_noise() {
        assert_eq!(parse_line("٣5é6"), vec![5, 6]);
    }

    #[test]
    fn overflowing_run_saturates() {
        assert_eq!(parse_line("99999999999999999999999"), vec![u64::MAX]);
    }

    #[test]
    fn classify_delimiters() {
        assert_eq!(Delimiter::classify(Some('$')), Delimiter::Reverse);
        assert_eq!(Delimiter::classify(Some('^')), Delimiter::Discard);
        assert_eq!(Delimiter::classify(Some('x')), Delimiter::Plain);
        assert_eq!(Delimiter::classify(None), Delimiter::Plain);
    }

    #[test]
    fn reverse_strings() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("!!hola&&"), "&&aloh!!");
    }
}
