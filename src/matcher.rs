use crate::error::ParseError;
use crate::logging::Loggable;
use crate::parser::Parser;
use crate::token::TokenResult;
use crate::util;

/// Match one atomic parser at `start`.
///
/// Leading ASCII spaces are skipped, then the pattern must match beginning
/// exactly at the skipped-to cursor. A match further right is a failure, not
/// a skip. Mandatory failures report `start`, the cursor before skipping.
pub(crate) fn match_atomic(p: &Parser, text: &str, start: usize) -> Result<TokenResult, ParseError> {
    p.log_inputs(text, start);
    let skipped = util::skip_spaces(text, start);

    let found = if text.is_char_boundary(skipped) {
        p.regex().find_at(text, skipped)
    } else {
        None
    };
    let found = found.filter(|m| m.start() == skipped);

    let (end, token) = match found {
        Some(m) => (m.end(), m.as_str()),
        None if p.is_optional() => (skipped, ""),
        None => {
            let e = ParseError::new(start, p.name());
            p.log_failure(text, start, &e);
            return Err(e);
        }
    };

    let res = if p.is_discard() {
        TokenResult::empty(end)
    } else {
        TokenResult::new(end, vec![token.to_string()])
    };
    p.log_success(text, start, &res);
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn atom(pattern: &str, optional: bool, discard: bool) -> Parser {
        Parser::with_flags(pattern, optional, discard).unwrap()
    }

    #[test]
    fn test_anchoring() {
        let bar = atom("bar", false, false);
        // "bar" exists further right but the cursor sits on "foo"
        assert_eq!(match_atomic(&bar, "foo bar", 0), Err(ParseError::new(0, "bar")));
        assert_eq!(match_atomic(&bar, "foo bar", 3).unwrap(), (7, &["bar"][..]));
        assert_eq!(match_atomic(&bar, "foo bar", 4).unwrap(), (7, &["bar"][..]));
    }

    #[test]
    fn test_space_only_skip() {
        let bar = atom("bar", false, false);
        assert_eq!(match_atomic(&bar, "  bar", 0).unwrap(), (5, &["bar"][..]));
        assert_eq!(match_atomic(&bar, "\tbar", 0).unwrap_err().position(), 0);
        assert_eq!(match_atomic(&bar, "\nbar", 0).unwrap_err().position(), 0);
        // failure reports the pre-skip cursor
        assert_eq!(match_atomic(&bar, "x   baz", 1).unwrap_err().position(), 1);
    }

    #[test]
    fn test_policies() {
        let opt = atom("xyz", true, false);
        assert_eq!(match_atomic(&opt, "abc", 0).unwrap(), (0, &[""][..]));
        // zero-width success still lands after the skipped spaces
        assert_eq!(match_atomic(&opt, "  abc", 0).unwrap(), (2, &[""][..]));

        let opt_discard = atom("xyz", true, true);
        let empty: &[&str] = &[];
        assert_eq!(match_atomic(&opt_discard, "abc", 0).unwrap(), (0, empty));

        let discard = atom("abc", false, true);
        assert_eq!(match_atomic(&discard, "abc", 0).unwrap(), (3, empty));
        assert!(match_atomic(&discard, "xbc", 0).is_err());
    }

    #[test]
    fn test_regex_dialect() {
        let num = atom("[0-9]+", false, false);
        assert_eq!(match_atomic(&num, "x = 1234;", 3).unwrap(), (8, &["1234"][..]));

        // empty match at the cursor is still a match
        let star = atom("a*", false, false);
        assert_eq!(match_atomic(&star, "bbb", 0).unwrap(), (0, &[""][..]));

        // the haystack keeps its context: ^ only matches at the true start
        let caret = atom("^foo", false, false);
        assert!(match_atomic(&caret, "foo", 0).is_ok());
        assert!(match_atomic(&caret, "xfoo", 1).is_err());
    }

    #[test]
    fn test_cursor_out_of_range() {
        let foo = atom("foo", false, false);
        assert_eq!(match_atomic(&foo, "foo", 9).unwrap_err().position(), 9);
        // 1 is inside the two-byte 'é'
        assert_eq!(match_atomic(&foo, "éfoo", 1).unwrap_err().position(), 1);

        let opt = atom("foo", true, false);
        assert_eq!(match_atomic(&opt, "foo", 9).unwrap(), (9, &[""][..]));

        // end of text is a valid cursor
        let end = atom("$", false, false);
        assert_eq!(match_atomic(&end, "foo", 3).unwrap(), (3, &[""][..]));
    }
}
