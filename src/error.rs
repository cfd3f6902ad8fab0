use std::{error::Error as StdError, fmt};

/// A mandatory parser failed to match exactly at the (space-skipped) cursor.
///
/// The first failure aborts the whole parse: there is no partial result and no
/// retry. `position` is the cursor the failing parser was *asked* to start at,
/// before any leading spaces were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    position: usize,
    expected: String,
}

impl ParseError {
    #[inline]
    pub fn new(position: usize, expected: impl Into<String>) -> Self {
        Self {
            position,
            expected: expected.into(),
        }
    }

    /// byte offset into the parsed text
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// name of the atomic parser that failed
    #[inline]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// 1-based (line, column) of the failure within `text`.
    ///
    /// Columns count chars not bytes. Positions past the end of `text` are
    /// reported at the end of the text.
    pub fn line_col(&self, text: &str) -> (usize, usize) {
        let mut pos = self.position.min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        let before = &text[..pos];
        let line = before.matches('\n').count() + 1;
        let col = before.rsplit('\n').next().unwrap_or_default().chars().count() + 1;
        (line, col)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "no match for '{expected}' at position {position}",
            expected = self.expected,
            position = self.position
        )
    }
}

impl StdError for ParseError {}

/// The pattern text handed to a constructor was not a valid regular expression.
#[derive(Debug, Clone)]
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            source,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.source)
    }
}

impl StdError for PatternError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

/// Either failure a grammar can produce, for callers that build and run
/// parsers in the same function.
#[derive(Debug, Clone)]
pub enum Error {
    Pattern(PatternError),
    Parse(ParseError),
}

impl From<PatternError> for Error {
    #[inline]
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "Pattern:{e}")?,
            Self::Parse(e) => write!(f, "Parse:{e}")?,
        };
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_line_col() {
        let text = "let a = 1\nlet b = ?\n";
        let e = ParseError::new(18, "integer");
        assert_eq!(e.line_col(text), (2, 9));
        assert_eq!(ParseError::new(0, "x").line_col(text), (1, 1));
        assert_eq!(ParseError::new(999, "x").line_col(text), (3, 1));

        // 'é' is two bytes, position 2 lands inside it
        assert_eq!(ParseError::new(2, "x").line_col("aé"), (1, 2));
    }

    #[test]
    fn test_display() {
        let e = ParseError::new(4, "identifier");
        assert_eq!(e.to_string(), "no match for 'identifier' at position 4");

        let pe = match regex::Regex::new("(") {
            Err(re) => PatternError::new("(", re),
            Ok(_) => unreachable!(),
        };
        assert!(pe.to_string().starts_with("invalid pattern '('"));
        assert!(pe.source().is_some());

        let err: Error = e.clone().into();
        assert!(err.to_string().starts_with("Parse:"));
        assert!(matches!(err, Error::Parse(ref p) if *p == e));
    }
}
