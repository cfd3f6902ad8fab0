use std::fmt;

use crate::util;

/// The outcome of a successful match: where the cursor ended up, and the
/// tokens collected on the way, left to right.
///
/// An atomic step yields at most one token. A sequence yields the
/// concatenation of its operands' tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenResult {
    end: usize,
    tokens: Vec<String>,
}

impl TokenResult {
    #[inline]
    pub fn new(end: usize, tokens: Vec<String>) -> Self {
        Self { end, tokens }
    }

    /// zero tokens, cursor left at `end`
    #[inline]
    pub(crate) fn empty(end: usize) -> Self {
        Self {
            end,
            tokens: Vec::new(),
        }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn into_parts(self) -> (usize, Vec<String>) {
        (self.end, self.tokens)
    }

    /// continue from `next`: its cursor wins, its tokens go after ours
    pub(crate) fn then(mut self, next: TokenResult) -> Self {
        self.end = next.end;
        self.tokens.extend(next.tokens);
        self
    }
}

impl<S: AsRef<str>> PartialEq<(usize, &[S])> for TokenResult {
    fn eq(&self, (end, tokens): &(usize, &[S])) -> bool {
        self.end == *end
            && self.tokens.len() == tokens.len()
            && self.tokens.iter().zip(tokens.iter()).all(|(a, b)| a == b.as_ref())
    }
}

impl fmt::Display for TokenResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, [", self.end)?;
        for (i, t) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", util::quoted(t))?;
        }
        write!(f, "])")
    }
}
