use std::{fmt, mem, ops::BitAnd, sync::Arc};

use regex::Regex;

use crate::error::{ParseError, PatternError};
use crate::logging::Loggable;
use crate::matcher;
use crate::token::TokenResult;

/// An immutable, cheaply cloned parser.
///
/// Built either from a single regex pattern (an *atomic* parser) or by
/// chaining two parsers with [`Parser::and`] (a *sequence*). Parsers never
/// change after construction, so one instance can be reused for any number of
/// parses and shared between threads.
///
/// ```
/// use rechain::prelude::*;
///
/// let assign = Parser::new("[a-z]+")?
///     .and(&Parser::with_flags("=", false, true)?)
///     .and(&Parser::new("[0-9]+")?);
///
/// let res = assign.parse("total = 42")?;
/// assert_eq!(res.end(), 10);
/// assert_eq!(res.tokens(), ["total", "42"]);
/// # Ok::<(), rechain::Error>(())
/// ```
#[derive(Clone)]
pub struct Parser {
    label: Option<Arc<str>>,
    pattern: Arc<Regex>,
    optional: bool,
    discard: bool,
    rule: Rule,
}

#[derive(Clone)]
enum Rule {
    Atomic,
    Sequence(Arc<Parser>, Arc<Parser>),
}

enum Step<'p> {
    Visit(&'p Parser),
    Finish(&'p Parser),
}

impl Parser {
    /// A mandatory, token-keeping atomic parser.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_flags(pattern, false, false)
    }

    /// An atomic parser with explicit policy.
    ///
    /// `optional`: a failed match becomes a zero-width success yielding `""`.
    /// `discard`: the token is dropped from the result, the cursor still moves.
    pub fn with_flags(pattern: &str, optional: bool, discard: bool) -> Result<Self, PatternError> {
        let pattern = Regex::new(pattern).map_err(|e| PatternError::new(pattern, e))?;
        let pattern = Arc::new(pattern);
        Ok(Self {
            label: None,
            pattern,
            optional,
            discard,
            rule: Rule::Atomic,
        })
    }

    /// Attach a label for logs, [`describe`](Self::describe) and
    /// [`ParseError::expected`]. Never affects matching.
    pub fn named(mut self, name: &str) -> Self {
        self.label = Some(name.into());
        self
    }

    /// Run `self` then `other`, `other` starting where `self` stopped.
    ///
    /// The resulting parser carries `self`'s pattern but `other`'s optional
    /// and discard flags. Neither is consulted when the sequence runs: each
    /// operand applies its own policy.
    pub fn and(&self, other: &Parser) -> Parser {
        Parser {
            label: None,
            pattern: Arc::clone(&self.pattern),
            optional: other.optional,
            discard: other.discard,
            rule: Rule::Sequence(Arc::new(self.clone()), Arc::new(other.clone())),
        }
    }

    /// Parse `text` from its start.
    #[inline]
    pub fn parse(&self, text: &str) -> Result<TokenResult, ParseError> {
        self.parse_at(text, 0)
    }

    /// Parse `text` starting at byte offset `cursor`.
    ///
    /// Atomic leaves run left to right, each from the cursor the previous one
    /// ended on. The first mandatory failure ends the parse.
    pub fn parse_at(&self, text: &str, cursor: usize) -> Result<TokenResult, ParseError> {
        let mut res = TokenResult::empty(cursor);
        let mut pending = vec![Step::Visit(self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Visit(p) => match &p.rule {
                    Rule::Atomic => {
                        let next = matcher::match_atomic(p, text, res.end())?;
                        res = res.then(next);
                    }
                    Rule::Sequence(left, right) => {
                        p.log_sequence("sequence", res.end());
                        pending.push(Step::Finish(p));
                        pending.push(Step::Visit(right));
                        pending.push(Step::Visit(left));
                    }
                },
                Step::Finish(p) => p.log_sequence("sequence done", res.end()),
            }
        }
        Ok(res)
    }

    /// The label if one was given, else the pattern text for an atomic
    /// parser, else `"and"`.
    pub fn name(&self) -> &str {
        match (&self.label, &self.rule) {
            (Some(label), _) => label.as_ref(),
            (None, Rule::Atomic) => self.pattern.as_str(),
            (None, Rule::Sequence(..)) => "and",
        }
    }

    /// For a sequence this is the left-most operand's pattern and plays no
    /// part in matching.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_discard(&self) -> bool {
        self.discard
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.rule, Rule::Atomic)
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.pattern
    }

    /// An indented tree of the parser, one node per line.
    ///
    /// ```text
    /// and [mandatory, keep]
    /// └──[a-z]+ [mandatory, keep] /[a-z]+/
    /// └──= [mandatory, discard] /=/
    /// ```
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(0_usize, self)];
        while let Some((depth, p)) = pending.pop() {
            let indent = match depth {
                0 => String::new(),
                d => "|  ".repeat(d - 1) + "└──",
            };
            out += &indent;
            out += &p.summary();
            out.push('\n');
            if let Rule::Sequence(left, right) = &p.rule {
                pending.push((depth + 1, right.as_ref()));
                pending.push((depth + 1, left.as_ref()));
            }
        }
        out
    }

    fn summary(&self) -> String {
        let flags = format!(
            "[{}, {}]",
            if self.optional { "optional" } else { "mandatory" },
            if self.discard { "discard" } else { "keep" },
        );
        match self.rule {
            Rule::Atomic => format!("{} {flags} /{}/", self.name(), self.pattern()),
            Rule::Sequence(..) => format!("{} {flags}", self.name()),
        }
    }
}

// unlink sequences iteratively, a recursive drop of a long chain overflows the stack
impl Drop for Parser {
    fn drop(&mut self) {
        let mut orphans = Vec::new();
        if let Rule::Sequence(left, right) = mem::replace(&mut self.rule, Rule::Atomic) {
            orphans.push(left);
            orphans.push(right);
        }
        while let Some(operand) = orphans.pop() {
            if let Ok(mut p) = Arc::try_unwrap(operand) {
                if let Rule::Sequence(left, right) = mem::replace(&mut p.rule, Rule::Atomic) {
                    orphans.push(left);
                    orphans.push(right);
                }
            }
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Parser")
            .field("name", &self.name())
            .field("pattern", &self.pattern())
            .field("optional", &self.optional)
            .field("discard", &self.discard)
            .field("atomic", &self.is_atomic())
            .finish()
    }
}

impl<'b> BitAnd<&'b Parser> for &Parser {
    type Output = Parser;

    #[inline]
    fn bitand(self, rhs: &'b Parser) -> Parser {
        self.and(rhs)
    }
}
