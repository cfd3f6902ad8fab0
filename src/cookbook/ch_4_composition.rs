//! Small grammars are parsers too, so they compose like atoms.
//!
//! Build a piece once, then reuse the same value in as many larger
//! grammars as needed. Operands are shared, not copied.
use crate::prelude::*;

pub struct PointGrammar {
    pub point: Parser,
    pub segment: Parser,
}

impl PointGrammar {
    /// `(x, y)` and `(x, y) -> (x, y)`
    pub fn new() -> Result<Self, PatternError> {
        let open = Parser::with_flags(r"\(", false, true)?.named("(");
        let close = Parser::with_flags(r"\)", false, true)?.named(")");
        let arrow = Parser::with_flags("->", false, true)?.named("->");

        let point = open
            .and(&rc::decimal())
            .and(&rc::comma())
            .and(&rc::decimal())
            .and(&close)
            .named("point");
        let segment = point.and(&arrow).and(&point).named("segment");
        Ok(Self { point, segment })
    }
}
